//! CPU-side assembly of what the scene pass draws.
//!
//! Everything is an instanced unit cube: manifest nodes, wall lettering,
//! project placards and their captions. Building the per-frame draw list and
//! the uniform block touches no GPU API, so it is shared with host tests.

use glam::{Mat4, Quat, Vec3};
use room_core::manifest::{SceneGraph, SceneNode, Surface};
use room_core::{LightKind, PlacardLayout, Projection, SceneState, TextId};

pub const MAX_LIGHTS: usize = 16;

// Placards and captions are flat boxes this deep
const PANEL_THICKNESS: f32 = 0.002;
const TEXT_THICKNESS: f32 = 0.01;
// How much of the wall color bypasses lighting
const WALL_UNLIT: f32 = 0.6;
const CAPTION_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
// Shown until a placard's image has been uploaded
const PLACARD_TINTS: [[f32; 3]; 5] = [
    [0.93, 0.91, 0.86],
    [0.82, 0.89, 0.97],
    [0.88, 0.95, 0.86],
    [0.97, 0.86, 0.88],
    [0.9, 0.87, 0.97],
];

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x: particle texture mix, y: unlit mix, z: placard image mix,
    /// w: placard image layer.
    pub params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightPacked {
    pub pos_range: [f32; 4],
    pub color_intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    pub light_count: [u32; 4],
    pub lights: [LightPacked; MAX_LIGHTS],
}

/// Instances for one frame; opaque ones first, alpha-blended after.
#[derive(Default, Debug)]
pub struct DrawList {
    pub instances: Vec<Instance>,
    pub opaque: u32,
}

impl DrawList {
    pub fn blended(&self) -> u32 {
        self.instances.len() as u32 - self.opaque
    }
}

/// 36 vertices of a unit cube centered on the origin, outward normals.
pub fn unit_cube_vertices() -> Vec<Vertex> {
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::Z),
        (Vec3::Y, Vec3::NEG_Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::Z, Vec3::X),
        (Vec3::Z, Vec3::Y, Vec3::X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::NEG_X),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, up, right) in faces {
        let c = n * 0.5;
        let (u, r) = (up * 0.5, right * 0.5);
        let corners = [c - r - u, c + r - u, c + r + u, c - r + u];
        for i in [0, 1, 2, 0, 2, 3] {
            out.push(Vertex {
                position: corners[i].to_array(),
                normal: n.to_array(),
            });
        }
    }
    out
}

#[inline]
fn box_model(center: Vec3, size: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(size, Quat::IDENTITY, center)
}

// Spin `model` by `rotation` about `pivot`.
#[inline]
fn pivoted(model: Mat4, rotation: Quat, pivot: Vec3) -> Mat4 {
    Mat4::from_translation(pivot) * Mat4::from_quat(rotation) * Mat4::from_translation(-pivot) * model
}

fn node_instance(node: &SceneNode, model: Mat4) -> Instance {
    let textured = node.surface == Surface::ParticleWall;
    Instance {
        model: model.to_cols_array_2d(),
        color: node.color.extend(1.0).to_array(),
        params: if textured {
            [1.0, WALL_UNLIT, 0.0, 0.0]
        } else {
            [0.0; 4]
        },
    }
}

/// `images_ready[i]` is true once placard `i` has its image layer uploaded.
pub fn build_draw_list(
    state: &SceneState,
    graph: Option<&SceneGraph>,
    layout: &PlacardLayout,
    images_ready: &[bool],
) -> DrawList {
    let mut list = DrawList::default();

    if let Some(graph) = graph {
        let cover = graph.book_cover().map(|n| n.name.as_str());
        let switch = graph.light_switch().map(|n| n.name.as_str());
        for node in graph.nodes() {
            let b = node.bounds;
            let mut model = box_model(b.center(), b.size());
            if Some(node.name.as_str()) == cover {
                // hinge along the cover's back edge
                let pivot = Vec3::new(b.center().x, b.center().y, b.min.z);
                let angle = state.book_cover.unwrap_or(0.0);
                model = pivoted(model, Quat::from_rotation_x(angle), pivot);
            } else if Some(node.name.as_str()) == switch {
                let angle = state.light_switch.unwrap_or(0.0);
                model = pivoted(model, Quat::from_rotation_z(angle), b.center());
            } else if node.is_fan() {
                model = pivoted(model, Quat::from_rotation_z(state.fan_angle), b.center());
            }
            list.instances.push(node_instance(node, model));
        }
    }

    for text in &state.texts {
        // lettering runs along the side wall (+Z), facing +X
        let (center, [w, h]) = text.id.placement();
        list.instances.push(Instance {
            model: box_model(center, Vec3::new(TEXT_THICKNESS, h, w)).to_cols_array_2d(),
            color: text.faces[0].extend(1.0).to_array(),
            params: [0.0; 4],
        });
    }

    for placard in state.placards.iter().filter(|p| p.caption_visible) {
        let anchor = layout.caption_anchor(placard.position());
        let size = Vec3::new(layout.caption_size.x, layout.caption_size.y, PANEL_THICKNESS);
        list.instances.push(Instance {
            model: box_model(anchor, size).to_cols_array_2d(),
            color: [CAPTION_COLOR[0], CAPTION_COLOR[1], CAPTION_COLOR[2], 1.0],
            params: [0.0, 1.0, 0.0, 0.0],
        });
    }

    list.opaque = list.instances.len() as u32;

    for placard in state.placards.iter().filter(|p| !p.is_hidden()) {
        let size = Vec3::new(
            layout.size.x * placard.scale,
            layout.size.y * placard.scale,
            PANEL_THICKNESS,
        );
        let layer = placard.index as f32;
        let has_image = images_ready.get(placard.index).copied().unwrap_or(false);
        let (tint, image_mix) = if has_image {
            ([1.0; 3], 1.0)
        } else {
            (PLACARD_TINTS[placard.index % PLACARD_TINTS.len()], 0.0)
        };
        list.instances.push(Instance {
            model: box_model(placard.position(), size).to_cols_array_2d(),
            color: [tint[0], tint[1], tint[2], placard.opacity.clamp(0.0, 1.0)],
            params: [0.0, 1.0, image_mix, layer],
        });
    }
    list
}

/// Camera matrices and the light rig packed for the shader.
pub fn scene_uniforms(state: &SceneState, projection: &Projection) -> SceneUniforms {
    let view_proj = projection.projection_matrix() * state.camera.view_matrix();
    let mut ambient = Vec3::ZERO;
    let mut lights = [LightPacked {
        pos_range: [0.0; 4],
        color_intensity: [0.0; 4],
    }; MAX_LIGHTS];
    let mut count = 0usize;
    for light in state.lights.iter() {
        match light.kind {
            LightKind::Ambient => ambient += light.color * light.intensity,
            LightKind::Point => {
                if count == MAX_LIGHTS {
                    continue;
                }
                lights[count] = LightPacked {
                    pos_range: light.position.extend(light.distance).to_array(),
                    color_intensity: light.color.extend(light.intensity).to_array(),
                };
                count += 1;
            }
        }
    }
    SceneUniforms {
        view_proj: view_proj.to_cols_array_2d(),
        camera_pos: state.camera.position.extend(1.0).to_array(),
        ambient: ambient.extend(1.0).to_array(),
        light_count: [count as u32, 0, 0, 0],
        lights,
    }
}

/// Text ids drawn on the wall, in attach order.
pub const WALL_TEXTS: [TextId; 3] = [TextId::Title, TextId::Subtitle, TextId::Email];
