// Host-side tests for the CPU half of the scene pass: cube mesh, draw list
// ordering and uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/render/scene.rs"]
mod scene;

use glam::{Mat4, Vec3};
use room_core::constants::*;
use room_core::{Presenter, Projection, RoomConfig, SceneGraph, TextId};
use scene::*;

const ROOM_JSON: &str = include_str!("../assets/models/room.json");

fn loaded() -> (Presenter, SceneGraph) {
    let graph = SceneGraph::from_json(ROOM_JSON).unwrap();
    let mut p = Presenter::new(RoomConfig::default());
    p.attach_scene(&graph);
    for id in WALL_TEXTS {
        p.attach_text(id);
    }
    (p, graph)
}

fn no_images(p: &Presenter) -> Vec<bool> {
    vec![false; p.config().projects.len()]
}

fn settle(p: &mut Presenter) {
    for _ in 0..600 {
        p.advance(1.0 / 60.0);
    }
}

#[test]
fn unit_cube_faces_point_outward() {
    let verts = unit_cube_vertices();
    assert_eq!(verts.len(), 36);
    for tri in verts.chunks_exact(3) {
        let a = Vec3::from(tri[0].position);
        let b = Vec3::from(tri[1].position);
        let c = Vec3::from(tri[2].position);
        let n = Vec3::from(tri[0].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
        for v in tri {
            assert!(Vec3::from(v.position).abs().max_element() <= 0.5 + 1e-6);
        }
    }
}

#[test]
fn without_a_scene_only_texts_are_drawn() {
    let (p, _) = loaded();
    let list = build_draw_list(p.state(), None, &p.config().layout, &no_images(&p));
    assert_eq!(list.instances.len(), WALL_TEXTS.len());
    assert_eq!(list.blended(), 0);
}

#[test]
fn default_view_draws_room_and_texts_opaque() {
    let (p, graph) = loaded();
    let list = build_draw_list(p.state(), Some(&graph), &p.config().layout, &no_images(&p));
    assert_eq!(list.opaque as usize, graph.len() + WALL_TEXTS.len());
    assert_eq!(list.blended(), 0);

    let wall = graph.nodes().iter().position(|n| n.name == "Wall").unwrap();
    assert_eq!(list.instances[wall].params[0], 1.0);
    let desk = graph.nodes().iter().position(|n| n.name == "Desk").unwrap();
    assert_eq!(list.instances[desk].params[0], 0.0);
}

#[test]
fn placards_are_blended_after_opaque_geometry() {
    let (mut p, graph) = loaded();
    p.enter_projects();
    settle(&mut p);
    let list = build_draw_list(p.state(), Some(&graph), &p.config().layout, &no_images(&p));
    let placards = p.state().placards.len();
    // captions join the opaque set
    assert_eq!(
        list.opaque as usize,
        graph.len() + WALL_TEXTS.len() + placards
    );
    assert_eq!(list.blended() as usize, placards);
    for inst in &list.instances[list.opaque as usize..] {
        assert_eq!(inst.color[3], 1.0);
        assert_eq!(inst.params[1], 1.0);
    }
}

#[test]
fn hidden_placards_are_skipped() {
    let (mut p, graph) = loaded();
    p.enter_projects();
    settle(&mut p);
    p.reset();
    settle(&mut p);
    let list = build_draw_list(p.state(), Some(&graph), &p.config().layout, &no_images(&p));
    assert_eq!(list.blended(), 0);
    assert_eq!(list.opaque as usize, graph.len() + WALL_TEXTS.len());
}

#[test]
fn open_book_moves_only_the_cover() {
    let (mut p, graph) = loaded();
    let closed = build_draw_list(p.state(), Some(&graph), &p.config().layout, &no_images(&p));
    p.enter_about().unwrap();
    settle(&mut p);
    let open = build_draw_list(p.state(), Some(&graph), &p.config().layout, &no_images(&p));

    let cover = graph.nodes().iter().position(|n| n.name == "Book001").unwrap();
    let book = graph.nodes().iter().position(|n| n.name == "Book").unwrap();
    assert_ne!(closed.instances[cover].model, open.instances[cover].model);
    assert_eq!(closed.instances[book], open.instances[book]);
}

fn node_index(graph: &SceneGraph, name: &str) -> usize {
    graph.nodes().iter().position(|n| n.name == name).unwrap()
}

fn center_of(inst: &Instance) -> Vec3 {
    Mat4::from_cols_array_2d(&inst.model).w_axis.truncate()
}

#[test]
fn fans_turn_in_place_as_time_passes() {
    let (mut p, graph) = loaded();
    assert_eq!(graph.fans().count(), 5);
    let before = build_draw_list(p.state(), Some(&graph), &p.config().layout, &no_images(&p));
    p.advance(0.1);
    let after = build_draw_list(p.state(), Some(&graph), &p.config().layout, &no_images(&p));

    for fan in graph.fans() {
        let i = node_index(&graph, &fan.name);
        assert_ne!(before.instances[i].model, after.instances[i].model);
        let drift = center_of(&after.instances[i]) - fan.bounds.center();
        assert!(drift.length() < 1e-5);
    }
    let case = node_index(&graph, "CPU");
    assert_eq!(before.instances[case], after.instances[case]);
}

#[test]
fn email_is_drawn_below_the_subtitle() {
    let (p, _) = loaded();
    let list = build_draw_list(p.state(), None, &p.config().layout, &no_images(&p));
    let email = WALL_TEXTS.iter().position(|id| *id == TextId::Email).unwrap();
    let inst = &list.instances[email];
    assert!((center_of(inst) - Vec3::new(-0.255, 0.46, 0.5)).length() < 1e-6);
    assert_eq!(inst.color[..3], SUBTITLE_COLORS_DAY[0]);
}

#[test]
fn placards_sample_their_own_image_layer_once_uploaded() {
    let (mut p, graph) = loaded();
    p.enter_projects();
    settle(&mut p);
    let mut ready = no_images(&p);
    ready[0] = true;
    ready[3] = true;
    let list = build_draw_list(p.state(), Some(&graph), &p.config().layout, &ready);

    let placards = &list.instances[list.opaque as usize..];
    assert_eq!(placards.len(), ready.len());
    for (i, inst) in placards.iter().enumerate() {
        assert_eq!(inst.params[3], i as f32);
        if ready[i] {
            assert_eq!(inst.params[2], 1.0);
            assert_eq!(inst.color[..3], [1.0; 3]);
        } else {
            assert_eq!(inst.params[2], 0.0);
            assert_ne!(inst.color[..3], [1.0; 3]);
        }
    }
}

#[test]
fn missing_ready_flags_fall_back_to_tints() {
    let (mut p, graph) = loaded();
    p.enter_projects();
    settle(&mut p);
    let list = build_draw_list(p.state(), Some(&graph), &p.config().layout, &[]);
    for inst in &list.instances[list.opaque as usize..] {
        assert_eq!(inst.params[2], 0.0);
    }
}

#[test]
fn uniforms_pack_point_lights_and_sum_ambient() {
    let (p, _) = loaded();
    let u = scene_uniforms(p.state(), &Projection::with_aspect(1.5));
    // room light, five fans, four wall-text washes
    assert_eq!(u.light_count[0], 10);
    let expected = AMBIENT_DAY;
    for c in &u.ambient[..3] {
        assert!((c - expected).abs() < 1e-6);
    }
    assert_eq!(u.camera_pos[..3], p.state().camera.position.to_array());
    assert_eq!(u.lights[0].color_intensity[3], ROOM_LIGHT_DAY);
    assert_eq!(u.lights[10].color_intensity, [0.0; 4]);
}

#[test]
fn uniform_block_layout_is_stable() {
    assert_eq!(std::mem::size_of::<Instance>(), 96);
    assert_eq!(std::mem::size_of::<LightPacked>(), 32);
    assert_eq!(
        std::mem::size_of::<SceneUniforms>(),
        64 + 16 * 3 + 32 * MAX_LIGHTS
    );
}
