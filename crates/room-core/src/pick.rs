//! Pointer picking: screen point to world ray, ray against tagged bounds,
//! hits to actions.

use crate::config::ProjectEntry;
use crate::state::{CameraPose, Projection};
use glam::{Vec2, Vec3, Vec4};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Cast from `camera` through a normalized-device-coordinate point.
    pub fn from_ndc(ndc: Vec2, camera: &CameraPose, projection: &Projection) -> Self {
        let inv = (projection.projection_matrix() * camera.view_matrix()).inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near: Vec3 = p_near.truncate() / p_near.w;
        let far: Vec3 = p_far.truncate() / p_far.w;
        Self {
            origin: camera.position,
            direction: (far - near).normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Map a viewport pixel position to normalized device coordinates (+Y up).
#[inline]
pub fn pointer_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    /// Slab test; returns the entry distance along the ray (0 when starting inside).
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d.abs() < 1e-8 {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }
}

/// Stable tag of an interactive scene node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickTag {
    Book,
    Switch,
    Project(usize),
}

impl PickTag {
    /// Tag for a node from the room manifest, if it is interactive.
    pub fn from_node_name(name: &str) -> Option<Self> {
        match name {
            "Book" | "Book001" => Some(PickTag::Book),
            "SwitchBoard" | "Switch" => Some(PickTag::Switch),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pickable {
    pub tag: PickTag,
    pub bounds: Aabb,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub tag: PickTag,
    pub distance: f32,
}

/// Every intersected pickable, nearest first.
pub fn cast(ray: &Ray, pickables: &[Pickable]) -> SmallVec<[Hit; 4]> {
    let mut hits: SmallVec<[Hit; 4]> = pickables
        .iter()
        .filter_map(|p| {
            p.bounds.intersect(ray).map(|distance| Hit {
                tag: p.tag,
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickAction {
    EnterAbout,
    ToggleTheme,
    Open(String),
}

/// Translate hits into actions. Every tagged hit along the ray contributes,
/// but each distinct action fires at most once per click so stacked geometry
/// (book and cover, switch and plate) cannot double-trigger.
pub fn resolve(hits: &[Hit], projects: &[ProjectEntry]) -> SmallVec<[PickAction; 4]> {
    let mut actions: SmallVec<[PickAction; 4]> = SmallVec::new();
    for hit in hits {
        let action = match hit.tag {
            PickTag::Book => Some(PickAction::EnterAbout),
            PickTag::Switch => Some(PickAction::ToggleTheme),
            PickTag::Project(i) => projects
                .get(i)
                .and_then(|p| p.url.clone())
                .map(PickAction::Open),
        };
        if let Some(action) = action {
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
    }
    actions
}
