// Host-side tests for pointer picking: NDC mapping, ray casts and action
// resolution.

use glam::{Vec2, Vec3};
use room_core::pick::{cast, pointer_to_ndc, resolve, Aabb, Hit};
use room_core::{default_projects, CameraPresets, PickAction, PickTag, Pickable, Projection, Ray};

fn unit_box() -> Aabb {
    Aabb::from_center_size(Vec3::ZERO, Vec3::ONE)
}

fn ray(origin: Vec3, direction: Vec3) -> Ray {
    Ray { origin, direction }
}

#[test]
fn pointer_to_ndc_maps_corners() {
    assert_eq!(pointer_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
}

#[test]
fn pointer_to_ndc_tolerates_empty_viewport() {
    let ndc = pointer_to_ndc(0.0, 0.0, 0.0, 0.0);
    assert!(ndc.is_finite());
}

#[test]
fn center_ray_follows_camera_forward() {
    let camera = CameraPresets::desktop().default;
    let r = Ray::from_ndc(Vec2::ZERO, &camera, &Projection::with_aspect(16.0 / 9.0));
    assert_eq!(r.origin, camera.position);
    assert!((r.direction - camera.forward()).length() < 1e-4);
    assert!((r.direction.length() - 1.0).abs() < 1e-5);
}

#[test]
fn off_center_rays_diverge() {
    let camera = CameraPresets::desktop().default;
    let proj = Projection::with_aspect(1.0);
    let left = Ray::from_ndc(Vec2::new(-0.5, 0.0), &camera, &proj);
    let right = Ray::from_ndc(Vec2::new(0.5, 0.0), &camera, &proj);
    assert!(left.direction.dot(right.direction) < 0.999);
}

#[test]
fn slab_test_reports_entry_distance() {
    let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let t = unit_box().intersect(&r).unwrap();
    assert!((t - 4.5).abs() < 1e-6);
    assert!((r.at(t) - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-6);
}

#[test]
fn slab_test_misses() {
    assert!(unit_box()
        .intersect(&ray(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z))
        .is_none());
    // pointing away
    assert!(unit_box()
        .intersect(&ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z))
        .is_none());
    // parallel to a slab, outside it
    assert!(unit_box()
        .intersect(&ray(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z))
        .is_none());
}

#[test]
fn ray_starting_inside_hits_at_zero() {
    let t = unit_box().intersect(&ray(Vec3::ZERO, Vec3::X)).unwrap();
    assert_eq!(t, 0.0);
}

#[test]
fn aabb_normalizes_corners() {
    let b = Aabb::new(Vec3::ONE, Vec3::NEG_ONE);
    assert_eq!(b.min, Vec3::NEG_ONE);
    assert_eq!(b.max, Vec3::ONE);
    assert_eq!(b.center(), Vec3::ZERO);
    assert_eq!(b.size(), Vec3::splat(2.0));
    assert_eq!(b.scaled(0.5).max, Vec3::splat(0.5));
}

#[test]
fn cast_returns_every_hit_nearest_first() {
    let pickables = [
        Pickable {
            tag: PickTag::Switch,
            bounds: Aabb::from_center_size(Vec3::new(0.0, 0.0, -3.0), Vec3::ONE),
        },
        Pickable {
            tag: PickTag::Book,
            bounds: Aabb::from_center_size(Vec3::new(0.0, 0.0, -1.0), Vec3::ONE),
        },
        Pickable {
            tag: PickTag::Project(0),
            bounds: Aabb::from_center_size(Vec3::new(5.0, 0.0, -1.0), Vec3::ONE),
        },
    ];
    let hits = cast(&ray(Vec3::new(0.0, 0.0, 2.0), Vec3::NEG_Z), &pickables);
    let tags: Vec<PickTag> = hits.iter().map(|h| h.tag).collect();
    assert_eq!(tags, vec![PickTag::Book, PickTag::Switch]);
    assert!(hits[0].distance < hits[1].distance);
}

#[test]
fn resolve_fires_each_action_once() {
    let projects = default_projects();
    let hit = |tag, distance| Hit { tag, distance };
    let actions = resolve(
        &[
            hit(PickTag::Book, 1.0),
            hit(PickTag::Book, 1.1),
            hit(PickTag::Switch, 2.0),
            hit(PickTag::Switch, 2.1),
            hit(PickTag::Project(1), 3.0),
        ],
        &projects,
    );
    assert_eq!(
        actions.as_slice(),
        &[
            PickAction::EnterAbout,
            PickAction::ToggleTheme,
            PickAction::Open(projects[1].url.clone().unwrap()),
        ]
    );
}

#[test]
fn projects_without_url_resolve_to_nothing() {
    let projects = default_projects();
    assert!(projects[4].url.is_none());
    let actions = resolve(
        &[Hit {
            tag: PickTag::Project(4),
            distance: 1.0,
        }],
        &projects,
    );
    assert!(actions.is_empty());

    // unknown index
    let actions = resolve(
        &[Hit {
            tag: PickTag::Project(99),
            distance: 1.0,
        }],
        &projects,
    );
    assert!(actions.is_empty());
}

#[test]
fn node_names_map_to_tags() {
    assert_eq!(PickTag::from_node_name("Book"), Some(PickTag::Book));
    assert_eq!(PickTag::from_node_name("Book001"), Some(PickTag::Book));
    assert_eq!(PickTag::from_node_name("SwitchBoard"), Some(PickTag::Switch));
    assert_eq!(PickTag::from_node_name("Switch"), Some(PickTag::Switch));
    assert_eq!(PickTag::from_node_name("Desk"), None);
}
