// Host-side tests for scene manifest parsing and the flattened scene graph.

use glam::Vec3;
use room_core::manifest::{BOOK_NODE, SWITCH_BOARD_NODE};
use room_core::{ManifestError, PickTag, SceneGraph, Surface};

const ROOM_JSON: &str = include_str!("../assets/models/room.json");
const CHAIR_JSON: &str = include_str!("../assets/models/chair.json");

#[test]
fn room_manifest_flattens_children() {
    let g = SceneGraph::from_json(ROOM_JSON).unwrap();
    assert!(!g.is_empty());
    let cover = g.book_cover().unwrap();
    assert_eq!(cover.name, "Book001");
    assert_eq!(cover.parent.as_deref(), Some(BOOK_NODE));
    let switch = g.light_switch().unwrap();
    assert_eq!(switch.name, "Switch");
    assert_eq!(switch.parent.as_deref(), Some(SWITCH_BOARD_NODE));
    assert!(g.find("Desk").unwrap().parent.is_none());
}

#[test]
fn only_the_wall_samples_particles() {
    let g = SceneGraph::from_json(ROOM_JSON).unwrap();
    let walls: Vec<&str> = g
        .nodes()
        .iter()
        .filter(|n| n.surface == Surface::ParticleWall)
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(walls, vec!["Wall"]);
}

#[test]
fn room_exposes_book_and_switch_pickables() {
    let g = SceneGraph::from_json(ROOM_JSON).unwrap();
    let picks = g.pickables();
    assert_eq!(picks.len(), 4);
    assert_eq!(picks.iter().filter(|p| p.tag == PickTag::Book).count(), 2);
    assert_eq!(picks.iter().filter(|p| p.tag == PickTag::Switch).count(), 2);
}

#[test]
fn case_fans_are_found_by_name_and_never_picked() {
    let g = SceneGraph::from_json(ROOM_JSON).unwrap();
    let fans: Vec<&str> = g.fans().map(|n| n.name.as_str()).collect();
    assert_eq!(fans, vec!["Fan", "Fan001", "Fan002", "Fan003", "Fan004"]);
    assert!(g.fans().all(|n| n.parent.as_deref() == Some("CPU")));
    assert!(!g.find("CPU").unwrap().is_fan());
    assert_eq!(g.pickables().len(), 4);
}

#[test]
fn missing_color_uses_default() {
    let g = SceneGraph::from_json(
        r#"{ "nodes": [ { "name": "Box", "min": [0, 0, 0], "max": [1, 1, 1] } ] }"#,
    )
    .unwrap();
    assert_eq!(g.nodes()[0].color, Vec3::splat(0.8));
    assert!(g.book_cover().is_none());
    assert!(g.light_switch().is_none());
}

#[test]
fn empty_manifest_is_rejected() {
    let err = SceneGraph::from_json(r#"{ "nodes": [] }"#).unwrap_err();
    assert!(matches!(err, ManifestError::Empty));
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = SceneGraph::from_json(
        r#"{ "nodes": [ { "name": "Bad", "min": [1, 0, 0], "max": [0, 1, 1] } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ManifestError::InvertedBounds(ref n) if n == "Bad"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        SceneGraph::from_json("{ nodes: ").unwrap_err(),
        ManifestError::Parse(_)
    ));
    assert!(matches!(
        SceneGraph::from_json(r#"{ "things": [] }"#).unwrap_err(),
        ManifestError::Parse(_)
    ));
}

#[test]
fn scale_multiplies_bounds() {
    let mut g = SceneGraph::from_json(ROOM_JSON).unwrap();
    let before = g.find("Plant").unwrap().bounds;
    g.scale(0.5);
    let after = g.find("Plant").unwrap().bounds;
    assert!((after.max - before.max * 0.5).length() < 1e-6);
    assert!((after.min - before.min * 0.5).length() < 1e-6);
}

#[test]
fn merged_decor_is_placed_and_never_pickable() {
    let mut g = SceneGraph::from_json(ROOM_JSON).unwrap();
    let room_nodes = g.len();
    let chair = SceneGraph::from_json(CHAIR_JSON).unwrap();
    let chair_nodes = chair.len();
    let seat = chair.find("Seat").unwrap().bounds;

    let offset = Vec3::new(0.55, -0.26, 0.75);
    g.merge_decor(chair, offset, 0.2);
    assert_eq!(g.len(), room_nodes + chair_nodes);
    let placed = g.find("Seat").unwrap();
    assert!(placed.decorative);
    assert!((placed.bounds.min - (seat.min * 0.2 + offset)).length() < 1e-6);
    assert_eq!(g.pickables().len(), 4);
}

#[test]
fn decor_named_like_a_prop_stays_inert() {
    let mut g = SceneGraph::from_json(ROOM_JSON).unwrap();
    let decoy = SceneGraph::from_json(
        r#"{ "nodes": [ { "name": "Book", "min": [0, 0, 0], "max": [1, 1, 1] } ] }"#,
    )
    .unwrap();
    g.merge_decor(decoy, Vec3::ZERO, 1.0);
    assert_eq!(g.pickables().len(), 4);
}
