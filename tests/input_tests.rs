// Host-side tests for pointer drag/click separation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/input.rs"]
mod input;

use glam::Vec2;
use input::*;

#[test]
fn small_motion_stays_a_click() {
    let mut d = DragState::default();
    d.press(Vec2::new(100.0, 100.0));
    assert_eq!(d.move_to(Vec2::new(102.0, 101.0)), None);
    assert!(d.release());
    assert!(!d.take_suppressed_click());
}

#[test]
fn motion_past_slop_becomes_a_drag() {
    let mut d = DragState::default();
    d.press(Vec2::ZERO);
    assert_eq!(d.move_to(Vec2::new(2.0, 0.0)), None);
    // delta is measured from the previous move, not the press
    assert_eq!(d.move_to(Vec2::new(10.0, 0.0)), Some(Vec2::new(8.0, 0.0)));
    assert_eq!(d.move_to(Vec2::new(10.0, 5.0)), Some(Vec2::new(0.0, 5.0)));
    assert!(d.dragging);
}

#[test]
fn finished_drag_suppresses_one_click() {
    let mut d = DragState::default();
    d.press(Vec2::ZERO);
    d.move_to(Vec2::new(CLICK_SLOP_PX * 3.0, 0.0));
    assert!(!d.release());
    assert!(d.take_suppressed_click());
    assert!(!d.take_suppressed_click());
}

#[test]
fn new_press_clears_stale_suppression() {
    let mut d = DragState::default();
    d.press(Vec2::ZERO);
    d.move_to(Vec2::new(50.0, 0.0));
    d.release();
    d.press(Vec2::ZERO);
    assert!(d.release());
    assert!(!d.take_suppressed_click());
}

#[test]
fn moves_without_press_are_ignored() {
    let mut d = DragState::default();
    assert_eq!(d.move_to(Vec2::new(50.0, 50.0)), None);
    assert!(!d.dragging);
    assert!(!d.release());
}
