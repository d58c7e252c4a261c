// Host-side tests for the keyed tween timeline.

use glam::Vec3;
use room_core::tween::{Ease, Value};
use room_core::{CameraPose, FollowUp, LightId, Property, SceneState, Timeline, Tween};

fn state() -> SceneState {
    SceneState::new(CameraPose::new(Vec3::new(1.0, 0.5, 0.5), Vec3::ZERO))
}

fn room_intensity(state: &SceneState) -> f32 {
    state.lights.get(LightId::Room).map(|l| l.intensity).unwrap()
}

const ROOM: Property = Property::LightIntensity(LightId::Room);

#[test]
fn tween_lands_exactly_on_target() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.animate(ROOM, Tween::to(7.0, 1.0));
    tl.advance(0.5, &mut s);
    let mid = room_intensity(&s);
    assert!(mid > 2.5 && mid < 7.0);
    tl.advance(0.5, &mut s);
    assert_eq!(room_intensity(&s), 7.0);
    assert!(!tl.is_animating(&ROOM));
    assert!(tl.is_idle());
}

#[test]
fn last_started_tween_wins() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.animate(ROOM, Tween::to(10.0, 1.0));
    tl.advance(0.5, &mut s);
    tl.animate(ROOM, Tween::to(0.0, 1.0));
    assert_eq!(tl.active_tweens(), 1);
    tl.advance(1.0, &mut s);
    assert_eq!(room_intensity(&s), 0.0);
    // the superseded tween never writes again
    tl.advance(1.0, &mut s);
    assert_eq!(room_intensity(&s), 0.0);
}

#[test]
fn delayed_tween_captures_start_value_when_delay_elapses() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.animate(ROOM, Tween::to(1.0, 1.0).delay(1.0));
    tl.advance(0.5, &mut s);
    assert_eq!(room_intensity(&s), 2.5);

    // someone else moves the value while we wait
    s.lights.get_mut(LightId::Room).unwrap().intensity = 5.0;
    tl.advance(0.5, &mut s);
    assert_eq!(room_intensity(&s), 5.0);

    tl.advance(0.5, &mut s);
    let v = room_intensity(&s);
    assert!(v < 5.0 && v > 1.0, "expected a blend from 5.0, got {v}");
    tl.advance(0.5, &mut s);
    assert_eq!(room_intensity(&s), 1.0);
}

#[test]
fn zero_duration_tween_snaps_on_next_step() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.animate(ROOM, Tween::to(3.0, 0.0));
    tl.advance(0.0, &mut s);
    assert_eq!(room_intensity(&s), 3.0);
    assert!(tl.is_idle());
}

#[test]
fn set_cancels_pending_tween() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.animate(ROOM, Tween::to(9.0, 1.0));
    tl.set(&mut s, ROOM, 4.0);
    assert!(!tl.is_animating(&ROOM));
    tl.advance(1.0, &mut s);
    assert_eq!(room_intensity(&s), 4.0);
}

#[test]
fn tween_on_missing_target_is_dropped() {
    let mut s = state();
    let mut tl = Timeline::new();
    assert!(s.book_cover.is_none());
    tl.animate(Property::BookCoverAngle, Tween::to(1.0, 1.0));
    tl.advance(0.1, &mut s);
    assert!(!tl.is_animating(&Property::BookCoverAngle));
    assert!(s.book_cover.is_none());
}

#[test]
fn vector_properties_interpolate() {
    let mut s = state();
    let mut tl = Timeline::new();
    let target = Vec3::new(2.0, 1.0, -1.0);
    tl.animate(Property::CameraPosition, Tween::to(target, 2.0).ease(Ease::Linear));
    tl.advance(1.0, &mut s);
    let expected = Vec3::new(1.0, 0.5, 0.5).lerp(target, 0.5);
    assert!((s.camera.position - expected).length() < 1e-5);
    tl.advance(1.0, &mut s);
    assert_eq!(s.camera.position, target);
}

#[test]
fn quad_out_front_loads_progress() {
    assert_eq!(Ease::QuadOut.apply(0.0), 0.0);
    assert_eq!(Ease::QuadOut.apply(0.5), 0.75);
    assert_eq!(Ease::QuadOut.apply(1.0), 1.0);
    assert_eq!(Ease::QuadOut.apply(2.0), 1.0);
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
}

#[test]
fn mismatched_values_jump_to_target() {
    let v = Value::Scalar(1.0).lerp(Value::Vec3(Vec3::ONE), 0.1);
    assert_eq!(v, Value::Vec3(Vec3::ONE));
    assert_eq!(Value::Scalar(2.0).as_scalar(), Some(2.0));
    assert_eq!(Value::Scalar(2.0).as_vec3(), None);
}

#[test]
fn follow_ups_fire_once_in_key_order() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.schedule(FollowUp::ShowCloseButton, 0.5);
    tl.schedule(FollowUp::EnableOrbit, 1.0);
    assert!(tl.advance(0.4, &mut s).is_empty());
    let fired = tl.advance(0.6, &mut s);
    assert_eq!(
        fired.as_slice(),
        &[FollowUp::EnableOrbit, FollowUp::ShowCloseButton]
    );
    assert!(tl.advance(1.0, &mut s).is_empty());
}

#[test]
fn cancelled_follow_up_never_fires() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.schedule(FollowUp::EnableOrbit, 1.0);
    tl.cancel_follow_up(FollowUp::EnableOrbit);
    assert!(!tl.is_pending(FollowUp::EnableOrbit));
    assert!(tl.advance(2.0, &mut s).is_empty());
}

#[test]
fn rescheduling_restarts_the_countdown() {
    let mut s = state();
    let mut tl = Timeline::new();
    tl.schedule(FollowUp::EnableOrbit, 1.0);
    tl.advance(0.6, &mut s);
    tl.schedule(FollowUp::EnableOrbit, 1.0);
    assert!(tl.advance(0.6, &mut s).is_empty());
    assert_eq!(
        tl.advance(0.5, &mut s).as_slice(),
        &[FollowUp::EnableOrbit]
    );
}

#[test]
fn remaining_counts_delay_and_duration() {
    let t = Tween::to(1.0, 1.5).delay(0.5);
    assert_eq!(t.remaining(), 2.0);
    assert_eq!(t.target(), Value::Scalar(1.0));
}
