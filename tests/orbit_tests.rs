// Host-side tests for the orbit camera limits.

use glam::Vec3;
use room_core::constants::*;
use room_core::orbit::Spherical;
use room_core::{CameraPresets, OrbitController, OrbitLimits};
use std::f32::consts::TAU;

fn controller() -> OrbitController {
    OrbitController::new(OrbitLimits::default())
}

#[test]
fn spherical_round_trips_offsets() {
    let offset = Vec3::new(1.0, 0.5, 0.5);
    let back = Spherical::from_offset(offset).to_offset();
    assert!((back - offset).length() < 1e-5);
}

#[test]
fn default_preset_is_inside_limits() {
    let c = controller();
    let s = c.spherical(&CameraPresets::desktop().default);
    assert!(s.radius >= ORBIT_MIN_DISTANCE && s.radius <= ORBIT_MAX_DISTANCE);
    assert!(s.azimuth >= ORBIT_MIN_AZIMUTH && s.azimuth <= ORBIT_MAX_AZIMUTH);
    assert!(s.polar >= ORBIT_MIN_POLAR && s.polar <= ORBIT_MAX_POLAR);
}

#[test]
fn zoom_clamps_distance() {
    let c = controller();
    let mut pose = CameraPresets::desktop().default;
    c.zoom(&mut pose, 100.0);
    assert!((c.spherical(&pose).radius - ORBIT_MAX_DISTANCE).abs() < 1e-4);
    c.zoom(&mut pose, 0.001);
    assert!((c.spherical(&pose).radius - ORBIT_MIN_DISTANCE).abs() < 1e-4);
}

#[test]
fn zoom_ignores_degenerate_factors() {
    let c = controller();
    let mut pose = CameraPresets::desktop().default;
    let before = pose;
    c.zoom(&mut pose, 0.0);
    c.zoom(&mut pose, f32::NAN);
    assert_eq!(pose, before);
}

#[test]
fn rotate_clamps_azimuth_and_polar() {
    let c = controller();
    let mut pose = CameraPresets::desktop().default;
    c.rotate(&mut pose, 10.0, 10.0);
    let s = c.spherical(&pose);
    assert!((s.azimuth - ORBIT_MAX_AZIMUTH).abs() < 1e-3);
    assert!((s.polar - ORBIT_MAX_POLAR).abs() < 1e-3);

    c.rotate(&mut pose, -10.0, -10.0);
    let s = c.spherical(&pose);
    assert!((s.azimuth - ORBIT_MIN_AZIMUTH).abs() < 1e-3);
    assert!((s.polar - ORBIT_MIN_POLAR).abs() < 1e-3);
}

#[test]
fn rotated_camera_faces_the_target() {
    let c = controller();
    let mut pose = CameraPresets::desktop().default;
    c.rotate(&mut pose, 0.3, -0.1);
    let to_target = (c.limits.target - pose.position).normalize();
    assert!((pose.forward() - to_target).length() < 1e-3);
}

#[test]
fn drag_to_angles_scales_by_viewport_height() {
    let (az, polar) = OrbitController::drag_to_angles(800.0, 0.0, 800.0);
    assert!((az + TAU).abs() < 1e-5);
    assert_eq!(polar, 0.0);
    let (az, polar) = OrbitController::drag_to_angles(0.0, -400.0, 800.0);
    assert_eq!(az, 0.0);
    assert!((polar - TAU * 0.5).abs() < 1e-5);
}
