use crate::config::OrbitLimits;
use crate::state::CameraPose;
use glam::Vec3;
use std::f32::consts::TAU;

// Keeps the polar angle off the poles so look-at stays well defined.
const POLE_EPSILON: f32 = 1e-4;

/// Orbit-style camera control around a fixed target: drag to rotate, wheel to
/// zoom, no panning.
#[derive(Clone, Copy, Debug)]
pub struct OrbitController {
    pub limits: OrbitLimits,
}

/// Camera offset from the orbit target in spherical form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from +Y.
    pub polar: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    pub azimuth: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return Self {
                radius: 0.0,
                polar: 0.0,
                azimuth: 0.0,
            };
        }
        Self {
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let s = self.polar.sin() * self.radius;
        Vec3::new(
            s * self.azimuth.sin(),
            self.polar.cos() * self.radius,
            s * self.azimuth.cos(),
        )
    }
}

impl OrbitController {
    pub fn new(limits: OrbitLimits) -> Self {
        Self { limits }
    }

    /// Convert a pointer drag in pixels into (azimuth, polar) deltas.
    pub fn drag_to_angles(dx_px: f32, dy_px: f32, viewport_height_px: f32) -> (f32, f32) {
        let h = viewport_height_px.max(1.0);
        (-TAU * dx_px / h, -TAU * dy_px / h)
    }

    pub fn spherical(&self, pose: &CameraPose) -> Spherical {
        Spherical::from_offset(pose.position - self.limits.target)
    }

    /// Rotate `pose` around the target, honoring every limit.
    pub fn rotate(&self, pose: &mut CameraPose, d_azimuth: f32, d_polar: f32) {
        let mut s = self.spherical(pose);
        s.azimuth += d_azimuth;
        s.polar += d_polar;
        self.apply(pose, s);
    }

    /// Scale the orbit radius by `factor` (<1 moves closer).
    pub fn zoom(&self, pose: &mut CameraPose, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let mut s = self.spherical(pose);
        s.radius *= factor;
        self.apply(pose, s);
    }

    fn apply(&self, pose: &mut CameraPose, mut s: Spherical) {
        let l = &self.limits;
        s.azimuth = s.azimuth.clamp(l.min_azimuth, l.max_azimuth);
        s.polar = s.polar.clamp(
            l.min_polar.max(POLE_EPSILON),
            l.max_polar.min(std::f32::consts::PI - POLE_EPSILON),
        );
        s.radius = s.radius.clamp(l.min_distance, l.max_distance);
        let eye = l.target + s.to_offset();
        *pose = CameraPose::looking_at(eye, l.target);
    }
}
