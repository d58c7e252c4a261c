//! Animated "connected dots" wall texture.
//!
//! A fixed set of particles drifts inside a square RGBA raster. Each call to
//! [`ParticleField::advance`] repaints the raster in place (gradient, dots,
//! links) and then moves every particle one fixed step. Motion is tied to
//! frames, not wall-clock time.

use crate::config::ParticleSettings;
use crate::constants::{PARTICLE_DOT_ALPHA, PARTICLE_LINK_ALPHA, WALL_GRADIENT};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

pub struct ParticleField {
    settings: ParticleSettings,
    particles: Vec<Particle>,
    // one RGBA color per row, computed once
    gradient_rows: Vec<[u8; 4]>,
    pixels: Vec<u8>,
    dirty: bool,
}

impl ParticleField {
    pub fn new(settings: ParticleSettings, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = settings.canvas_size as f32;
        let particles = (0..settings.count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * size, rng.gen::<f32>() * size),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * settings.speed_span,
                    (rng.gen::<f32>() - 0.5) * settings.speed_span,
                ),
                radius: settings.radius_min + rng.gen::<f32>() * settings.radius_span,
            })
            .collect();
        Self::with_particles(settings, particles)
    }

    /// Build a field from explicit particles; positions are clamped into the canvas.
    pub fn with_particles(settings: ParticleSettings, mut particles: Vec<Particle>) -> Self {
        let size = settings.canvas_size.max(1);
        let edge = size as f32;
        for p in &mut particles {
            p.position = p.position.clamp(Vec2::ZERO, Vec2::splat(edge));
        }
        let gradient_rows = (0..size)
            .map(|y| {
                let t = if size > 1 {
                    y as f32 / (size - 1) as f32
                } else {
                    0.0
                };
                let [r, g, b] = gradient_at(t);
                [r, g, b, 255]
            })
            .collect();
        Self {
            settings: ParticleSettings {
                canvas_size: size,
                ..settings
            },
            particles,
            gradient_rows,
            pixels: vec![0; (size as usize) * (size as usize) * 4],
            dirty: false,
        }
    }

    pub fn size(&self) -> u32 {
        self.settings.canvas_size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Tightly packed RGBA8 rows, `size * size * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        let i = ((y * self.size() + x) * 4) as usize;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the raster changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Paint the current frame, then step every particle once.
    pub fn advance(&mut self) {
        self.paint_background();
        self.paint_dots();
        self.paint_links();
        self.integrate();
        self.dirty = true;
    }

    fn paint_background(&mut self) {
        let row_bytes = self.size() as usize * 4;
        for (row, color) in self
            .pixels
            .chunks_exact_mut(row_bytes)
            .zip(self.gradient_rows.iter())
        {
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(color);
            }
        }
    }

    fn paint_dots(&mut self) {
        let size = self.size() as i32;
        for i in 0..self.particles.len() {
            let p = self.particles[i];
            let reach = p.radius + 0.5;
            let x0 = ((p.position.x - reach).floor() as i32).max(0);
            let x1 = ((p.position.x + reach).ceil() as i32).min(size - 1);
            let y0 = ((p.position.y - reach).floor() as i32).max(0);
            let y1 = ((p.position.y + reach).ceil() as i32).min(size - 1);
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let coverage = (p.radius + 0.5 - center.distance(p.position)).clamp(0.0, 1.0);
                    if coverage > 0.0 {
                        self.blend_white(x, y, PARTICLE_DOT_ALPHA * coverage);
                    }
                }
            }
        }
    }

    fn paint_links(&mut self) {
        let max_d2 = self.settings.link_distance * self.settings.link_distance;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].position;
                let b = self.particles[j].position;
                if a.distance_squared(b) < max_d2 {
                    self.stroke(a, b, PARTICLE_LINK_ALPHA);
                }
            }
        }
    }

    // 1px DDA line with constant opacity
    fn stroke(&mut self, a: Vec2, b: Vec2, alpha: f32) {
        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        let step = delta / steps as f32;
        let mut last = None;
        for s in 0..=steps {
            let p = a + step * s as f32;
            let cell = (p.x.floor() as i32, p.y.floor() as i32);
            if last == Some(cell) {
                continue;
            }
            last = Some(cell);
            self.blend_white(cell.0, cell.1, alpha);
        }
    }

    fn blend_white(&mut self, x: i32, y: i32, alpha: f32) {
        let size = self.size() as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            return;
        }
        let i = ((y * size + x) * 4) as usize;
        for c in &mut self.pixels[i..i + 3] {
            let v = *c as f32;
            *c = (v + (255.0 - v) * alpha).round().min(255.0) as u8;
        }
    }

    fn integrate(&mut self) {
        let edge = self.size() as f32;
        for p in &mut self.particles {
            p.position += p.velocity;
            reflect_axis(&mut p.position.x, &mut p.velocity.x, edge);
            reflect_axis(&mut p.position.y, &mut p.velocity.y, edge);
        }
    }
}

// Mirror the overshoot back inside [0, edge] and flip the velocity sign.
fn reflect_axis(pos: &mut f32, vel: &mut f32, edge: f32) {
    if *pos < 0.0 {
        *pos = (-*pos).min(edge);
        *vel = -*vel;
    } else if *pos > edge {
        *pos = (2.0 * edge - *pos).max(0.0);
        *vel = -*vel;
    }
}

/// Sample the wall gradient at `t` in [0, 1] (0 = top row).
pub fn gradient_at(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    for pair in WALL_GRADIENT.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f).round() as u8;
            return [mix(c0[0], c1[0]), mix(c0[1], c1[1]), mix(c0[2], c1[2])];
        }
    }
    WALL_GRADIENT[WALL_GRADIENT.len() - 1].1
}
