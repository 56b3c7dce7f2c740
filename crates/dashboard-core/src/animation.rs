//! Decorative animation: falling hearts and the scan spinner.
//!
//! Only positions and angles live here; drawing is left to the frontend.

use std::f32::consts::{FRAC_PI_4, TAU};
use std::ops::RangeInclusive;

use rand::Rng;

/// Hearts kept on screen at all times.
pub const HEART_POPULATION: usize = 10;

const SPAWN_SIZE: RangeInclusive<f32> = 5.0..=10.0;
const RESPAWN_SIZE: RangeInclusive<f32> = 5.0..=8.0;
const FALL_SPEED: RangeInclusive<f32> = 1.0..=3.0;

/// Points used to trace one heart outline.
pub const HEART_OUTLINE_POINTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Pixels per tick.
    pub speed: f32,
}

impl Heart {
    /// Outline centred on the heart's position, in screen coordinates (y down).
    pub fn outline(&self) -> Vec<(f32, f32)> {
        heart_outline(self.x, self.y, self.size)
    }
}

/// Parametric heart curve scaled so `size` is roughly the half-width.
pub fn heart_outline(x: f32, y: f32, size: f32) -> Vec<(f32, f32)> {
    let scale = size / 12.0;
    (0..HEART_OUTLINE_POINTS)
        .map(|i| {
            let t = TAU * i as f32 / HEART_OUTLINE_POINTS as f32;
            let px = 16.0 * t.sin().powi(3);
            let py = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            (x + px * scale, y - py * scale)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct HeartField {
    hearts: Vec<Heart>,
    population: usize,
}

impl HeartField {
    pub fn new(population: usize) -> Self {
        Self {
            hearts: Vec::with_capacity(population),
            population,
        }
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Top up to the target population, scattered anywhere on screen.
    pub fn fill<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        while self.hearts.len() < self.population {
            self.hearts.push(Heart {
                x: rng.gen_range(0.0..=width.max(0.0)),
                y: rng.gen_range(0.0..=height.max(0.0)),
                size: rng.gen_range(SPAWN_SIZE),
                speed: rng.gen_range(FALL_SPEED),
            });
        }
    }

    /// Advance every heart; any that fell past the bottom restarts at the top.
    pub fn tick<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.fill(width, height, rng);
        for heart in &mut self.hearts {
            heart.y += heart.speed;
            if heart.y > height {
                *heart = Heart {
                    x: rng.gen_range(0.0..=width.max(0.0)),
                    y: 0.0,
                    size: rng.gen_range(RESPAWN_SIZE),
                    speed: rng.gen_range(FALL_SPEED),
                };
            }
        }
    }
}

impl Default for HeartField {
    fn default() -> Self {
        Self::new(HEART_POPULATION)
    }
}

/// Radians added per tick.
pub const SPINNER_STEP: f32 = 0.1;
pub const SPINNER_SEGMENTS: usize = 8;
pub const SPINNER_RADIUS: f32 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spinner {
    angle: f32,
}

impl Spinner {
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self) {
        self.angle += SPINNER_STEP;
        if self.angle >= TAU {
            self.angle -= TAU;
        }
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }

    /// End points of the spokes radiating from `(cx, cy)`.
    pub fn spokes(&self, cx: f32, cy: f32) -> [(f32, f32); SPINNER_SEGMENTS] {
        std::array::from_fn(|i| {
            let a = self.angle + i as f32 * FRAC_PI_4;
            (cx + a.cos() * SPINNER_RADIUS, cy + a.sin() * SPINNER_RADIUS)
        })
    }
}
