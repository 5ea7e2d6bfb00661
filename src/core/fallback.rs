use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

// Drift and burst tuning for the 2D fallback simulation.
const BASE_SPEED: f32 = 0.6;
const TENSION_SPEED: f32 = 1.8;
const DRIFT_AMPLITUDE: f32 = 0.35;
const DRIFT_RATE_X: f32 = 0.8;
const DRIFT_RATE_Y: f32 = 0.6;
const EXPLOSION_DECAY: f32 = 0.9;
const EXPLOSION_THRESHOLD: f32 = 0.01;
const BURST_ACCEL: f32 = 1.5;
const BURST_DRAG: f32 = 0.92;
const RADIUS_TENSION_GAIN: f32 = 0.5;
const ALPHA_TENSION_GAIN: f32 = 0.4;

/// A single 2D point in the fallback view.
#[derive(Clone, Copy, Debug)]
pub struct Flake {
    pub pos: Vec2,
    pub vel: Vec2,
    pub burst: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub phase: f32,
}

impl Flake {
    /// Radius to draw at the given tension; grows slightly with tension.
    #[inline]
    pub fn draw_radius(&self, tension: f32) -> f32 {
        self.radius * (1.0 + tension.clamp(0.0, 1.0) * RADIUS_TENSION_GAIN)
    }

    /// Alpha to draw at the given tension, capped at 1.
    #[inline]
    pub fn draw_alpha(&self, tension: f32) -> f32 {
        (self.alpha * (1.0 + tension.clamp(0.0, 1.0) * ALPHA_TENSION_GAIN)).min(1.0)
    }
}

/// CPU particle simulator used when no GPU context is available.
#[derive(Clone, Debug)]
pub struct FallbackSim {
    pub flakes: Vec<Flake>,
    pub explosion: f32,
    width: f32,
    height: f32,
    time: f32,
}

impl FallbackSim {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let flakes = (0..count)
            .map(|_| Flake {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5),
                burst: Vec2::ZERO,
                radius: 0.8 + rng.gen::<f32>() * 1.8,
                alpha: 0.3 + rng.gen::<f32>() * 0.6,
                phase: rng.gen::<f32>() * TAU,
            })
            .collect();
        Self {
            flakes,
            explosion: 0.0,
            width,
            height,
            time: 0.0,
        }
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Adopt a new viewport size; flakes outside it wrap on the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Additive: pulses accumulate and are bounded only by decay.
    pub fn trigger(&mut self, pulse: f32) {
        if pulse > 0.0 && pulse.is_finite() {
            self.explosion += pulse;
        }
    }

    /// Advance one frame at the given visual tension (0..1).
    pub fn step(&mut self, dt_sec: f32, tension: f32) {
        self.time += dt_sec.max(0.0);
        let speed = BASE_SPEED + tension.clamp(0.0, 1.0) * TENSION_SPEED;
        let center = Vec2::new(self.width, self.height) * 0.5;
        let bursting = self.explosion > EXPLOSION_THRESHOLD;
        for f in &mut self.flakes {
            let drift = Vec2::new(
                (self.time * DRIFT_RATE_X + f.phase).sin(),
                (self.time * DRIFT_RATE_Y + f.phase).cos(),
            ) * DRIFT_AMPLITUDE;
            if bursting {
                let away = (f.pos - center).normalize_or_zero();
                f.burst += away * self.explosion * BURST_ACCEL;
            }
            f.pos += (f.vel + drift) * speed + f.burst;
            f.burst *= BURST_DRAG;
            wrap(&mut f.pos, f.radius, self.width, self.height);
        }
        self.explosion *= EXPLOSION_DECAY;
    }
}

#[inline]
fn wrap(pos: &mut Vec2, margin: f32, width: f32, height: f32) {
    if pos.x < -margin {
        pos.x = width + margin;
    } else if pos.x > width + margin {
        pos.x = -margin;
    }
    if pos.y < -margin {
        pos.y = height + margin;
    } else if pos.y > height + margin {
        pos.y = -margin;
    }
}
