use super::color::Rgb;
use super::constants::*;

/// Values pushed to the particle shader once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub tension: f32,
    pub explosion: f32,
    pub color: [f32; 3],
}

/// Per-view animation state, mutated in place once per frame.
///
/// `raw_tension` is the latest hand reading (0 = open, 1 = fist). The shader
/// sees `smoothed_tension`, which chases `1 - raw_tension`: an open hand
/// drives the mix factor toward 1.
#[derive(Clone, Debug)]
pub struct AnimationState {
    pub time: f32,
    pub raw_tension: f32,
    pub smoothed_tension: f32,
    pub explosion: f32,
    pub color: Rgb,
}

impl AnimationState {
    pub fn new(color: Rgb) -> Self {
        Self {
            time: 0.0,
            raw_tension: 0.0,
            smoothed_tension: 0.0,
            explosion: 0.0,
            color,
        }
    }

    /// Latest hand reading; last write wins.
    pub fn set_raw_tension(&mut self, tension: f32) {
        if tension.is_finite() {
            self.raw_tension = tension.clamp(0.0, 1.0);
        }
    }

    /// Raise the explosion energy to at least `pulse`. Never lowers it.
    pub fn trigger_explosion(&mut self, pulse: f32) {
        if pulse > 0.0 && pulse.is_finite() {
            self.explosion = self.explosion.max(pulse);
        }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Advance one display frame of `dt_sec` seconds.
    pub fn tick(&mut self, dt_sec: f32) {
        self.time += dt_sec.max(0.0);
        let target = 1.0 - self.raw_tension;
        self.smoothed_tension += (target - self.smoothed_tension) * TENSION_SMOOTHING;
        if self.explosion > 0.0 {
            self.explosion *= EXPLOSION_DECAY;
            if self.explosion < EXPLOSION_FLOOR {
                self.explosion = 0.0;
            }
        }
    }

    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            time: self.time,
            tension: self.smoothed_tension,
            explosion: self.explosion,
            color: self.color.0,
        }
    }
}
