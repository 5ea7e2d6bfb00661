use super::constants::*;
use super::shapes::{generate, Shape};
use glam::Vec3;
use rand::Rng;

/// One ghost copy of a logical particle.
///
/// `start` and `target` are fixed once uploaded; the GPU interpolates between
/// them every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub start: Vec3,
    pub target: Vec3,
    pub seed: f32,
    pub scale: f32,
    pub trail_index: u32,
}

impl Particle {
    /// Multiplier applied to the global tension for this trail copy.
    #[inline]
    pub fn lag_factor(&self) -> f32 {
        trail_lag_factor(self.trail_index)
    }
}

/// Multiplier on the global tension seen by a trail copy:
/// `1 - trail_index * 0.15 * 0.3`, so later copies converge more slowly.
#[inline]
pub fn trail_lag_factor(trail_index: u32) -> f32 {
    1.0 - trail_index as f32 * TRAIL_LAG_STEP * TRAIL_LAG_WEIGHT
}

/// Alpha multiplier for a trail copy; the lead copy is fully opaque.
#[inline]
pub fn trail_fade(trail_index: u32, trail_length: usize) -> f32 {
    let len = trail_length.max(1) as f32;
    1.0 - (trail_index as f32 / len) * TRAIL_FADE_SPAN
}

/// All ghost copies for one shape generation, laid out particle-major:
/// copy `t` of logical particle `i` lives at `i * trail_length + t`.
#[derive(Clone, Debug)]
pub struct ParticleBuffer {
    pub shape: Shape,
    pub count: usize,
    pub trail_length: usize,
    pub particles: Vec<Particle>,
}

impl ParticleBuffer {
    pub fn build<R: Rng + ?Sized>(
        shape: Shape,
        count: usize,
        trail_length: usize,
        rng: &mut R,
    ) -> Self {
        let trail_length = trail_length.max(1);
        let targets = generate(shape, count, rng);
        let mut particles = Vec::with_capacity(count * trail_length);
        for target in targets.chunks_exact(3) {
            let target = Vec3::from_slice(target);
            for t in 0..trail_length {
                particles.push(Particle {
                    start: random_start(rng),
                    target,
                    seed: rng.gen::<f32>(),
                    scale: POINT_SCALE_MIN + rng.gen::<f32>() * POINT_SCALE_SPAN,
                    trail_index: t as u32,
                });
            }
        }
        Self {
            shape,
            count,
            trail_length,
            particles,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn random_start<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let unit = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
    (unit - Vec3::splat(0.5)) * START_CLOUD_EXTENT
}
