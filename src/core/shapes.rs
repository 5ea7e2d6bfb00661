use super::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Target silhouette the particles morph toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Sphere,
    Heart,
    Flower,
    Saturn,
    Buddha,
    Fireworks,
}

impl Shape {
    /// Picker order used by the host controls and the digit shortcuts.
    pub const ALL: [Shape; 6] = [
        Shape::Heart,
        Shape::Flower,
        Shape::Saturn,
        Shape::Buddha,
        Shape::Fireworks,
        Shape::Sphere,
    ];

    /// Parse a shape tag. Unknown tags fall back to [`Shape::Sphere`].
    pub fn from_name(name: &str) -> Shape {
        match name.trim().to_ascii_lowercase().as_str() {
            "sphere" => Shape::Sphere,
            "heart" => Shape::Heart,
            "flower" => Shape::Flower,
            "saturn" => Shape::Saturn,
            "buddha" => Shape::Buddha,
            "fireworks" => Shape::Fireworks,
            _ => Shape::Sphere,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Sphere => "sphere",
            Shape::Heart => "heart",
            Shape::Flower => "flower",
            Shape::Saturn => "saturn",
            Shape::Buddha => "buddha",
            Shape::Fireworks => "fireworks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Shape::Sphere => "Sphere",
            Shape::Heart => "Heart",
            Shape::Flower => "Flower",
            Shape::Saturn => "Saturn",
            Shape::Buddha => "Buddha",
            Shape::Fireworks => "Fireworks",
        }
    }

    /// Digit shortcut "1".."6" mapped onto [`Shape::ALL`].
    #[inline]
    pub fn for_digit(key: &str) -> Option<Shape> {
        let digit = key.parse::<usize>().ok()?;
        digit
            .checked_sub(1)
            .and_then(|i| Shape::ALL.get(i).copied())
    }
}

/// Split of a saturn cloud into `(core, ring)` point counts.
#[inline]
pub fn saturn_split(count: usize) -> (usize, usize) {
    let ring = (count as f32 * SATURN_RING_SHARE).floor() as usize;
    (count - ring, ring)
}

/// Split of a buddha cloud into `(head, body, base)` point counts.
#[inline]
pub fn buddha_split(count: usize) -> (usize, usize, usize) {
    let head = (count as f32 * BUDDHA_HEAD_SHARE).floor() as usize;
    let body = (count as f32 * BUDDHA_BODY_SHARE).floor() as usize;
    (head, body, count - head - body)
}

/// Generate `count` target points for `shape` as a flat `[x, y, z, ...]`
/// buffer of exactly `count * 3` floats.
pub fn generate<R: Rng + ?Sized>(shape: Shape, count: usize, rng: &mut R) -> Vec<f32> {
    let points = match shape {
        Shape::Sphere => sphere(count, rng),
        Shape::Heart => heart(count, rng),
        Shape::Flower => flower(count),
        Shape::Saturn => saturn(count, rng),
        Shape::Buddha => buddha(count, rng),
        Shape::Fireworks => fireworks(count, rng),
    };
    debug_assert_eq!(points.len(), count);
    points.iter().flat_map(|p| p.to_array()).collect()
}

/// Uniform point inside the unit ball: uniform direction, cube-root radius.
pub fn unit_ball_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = rng.gen::<f32>().cbrt();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

fn sphere<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| unit_ball_point(rng) * SPHERE_RADIUS)
        .collect()
}

fn heart<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let u = rng.gen::<f32>() * TAU;
            let v = rng.gen::<f32>() * PI;
            let surface = Vec3::new(
                (u.sin() * v.sin()).powi(3),
                0.8 * v.cos() - 0.3 * (2.0 * v).cos() - 0.1 * (3.0 * v).cos()
                    - 0.05 * (4.0 * v).cos(),
                u.cos() * v.sin(),
            );
            let thickness = HEART_JITTER_MIN + rng.gen::<f32>() * HEART_JITTER_SPAN;
            surface * HEART_SCALE + unit_ball_point(rng) * thickness
        })
        .collect()
}

fn flower(count: usize) -> Vec<Vec3> {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let golden_angle = TAU * (1.0 - 1.0 / phi);
    let n = count.max(1) as f32;
    (0..count)
        .map(|i| {
            let t = i as f32 / n;
            let angle = i as f32 * golden_angle;
            let radius = t.sqrt() * FLOWER_RADIUS;
            let height = (angle * FLOWER_PETALS).sin() * FLOWER_PETAL_HEIGHT
                + (t - 0.5) * FLOWER_CUP_RAMP;
            Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
        })
        .collect()
}

fn saturn<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let (core, ring) = saturn_split(count);
    let mut points = Vec::with_capacity(count);
    points.extend((0..core).map(|_| unit_ball_point(rng) * SATURN_CORE_RADIUS));
    points.extend((0..ring).map(|_| {
        let angle = rng.gen::<f32>() * TAU;
        let radius = SATURN_RING_INNER + rng.gen::<f32>() * SATURN_RING_WIDTH;
        let y = (rng.gen::<f32>() - 0.5) * SATURN_RING_THICKNESS;
        Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
    }));
    points
}

fn buddha<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let (head, body, base) = buddha_split(count);
    let mut points = Vec::with_capacity(count);
    points.extend((0..head).map(|_| unit_ball_point(rng) * 0.6 + Vec3::new(0.0, 1.5, 0.0)));
    points.extend(
        (0..body).map(|_| unit_ball_point(rng) * Vec3::new(1.2, 1.5, 1.2) + Vec3::new(0.0, 0.3, 0.0)),
    );
    points.extend((0..base).map(|_| {
        let angle = rng.gen::<f32>() * TAU;
        let radius = 0.5 + rng.gen::<f32>() * 0.8;
        let y = -1.2 + (rng.gen::<f32>() - 0.5) * 0.4;
        Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
    }));
    points
}

fn fireworks<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let theta = rng.gen::<f32>() * TAU;
            let phi = rng.gen::<f32>() * PI;
            let radius = rng.gen::<f32>().powf(FIREWORKS_SHELL_BIAS) * FIREWORKS_RADIUS;
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}
