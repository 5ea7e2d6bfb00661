// Host-side tests for the shape generators.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod shapes {
    include!("../src/core/shapes.rs");
}

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shapes::*;

const EPS: f32 = 1e-4;

fn points(shape: Shape, count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let flat = generate(shape, count, &mut rng);
    assert_eq!(flat.len(), count * 3);
    flat.chunks_exact(3).map(Vec3::from_slice).collect()
}

#[test]
fn every_shape_fills_exactly_count_times_three_finite_values() {
    let mut rng = StdRng::seed_from_u64(7);
    for shape in Shape::ALL {
        for count in [0usize, 1, 7, 1000] {
            let flat = generate(shape, count, &mut rng);
            assert_eq!(flat.len(), count * 3, "{:?} count={}", shape, count);
            assert!(
                flat.iter().all(|v| v.is_finite()),
                "{:?} produced a non-finite value",
                shape
            );
        }
    }
}

#[test]
fn sphere_points_stay_inside_radius_two() {
    for p in points(Shape::Sphere, 5000, 1) {
        assert!(p.length() <= 2.0 + EPS, "{:?} outside ball", p);
    }
}

#[test]
fn sphere_fills_the_volume_not_just_the_shell() {
    let pts = points(Shape::Sphere, 5000, 2);
    // Uniform volume: P(r < 1.6) = 0.8^3 ~ 0.51
    let inner = pts.iter().filter(|p| p.length() < 1.6).count() as f32 / pts.len() as f32;
    assert!(inner > 0.35 && inner < 0.7, "inner fraction {}", inner);
    let near_shell = pts.iter().filter(|p| p.length() > 1.99).count();
    assert!(near_shell < pts.len() / 10);
}

#[test]
fn heart_is_scaled_surface_plus_small_jitter() {
    for p in points(Shape::Heart, 3000, 3) {
        // |surface| <= sqrt(1 + 1.25^2 + 1) * 2 and jitter <= 0.4
        assert!(p.length() < 2.0 * 1.9 + 0.4 + EPS);
    }
}

#[test]
fn flower_follows_the_golden_angle_spiral() {
    let count = 1000;
    let pts = points(Shape::Flower, count, 0);
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let golden = std::f32::consts::TAU * (1.0 - 1.0 / phi);
    for (i, p) in pts.iter().enumerate().step_by(97) {
        let t = i as f32 / count as f32;
        let radius = t.sqrt() * 2.0;
        let xz = (p.x * p.x + p.z * p.z).sqrt();
        assert!((xz - radius).abs() < 1e-3, "radius at {}", i);
        let angle = i as f32 * golden;
        let expected_y = (angle * 8.0).sin() * 0.3 + (t - 0.5) * 0.5;
        assert!((p.y - expected_y).abs() < 1e-3, "height at {}", i);
    }
    // Centre point sits on the axis at the bottom of the cup ramp
    assert!(pts[0].x.abs() < EPS && pts[0].z.abs() < EPS);
    assert!((pts[0].y + 0.25).abs() < EPS);
}

#[test]
fn flower_ignores_the_random_source() {
    let a = points(Shape::Flower, 200, 1);
    let b = points(Shape::Flower, 200, 99);
    assert_eq!(a, b);
}

#[test]
fn saturn_partitions_forty_percent_into_the_ring() {
    assert_eq!(saturn_split(1000), (600, 400));
    assert_eq!(saturn_split(7), (5, 2));
    let pts = points(Shape::Saturn, 1000, 4);
    let (core, _) = saturn_split(1000);
    for p in &pts[..core] {
        assert!(p.length() <= 1.2 + EPS);
    }
    for p in &pts[core..] {
        let xz = (p.x * p.x + p.z * p.z).sqrt();
        assert!((1.8 - EPS..=2.6 + EPS).contains(&xz), "ring radius {}", xz);
        assert!(p.y.abs() <= 0.05 + EPS);
    }
}

#[test]
fn buddha_partitions_head_body_base_without_dropping_points() {
    let (head, body, base) = buddha_split(1000);
    assert_eq!((head, body, base), (250, 500, 250));
    assert_eq!(head + body + base, 1000);
    let (h, b, r) = buddha_split(999);
    assert_eq!(h + b + r, 999);

    let pts = points(Shape::Buddha, 1000, 5);
    for p in &pts[..head] {
        assert!(p.distance(Vec3::new(0.0, 1.5, 0.0)) <= 0.6 + EPS);
    }
    for p in &pts[head..head + body] {
        let q = (*p - Vec3::new(0.0, 0.3, 0.0)) / Vec3::new(1.2, 1.5, 1.2);
        assert!(q.length() <= 1.0 + EPS);
    }
    for p in &pts[head + body..] {
        let xz = (p.x * p.x + p.z * p.z).sqrt();
        assert!((0.5 - EPS..=1.3 + EPS).contains(&xz));
        assert!((-1.4 - EPS..=-1.0 + EPS).contains(&p.y));
    }
}

#[test]
fn fireworks_bias_mass_toward_the_outer_shell() {
    let pts = points(Shape::Fireworks, 5000, 6);
    assert!(pts.iter().all(|p| p.length() <= 3.0 + EPS));
    // r = u^0.3 * 3, so P(r > 1.5) = 1 - 0.5^(1/0.3) ~ 0.9
    let outer = pts.iter().filter(|p| p.length() > 1.5).count() as f32 / pts.len() as f32;
    assert!(outer > 0.8, "outer fraction {}", outer);
}

#[test]
fn unknown_shape_names_fall_back_to_sphere() {
    assert_eq!(Shape::from_name("heart"), Shape::Heart);
    assert_eq!(Shape::from_name(" Saturn "), Shape::Saturn);
    assert_eq!(Shape::from_name("FIREWORKS"), Shape::Fireworks);
    assert_eq!(Shape::from_name("dodecahedron"), Shape::Sphere);
    assert_eq!(Shape::from_name(""), Shape::Sphere);
    for shape in Shape::ALL {
        assert_eq!(Shape::from_name(shape.name()), shape);
    }
}

#[test]
fn digit_shortcuts_follow_picker_order() {
    assert_eq!(Shape::for_digit("1"), Some(Shape::Heart));
    assert_eq!(Shape::for_digit("5"), Some(Shape::Fireworks));
    assert_eq!(Shape::for_digit("6"), Some(Shape::Sphere));
    assert_eq!(Shape::for_digit("0"), None);
    assert_eq!(Shape::for_digit("7"), None);
    assert_eq!(Shape::for_digit("x"), None);
}
