// Host-side tests for the individual shake effects.

use camera_shake::*;
use glam::Vec3;
use rand::prelude::*;
use std::sync::{Arc, Mutex};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

/// Curve that remembers every progress value it was asked for.
fn recording_curve() -> (DampingCurve, Arc<Mutex<Vec<f32>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let curve = DampingCurve::from_fn(move |t| {
        sink.lock().unwrap().push(t);
        1.0 - t
    });
    (curve, seen)
}

// Impulse

/// `(duration, dt)` pairs covering exact binary steps and real frame rates
/// whose f32 sums land just short of the duration.
const EXPIRY_CADENCES: [(f32, f32); 8] = [
    (1.0, 1.0),
    (1.0, 0.5),
    (1.0, 0.125),
    (1.0, 1.0 / 64.0),
    (1.0, 1.0 / 60.0),
    (1.0, 1.0 / 144.0),
    (2.0, 1.0 / 60.0),
    (3.0, 0.3),
];

#[test]
fn impulse_expires_exactly_at_duration_for_any_step_size() {
    for (duration, step) in EXPIRY_CADENCES {
        let mut s = ImpulseShake::new(Vec3::X, Vec3::Y, duration, 1.0, DampingCurve::Linear);
        let steps = (duration / step).round() as usize;
        for i in 0..steps {
            assert!(!s.is_finished(), "finished early at step {i} (dt={step})");
            s.update(step, 0.0);
        }
        assert!(
            s.is_finished(),
            "not finished after {steps} steps of {step} (timer={})",
            s.elapsed()
        );
        assert_eq!(s.time_left(), 0.0);
        assert_eq!(s.position_offset(), Vec3::ZERO);
    }
}

#[test]
fn impulse_duration_is_floored() {
    let s = ImpulseShake::new(Vec3::X, Vec3::ZERO, 0.0, 1.0, DampingCurve::Linear);
    assert!((s.duration() - 0.01).abs() < 1e-7);
    let s = ImpulseShake::new(Vec3::X, Vec3::ZERO, -2.0, 1.0, DampingCurve::Linear);
    assert!((s.duration() - 0.01).abs() < 1e-7);
}

#[test]
fn impulse_scales_by_curve_and_falloff() {
    let mut s = ImpulseShake::new(
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
        1.0,
        0.5,
        DampingCurve::Linear,
    );
    s.update(0.5, 0.5);
    // curve(0.5) = 0.5, falloff 0.5
    assert!(approx(s.position_offset(), Vec3::new(0.5, 0.0, 0.0)));
    assert!(approx(s.rotation_offset(), Vec3::new(0.0, 2.5, 0.0)));
    assert!((s.time_left() - 0.5).abs() < 1e-6);

    s.update(0.75, 1.25);
    assert!(approx(s.position_offset(), Vec3::ZERO));
    assert_eq!(s.time_left(), 0.0);
}

#[test]
fn directional_impulse_is_zero_at_max_distance() {
    let s = ImpulseShake::from_direction(
        Vec3::new(1.0, 0.5, -2.0),
        3.0,
        5.0,
        0.5,
        10.0,
        10.0,
        DampingCurve::Linear,
    );
    assert_eq!(s.falloff(), 0.0);
    assert_eq!(s.position_impulse(), Vec3::ZERO);
    assert_eq!(s.rotation_impulse(), Vec3::ZERO);
}

#[test]
fn directional_impulse_rotates_about_direction_cross_up() {
    let s = ImpulseShake::from_direction(
        Vec3::new(4.0, 0.0, 0.0),
        2.0,
        3.0,
        0.5,
        0.0,
        0.0,
        DampingCurve::Linear,
    );
    assert_eq!(s.falloff(), 1.0);
    assert!(approx(s.position_impulse(), Vec3::new(2.0, 0.0, 0.0)));
    // X cross Y = Z
    assert!(approx(s.rotation_impulse(), Vec3::new(0.0, 0.0, 3.0)));
}

#[test]
fn directional_impulse_parallel_to_up_falls_back_to_right_axis() {
    for dir in [Vec3::Y, -Vec3::Y * 7.0] {
        let s = ImpulseShake::from_direction(dir, 1.0, 3.0, 0.5, 0.0, 0.0, DampingCurve::Linear);
        let rot = s.rotation_impulse();
        assert!(rot.is_finite());
        assert!(approx(rot, Vec3::new(3.0, 0.0, 0.0)), "got {rot:?}");
    }
}

#[test]
fn directional_impulse_applies_falloff_to_impulse_and_decay() {
    let mut s = ImpulseShake::from_direction(
        Vec3::X,
        2.0,
        0.0,
        1.0,
        5.0,
        10.0,
        DampingCurve::Constant(1.0),
    );
    assert!((s.falloff() - 0.5).abs() < 1e-6);
    assert!(approx(s.position_impulse(), Vec3::new(1.0, 0.0, 0.0)));
    s.update(0.1, 0.1);
    // stored falloff multiplies again during decay
    assert!(approx(s.position_offset(), Vec3::new(0.5, 0.0, 0.0)));
}

// Perlin

#[test]
fn perlin_expires_exactly_at_duration_for_any_step_size() {
    for (duration, step) in EXPIRY_CADENCES {
        let mut s = PerlinShake::new(duration, 1.0, 1.0, DampingCurve::Linear, &mut rng(3));
        let steps = (duration / step).round() as usize;
        let mut now = 0.0;
        for i in 0..steps {
            assert!(!s.is_finished(), "finished early at step {i} (dt={step})");
            now += step;
            s.update(step, now);
        }
        assert!(
            s.is_finished(),
            "not finished after {steps} steps of {step} (timer={})",
            s.elapsed()
        );
    }
}

#[test]
fn perlin_position_follows_noise_at_half_time() {
    let noise = NoiseSource::default();
    let mut s = PerlinShake::new(10.0, 2.0, 1.0, DampingCurve::Constant(1.0), &mut rng(13));
    let mut now = 0.0;
    for _ in 0..25 {
        now += 0.13;
        s.update(0.13, now);
        let n = noise.sample_vec3(s.seed(), now * 0.5);
        let expected = (n - Vec3::splat(0.5)) * 2.0;
        assert!(approx(s.position_offset(), expected), "at {now}: {:?}", s.position_offset());
    }
}

#[test]
fn perlin_samples_curve_at_inverse_progress() {
    // Opposite of impulse and trauma; kept as-is on purpose.
    let (curve, seen) = recording_curve();
    let mut s = PerlinShake::new(1.0, 1.0, 1.0, curve, &mut rng(1));
    s.update(0.25, 0.25);
    s.update(0.5, 0.75);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!((seen[0] - 0.75).abs() < 1e-6);
    assert!((seen[1] - 0.25).abs() < 1e-6);
}

#[test]
fn perlin_position_is_zero_at_start_with_linear_curve() {
    let mut s = PerlinShake::new(1.0, 5.0, 1.0, DampingCurve::Linear, &mut rng(9));
    s.update(0.0, 0.0);
    assert_eq!(s.position_offset(), Vec3::ZERO);
}

#[test]
fn perlin_position_is_bounded_by_half_intensity() {
    let mut s = PerlinShake::new(4.0, 2.0, 1.0, DampingCurve::Constant(1.0), &mut rng(11));
    let mut now = 0.0;
    for _ in 0..200 {
        now += 0.02;
        s.update(0.02, now);
        let p = s.position_offset();
        assert!(p.abs().max_element() <= 1.0 + 1e-5, "out of range: {p:?}");
    }
}

#[test]
fn perlin_rotation_ignores_intensity_and_decay() {
    // Rotation jitter is a raw unit-sphere sample scaled by 0.5.
    let mut s = PerlinShake::new(1.0, 0.0, 0.0, DampingCurve::Constant(0.0), &mut rng(5));
    let mut now = 0.0;
    for _ in 0..20 {
        now += 0.01;
        s.update(0.01, now);
        assert!((s.rotation_offset().length() - 0.5).abs() < 1e-4);
        assert_eq!(s.position_offset(), Vec3::ZERO);
    }
}

#[test]
fn perlin_with_same_seed_is_reproducible() {
    let mut a = PerlinShake::new(1.0, 1.0, 1.0, DampingCurve::Constant(1.0), &mut rng(21));
    let mut b = PerlinShake::new(1.0, 1.0, 1.0, DampingCurve::Constant(1.0), &mut rng(21));
    assert_eq!(a.seed(), b.seed());
    for i in 1..10 {
        let now = i as f32 * 0.1;
        a.update(0.1, now);
        b.update(0.1, now);
        assert_eq!(a.position_offset(), b.position_offset());
        assert_eq!(a.rotation_offset(), b.rotation_offset());
    }
}

// Trauma

#[test]
fn trauma_finishes_after_one_second_at_unit_rate() {
    let mut s = TraumaShake::new(1.0, 1.0, 1.0, DampingCurve::Linear, &mut rng(2));
    assert!(!s.is_finished());
    s.update(1.0, 1.0);
    assert!(s.trauma() <= 0.0);
    assert!(s.is_finished());
}

#[test]
fn trauma_termination_is_independent_of_step_split() {
    let mut s = TraumaShake::new(1.0, 1.0, 1.0, DampingCurve::Linear, &mut rng(2));
    s.update(0.5, 0.5);
    assert!(!s.is_finished());
    s.update(0.5, 1.0);
    assert!(s.trauma() <= 0.0);
    assert!(s.is_finished());
}

#[test]
fn trauma_is_clamped_and_duration_is_informational() {
    let s = TraumaShake::new(3.0, 2.0, 1.0, DampingCurve::Linear, &mut rng(4));
    assert_eq!(s.trauma(), 1.0);
    // estimate uses the unclamped input
    assert!((s.duration() - 1.5).abs() < 1e-6);
    assert!((s.time_left() - 0.5).abs() < 1e-6);

    let s = TraumaShake::new(-1.0, 1.0, 1.0, DampingCurve::Linear, &mut rng(4));
    assert_eq!(s.trauma(), 0.0);
    assert!(s.is_finished());

    let s = TraumaShake::new(0.5, 0.0, 1.0, DampingCurve::Linear, &mut rng(4));
    assert!(s.duration().is_finite());
}

#[test]
fn trauma_samples_curve_at_consumed_stress() {
    let (curve, seen) = recording_curve();
    let mut s = TraumaShake::new(1.0, 1.0, 1.0, curve, &mut rng(6));
    s.update(0.25, 0.25);
    let seen = seen.lock().unwrap();
    assert!((seen[0] - 0.25).abs() < 1e-6);
}

#[test]
fn trauma_moves_in_xy_and_rolls_only() {
    let mut s = TraumaShake::new(1.0, 0.5, 1.0, DampingCurve::Constant(1.0), &mut rng(8));
    let mut now = 0.0;
    for _ in 0..30 {
        now += 0.016;
        s.update(0.016, now);
        let p = s.position_offset();
        let r = s.rotation_offset();
        assert_eq!(p.z, 0.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 0.0);
        // |noise| < 1 and shake <= 1
        assert!(p.x.abs() <= 0.5 && p.y.abs() <= 0.5);
        assert!(r.z.abs() <= 2.0);
    }
}

#[test]
fn trauma_offsets_follow_noise_at_thirty_times_clock() {
    let noise = NoiseSource::default();
    let mut s = TraumaShake::new(1.0, 0.01, 1.0, DampingCurve::Constant(1.0), &mut rng(14));
    let seed = s.seed();
    let mut now = 0.0;
    for _ in 0..20 {
        now += 0.07;
        // shake uses the value before this frame's decay
        let shake = s.trauma() * s.trauma();
        s.update(0.07, now);
        let nx = noise.sample_signed(seed.x, now * 30.0);
        let ny = noise.sample_signed(seed.y, now * 30.0);
        let pos = Vec3::new(nx, ny, 0.0) * shake * 0.5;
        let rot = Vec3::new(0.0, 0.0, nx * shake * 2.0);
        assert!(approx(s.position_offset(), pos), "at {now}: {:?}", s.position_offset());
        assert!(approx(s.rotation_offset(), rot), "at {now}: {:?}", s.rotation_offset());
    }
}

#[test]
fn trauma_uses_square_of_pre_decay_value() {
    let mut s = TraumaShake::new(0.5, 1.0, 1.0, DampingCurve::Constant(1.0), &mut rng(10));
    s.update(0.1, 0.37);
    // shake = 0.25 -> roll bounded by 0.25 * 2
    assert!(s.rotation_offset().z.abs() <= 0.5);
    assert!((s.intensity() - 0.16).abs() < 1e-5);
}

// Proximity

fn proximity(min: f32, max: f32, intensity: f32) -> ProximityShake {
    ProximityShake::new(max, min, intensity, 4.0, &mut rng(12))
}

#[test]
fn proximity_intensity_boundaries() {
    let p = proximity(1.0, 10.0, 2.0);
    assert_eq!(p.intensity_at(10.0), 0.0);
    assert_eq!(p.intensity_at(25.0), 0.0);
    assert_eq!(p.intensity_at(0.5), 2.0);
    assert_eq!(p.intensity_at(1.0), 2.0);
    assert!((p.intensity_at(5.5) - 1.0).abs() < 1e-6);
}

#[test]
fn proximity_intensity_rises_as_distance_shrinks() {
    let p = proximity(1.0, 10.0, 2.0);
    let mut prev = p.intensity_at(10.0);
    for d in (10..100).rev().map(|d| d as f32 * 0.1) {
        let i = p.intensity_at(d);
        assert!(i >= prev, "intensity dropped at {d}");
        prev = i;
    }
}

#[test]
fn proximity_distances_are_clamped() {
    let p = proximity(0.0, 0.05, 1.0);
    assert_eq!(p.max_distance(), 0.1);
    assert_eq!(p.min_distance(), 0.1);

    let p = proximity(20.0, 10.0, 1.0);
    assert_eq!(p.min_distance(), 10.0);

    let p = proximity(-3.0, 10.0, 1.0);
    assert_eq!(p.min_distance(), 0.1);
}

#[test]
fn proximity_rests_at_zero_intensity() {
    let mut p = proximity(1.0, 10.0, 2.0);
    assert_eq!(p.distance(), 10.0);
    p.update(0.016, 0.016);
    assert_eq!(p.position_offset(), Vec3::ZERO);
    assert_eq!(p.rotation_offset(), Vec3::ZERO);
    assert!(!p.is_finished());
}

#[test]
fn proximity_offsets_are_bounded_by_intensity() {
    let mut p = proximity(1.0, 10.0, 2.0);
    p.set_distance(0.0);
    let mut now = 0.0;
    for _ in 0..100 {
        now += 0.016;
        p.update(0.016, now);
        let pos = p.position_offset();
        let rot = p.rotation_offset();
        assert_eq!(pos.z, 0.0);
        assert!(pos.x.abs() <= 0.6 && pos.y.abs() <= 0.6);
        assert!(rot.x.abs() <= 6.0 && rot.y.abs() <= 6.0 && rot.z.abs() <= 4.0);
    }
}

#[test]
fn proximity_offsets_follow_noise_at_frequency() {
    let noise = NoiseSource::default();
    let mut p = ProximityShake::new(10.0, 1.0, 2.0, 7.0, &mut rng(15));
    p.set_distance(5.5);
    let intensity = p.intensity();
    assert!((intensity - 1.0).abs() < 1e-6);
    let seed = p.seed();
    let mut now = 0.0;
    for _ in 0..20 {
        now += 0.05;
        p.update(0.05, now);
        let y = now * 7.0;
        let nx = noise.sample_signed(seed.x, y);
        let ny = noise.sample_signed(seed.y, y);
        let nz = noise.sample_signed(seed.z, y);
        let pos = Vec3::new(nx, ny, 0.0) * intensity * 0.3;
        let rot = Vec3::new(ny * 1.5, nx * 1.5, nz) * intensity * 2.0;
        assert!(approx(p.position_offset(), pos), "at {now}: {:?}", p.position_offset());
        assert!(approx(p.rotation_offset(), rot), "at {now}: {:?}", p.rotation_offset());
    }
}

#[test]
fn proximity_disable_is_one_way_and_zeroes_output() {
    let mut p = proximity(1.0, 10.0, 2.0);
    p.set_distance(2.0);
    p.update(0.1, 0.1);
    p.disable();
    p.disable();
    assert!(!p.is_enabled());
    assert!(p.is_finished());
    p.update(0.1, 0.2);
    assert_eq!(p.position_offset(), Vec3::ZERO);
    assert_eq!(p.rotation_offset(), Vec3::ZERO);
}

// Tagged wrapper

#[test]
fn shake_time_left_only_for_timed_variants() {
    let impulse: Shake =
        ImpulseShake::new(Vec3::X, Vec3::ZERO, 2.0, 1.0, DampingCurve::Linear).into();
    let perlin: Shake =
        PerlinShake::new(2.0, 1.0, 1.0, DampingCurve::Linear, &mut rng(1)).into();
    let prox: Shake = proximity(1.0, 5.0, 1.0).into();
    assert_eq!(impulse.time_left(), Some(2.0));
    assert_eq!(perlin.time_left(), None);
    assert_eq!(prox.time_left(), None);
}
