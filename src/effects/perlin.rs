use super::{progress, timer_elapsed, ShakeSource};
use crate::constants::{MIN_DURATION, PERLIN_ROTATION_SCALE, PERLIN_TIME_SCALE};
use crate::curve::DampingCurve;
use crate::jitter::{random_on_unit_sphere, random_seed, NoiseSource};
use glam::Vec3;
use rand::prelude::*;

/// Ambient wobble for a fixed duration.
///
/// The damping curve is sampled at `1 - progress`, so with the default linear
/// curve the wobble ramps up over its lifetime rather than fading out.
///
/// Rotation is a fresh unit-sphere sample every update scaled by 0.5; it does
/// not follow `intensity`, the curve or the seed.
#[derive(Clone, Debug)]
pub struct PerlinShake {
    duration: f32,
    timer: f32,
    intensity: f32,
    seed: Vec3,
    distance_falloff: f32,
    curve: DampingCurve,
    rng: StdRng,
    position_offset: Vec3,
    rotation_offset: Vec3,
}

impl PerlinShake {
    pub fn new<R: Rng + ?Sized>(
        duration: f32,
        intensity: f32,
        distance_falloff: f32,
        curve: DampingCurve,
        rng: &mut R,
    ) -> Self {
        let seed = random_seed(rng);
        Self {
            duration: duration.max(MIN_DURATION),
            timer: 0.0,
            intensity,
            seed,
            distance_falloff,
            curve,
            rng: StdRng::seed_from_u64(rng.gen()),
            position_offset: Vec3::ZERO,
            rotation_offset: Vec3::ZERO,
        }
    }

    pub fn seed(&self) -> Vec3 {
        self.seed
    }

    pub fn elapsed(&self) -> f32 {
        self.timer
    }
}

impl ShakeSource for PerlinShake {
    fn update(&mut self, dt: f32, now_sec: f32) {
        self.timer += dt;
        let t = progress(self.timer, self.duration);
        let decay = self.curve.evaluate(1.0 - t) * self.distance_falloff;

        let n = NoiseSource::shared().sample_vec3(self.seed, now_sec * PERLIN_TIME_SCALE);
        self.position_offset = (n - Vec3::splat(0.5)) * (self.intensity * decay);
        self.rotation_offset = random_on_unit_sphere(&mut self.rng) * PERLIN_ROTATION_SCALE;
    }

    fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    fn rotation_offset(&self) -> Vec3 {
        self.rotation_offset
    }

    fn is_finished(&self) -> bool {
        timer_elapsed(self.timer, self.duration)
    }
}
