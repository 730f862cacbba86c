use super::{ShakeSource, TimedShake};
use crate::constants::{MIN_DECAY_RATE, TRAUMA_NOISE_SPEED, TRAUMA_POSITION_GAIN, TRAUMA_ROLL_GAIN};
use crate::curve::DampingCurve;
use crate::jitter::{random_seed, NoiseSource};
use glam::Vec3;
use rand::Rng;

/// Impact stress that drains linearly while the visible shake follows its
/// square, giving a sharp onset and a soft tail.
///
/// Position jitters in the XY plane; rotation is roll (Z) only.
#[derive(Clone, Debug)]
pub struct TraumaShake {
    trauma: f32,
    decay_rate: f32,
    duration: f32,
    distance_falloff: f32,
    curve: DampingCurve,
    seed: Vec3,
    position_offset: Vec3,
    rotation_offset: Vec3,
}

impl TraumaShake {
    /// `initial_trauma` is clamped to `[0, 1]`.
    pub fn new<R: Rng + ?Sized>(
        initial_trauma: f32,
        decay_rate: f32,
        distance_falloff: f32,
        curve: DampingCurve,
        rng: &mut R,
    ) -> Self {
        Self {
            trauma: initial_trauma.clamp(0.0, 1.0),
            decay_rate,
            duration: initial_trauma / decay_rate.max(MIN_DECAY_RATE),
            distance_falloff,
            curve,
            seed: random_seed(rng),
            position_offset: Vec3::ZERO,
            rotation_offset: Vec3::ZERO,
        }
    }

    /// Current stress; drops below zero on the frame the effect finishes.
    pub fn trauma(&self) -> f32 {
        self.trauma
    }

    pub fn seed(&self) -> Vec3 {
        self.seed
    }

    /// Visible shake amount for the current stress.
    pub fn intensity(&self) -> f32 {
        let t = self.trauma.max(0.0);
        t * t
    }
}

impl ShakeSource for TraumaShake {
    fn update(&mut self, dt: f32, now_sec: f32) {
        let shake = self.trauma * self.trauma;
        self.trauma -= self.decay_rate * dt;

        let t = 1.0 - self.trauma.clamp(0.0, 1.0);
        let decay = self.curve.evaluate(t) * self.distance_falloff;

        let y = now_sec * TRAUMA_NOISE_SPEED;
        let noise = NoiseSource::shared();
        let nx = noise.sample_signed(self.seed.x, y);
        let ny = noise.sample_signed(self.seed.y, y);

        self.position_offset = Vec3::new(nx, ny, 0.0) * shake * TRAUMA_POSITION_GAIN * decay;
        self.rotation_offset = Vec3::new(0.0, 0.0, nx * shake * TRAUMA_ROLL_GAIN * decay);
    }

    fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    fn rotation_offset(&self) -> Vec3 {
        self.rotation_offset
    }

    fn is_finished(&self) -> bool {
        self.trauma <= 0.0
    }
}

impl TimedShake for TraumaShake {
    /// Informational estimate from the unclamped initial trauma.
    fn duration(&self) -> f32 {
        self.duration
    }

    fn time_left(&self) -> f32 {
        self.trauma.max(0.0) / self.decay_rate.max(MIN_DECAY_RATE)
    }
}
