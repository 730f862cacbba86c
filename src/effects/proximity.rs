use super::ShakeSource;
use crate::constants::{
    MIN_PROXIMITY_DISTANCE, PROXIMITY_PITCH_YAW_WEIGHT, PROXIMITY_POSITION_GAIN,
    PROXIMITY_ROTATION_GAIN,
};
use crate::jitter::{random_seed, NoiseSource};
use glam::Vec3;
use rand::Rng;

/// Continuous rumble whose strength follows an externally reported distance.
///
/// Never expires on its own; `disable` is the only way it finishes. At rest
/// the distance sits at `max_distance`, i.e. zero intensity.
#[derive(Clone, Debug)]
pub struct ProximityShake {
    max_distance: f32,
    min_distance: f32,
    max_intensity: f32,
    frequency: f32,
    enabled: bool,
    seed: Vec3,
    current_distance: f32,
    position_offset: Vec3,
    rotation_offset: Vec3,
}

impl ProximityShake {
    /// Distances are clamped so that `0.1 <= min_distance <= max_distance`.
    pub fn new<R: Rng + ?Sized>(
        max_distance: f32,
        min_distance: f32,
        max_intensity: f32,
        frequency: f32,
        rng: &mut R,
    ) -> Self {
        let max_distance = max_distance.max(MIN_PROXIMITY_DISTANCE);
        let min_distance = min_distance.clamp(MIN_PROXIMITY_DISTANCE, max_distance);
        Self {
            max_distance,
            min_distance,
            max_intensity,
            frequency,
            enabled: true,
            seed: random_seed(rng),
            current_distance: max_distance,
            position_offset: Vec3::ZERO,
            rotation_offset: Vec3::ZERO,
        }
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.current_distance = distance;
    }

    pub fn distance(&self) -> f32 {
        self.current_distance
    }

    /// One-way; calling again has no further effect.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn seed(&self) -> Vec3 {
        self.seed
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Intensity at the current distance.
    pub fn intensity(&self) -> f32 {
        self.intensity_at(self.current_distance)
    }

    /// Zero at or beyond `max_distance`, full at or inside `min_distance`,
    /// linear in between.
    pub fn intensity_at(&self, distance: f32) -> f32 {
        if distance >= self.max_distance {
            return 0.0;
        }
        if distance <= self.min_distance {
            return self.max_intensity;
        }
        let span = self.max_distance - self.min_distance;
        let closeness = 1.0 - (distance - self.min_distance) / span;
        self.max_intensity * closeness
    }
}

impl ShakeSource for ProximityShake {
    fn update(&mut self, _dt: f32, now_sec: f32) {
        if !self.enabled {
            self.position_offset = Vec3::ZERO;
            self.rotation_offset = Vec3::ZERO;
            return;
        }

        let intensity = self.intensity();
        let y = now_sec * self.frequency;
        let noise = NoiseSource::shared();
        let nx = noise.sample_signed(self.seed.x, y);
        let ny = noise.sample_signed(self.seed.y, y);
        let nz = noise.sample_signed(self.seed.z, y);

        self.position_offset = Vec3::new(nx, ny, 0.0) * intensity * PROXIMITY_POSITION_GAIN;
        self.rotation_offset = Vec3::new(
            ny * PROXIMITY_PITCH_YAW_WEIGHT,
            nx * PROXIMITY_PITCH_YAW_WEIGHT,
            nz,
        ) * intensity
            * PROXIMITY_ROTATION_GAIN;
    }

    fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    fn rotation_offset(&self) -> Vec3 {
        self.rotation_offset
    }

    fn is_finished(&self) -> bool {
        !self.enabled
    }
}
