//! Coherent 2D noise used by the effects for organic jitter.

use crate::constants::NOISE_LATTICE_SEED;
use glam::Vec3;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use std::sync::OnceLock;

static SHARED: OnceLock<NoiseSource> = OnceLock::new();

/// Seeded Perlin lattice sampled at `(seed, time)`.
///
/// Output is remapped to `[0, 1)`. The same `(x, y)` pair always yields the
/// same value for a given lattice seed.
#[derive(Clone, Debug)]
pub struct NoiseSource {
    perlin: Perlin,
}

impl NoiseSource {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Process-wide lattice at `NOISE_LATTICE_SEED`, built on first use.
    ///
    /// The built-in effects all sample this one table.
    pub fn shared() -> &'static NoiseSource {
        SHARED.get_or_init(NoiseSource::default)
    }

    /// Sample in `[0, 1)`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let raw = self.perlin.get([x as f64, y as f64]) as f32;
        // Perlin output is nominally [-1, 1]; keep the top end open.
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0 - f32::EPSILON)
    }

    /// Sample remapped to `[-1, 1)`.
    pub fn sample_signed(&self, x: f32, y: f32) -> f32 {
        self.sample(x, y) * 2.0 - 1.0
    }

    /// Sample each axis of `seed` at the same time coordinate.
    pub fn sample_vec3(&self, seed: Vec3, y: f32) -> Vec3 {
        Vec3::new(
            self.sample(seed.x, y),
            self.sample(seed.y, y),
            self.sample(seed.z, y),
        )
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new(NOISE_LATTICE_SEED)
    }
}

/// Three independent uniform values in `[0, 1)`, one per axis.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
}

/// Uniform sample on the unit sphere surface (rejection from the cube).
pub fn random_on_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
