// Shared tuning constants for the built-in shake effects.

// Clamping
pub const MIN_DURATION: f32 = 0.01; // floor applied to timed effect durations
pub const DURATION_EPSILON: f32 = 1e-5; // relative slack on timed expiry for f32 timer drift
pub const MIN_DECAY_RATE: f32 = 1e-4; // divisor floor for trauma time estimates
pub const MIN_PROXIMITY_DISTANCE: f32 = 0.1; // lower bound for proximity min/max distance

// Perlin wobble
pub const PERLIN_TIME_SCALE: f32 = 0.5; // noise time multiplier
pub const PERLIN_ROTATION_SCALE: f32 = 0.5; // radius of the per-frame unit-sphere rotation jitter

// Trauma
pub const TRAUMA_NOISE_SPEED: f32 = 30.0; // noise time multiplier
pub const TRAUMA_POSITION_GAIN: f32 = 0.5;
pub const TRAUMA_ROLL_GAIN: f32 = 2.0; // degrees of roll at full shake

// Proximity rumble
pub const PROXIMITY_POSITION_GAIN: f32 = 0.3;
pub const PROXIMITY_ROTATION_GAIN: f32 = 2.0;
pub const PROXIMITY_PITCH_YAW_WEIGHT: f32 = 1.5; // extra weight on pitch/yaw vs roll

// Fixed seed for the shared coherent-noise lattice
pub const NOISE_LATTICE_SEED: u32 = 0x5EED;

// Per-effect seed mixing constant (golden ratio, 64-bit)
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
