//! Composable camera shake.
//!
//! Any number of effects (directional impulses, perlin wobble, trauma hits,
//! proximity rumble) run side by side inside a [`ShakeController`]. Once per
//! frame the controller advances each of them, sums their offsets and hands
//! the result to an [`OffsetSink`], typically the camera.
//!
//! ```no_run
//! use camera_shake::*;
//! use glam::Vec3;
//!
//! let mut shakes = ShakeController::new(7);
//! shakes.add_shake_from(&ShakeDescriptor::trauma(0.8, 1.2), None, 0.0);
//! shakes.add_proximity_shake("lava", &ShakeDescriptor::proximity(1.0, 12.0, 1.0));
//!
//! // each frame
//! shakes.update_proximity_shake_distance("lava", 4.0);
//! shakes.advance(1.0 / 60.0);
//! let (pos, rot) = (shakes.position_offset(), shakes.rotation_offset());
//! # let _ = (pos, rot, Vec3::ZERO);
//! ```

pub mod constants;
pub mod controller;
pub mod curve;
pub mod descriptor;
pub mod effects;
pub mod error;
pub mod jitter;
pub mod sink;

pub use controller::*;
pub use curve::*;
pub use descriptor::*;
pub use effects::*;
pub use error::ShakeError;
pub use jitter::NoiseSource;
pub use sink::*;
