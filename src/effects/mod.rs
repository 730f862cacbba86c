//! Shake effects and the capability contract they share.

pub mod impulse;
pub mod perlin;
pub mod proximity;
pub mod trauma;

pub use impulse::ImpulseShake;
pub use perlin::PerlinShake;
pub use proximity::ProximityShake;
pub use trauma::TraumaShake;

use crate::constants::DURATION_EPSILON;
use glam::Vec3;
use std::fmt;

/// True once an accumulated `timer` has reached `duration`.
///
/// Summing frame deltas in f32 falls slightly short of the exact total
/// (60 steps of 1/60 give 0.9999997), so the comparison allows a small
/// relative slack.
pub(crate) fn timer_elapsed(timer: f32, duration: f32) -> bool {
    timer >= duration - duration * DURATION_EPSILON
}

/// Progress in `[0, 1]`, snapped to 1 once the timer has elapsed.
pub(crate) fn progress(timer: f32, duration: f32) -> f32 {
    if timer_elapsed(timer, duration) {
        1.0
    } else {
        (timer / duration).clamp(0.0, 1.0)
    }
}

/// Anything that can perturb the camera for some span of frames.
///
/// `update` is called once per frame with the frame delta and the running
/// clock (`now_sec` already includes `dt`). The offsets read afterwards are the
/// output of that update; rotation is Euler angles in degrees.
pub trait ShakeSource {
    fn update(&mut self, dt: f32, now_sec: f32);
    fn position_offset(&self) -> Vec3;
    fn rotation_offset(&self) -> Vec3;
    fn is_finished(&self) -> bool;
}

/// Effects with a known lifetime.
pub trait TimedShake {
    fn duration(&self) -> f32;
    fn time_left(&self) -> f32;
}

/// One active effect: a built-in variant or a caller-supplied source.
pub enum Shake {
    Impulse(ImpulseShake),
    Perlin(PerlinShake),
    Trauma(TraumaShake),
    Proximity(ProximityShake),
    Custom(Box<dyn ShakeSource>),
}

impl Shake {
    /// Remaining time for effects that expire on a clock.
    pub fn time_left(&self) -> Option<f32> {
        match self {
            Self::Impulse(s) => Some(s.time_left()),
            Self::Trauma(s) => Some(s.time_left()),
            Self::Perlin(_) | Self::Proximity(_) | Self::Custom(_) => None,
        }
    }

    pub fn as_proximity_mut(&mut self) -> Option<&mut ProximityShake> {
        match self {
            Self::Proximity(p) => Some(p),
            _ => None,
        }
    }

    fn source(&self) -> &dyn ShakeSource {
        match self {
            Self::Impulse(s) => s,
            Self::Perlin(s) => s,
            Self::Trauma(s) => s,
            Self::Proximity(s) => s,
            Self::Custom(s) => &**s,
        }
    }

    fn source_mut(&mut self) -> &mut dyn ShakeSource {
        match self {
            Self::Impulse(s) => s,
            Self::Perlin(s) => s,
            Self::Trauma(s) => s,
            Self::Proximity(s) => s,
            Self::Custom(s) => &mut **s,
        }
    }
}

impl ShakeSource for Shake {
    fn update(&mut self, dt: f32, now_sec: f32) {
        self.source_mut().update(dt, now_sec);
    }

    fn position_offset(&self) -> Vec3 {
        self.source().position_offset()
    }

    fn rotation_offset(&self) -> Vec3 {
        self.source().rotation_offset()
    }

    fn is_finished(&self) -> bool {
        self.source().is_finished()
    }
}

impl fmt::Debug for Shake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Impulse(s) => f.debug_tuple("Impulse").field(s).finish(),
            Self::Perlin(s) => f.debug_tuple("Perlin").field(s).finish(),
            Self::Trauma(s) => f.debug_tuple("Trauma").field(s).finish(),
            Self::Proximity(s) => f.debug_tuple("Proximity").field(s).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<ImpulseShake> for Shake {
    fn from(s: ImpulseShake) -> Self {
        Self::Impulse(s)
    }
}

impl From<PerlinShake> for Shake {
    fn from(s: PerlinShake) -> Self {
        Self::Perlin(s)
    }
}

impl From<TraumaShake> for Shake {
    fn from(s: TraumaShake) -> Self {
        Self::Trauma(s)
    }
}

impl From<ProximityShake> for Shake {
    fn from(s: ProximityShake) -> Self {
        Self::Proximity(s)
    }
}

impl From<Box<dyn ShakeSource>> for Shake {
    fn from(s: Box<dyn ShakeSource>) -> Self {
        Self::Custom(s)
    }
}
