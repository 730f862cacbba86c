//! Damping curves mapping normalized progress to a decay multiplier.

use crate::error::{Result, ShakeError};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A single `(time, value)` sample of a keyed curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

impl CurveKey {
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Sampling function `f: [0, 1] -> R` used to shape how a shake fades.
///
/// Inputs outside `[0, 1]` are clamped before evaluation. The default is a
/// straight line from 1 at progress 0 down to 0 at progress 1.
#[derive(Clone, Default)]
pub enum DampingCurve {
    #[default]
    Linear,
    Constant(f32),
    /// Piecewise-linear keys sorted by time. Values hold flat past either end.
    Keys(SmallVec<[CurveKey; 4]>),
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl DampingCurve {
    /// Build a keyed curve, rejecting empty, non-finite or unsorted keys.
    pub fn from_keys(keys: &[CurveKey]) -> Result<Self> {
        if keys.is_empty() {
            return Err(ShakeError::InvalidCurve("no keys"));
        }
        if keys
            .iter()
            .any(|k| !k.time.is_finite() || !k.value.is_finite())
        {
            return Err(ShakeError::InvalidCurve("non-finite key"));
        }
        if keys.windows(2).any(|w| w[1].time < w[0].time) {
            return Err(ShakeError::InvalidCurve("keys not sorted by time"));
        }
        Ok(Self::Keys(keys.iter().copied().collect()))
    }

    pub fn from_fn(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Quadratic fall-off: holds near 1 early, drops fast at the end.
    pub fn ease_out() -> Self {
        Self::from_fn(|t| 1.0 - t * t)
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => 1.0 - t,
            Self::Constant(v) => *v,
            Self::Keys(keys) => sample_keys(keys, t),
            Self::Custom(f) => f(t),
        }
    }
}

fn sample_keys(keys: &[CurveKey], t: f32) -> f32 {
    let (first, last) = match (keys.first(), keys.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return 0.0,
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }
    for w in keys.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t <= b.time {
            let span = b.time - a.time;
            if span <= f32::EPSILON {
                return b.value;
            }
            let u = (t - a.time) / span;
            return a.value + (b.value - a.value) * u;
        }
    }
    last.value
}

impl fmt::Debug for DampingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
