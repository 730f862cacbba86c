//! Plain configuration data used to build shake effects.

use crate::curve::DampingCurve;
use crate::effects::{ImpulseShake, PerlinShake, ProximityShake, Shake, TraumaShake};
use crate::error::ShakeError;
use glam::Vec3;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Which effect a descriptor builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShakeKind {
    Impulse,
    Perlin,
    Trauma,
    Proximity,
}

impl ShakeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Impulse => "impulse",
            Self::Perlin => "perlin",
            Self::Trauma => "trauma",
            Self::Proximity => "proximity",
        }
    }
}

impl fmt::Display for ShakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShakeKind {
    type Err = ShakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "impulse" => Ok(Self::Impulse),
            "perlin" => Ok(Self::Perlin),
            "trauma" => Ok(Self::Trauma),
            "proximity" => Ok(Self::Proximity),
            _ => Err(ShakeError::UnknownKind(s.to_string())),
        }
    }
}

/// Immutable recipe for one shake effect.
///
/// Fields are grouped by the variant that reads them; the rest are ignored.
///
/// Common:
/// - `duration`: seconds (impulse and perlin)
/// - `damping_curve`: progress-to-multiplier shaping
/// - `distance_falloff`: constant attenuation for non-directional builds
/// - `max_distance`: falloff range for directional impulses (0 = none)
///
/// Proximity has its own `proximity_max_distance`, distinct from the common
/// `max_distance`.
#[derive(Clone, Debug)]
pub struct ShakeDescriptor {
    pub kind: ShakeKind,

    pub duration: f32,
    pub damping_curve: DampingCurve,
    pub distance_falloff: f32,
    pub max_distance: f32,

    pub position_impulse: Vec3,
    pub rotation_impulse: Vec3,
    pub position_magnitude: f32,
    pub rotation_magnitude: f32,

    pub intensity: f32,

    pub trauma: f32,
    pub decay_rate: f32,

    pub proximity_min_distance: f32,
    pub proximity_max_distance: f32,
    pub proximity_intensity: f32,
    pub proximity_frequency: f32,
}

impl Default for ShakeDescriptor {
    fn default() -> Self {
        Self {
            kind: ShakeKind::Impulse,

            duration: 0.5,
            damping_curve: DampingCurve::Linear,
            distance_falloff: 1.0,
            max_distance: 0.0,

            position_impulse: Vec3::ZERO,
            rotation_impulse: Vec3::ZERO,
            position_magnitude: 1.0,
            rotation_magnitude: 1.0,

            intensity: 1.0,

            trauma: 1.0,
            decay_rate: 1.0,

            proximity_min_distance: 0.5,
            proximity_max_distance: 10.0,
            proximity_intensity: 1.0,
            proximity_frequency: 4.0,
        }
    }
}

impl ShakeDescriptor {
    pub fn new(kind: ShakeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn impulse(position_impulse: Vec3, rotation_impulse: Vec3) -> Self {
        Self {
            position_impulse,
            rotation_impulse,
            ..Self::new(ShakeKind::Impulse)
        }
    }

    pub fn perlin(duration: f32, intensity: f32) -> Self {
        Self {
            duration,
            intensity,
            ..Self::new(ShakeKind::Perlin)
        }
    }

    pub fn trauma(trauma: f32, decay_rate: f32) -> Self {
        Self {
            trauma,
            decay_rate,
            ..Self::new(ShakeKind::Trauma)
        }
    }

    pub fn proximity(min_distance: f32, max_distance: f32, intensity: f32) -> Self {
        Self {
            proximity_min_distance: min_distance,
            proximity_max_distance: max_distance,
            proximity_intensity: intensity,
            ..Self::new(ShakeKind::Proximity)
        }
    }

    /// Build a time-driven effect.
    ///
    /// An impulse with a `direction` uses the directional constructor and
    /// `max_distance` falloff against `distance_to_source`. Proximity
    /// descriptors return `None`; they need an identifier and go through
    /// [`ShakeDescriptor::build_proximity`] instead.
    pub fn build<R: Rng + ?Sized>(
        &self,
        direction: Option<Vec3>,
        distance_to_source: f32,
        rng: &mut R,
    ) -> Option<Shake> {
        let curve = self.damping_curve.clone();
        match self.kind {
            ShakeKind::Impulse => Some(match direction {
                Some(dir) => ImpulseShake::from_direction(
                    dir,
                    self.position_magnitude,
                    self.rotation_magnitude,
                    self.duration,
                    distance_to_source,
                    self.max_distance,
                    curve,
                ),
                None => ImpulseShake::new(
                    self.position_impulse,
                    self.rotation_impulse,
                    self.duration,
                    self.distance_falloff,
                    curve,
                ),
            }
            .into()),
            ShakeKind::Perlin => Some(
                PerlinShake::new(
                    self.duration,
                    self.intensity,
                    self.distance_falloff,
                    curve,
                    rng,
                )
                .into(),
            ),
            ShakeKind::Trauma => Some(
                TraumaShake::new(
                    self.trauma,
                    self.decay_rate,
                    self.distance_falloff,
                    curve,
                    rng,
                )
                .into(),
            ),
            ShakeKind::Proximity => None,
        }
    }

    /// Build a distance-driven effect; `None` unless `kind` is proximity.
    pub fn build_proximity<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ProximityShake> {
        if self.kind != ShakeKind::Proximity {
            return None;
        }
        Some(ProximityShake::new(
            self.proximity_max_distance,
            self.proximity_min_distance,
            self.proximity_intensity,
            self.proximity_frequency,
            rng,
        ))
    }
}
