use super::{progress, timer_elapsed, ShakeSource, TimedShake};
use crate::constants::MIN_DURATION;
use crate::curve::DampingCurve;
use glam::Vec3;

/// One-shot directional jolt that decays over a fixed duration.
///
/// Output is the initial impulse scaled by `curve(progress) * falloff`, where
/// progress runs from 0 to 1 over `duration`.
#[derive(Clone, Debug)]
pub struct ImpulseShake {
    position_impulse: Vec3,
    rotation_impulse: Vec3,
    duration: f32,
    timer: f32,
    distance_falloff: f32,
    curve: DampingCurve,
    position_offset: Vec3,
    rotation_offset: Vec3,
}

impl ImpulseShake {
    /// `rotation_impulse` is in degrees. `duration` is floored to 0.01s.
    pub fn new(
        position_impulse: Vec3,
        rotation_impulse: Vec3,
        duration: f32,
        distance_falloff: f32,
        curve: DampingCurve,
    ) -> Self {
        Self {
            position_impulse,
            rotation_impulse,
            duration: duration.max(MIN_DURATION),
            timer: 0.0,
            distance_falloff,
            curve,
            position_offset: Vec3::ZERO,
            rotation_offset: Vec3::ZERO,
        }
    }

    /// Impulse pushed along `direction` (e.g. from an explosion towards the
    /// camera), rotating about the axis perpendicular to it and world-up.
    ///
    /// Falloff is `1 - distance / max_distance` clamped to `[0, 1]`, or 1 when
    /// `max_distance <= 0`.
    pub fn from_direction(
        direction: Vec3,
        magnitude: f32,
        rotation_magnitude: f32,
        duration: f32,
        distance_to_source: f32,
        max_distance: f32,
        curve: DampingCurve,
    ) -> Self {
        let falloff = distance_falloff(distance_to_source, max_distance);
        let dir = direction.normalize_or_zero();
        let position_impulse = dir * magnitude * falloff;

        let mut axis = dir.cross(Vec3::Y);
        if axis == Vec3::ZERO {
            // parallel to up (or zero direction)
            axis = Vec3::X;
        }
        let rotation_impulse = axis.normalize() * rotation_magnitude * falloff;

        Self::new(position_impulse, rotation_impulse, duration, falloff, curve)
    }

    pub fn position_impulse(&self) -> Vec3 {
        self.position_impulse
    }

    pub fn rotation_impulse(&self) -> Vec3 {
        self.rotation_impulse
    }

    pub fn falloff(&self) -> f32 {
        self.distance_falloff
    }

    pub fn elapsed(&self) -> f32 {
        self.timer
    }
}

/// Linear distance attenuation; `max_distance <= 0` disables it.
pub fn distance_falloff(distance: f32, max_distance: f32) -> f32 {
    if max_distance > 0.0 {
        (1.0 - distance / max_distance).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

impl ShakeSource for ImpulseShake {
    fn update(&mut self, dt: f32, _now_sec: f32) {
        self.timer += dt;
        let t = progress(self.timer, self.duration);
        let decay = self.curve.evaluate(t) * self.distance_falloff;

        self.position_offset = self.position_impulse * decay;
        self.rotation_offset = self.rotation_impulse * decay;
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

impl TimedShake for ImpulseShake {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn time_left(&self) -> f32 {
        if timer_elapsed(self.timer, self.duration) {
            return 0.0;
        }
        (self.duration - self.timer).max(0.0)
    }
}
