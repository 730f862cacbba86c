//! Per-frame aggregation of all active shake effects.

use crate::constants::SEED_MIX;
use crate::descriptor::ShakeDescriptor;
use crate::effects::{Shake, ShakeSource};
use crate::sink::OffsetSink;
use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;
use std::fmt;

/// Handle to an effect owned by a [`ShakeController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShakeId(u64);

struct ActiveShake {
    id: ShakeId,
    shake: Shake,
}

/// Owns the active effects and turns them into one offset per frame.
///
/// Typical usage:
/// - Construct with `ShakeController::new(seed)` and attach a sink
/// - Register effects with `add_shake`, `add_shake_from` or
///   `add_proximity_shake`
/// - Call `advance(dt)` once per frame after gameplay logic has run
///
/// Effects are updated in insertion order. Finished effects are dropped at the
/// end of the frame they finish in, after their last offset was summed.
/// Proximity effects are also reachable by a caller-chosen key for distance
/// updates and explicit disabling.
pub struct ShakeController {
    active: SmallVec<[ActiveShake; 8]>,
    proximity: FnvHashMap<String, ShakeId>,
    position_offset: Vec3,
    rotation_offset: Vec3,
    sink: Option<Box<dyn OffsetSink>>,
    rng: StdRng,
    next_id: u64,
    elapsed: f64,
}

impl ShakeController {
    /// The seed drives every per-effect seed this controller hands out, so the
    /// same seed and call sequence reproduce the same offsets.
    pub fn new(seed: u64) -> Self {
        Self {
            active: SmallVec::new(),
            proximity: FnvHashMap::default(),
            position_offset: Vec3::ZERO,
            rotation_offset: Vec3::ZERO,
            sink: None,
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
            elapsed: 0.0,
        }
    }

    pub fn with_sink(mut self, sink: impl OffsetSink + 'static) -> Self {
        self.set_offset_sink(sink);
        self
    }

    /// Attach or replace the consumer of the combined offset.
    pub fn set_offset_sink(&mut self, sink: impl OffsetSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Detach the current consumer. Effects keep updating without one.
    pub fn take_offset_sink(&mut self) -> Option<Box<dyn OffsetSink>> {
        self.sink.take()
    }

    /// Append an already-built effect.
    pub fn add_shake(&mut self, shake: impl Into<Shake>) -> ShakeId {
        let id = self.allocate_id();
        let shake = shake.into();
        log::debug!("[shake] add {} as {:?}", kind_label(&shake), id);
        self.active.push(ActiveShake { id, shake });
        id
    }

    /// Build an effect from `descriptor` and add it.
    ///
    /// An impulse descriptor with a `direction` becomes a directional impulse
    /// attenuated by `distance_to_source`. Returns `None` (adding nothing) for
    /// descriptors this factory does not build, which today is proximity.
    pub fn add_shake_from(
        &mut self,
        descriptor: &ShakeDescriptor,
        direction: Option<Vec3>,
        distance_to_source: f32,
    ) -> Option<ShakeId> {
        let mut rng = self.effect_rng();
        match descriptor.build(direction, distance_to_source, &mut rng) {
            Some(shake) => Some(self.add_shake(shake)),
            None => {
                log::debug!(
                    "[shake] descriptor kind {} not built by add_shake_from",
                    descriptor.kind
                );
                None
            }
        }
    }

    /// Build a proximity effect and register it under `key`.
    ///
    /// No-op unless `descriptor` is proximity-typed. A previous effect under
    /// the same key stays active but is no longer reachable by key.
    pub fn add_proximity_shake(
        &mut self,
        key: impl Into<String>,
        descriptor: &ShakeDescriptor,
    ) -> Option<ShakeId> {
        let mut rng = self.effect_rng();
        let shake = descriptor.build_proximity(&mut rng)?;
        let key = key.into();
        let id = self.add_shake(shake);
        if let Some(previous) = self.proximity.insert(key.clone(), id) {
            log::debug!("[shake] proximity '{}' replaced {:?}", key, previous);
        }
        Some(id)
    }

    /// Forward a new source distance to the effect registered under `key`.
    pub fn update_proximity_shake_distance(&mut self, key: &str, distance: f32) {
        let Some(&id) = self.proximity.get(key) else {
            return;
        };
        if let Some(p) = self.get_mut(id).and_then(Shake::as_proximity_mut) {
            p.set_distance(distance);
        }
    }

    /// Disable the effect under `key` and forget the key. The effect leaves
    /// the active set on the next `advance`.
    pub fn disable_proximity_shake(&mut self, key: &str) {
        let Some(id) = self.proximity.remove(key) else {
            return;
        };
        log::debug!("[shake] disable proximity '{}' ({:?})", key, id);
        if let Some(p) = self.get_mut(id).and_then(Shake::as_proximity_mut) {
            p.disable();
        }
    }

    pub fn has_proximity_shake(&self, key: &str) -> bool {
        self.proximity.contains_key(key)
    }

    /// Remove one effect regardless of its state. Keys are left untouched.
    pub fn remove_shake(&mut self, id: ShakeId) -> Option<Shake> {
        let index = self.active.iter().position(|a| a.id == id)?;
        log::debug!("[shake] remove {:?}", id);
        Some(self.active.remove(index).shake)
    }

    /// Drop every effect and key. The last offset is kept until next frame.
    pub fn clear(&mut self) {
        self.active.clear();
        self.proximity.clear();
    }

    /// Advance all effects by `dt` seconds and publish the summed offset.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt as f64;
        let now = self.elapsed as f32;

        let mut total_pos = Vec3::ZERO;
        let mut total_rot = Vec3::ZERO;
        for a in self.active.iter_mut() {
            a.shake.update(dt, now);
            total_pos += a.shake.position_offset();
            total_rot += a.shake.rotation_offset();
        }
        self.position_offset = total_pos;
        self.rotation_offset = total_rot;

        if let Some(sink) = self.sink.as_mut() {
            sink.set_position_offset(total_pos);
            sink.set_rotation_offset(total_rot);
        }

        let before = self.active.len();
        self.active.retain(|a| !a.shake.is_finished());
        let removed = before - self.active.len();
        if removed > 0 {
            log::trace!("[shake] {} finished, {} active", removed, self.active.len());
        }
    }

    pub fn shake(&self, id: ShakeId) -> Option<&Shake> {
        self.active.iter().find(|a| a.id == id).map(|a| &a.shake)
    }

    pub fn contains(&self, id: ShakeId) -> bool {
        self.shake(id).is_some()
    }

    /// Active ids in update order.
    pub fn ids(&self) -> impl Iterator<Item = ShakeId> + '_ {
        self.active.iter().map(|a| a.id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    /// Euler degrees.
    pub fn rotation_offset(&self) -> Vec3 {
        self.rotation_offset
    }

    /// Whether the last frame produced any offset at all.
    pub fn is_shaking(&self) -> bool {
        self.position_offset != Vec3::ZERO || self.rotation_offset != Vec3::ZERO
    }

    /// Longest remaining time among effects that expire on a clock.
    pub fn time_left(&self) -> Option<f32> {
        self.active
            .iter()
            .filter_map(|a| a.shake.time_left())
            .reduce(f32::max)
    }

    /// Running clock in seconds (sum of all `dt` passed to `advance`).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    fn get_mut(&mut self, id: ShakeId) -> Option<&mut Shake> {
        self.active
            .iter_mut()
            .find(|a| a.id == id)
            .map(|a| &mut a.shake)
    }

    fn allocate_id(&mut self) -> ShakeId {
        let id = ShakeId(self.next_id);
        self.next_id += 1;
        id
    }

    // Derive a per-effect RNG so each effect can be reseeded independently
    fn effect_rng(&mut self) -> StdRng {
        let salt = self.next_id.wrapping_mul(SEED_MIX);
        StdRng::seed_from_u64(self.rng.gen::<u64>() ^ salt)
    }
}

impl Default for ShakeController {
    fn default() -> Self {
        Self::new(thread_rng().gen())
    }
}

impl fmt::Debug for ShakeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShakeController")
            .field("active", &self.active.len())
            .field("proximity_keys", &self.proximity.len())
            .field("position_offset", &self.position_offset)
            .field("rotation_offset", &self.rotation_offset)
            .field("has_sink", &self.sink.is_some())
            .field("elapsed", &self.elapsed)
            .finish()
    }
}

fn kind_label(shake: &Shake) -> &'static str {
    match shake {
        Shake::Impulse(_) => "impulse",
        Shake::Perlin(_) => "perlin",
        Shake::Trauma(_) => "trauma",
        Shake::Proximity(_) => "proximity",
        Shake::Custom(_) => "custom",
    }
}
