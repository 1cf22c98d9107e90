//! Tween scheduler
//!
//! A caller-owned container that steps every playing tween each frame. It
//! holds tweens, not hosts: each tween keeps its own borrow of its target.
//! Repeat settings on the instructions are not driven here; every tween
//! plays a single pass.

use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tween_core::{Clock, FieldAccess};

new_key_type! {
    pub struct TweenId;
}

/// Ids of the tweens that completed on one tick
pub type Finished = SmallVec<[TweenId; 4]>;

/// Steps a set of tweens with a shared time reading
pub struct TweenScheduler<'a, T: FieldAccess + ?Sized> {
    tweens: SlotMap<TweenId, Tween<'a, T>>,
}

impl<'a, T: FieldAccess + ?Sized> TweenScheduler<'a, T> {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
        }
    }

    pub fn add(&mut self, tween: Tween<'a, T>) -> TweenId {
        self.tweens.insert(tween)
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween<'a, T>> {
        self.tweens.get(id)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween<'a, T>> {
        self.tweens.get_mut(id)
    }

    pub fn remove(&mut self, id: TweenId) -> Option<Tween<'a, T>> {
        self.tweens.remove(id)
    }

    /// Start every tween at the clock's current time
    pub fn play_all(&mut self, clock: &dyn Clock) {
        let now = clock.now();
        for (_, tween) in self.tweens.iter_mut() {
            tween.play_at(now);
        }
    }

    /// Step every playing tween once at `now`.
    ///
    /// A tween whose host refuses a write is stopped and skipped; the
    /// others still advance.
    pub fn tick(&mut self, now: f64) -> Finished {
        let mut finished = Finished::new();

        for (id, tween) in self.tweens.iter_mut() {
            match tween.step(now) {
                Ok(true) => finished.push(id),
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(?id, error = %err, "tween write-back failed, stopped");
                }
            }
        }

        finished
    }

    /// Check if any tween is still playing
    pub fn has_active(&self) -> bool {
        self.tweens.iter().any(|(_, t)| t.is_playing())
    }

    /// Iterate over all tweens (immutable)
    pub fn iter(&self) -> impl Iterator<Item = (TweenId, &Tween<'a, T>)> {
        self.tweens.iter()
    }

    /// Iterate over all tweens (mutable)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TweenId, &mut Tween<'a, T>)> {
        self.tweens.iter_mut()
    }

    /// One summary line per tween, for diagnostics
    pub fn describe_all(&self) -> Vec<String> {
        self.tweens.values().map(Tween::describe).collect()
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl<T: FieldAccess + ?Sized> Default for TweenScheduler<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
