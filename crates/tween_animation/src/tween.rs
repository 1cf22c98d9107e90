//! Tweens
//!
//! A [`Tween`] binds one host object to a set of field targets and a
//! [`TweenInstructions`] record. Playback is driven from outside: the caller
//! starts it with [`Tween::play`] and then either reads values with
//! [`Tween::sample`] or lets [`Tween::step`] write them back into the host.

use crate::binding::PropertyBinding;
use crate::easing::EasingTable;
use crate::instructions::TweenInstructions;
use std::fmt;
use tween_core::{Clock, FieldAccess, FieldError, FxIndexMap, Value};

/// Prefix used by [`Tween::describe`] while the tween is playing
pub const PLAYING_MARKER: &str = "▶ ";

/// One animation of a host object's fields
pub struct Tween<'a, T: FieldAccess + ?Sized> {
    target: &'a mut T,
    instructions: TweenInstructions,
    easing: EasingTable,
    binding: PropertyBinding,
    playing: bool,
    start_time: f64,
}

impl<'a, T: FieldAccess + ?Sized> Tween<'a, T> {
    pub fn new(target: &'a mut T, instructions: TweenInstructions) -> Self {
        Self {
            target,
            instructions,
            easing: EasingTable::default(),
            binding: PropertyBinding::new(),
            playing: false,
            start_time: 0.0,
        }
    }

    /// Evaluate easings with a different curve table
    pub fn with_easing_table(mut self, easing: EasingTable) -> Self {
        self.easing = easing;
        self
    }

    /// Validate and set the target value of a field.
    ///
    /// On failure nothing changes.
    pub fn set_property(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, FieldError> {
        self.binding.assign(&*self.target, name, value.into())?;
        Ok(self)
    }

    /// Builder form of [`set_property`](Self::set_property)
    pub fn add(mut self, name: &str, value: impl Into<Value>) -> Result<Self, FieldError> {
        self.set_property(name, value)?;
        Ok(self)
    }

    /// Start (or restart) playback at the clock's current time
    pub fn play(&mut self, clock: &dyn Clock) -> &mut Self {
        self.play_at(clock.now())
    }

    /// Start (or restart) playback at `now`.
    ///
    /// Re-captures start values from the host for the current properties,
    /// discarding any earlier snapshot.
    pub fn play_at(&mut self, now: f64) -> &mut Self {
        self.binding.capture(&*self.target);
        self.start_time = now;
        self.playing = true;

        tracing::debug!(
            properties = self.binding.len(),
            start_time = now,
            "tween playing"
        );
        if self.instructions.has_repeat_settings() {
            tracing::debug!(
                repeats = self.instructions.repeats(),
                undo_repeats = self.instructions.undo_repeats(),
                "repeat settings are not driven; playing a single pass"
            );
        }
        self
    }

    /// Stop playback; start values are kept
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Normalized time at `now`, clamped to [0, 1].
    ///
    /// A NaN `now` counts as no progress.
    pub fn progress(&self, now: f64) -> f64 {
        let lifetime = self.instructions.lifetime();
        if lifetime.is_nan() || lifetime <= 0.0 {
            return 1.0;
        }
        let ratio = (now - self.start_time) / lifetime;
        if ratio.is_nan() {
            return 0.0;
        }
        ratio.clamp(0.0, 1.0)
    }

    /// Eased blend factor at `now`
    pub fn blend_factor(&self, now: f64) -> f64 {
        self.easing.evaluate(
            self.progress(now),
            self.instructions.style(),
            self.instructions.direction(),
        )
    }

    /// Interpolated value of every property at `now`.
    ///
    /// Empty until the first [`play`](Self::play).
    pub fn sample(&self, now: f64) -> FxIndexMap<String, Value> {
        let blend = self.blend_factor(now);
        tracing::trace!(now, blend, "tween sampled");
        self.binding.blend(blend)
    }

    /// Whether a playing tween has reached the end of its pass at `now`
    pub fn is_finished(&self, now: f64) -> bool {
        self.binding.snapshot().is_some() && self.progress(now) >= 1.0
    }

    /// Sample at `now` and write the values into the host.
    ///
    /// Does nothing unless playing. Playback stops once the pass completes;
    /// returns whether it completed on this step.
    ///
    /// Every field is attempted even if an earlier one fails, so fields the
    /// host accepts are written. On any failure playback stops and the first
    /// error is returned.
    pub fn step(&mut self, now: f64) -> Result<bool, FieldError> {
        if !self.playing {
            return Ok(false);
        }

        let mut first_error = None;
        for (name, value) in self.sample(now) {
            if let Err(err) = self.target.write_field(&name, value) {
                tracing::warn!(field = %name, error = %err, "tween write-back failed");
                first_error.get_or_insert(err);
            }
        }
        if let Some(err) = first_error {
            self.playing = false;
            return Err(err);
        }

        let finished = self.is_finished(now);
        if finished {
            self.playing = false;
            tracing::debug!(now, "tween finished");
        }
        Ok(finished)
    }

    /// Short human-readable summary.
    ///
    /// `Tween (Empty)` without properties, otherwise the first property and
    /// how many more follow.
    pub fn describe(&self) -> String {
        let mut properties = self.binding.properties().iter();
        let Some((name, value)) = properties.next() else {
            return "Tween (Empty)".to_string();
        };

        let marker = if self.playing { PLAYING_MARKER } else { "" };
        let rest = properties.len();
        let more = if rest > 0 {
            format!(", +{rest} more")
        } else {
            String::new()
        };
        format!("Tween ({marker}{name} = {value}{more})")
    }

    pub fn target(&self) -> &T {
        &*self.target
    }

    pub fn instructions(&self) -> &TweenInstructions {
        &self.instructions
    }

    pub fn easing_table(&self) -> &EasingTable {
        &self.easing
    }

    pub fn properties(&self) -> &FxIndexMap<String, Value> {
        self.binding.properties()
    }

    /// Start values captured by the last [`play`](Self::play)
    pub fn snapshot(&self) -> Option<&FxIndexMap<String, Value>> {
        self.binding.snapshot()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }
}

impl<T: FieldAccess + ?Sized> fmt::Display for Tween<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<T: FieldAccess + ?Sized> fmt::Debug for Tween<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("instructions", &self.instructions)
            .field("properties", self.binding.properties())
            .field("playing", &self.playing)
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}
