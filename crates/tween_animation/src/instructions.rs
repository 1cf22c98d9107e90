//! Tween instructions and configuration files
//!
//! [`TweenInstructions`] is the immutable timing/easing record a tween is
//! created with. [`TweenConfig`] bundles instructions with an
//! [`EasingTable`] and loads both from TOML:
//!
//! ```toml
//! [instructions]
//! lifetime = 1.0
//! style = "Quad"
//! direction = "Out"
//!
//! [easing]
//! bounce = false
//! ```

use crate::easing::{EasingDirection, EasingStyle, EasingTable};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Timing and easing settings for one tween
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenInstructions {
    /// Duration of one pass, in the unit of the clock driving playback
    #[serde(default = "default_lifetime")]
    lifetime: f64,
    #[serde(default)]
    style: EasingStyle,
    #[serde(default = "default_direction")]
    direction: EasingDirection,
    /// Extra passes after the first (not driven by playback)
    #[serde(default)]
    repeats: u32,
    /// Whether repeats play back toward the start (not driven by playback)
    #[serde(default)]
    undo_repeats: bool,
    /// Pause between repeats (not driven by playback)
    #[serde(default)]
    repeat_delay: f64,
}

fn default_lifetime() -> f64 {
    0.5
}

fn default_direction() -> EasingDirection {
    EasingDirection::Out
}

impl TweenInstructions {
    /// Instructions with the given lifetime and default everything else
    pub fn new(lifetime: f64) -> Self {
        Self {
            lifetime,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: EasingStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_direction(mut self, direction: EasingDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_undo_repeats(mut self, undo_repeats: bool) -> Self {
        self.undo_repeats = undo_repeats;
        self
    }

    pub fn with_repeat_delay(mut self, repeat_delay: f64) -> Self {
        self.repeat_delay = repeat_delay;
        self
    }

    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    pub fn style(&self) -> EasingStyle {
        self.style
    }

    pub fn direction(&self) -> EasingDirection {
        self.direction
    }

    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    pub fn undo_repeats(&self) -> bool {
        self.undo_repeats
    }

    pub fn repeat_delay(&self) -> f64 {
        self.repeat_delay
    }

    /// Whether any repeat setting differs from a single plain pass
    pub fn has_repeat_settings(&self) -> bool {
        self.repeats > 0 || self.undo_repeats || self.repeat_delay > 0.0
    }

    /// Check the numeric ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.lifetime.is_finite() && self.lifetime > 0.0) {
            return Err(ConfigError::InvalidLifetime(self.lifetime));
        }
        if !(self.repeat_delay.is_finite() && self.repeat_delay >= 0.0) {
            return Err(ConfigError::InvalidRepeatDelay(self.repeat_delay));
        }
        Ok(())
    }
}

impl Default for TweenInstructions {
    fn default() -> Self {
        Self {
            lifetime: default_lifetime(),
            style: EasingStyle::Linear,
            direction: default_direction(),
            repeats: 0,
            undo_repeats: false,
            repeat_delay: 0.0,
        }
    }
}

impl fmt::Display for TweenInstructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TweenInstructions({}, {}, {}, {}, {}, {})",
            self.lifetime,
            self.style,
            self.direction,
            self.repeats,
            self.undo_repeats,
            self.repeat_delay
        )
    }
}

/// A tween configuration file
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TweenConfig {
    #[serde(default)]
    pub instructions: TweenInstructions,
    #[serde(default)]
    pub easing: EasingTable,
}

impl TweenConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: TweenConfig = toml::from_str(text)?;
        config.instructions.validate()?;
        if config.instructions.has_repeat_settings() {
            tracing::debug!(
                repeats = config.instructions.repeats(),
                "repeat settings loaded; playback runs a single pass"
            );
        }
        Ok(config)
    }

    /// Read, parse, and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading tween config");
        Self::from_toml_str(&text)
    }
}
