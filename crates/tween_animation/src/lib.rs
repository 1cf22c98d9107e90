//! Tween Animation System
//!
//! Easing curves, validated property binding, and single-pass playback.
//!
//! # Features
//!
//! - **Easing**: twelve curve families composed with In/Out/InOut/OutIn
//! - **Validated Binding**: only existing, writable, numeric fields with a
//!   compatible value can be animated, checked before any state changes
//! - **Playback**: start values are captured on play, values are sampled or
//!   written back against any clock
//! - **Configuration**: instructions and curve tables load from TOML
//!
//! # Example
//!
//! ```rust
//! use tween_animation::{EasingDirection, EasingStyle, Tween, TweenInstructions};
//! use tween_core::{FieldSet, Value};
//!
//! let mut node = FieldSet::new().with("Size", 1.0);
//! let instructions = TweenInstructions::new(1.0)
//!     .with_style(EasingStyle::Quad)
//!     .with_direction(EasingDirection::Out);
//!
//! let mut tween = Tween::new(&mut node, instructions).add("Size", 2.0).unwrap();
//! tween.play_at(0.0);
//!
//! assert_eq!(tween.sample(0.5).get("Size"), Some(&Value::Double(1.75)));
//! ```

pub mod binding;
pub mod easing;
pub mod error;
pub mod instructions;
pub mod scheduler;
pub mod tween;

pub use binding::{is_interpolatable, validate_assignment, PropertyBinding};
pub use easing::{evaluate, EasingDirection, EasingStyle, EasingTable};
pub use error::ConfigError;
pub use instructions::{TweenConfig, TweenInstructions};
pub use scheduler::{TweenId, TweenScheduler};
pub use tween::Tween;
