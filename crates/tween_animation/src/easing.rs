//! Easing functions for tweens
//!
//! An easing is a curve family ([`EasingStyle`]) composed with a direction
//! ([`EasingDirection`]). Every family defines an "in" curve `f` on [0, 1]
//! that is clamped outside that range; the directions are built from `f` by
//! reflection.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Curve family
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EasingStyle {
    #[default]
    Linear,
    Constant,
    Sine,
    Quad,
    Cubic,
    Quartic,
    Quintic,
    Expo,
    Circular,
    Back,
    Elastic,
    Bounce,
}

impl EasingStyle {
    pub const ALL: [EasingStyle; 12] = [
        EasingStyle::Linear,
        EasingStyle::Constant,
        EasingStyle::Sine,
        EasingStyle::Quad,
        EasingStyle::Cubic,
        EasingStyle::Quartic,
        EasingStyle::Quintic,
        EasingStyle::Expo,
        EasingStyle::Circular,
        EasingStyle::Back,
        EasingStyle::Elastic,
        EasingStyle::Bounce,
    ];

    /// Parse a style name, case-insensitively.
    ///
    /// Returns `None` for unknown names; [`From<String>`] falls back to
    /// `Linear` instead.
    pub fn from_name(name: &str) -> Option<Self> {
        let style = match name.trim().to_ascii_lowercase().as_str() {
            "linear" => EasingStyle::Linear,
            "constant" => EasingStyle::Constant,
            "sine" => EasingStyle::Sine,
            "quad" | "quadratic" => EasingStyle::Quad,
            "cubic" => EasingStyle::Cubic,
            "quartic" | "quart" => EasingStyle::Quartic,
            "quintic" | "quint" => EasingStyle::Quintic,
            "expo" | "exponential" => EasingStyle::Expo,
            "circular" | "circ" => EasingStyle::Circular,
            "back" => EasingStyle::Back,
            "elastic" => EasingStyle::Elastic,
            "bounce" => EasingStyle::Bounce,
            _ => return None,
        };
        Some(style)
    }

    pub fn name(self) -> &'static str {
        match self {
            EasingStyle::Linear => "Linear",
            EasingStyle::Constant => "Constant",
            EasingStyle::Sine => "Sine",
            EasingStyle::Quad => "Quad",
            EasingStyle::Cubic => "Cubic",
            EasingStyle::Quartic => "Quartic",
            EasingStyle::Quintic => "Quintic",
            EasingStyle::Expo => "Expo",
            EasingStyle::Circular => "Circular",
            EasingStyle::Back => "Back",
            EasingStyle::Elastic => "Elastic",
            EasingStyle::Bounce => "Bounce",
        }
    }

    /// The unclamped-domain "in" curve, clamped to 0 below and 1 above [0, 1]
    pub fn curve(self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        match self {
            EasingStyle::Linear => x,
            EasingStyle::Constant => 0.0,
            EasingStyle::Sine => 1.0 - (x * PI / 2.0).cos(),
            EasingStyle::Quad => x * x,
            EasingStyle::Cubic => x * x * x,
            EasingStyle::Quartic => x * x * x * x,
            EasingStyle::Quintic => x * x * x * x * x,
            EasingStyle::Expo => 2.0_f64.powf(10.0 * x - 10.0),
            EasingStyle::Circular => 1.0 - (1.0 - x * x).sqrt(),
            EasingStyle::Back => {
                let overshoot = BACK_OVERSHOOT;
                let level = overshoot + 1.0;
                level * x * x * x - overshoot * x * x
            }
            EasingStyle::Elastic => {
                -(2.0_f64.powf(10.0 * x - 10.0)) * ((10.0 * x - 10.75) * (2.0 * PI / 3.0)).sin()
            }
            EasingStyle::Bounce => bounce(x),
        }
    }
}

impl From<String> for EasingStyle {
    fn from(name: String) -> Self {
        EasingStyle::from_name(&name).unwrap_or_else(|| {
            tracing::warn!(name = %name, "unknown easing style, using Linear");
            EasingStyle::Linear
        })
    }
}

impl fmt::Display for EasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the base curve is reflected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EasingDirection {
    /// The base curve as-is
    #[default]
    In,
    /// The base curve mirrored in both axes
    Out,
    /// `In` for the first half, `Out` for the second
    InOut,
    /// `Out` for the first half, `In` for the second
    OutIn,
}

impl EasingDirection {
    pub const ALL: [EasingDirection; 4] = [
        EasingDirection::In,
        EasingDirection::Out,
        EasingDirection::InOut,
        EasingDirection::OutIn,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let direction = match name.trim().to_ascii_lowercase().as_str() {
            "in" => EasingDirection::In,
            "out" => EasingDirection::Out,
            "inout" | "in_out" | "in-out" => EasingDirection::InOut,
            "outin" | "out_in" | "out-in" => EasingDirection::OutIn,
            _ => return None,
        };
        Some(direction)
    }

    pub fn name(self) -> &'static str {
        match self {
            EasingDirection::In => "In",
            EasingDirection::Out => "Out",
            EasingDirection::InOut => "InOut",
            EasingDirection::OutIn => "OutIn",
        }
    }

    /// Compose the direction with a base curve `f`
    pub fn compose(self, x: f64, f: impl Fn(f64) -> f64) -> f64 {
        match self {
            EasingDirection::In => f(x),
            EasingDirection::Out => 1.0 - f(1.0 - x),
            EasingDirection::InOut => {
                if x <= 0.5 {
                    f(2.0 * x) / 2.0
                } else {
                    (1.0 - f(1.0 - (2.0 * x - 1.0)) + 1.0) / 2.0
                }
            }
            EasingDirection::OutIn => {
                if x <= 0.5 {
                    (1.0 - f(1.0 - 2.0 * x)) / 2.0
                } else {
                    f(2.0 * x - 1.0) / 2.0 + 0.5
                }
            }
        }
    }
}

impl From<String> for EasingDirection {
    fn from(name: String) -> Self {
        EasingDirection::from_name(&name).unwrap_or_else(|| {
            tracing::warn!(name = %name, "unknown easing direction, using In");
            EasingDirection::In
        })
    }
}

impl fmt::Display for EasingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Overshoot amount of the Back curve
pub const BACK_OVERSHOOT: f64 = 1.85;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

fn bounce(x: f64) -> f64 {
    let (n1, d1) = (BOUNCE_N1, BOUNCE_D1);
    if x < 1.0 / d1 {
        n1 * x * x
    } else if x < 2.0 / d1 {
        n1 * (x - 1.5 / d1) * x + 0.75
    } else if x < 2.5 / d1 {
        n1 * (x - 2.25 / d1) * x + 0.9375
    } else {
        n1 * (x - 2.625 / d1) * x + 0.984375
    }
}

/// Evaluate an easing at normalized time `x`.
///
/// Never fails: the base curve clamps out-of-range input.
pub fn evaluate(x: f64, style: EasingStyle, direction: EasingDirection) -> f64 {
    direction.compose(x, |t| style.curve(t))
}

/// The set of curve families available for evaluation.
///
/// Bounce is a capability: a table without it evaluates Bounce as the
/// default (Linear) curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasingTable {
    #[serde(default = "default_true")]
    pub bounce: bool,
}

fn default_true() -> bool {
    true
}

impl EasingTable {
    /// All twelve families
    pub const FULL: EasingTable = EasingTable { bounce: true };

    /// Eleven families, Bounce disabled
    pub const WITHOUT_BOUNCE: EasingTable = EasingTable { bounce: false };

    pub fn supports(&self, style: EasingStyle) -> bool {
        style != EasingStyle::Bounce || self.bounce
    }

    /// The style actually evaluated for `style`
    pub fn resolve(&self, style: EasingStyle) -> EasingStyle {
        if self.supports(style) {
            style
        } else {
            EasingStyle::default()
        }
    }

    pub fn evaluate(&self, x: f64, style: EasingStyle, direction: EasingDirection) -> f64 {
        evaluate(x, self.resolve(style), direction)
    }

    /// Styles this table can evaluate
    pub fn styles(&self) -> impl Iterator<Item = EasingStyle> + '_ {
        EasingStyle::ALL.into_iter().filter(|s| self.supports(*s))
    }
}

impl Default for EasingTable {
    fn default() -> Self {
        Self::FULL
    }
}
