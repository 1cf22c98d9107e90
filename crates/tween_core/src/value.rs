//! Interpolatable values
//!
//! Host fields are exposed to the animation system as [`Value`]s, a closed
//! sum type over the kinds a field may hold. Only the numeric kinds can be
//! tweened; `Bool` and `Text` exist so hosts can describe every field they
//! own and so that mismatched assignments can be reported precisely.

use std::fmt;

/// Type tag of a [`Value`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// Fixed-point decimal (see [`Fixed`])
    Decimal,
    Bool,
    Text,
}

impl ValueKind {
    /// Every kind, numeric kinds first
    pub const ALL: [ValueKind; 7] = [
        ValueKind::Int,
        ValueKind::Long,
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::Decimal,
        ValueKind::Bool,
        ValueKind::Text,
    ];

    /// Whether values of this kind can be interpolated
    pub fn is_interpolatable(self) -> bool {
        matches!(
            self,
            ValueKind::Int
                | ValueKind::Long
                | ValueKind::Float
                | ValueKind::Double
                | ValueKind::Decimal
        )
    }

    /// Whether a field of this kind accepts a value of `other`.
    ///
    /// Identical kinds always match. Distinct numeric kinds are compatible
    /// with each other, so an `Int` field accepts a `Double` value.
    pub fn accepts(self, other: ValueKind) -> bool {
        self == other || (self.is_interpolatable() && other.is_interpolatable())
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Decimal => "decimal",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-point decimal with four fractional digits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i64);

impl Fixed {
    /// Raw units per whole number
    pub const SCALE: i64 = 10_000;

    pub const ZERO: Fixed = Fixed(0);

    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    pub const fn from_int(value: i64) -> Self {
        Self(value.saturating_mul(Self::SCALE))
    }

    /// Convert from a float, rounding to the nearest representable step
    pub fn from_f64(value: f64) -> Self {
        // `as` saturates at the i64 bounds and maps NaN to zero
        Self((value * Self::SCALE as f64).round() as i64)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let whole = abs / scale;
        let frac = abs % scale;
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{frac:04}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

/// A field value as seen by the animation system
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(Fixed),
    Bool(bool),
    Text(String),
}

impl Value {
    /// The type tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Long(_) => ValueKind::Long,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn is_interpolatable(&self) -> bool {
        self.kind().is_interpolatable()
    }

    /// Numeric payload widened to `f64`, or `None` for non-numeric values
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            Value::Decimal(v) => Some(v.to_f64()),
            Value::Bool(_) | Value::Text(_) => None,
        }
    }

    /// Build a numeric value of `kind` from a float.
    ///
    /// Integer kinds round to nearest and saturate at their bounds.
    /// Returns `None` when `kind` is not numeric.
    pub fn from_f64(kind: ValueKind, value: f64) -> Option<Value> {
        let value = match kind {
            ValueKind::Int => Value::Int(value.round() as i32),
            ValueKind::Long => Value::Long(value.round() as i64),
            ValueKind::Float => Value::Float(value as f32),
            ValueKind::Double => Value::Double(value),
            ValueKind::Decimal => Value::Decimal(Fixed::from_f64(value)),
            ValueKind::Bool | ValueKind::Text => return None,
        };
        Some(value)
    }

    /// Convert into `kind` if the two kinds are compatible
    pub fn coerce(&self, kind: ValueKind) -> Option<Value> {
        if self.kind() == kind {
            return Some(self.clone());
        }
        if !kind.accepts(self.kind()) {
            return None;
        }
        Value::from_f64(kind, self.as_f64()?)
    }

    /// Interpolate from `self` toward `to` by `t`.
    ///
    /// The result keeps `self`'s kind. `t` is not clamped, so easing curves
    /// that overshoot (Back, Elastic) carry through to the value.
    ///
    /// `t == 0` yields `self` and `t == 1` yields `to` converted into
    /// `self`'s kind, both exactly. `Long` and `Decimal` pairs blend in the
    /// integer domain so values beyond 2^53 keep their precision.
    pub fn lerp(&self, to: &Value, t: f64) -> Option<Value> {
        if !self.is_interpolatable() || !to.is_interpolatable() {
            return None;
        }
        let to = to.coerce(self.kind())?;
        if t == 0.0 {
            return Some(self.clone());
        }
        if t == 1.0 {
            return Some(to);
        }

        match (self, &to) {
            (Value::Long(from), Value::Long(to)) => Some(Value::Long(lerp_i64(*from, *to, t))),
            (Value::Decimal(from), Value::Decimal(to)) => Some(Value::Decimal(Fixed::from_raw(
                lerp_i64(from.raw(), to.raw(), t),
            ))),
            _ => {
                let from = self.as_f64()?;
                let to = to.as_f64()?;
                Value::from_f64(self.kind(), from + (to - from) * t)
            }
        }
    }
}

/// Integer blend through `i128`; only the offset passes through `f64`.
/// Saturates at the `i64` bounds.
fn lerp_i64(from: i64, to: i64, t: f64) -> i64 {
    let span = i128::from(to) - i128::from(from);
    let offset = (span as f64 * t).round();
    if offset.is_nan() {
        return from;
    }
    // `as` saturates for out-of-range floats
    let value = i128::from(from).saturating_add(offset as i128);
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<Fixed> for Value {
    fn from(value: Fixed) -> Self {
        Value::Decimal(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_kinds_are_interpolatable() {
        let numeric: Vec<_> = ValueKind::ALL
            .iter()
            .filter(|k| k.is_interpolatable())
            .collect();
        assert_eq!(numeric.len(), 5);
        assert!(!ValueKind::Bool.is_interpolatable());
        assert!(!ValueKind::Text.is_interpolatable());
    }

    #[test]
    fn test_cross_numeric_compatibility() {
        assert!(ValueKind::Double.accepts(ValueKind::Int));
        assert!(ValueKind::Int.accepts(ValueKind::Double));
        assert!(ValueKind::Decimal.accepts(ValueKind::Float));
        assert!(ValueKind::Text.accepts(ValueKind::Text));
        assert!(!ValueKind::Double.accepts(ValueKind::Text));
        assert!(!ValueKind::Bool.accepts(ValueKind::Int));
    }

    #[test]
    fn test_coerce_rounds_into_integer_kinds() {
        assert_eq!(Value::Double(2.6).coerce(ValueKind::Int), Some(Value::Int(3)));
        assert_eq!(Value::Int(2).coerce(ValueKind::Double), Some(Value::Double(2.0)));
        assert_eq!(Value::from("red").coerce(ValueKind::Double), None);
    }

    #[test]
    fn test_lerp_keeps_source_kind() {
        let from = Value::Double(1.0);
        assert_eq!(from.lerp(&Value::Int(2), 0.75), Some(Value::Double(1.75)));

        let from = Value::Int(0);
        assert_eq!(from.lerp(&Value::Double(10.0), 0.44), Some(Value::Int(4)));

        assert_eq!(Value::Bool(true).lerp(&Value::Bool(false), 0.5), None);
    }

    #[test]
    fn test_lerp_allows_overshoot() {
        let v = Value::Double(0.0).lerp(&Value::Double(10.0), 1.5);
        assert_eq!(v, Some(Value::Double(15.0)));
    }

    #[test]
    fn test_lerp_keeps_wide_integers_exact() {
        let from = Value::Long(9_007_199_254_740_993); // 2^53 + 1
        let to = Value::Long(9_007_199_254_740_995);
        assert_eq!(from.lerp(&to, 0.0), Some(from.clone()));
        assert_eq!(from.lerp(&to, 1.0), Some(to.clone()));
        assert_eq!(from.lerp(&to, 0.5), Some(Value::Long(9_007_199_254_740_994)));

        let extreme = Value::Long(i64::MIN).lerp(&Value::Long(i64::MAX), 2.0);
        assert_eq!(extreme, Some(Value::Long(i64::MAX)));

        let from = Value::Decimal(Fixed::from_raw(i64::MAX - 4));
        let to = Value::Decimal(Fixed::from_raw(i64::MAX));
        assert_eq!(from.lerp(&to, 0.0), Some(from.clone()));
        assert_eq!(from.lerp(&to, 0.5), Some(Value::Decimal(Fixed::from_raw(i64::MAX - 2))));
    }

    #[test]
    fn test_lerp_endpoint_converts_target_kind() {
        let from = Value::Long(1);
        assert_eq!(from.lerp(&Value::Double(7.4), 1.0), Some(Value::Long(7)));
        assert_eq!(from.lerp(&Value::from("x"), 1.0), None);
    }

    #[test]
    fn test_fixed_display_trims_zeros() {
        assert_eq!(Fixed::from_f64(1.25).to_string(), "1.25");
        assert_eq!(Fixed::from_int(3).to_string(), "3");
        assert_eq!(Fixed::from_f64(-0.5).to_string(), "-0.5");
        assert_eq!(Fixed::from_raw(1).to_string(), "0.0001");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Double(2.0).to_string(), "2");
        assert_eq!(Value::Double(1.75).to_string(), "1.75");
        assert_eq!(Value::from("red").to_string(), "red");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
