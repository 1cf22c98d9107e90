//! Host field access
//!
//! The animation system never inspects host objects directly. Anything that
//! owns animatable fields (a scene node, a widget, a plain record) exposes
//! them through [`FieldAccess`], and the binding layer validates against
//! that interface alone.
//!
//! [`FieldSet`] is a ready-made dynamic host backed by an insertion-ordered
//! map, useful for scripted objects and tests.

use crate::error::{FieldError, Result};
use crate::value::{Value, ValueKind};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered map keyed with the Fx hasher
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Capability interface a host object provides for its animatable fields
pub trait FieldAccess {
    /// Current value of a field, or `None` if the field does not exist
    fn read_field(&self, name: &str) -> Option<Value>;

    /// Whether the host allows the field to be written
    fn is_writable(&self, name: &str) -> bool;

    /// Write a value into a field.
    ///
    /// Implementations should refuse unknown, read-only and incompatible
    /// writes, leaving the field unchanged.
    fn write_field(&mut self, name: &str, value: Value) -> Result<()>;

    /// Type of the field's current value
    fn field_kind(&self, name: &str) -> Option<ValueKind> {
        self.read_field(name).map(|v| v.kind())
    }

    /// Whether the host has a field with this name
    fn has_field(&self, name: &str) -> bool {
        self.field_kind(name).is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Slot {
    value: Value,
    writable: bool,
}

/// A dynamic host object: named slots, each with a value and a writable flag
#[derive(Clone, Debug, Default)]
pub struct FieldSet {
    slots: FxIndexMap<String, Slot>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a writable field (builder pattern)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value, true);
        self
    }

    /// Add a read-only field (builder pattern)
    pub fn with_read_only(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value, false);
        self
    }

    /// Insert or replace a field, declaring its kind from `value`
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>, writable: bool) {
        self.slots.insert(
            name.into(),
            Slot {
                value: value.into(),
                writable,
            },
        );
    }

    /// Current value of a field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).map(|slot| &slot.value)
    }

    /// Field names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FieldAccess for FieldSet {
    fn read_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn is_writable(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|slot| slot.writable)
    }

    fn write_field(&mut self, name: &str, value: Value) -> Result<()> {
        let Some(slot) = self.slots.get_mut(name) else {
            return Err(FieldError::UnknownField {
                field: name.to_string(),
            });
        };

        if !slot.writable {
            return Err(FieldError::ReadOnlyField {
                field: name.to_string(),
            });
        }

        let expected = slot.value.kind();
        let coerced = value.coerce(expected).ok_or_else(|| FieldError::TypeMismatch {
            field: name.to_string(),
            expected,
            found: value.kind(),
        })?;

        tracing::trace!(field = name, value = %coerced, "field written");
        slot.value = coerced;
        Ok(())
    }

    fn field_kind(&self, name: &str) -> Option<ValueKind> {
        self.slots.get(name).map(|slot| slot.value.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> FieldSet {
        FieldSet::new()
            .with("Size", 1.0)
            .with("Position", 0.0f32)
            .with("Name", "node")
            .with_read_only("Id", 7i64)
    }

    #[test]
    fn test_introspection() {
        let node = node();
        assert!(node.has_field("Size"));
        assert!(!node.has_field("Color"));
        assert_eq!(node.field_kind("Position"), Some(ValueKind::Float));
        assert_eq!(node.field_kind("Name"), Some(ValueKind::Text));
        assert!(node.is_writable("Size"));
        assert!(!node.is_writable("Id"));
        assert!(!node.is_writable("Color"));
    }

    #[test]
    fn test_write_coerces_numeric_kinds() {
        let mut node = node();
        node.write_field("Size", Value::Int(2)).unwrap();
        assert_eq!(node.get("Size"), Some(&Value::Double(2.0)));

        node.write_field("Position", Value::Double(0.5)).unwrap();
        assert_eq!(node.get("Position"), Some(&Value::Float(0.5)));
    }

    #[test]
    fn test_write_refusals_leave_field_unchanged() {
        let mut node = node();

        let err = node.write_field("Color", Value::Int(1)).unwrap_err();
        assert!(matches!(err, FieldError::UnknownField { .. }));

        let err = node.write_field("Id", Value::Long(9)).unwrap_err();
        assert!(matches!(err, FieldError::ReadOnlyField { .. }));
        assert_eq!(node.get("Id"), Some(&Value::Long(7)));

        let err = node.write_field("Size", Value::from("red")).unwrap_err();
        assert_eq!(
            err,
            FieldError::TypeMismatch {
                field: "Size".to_string(),
                expected: ValueKind::Double,
                found: ValueKind::Text,
            }
        );
        assert_eq!(node.get("Size"), Some(&Value::Double(1.0)));
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let node = node();
        let names: Vec<_> = node.names().collect();
        assert_eq!(names, vec!["Size", "Position", "Name", "Id"]);
        assert_eq!(node.len(), 4);
    }
}
