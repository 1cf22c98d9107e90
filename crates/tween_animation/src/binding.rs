//! Validated property binding
//!
//! A [`PropertyBinding`] holds the fields one tween animates: the target
//! value for each field, and once playback starts, the value each field had
//! at that moment. Assignments are validated against the host before any
//! state changes, so a binding never holds a field that would fail later.

use tween_core::{FieldAccess, FieldError, FxIndexMap, Value, ValueKind};

/// Whether a field of this kind can be animated
pub fn is_interpolatable(kind: ValueKind) -> bool {
    kind.is_interpolatable()
}

/// Check that `value` may be assigned to `name` on `target`.
///
/// Checks run in order: the field exists, is writable, has an
/// interpolatable type, and accepts the value's type. Returns the field's
/// kind on success.
pub fn validate_assignment<T: FieldAccess + ?Sized>(
    target: &T,
    name: &str,
    value: &Value,
) -> Result<ValueKind, FieldError> {
    let field = || name.to_string();

    if !target.has_field(name) {
        return Err(FieldError::UnknownField { field: field() });
    }
    let Some(kind) = target.field_kind(name) else {
        return Err(FieldError::UnknownField { field: field() });
    };

    if !target.is_writable(name) {
        return Err(FieldError::ReadOnlyField { field: field() });
    }

    if !is_interpolatable(kind) {
        return Err(FieldError::NotInterpolatable {
            field: field(),
            kind,
        });
    }

    if !kind.accepts(value.kind()) {
        return Err(FieldError::TypeMismatch {
            field: field(),
            expected: kind,
            found: value.kind(),
        });
    }

    Ok(kind)
}

/// The animated fields of one tween
#[derive(Clone, Debug, Default)]
pub struct PropertyBinding {
    properties: FxIndexMap<String, Value>,
    snapshot: Option<FxIndexMap<String, Value>>,
}

impl PropertyBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a target value for `name`.
    ///
    /// Re-assigning a field replaces its target but keeps its position.
    pub fn assign<T: FieldAccess + ?Sized>(
        &mut self,
        target: &T,
        name: &str,
        value: Value,
    ) -> Result<(), FieldError> {
        if let Err(err) = validate_assignment(target, name, &value) {
            tracing::debug!(field = name, error = %err, "property assignment rejected");
            return Err(err);
        }

        self.properties.insert(name.to_string(), value);
        Ok(())
    }

    /// Record the host's current value of every bound field.
    ///
    /// Replaces any earlier snapshot. Fields the host can no longer read
    /// fall back to their target value, so the snapshot always covers the
    /// same fields as the properties.
    pub fn capture<T: FieldAccess + ?Sized>(&mut self, target: &T) {
        let snapshot = self
            .properties
            .iter()
            .map(|(name, goal)| {
                let start = target.read_field(name).unwrap_or_else(|| goal.clone());
                (name.clone(), start)
            })
            .collect();
        self.snapshot = Some(snapshot);
    }

    /// Interpolate every field from its snapshot toward its target.
    ///
    /// Returns an empty map before the first [`capture`](Self::capture).
    pub fn blend(&self, factor: f64) -> FxIndexMap<String, Value> {
        let Some(snapshot) = &self.snapshot else {
            return FxIndexMap::default();
        };

        snapshot
            .iter()
            .filter_map(|(name, start)| {
                let goal = self.properties.get(name)?;
                let value = start.lerp(goal, factor)?;
                Some((name.clone(), value))
            })
            .collect()
    }

    /// Target values in insertion order
    pub fn properties(&self) -> &FxIndexMap<String, Value> {
        &self.properties
    }

    /// Start values captured at the last playback start
    pub fn snapshot(&self) -> Option<&FxIndexMap<String, Value>> {
        self.snapshot.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
