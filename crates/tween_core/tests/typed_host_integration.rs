//! Integration tests for a hand-written host + tween playback
//!
//! These tests verify that:
//! - A struct with typed fields can expose them through `FieldAccess`
//! - Validation follows the host's own writability and type rules
//! - Write-back converts blended values into each field's native type
//! - Several hosts can be driven from one scheduler

use tween_animation::{EasingDirection, EasingStyle, Tween, TweenInstructions, TweenScheduler};
use tween_core::{Clock, FieldAccess, FieldError, Fixed, ManualClock, Value, ValueKind};

/// A scene-node-like host with one field per value kind
#[derive(Debug)]
struct Node {
    id: i64,
    name: String,
    size: f64,
    opacity: f32,
    layer: i32,
    price: Fixed,
    visible: bool,
}

impl Node {
    fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("node-{id}"),
            size: 1.0,
            opacity: 0.0,
            layer: 0,
            price: Fixed::from_int(10),
            visible: true,
        }
    }
}

impl FieldAccess for Node {
    fn read_field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "Id" => Value::Long(self.id),
            "Name" => Value::Text(self.name.clone()),
            "Size" => Value::Double(self.size),
            "Opacity" => Value::Float(self.opacity),
            "Layer" => Value::Int(self.layer),
            "Price" => Value::Decimal(self.price),
            "Visible" => Value::Bool(self.visible),
            _ => return None,
        };
        Some(value)
    }

    fn is_writable(&self, name: &str) -> bool {
        self.has_field(name) && name != "Id"
    }

    fn write_field(&mut self, name: &str, value: Value) -> Result<(), FieldError> {
        let expected = self.field_kind(name).ok_or_else(|| FieldError::UnknownField {
            field: name.to_string(),
        })?;
        if !self.is_writable(name) {
            return Err(FieldError::ReadOnlyField {
                field: name.to_string(),
            });
        }
        let mismatch = || FieldError::TypeMismatch {
            field: name.to_string(),
            expected,
            found: value.kind(),
        };

        match (name, value.coerce(expected).ok_or_else(mismatch)?) {
            ("Name", Value::Text(v)) => self.name = v,
            ("Size", Value::Double(v)) => self.size = v,
            ("Opacity", Value::Float(v)) => self.opacity = v,
            ("Layer", Value::Int(v)) => self.layer = v,
            ("Price", Value::Decimal(v)) => self.price = v,
            ("Visible", Value::Bool(v)) => self.visible = v,
            _ => return Err(mismatch()),
        }
        Ok(())
    }
}

fn linear(lifetime: f64) -> TweenInstructions {
    TweenInstructions::new(lifetime)
        .with_style(EasingStyle::Linear)
        .with_direction(EasingDirection::In)
}

/// Test that host rules drive validation
#[test]
fn test_typed_host_validation() {
    let mut node = Node::new(1);
    assert_eq!(node.field_kind("Price"), Some(ValueKind::Decimal));

    let mut tween = Tween::new(&mut node, linear(1.0));

    assert!(matches!(
        tween.set_property("Id", 5i64),
        Err(FieldError::ReadOnlyField { .. })
    ));
    assert!(matches!(
        tween.set_property("Visible", false),
        Err(FieldError::NotInterpolatable { .. })
    ));
    assert!(matches!(
        tween.set_property("Size", true),
        Err(FieldError::TypeMismatch { .. })
    ));
    assert!(matches!(
        tween.set_property("Colour", 1.0),
        Err(FieldError::UnknownField { .. })
    ));

    tween
        .set_property("Size", 3)
        .unwrap()
        .set_property("Layer", 9.0)
        .unwrap();
    assert_eq!(tween.properties().len(), 2);
}

/// Test that write-back lands in each field's native type
#[test]
fn test_write_back_converts_kinds() {
    let mut node = Node::new(2);

    {
        let mut tween = Tween::new(&mut node, linear(2.0))
            .add("Size", 3)
            .unwrap()
            .add("Opacity", 1.0)
            .unwrap()
            .add("Layer", 10i64)
            .unwrap()
            .add("Price", 20.5)
            .unwrap();
        tween.play_at(0.0);

        assert!(!tween.step(0.5).unwrap());
        let node = tween.target();
        assert_eq!(node.size, 1.5);
        assert_eq!(node.opacity, 0.25);
        assert_eq!(node.layer, 3);
        assert_eq!(node.price, Fixed::from_f64(12.625));

        assert!(tween.step(2.0).unwrap());
    }

    assert_eq!(node.size, 3.0);
    assert_eq!(node.opacity, 1.0);
    assert_eq!(node.layer, 10);
    assert_eq!(node.price, Fixed::from_f64(20.5));
    assert_eq!(node.name, "node-2");
}

/// Test that a scheduler drives heterogeneous hosts through trait objects
#[test]
fn test_scheduler_with_mixed_hosts() {
    let mut node = Node::new(3);
    let mut record = tween_core::FieldSet::new().with("Width", 0i32);
    let clock = ManualClock::new(0.0);

    {
        let node_host: &mut dyn FieldAccess = &mut node;
        let record_host: &mut dyn FieldAccess = &mut record;

        let mut scheduler = TweenScheduler::new();
        scheduler.add(Tween::new(node_host, linear(1.0)).add("Size", 5.0).unwrap());
        scheduler.add(Tween::new(record_host, linear(4.0)).add("Width", 100).unwrap());
        scheduler.play_all(&clock);

        let mut finished = 0;
        while scheduler.has_active() {
            clock.advance(0.25);
            finished += scheduler.tick(clock.now()).len();
        }
        assert_eq!(finished, 2);
        assert_eq!(clock.now(), 4.0);
    }

    assert_eq!(node.size, 5.0);
    assert_eq!(record.get("Width"), Some(&Value::Int(100)));
}
