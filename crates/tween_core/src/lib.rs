//! Tween Core
//!
//! Foundational types shared by the tween animation system:
//!
//! - **Values**: a closed sum type over the kinds a host field may hold
//! - **Field Access**: the capability interface hosts implement so their
//!   fields can be validated, read, and written by name
//! - **Clocks**: monotonic time sources for playback
//!
//! # Example
//!
//! ```rust
//! use tween_core::{FieldAccess, FieldSet, Value, ValueKind};
//!
//! let mut node = FieldSet::new()
//!     .with("Size", 1.0)
//!     .with_read_only("Id", 7i64);
//!
//! assert_eq!(node.field_kind("Size"), Some(ValueKind::Double));
//! assert!(!node.is_writable("Id"));
//!
//! // Compatible numeric kinds are coerced into the field's kind
//! node.write_field("Size", Value::Int(2)).unwrap();
//! assert_eq!(node.get("Size"), Some(&Value::Double(2.0)));
//! ```

pub mod clock;
pub mod error;
pub mod field;
pub mod value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{FieldError, Result};
pub use field::{FieldAccess, FieldSet, FxIndexMap};
pub use value::{Fixed, Value, ValueKind};
