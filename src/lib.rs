//! docprop - a typed property/value model for markup document importers
//!
//! This library is the intermediate representation an importer builds while
//! scanning a markup-based document format: a tokenizer discovers elements
//! and attributes, constructs [`Value`]s out of their text, wraps them in
//! [`Property`]s and accumulates them into a [`PropertySet`] (or a [`Table`]
//! for list-shaped attributes). Once a formatting scope is complete, the
//! pipeline calls `resolve` on the set, which forwards every entry to a
//! caller-supplied [`PropertyHandler`] owned by the document-model builder.
//!
//! The model is deliberately lenient: a malformed number or hex color
//! degrades to zero, a typed accessor on the wrong value kind returns a
//! documented default, and only an unrecognized boolean literal is surfaced
//! as an error. One bad attribute must not sink an otherwise-readable
//! document.
//!
//! # Example - collecting and resolving a formatting scope
//!
//! ```
//! use docprop::{
//!     AttributeId, Property, PropertyHandler, PropertyKind, PropertySet, Value,
//! };
//!
//! const FONT_SIZE: AttributeId = AttributeId::new(1);
//! const BOLD: AttributeId = AttributeId::new(2);
//!
//! // The tokenizer found <sz w:val="12pt"/> and <b w:val="1"/>.
//! let mut run_props = PropertySet::with_tag("run");
//! run_props.add_value(FONT_SIZE, Value::half_point_measure("12pt"), PropertyKind::Attribute);
//! run_props.add_value(BOLD, Value::parse_boolean("1")?, PropertyKind::Attribute);
//!
//! // The document-model builder consumes the scope.
//! #[derive(Default)]
//! struct RunBuilder {
//!     size_half_points: i32,
//!     bold: bool,
//! }
//!
//! impl PropertyHandler for RunBuilder {
//!     fn on_command(&mut self, _property: &Property) {}
//!     fn on_attribute(&mut self, id: AttributeId, value: &Value) {
//!         match id {
//!             FONT_SIZE => self.size_half_points = value.as_int(),
//!             BOLD => self.bold = value.as_int() != 0,
//!             _ => {}
//!         }
//!     }
//! }
//!
//! let mut builder = RunBuilder::default();
//! run_props.resolve(&mut builder);
//! assert_eq!(builder.size_half_points, 24);
//! assert!(builder.bold);
//! # Ok::<(), docprop::Error>(())
//! ```
//!
//! # Example - style inheritance by insertion order
//!
//! ```
//! use docprop::{AttributeId, PropertyKind, PropertySet, StringProbe, Value};
//!
//! const COLOR: AttributeId = AttributeId::new(7);
//!
//! let mut style = PropertySet::new();
//! style.add_value(COLOR, Value::string("base"), PropertyKind::Attribute);
//!
//! let mut merged = style.clone();
//! let mut direct = PropertySet::new();
//! direct.add_value(COLOR, Value::string("override"), PropertyKind::Attribute);
//! merged.append(&direct);
//!
//! // Later entries win for any last-write-wins handler, like the probes.
//! let mut probe = StringProbe::new(COLOR);
//! merged.resolve(&mut probe);
//! assert_eq!(probe.value(), "override");
//! ```

pub mod binary;
pub mod error;
pub mod handler;
pub mod id;
pub mod measure;
pub mod probe;
pub mod property;
pub mod set;
pub mod value;

pub use binary::{BinaryProvider, BinaryReference};
pub use error::{Error, Result};
pub use handler::{PropertyHandler, TableHandler};
pub use id::AttributeId;
pub use probe::{BoolProbe, IntProbe, StringProbe};
pub use property::{Property, PropertyKind};
pub use set::{PropertySet, Table};
pub use value::{AnyValue, NO_INT, ObjectHandle, ObjectKind, ObjectRef, Value, ValueRef};
