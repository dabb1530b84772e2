//! Ordered property bags and value tables.

use std::fmt;

use smallvec::SmallVec;

use crate::handler::{PropertyHandler, TableHandler};
use crate::id::AttributeId;
use crate::property::{Property, PropertyKind};
use crate::value::ValueRef;

// Most formatting scopes carry a handful of entries; keep them inline.
type Properties = SmallVec<[Property; 8]>;

/// Ordered, appendable bag of properties for one formatting scope.
///
/// The set never deduplicates ids. Later entries with the same id are a
/// designed possibility, and which entry wins is entirely the resolution
/// handler's policy; a handler that re-assigns on every callback gets
/// last-write-wins for free. [`append`](Self::append) places the other
/// set's entries after this set's own, so formatting inheritance is
/// realized by appending base properties first and local overrides second —
/// insertion order encodes precedence order.
///
/// # Examples
///
/// ```
/// use docprop::{AttributeId, Property, PropertyHandler, PropertyKind, PropertySet, Value};
///
/// let mut style = PropertySet::with_tag("character");
/// style.add_value(AttributeId::new(1), Value::half_point_measure("12pt"), PropertyKind::Attribute);
///
/// // Fork the shared style template for one occurrence.
/// let mut direct = style.clone();
/// direct.add_value(AttributeId::new(1), Value::half_point_measure("16pt"), PropertyKind::Attribute);
///
/// struct LastWins(i32);
/// impl PropertyHandler for LastWins {
///     fn on_command(&mut self, _: &Property) {}
///     fn on_attribute(&mut self, _: AttributeId, value: &docprop::Value) {
///         self.0 = value.as_int();
///     }
/// }
///
/// let mut handler = LastWins(0);
/// direct.resolve(&mut handler);
/// assert_eq!(handler.0, 32); // the override, in half-points
/// assert_eq!(style.len(), 1); // the template is untouched
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: Properties,
    tag: Option<Box<str>>,
}

impl PropertySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set carrying an opaque type tag naming the scope it
    /// was collected for (e.g. `"paragraph"`).
    pub fn with_tag(tag: impl Into<Box<str>>) -> Self {
        Self {
            properties: Properties::new(),
            tag: Some(tag.into()),
        }
    }

    /// The opaque type tag, if any. The model never interprets it.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_tag(&mut self, tag: impl Into<Box<str>>) {
        self.tag = Some(tag.into());
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Append a property. O(1) amortized; duplicate ids are kept.
    pub fn add(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Wrap a value in a property and append it.
    pub fn add_value(&mut self, id: AttributeId, value: ValueRef, kind: PropertyKind) {
        self.add(Property::new(id, value, kind));
    }

    /// Append all of `other`'s properties after this set's own, preserving
    /// the relative order of each side.
    pub fn append(&mut self, other: &PropertySet) {
        self.properties.extend(other.properties.iter().cloned());
    }

    /// Forward every entry to the handler, in insertion order. Never
    /// mutates the set.
    pub fn resolve(&self, handler: &mut dyn PropertyHandler) {
        for property in &self.properties {
            property.resolve(handler);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl fmt::Display for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "props[{}](", self.tag().unwrap_or(""))?;
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", property)?;
        }
        f.write_str(")")
    }
}

/// Ordered sequence of values for list-shaped attributes such as tab-stop
/// lists and numbering levels, where a flat id→value bag does not fit.
#[derive(Debug, Clone, Default)]
pub struct Table {
    entries: Vec<ValueRef>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a value to the sequence.
    pub fn add(&mut self, value: ValueRef) {
        self.entries.push(value);
    }

    /// Forward every entry to the handler, in insertion order.
    pub fn resolve(&self, handler: &mut dyn TableHandler) {
        for value in &self.entries {
            handler.on_entry(value);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValueRef> {
        self.entries.iter()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("table(")?;
        for (i, value) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}
