//! Resolution-protocol capabilities implemented by consumers.
//!
//! The document-model builder that turns resolved properties into
//! paragraphs, runs and styles implements [`PropertyHandler`]; list-shaped
//! attributes are delivered through [`TableHandler`]. Both are driven by the
//! `resolve` entry points on [`Property`](crate::Property),
//! [`PropertySet`](crate::PropertySet) and [`Table`](crate::Table).

use crate::id::AttributeId;
use crate::property::Property;
use crate::value::Value;

/// Receiver for the entries of a property set.
///
/// A set may carry several entries with the same id; the handler decides
/// which one wins (typically last write wins, since sets are resolved in
/// insertion order).
pub trait PropertyHandler {
    /// Called for each block-level format command.
    ///
    /// The full [`Property`] is passed so the handler can descend into a
    /// nested set via [`Property::properties`].
    fn on_command(&mut self, property: &Property);

    /// Called for each inline key/value attribute.
    fn on_attribute(&mut self, id: AttributeId, value: &Value);
}

/// Receiver for the entries of a value table.
pub trait TableHandler {
    /// Called once per entry, in insertion order.
    fn on_entry(&mut self, value: &Value);
}
