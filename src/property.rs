//! One identified attribute or format command.

use std::fmt;
use std::sync::Arc;

use crate::handler::PropertyHandler;
use crate::id::AttributeId;
use crate::set::PropertySet;
use crate::value::{Value, ValueRef};

/// Storage kind of a [`Property`].
///
/// Format commands and attributes share all other state and behavior; the
/// kind is a tag read at resolution time, deciding which handler callback
/// the property is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Block-level formatting instruction.
    FormatCommand,
    /// Inline key/value pair.
    Attribute,
}

/// One attribute or format command wrapping exactly one value.
///
/// The value is held through a shared [`ValueRef`]; values are immutable, so
/// cloning a property shares the value rather than copying it.
#[derive(Debug, Clone)]
pub struct Property {
    id: AttributeId,
    value: ValueRef,
    kind: PropertyKind,
}

impl Property {
    pub fn new(id: AttributeId, value: ValueRef, kind: PropertyKind) -> Self {
        Self { id, value, kind }
    }

    #[inline]
    pub fn id(&self) -> AttributeId {
        self.id
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The shared handle to the value, for callers that keep it alive past
    /// the property.
    #[inline]
    pub fn value_ref(&self) -> &ValueRef {
        &self.value
    }

    #[inline]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The nested set carried by this property's value, if any.
    ///
    /// Command handlers use this to descend into the sub-scope a format
    /// command introduces.
    pub fn properties(&self) -> Option<&Arc<PropertySet>> {
        self.value.as_properties()
    }

    /// Dispatch this property into the handler according to its kind tag,
    /// so the consumer never branches on kind ahead of time.
    pub fn resolve(&self, handler: &mut dyn PropertyHandler) {
        match self.kind {
            PropertyKind::FormatCommand => handler.on_command(self),
            PropertyKind::Attribute => handler.on_attribute(self.id, &self.value),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            PropertyKind::FormatCommand => "command",
            PropertyKind::Attribute => "attribute",
        };
        write!(f, "{}({}, {})", kind, self.id, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<AttributeId>,
        attributes: Vec<(AttributeId, i32)>,
    }

    impl PropertyHandler for Recorder {
        fn on_command(&mut self, property: &Property) {
            self.commands.push(property.id());
        }

        fn on_attribute(&mut self, id: AttributeId, value: &Value) {
            self.attributes.push((id, value.as_int()));
        }
    }

    #[test]
    fn test_resolve_dispatches_on_kind() {
        let command = Property::new(
            AttributeId::new(10),
            Value::int(1),
            PropertyKind::FormatCommand,
        );
        let attribute = Property::new(AttributeId::new(20), Value::int(2), PropertyKind::Attribute);

        let mut recorder = Recorder::default();
        command.resolve(&mut recorder);
        attribute.resolve(&mut recorder);

        assert_eq!(recorder.commands, vec![AttributeId::new(10)]);
        assert_eq!(recorder.attributes, vec![(AttributeId::new(20), 2)]);
    }

    #[test]
    fn test_display() {
        let property = Property::new(
            AttributeId::new(0x42),
            Value::boolean(true),
            PropertyKind::Attribute,
        );
        assert_eq!(property.to_string(), "attribute(0x00000042, true)");
    }
}
