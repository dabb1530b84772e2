//! Single-attribute probes over the resolution protocol.
//!
//! A probe is a minimal [`PropertyHandler`] that watches exactly one
//! attribute id and captures its value as a primitive, ignoring every other
//! entry. This is the idiomatic way to ask "what is the plain value of
//! attribute X in this set" without writing a full handler:
//!
//! ```
//! use docprop::{AttributeId, IntProbe, PropertyKind, PropertySet, Value};
//!
//! let mut set = PropertySet::new();
//! set.add_value(AttributeId::new(5), Value::int(240), PropertyKind::Attribute);
//!
//! let mut probe = IntProbe::new(AttributeId::new(5));
//! set.resolve(&mut probe);
//! assert_eq!(probe.value(), 240);
//! ```
//!
//! If the id never occurs, a probe keeps its documented default (`""`, `0`,
//! `false`). A value whose natural type does not match goes through the
//! lenient accessors of [`Value`], so probing never errors.

use crate::handler::PropertyHandler;
use crate::id::AttributeId;
use crate::property::Property;
use crate::value::Value;

/// Captures one attribute's value as text; default `""`.
#[derive(Debug)]
pub struct StringProbe {
    id: AttributeId,
    value: String,
}

impl StringProbe {
    pub fn new(id: AttributeId) -> Self {
        Self {
            id,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl PropertyHandler for StringProbe {
    fn on_command(&mut self, _property: &Property) {}

    fn on_attribute(&mut self, id: AttributeId, value: &Value) {
        if id == self.id {
            self.value = value.as_string().unwrap_or_default().to_string();
        }
    }
}

/// Captures one attribute's value as an integer; default `0`.
///
/// A matching value without an integer form is captured through
/// [`Value::as_int`] and therefore reads as the `-1` sentinel.
#[derive(Debug)]
pub struct IntProbe {
    id: AttributeId,
    value: i32,
}

impl IntProbe {
    pub fn new(id: AttributeId) -> Self {
        Self { id, value: 0 }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl PropertyHandler for IntProbe {
    fn on_command(&mut self, _property: &Property) {}

    fn on_attribute(&mut self, id: AttributeId, value: &Value) {
        if id == self.id {
            self.value = value.as_int();
        }
    }
}

/// Captures one attribute's value as a boolean; default `false`.
///
/// Any matching value with a nonzero integer view reads as `true`.
#[derive(Debug)]
pub struct BoolProbe {
    id: AttributeId,
    value: bool,
}

impl BoolProbe {
    pub fn new(id: AttributeId) -> Self {
        Self { id, value: false }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl PropertyHandler for BoolProbe {
    fn on_command(&mut self, _property: &Property) {}

    fn on_attribute(&mut self, id: AttributeId, value: &Value) {
        if id == self.id {
            self.value = value.as_int() != 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyKind;
    use crate::set::PropertySet;

    const ID: AttributeId = AttributeId::new(0x10);
    const OTHER: AttributeId = AttributeId::new(0x11);

    fn sample() -> PropertySet {
        let mut set = PropertySet::new();
        set.add_value(OTHER, Value::string("noise"), PropertyKind::Attribute);
        set.add_value(ID, Value::string("style-7"), PropertyKind::Attribute);
        set
    }

    #[test]
    fn test_string_probe_captures_match() {
        let mut probe = StringProbe::new(ID);
        sample().resolve(&mut probe);
        assert_eq!(probe.value(), "style-7");
    }

    #[test]
    fn test_absent_id_keeps_defaults() {
        let set = sample();

        let mut text = StringProbe::new(AttributeId::new(0x999));
        let mut int = IntProbe::new(AttributeId::new(0x999));
        let mut flag = BoolProbe::new(AttributeId::new(0x999));
        set.resolve(&mut text);
        set.resolve(&mut int);
        set.resolve(&mut flag);

        assert_eq!(text.value(), "");
        assert_eq!(int.value(), 0);
        assert!(!flag.value());
    }

    #[test]
    fn test_type_mismatch_uses_lenient_fallback() {
        // ID holds a string; the integer probe reads the -1 sentinel
        // instead of erroring.
        let mut probe = IntProbe::new(ID);
        sample().resolve(&mut probe);
        assert_eq!(probe.value(), -1);
    }

    #[test]
    fn test_bool_probe() {
        let mut set = PropertySet::new();
        set.add_value(ID, Value::parse_boolean("on").unwrap(), PropertyKind::Attribute);

        let mut probe = BoolProbe::new(ID);
        set.resolve(&mut probe);
        assert!(probe.value());
    }

    #[test]
    fn test_probes_ignore_commands() {
        let mut set = PropertySet::new();
        set.add_value(ID, Value::int(5), PropertyKind::FormatCommand);

        let mut probe = IntProbe::new(ID);
        set.resolve(&mut probe);
        assert_eq!(probe.value(), 0);
    }

    #[test]
    fn test_last_entry_wins() {
        let mut set = sample();
        set.add_value(ID, Value::string("style-9"), PropertyKind::Attribute);

        let mut probe = StringProbe::new(ID);
        set.resolve(&mut probe);
        assert_eq!(probe.value(), "style-9");
    }
}
