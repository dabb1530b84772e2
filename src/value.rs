//! The polymorphic value hierarchy.
//!
//! Every parsed attribute value is one case of the [`Value`] tagged union.
//! Values are immutable after construction and shared by [`ValueRef`], which
//! is what makes the boolean/small-integer flyweights and the cheap
//! [`PropertySet::clone`](crate::PropertySet) possible. Each accessor has a
//! documented default for value kinds it does not apply to, so resolution
//! code can probe heterogeneous ids without halting on a type mismatch.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::binary::BinaryReference;
use crate::error::{Error, Result};
use crate::measure;
use crate::set::PropertySet;

/// Shared handle to an immutable [`Value`].
pub type ValueRef = Arc<Value>;

/// Sentinel returned by [`Value::as_int`] for values without an integer
/// form.
pub const NO_INT: i32 = -1;

/// Opaque shared handle to an external model object.
pub type ObjectHandle = Arc<dyn Any + Send + Sync>;

/// Discriminant for external model objects carried as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A drawing shape.
    Shape,
    /// An embedded component, e.g. a formula object.
    Embedded,
}

/// Handle to a non-formatting model object travelling through the attribute
/// channel.
///
/// The markup grammar allows non-scalar content wherever an attribute value
/// is syntactically permitted, so shapes and embedded objects ride along in
/// the same representation. The handle is opaque to this crate; the
/// document-model builder downcasts it back to its concrete type.
#[derive(Clone)]
pub struct ObjectRef {
    kind: ObjectKind,
    handle: ObjectHandle,
}

impl ObjectRef {
    /// Wrap a drawing-shape handle.
    pub fn shape(handle: ObjectHandle) -> Self {
        Self {
            kind: ObjectKind::Shape,
            handle,
        }
    }

    /// Wrap an embedded-component handle.
    pub fn embedded(handle: ObjectHandle) -> Self {
        Self {
            kind: ObjectKind::Embedded,
            handle,
        }
    }

    #[inline]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    #[inline]
    pub fn handle(&self) -> &ObjectHandle {
        &self.handle
    }

    /// Downcast the handle to its concrete model type.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.handle.downcast_ref()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef").field("kind", &self.kind).finish()
    }
}

/// Scalar payload produced by [`Value::as_any`], mirroring the natural type
/// of the underlying value.
#[derive(Debug, Clone)]
pub enum AnyValue {
    Bool(bool),
    Int(i32),
    Str(Arc<str>),
    Object(ObjectRef),
}

// Flyweights. Values are immutable, so sharing one instance across every
// owner is safe.
static TRUE_VALUE: Lazy<ValueRef> = Lazy::new(|| Arc::new(Value::Bool(true)));
static FALSE_VALUE: Lazy<ValueRef> = Lazy::new(|| Arc::new(Value::Bool(false)));
static SMALL_INTS: Lazy<[ValueRef; 10]> =
    Lazy::new(|| std::array::from_fn(|n| Arc::new(Value::Int(n as i32))));

/// One parsed attribute value.
///
/// Constructed through the associated functions below, which perform all
/// text parsing; the variants themselves are plain data. Parsing follows the
/// robustness rule of the importer: malformed numeric text degrades to zero,
/// only an unrecognized boolean literal is reported as an error.
///
/// # Examples
///
/// ```
/// use docprop::Value;
///
/// let color = Value::parse_hex_color("FF0000");
/// assert_eq!(color.as_int(), 16711680);
///
/// let size = Value::half_point_measure("12pt");
/// assert_eq!(size.as_int(), 24);
///
/// // Speculative typed access never fails.
/// let name = Value::string("Heading 1");
/// assert_eq!(name.as_int(), -1);
/// assert_eq!(name.as_string(), Some("Heading 1"));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Signed 32-bit integer.
    Int(i32),
    /// Unsigned quantity parsed from hexadecimal text.
    Hex(u32),
    /// Length in integer subunits (see [`measure`]).
    Measure(i32),
    /// Proportional value in whole percent, kept distinct from absolute
    /// lengths so the distinction is never lossy.
    Percent(i32),
    /// Raw text payload.
    Str(Arc<str>),
    /// Lazy reference to an out-of-band payload.
    Binary(BinaryReference),
    /// External model object (shape, embedded component).
    Object(ObjectRef),
    /// Nested property set; recursion is broken by the shared handle.
    Properties(Arc<PropertySet>),
}

impl Value {
    /// Shared flyweight for a boolean value.
    pub fn boolean(value: bool) -> ValueRef {
        if value {
            TRUE_VALUE.clone()
        } else {
            FALSE_VALUE.clone()
        }
    }

    /// Parse a boolean literal.
    ///
    /// Accepts `true`/`false`/`on`/`off`/`1`/`0`, case-insensitive. Any
    /// other text is reported as [`Error::InvalidBoolean`]: unlike a
    /// malformed number, a bad boolean token usually means the producing
    /// grammar is wrong, which is worth surfacing.
    pub fn parse_boolean(text: &str) -> Result<ValueRef> {
        let value = match text {
            "true" | "on" | "1" => true,
            "false" | "off" | "0" => false,
            _ => match text.to_ascii_lowercase().as_str() {
                "true" | "on" => true,
                "false" | "off" => false,
                _ => return Err(Error::InvalidBoolean(text.to_string())),
            },
        };
        Ok(Self::boolean(value))
    }

    /// Integer value; small non-negative values are served from a shared
    /// cache.
    pub fn int(value: i32) -> ValueRef {
        match usize::try_from(value) {
            Ok(n) if n < SMALL_INTS.len() => SMALL_INTS[n].clone(),
            _ => Arc::new(Value::Int(value)),
        }
    }

    /// Parse hexadecimal text with an optional `0x` prefix.
    ///
    /// Any non-hex digit after the prefix makes the whole value `0`; one bad
    /// attribute must not sink an otherwise-good document.
    pub fn parse_hex(text: &str) -> ValueRef {
        Arc::new(Value::Hex(parse_hex_digits(text, &["0x", "0X"])))
    }

    /// Parse a hex RGB color, additionally accepting a `#` prefix.
    pub fn parse_hex_color(text: &str) -> ValueRef {
        Arc::new(Value::Hex(parse_hex_digits(text, &["0x", "0X", "#"])))
    }

    /// Parse a textual length into `subunits_per_pt` subunits.
    pub fn measure(text: &str, subunits_per_pt: u32) -> ValueRef {
        Arc::new(Value::Measure(measure::parse_measure(
            text,
            subunits_per_pt,
        )))
    }

    /// Length in twips (1/20 pt), OOXML's `ST_TwipsMeasure`.
    pub fn twips_measure(text: &str) -> ValueRef {
        Self::measure(text, measure::TWIPS_PER_PT)
    }

    /// Length in half-points (1/2 pt), OOXML's `ST_HpsMeasure`.
    pub fn half_point_measure(text: &str) -> ValueRef {
        Self::measure(text, measure::HALF_POINTS_PER_PT)
    }

    /// Parse a length that may instead be a percentage.
    ///
    /// A trailing `%` switches interpretation to [`Value::Percent`]; the two
    /// cases stay distinguishable to any consumer.
    pub fn measure_or_percent(text: &str, subunits_per_pt: u32) -> ValueRef {
        match measure::parse_percent(text) {
            Some(percent) => Arc::new(Value::Percent(percent)),
            None => Self::measure(text, subunits_per_pt),
        }
    }

    /// Raw text value.
    pub fn string(text: impl Into<Arc<str>>) -> ValueRef {
        Arc::new(Value::Str(text.into()))
    }

    /// Lazy binary payload value; stores the handle only, no I/O.
    pub fn binary(reference: BinaryReference) -> ValueRef {
        Arc::new(Value::Binary(reference))
    }

    /// External model object value.
    pub fn object(object: ObjectRef) -> ValueRef {
        Arc::new(Value::Object(object))
    }

    /// Nested property-set value.
    pub fn properties(set: Arc<PropertySet>) -> ValueRef {
        Arc::new(Value::Properties(set))
    }

    /// Integer view of the value.
    ///
    /// Booleans map to `0`/`1`; hex, measure and percent values yield their
    /// stored quantity. Everything else yields the [`NO_INT`] sentinel —
    /// never an error, because resolution code performs speculative typed
    /// access across heterogeneous ids.
    pub fn as_int(&self) -> i32 {
        match self {
            Value::Bool(b) => i32::from(*b),
            Value::Int(n) => *n,
            Value::Hex(n) => *n as i32,
            Value::Measure(n) | Value::Percent(n) => *n,
            _ => NO_INT,
        }
    }

    /// Text view; `None` unless this is a string value.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value boxed as its natural scalar type, for consumers that
    /// forward it without interpretation; `None` for kinds without a scalar
    /// form.
    pub fn as_any(&self) -> Option<AnyValue> {
        match self {
            Value::Bool(b) => Some(AnyValue::Bool(*b)),
            Value::Int(n) => Some(AnyValue::Int(*n)),
            Value::Str(s) => Some(AnyValue::Str(s.clone())),
            Value::Object(o) => Some(AnyValue::Object(o.clone())),
            _ => None,
        }
    }

    /// The nested set; `None` unless this is a property-set value.
    pub fn as_properties(&self) -> Option<&Arc<PropertySet>> {
        match self {
            Value::Properties(set) => Some(set),
            _ => None,
        }
    }

    /// The binary reference; `None` unless this is a binary value.
    pub fn as_binary(&self) -> Option<&BinaryReference> {
        match self {
            Value::Binary(reference) => Some(reference),
            _ => None,
        }
    }

    /// `true` for the percentage case of a measurement-or-percent value.
    #[inline]
    pub fn is_percent(&self) -> bool {
        matches!(self, Value::Percent(_))
    }
}

fn parse_hex_digits(text: &str, prefixes: &[&str]) -> u32 {
    let mut digits = text;
    for prefix in prefixes {
        if let Some(rest) = digits.strip_prefix(prefix) {
            digits = rest;
            break;
        }
    }
    if digits.is_empty() {
        return 0;
    }
    // from_str_radix tolerates a leading sign, but a sign is not a hex
    // digit; the whole value is malformed.
    if digits.starts_with(['+', '-']) {
        return 0;
    }
    u32::from_str_radix(digits, 16).unwrap_or(0)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Hex(n) => write!(f, "0x{:X}", n),
            Value::Measure(n) => write!(f, "{}", n),
            Value::Percent(n) => write!(f, "{}%", n),
            Value::Str(s) => f.write_str(s),
            Value::Binary(reference) => write!(f, "binary({})", reference.handle()),
            Value::Object(o) => match o.kind() {
                ObjectKind::Shape => f.write_str("shape"),
                ObjectKind::Embedded => f.write_str("embedded"),
            },
            Value::Properties(set) => write!(f, "{}", set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_flyweights() {
        let a = Value::boolean(true);
        let b = Value::parse_boolean("1").unwrap();
        let c = Value::parse_boolean("TRUE").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &c));
        assert_eq!(a.as_int(), 1);

        let d = Value::parse_boolean("off").unwrap();
        assert!(Arc::ptr_eq(&d, &Value::boolean(false)));
        assert_eq!(d.as_int(), 0);
    }

    #[test]
    fn test_boolean_rejects_unknown_literals() {
        assert!(matches!(
            Value::parse_boolean("yes"),
            Err(Error::InvalidBoolean(_))
        ));
        assert!(Value::parse_boolean("").is_err());
    }

    #[test]
    fn test_small_integer_cache() {
        assert!(Arc::ptr_eq(&Value::int(5), &Value::int(5)));
        assert_eq!(Value::int(5).as_int(), 5);
        assert_eq!(Value::int(-3).as_int(), -3);
        assert_eq!(Value::int(123456).as_int(), 123456);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Value::parse_hex_color("FF0000").as_int(), 16711680);
        assert_eq!(Value::parse_hex_color("#00FF00").as_int(), 65280);
        assert_eq!(Value::parse_hex("0xFF").as_int(), 255);
        assert_eq!(Value::parse_hex("1A2B").as_int(), 0x1A2B);
        // Malformed digits degrade to zero instead of failing the parse.
        assert_eq!(Value::parse_hex("FFZZ").as_int(), 0);
        assert_eq!(Value::parse_hex("").as_int(), 0);
        // A sign is not a hex digit either.
        assert_eq!(Value::parse_hex("+FF").as_int(), 0);
        assert_eq!(Value::parse_hex("-FF").as_int(), 0);
        assert_eq!(Value::parse_hex("0x+FF").as_int(), 0);
    }

    #[test]
    fn test_hex_color_keeps_alpha_byte() {
        match &*Value::parse_hex_color("FFFF0000") {
            Value::Hex(n) => assert_eq!(*n, 0xFFFF_0000),
            other => panic!("expected hex value, got {:?}", other),
        }
    }

    #[test]
    fn test_measure_and_percent_stay_distinct() {
        let absolute = Value::measure_or_percent("36pt", 20);
        let proportional = Value::measure_or_percent("50%", 20);

        assert!(!absolute.is_percent());
        assert_eq!(absolute.as_int(), 720);
        assert!(proportional.is_percent());
        assert_eq!(proportional.as_int(), 50);
    }

    #[test]
    fn test_lenient_accessor_defaults() {
        let text = Value::string("anything at all");
        assert_eq!(text.as_int(), NO_INT);
        assert!(text.as_properties().is_none());
        assert!(text.as_binary().is_none());

        let number = Value::int(7);
        assert!(number.as_string().is_none());

        let hex = Value::parse_hex("FF");
        assert!(hex.as_any().is_none());
    }

    #[test]
    fn test_nested_properties() {
        let mut inner = PropertySet::new();
        inner.add_value(
            crate::AttributeId::new(1),
            Value::int(2),
            crate::PropertyKind::Attribute,
        );
        let value = Value::properties(Arc::new(inner));

        let nested = value.as_properties().unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(value.as_int(), NO_INT);
    }

    #[test]
    fn test_object_downcast() {
        let handle: ObjectHandle = Arc::new(String::from("a shape"));
        let value = Value::object(ObjectRef::shape(handle));

        match value.as_any() {
            Some(AnyValue::Object(object)) => {
                assert_eq!(object.kind(), ObjectKind::Shape);
                assert_eq!(object.downcast::<String>().unwrap(), "a shape");
            },
            other => panic!("expected object payload, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::parse_hex_color("FF0000").to_string(), "0xFF0000");
        assert_eq!(Value::string("body").to_string(), "body");
        assert_eq!(Value::measure_or_percent("50%", 20).to_string(), "50%");
    }
}
