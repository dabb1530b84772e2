//! Attribute identifiers.

use std::fmt;

/// Identifier of a known attribute or format command.
///
/// The id namespace is defined externally by the grammar tables of the
/// importer; this crate treats ids as opaque integers and relies only on
/// equality and total ordering.
///
/// # Examples
///
/// ```
/// use docprop::AttributeId;
///
/// let id = AttributeId::new(0x42);
/// assert_eq!(id.raw(), 0x42);
/// assert_eq!(id.to_string(), "0x00000042");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeId(u32);

impl AttributeId {
    /// Wrap a raw id from the external namespace.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw id.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for AttributeId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
