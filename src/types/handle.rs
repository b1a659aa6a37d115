//! Object identifier type for GDI objects
//!
//! An `ObjectId` names a GDI object (brush, pen, font, palette, ...) owned by
//! the surrounding graphics subsystem. The recorder only compares ids; it
//! never owns or frees the object behind one.

use std::fmt;

/// An opaque identifier for a GDI object
///
/// Ids are 64-bit values handed out by the object source. Id 0 is the null
/// object and is never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// The null object id (0)
    pub const NULL: ObjectId = ObjectId(0);

    /// Create a new id from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        ObjectId(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null id
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        ObjectId::NULL
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        ObjectId(value)
    }
}

impl From<ObjectId> for u64 {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

impl fmt::UpperHex for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_id() {
        assert!(ObjectId::NULL.is_null());
        assert!(ObjectId::default().is_null());
        assert!(!ObjectId::new(1).is_null());
    }

    #[test]
    fn test_id_display() {
        let id = ObjectId::new(0xABCD);
        assert_eq!(format!("{}", id), "0xABCD");
        assert_eq!(format!("{:X}", id), "ABCD");
    }

    #[test]
    fn test_id_conversion() {
        let id: ObjectId = 42u64.into();
        let back: u64 = id.into();
        assert_eq!(back, 42);
    }
}
