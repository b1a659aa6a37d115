//! Error types for wmf-recorder

use std::io;
use thiserror::Error;

use crate::types::{ObjectId, ObjectKind};

/// Main error type for metafile recording operations
#[derive(Debug, Error)]
pub enum WmfError {
    /// IO error raised by the record sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The object kind cannot be selected through this path
    #[error("Invalid function: cannot select {0:?} object")]
    InvalidFunction(ObjectKind),

    /// Brush style has no legacy record form
    #[error("Unsupported brush style: {0}")]
    UnsupportedBrushStyle(u32),

    /// The object source could not describe the object
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// The description returned for an object does not match its kind
    #[error("Descriptor mismatch for {id}: expected {expected:?}, found {found:?}")]
    DescriptorMismatch {
        id: ObjectId,
        expected: ObjectKind,
        found: ObjectKind,
    },

    /// Pattern brush bitmap is inconsistent
    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),

    /// Record does not fit the 32-bit word count or a 16-bit field
    #[error("Record too large: {0} bytes")]
    RecordTooLarge(usize),

    /// Every 16-bit object slot is in use
    #[error("Object table full: {0} live objects")]
    HandleTableFull(usize),

    /// The record sink refused a record
    #[error("Record sink error: {0}")]
    Sink(String),

    /// Error parsing a metafile stream
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for wmf-recorder operations
pub type Result<T> = std::result::Result<T, WmfError>;
