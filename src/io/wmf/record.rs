//! Metafile record assembly.
//!
//! [`RecordBuilder`] appends typed little-endian parameters and
//! [`RecordBuilder::finish`] pads them to a whole number of 16-bit words and
//! fixes the `rdSize` word count.

use crate::error::{Result, WmfError};
use crate::io::wmf::constants::{RecordFunction, RECORD_HEADER_SIZE};

use byteorder::{ByteOrder, LittleEndian};

/// A finished metafile record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaRecord {
    function: RecordFunction,
    bytes: Vec<u8>,
}

impl MetaRecord {
    /// Record function code.
    pub fn function(&self) -> RecordFunction {
        self.function
    }

    /// `rdSize`: whole record length in 16-bit words.
    pub fn size_words(&self) -> u32 {
        LittleEndian::read_u32(&self.bytes[0..4])
    }

    /// Parameter bytes, padding included.
    pub fn params(&self) -> &[u8] {
        &self.bytes[RECORD_HEADER_SIZE..]
    }

    /// The record as written to the stream.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builder for one record.
#[derive(Debug)]
pub struct RecordBuilder {
    function: RecordFunction,
    bytes: Vec<u8>,
}

impl RecordBuilder {
    /// Start a record; space for the header is reserved.
    pub fn new(function: RecordFunction) -> Self {
        Self::with_capacity(function, 0)
    }

    pub fn with_capacity(function: RecordFunction, params: usize) -> Self {
        let mut bytes = Vec::with_capacity(RECORD_HEADER_SIZE + params + 1);
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes.extend_from_slice(&function.value().to_le_bytes());
        Self { function, bytes }
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.bytes.push(value);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn i16(&mut self, value: i16) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bytes(&mut self, data: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(data);
        self
    }

    /// Writer over the parameter area, for encoders built on `std::io::Write`.
    pub fn writer(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }

    /// Pad to a word boundary and patch `rdSize`.
    pub fn finish(mut self) -> Result<MetaRecord> {
        if self.bytes.len() % 2 != 0 {
            self.bytes.push(0);
        }
        let words = u32::try_from(self.bytes.len() / 2)
            .map_err(|_| WmfError::RecordTooLarge(self.bytes.len()))?;
        LittleEndian::write_u32(&mut self.bytes[0..4], words);
        Ok(MetaRecord {
            function: self.function,
            bytes: self.bytes,
        })
    }
}

/// A SELECTOBJECT, DELETEOBJECT or SELECTPALETTE record for `index`.
pub fn index_record(function: RecordFunction, index: u16) -> Result<MetaRecord> {
    let mut builder = RecordBuilder::with_capacity(function, 2);
    builder.u16(index);
    builder.finish()
}

/// A record with no parameters.
pub fn empty_record(function: RecordFunction) -> Result<MetaRecord> {
    RecordBuilder::new(function).finish()
}
