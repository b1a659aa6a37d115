//! Record sinks.
//!
//! [`RecordSink`] is the append-only destination for finished records.
//! [`MetafileStream`] is the in-memory sink that also keeps the running
//! header statistics (`mtSize`, `mtMaxRecord`) and produces the final file.

use crate::error::{Result, WmfError};
use crate::io::wmf::constants::{header, MetafileType, RecordFunction};
use crate::io::wmf::header::MetaHeader;
use crate::io::wmf::record::{empty_record, MetaRecord};

use std::io;

/// Destination for finished records.
///
/// A record is either appended whole or not at all; bytes already appended
/// are never changed.
pub trait RecordSink {
    fn write_record(&mut self, record: &MetaRecord) -> Result<()>;
}

/// In-memory metafile body plus header statistics.
#[derive(Debug, Clone)]
pub struct MetafileStream {
    metafile_type: MetafileType,
    records: Vec<u8>,
    size_words: u32,
    max_record_words: u32,
    record_count: usize,
}

impl MetafileStream {
    pub fn new(metafile_type: MetafileType) -> Self {
        Self {
            metafile_type,
            records: Vec::new(),
            size_words: header::SIZE_WORDS as u32,
            max_record_words: 0,
            record_count: 0,
        }
    }

    /// Records written so far, without the header.
    pub fn records(&self) -> &[u8] {
        &self.records
    }

    /// `mtSize` so far: header plus records, in words.
    pub fn size_words(&self) -> u32 {
        self.size_words
    }

    /// `mtMaxRecord` so far.
    pub fn max_record_words(&self) -> u32 {
        self.max_record_words
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Header describing the records written so far.
    pub fn header(&self, no_objects: u16) -> MetaHeader {
        MetaHeader {
            size_words: self.size_words,
            no_objects,
            max_record: self.max_record_words,
            ..MetaHeader::new(self.metafile_type)
        }
    }

    /// Append the EOF record and return header plus records.
    pub fn finish(mut self, no_objects: u16) -> Result<Vec<u8>> {
        self.write_record(&empty_record(RecordFunction::Eof)?)?;

        let mut out = Vec::with_capacity(header::SIZE + self.records.len());
        self.header(no_objects).write_to(&mut out)?;
        out.extend_from_slice(&self.records);
        Ok(out)
    }
}

impl Default for MetafileStream {
    fn default() -> Self {
        Self::new(MetafileType::default())
    }
}

impl RecordSink for MetafileStream {
    fn write_record(&mut self, record: &MetaRecord) -> Result<()> {
        let words = record.size_words();
        let size_words = self
            .size_words
            .checked_add(words)
            .ok_or(WmfError::RecordTooLarge(record.len()))?;

        self.records.try_reserve(record.len()).map_err(|e| {
            WmfError::Io(io::Error::new(io::ErrorKind::OutOfMemory, e.to_string()))
        })?;
        self.records.extend_from_slice(record.as_bytes());

        self.size_words = size_words;
        self.max_record_words = self.max_record_words.max(words);
        self.record_count += 1;
        Ok(())
    }
}
