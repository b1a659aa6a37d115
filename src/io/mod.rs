//! I/O module for writing and framing Windows Metafile record streams

pub mod wmf;

pub use wmf::{MetafileStream, RecordSink};
