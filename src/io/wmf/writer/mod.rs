//! WMF writer modules.
//!
//! - [`stream_writer`] — the `RecordSink` trait and the in-memory `MetafileStream`
//! - [`object_writer`] — CREATE record encoders for brushes, fonts, pens and palettes

pub mod object_writer;
pub mod stream_writer;

pub use object_writer::ObjectWriter;
pub use stream_writer::{MetafileStream, RecordSink};
