//! Windows Metafile (WMF) record stream support.
//!
//! - [`constants`] — record function codes and header constants
//! - [`record`] — record builder with word padding and size patching
//! - [`header`] — the `METAHEADER` block
//! - [`code_page`] — 8-bit code pages for font face names
//! - [`writer`] — record sinks and CREATE record encoders
//! - [`reader`] — record framing reader

pub mod code_page;
pub mod constants;
pub mod header;
pub mod reader;
pub mod record;
pub mod writer;

pub use constants::{MetafileType, RecordFunction};
pub use header::MetaHeader;
pub use reader::{Metafile, RawRecord};
pub use record::{MetaRecord, RecordBuilder};
pub use writer::{MetafileStream, ObjectWriter, RecordSink};
