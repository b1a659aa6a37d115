//! # wmf-recorder
//!
//! Records GDI object selection into Windows Metafile (WMF) records.
//!
//! A metafile device context does not draw; it writes binary records that
//! can be replayed later. Objects (pens, brushes, fonts, palettes) are
//! described once in a CREATE record and then referred to by a small slot
//! index in SELECTOBJECT and DELETEOBJECT records.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wmf_recorder::{MetafileRecorder, ObjectId, ObjectKind};
//!
//! let mut recorder = MetafileRecorder::new();
//! recorder.select_object(&mut source, ObjectId::new(0x10), ObjectKind::Brush)?;
//! recorder.delete_object(ObjectId::new(0x10))?;
//! let wmf = recorder.finish()?;
//! std::fs::write("out.wmf", wmf)?;
//! # Ok::<(), wmf_recorder::WmfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `ObjectSource` - trait the caller implements to describe its objects
//! - `MetafileRecorder` - per-session context: object table, selections, sink
//! - `HandleTable` - object id to slot index mapping with slot reuse
//! - `io::wmf` - record encoding, the metafile stream and a framing reader

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod handle_table;
pub mod io;
pub mod notification;
pub mod objects;
pub mod recorder;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WmfError};
pub use handle_table::HandleTable;
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use recorder::{
    DeleteOutcome, MetafileRecorder, ObjectSource, RecorderConfiguration, SelectedObjects,
};
pub use types::{ColorRef, ObjectId, ObjectKind, SelectionSlot};

pub use io::wmf::{MetafileType, RecordFunction};
pub use objects::ResourceDescriptor;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
