//! Metafile recording session.
//!
//! [`MetafileRecorder`] is the per-session context: it owns the object
//! table, the currently selected pen/brush/font and the record sink.
//!
//! # Object life cycle
//!
//! ```text
//! Unrecorded --select--> Recorded <--select/deselect--> Selected
//!                           |
//!                        delete
//!                           v
//!                        Deleted
//! ```
//!
//! The first selection of an object writes its CREATE record and gives it a
//! slot. A selected object cannot be deleted; the request is ignored with a
//! warning.

use crate::error::{Result, WmfError};
use crate::handle_table::{HandleTable, DEFAULT_GROWTH};
use crate::io::wmf::code_page::encoding_from_code_page;
use crate::io::wmf::constants::{MetafileType, RecordFunction};
use crate::io::wmf::record::{empty_record, index_record, MetaRecord};
use crate::io::wmf::writer::{MetafileStream, ObjectWriter, RecordSink};
use crate::notification::{NotificationCollection, NotificationType};
use crate::objects::{DibPattern, ResourceDescriptor};
use crate::types::{ObjectId, ObjectKind, SelectionSlot};

use log::{debug, warn};

/// Where object descriptions come from.
///
/// Implemented by the graphics subsystem that owns the objects.
pub trait ObjectSource {
    /// Full description of `id`, or `None` if the object does not exist.
    fn describe(&self, id: ObjectId, kind: ObjectKind) -> Option<ResourceDescriptor>;

    /// Bitmap and colour usage of a pattern brush.
    fn brush_pattern(&self, id: ObjectId) -> Option<DibPattern>;

    /// Called once an object has a slot; the source must call
    /// [`MetafileRecorder::delete_object`] when the object is destroyed.
    fn watch_teardown(&mut self, id: ObjectId);
}

/// Recording options.
#[derive(Debug, Clone)]
pub struct RecorderConfiguration {
    /// `mtType` written in the header.
    ///
    /// Default: [`MetafileType::Memory`].
    pub metafile_type: MetafileType,

    /// Code page for font face names, e.g. `"ANSI_1252"` or `"ANSI_1251"`.
    pub code_page: String,

    /// When `true`, a font whose `lfCharSet` names a code page has its face
    /// name encoded in that code page instead of `code_page`.
    ///
    /// Default: `false`.
    pub charset_face_names: bool,

    /// Slots added each time the object table is full.
    pub handle_growth: u16,
}

impl Default for RecorderConfiguration {
    fn default() -> Self {
        Self {
            metafile_type: MetafileType::Memory,
            code_page: "ANSI_1252".to_string(),
            charset_face_names: false,
            handle_growth: DEFAULT_GROWTH,
        }
    }
}

/// The currently selected object of each selectable kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedObjects {
    pub pen: Option<ObjectId>,
    pub brush: Option<ObjectId>,
    pub font: Option<ObjectId>,
}

impl SelectedObjects {
    pub fn get(&self, slot: SelectionSlot) -> Option<ObjectId> {
        match slot {
            SelectionSlot::Pen => self.pen,
            SelectionSlot::Brush => self.brush,
            SelectionSlot::Font => self.font,
        }
    }

    /// Make `id` current for `slot`, returning the previous object.
    pub fn replace(&mut self, slot: SelectionSlot, id: ObjectId) -> Option<ObjectId> {
        let current = match slot {
            SelectionSlot::Pen => &mut self.pen,
            SelectionSlot::Brush => &mut self.brush,
            SelectionSlot::Font => &mut self.font,
        };
        current.replace(id)
    }

    /// True if `id` is the current pen, brush or font.
    pub fn contains(&self, id: ObjectId) -> bool {
        [self.pen, self.brush, self.font].contains(&Some(id))
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The object never got a slot (e.g. a stock object); nothing written.
    NotRecorded,
    /// The object is currently selected; nothing written, slot kept.
    Selected,
    /// DELETEOBJECT written and the slot freed.
    Deleted { index: u16 },
}

/// One metafile recording session.
#[derive(Debug)]
pub struct MetafileRecorder<S: RecordSink = MetafileStream> {
    sink: S,
    handles: HandleTable,
    selected: SelectedObjects,
    object_writer: ObjectWriter,
    notifications: NotificationCollection,
}

impl MetafileRecorder<MetafileStream> {
    /// Recorder writing to an in-memory stream with default options.
    pub fn new() -> Self {
        Self::with_config(&RecorderConfiguration::default())
    }

    /// Recorder writing to an in-memory stream.
    pub fn with_config(config: &RecorderConfiguration) -> Self {
        Self::with_sink(MetafileStream::new(config.metafile_type), config)
    }

    /// Close the metafile: append EOF and return header plus records.
    pub fn finish(self) -> Result<Vec<u8>> {
        let no_objects = self.handles.max_objects();
        self.sink.finish(no_objects)
    }
}

impl Default for MetafileRecorder<MetafileStream> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordSink> MetafileRecorder<S> {
    /// Recorder writing to `sink`.
    pub fn with_sink(sink: S, config: &RecorderConfiguration) -> Self {
        let object_writer = ObjectWriter::new(encoding_from_code_page(&config.code_page))
            .with_charset_face_names(config.charset_face_names);
        Self {
            sink,
            handles: HandleTable::with_growth(config.handle_growth),
            selected: SelectedObjects::default(),
            object_writer,
            notifications: NotificationCollection::new(),
        }
    }

    /// Select a pen, extended pen, brush or font.
    ///
    /// On first selection the object's CREATE record is written and a slot
    /// allocated. If that fails nothing is written and no slot is taken.
    /// Returns the object previously selected for the same kind.
    pub fn select_object<O>(
        &mut self,
        source: &mut O,
        id: ObjectId,
        kind: ObjectKind,
    ) -> Result<Option<ObjectId>>
    where
        O: ObjectSource + ?Sized,
    {
        let slot = kind.selection_slot().ok_or(WmfError::InvalidFunction(kind))?;

        let index = match self.handles.find(id) {
            Some(index) => index,
            None => self.create_object(source, id, kind)?,
        };

        self.write(index_record(RecordFunction::SelectObject, index)?)?;
        Ok(self.selected.replace(slot, id))
    }

    /// Select a palette, writing CREATEPALETTE first if it has no slot yet.
    ///
    /// Returns the palette's slot index.
    pub fn select_palette<O>(&mut self, source: &mut O, id: ObjectId) -> Result<u16>
    where
        O: ObjectSource + ?Sized,
    {
        let index = match self.handles.find(id) {
            Some(index) => index,
            None => {
                let palette = match source.describe(id, ObjectKind::Palette) {
                    Some(ResourceDescriptor::Palette(palette)) => palette,
                    Some(other) => {
                        return Err(WmfError::DescriptorMismatch {
                            id,
                            expected: ObjectKind::Palette,
                            found: other.kind(),
                        })
                    }
                    None => return Err(WmfError::ObjectNotFound(id)),
                };
                let record = self.object_writer.palette_record(&palette)?;
                self.register(source, id, record)?
            }
        };

        self.write(index_record(RecordFunction::SelectPalette, index)?)?;
        Ok(index)
    }

    /// Write REALIZEPALETTE.
    pub fn realize_palette(&mut self) -> Result<()> {
        self.write(empty_record(RecordFunction::RealizePalette)?)
    }

    /// Handle the destruction of `id`.
    pub fn delete_object(&mut self, id: ObjectId) -> Result<DeleteOutcome> {
        let Some(index) = self.handles.find(id) else {
            return Ok(DeleteOutcome::NotRecorded);
        };

        if self.selected.contains(id) {
            warn!("deleting selected object {}", id);
            self.notifications.notify(
                NotificationType::Warning,
                format!("object {} is selected and was not deleted", id),
            );
            return Ok(DeleteOutcome::Selected);
        }

        self.write(index_record(RecordFunction::DeleteObject, index)?)?;
        self.handles.remove(index);
        debug!("deleted object {} from slot {}", id, index);
        Ok(DeleteOutcome::Deleted { index })
    }

    /// The object table.
    pub fn handles(&self) -> &HandleTable {
        &self.handles
    }

    /// The current pen, brush and font.
    pub fn selected(&self) -> &SelectedObjects {
        &self.selected
    }

    /// Non-fatal issues met so far.
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// The record sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the record sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// End the session and hand back the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ---------------------------------------------------------------
    // Internal helpers
    // ---------------------------------------------------------------

    fn write(&mut self, record: MetaRecord) -> Result<()> {
        self.sink.write_record(&record)
    }

    /// Build the CREATE record for a pen, brush or font and register it.
    fn create_object<O>(&mut self, source: &mut O, id: ObjectId, kind: ObjectKind) -> Result<u16>
    where
        O: ObjectSource + ?Sized,
    {
        if id.is_null() {
            return Err(WmfError::ObjectNotFound(id));
        }
        let descriptor = source
            .describe(id, kind)
            .ok_or(WmfError::ObjectNotFound(id))?;
        let found = descriptor.kind();

        let record = match (kind, descriptor) {
            (ObjectKind::Brush, ResourceDescriptor::Brush(brush)) => {
                self.object_writer.brush_record(&brush, || {
                    source.brush_pattern(id).ok_or(WmfError::ObjectNotFound(id))
                })?
            }
            (ObjectKind::Font, ResourceDescriptor::Font(font)) => {
                self.object_writer.font_record(&font)?
            }
            (ObjectKind::Pen | ObjectKind::ExtPen, ResourceDescriptor::Pen(pen)) => {
                self.object_writer.pen_record(&pen)?
            }
            (ObjectKind::Pen | ObjectKind::ExtPen, ResourceDescriptor::ExtPen(ext)) => {
                if ext.is_lossy() {
                    warn!("extended pen {} reduced to a simple pen", id);
                    self.notifications.notify(
                        NotificationType::NotSupported,
                        format!(
                            "extended pen {} (style {:#X}, {} dash entries) recorded as a simple pen",
                            id,
                            ext.pen_style,
                            ext.style_entries.len()
                        ),
                    );
                }
                self.object_writer.pen_record(&ext.to_log_pen())?
            }
            _ => {
                return Err(WmfError::DescriptorMismatch {
                    id,
                    expected: kind,
                    found,
                })
            }
        };

        self.register(source, id, record)
    }

    /// Write a CREATE record, then give the object a slot and ask the source
    /// for its teardown notification.
    fn register<O>(&mut self, source: &mut O, id: ObjectId, record: MetaRecord) -> Result<u16>
    where
        O: ObjectSource + ?Sized,
    {
        if self.handles.is_full() {
            return Err(WmfError::HandleTableFull(self.handles.len()));
        }
        self.write(record)?;
        let index = self.handles.add(id)?;
        source.watch_teardown(id);
        debug!("recorded object {} in slot {}", id, index);
        Ok(index)
    }
}
