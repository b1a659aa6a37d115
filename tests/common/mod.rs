//! Shared test utilities for wmf-recorder integration tests.
//!
//! Provides an in-memory object source, a sink that can be told to fail,
//! and small builders for the objects most tests select.

#![allow(dead_code)]

use std::collections::HashMap;

use wmf_recorder::io::wmf::{Metafile, MetaRecord, RawRecord, RecordSink};
use wmf_recorder::objects::{
    BitmapInfoHeader, ColorTable, DibColorUsage, DibPattern, LogBrush, LogFont, LogPalette,
    LogPen, PaletteEntry, RgbQuad,
};
use wmf_recorder::{ColorRef, ObjectId, ObjectKind, ObjectSource, ResourceDescriptor, WmfError};

// ===========================================================================
// Object source
// ===========================================================================

/// Object source backed by maps, recording teardown registrations.
#[derive(Debug, Default)]
pub struct TestSource {
    objects: HashMap<ObjectId, ResourceDescriptor>,
    patterns: HashMap<ObjectId, DibPattern>,
    pub watched: Vec<ObjectId>,
}

impl TestSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u64, descriptor: ResourceDescriptor) -> ObjectId {
        let id = ObjectId::new(id);
        self.objects.insert(id, descriptor);
        id
    }

    pub fn insert_pattern_brush(&mut self, id: u64, brush: LogBrush, dib: DibPattern) -> ObjectId {
        let id = self.insert(id, ResourceDescriptor::Brush(brush));
        self.patterns.insert(id, dib);
        id
    }
}

impl ObjectSource for TestSource {
    fn describe(&self, id: ObjectId, _kind: ObjectKind) -> Option<ResourceDescriptor> {
        self.objects.get(&id).cloned()
    }

    fn brush_pattern(&self, id: ObjectId) -> Option<DibPattern> {
        self.patterns.get(&id).cloned()
    }

    fn watch_teardown(&mut self, id: ObjectId) {
        self.watched.push(id);
    }
}

// ===========================================================================
// Sinks
// ===========================================================================

/// Sink keeping each record separately.
///
/// Fails every write while `fail` is set, and every write once `fail_after`
/// records have been accepted.
#[derive(Debug, Default)]
pub struct SwitchableSink {
    pub fail: bool,
    pub fail_after: Option<usize>,
    pub records: Vec<Vec<u8>>,
}

impl SwitchableSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn failing_after(records: usize) -> Self {
        Self {
            fail_after: Some(records),
            ..Default::default()
        }
    }

    /// Function codes of the accepted records.
    pub fn functions(&self) -> Vec<u16> {
        self.records
            .iter()
            .map(|r| u16::from_le_bytes([r[4], r[5]]))
            .collect()
    }
}

impl RecordSink for SwitchableSink {
    fn write_record(&mut self, record: &MetaRecord) -> wmf_recorder::Result<()> {
        let exhausted = matches!(self.fail_after, Some(n) if self.records.len() >= n);
        if self.fail || exhausted {
            return Err(WmfError::Sink("disk full".to_string()));
        }
        self.records.push(record.as_bytes().to_vec());
        Ok(())
    }
}

// ===========================================================================
// Builders
// ===========================================================================

pub fn solid_brush(color: u32) -> ResourceDescriptor {
    ResourceDescriptor::Brush(LogBrush::solid(ColorRef::new(color)))
}

pub fn pen(style: u32, width: i32, color: u32) -> ResourceDescriptor {
    ResourceDescriptor::Pen(LogPen::new(style, width, ColorRef::new(color)))
}

pub fn font(height: i32, face: &str) -> ResourceDescriptor {
    ResourceDescriptor::Font(LogFont::new(height, face))
}

pub fn palette(entries: &[(u8, u8, u8)]) -> ResourceDescriptor {
    ResourceDescriptor::Palette(LogPalette::new(
        entries
            .iter()
            .map(|&(r, g, b)| PaletteEntry::new(r, g, b))
            .collect(),
    ))
}

/// 2x2 monochrome bitmap with a black/white colour table.
///
/// Row 0 in memory is `0xAA`, row 1 is `0x55`.
pub fn mono_2x2(top_down: bool) -> DibPattern {
    let height = if top_down { -2 } else { 2 };
    DibPattern {
        header: BitmapInfoHeader::new(2, height, 1),
        colors: ColorTable::Rgb(vec![RgbQuad::new(0, 0, 0), RgbQuad::new(0xFF, 0xFF, 0xFF)]),
        usage: DibColorUsage::RgbColors,
        bits: vec![0xAA, 0, 0, 0, 0x55, 0, 0, 0],
    }
}

// ===========================================================================
// Inspection
// ===========================================================================

/// Frame a bare record sequence.
pub fn frame(records: &[u8]) -> Vec<RawRecord<'_>> {
    Metafile::parse_records(records).expect("record stream should frame")
}

/// Function codes of a bare record sequence.
pub fn functions(records: &[u8]) -> Vec<u16> {
    frame(records).iter().map(|r| r.function).collect()
}
