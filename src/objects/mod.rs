//! Logical descriptions of the GDI objects a metafile can record.
//!
//! These are the wide in-memory shapes the object source hands out. The
//! narrowing into legacy record layouts lives in
//! [`crate::io::wmf::writer::object_writer`].

pub mod brush;
pub mod dib;
pub mod font;
pub mod palette;
pub mod pen;

pub use brush::{BrushStyle, HatchStyle, LogBrush};
pub use dib::{BitmapInfoHeader, ColorTable, DibColorUsage, DibCompression, DibPattern, RgbQuad};
pub use font::LogFont;
pub use palette::{LogPalette, PaletteEntry, PaletteEntryFlags, PALETTE_VERSION};
pub use pen::{ExtLogPen, LogPen, Point};

use crate::types::ObjectKind;

/// Description of one GDI object, as reported by the object source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceDescriptor {
    Brush(LogBrush),
    Font(LogFont),
    Pen(LogPen),
    ExtPen(ExtLogPen),
    Palette(LogPalette),
}

impl ResourceDescriptor {
    /// The object kind this description belongs to.
    pub fn kind(&self) -> ObjectKind {
        match self {
            ResourceDescriptor::Brush(_) => ObjectKind::Brush,
            ResourceDescriptor::Font(_) => ObjectKind::Font,
            ResourceDescriptor::Pen(_) => ObjectKind::Pen,
            ResourceDescriptor::ExtPen(_) => ObjectKind::ExtPen,
            ResourceDescriptor::Palette(_) => ObjectKind::Palette,
        }
    }
}
