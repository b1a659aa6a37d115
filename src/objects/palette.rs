//! Logical palette description.

use bitflags::bitflags;

/// Version tag written in every CREATEPALETTE record.
pub const PALETTE_VERSION: u16 = 0x0300;

bitflags! {
    /// Palette entry flags (`PC_*`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PaletteEntryFlags: u8 {
        const RESERVED = 0x01;
        const EXPLICIT = 0x02;
        const NOCOLLAPSE = 0x04;
    }
}

/// One `PALETTEENTRY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteEntry {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub flags: PaletteEntryFlags,
}

impl PaletteEntry {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            flags: PaletteEntryFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: PaletteEntryFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// In-memory `LOGPALETTE`, entries in palette order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogPalette {
    pub entries: Vec<PaletteEntry>,
}

impl LogPalette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
