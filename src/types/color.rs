//! COLORREF representation

use std::fmt;

/// A 32-bit GDI colour reference (`0x00BBGGRR`)
///
/// The high byte carries palette flags (`0x01` palette index, `0x02`
/// palette-relative RGB) and is copied through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorRef(u32);

impl ColorRef {
    pub const BLACK: ColorRef = ColorRef(0x0000_0000);
    pub const WHITE: ColorRef = ColorRef(0x00FF_FFFF);

    /// Create from a raw `0x00BBGGRR` value
    pub const fn new(value: u32) -> Self {
        ColorRef(value)
    }

    /// Create from RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorRef((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
    }

    /// Create a palette-index colour (`PALETTEINDEX`)
    pub const fn palette_index(index: u16) -> Self {
        ColorRef(0x0100_0000 | index as u32)
    }

    /// Raw value as stored on disk
    pub const fn value(&self) -> u32 {
        self.0
    }

    pub const fn r(&self) -> u8 {
        self.0 as u8
    }

    pub const fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(&self) -> u8 {
        (self.0 >> 16) as u8
    }
}

impl From<u32> for ColorRef {
    fn from(value: u32) -> Self {
        ColorRef(value)
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}
