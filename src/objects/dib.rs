//! Device-independent bitmaps for pattern brushes.
//!
//! A [`DibPattern`] is the bitmap behind a `BS_PATTERN` / `BS_DIBPATTERN`
//! brush as the object source reports it. [`DibPattern::write_packed`]
//! produces the packed form stored in a DIBCREATEPATTERNBRUSH record:
//! `BITMAPINFOHEADER`, colour table, then the pixel rows bottom-up.

use crate::error::{Result, WmfError};

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Size of `BITMAPINFOHEADER` on disk.
pub const BITMAPINFOHEADER_SIZE: u32 = 40;

/// Compression (`BI_*`) values accepted in pattern brushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DibCompression {
    Rgb = 0,
    BitFields = 3,
}

/// How colour-table entries are interpreted (`DIB_*_COLORS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum DibColorUsage {
    /// Entries are `RGBQUAD`s
    #[default]
    RgbColors = 0,
    /// Entries are 16-bit indices into the selected logical palette
    PalColors = 1,
}

/// One `RGBQUAD` colour-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbQuad {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

impl RgbQuad {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            blue,
            green,
            red,
            reserved: 0,
        }
    }
}

/// Colour table that follows the info header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorTable {
    /// No table (true-colour bitmaps)
    Empty,
    Rgb(Vec<RgbQuad>),
    PaletteIndices(Vec<u16>),
    /// Red, green and blue channel masks for `BI_BITFIELDS`
    BitFields([u32; 3]),
}

impl ColorTable {
    fn entry_count(&self) -> usize {
        match self {
            ColorTable::Empty => 0,
            ColorTable::Rgb(entries) => entries.len(),
            ColorTable::PaletteIndices(entries) => entries.len(),
            ColorTable::BitFields(_) => 0,
        }
    }
}

/// In-memory `BITMAPINFOHEADER` fields.
///
/// A negative `height` marks a top-down bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfoHeader {
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: DibCompression,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub clr_used: u32,
    pub clr_important: u32,
}

impl BitmapInfoHeader {
    /// Uncompressed header with the given geometry.
    pub fn new(width: i32, height: i32, bit_count: u16) -> Self {
        Self {
            width,
            height,
            planes: 1,
            bit_count,
            compression: DibCompression::Rgb,
            x_pels_per_meter: 0,
            y_pels_per_meter: 0,
            clr_used: 0,
            clr_important: 0,
        }
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Number of colour-table entries, with 0 meaning "full table" for
    /// indexed formats.
    pub fn colors_used(&self) -> u32 {
        if self.clr_used == 0 && self.bit_count <= 8 {
            1 << self.bit_count
        } else {
            self.clr_used
        }
    }

    /// Bytes per pixel row; rows are padded to a 4-byte boundary.
    pub fn stride(&self) -> usize {
        dib_stride(self.width.unsigned_abs(), self.bit_count)
    }

    /// Size of the pixel block.
    pub fn image_size(&self) -> usize {
        self.stride() * self.height.unsigned_abs() as usize
    }
}

/// Row size in bytes of a DIB `width` pixels wide at `bit_count` bits per pixel.
pub fn dib_stride(width: u32, bit_count: u16) -> usize {
    (((width as usize * bit_count as usize) + 31) >> 3) & !3
}

/// Bitmap and colour usage of a pattern brush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DibPattern {
    pub header: BitmapInfoHeader,
    pub colors: ColorTable,
    pub usage: DibColorUsage,
    /// Pixel rows in the order `header.height` describes
    pub bits: Vec<u8>,
}

impl DibPattern {
    /// Size of the packed info header plus colour table.
    pub fn info_size(&self) -> usize {
        let header = BITMAPINFOHEADER_SIZE as usize;
        if self.header.compression == DibCompression::BitFields {
            return header + 3 * 4;
        }
        let entries = self.header.colors_used() as usize;
        match self.usage {
            DibColorUsage::PalColors => header + entries * 2,
            DibColorUsage::RgbColors => header + entries * 4,
        }
    }

    /// Size of the whole packed DIB.
    pub fn packed_size(&self) -> usize {
        self.info_size() + self.header.image_size()
    }

    /// Check that header, colour table and pixel buffer agree.
    pub fn validate(&self) -> Result<()> {
        let h = &self.header;
        if !matches!(h.bit_count, 1 | 4 | 8 | 16 | 24 | 32) {
            return Err(WmfError::InvalidBitmap(format!(
                "unsupported bit depth {}",
                h.bit_count
            )));
        }
        if h.width <= 0 || h.height == 0 {
            return Err(WmfError::InvalidBitmap(format!(
                "empty bitmap {}x{}",
                h.width, h.height
            )));
        }

        if h.compression == DibCompression::BitFields {
            if !matches!(h.bit_count, 16 | 32) {
                return Err(WmfError::InvalidBitmap(format!(
                    "bit fields at {} bits per pixel",
                    h.bit_count
                )));
            }
            if !matches!(self.colors, ColorTable::BitFields(_)) {
                return Err(WmfError::InvalidBitmap(
                    "bit fields bitmap without channel masks".to_string(),
                ));
            }
        } else {
            let expected = h.colors_used() as usize;
            let table_ok = match (&self.colors, self.usage) {
                (ColorTable::Empty, _) => expected == 0,
                (ColorTable::Rgb(_), DibColorUsage::RgbColors) => true,
                (ColorTable::PaletteIndices(_), DibColorUsage::PalColors) => true,
                _ => false,
            };
            if !table_ok {
                return Err(WmfError::InvalidBitmap(format!(
                    "colour table does not match usage {:?}",
                    self.usage
                )));
            }
            if self.colors.entry_count() != expected {
                return Err(WmfError::InvalidBitmap(format!(
                    "colour table has {} entries, header says {}",
                    self.colors.entry_count(),
                    expected
                )));
            }
        }

        let image_size = h.image_size();
        if self.bits.len() < image_size {
            return Err(WmfError::InvalidBitmap(format!(
                "pixel buffer holds {} bytes, {} needed",
                self.bits.len(),
                image_size
            )));
        }
        Ok(())
    }

    /// Write the packed DIB: header, colour table, bottom-up pixel rows.
    ///
    /// The written header always has a positive height and a computed
    /// `biSizeImage`. `biClrUsed` is written as 0 when the table covers every
    /// index the bit depth can address.
    pub fn write_packed<W: Write>(&self, out: &mut W) -> Result<()> {
        self.validate()?;
        let h = &self.header;

        let mut clr_used = h.colors_used();
        if clr_used as u64 == 1u64 << h.bit_count {
            clr_used = 0;
        }

        out.write_u32::<LittleEndian>(BITMAPINFOHEADER_SIZE)?;
        out.write_i32::<LittleEndian>(h.width)?;
        out.write_i32::<LittleEndian>(h.height.unsigned_abs() as i32)?;
        out.write_u16::<LittleEndian>(h.planes)?;
        out.write_u16::<LittleEndian>(h.bit_count)?;
        out.write_u32::<LittleEndian>(h.compression as u32)?;
        out.write_u32::<LittleEndian>(h.image_size() as u32)?;
        out.write_i32::<LittleEndian>(h.x_pels_per_meter)?;
        out.write_i32::<LittleEndian>(h.y_pels_per_meter)?;
        out.write_u32::<LittleEndian>(clr_used)?;
        out.write_u32::<LittleEndian>(h.clr_important)?;

        match &self.colors {
            ColorTable::Empty => {}
            ColorTable::Rgb(entries) => {
                for quad in entries {
                    out.write_all(&[quad.blue, quad.green, quad.red, quad.reserved])?;
                }
            }
            ColorTable::PaletteIndices(entries) => {
                for index in entries {
                    out.write_u16::<LittleEndian>(*index)?;
                }
            }
            ColorTable::BitFields(masks) => {
                for mask in masks {
                    out.write_u32::<LittleEndian>(*mask)?;
                }
            }
        }

        let pixels = &self.bits[..h.image_size()];
        if h.is_top_down() {
            for row in pixels.chunks_exact(h.stride()).rev() {
                out.write_all(row)?;
            }
        } else {
            out.write_all(pixels)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono_pattern(height: i32) -> DibPattern {
        let mut header = BitmapInfoHeader::new(8, height, 1);
        header.clr_used = 2;
        DibPattern {
            header,
            colors: ColorTable::Rgb(vec![RgbQuad::new(0, 0, 0), RgbQuad::new(255, 255, 255)]),
            usage: DibColorUsage::RgbColors,
            bits: (0..height.unsigned_abs() as u8 * 4).collect(),
        }
    }

    #[test]
    fn test_stride() {
        assert_eq!(dib_stride(8, 1), 4);
        assert_eq!(dib_stride(33, 1), 8);
        assert_eq!(dib_stride(3, 24), 12);
        assert_eq!(dib_stride(5, 8), 8);
        assert_eq!(dib_stride(2, 32), 8);
        assert_eq!(dib_stride(3, 4), 4);
    }

    #[test]
    fn test_info_size_indexed_and_true_colour() {
        let pattern = mono_pattern(2);
        assert_eq!(pattern.info_size(), 40 + 2 * 4);

        let mut pal = mono_pattern(2);
        pal.usage = DibColorUsage::PalColors;
        assert_eq!(pal.info_size(), 40 + 2 * 2);

        let rgb = DibPattern {
            header: BitmapInfoHeader::new(2, 2, 24),
            colors: ColorTable::Empty,
            usage: DibColorUsage::RgbColors,
            bits: vec![0; 16],
        };
        assert_eq!(rgb.info_size(), 40);

        let mut bf_header = BitmapInfoHeader::new(2, 2, 16);
        bf_header.compression = DibCompression::BitFields;
        let bf = DibPattern {
            header: bf_header,
            colors: ColorTable::BitFields([0xF800, 0x07E0, 0x001F]),
            usage: DibColorUsage::RgbColors,
            bits: vec![0; 8],
        };
        assert_eq!(bf.info_size(), 52);
    }

    #[test]
    fn test_full_palette_zeroes_clr_used() {
        let pattern = mono_pattern(2);
        let mut out = Vec::new();
        pattern.write_packed(&mut out).unwrap();
        assert_eq!(&out[32..36], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_partial_palette_keeps_clr_used() {
        let mut header = BitmapInfoHeader::new(4, 1, 8);
        header.clr_used = 3;
        let pattern = DibPattern {
            header,
            colors: ColorTable::Rgb(vec![RgbQuad::default(); 3]),
            usage: DibColorUsage::RgbColors,
            bits: vec![0, 1, 2, 1],
        };
        let mut out = Vec::new();
        pattern.write_packed(&mut out).unwrap();
        assert_eq!(&out[32..36], &[3, 0, 0, 0]);
        assert_eq!(out.len(), 40 + 12 + 4);
    }

    #[test]
    fn test_top_down_rows_reversed() {
        let pattern = mono_pattern(-3);
        let mut out = Vec::new();
        pattern.write_packed(&mut out).unwrap();

        // height is written positive
        assert_eq!(&out[8..12], &3i32.to_le_bytes());
        let pixels = &out[48..];
        assert_eq!(pixels, &[8, 9, 10, 11, 4, 5, 6, 7, 0, 1, 2, 3]);
    }

    #[test]
    fn test_bottom_up_copied_as_is() {
        let pattern = mono_pattern(3);
        let mut out = Vec::new();
        pattern.write_packed(&mut out).unwrap();
        assert_eq!(&out[48..], &pattern.bits[..]);
        assert_eq!(&out[20..24], &12u32.to_le_bytes());
    }

    #[test]
    fn test_short_pixel_buffer_rejected() {
        let mut pattern = mono_pattern(3);
        pattern.bits.truncate(5);
        assert!(matches!(
            pattern.write_packed(&mut Vec::new()),
            Err(WmfError::InvalidBitmap(_))
        ));
    }

    #[test]
    fn test_colour_table_size_mismatch_rejected() {
        let mut pattern = mono_pattern(1);
        pattern.colors = ColorTable::Rgb(vec![RgbQuad::default()]);
        assert!(pattern.validate().is_err());
    }

    #[test]
    fn test_palette_indices_need_pal_usage() {
        let mut pattern = mono_pattern(1);
        pattern.colors = ColorTable::PaletteIndices(vec![0, 1]);
        assert!(pattern.validate().is_err());
        pattern.usage = DibColorUsage::PalColors;
        assert!(pattern.validate().is_ok());
    }
}
