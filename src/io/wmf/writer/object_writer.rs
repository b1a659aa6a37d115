//! CREATE record encoders for brushes, fonts, pens and palettes.
//!
//! Each encoder narrows the in-memory description into its legacy 16-bit
//! layout field by field:
//!
//! | Record | Parameters |
//! |---|---|
//! | CREATEBRUSHINDIRECT | `LOGBRUSH16`: style u16, colour u32, hatch u16 |
//! | DIBCREATEPATTERNBRUSH | style u16, usage u16, packed DIB |
//! | CREATEFONTINDIRECT | `LOGFONT16`: 5 × i16, 8 × u8, 32-byte face name |
//! | CREATEPENINDIRECT | `LOGPEN16`: style u16, width i16 × 2, colour u32 |
//! | CREATEPALETTE | version u16, count u16, count × (r, g, b, flags) |

use crate::error::{Result, WmfError};
use crate::io::wmf::code_page::{encode_truncated, encoding_from_charset};
use crate::io::wmf::constants::RecordFunction;
use crate::io::wmf::record::{MetaRecord, RecordBuilder};
use crate::objects::font::LF_FACESIZE;
use crate::objects::{
    BrushStyle, DibPattern, LogBrush, LogFont, LogPalette, LogPen, PALETTE_VERSION,
};

use encoding_rs::Encoding;
use log::debug;

/// Size of `LOGFONT16` on disk.
pub const LOGFONT16_SIZE: usize = 18 + LF_FACESIZE;

/// Encoder for object creation records.
#[derive(Debug, Clone, Copy)]
pub struct ObjectWriter {
    encoding: &'static Encoding,
    charset_face_names: bool,
}

impl ObjectWriter {
    /// Encoder that writes face names in `encoding`.
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            charset_face_names: false,
        }
    }

    /// Let a font's `lfCharSet` choose the face name encoding when it names
    /// a code page.
    pub fn with_charset_face_names(mut self, enabled: bool) -> Self {
        self.charset_face_names = enabled;
        self
    }

    /// Encode a brush.
    ///
    /// `pattern` is only called for pattern brushes and supplies their
    /// bitmap. Styles without a legacy record form fail before anything is
    /// built.
    pub fn brush_record<F>(&self, brush: &LogBrush, pattern: F) -> Result<MetaRecord>
    where
        F: FnOnce() -> Result<DibPattern>,
    {
        match brush.style {
            BrushStyle::Solid | BrushStyle::Null | BrushStyle::Hatched => {
                let mut builder = RecordBuilder::with_capacity(RecordFunction::CreateBrushIndirect, 8);
                builder
                    .u16(brush.style.value() as u16)
                    .u32(brush.color.value())
                    .u16(brush.hatch as u16);
                builder.finish()
            }
            style if style.is_pattern() => {
                let dib = pattern()?;
                self.dib_pattern_brush_record(style, &dib)
            }
            other => Err(WmfError::UnsupportedBrushStyle(other.value())),
        }
    }

    /// Encode a pattern brush bitmap; pixel rows are always stored bottom-up.
    pub fn dib_pattern_brush_record(
        &self,
        style: BrushStyle,
        dib: &DibPattern,
    ) -> Result<MetaRecord> {
        let mut builder =
            RecordBuilder::with_capacity(RecordFunction::DibCreatePatternBrush, 4 + dib.packed_size());
        builder.u16(style.value() as u16).u16(dib.usage as u16);
        dib.write_packed(builder.writer())?;
        builder.finish()
    }

    /// Encode a font.
    pub fn font_record(&self, font: &LogFont) -> Result<MetaRecord> {
        let mut builder =
            RecordBuilder::with_capacity(RecordFunction::CreateFontIndirect, LOGFONT16_SIZE);
        builder
            .i16(font.height as i16)
            .i16(font.width as i16)
            .i16(font.escapement as i16)
            .i16(font.orientation as i16)
            .i16(font.weight as i16)
            .u8(font.italic)
            .u8(font.underline)
            .u8(font.strike_out)
            .u8(font.char_set)
            .u8(font.out_precision)
            .u8(font.clip_precision)
            .u8(font.quality)
            .u8(font.pitch_and_family)
            .bytes(&self.face_name(font));
        builder.finish()
    }

    /// Face name as stored in `LOGFONT16`: encoded, at most 31 bytes, NUL
    /// terminated and zero padded to [`LF_FACESIZE`].
    pub fn face_name(&self, font: &LogFont) -> [u8; LF_FACESIZE] {
        let encoding = if self.charset_face_names {
            encoding_from_charset(font.char_set).unwrap_or(self.encoding)
        } else {
            self.encoding
        };

        // Everything after the first NUL is not part of the name.
        let name = font.face_name.split('\0').next().unwrap_or_default();
        let encoded = encode_truncated(name, encoding, LF_FACESIZE - 1);
        if encoded.len() < encode_truncated(name, encoding, name.len() * 4).len() {
            debug!("face name {:?} truncated to {} bytes", name, encoded.len());
        }

        let mut buffer = [0u8; LF_FACESIZE];
        buffer[..encoded.len()].copy_from_slice(&encoded);
        buffer
    }

    /// Encode a simple pen.
    pub fn pen_record(&self, pen: &LogPen) -> Result<MetaRecord> {
        let mut builder = RecordBuilder::with_capacity(RecordFunction::CreatePenIndirect, 10);
        builder
            .u16(pen.style as u16)
            .i16(pen.width.x as i16)
            .i16(pen.width.y as i16)
            .u32(pen.color.value());
        builder.finish()
    }

    /// Encode a palette.
    pub fn palette_record(&self, palette: &LogPalette) -> Result<MetaRecord> {
        let count = u16::try_from(palette.len())
            .map_err(|_| WmfError::RecordTooLarge(4 + palette.len() * 4))?;
        let mut builder =
            RecordBuilder::with_capacity(RecordFunction::CreatePalette, 4 + palette.len() * 4);
        builder.u16(PALETTE_VERSION).u16(count);
        for entry in &palette.entries {
            builder
                .u8(entry.red)
                .u8(entry.green)
                .u8(entry.blue)
                .u8(entry.flags.bits());
        }
        builder.finish()
    }
}

impl Default for ObjectWriter {
    fn default() -> Self {
        Self::new(encoding_rs::WINDOWS_1252)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{
        BitmapInfoHeader, ColorTable, DibColorUsage, HatchStyle, PaletteEntry, PaletteEntryFlags,
        RgbQuad,
    };
    use crate::objects::pen::pen_style;
    use crate::types::ColorRef;

    fn no_pattern() -> Result<DibPattern> {
        panic!("pattern requested for a non-pattern brush")
    }

    #[test]
    fn test_solid_brush_layout() {
        let writer = ObjectWriter::default();
        let record = writer
            .brush_record(&LogBrush::solid(ColorRef::new(0x0011_2233)), no_pattern)
            .unwrap();
        assert_eq!(
            record.as_bytes(),
            &[7, 0, 0, 0, 0xFC, 0x02, 0, 0, 0x33, 0x22, 0x11, 0x00, 0, 0]
        );
    }

    #[test]
    fn test_hatched_brush_fields() {
        let writer = ObjectWriter::default();
        let brush = LogBrush::hatched(HatchStyle::DiagCross, ColorRef::new(0x00FF_0000));
        let record = writer.brush_record(&brush, no_pattern).unwrap();
        assert_eq!(record.params(), &[2, 0, 0, 0, 0xFF, 0, 5, 0]);
    }

    #[test]
    fn test_null_brush() {
        let writer = ObjectWriter::default();
        let record = writer.brush_record(&LogBrush::null(), no_pattern).unwrap();
        assert_eq!(&record.params()[0..2], &[1, 0]);
    }

    #[test]
    fn test_unsupported_brush_style() {
        let writer = ObjectWriter::default();
        let brush = LogBrush {
            style: BrushStyle::Pattern8x8,
            color: ColorRef::BLACK,
            hatch: 0,
        };
        assert!(matches!(
            writer.brush_record(&brush, no_pattern),
            Err(WmfError::UnsupportedBrushStyle(7))
        ));
    }

    #[test]
    fn test_pattern_error_propagates() {
        let writer = ObjectWriter::default();
        let brush = LogBrush {
            style: BrushStyle::DibPattern,
            color: ColorRef::BLACK,
            hatch: 0,
        };
        let result = writer.brush_record(&brush, || Err(WmfError::InvalidBitmap("gone".into())));
        assert!(matches!(result, Err(WmfError::InvalidBitmap(_))));
    }

    #[test]
    fn test_dib_pattern_brush_layout() {
        let mut header = BitmapInfoHeader::new(2, -2, 8);
        header.clr_used = 2;
        let dib = DibPattern {
            header,
            colors: ColorTable::Rgb(vec![RgbQuad::new(255, 0, 0), RgbQuad::new(0, 0, 255)]),
            usage: DibColorUsage::RgbColors,
            bits: vec![0, 1, 0, 0, 1, 0, 0, 0],
        };
        let writer = ObjectWriter::default();
        let record = writer
            .dib_pattern_brush_record(BrushStyle::DibPattern, &dib)
            .unwrap();

        let params = record.params();
        assert_eq!(&params[0..4], &[5, 0, 0, 0]);
        assert_eq!(params.len(), 4 + 40 + 8 + 8);
        // red quad stored as B, G, R, 0
        assert_eq!(&params[44..48], &[0, 0, 255, 0]);
        // rows reversed
        assert_eq!(&params[52..], &[1, 0, 0, 0, 0, 1, 0, 0]);
        assert_eq!(record.size_words() as usize * 2, record.len());
    }

    #[test]
    fn test_font_layout() {
        let mut font = LogFont::new(-70_000, "Arial");
        font.weight = 700;
        font.italic = 1;
        font.char_set = 204;
        font.pitch_and_family = 0x22;
        let record = ObjectWriter::default().font_record(&font).unwrap();

        assert_eq!(record.len(), 6 + LOGFONT16_SIZE);
        let p = record.params();
        assert_eq!(&p[0..2], &(-70_000i32 as i16).to_le_bytes());
        assert_eq!(&p[8..10], &700i16.to_le_bytes());
        assert_eq!(&p[10..18], &[1, 0, 0, 204, 0, 0, 0, 0x22]);
        assert_eq!(&p[18..23], b"Arial");
        assert!(p[23..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_long_face_name_truncated_and_terminated() {
        let font = LogFont::new(12, "X".repeat(64));
        let name = ObjectWriter::default().face_name(&font);
        assert!(name[..31].iter().all(|&b| b == b'X'));
        assert_eq!(name[31], 0);
    }

    #[test]
    fn test_face_name_stops_at_nul() {
        let font = LogFont::new(12, "Tahoma\0garbage");
        let name = ObjectWriter::default().face_name(&font);
        assert_eq!(&name[..6], b"Tahoma");
        assert!(name[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_charset_face_name_encoding() {
        let mut font = LogFont::new(12, "Ж");
        font.char_set = crate::objects::font::charset::RUSSIAN;
        let plain = ObjectWriter::default().face_name(&font);
        let by_charset = ObjectWriter::default()
            .with_charset_face_names(true)
            .face_name(&font);
        assert_eq!(by_charset[0], 0xC6);
        assert_eq!(by_charset[1], 0);
        assert_eq!(&plain[..2], b"?\0");
    }

    #[test]
    fn test_unmappable_face_name_characters_substituted() {
        let font = LogFont::new(12, "ЖЖЖЖЖ Sans");
        let name = ObjectWriter::default().face_name(&font);
        assert_eq!(&name[..11], b"????? Sans\0");
        assert!(name[11..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pen_layout() {
        let pen = LogPen::new(pen_style::DASH, 3, ColorRef::new(0x0000_00FF));
        let record = ObjectWriter::default().pen_record(&pen).unwrap();
        assert_eq!(
            record.as_bytes(),
            &[8, 0, 0, 0, 0xFA, 0x02, 1, 0, 3, 0, 0, 0, 0xFF, 0, 0, 0]
        );
    }

    #[test]
    fn test_palette_layout() {
        let palette = LogPalette::new(vec![
            PaletteEntry::new(1, 2, 3),
            PaletteEntry::new(4, 5, 6).with_flags(PaletteEntryFlags::EXPLICIT),
        ]);
        let record = ObjectWriter::default().palette_record(&palette).unwrap();
        assert_eq!(record.function(), RecordFunction::CreatePalette);
        assert_eq!(record.params(), &[0, 3, 2, 0, 1, 2, 3, 0, 4, 5, 6, 2]);
    }
}
