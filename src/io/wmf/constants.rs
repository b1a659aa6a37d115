//! Record function codes and header constants of the WMF format.

/// Record function (`META_*`) codes written in `rdFunction`.
///
/// The high byte of each code is the parameter word count of the original
/// 16-bit call; the low byte is the GDI function number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RecordFunction {
    Eof = 0x0000,
    RealizePalette = 0x0035,
    CreatePalette = 0x00F7,
    SelectObject = 0x012D,
    DibCreatePatternBrush = 0x0142,
    DeleteObject = 0x01F0,
    SelectPalette = 0x0234,
    CreatePenIndirect = 0x02FA,
    CreateFontIndirect = 0x02FB,
    CreateBrushIndirect = 0x02FC,
}

impl RecordFunction {
    /// Look up a function code this crate writes.
    pub fn from_value(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(Self::Eof),
            0x0035 => Some(Self::RealizePalette),
            0x00F7 => Some(Self::CreatePalette),
            0x012D => Some(Self::SelectObject),
            0x0142 => Some(Self::DibCreatePatternBrush),
            0x01F0 => Some(Self::DeleteObject),
            0x0234 => Some(Self::SelectPalette),
            0x02FA => Some(Self::CreatePenIndirect),
            0x02FB => Some(Self::CreateFontIndirect),
            0x02FC => Some(Self::CreateBrushIndirect),
            _ => None,
        }
    }

    pub fn value(&self) -> u16 {
        *self as u16
    }

    /// Name as used in the WMF documentation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eof => "META_EOF",
            Self::RealizePalette => "META_REALIZEPALETTE",
            Self::CreatePalette => "META_CREATEPALETTE",
            Self::SelectObject => "META_SELECTOBJECT",
            Self::DibCreatePatternBrush => "META_DIBCREATEPATTERNBRUSH",
            Self::DeleteObject => "META_DELETEOBJECT",
            Self::SelectPalette => "META_SELECTPALETTE",
            Self::CreatePenIndirect => "META_CREATEPENINDIRECT",
            Self::CreateFontIndirect => "META_CREATEFONTINDIRECT",
            Self::CreateBrushIndirect => "META_CREATEBRUSHINDIRECT",
        }
    }
}

/// `METAHEADER` constants.
pub mod header {
    /// Header size in bytes.
    pub const SIZE: usize = 18;
    /// Header size in 16-bit words (`mtHeaderSize`).
    pub const SIZE_WORDS: u16 = 9;
    /// `mtVersion` for metafiles that may contain DIB records.
    pub const VERSION: u16 = 0x0300;
}

/// Size of the `rdSize` + `rdFunction` record header in bytes.
pub const RECORD_HEADER_SIZE: usize = 6;

/// `mtType` of a metafile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum MetafileType {
    #[default]
    Memory = 1,
    Disk = 2,
}

impl MetafileType {
    pub fn from_value(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Memory),
            2 => Some(Self::Disk),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_codes_roundtrip() {
        let all = [
            RecordFunction::Eof,
            RecordFunction::RealizePalette,
            RecordFunction::CreatePalette,
            RecordFunction::SelectObject,
            RecordFunction::DibCreatePatternBrush,
            RecordFunction::DeleteObject,
            RecordFunction::SelectPalette,
            RecordFunction::CreatePenIndirect,
            RecordFunction::CreateFontIndirect,
            RecordFunction::CreateBrushIndirect,
        ];
        for f in all {
            assert_eq!(RecordFunction::from_value(f.value()), Some(f));
        }
        assert_eq!(RecordFunction::from_value(0x0B41), None);
    }

    #[test]
    fn test_function_names() {
        assert_eq!(RecordFunction::SelectObject.name(), "META_SELECTOBJECT");
        assert_eq!(RecordFunction::CreateBrushIndirect.value(), 0x02FC);
    }

    #[test]
    fn test_metafile_type() {
        assert_eq!(MetafileType::from_value(2), Some(MetafileType::Disk));
        assert_eq!(MetafileType::from_value(3), None);
        assert_eq!(MetafileType::default() as u16, 1);
    }
}
