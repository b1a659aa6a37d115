//! Logical font description.

/// Length of the face name buffer, terminator included.
pub const LF_FACESIZE: usize = 32;

/// Character set (`*_CHARSET`) values that select a legacy code page.
pub mod charset {
    pub const ANSI: u8 = 0;
    pub const DEFAULT: u8 = 1;
    pub const SYMBOL: u8 = 2;
    pub const SHIFTJIS: u8 = 128;
    pub const HANGUL: u8 = 129;
    pub const JOHAB: u8 = 130;
    pub const GB2312: u8 = 134;
    pub const CHINESEBIG5: u8 = 136;
    pub const GREEK: u8 = 161;
    pub const TURKISH: u8 = 162;
    pub const VIETNAMESE: u8 = 163;
    pub const HEBREW: u8 = 177;
    pub const ARABIC: u8 = 178;
    pub const BALTIC: u8 = 186;
    pub const RUSSIAN: u8 = 204;
    pub const THAI: u8 = 222;
    pub const EASTEUROPE: u8 = 238;
    pub const OEM: u8 = 255;
}

/// In-memory `LOGFONTW`.
///
/// The numeric fields are 32 bits wide here and 16 bits wide in the
/// metafile record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogFont {
    pub height: i32,
    pub width: i32,
    pub escapement: i32,
    pub orientation: i32,
    pub weight: i32,
    pub italic: u8,
    pub underline: u8,
    pub strike_out: u8,
    pub char_set: u8,
    pub out_precision: u8,
    pub clip_precision: u8,
    pub quality: u8,
    pub pitch_and_family: u8,
    pub face_name: String,
}

impl LogFont {
    /// A regular-weight font of the given height and face.
    pub fn new(height: i32, face_name: impl Into<String>) -> Self {
        Self {
            height,
            weight: 400,
            face_name: face_name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_font_defaults() {
        let font = LogFont::new(-12, "Arial");
        assert_eq!(font.height, -12);
        assert_eq!(font.weight, 400);
        assert_eq!(font.char_set, charset::ANSI);
        assert_eq!(font.face_name, "Arial");
    }
}
