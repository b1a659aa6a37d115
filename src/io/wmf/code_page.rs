//! Legacy 8-bit code pages for font face names.
//!
//! Face names are stored in CREATEFONTINDIRECT records as 8-bit strings.
//! Code page names and `*_CHARSET` values are mapped to `encoding_rs`
//! encodings here.

use crate::objects::font::charset;

use encoding_rs::Encoding;

/// Get the `encoding_rs` encoding for a code page name.
///
/// Names are matched case-insensitively. Unknown names fall back to
/// Windows-1252, the usual ANSI code page.
pub fn encoding_from_code_page(code_page: &str) -> &'static Encoding {
    match code_page.to_ascii_lowercase().as_str() {
        // Asian encodings
        "gb2312" | "ansi_936" | "cp936" => encoding_rs::GBK,
        "big5" | "ansi_950" | "cp950" => encoding_rs::BIG5,
        "korean" | "ansi_949" | "cp949" | "johab" => encoding_rs::EUC_KR,
        "ansi_932" | "cp932" | "shift_jis" => encoding_rs::SHIFT_JIS,

        // Windows/ANSI code pages
        "ansi_874" | "cp874" => encoding_rs::WINDOWS_874,
        "ansi_1250" | "cp1250" => encoding_rs::WINDOWS_1250,
        "ansi_1251" | "cp1251" => encoding_rs::WINDOWS_1251,
        "ansi_1252" | "cp1252" => encoding_rs::WINDOWS_1252,
        "ansi_1253" | "cp1253" => encoding_rs::WINDOWS_1253,
        "ansi_1254" | "cp1254" => encoding_rs::WINDOWS_1254,
        "ansi_1255" | "cp1255" => encoding_rs::WINDOWS_1255,
        "ansi_1256" | "cp1256" => encoding_rs::WINDOWS_1256,
        "ansi_1257" | "cp1257" => encoding_rs::WINDOWS_1257,
        "ansi_1258" | "cp1258" => encoding_rs::WINDOWS_1258,

        // DOS/OEM code pages
        "dos866" | "cp866" => encoding_rs::IBM866,

        // KOI8
        "koi8-r" => encoding_rs::KOI8_R,
        "koi8-u" => encoding_rs::KOI8_U,

        _ => encoding_rs::WINDOWS_1252,
    }
}

/// Get the encoding implied by a font's `lfCharSet`.
///
/// Returns `None` for character sets without a fixed code page
/// (`DEFAULT_CHARSET`, `SYMBOL_CHARSET`, `OEM_CHARSET` and unknown values).
pub fn encoding_from_charset(char_set: u8) -> Option<&'static Encoding> {
    match char_set {
        charset::ANSI => Some(encoding_rs::WINDOWS_1252),
        charset::SHIFTJIS => Some(encoding_rs::SHIFT_JIS),
        charset::HANGUL | charset::JOHAB => Some(encoding_rs::EUC_KR),
        charset::GB2312 => Some(encoding_rs::GBK),
        charset::CHINESEBIG5 => Some(encoding_rs::BIG5),
        charset::GREEK => Some(encoding_rs::WINDOWS_1253),
        charset::TURKISH => Some(encoding_rs::WINDOWS_1254),
        charset::VIETNAMESE => Some(encoding_rs::WINDOWS_1258),
        charset::HEBREW => Some(encoding_rs::WINDOWS_1255),
        charset::ARABIC => Some(encoding_rs::WINDOWS_1256),
        charset::BALTIC => Some(encoding_rs::WINDOWS_1257),
        charset::RUSSIAN => Some(encoding_rs::WINDOWS_1251),
        charset::THAI => Some(encoding_rs::WINDOWS_874),
        charset::EASTEUROPE => Some(encoding_rs::WINDOWS_1250),
        _ => None,
    }
}

/// Substitute for characters a code page cannot represent.
pub const DEFAULT_CHAR: u8 = b'?';

/// Encode `text` and cut it to at most `max_len` bytes.
///
/// The cut falls on a character boundary so multi-byte code pages never end
/// in half a character. Characters the code page cannot represent become
/// [`DEFAULT_CHAR`].
pub fn encode_truncated(text: &str, encoding: &'static Encoding, max_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(max_len);
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let (encoded, _, had_unmappables) = encoding.encode(ch.encode_utf8(&mut buf));
        let bytes: &[u8] = if had_unmappables {
            std::slice::from_ref(&DEFAULT_CHAR)
        } else {
            &encoded
        };
        if out.len() + bytes.len() > max_len {
            break;
        }
        out.extend_from_slice(bytes);
    }
    out
}
