//! `METAHEADER`, the 18-byte block that opens a metafile.

use crate::error::Result;
use crate::io::wmf::constants::{header, MetafileType};

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Metafile header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaHeader {
    /// `mtType`
    pub metafile_type: u16,
    /// `mtHeaderSize` in words
    pub header_size: u16,
    /// `mtVersion`
    pub version: u16,
    /// `mtSize`: whole file in words, header included
    pub size_words: u32,
    /// `mtNoObjects`: most objects live at once
    pub no_objects: u16,
    /// `mtMaxRecord`: largest record in words
    pub max_record: u32,
    /// `mtNoParameters`, always 0
    pub no_parameters: u16,
}

impl MetaHeader {
    pub fn new(metafile_type: MetafileType) -> Self {
        Self {
            metafile_type: metafile_type as u16,
            header_size: header::SIZE_WORDS,
            version: header::VERSION,
            size_words: header::SIZE_WORDS as u32,
            no_objects: 0,
            max_record: 0,
            no_parameters: 0,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_u16::<LittleEndian>(self.metafile_type)?;
        out.write_u16::<LittleEndian>(self.header_size)?;
        out.write_u16::<LittleEndian>(self.version)?;
        out.write_u32::<LittleEndian>(self.size_words)?;
        out.write_u16::<LittleEndian>(self.no_objects)?;
        out.write_u32::<LittleEndian>(self.max_record)?;
        out.write_u16::<LittleEndian>(self.no_parameters)?;
        Ok(())
    }
}
