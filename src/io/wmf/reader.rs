//! Record framing reader.
//!
//! Splits a metafile into its header and records without interpreting
//! record parameters. An Aldus placeable header in front of the
//! `METAHEADER` is skipped.

use crate::error::{Result, WmfError};
use crate::io::wmf::constants::{RecordFunction, RECORD_HEADER_SIZE};
use crate::io::wmf::header::MetaHeader;

use nom::bytes::complete::{tag, take};
use nom::combinator::{opt, verify};
use nom::error::{Error, ErrorKind};
use nom::number::complete::{le_u16, le_u32};
use nom::sequence::tuple;
use nom::IResult;

/// Aldus placeable metafile key.
const PLACEABLE_KEY: [u8; 4] = [0xD7, 0xCD, 0xC6, 0x9A];
/// Placeable header size after the key.
const PLACEABLE_REST: usize = 18;

/// One record as found in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub size_words: u32,
    pub function: u16,
    /// Parameter bytes, padding included
    pub params: &'a [u8],
}

impl<'a> RawRecord<'a> {
    /// The function, if it is one this crate writes.
    pub fn known_function(&self) -> Option<RecordFunction> {
        RecordFunction::from_value(self.function)
    }

    /// Parameter word `i`, if present.
    pub fn param_u16(&self, i: usize) -> Option<u16> {
        let bytes = self.params.get(i * 2..i * 2 + 2)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}

/// A framed metafile.
#[derive(Debug, Clone)]
pub struct Metafile<'a> {
    pub header: MetaHeader,
    /// Records up to, not including, the EOF record
    pub records: Vec<RawRecord<'a>>,
    /// Whether an EOF record closed the stream
    pub terminated: bool,
}

impl<'a> Metafile<'a> {
    /// Parse a complete metafile.
    pub fn parse(input: &'a [u8]) -> Result<Self> {
        let (mut rest, (_, header)) =
            tuple((opt(placeable_header), meta_header))(input).map_err(to_parse_error)?;

        let mut records = Vec::new();
        let mut terminated = false;
        while !rest.is_empty() {
            let (next, rec) = record(rest).map_err(to_parse_error)?;
            rest = next;
            if rec.function == RecordFunction::Eof.value() {
                terminated = true;
                break;
            }
            records.push(rec);
        }

        Ok(Self {
            header,
            records,
            terminated,
        })
    }

    /// Parse a bare record sequence with no header.
    pub fn parse_records(mut input: &'a [u8]) -> Result<Vec<RawRecord<'a>>> {
        let mut records = Vec::new();
        while !input.is_empty() {
            let (next, rec) = record(input).map_err(to_parse_error)?;
            input = next;
            records.push(rec);
        }
        Ok(records)
    }
}

fn to_parse_error(err: nom::Err<nom::error::Error<&[u8]>>) -> WmfError {
    match err {
        nom::Err::Incomplete(_) => WmfError::Parse("unexpected end of stream".to_string()),
        nom::Err::Error(e) | nom::Err::Failure(e) => WmfError::Parse(format!(
            "{:?} with {} bytes left",
            e.code,
            e.input.len()
        )),
    }
}

fn placeable_header(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let (input, _) = tag(&PLACEABLE_KEY[..])(input)?;
    take(PLACEABLE_REST)(input)
}

fn meta_header(input: &[u8]) -> IResult<&[u8], MetaHeader> {
    let (input, (metafile_type, header_size, version, size_words, no_objects, max_record, no_parameters)) =
        tuple((
            verify(le_u16, |t: &u16| *t == 1 || *t == 2),
            verify(le_u16, |s: &u16| *s == 9),
            le_u16,
            le_u32,
            le_u16,
            le_u32,
            le_u16,
        ))(input)?;
    Ok((
        input,
        MetaHeader {
            metafile_type,
            header_size,
            version,
            size_words,
            no_objects,
            max_record,
            no_parameters,
        },
    ))
}

fn record(input: &[u8]) -> IResult<&[u8], RawRecord<'_>> {
    let start = input;
    let (input, size_words) =
        verify(le_u32, |s: &u32| u64::from(*s) * 2 >= RECORD_HEADER_SIZE as u64)(input)?;
    let (input, function) = le_u16(input)?;
    // rdSize * 2 does not fit usize on 16/32-bit targets for large values
    let params_len = usize::try_from(u64::from(size_words) * 2 - RECORD_HEADER_SIZE as u64)
        .map_err(|_| nom::Err::Failure(Error::new(start, ErrorKind::TooLarge)))?;
    let (input, params) = take(params_len)(input)?;
    Ok((
        input,
        RawRecord {
            size_words,
            function,
            params,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::wmf::constants::MetafileType;
    use crate::io::wmf::record::index_record;
    use crate::io::wmf::writer::{MetafileStream, RecordSink};

    #[test]
    fn test_parse_written_stream() {
        let mut stream = MetafileStream::new(MetafileType::Disk);
        stream
            .write_record(&index_record(RecordFunction::SelectObject, 7).unwrap())
            .unwrap();
        let bytes = stream.finish(1).unwrap();

        let wmf = Metafile::parse(&bytes).unwrap();
        assert!(wmf.terminated);
        assert_eq!(wmf.header.metafile_type, 2);
        assert_eq!(wmf.header.size_words as usize * 2, bytes.len());
        assert_eq!(wmf.records.len(), 1);
        assert_eq!(wmf.records[0].known_function(), Some(RecordFunction::SelectObject));
        assert_eq!(wmf.records[0].param_u16(0), Some(7));
        assert_eq!(wmf.records[0].param_u16(1), None);
    }

    #[test]
    fn test_placeable_header_skipped() {
        let stream = MetafileStream::default();
        let body = stream.finish(0).unwrap();
        let mut bytes = PLACEABLE_KEY.to_vec();
        bytes.extend_from_slice(&[0u8; PLACEABLE_REST]);
        bytes.extend_from_slice(&body);

        let wmf = Metafile::parse(&bytes).unwrap();
        assert!(wmf.terminated);
        assert!(wmf.records.is_empty());
    }

    #[test]
    fn test_truncated_record_is_error() {
        let bytes = [8u8, 0, 0, 0, 0x2D, 0x01, 0];
        assert!(matches!(
            Metafile::parse_records(&bytes),
            Err(WmfError::Parse(_))
        ));
    }

    #[test]
    fn test_undersized_record_is_error() {
        let bytes = [2u8, 0, 0, 0, 0, 0];
        assert!(Metafile::parse_records(&bytes).is_err());
    }

    #[test]
    fn test_oversized_record_is_error() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0x2D, 0x01, 0, 0];
        assert!(matches!(
            Metafile::parse_records(&bytes),
            Err(WmfError::Parse(_))
        ));
    }

    #[test]
    fn test_bad_header_is_error() {
        assert!(Metafile::parse(&[0u8; 18]).is_err());
    }
}
