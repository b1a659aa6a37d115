/// Diagnostic: dump the header and record list of a WMF file.
///
///   cargo run --bin diag_records -- picture.wmf

use anyhow::{bail, Context};
use wmf_recorder::io::wmf::{Metafile, RecordFunction};

fn main() -> anyhow::Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: diag_records <file.wmf>");
    };

    let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path))?;
    let wmf = Metafile::parse(&bytes).with_context(|| format!("framing {}", path))?;

    let h = &wmf.header;
    println!("═══════════════════ {} ═══════════════════", path);
    println!(
        "type={} header={}w version={:#06X} size={}w objects={} max_record={}w",
        h.metafile_type, h.header_size, h.version, h.size_words, h.no_objects, h.max_record
    );
    let declared = u64::from(h.size_words) * 2;
    if declared != bytes.len() as u64 {
        println!(
            "  !! mtSize says {} bytes, file has {}",
            declared,
            bytes.len()
        );
    }

    for (i, rec) in wmf.records.iter().enumerate() {
        let name = rec
            .known_function()
            .map(|f| f.name())
            .unwrap_or("(other)");
        let first = match rec.known_function() {
            Some(RecordFunction::SelectObject)
            | Some(RecordFunction::DeleteObject)
            | Some(RecordFunction::SelectPalette) => rec
                .param_u16(0)
                .map(|index| format!(" slot={}", index))
                .unwrap_or_default(),
            _ => String::new(),
        };
        println!(
            "{:5}: {:#06X} {:<28} {:6}w{}",
            i, rec.function, name, rec.size_words, first
        );
    }

    if !wmf.terminated {
        println!("  !! no META_EOF record");
    }
    Ok(())
}
