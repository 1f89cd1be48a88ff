use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

use crate::Work;

/// Fixed header line; downstream consumers match on it verbatim.
pub const CSV_HEADER: &str = "authors,doi,title,created_at,journal";

/// Writes the header and one fully quoted row per work. Embedded quotes are
/// doubled per RFC 4180; absent doi/journal serialize as an empty field.
pub fn write_works<W: Write>(mut out: W, works: &[Work]) -> Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out);

    for work in works {
        writer.write_record([
            work.authors.as_str(),
            work.doi.as_deref().unwrap_or(""),
            work.title.as_str(),
            work.created_at.as_str(),
            work.journal.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
