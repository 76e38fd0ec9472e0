use crate::config::ExportConfig;
use crate::dates::format_compact;
use crate::error::Result;
use chrono::{DateTime, TimeZone};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

/// Content type of the delivered document.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

pub const SECTION_RULE: &str =
    "# ---------------------------------------------------------------";
pub const STATIONS_BANNER: &str = "# Station Metadata";
pub const VALUES_BANNER: &str = "# Daily Mean Water and Air Temperature";

/// Render records as CSV with a header row of field names.
///
/// Rows end in `\n`; the last one has no terminator so blocks can be joined.
/// An empty slice renders as an empty string.
pub fn render_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Join header and both tables into the final document.
pub fn assemble_document(header: &str, stations_csv: &str, values_csv: &str) -> String {
    [
        header,
        "#",
        SECTION_RULE,
        STATIONS_BANNER,
        "#",
        stations_csv,
        "#",
        SECTION_RULE,
        VALUES_BANNER,
        "#",
        values_csv,
    ]
    .join("\n")
}

/// `{prefix}_{YYYYMMDD}_{HHMMSS}.{ext}` from the caller's wall clock.
pub fn export_filename<Z: TimeZone>(now: &DateTime<Z>, config: &ExportConfig) -> String
where
    Z::Offset: std::fmt::Display,
{
    format!(
        "{}_{}.{}",
        config.filename_prefix,
        format_compact(now),
        config.extension
    )
}
