//! Comment-prefixed preamble of the export file.

use crate::citation::CitationRegistry;
use crate::dates::format_stamp;
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

pub const TITLE_LINE: &str = "# AKTEMP-VIZ | Alaska Stream Temperature Data Visualization Tool";
pub const URL_LINE: &str = "# https://aktemp.uaa.alaska.edu/dataviz";
pub const DESCRIPTION_LINE: &str = "# Daily Mean Water and Air Temperature at Select Stations";
pub const SOURCES_NOTE_LINE: &str = "# Data Sources (note: Excel will break citations at commas -- open in text editor like Notepad to view correctly)";

/// Inputs of the file header.
pub struct HeaderInput<'a, Z: TimeZone, N: TimeZone> {
    /// Distinct data sources, in order of first appearance.
    pub sources: &'a [String],
    /// Provider display names credited by templates that list contributors.
    pub providers: &'a [String],
    /// When the upstream data was last refreshed.
    pub last_updated: &'a DateTime<Z>,
    /// Wall clock at the time of the export, read once by the caller.
    pub downloaded_at: &'a DateTime<N>,
}

/// Build the full header text (no trailing newline).
pub fn build_header<Z: TimeZone, N: TimeZone>(
    input: &HeaderInput<'_, Z, N>,
    registry: &CitationRegistry,
    tz: Tz,
) -> String {
    let citations =
        registry.citation_block(input.sources, input.providers, input.last_updated, tz);
    [
        TITLE_LINE.to_string(),
        URL_LINE.to_string(),
        "#".to_string(),
        DESCRIPTION_LINE.to_string(),
        "#".to_string(),
        format!("# Data Last Updated: {}", format_stamp(input.last_updated, tz)),
        format!("# File Downloaded At: {}", format_stamp(input.downloaded_at, tz)),
        "#".to_string(),
        SOURCES_NOTE_LINE.to_string(),
        "#".to_string(),
        citations,
    ]
    .join("\n")
}
