//! Export settings: the regional time zone used for header stamps and the
//! filename pattern.

use crate::error::{ExportError, Result};
use chrono_tz::Tz;

/// Zone all human-readable header stamps are rendered in.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::US::Alaska;
pub const DEFAULT_FILENAME_PREFIX: &str = "aktemp_viz_data";
pub const DEFAULT_EXTENSION: &str = "csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub time_zone: Tz,
    pub filename_prefix: String,
    pub extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE,
            filename_prefix: DEFAULT_FILENAME_PREFIX.into(),
            extension: DEFAULT_EXTENSION.into(),
        }
    }
}

impl ExportConfig {
    /// Replace the time zone by IANA name (`"US/Alaska"`, `"America/Anchorage"`, …).
    pub fn with_time_zone_name(mut self, name: &str) -> Result<Self> {
        self.time_zone = parse_time_zone(name)?;
        Ok(self)
    }

    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }
}

pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ExportError::UnknownTimeZone(name.to_string()))
}
