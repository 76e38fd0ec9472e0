//! Error type for the export pipeline.

/// Errors that stop an export before anything is delivered.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Returned when the caller passes an empty station selection.
    #[error("No stations selected")]
    NoStationsSelected,

    /// Returned when the "data last updated" stamp is not an ISO 8601 date or date-time.
    #[error("invalid last-updated timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Underlying chrono parse failure.
        source: chrono::ParseError,
    },

    /// Returned when a configured time zone name is not a known IANA zone.
    #[error("unknown time zone {0:?}")]
    UnknownTimeZone(String),

    /// Returned when a record set cannot be written as CSV.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
