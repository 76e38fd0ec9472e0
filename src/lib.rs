//! aktemp_export
//!
//! Assembles the AKTEMP-VIZ CSV export: a comment-prefixed header crediting
//! every data source in the selection, a station metadata table and a daily
//! water/air temperature table, delivered as one `text/csv` file named
//! `aktemp_viz_data_<YYYYMMDD>_<HHMMSS>.csv`.
//!
//! ### Features
//! - Citation registry keyed by data source (USGS, NPS, AKTEMP), extensible at runtime
//! - Header stamps rendered in a configurable regional zone (default `US/Alaska`)
//! - Null measurements written as empty cells, values passed through unrounded
//! - Pluggable delivery: directory, stdout, native save dialog, in-memory
//!
//! ### Example
//! ```no_run
//! use aktemp_export::{ExportConfig, Station, export};
//! use aktemp_export::delivery::DirectoryDelivery;
//!
//! let json = std::fs::read_to_string("stations.json")?;
//! let stations: Vec<Station> = serde_json::from_str(&json)?;
//! let mut target = DirectoryDelivery::new(".");
//! let report = export(&stations, "2024-06-01T00:00:00Z", &ExportConfig::default(), &mut target)?;
//! println!("{} -> {:?}", report.filename, report.outcome);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod citation;
pub mod config;
pub mod dates;
pub mod delivery;
pub mod error;
pub mod export;
pub mod header;
pub mod models;
pub mod storage;
pub mod table;

pub use citation::{CitationRegistry, join_items};
pub use config::ExportConfig;
pub use delivery::{Delivery, DeliveryOutcome};
pub use error::ExportError;
pub use export::{ExportReport, export, export_at};
pub use models::{Observation, Station, StationRow, ValueRow};
