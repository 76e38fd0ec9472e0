//! Export entry point: validate, build the header, project, render, deliver.

use crate::citation::CitationRegistry;
use crate::config::ExportConfig;
use crate::dates::parse_timestamp;
use crate::delivery::{Delivery, DeliveryOutcome};
use crate::error::{ExportError, Result};
use crate::header::{HeaderInput, build_header};
use crate::models::Station;
use crate::storage::{CSV_MIME_TYPE, assemble_document, export_filename, render_csv};
use crate::table::{data_sources, project, providers};
use chrono::{DateTime, Local};
use log::{debug, error, info};

/// What an export produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub filename: String,
    pub station_rows: usize,
    pub value_rows: usize,
    pub outcome: DeliveryOutcome,
}

/// The full document text plus its filename, before delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub filename: String,
    pub text: String,
    pub station_rows: usize,
    pub value_rows: usize,
}

/// Export `stations` using the current wall clock for the download stamp.
pub fn export(
    stations: &[Station],
    last_updated: &str,
    config: &ExportConfig,
    delivery: &mut dyn Delivery,
) -> Result<ExportReport> {
    export_at(stations, last_updated, config, delivery, Local::now())
}

/// Export with an explicit "now"; the clock is not read again.
pub fn export_at(
    stations: &[Station],
    last_updated: &str,
    config: &ExportConfig,
    delivery: &mut dyn Delivery,
    now: DateTime<Local>,
) -> Result<ExportReport> {
    let doc = build_document(stations, last_updated, config, &CitationRegistry::default(), now)?;

    let outcome = delivery.deliver(doc.text.as_bytes(), &doc.filename, CSV_MIME_TYPE);
    match &outcome {
        DeliveryOutcome::Saved(path) => info!("saved {} to {}", doc.filename, path.display()),
        DeliveryOutcome::Written => info!("wrote {} ({} bytes)", doc.filename, doc.text.len()),
        DeliveryOutcome::Cancelled => info!("save of {} cancelled", doc.filename),
        DeliveryOutcome::Failed(reason) => error!("could not deliver {}: {}", doc.filename, reason),
    }

    Ok(ExportReport {
        filename: doc.filename,
        station_rows: doc.station_rows,
        value_rows: doc.value_rows,
        outcome,
    })
}

/// Assemble the export document without delivering it.
pub fn build_document(
    stations: &[Station],
    last_updated: &str,
    config: &ExportConfig,
    registry: &CitationRegistry,
    now: DateTime<Local>,
) -> Result<ExportDocument> {
    if stations.is_empty() {
        return Err(ExportError::NoStationsSelected);
    }
    let last_updated = parse_timestamp(last_updated)?;

    let sources = data_sources(stations);
    let providers = providers(stations);
    debug!("exporting {} stations from sources {:?}", stations.len(), sources);

    let header = build_header(
        &HeaderInput {
            sources: &sources,
            providers: &providers,
            last_updated: &last_updated,
            downloaded_at: &now,
        },
        registry,
        config.time_zone,
    );

    let tables = project(stations);
    debug!(
        "projected {} station rows and {} value rows",
        tables.stations.len(),
        tables.values.len()
    );
    let stations_csv = render_csv(&tables.stations)?;
    let values_csv = render_csv(&tables.values)?;

    Ok(ExportDocument {
        filename: export_filename(&now, config),
        text: assemble_document(&header, &stations_csv, &values_csv),
        station_rows: tables.stations.len(),
        value_rows: tables.values.len(),
    })
}
