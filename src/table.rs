//! Flatten stations (with nested daily series) into the two export tables.
//!
//! Pure functions; no validation of dates or ranges happens here.

use crate::models::{Station, StationRow, ValueRow};

/// Both record sets of an export.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    pub stations: Vec<StationRow>,
    pub values: Vec<ValueRow>,
}

/// One metadata row per station, in input order.
pub fn station_rows(stations: &[Station]) -> Vec<StationRow> {
    stations
        .iter()
        .map(|s| StationRow {
            data_source: s.dataset.clone(),
            provider_code: s.provider_code.clone(),
            provider_name: s.provider_name.clone(),
            station_code: s.station_code.clone(),
            station_description: s.station_description.clone().unwrap_or_default(),
            waterbody_name: s.waterbody_name.clone().unwrap_or_default(),
            latitude: s.latitude,
            longitude: s.longitude,
            start_date: s.start.clone(),
            end_date: s.end.clone(),
            n_daily_values: s.n,
            station_url: s.url.clone(),
        })
        .collect()
}

/// One value row per station-day; stations in input order, days in series order.
pub fn value_rows(stations: &[Station]) -> Vec<ValueRow> {
    stations
        .iter()
        .flat_map(|s| {
            s.data.iter().map(move |d| ValueRow {
                data_source: s.dataset.clone(),
                provider_code: s.provider_code.clone(),
                station_code: s.station_code.clone(),
                station_description: s.station_description.clone().unwrap_or_default(),
                waterbody_name: s.waterbody_name.clone().unwrap_or_default(),
                date: d.date.clone(),
                water_temp_c: d.temp_c,
                air_temp_c: d.airtemp_c,
            })
        })
        .collect()
}

pub fn project(stations: &[Station]) -> Tables {
    Tables {
        stations: station_rows(stations),
        values: value_rows(stations),
    }
}

/// Distinct values in order of first appearance.
pub fn distinct<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|x| x == item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Data sources present in the selection.
pub fn data_sources(stations: &[Station]) -> Vec<String> {
    distinct(stations.iter().map(|s| s.dataset.as_str()))
}

/// Providers present in the selection, one per `provider_code`, by display name.
///
/// The name is the first non-blank `provider_name` seen for that code.
pub fn providers(stations: &[Station]) -> Vec<String> {
    distinct(stations.iter().map(|s| s.provider_code.as_str()))
        .into_iter()
        .map(|code| {
            let named = stations
                .iter()
                .find(|s| s.provider_code == code && !s.provider_name.trim().is_empty());
            match named {
                Some(s) => s.provider_display_name().to_string(),
                None => code,
            }
        })
        .collect()
}
