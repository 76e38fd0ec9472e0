use serde::{Deserialize, Serialize, Serializer};

/// One daily record of a station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// ISO date (`YYYY-MM-DD`), passed through untouched.
    pub date: String,
    /// Daily mean water temperature in °C.
    #[serde(default)]
    pub temp_c: Option<f64>,
    /// Daily mean air temperature in °C.
    #[serde(default)]
    pub airtemp_c: Option<f64>,
}

/// A monitoring location as held by the visualization app, with its daily series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Data source registry key (`"USGS"`, `"NPS"`, `"AKTEMP"`, …).
    pub dataset: String,
    pub provider_code: String,
    #[serde(default)]
    pub provider_name: String,
    pub station_code: String,
    #[serde(default)]
    pub station_description: Option<String>,
    #[serde(default)]
    pub waterbody_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub n: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub data: Vec<Observation>,
}

impl Station {
    /// Name used when crediting the operating organization; falls back to the code.
    pub fn provider_display_name(&self) -> &str {
        if self.provider_name.trim().is_empty() {
            &self.provider_code
        } else {
            &self.provider_name
        }
    }
}

/// Flat station metadata record (one per station).
///
/// Field order is the column order of the "Station Metadata" section.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationRow {
    pub data_source: String,
    pub provider_code: String,
    pub provider_name: String,
    pub station_code: String,
    pub station_description: String,
    pub waterbody_name: String,
    #[serde(serialize_with = "ser_number")]
    pub latitude: f64,
    #[serde(serialize_with = "ser_number")]
    pub longitude: f64,
    pub start_date: String,
    pub end_date: String,
    pub n_daily_values: u64,
    pub station_url: String,
}

/// Flat daily value record (one per station-day).
///
/// Missing measurements stay `None` here and become empty cells when written.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueRow {
    pub data_source: String,
    pub provider_code: String,
    pub station_code: String,
    pub station_description: String,
    pub waterbody_name: String,
    pub date: String,
    #[serde(serialize_with = "ser_opt_number")]
    pub water_temp_c: Option<f64>,
    #[serde(serialize_with = "ser_opt_number")]
    pub air_temp_c: Option<f64>,
}

/// Render a cell value the way it was received: `12.3`, `10`, `-0.5`.
pub fn format_number(v: f64) -> String {
    v.to_string()
}

/// Render an optional measurement; `None` becomes an empty cell.
pub fn format_opt_number(v: Option<f64>) -> String {
    v.map(format_number).unwrap_or_default()
}

/// Serde helper: write an `f64` as its shortest decimal text.
fn ser_number<S>(v: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_number(*v))
}

/// Serde helper: write `Some(x)` as text and `None` as an empty string.
fn ser_opt_number<S>(v: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_opt_number(*v))
}
