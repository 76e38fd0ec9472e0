use aktemp_export::delivery::MemoryDelivery;
use aktemp_export::{ExportConfig, Station, export_at};
use chrono::{Local, TimeZone};

fn fixture() -> Vec<Station> {
    let txt = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/stations.json"
    ))
    .unwrap();
    serde_json::from_str(&txt).unwrap()
}

fn run(stations: &[Station]) -> String {
    let mut sink = MemoryDelivery::new();
    let now = Local.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap();
    export_at(
        stations,
        "2024-06-01T00:00:00Z",
        &ExportConfig::default(),
        &mut sink,
        now,
    )
    .unwrap();
    sink.text()
}

/// Split the document into (header comment lines, station csv, value csv).
fn sections(doc: &str) -> (String, String, String) {
    let (head, rest) = doc.split_once("# Station Metadata\n#\n").unwrap();
    let (stations, values) = rest
        .split_once("# Daily Mean Water and Air Temperature\n#\n")
        .unwrap();
    (head.to_string(), stations.to_string(), values.to_string())
}

fn parse(block: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_reader(block.as_bytes());
    let headers = rdr.headers().unwrap().iter().map(String::from).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

#[test]
fn two_sources_scenario() {
    let doc = run(&fixture());
    let (head, stations, values) = sections(&doc);

    let citations: Vec<&str> = head.lines().filter(|l| l.starts_with("#     ")).collect();
    assert_eq!(citations.len(), 2);
    assert!(citations[0].contains("U.S. Geological Survey (USGS) (2024)"));
    assert!(citations[1].contains("Alaska Water Temperature Database (AKTEMP-DB) (2024)"));
    assert!(citations[1].contains("Acme Labs"));
    assert!(head.contains("# Data Last Updated: 5/31/2024 4:00 PM AKDT\n"));

    let (station_fields, station_rows) = parse(&stations);
    assert_eq!(
        station_fields,
        [
            "data_source",
            "provider_code",
            "provider_name",
            "station_code",
            "station_description",
            "waterbody_name",
            "latitude",
            "longitude",
            "start_date",
            "end_date",
            "n_daily_values",
            "station_url"
        ]
    );
    assert_eq!(station_rows.len(), 2);
    assert_eq!(&station_rows[1][4], "");

    let (value_fields, value_rows) = parse(&values);
    assert_eq!(
        value_fields,
        [
            "data_source",
            "provider_code",
            "station_code",
            "station_description",
            "waterbody_name",
            "date",
            "water_temp_c",
            "air_temp_c"
        ]
    );
    assert_eq!(value_rows.len(), 4);
    let empty_water = value_rows.iter().filter(|r| &r[6] == "").count();
    assert_eq!(empty_water, 1);
    assert_eq!(&value_rows[1][7], "9");
    assert_eq!(&value_rows[3][6], "4.25");
}

#[test]
fn row_counts_follow_input() {
    let mut stations = fixture();
    stations[1].data.clear();
    let doc = run(&stations);
    let (_, st, vals) = sections(&doc);
    assert_eq!(parse(&st).1.len(), 2);
    let total: usize = stations.iter().map(|s| s.data.len()).sum();
    assert_eq!(parse(&vals).1.len(), total);
}

#[test]
fn citation_block_is_stable_across_runs() {
    let strip = |doc: String| {
        doc.lines()
            .filter(|l| !l.starts_with("# File Downloaded At:"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let mut sink_a = MemoryDelivery::new();
    let mut sink_b = MemoryDelivery::new();
    let cfg = ExportConfig::default();
    let stations = fixture();
    aktemp_export::export(&stations, "2024-06-01T00:00:00Z", &cfg, &mut sink_a).unwrap();
    aktemp_export::export(&stations, "2024-06-01T00:00:00Z", &cfg, &mut sink_b).unwrap();
    assert_eq!(strip(sink_a.text()), strip(sink_b.text()));
}

#[test]
fn unknown_source_gets_no_citation_but_keeps_rows() {
    let mut stations = fixture();
    stations[0].dataset = "NOAA".into();
    let doc = run(&stations);
    let (head, st, _) = sections(&doc);
    let citations = head.lines().filter(|l| l.starts_with("#     ")).count();
    assert_eq!(citations, 1);
    assert_eq!(&parse(&st).1[0][0], "NOAA");
}

#[test]
fn other_time_zone_changes_stamps_only() {
    let mut sink = MemoryDelivery::new();
    let cfg = ExportConfig::default().with_time_zone_name("UTC").unwrap();
    let now = Local.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap();
    export_at(&fixture(), "2024-06-01T00:00:00Z", &cfg, &mut sink, now).unwrap();
    let doc = sink.text();
    assert!(doc.contains("# Data Last Updated: 6/1/2024 12:00 AM UTC\n"));
    assert!(doc.contains("Accessed [Jun 1, 2024]"));
}
