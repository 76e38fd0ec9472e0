use aktemp_export::delivery::{
    Delivery, DeliveryOutcome, DialogDelivery, DirectoryDelivery, WriterDelivery,
};
use aktemp_export::{ExportConfig, Station, export};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "aktemp-export",
    version,
    about = "Build the AKTEMP-VIZ CSV export (citations, station metadata, daily temperatures)"
)]
struct Cli {
    /// JSON file with the selected stations (array of station objects). Use - for stdin.
    #[arg(short, long)]
    stations: PathBuf,
    /// When the station data was last updated (ISO 8601, e.g. 2024-06-01T00:00:00Z).
    #[arg(short = 'u', long)]
    last_updated: String,
    /// Directory to save into (default: the user's download directory).
    #[arg(short, long, conflicts_with_all = ["stdout", "dialog"])]
    out_dir: Option<PathBuf>,
    /// Write the document to stdout instead of a file.
    #[arg(long, default_value_t = false, conflicts_with = "dialog")]
    stdout: bool,
    /// Choose the destination in the native "Save as" dialog.
    #[arg(long, default_value_t = false)]
    dialog: bool,
    /// IANA time zone for the header stamps.
    #[arg(long, default_value = "US/Alaska")]
    timezone: String,
    /// Filename prefix.
    #[arg(long, default_value = "aktemp_viz_data")]
    prefix: String,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_stations(path: &Path) -> Result<Vec<Station>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stations from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("read stations from {}", path.display()))?
    };
    serde_json::from_str(&text).context("parse stations json")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ExportConfig::default()
        .with_time_zone_name(&cli.timezone)?
        .with_filename_prefix(cli.prefix.as_str());
    let stations = read_stations(&cli.stations)?;

    let mut target: Box<dyn Delivery> = if cli.stdout {
        Box::new(WriterDelivery::new(std::io::stdout().lock()))
    } else if cli.dialog {
        Box::new(DialogDelivery::new())
    } else {
        match cli.out_dir {
            Some(dir) => Box::new(DirectoryDelivery::new(dir)),
            None => Box::new(DirectoryDelivery::downloads()),
        }
    };

    let report = export(&stations, &cli.last_updated, &config, target.as_mut())?;

    match report.outcome {
        DeliveryOutcome::Saved(path) => eprintln!(
            "Saved {} stations and {} daily values to {}",
            report.station_rows,
            report.value_rows,
            path.display()
        ),
        DeliveryOutcome::Written => {}
        DeliveryOutcome::Cancelled => eprintln!("Export cancelled"),
        DeliveryOutcome::Failed(reason) => anyhow::bail!("could not save {}: {}", report.filename, reason),
    }
    Ok(())
}
