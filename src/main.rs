use chrono::NaiveDate;
use clap::Parser;
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use parking_dash::export::{export_csv, export_json};
use parking_dash::filter::SpotFilter;
use parking_dash::resolve::spot_rows;
use parking_dash::source::{load_snapshot, JsonSnapshot};
use parking_dash::store::Store;
use parking_dash::ui::App;

#[derive(Parser, Debug)]
#[command(name = "parking-dash")]
#[command(about = "Parking Dash - browse hotels, parkings and spots with occupancy status")]
#[command(version)]
struct Args {
    /// Path to snapshot JSON file
    #[arg(required = true)]
    file: PathBuf,

    /// Export the filtered spots to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the filtered spots to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Only spots of this parking
    #[arg(long, value_name = "ID")]
    parking: Option<u64>,

    /// Only spots carrying this status
    #[arg(long, value_name = "ID")]
    status: Option<u64>,

    /// Only spots carrying this type
    #[arg(long = "type", value_name = "ID")]
    type_id: Option<u64>,

    /// Free-text search over spots
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Date used as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Log output; the terminal is taken by the dashboard
    #[arg(long, value_name = "FILE", default_value = "parking-dash.log")]
    log_file: PathBuf,
}

fn init_logger(path: &Path) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(File::create(path)?))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logger(&args.log_file)?;

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let snapshot = load_snapshot(&args.file)?;

    let mut store = Store::with_snapshot(snapshot);
    store.spot_filter = SpotFilter {
        parking_id: args.parking,
        status_id: args.status,
        type_id: args.type_id,
        free_text: args.search,
    };
    info!(%today, filter = ?store.spot_filter, "dashboard starting");

    if args.csv.is_some() || args.json.is_some() {
        let spots = store.visible_spots();
        let rows = spot_rows(spots.items(), store.parkings());

        if let Some(csv_path) = &args.csv {
            export_csv(&rows, csv_path)?;
            println!("Exported {} spots to CSV: {}", rows.len(), csv_path.display());
        }

        if let Some(json_path) = &args.json {
            export_json(&rows, json_path)?;
            println!("Exported {} spots to JSON: {}", rows.len(), json_path.display());
        }

        return Ok(());
    }

    let app = App::new(store, today).with_source(Box::new(JsonSnapshot::new(&args.file)));
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
