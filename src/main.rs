//! CLI entry point for the AQI report tool.
//!
//! Provides subcommands for building derived-view reports from historical
//! readings CSVs and for submitting single readings to the remote scoring
//! service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use aqi_report::{
    output::{Report, print_json, print_pretty, write_means_csv, write_report},
    scoring::{AqiServiceClient, PollutantReading},
    state::{AppState, CalculationState, run_calculation},
    stats::pollutant_means,
};

#[derive(Parser)]
#[command(name = "aqi_report")]
#[command(about = "Builds AQI dashboard data from pollutant CSVs and scores readings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a historical readings CSV and write the derived-view report
    Report {
        /// Path to the readings CSV (header row required)
        #[arg(value_name = "CSV_FILE")]
        input: String,

        /// JSON report file to write
        #[arg(short, long, default_value = "report.json")]
        output: String,

        /// Optional CSV export of the per-pollutant means
        #[arg(long)]
        means_csv: Option<String>,
    },
    /// Submit one reading to the scoring service and print the result
    Calc {
        /// PM2.5 concentration (empty or non-numeric coerces to 0)
        #[arg(long, default_value = "")]
        pm25: String,

        /// PM10 concentration
        #[arg(long, default_value = "")]
        pm10: String,

        /// SO2 concentration
        #[arg(long, default_value = "")]
        so2: String,

        /// NO2 concentration
        #[arg(long, default_value = "")]
        no2: String,

        /// CO concentration
        #[arg(long, default_value = "")]
        co: String,

        /// O3 concentration
        #[arg(long, default_value = "")]
        o3: String,

        /// Scoring service base URL (falls back to AQI_SERVICE_URL)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/aqi_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("aqi_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            output,
            means_csv,
        } => report(&input, &output, means_csv.as_deref()),
        Commands::Calc {
            pm25,
            pm10,
            so2,
            no2,
            co,
            o3,
            endpoint,
        } => {
            let reading = PollutantReading::from_fields(&pm25, &pm10, &so2, &no2, &co, &o3);
            calc(&reading, endpoint).await
        }
    }
}

/// Parses the CSV, derives the views, and writes the report files.
#[tracing::instrument(skip(means_csv), fields(input, output))]
fn report(input: &str, output: &str, means_csv: Option<&str>) -> Result<()> {
    let mut state = AppState::new();
    if let Err(e) = state.load_dataset_file(input) {
        error!(path = input, error = %e, "Dataset rejected");
        return Ok(());
    }

    let (Some(rows), Some(views)) = (state.dataset(), state.views()) else {
        return Ok(());
    };

    info!(
        rows = rows.len(),
        columns = rows.header().len(),
        has_aqi_series = views.aqi_line.is_some(),
        "Dataset parsed"
    );
    print_pretty(views);

    write_report(output, &Report::new(rows.len(), views.clone()))?;

    if let Some(path) = means_csv {
        write_means_csv(path, &pollutant_means(rows))?;
    }

    Ok(())
}

/// Drives one submission through the calculation lifecycle.
#[tracing::instrument(skip(reading, endpoint))]
async fn calc(reading: &PollutantReading, endpoint: Option<String>) -> Result<()> {
    let endpoint = match endpoint.or_else(|| std::env::var("AQI_SERVICE_URL").ok()) {
        Some(url) => url,
        None => {
            error!("No scoring endpoint configured: pass --endpoint or set AQI_SERVICE_URL");
            return Ok(());
        }
    };

    let client = AqiServiceClient::new(endpoint)?;
    let mut state = AppState::new();

    run_calculation(&mut state, &client, reading).await;

    match state.calculation() {
        CalculationState::Succeeded(result) => {
            info!(aqi = result.aqi, category = %result.category, "Calculation succeeded");
            print_json(result)?;
        }
        CalculationState::Failed => {
            error!("Calculation failed; no result retained");
        }
        _ => {}
    }

    Ok(())
}
