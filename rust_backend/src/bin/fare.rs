//! Fare estimator command line.
//!
//! # Usage
//!
//! ```bash
//! # One-off estimate
//! fare predict --airline Indigo --source-city Delhi --departure-time Morning \
//!     --stops one --arrival-time Evening --destination-city Mumbai \
//!     --class Economy --departure-date 2026-11-02
//!
//! # Accepted values for every field
//! fare options
//!
//! # REST API
//! fare serve --port 8080
//! ```
//!
//! # Environment Variables
//!
//! - `FARE_MODEL`: Model path or URL (default: linear_model.json)
//! - `HOST`, `PORT`: Server bind address (default: 0.0.0.0:8080)
//! - `RUST_LOG`: Log filter (default: info for this crate)

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log directives used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "flight_fare=info,fare=info";

use flight_fare::config::FareConfig;
use flight_fare::core::domain::CategoryField;
use flight_fare::models::PredictionInput;
use flight_fare::services::FarePredictor;
use flight_fare::state;
use flight_fare::time::DayOffsetMode;

#[derive(Parser, Debug)]
#[command(name = "fare", version, about = "Flight fare estimates from a linear model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the fare of one flight
    Predict(PredictCommand),
    /// List the accepted values of every field
    Options,
    /// Serve the REST API
    #[cfg(feature = "http-server")]
    Serve(ServeCommand),
}

/// Settings shared by commands that load the model
#[derive(Args, Debug, Clone)]
struct ModelArgs {
    /// Path to fare.toml (default: searched in standard locations)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Model path or http(s) URL, overrides the configuration
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// How the departure date becomes a day offset
    #[arg(long, value_enum)]
    day_offset: Option<DayOffsetMode>,
}

impl ModelArgs {
    fn resolve(&self) -> Result<FareConfig> {
        let mut config = match &self.config {
            Some(path) => FareConfig::from_file(path)?,
            None => FareConfig::from_default_location()?,
        };
        config.apply_env()?;

        if let Some(model) = &self.model {
            config.model.source = model.clone();
        }
        if let Some(mode) = self.day_offset {
            config.prediction.day_offset = mode;
        }
        Ok(config)
    }
}

#[derive(Args, Debug)]
struct PredictCommand {
    #[command(flatten)]
    model: ModelArgs,

    #[arg(long)]
    airline: String,

    #[arg(long)]
    source_city: String,

    #[arg(long)]
    departure_time: String,

    #[arg(long)]
    stops: String,

    #[arg(long)]
    arrival_time: String,

    #[arg(long)]
    destination_city: String,

    #[arg(long = "class")]
    travel_class: String,

    /// Departure date, YYYY-MM-DD
    #[arg(long)]
    departure_date: String,

    /// Evaluate as of this RFC 3339 instant instead of now
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Print the estimate and features as JSON
    #[arg(long)]
    json: bool,
}

impl PredictCommand {
    async fn run(self) -> Result<()> {
        println!("{}", self.execute().await?);
        Ok(())
    }

    async fn execute(self) -> Result<String> {
        let config = self.model.resolve()?;
        let source = config.model_source()?;

        let loaded = state::init_model(&config.model_loader(), &source)
            .await
            .with_context(|| format!("Failed to load model from {}", source))?;

        let input = PredictionInput {
            airline: self.airline,
            source_city: self.source_city,
            departure_time: self.departure_time,
            stops: self.stops,
            arrival_time: self.arrival_time,
            destination_city: self.destination_city,
            travel_class: self.travel_class,
            departure_date: self.departure_date,
        };

        let predictor = FarePredictor::new(&loaded.model, config.prediction.day_offset);
        let estimate = predictor.estimate_at(&input, self.now.unwrap_or_else(Utc::now))?;

        if self.json {
            let body = serde_json::json!({
                "price": estimate.price,
                "display": estimate.to_string(),
                "features": estimate.features,
                "day_offset": predictor.mode(),
            });
            Ok(serde_json::to_string_pretty(&body)?)
        } else {
            Ok(format!("Your Flight Price: {}", estimate))
        }
    }
}

fn render_options() -> String {
    let mut lines = Vec::new();
    for field in CategoryField::ALL {
        lines.push(format!("{} (--{})", field.title(), field.form_name().replace('_', "-")));
        for option in field.options() {
            lines.push(format!(
                "  {:<14} {:<14} code {}",
                option.value, option.label, option.code
            ));
        }
    }
    lines.join("\n")
}

/// Filter from `RUST_LOG` directives, falling back to [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(feature = "http-server")]
#[derive(Args, Debug)]
struct ServeCommand {
    #[command(flatten)]
    model: ModelArgs,

    /// Bind host, overrides configuration and HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides configuration and PORT
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

#[cfg(feature = "http-server")]
impl ServeCommand {
    async fn run(self) -> Result<()> {
        use flight_fare::http::{create_router, AppState};
        use std::net::SocketAddr;
        use tracing::info;

        let mut config = self.model.resolve()?;
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        // A failed load is already logged; the server still starts and
        // answers predictions with 503 until restarted.
        let source = config.model_source()?;
        let _ = state::init_model(&config.model_loader(), &source).await;

        let app = create_router(AppState::global(config.prediction.day_offset));

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .context("Invalid bind address")?;
        info!(
            "Server listening on http://{} (day offset: {})",
            addr, config.prediction.day_offset
        );

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(cmd) => cmd.run().await?,
        Commands::Options => println!("{}", render_options()),
        #[cfg(feature = "http-server")]
        Commands::Serve(cmd) => cmd.run().await?,
    }

    Ok(())
}
