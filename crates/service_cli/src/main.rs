//! Phoenix CLI - Command Line Operations for Structured-Note Evaluation
//!
//! This is the operational entry point for the phoenix-rust engine.
//!
//! # Commands
//!
//! - `phoenix schedule --product <file>` - Generate a note's observation schedule
//! - `phoenix evaluate --product <file> --observations <file>` - Replay observed history
//! - `phoenix predict --product <file> --price <ID=PRICE>...` - Classify the next observation
//! - `phoenix check` - Check configuration
//!
//! # Architecture
//!
//! As the service layer, this crate orchestrates the foundation, model, and
//! evaluation layers behind a unified command-line interface. Product
//! definitions arrive as JSON, observed levels as CSV; the engine itself
//! prescribes no wire format.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Phoenix structured-note engine CLI
#[derive(Parser)]
#[command(name = "phoenix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "phoenix.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a note's observation schedule
    Schedule {
        /// Path to the product definition (JSON)
        #[arg(short, long)]
        product: String,

        /// Output format (json, table)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Replay a note's observed history into outcomes
    Evaluate {
        /// Path to the product definition (JSON)
        #[arg(short, long)]
        product: String,

        /// Path to observed prices (CSV: period_index,underlying_id,price)
        #[arg(short, long)]
        observations: String,

        /// Output format (json, table)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Classify the likely outcome of the next observation
    Predict {
        /// Path to the product definition (JSON)
        #[arg(short, long)]
        product: String,

        /// Path to observed prices for occurred periods (CSV)
        #[arg(short, long)]
        observations: Option<String>,

        /// Live underlying price as ID=PRICE (repeatable)
        #[arg(long = "price", value_name = "ID=PRICE")]
        prices: Vec<String>,
    },

    /// Check system configuration
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let settings = config::CliConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Schedule { product, format } => {
            commands::schedule::run(&product, format.as_deref().unwrap_or(&settings.output_format))
        }
        Commands::Evaluate {
            product,
            observations,
            format,
        } => commands::evaluate::run(
            &product,
            &observations,
            format.as_deref().unwrap_or(&settings.output_format),
        ),
        Commands::Predict {
            product,
            observations,
            prices,
        } => commands::predict::run(&product, observations.as_deref(), &prices),
        Commands::Check => commands::check::run(&settings),
    }
}
