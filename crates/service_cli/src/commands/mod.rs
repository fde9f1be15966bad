//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; shared input loading
//! lives here.

pub mod check;
pub mod evaluate;
pub mod predict;
pub mod schedule;

use serde::Deserialize;

use notes_engine::evaluation::MarketHistory;
use notes_models::basket::UnderlyingPerformance;
use notes_models::product::ProductConfig;

use crate::{CliError, Result};

/// Loads and validates a product definition from a JSON file.
pub fn load_product(path: &str) -> Result<ProductConfig> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: ProductConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// One row of the observations CSV.
#[derive(Debug, Deserialize)]
struct ObservationRow {
    period_index: u32,
    underlying_id: String,
    price: f64,
}

/// Loads observed prices from a CSV file and converts them to
/// strike-relative performances keyed by period.
///
/// Expected columns: `period_index,underlying_id,price`. Every
/// `underlying_id` must match a configured underlying.
pub fn load_observations(path: &str, config: &ProductConfig) -> Result<MarketHistory> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut history = MarketHistory::new();
    let mut by_period: std::collections::BTreeMap<u32, Vec<UnderlyingPerformance>> =
        std::collections::BTreeMap::new();

    for row in reader.deserialize() {
        let row: ObservationRow = row?;
        let underlying = config
            .underlyings
            .iter()
            .find(|u| u.id == row.underlying_id)
            .ok_or_else(|| {
                CliError::InvalidArgument(format!(
                    "Unknown underlying in observations: {}",
                    row.underlying_id
                ))
            })?;
        by_period
            .entry(row.period_index)
            .or_default()
            .push(UnderlyingPerformance::from_price(underlying, row.price));
    }

    for (period_index, performances) in by_period {
        history.insert(period_index, performances);
    }

    Ok(history)
}

/// Parses repeated `ID=PRICE` arguments into live performances.
pub fn parse_live_prices(
    prices: &[String],
    config: &ProductConfig,
) -> Result<Vec<UnderlyingPerformance>> {
    if prices.is_empty() {
        return Err(CliError::InvalidArgument(
            "At least one --price ID=PRICE is required".to_string(),
        ));
    }

    let mut performances = Vec::with_capacity(prices.len());
    for entry in prices {
        let (id, price) = entry.split_once('=').ok_or_else(|| {
            CliError::InvalidArgument(format!("Expected ID=PRICE, got: {}", entry))
        })?;
        let price: f64 = price.trim().parse().map_err(|_| {
            CliError::InvalidArgument(format!("Invalid price in: {}", entry))
        })?;
        let underlying = config
            .underlyings
            .iter()
            .find(|u| u.id == id.trim())
            .ok_or_else(|| {
                CliError::InvalidArgument(format!("Unknown underlying: {}", id.trim()))
            })?;
        performances.push(UnderlyingPerformance::from_price(underlying, price));
    }
    Ok(performances)
}
