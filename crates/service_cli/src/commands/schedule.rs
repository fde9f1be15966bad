//! Schedule command implementation
//!
//! Generates and prints a note's observation schedule.

use tracing::info;

use notes_models::schedule::generate;

use super::load_product;
use crate::{CliError, Result};

/// Run the schedule command
pub fn run(product: &str, format: &str) -> Result<()> {
    info!("Generating schedule...");
    info!("  Product: {}", product);

    let config = load_product(product)?;
    let schedule = generate(&config)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        "table" => {
            println!("\n┌────────┬──────────────┬──────────────┬──────────┬──────────┬─────────┬───────┐");
            println!("│ Period │ Observation  │ Value date   │ Callable │ Autocall │ Barrier │ Final │");
            println!("├────────┼──────────────┼──────────────┼──────────┼──────────┼─────────┼───────┤");
            for period in schedule.iter() {
                println!(
                    "│ {:>6} │ {} │ {} │ {:>8} │ {:>8} │ {:>7} │ {:>5} │",
                    period.period_index(),
                    format!("{:>12}", period.observation_date().to_string()),
                    format!("{:>12}", period.value_date().to_string()),
                    if period.is_callable() { "yes" } else { "no" },
                    period
                        .autocall_level()
                        .map(|l| format!("{:.1}", l))
                        .unwrap_or_else(|| "-".to_string()),
                    period
                        .coupon_barrier()
                        .map(|b| format!("{:.1}", b))
                        .unwrap_or_else(|| "-".to_string()),
                    if period.is_final() { "yes" } else { "" },
                );
            }
            println!("└────────┴──────────────┴──────────────┴──────────┴──────────┴─────────┴───────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Schedule generated: {} periods", schedule.len());
    Ok(())
}
