//! Evaluate command implementation
//!
//! Replays a note's observed history into per-period outcomes.

use tracing::info;

use notes_engine::evaluation::evaluate;
use notes_models::schedule::generate;

use super::{load_observations, load_product};
use crate::{CliError, Result};

/// Run the evaluate command
pub fn run(product: &str, observations: &str, format: &str) -> Result<()> {
    info!("Evaluating observed history...");
    info!("  Product: {}", product);
    info!("  Observations: {}", observations);

    let config = load_product(product)?;
    let schedule = generate(&config)?;
    let history = load_observations(observations, &config)?;
    let report = evaluate(&config, &schedule, &history)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            println!("\n┌────────┬──────────┬────────┬─────────┬───────────┐");
            println!("│ Period │ Basket   │ Called │ Coupon  │ To memory │");
            println!("├────────┼──────────┼────────┼─────────┼───────────┤");
            for outcome in &report.outcomes {
                println!(
                    "│ {:>6} │ {:>7.2}% │ {:>6} │ {:>7.4} │ {:>9.4} │",
                    outcome.period_index,
                    outcome.basket_level,
                    if outcome.product_called { "yes" } else { "no" },
                    outcome.coupon_paid,
                    outcome.coupon_added_to_memory,
                );
            }
            println!("└────────┴──────────┴────────┴─────────┴───────────┘");
            println!("Status: {}", report.status);
            println!("Coupons paid: {:.4}", report.total_coupons_paid());
            if !report.memory.is_empty() {
                println!("Memory carried: {:.4}", report.memory.accumulated());
            }
            let unresolved = report.unresolved_periods();
            if !unresolved.is_empty() {
                println!("Unresolved periods: {:?}", unresolved);
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Evaluation complete: {}", report.status);
    Ok(())
}
