//! Predict command implementation
//!
//! Classifies the likely outcome of the next observation from live prices.

use tracing::info;

use notes_engine::evaluation::evaluate;
use notes_engine::prediction::predict_next;
use notes_engine::risk::RiskZone;
use notes_models::basket::aggregate;
use notes_models::schedule::generate;

use super::{load_observations, load_product, parse_live_prices};
use crate::Result;

/// Run the predict command
pub fn run(product: &str, observations: Option<&str>, prices: &[String]) -> Result<()> {
    info!("Predicting next observation...");
    info!("  Product: {}", product);

    let config = load_product(product)?;
    let schedule = generate(&config)?;

    let outcomes = match observations {
        Some(path) => {
            let history = load_observations(path, &config)?;
            evaluate(&config, &schedule, &history)?.outcomes
        }
        None => Vec::new(),
    };

    let live_performances = parse_live_prices(prices, &config)?;
    let live_level = aggregate(&live_performances, config.basket_mode)?;
    info!("  Live basket level: {:.2}%", live_level);

    match predict_next(&config, &schedule, &outcomes, live_level) {
        Some(prediction) => {
            let zone = RiskZone::from_distance(prediction.distance_to_barrier);
            println!("Next observation: period {}", prediction.period_index);
            println!("Live basket level: {:.2}%", prediction.current_basket_level);
            println!("Prediction: {}", prediction.outcome);
            println!(
                "Distance to barrier: {:+.2} ({})",
                prediction.distance_to_barrier, zone
            );
        }
        None => {
            println!("Nothing to predict: the schedule is fully resolved or carries no barriers.");
        }
    }

    Ok(())
}
