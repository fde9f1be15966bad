//! Error types for the Phoenix CLI.

use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Product definition parse error
    #[error("Product definition error: {0}")]
    Json(#[from] serde_json::Error),

    /// Observation file parse error
    #[error("Observation file error: {0}")]
    Csv(#[from] csv::Error),

    /// CLI configuration error
    #[error("Configuration error: {0}")]
    Settings(#[from] crate::config::ConfigError),

    /// Invalid product configuration
    #[error("Product configuration error: {0}")]
    Product(#[from] notes_models::product::ConfigError),

    /// Schedule generation error
    #[error("Schedule error: {0}")]
    Schedule(#[from] notes_models::schedule::ScheduleError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] notes_engine::evaluation::EvaluationError),

    /// Basket aggregation error
    #[error("Basket error: {0}")]
    Basket(#[from] notes_models::basket::BasketError),
}
