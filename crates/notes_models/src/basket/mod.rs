//! Basket aggregation: reducing underlying performances to one level.
//!
//! This module provides:
//! - [`BasketMode`] and [`aggregate`]: worst-of / best-of / average
//!   reduction of a performance set
//! - [`UnderlyingPerformance`]: one member's strike-relative performance
//! - [`HimalayaBasket`]: the stateful best-performer removal basket
//!
//! # Examples
//!
//! ```
//! use notes_models::basket::{aggregate, BasketMode, UnderlyingPerformance};
//!
//! let performances = vec![
//!     UnderlyingPerformance::new("A", 92.0),
//!     UnderlyingPerformance::new("B", 104.5),
//!     UnderlyingPerformance::new("C", 88.0),
//! ];
//!
//! assert_eq!(aggregate(&performances, BasketMode::WorstOf).unwrap(), 88.0);
//! assert_eq!(aggregate(&performances, BasketMode::BestOf).unwrap(), 104.5);
//! ```

mod error;
mod himalaya;
mod mode;
mod performance;

pub use error::BasketError;
pub use himalaya::{HimalayaBasket, LockedPerformance};
pub use mode::{aggregate, BasketMode};
pub use performance::UnderlyingPerformance;
