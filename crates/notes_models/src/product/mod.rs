//! Product configuration for structured notes.
//!
//! This module provides:
//! - [`ProductConfig`]: the immutable input to schedule generation and
//!   outcome evaluation, with a [`ProductConfigBuilder`] for ergonomic
//!   construction
//! - [`TemplateVariant`]: standard autocallable vs Himalaya removal basket
//! - [`CouponSchedule`] / [`BarrierSchedule`]: flat or per-period terms
//! - [`Underlying`]: a basket member with its strike and optional weight

mod config;
mod error;
mod terms;
mod underlying;

pub use config::{HimalayaLockPolicy, ProductConfig, ProductConfigBuilder, TemplateVariant};
pub use error::ConfigError;
pub use terms::{BarrierSchedule, CouponSchedule};
pub use underlying::Underlying;
