//! # Notes Models (L2: Business Objects)
//!
//! Product definitions and schedule construction for the phoenix-rust
//! structured-note engine.
//!
//! This crate provides:
//! - Product configuration with builder-pattern validation
//!   ([`product::ProductConfig`])
//! - Observation frequencies and per-period coupon/barrier terms
//! - The observation schedule value types and generator
//!   ([`schedule::generate`])
//! - Basket aggregation: worst-of / best-of / average and the Himalaya
//!   removal basket ([`basket`])
//!
//! ## Design Principles
//!
//! - **Immutable value records**: schedules and periods are plain values;
//!   "edits" construct a new, re-validated schedule
//! - **Validate at the boundary**: invalid configuration is rejected before
//!   any schedule or outcome work starts
//! - **Closed enums** for variant, frequency, and aggregation mode so
//!   handling is exhaustive at compile time

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod basket;
pub mod product;
pub mod schedule;
