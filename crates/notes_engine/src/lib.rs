//! # Notes Engine (L3: Evaluation)
//!
//! Outcome evaluation for the phoenix-rust structured-note engine.
//!
//! This crate provides:
//! - [`evaluation`]: the per-period outcome evaluator — autocall, coupon,
//!   and coupon-memory rules folded over a schedule in strict period order
//! - [`prediction`]: forward-looking classification of the next upcoming
//!   observation from a live basket level
//! - [`risk`]: the three-zone distance-to-barrier classifier
//! - [`portfolio`]: Rayon-parallel evaluation across independent products
//!
//! ## Design Principles
//!
//! - **Pure functions over explicit snapshots**: evaluation consumes a
//!   config, a schedule, and observed market levels, and returns values —
//!   re-running a refresh is trivially idempotent
//! - **Explicit state machine**: `Active` → `Called` | `Matured` with
//!   absorbing terminal states; out-of-order evaluation fails loudly
//! - **Outcomes are never fabricated**: a period without market data stays
//!   unresolved, visibly distinct from a resolved "no event"

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod evaluation;
pub mod portfolio;
pub mod prediction;
pub mod risk;
