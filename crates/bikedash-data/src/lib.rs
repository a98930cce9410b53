//! # Bikedash Data
//!
//! Loads the hourly rental dataset, filters it by date range and computes the
//! summary tables the dashboard plots.
//!
//! The pipeline per render pass is `Dataset::filter` followed by
//! [`DashboardData::compute`], which runs the four aggregators.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod dataset;
pub mod loader;

pub use aggregator::*;
pub use dataset::*;
pub use loader::*;
