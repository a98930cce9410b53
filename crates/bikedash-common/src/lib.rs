//! # Bikedash Common
//!
//! Shared types, errors, logging and utilities for the bike sharing dashboard.
//!
//! This crate provides the foundational types used across all other crates in
//! the workspace: the rental record row, the fixed bucket domains, the
//! workspace error type and the tracing setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{DashError, Result};
pub use logging::{init_logging, LoggingConfig, LoggingGuard};
pub use types::*;
pub use utils::*;
