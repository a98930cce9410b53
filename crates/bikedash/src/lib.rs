//! # Bikedash
//!
//! Browser dashboard for the hourly bike sharing dataset.
//!
//! This is the main binary crate: it owns the application state, the axum
//! router and the HTML page, and wires the data and graph crates together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod handlers;
pub mod page;
pub mod query;
pub mod router;

pub use app::*;
pub use error::*;
pub use query::*;
pub use router::*;
