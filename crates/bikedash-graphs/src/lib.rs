//! # Bikedash Graphs
//!
//! Chart rendering for the bike sharing dashboard.
//!
//! Every chart is drawn with plotters into an SVG string that the page embeds
//! inline. Renderers are total over empty selections: no rows means an empty
//! chart, not an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod highlight;
pub mod manager;
pub mod traits;
pub mod types;
pub mod utils;

pub mod daily_rentals;
pub mod rentals_by_hour;
pub mod rentals_by_season;
pub mod rentals_by_weekday;

pub use daily_rentals::*;
pub use highlight::*;
pub use manager::*;
pub use rentals_by_hour::*;
pub use rentals_by_season::*;
pub use rentals_by_weekday::*;
pub use traits::*;
pub use types::*;
