//! Trip generation and queries.
//!
//! Trips are materialized once, by exhaustive depth-first search from every
//! town, and every query afterwards is a scan or lookup over that set.

mod config;
mod generate;
mod index;
mod query;


pub use config::{ALLOW_CYCLES_KEY, ConfigError, MAX_STOPS_KEY, TripConfig};
pub use generate::generate_trips;
pub use index::TripSet;
