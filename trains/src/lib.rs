//! Trains network library.
//!
//! Models one-way routes of known distance between towns, generates every
//! trip through the network up to a stop bound, and answers queries about
//! trip distances, stop counts and shortest trips.

pub mod domain;
pub mod network;
pub mod report;
pub mod trips;

pub use domain::{LoadError, TownLabel, Trip};
pub use network::Network;
pub use trips::TripConfig;
