//! Domain types for the trains network.
//!
//! This module contains the core domain model: town labels, towns and
//! their routes, route directives and trips. Labels and directives enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod directive;
mod error;
mod label;
mod town;
mod trip;

pub use directive::RouteDirective;
pub use error::LoadError;
pub use label::{InvalidLabel, TownLabel};
pub use town::{Route, Town};
pub use trip::Trip;
pub(crate) use trip::write_report_line;
