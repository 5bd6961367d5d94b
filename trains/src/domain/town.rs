//! Towns and the routes leaving them.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::{LoadError, TownLabel};

/// A single-hop, one-way link of known distance between two towns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Departure town
    pub origin: TownLabel,
    /// Arrival town
    pub destination: TownLabel,
    /// Distance in km
    pub distance: u32,
}

/// A node in the network.
///
/// A town is the departure point for one-way routes to other towns, with
/// at most one route to any given destination.
#[derive(Debug, Clone)]
pub struct Town {
    label: TownLabel,
    routes: BTreeMap<TownLabel, Route>,
}

impl Town {
    /// Create a town with no outgoing routes.
    pub fn new(label: TownLabel) -> Self {
        Self {
            label,
            routes: BTreeMap::new(),
        }
    }

    /// Returns the town's label.
    pub fn label(&self) -> TownLabel {
        self.label
    }

    /// Add a direct route to another town.
    ///
    /// `word` is the original directive, used in the error message if a
    /// route to `destination` is already known.
    pub fn add_route(
        &mut self,
        destination: TownLabel,
        distance: u32,
        word: &str,
    ) -> Result<&Route, LoadError> {
        match self.routes.entry(destination) {
            Entry::Occupied(_) => Err(LoadError::Duplicate(word.to_string())),
            Entry::Vacant(slot) => Ok(&*slot.insert(Route {
                origin: self.label,
                destination,
                distance,
            })),
        }
    }

    /// Returns the direct route to `destination`, if any.
    pub fn route_to(&self, destination: TownLabel) -> Option<&Route> {
        self.routes.get(&destination)
    }

    /// Iterate over outgoing routes, ordered by destination label.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Number of outgoing routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Diagnostic listing of the routes out of this town.
    pub fn dump(&self) -> String {
        let header = format!("Town {} routes out of town are..\n", self.label);
        let lines = self
            .routes
            .values()
            .map(|route| format!("\t{} {}\n", route.destination, route.distance));
        std::iter::once(header).chain(lines).collect()
    }
}
