//! Read-only queries over a generated trip set.

use tracing::trace;

use super::index::TripSet;
use crate::domain::{TownLabel, Trip};

impl TripSet {
    /// Iterate over trips from `origin` to `destination`, in generation order.
    pub fn between(
        &self,
        origin: TownLabel,
        destination: TownLabel,
    ) -> impl Iterator<Item = &Trip> + '_ {
        self.iter().filter(move |t| t.connects(origin, destination))
    }

    /// Distance of the trip rendered as `path` (e.g. `A-B-C`).
    ///
    /// Returns `None` if no generated trip has that path.
    pub fn distance_of_trip(&self, path: &str) -> Option<u64> {
        let distance = self.get_by_path(path).map(Trip::distance);
        trace!(path, ?distance, "distance lookup");
        distance
    }

    /// Trips from `origin` to `destination` whose stop count lies in
    /// `min_stops..=max_stops`.
    pub fn trips_by_stops(
        &self,
        origin: TownLabel,
        destination: TownLabel,
        min_stops: usize,
        max_stops: usize,
    ) -> Vec<&Trip> {
        self.between(origin, destination)
            .filter(|t| (min_stops..=max_stops).contains(&t.stops()))
            .collect()
    }

    /// The trip from `origin` to `destination` with the smallest distance.
    ///
    /// Ties go to the trip generated first. Returns `None` if no trip
    /// connects the two towns.
    pub fn shortest_trip(&self, origin: TownLabel, destination: TownLabel) -> Option<&Trip> {
        self.between(origin, destination).min_by_key(|t| t.distance())
    }

    /// Trips from `origin` to `destination` with distance strictly below
    /// `max_distance`.
    pub fn trips_in_distance(
        &self,
        origin: TownLabel,
        destination: TownLabel,
        max_distance: u64,
    ) -> Vec<&Trip> {
        self.between(origin, destination)
            .filter(|t| t.distance() < max_distance)
            .collect()
    }
}
