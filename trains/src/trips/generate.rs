//! Exhaustive trip generation.
//!
//! From every town, a depth-first exploration follows each outgoing route
//! and records a trip for every route traversed, so every prefix of a walk
//! is itself a trip. The number of trips grows exponentially with the
//! branching factor and the stop bound; `TripConfig::max_stops` is the only
//! limit on cost.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::config::TripConfig;
use crate::domain::{Town, TownLabel, Trip};

/// Generate every trip reachable from every town under `config`.
///
/// Towns are explored in label order and routes in destination order, so
/// the output order is stable for a given network.
pub fn generate_trips(towns: &BTreeMap<TownLabel, Town>, config: &TripConfig) -> Vec<Trip> {
    let generator = TripGenerator { towns, config };
    let mut trips = Vec::new();

    for &origin in towns.keys() {
        let before = trips.len();
        generator.explore(origin, origin, &[], 0, &mut trips);
        trace!(
            origin = %origin,
            trips = trips.len() - before,
            "explored trips from town"
        );
    }

    debug!(
        towns = towns.len(),
        trips = trips.len(),
        allow_cycles = config.allow_cycles,
        max_stops = config.max_stops,
        "trip generation complete"
    );

    trips
}

struct TripGenerator<'a> {
    towns: &'a BTreeMap<TownLabel, Town>,
    config: &'a TripConfig,
}

impl TripGenerator<'_> {
    /// Extend a walk that started at `origin` and has reached `at` through
    /// `via`, having covered `distance_so_far`.
    ///
    /// `via` is owned by the calling branch; each onward branch gets its own
    /// copy with the next town appended.
    fn explore(
        &self,
        origin: TownLabel,
        at: TownLabel,
        via: &[TownLabel],
        distance_so_far: u64,
        trips: &mut Vec<Trip>,
    ) {
        let allow_cycles = self.config.allow_cycles;
        let stops_so_far = via.len();

        if allow_cycles && stops_so_far > self.config.max_stops {
            return;
        }

        let Some(town) = self.towns.get(&at) else {
            return;
        };

        for route in town.routes() {
            let to = route.destination;
            if !allow_cycles && via.contains(&to) {
                continue;
            }

            let distance = distance_so_far + u64::from(route.distance);
            trips.push(Trip::new(origin, to, via.to_vec(), distance));

            // Without cycles a walk ends once it is back home
            if !allow_cycles && to == origin {
                continue;
            }

            let mut via_next = Vec::with_capacity(via.len() + 1);
            via_next.extend_from_slice(via);
            via_next.push(to);
            self.explore(origin, to, &via_next, distance, trips);
        }
    }
}
