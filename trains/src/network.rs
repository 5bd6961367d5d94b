//! The trains network.
//!
//! A `Network` owns the towns (and through them the routes) loaded from
//! route directives, and, once generated, the full set of trips over them.
//! The intended sequence is load, then generate, then query: loading more
//! routes after generation does not refresh the trips.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::domain::{LoadError, RouteDirective, Town, TownLabel, Trip};
use crate::trips::{TripConfig, TripSet, generate_trips};

/// Name used in I/O errors for sources without a path.
const UNNAMED_SOURCE: &str = "<input>";

/// A network of towns, routes and generated trips.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Towns keyed by label.
    towns: BTreeMap<TownLabel, Town>,

    /// Trips from the last generation pass.
    trips: TripSet,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    // Loading

    /// Load route directives from a file.
    ///
    /// Returns the number of routes added. On error, routes from lines
    /// before the failing one stay loaded.
    pub fn load_graph(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_lines(BufReader::new(file), path)
    }

    /// Load route directives from any buffered reader.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        self.load_lines(reader, Path::new(UNNAMED_SOURCE))
    }

    /// Load route directives from a string.
    pub fn load_str(&mut self, input: &str) -> Result<usize, LoadError> {
        self.load_lines(input.as_bytes(), Path::new(UNNAMED_SOURCE))
    }

    fn load_lines<R: BufRead>(&mut self, reader: R, source: &Path) -> Result<usize, LoadError> {
        if !self.trips.is_empty() {
            warn!(
                source = %source.display(),
                trips = self.trips.len(),
                "loading routes after trip generation; trips are stale until regenerated"
            );
        }

        let mut added = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source_err| LoadError::Io {
                path: source.to_path_buf(),
                source: source_err,
            })?;
            let line_no = idx + 1;

            added += self
                .apply_line(&line)
                .map_err(|e| e.at_line(line_no, line.trim_end()))?;
        }

        info!(
            source = %source.display(),
            routes = added,
            towns = self.towns.len(),
            "loaded route directives"
        );
        Ok(added)
    }

    /// Apply every directive on one line. Returns the number of routes added.
    fn apply_line(&mut self, line: &str) -> Result<usize, LoadError> {
        let mut added = 0;
        for word in split_words(line) {
            self.apply_directive(word)?;
            added += 1;
        }
        Ok(added)
    }

    /// Validate and apply a single directive word.
    fn apply_directive(&mut self, word: &str) -> Result<(), LoadError> {
        let directive = RouteDirective::parse(word)?;
        if directive.is_self_loop() {
            return Err(LoadError::SelfLoop(word.to_string()));
        }

        self.add_town(directive.destination);
        self.add_town(directive.origin)
            .add_route(directive.destination, directive.distance, word)?;
        Ok(())
    }

    /// Returns the town with `label`, creating it if it does not exist.
    pub fn add_town(&mut self, label: TownLabel) -> &mut Town {
        self.towns.entry(label).or_insert_with(|| Town::new(label))
    }

    // Topology

    /// Number of loaded towns.
    pub fn towns_count(&self) -> usize {
        self.towns.len()
    }

    /// Number of loaded routes.
    pub fn routes_count(&self) -> usize {
        self.towns.values().map(Town::route_count).sum()
    }

    /// Returns true if a town with `label` was loaded.
    pub fn contains_town(&self, label: TownLabel) -> bool {
        self.towns.contains_key(&label)
    }

    /// Returns the town with `label`, if loaded.
    pub fn town(&self, label: TownLabel) -> Option<&Town> {
        self.towns.get(&label)
    }

    /// Iterate over towns in label order.
    pub fn towns(&self) -> impl Iterator<Item = &Town> {
        self.towns.values()
    }

    /// Diagnostic listing of every town and its routes.
    pub fn dump(&self) -> String {
        self.towns
            .values()
            .map(|town| format!("TOWN {}\n{}", town.label(), town.dump()))
            .collect()
    }

    // Trips

    /// Generate every trip under `config` and rebuild the path index.
    ///
    /// Replaces any trips from a previous pass.
    pub fn generate_trips(&mut self, config: &TripConfig) -> usize {
        let trips = generate_trips(&self.towns, config);
        self.trips = TripSet::new(trips);
        info!(
            trips = self.trips.len(),
            paths = self.trips.distinct_paths(),
            "generated trips"
        );
        self.trips.len()
    }

    /// Number of generated trips.
    pub fn trips_count(&self) -> usize {
        self.trips.len()
    }

    /// The generated trips.
    pub fn trips(&self) -> &TripSet {
        &self.trips
    }

    /// Full report of every generated trip, one per line.
    pub fn all_trips(&self) -> String {
        let mut output = format!("Total {} trips\n", self.trips.len());
        for trip in &self.trips {
            output.push_str(&format!("{trip}\n"));
        }
        output
    }

    // Queries

    /// Distance of the trip rendered as `path`, or `None` for no such route.
    pub fn distance_of_trip(&self, path: &str) -> Option<u64> {
        self.trips.distance_of_trip(path)
    }

    /// Trips between two towns with a stop count in `min_stops..=max_stops`.
    pub fn trips_by_stops(
        &self,
        origin: TownLabel,
        destination: TownLabel,
        min_stops: usize,
        max_stops: usize,
    ) -> Vec<&Trip> {
        self.trips
            .trips_by_stops(origin, destination, min_stops, max_stops)
    }

    /// Shortest trip between two towns, if any.
    pub fn shortest_trip(&self, origin: TownLabel, destination: TownLabel) -> Option<&Trip> {
        self.trips.shortest_trip(origin, destination)
    }

    /// Trips between two towns with distance below `max_distance`.
    pub fn trips_in_distance(
        &self,
        origin: TownLabel,
        destination: TownLabel,
        max_distance: u64,
    ) -> Vec<&Trip> {
        self.trips
            .trips_in_distance(origin, destination, max_distance)
    }
}

/// Split a line into directive words on commas, ignoring whitespace
/// around each comma and at the end of the line.
///
/// Whitespace at the start of the line is kept, so it fails to parse as
/// part of the first word. A blank line yields one empty word.
fn split_words(line: &str) -> impl Iterator<Item = &str> {
    line.trim_end()
        .split(',')
        .enumerate()
        .map(|(i, word)| if i == 0 { word.trim_end() } else { word.trim() })
}
