//! Materialized trip collection with an exact-path index.
//!
//! The index maps each rendered `A-B-C` path to a position in the trip
//! list. It is derived from the list and always rebuilt in full; when two
//! trips render to the same path, the later one wins.

use std::collections::HashMap;

use crate::domain::Trip;

/// Generated trips in generation order, plus a lookup by rendered path.
#[derive(Debug, Clone, Default)]
pub struct TripSet {
    /// All trips, in the order they were generated.
    trips: Vec<Trip>,

    /// Map from rendered path to index into `trips`.
    by_path: HashMap<String, usize>,
}

impl TripSet {
    /// Build a trip set and its path index.
    pub fn new(trips: Vec<Trip>) -> Self {
        let by_path = build_path_index(&trips);
        Self { trips, by_path }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns true if no trips have been generated.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Iterate over trips in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Look up a trip by its rendered path.
    pub fn get_by_path(&self, path: &str) -> Option<&Trip> {
        self.by_path.get(path).map(|&idx| &self.trips[idx])
    }

    /// Number of distinct rendered paths.
    pub fn distinct_paths(&self) -> usize {
        self.by_path.len()
    }
}

impl<'a> IntoIterator for &'a TripSet {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

/// Index trips by path. Later entries overwrite earlier ones.
fn build_path_index(trips: &[Trip]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(trips.len());
    for (idx, trip) in trips.iter().enumerate() {
        index.insert(trip.path(), idx);
    }
    index
}
