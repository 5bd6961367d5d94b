//! Trip type.
//!
//! A `Trip` is any journey on the network of one or more stops: the start
//! and end towns, the ordered towns in between, and the derived distance
//! and stop count.

use std::fmt;

use super::TownLabel;

/// A concrete walk through the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    origin: TownLabel,
    destination: TownLabel,
    via: Vec<TownLabel>,
    distance: u64,
    stops: usize,
}

impl Trip {
    /// Creates a trip.
    ///
    /// The stop count is derived from the via-list: one more than the
    /// number of intermediate towns.
    pub fn new(
        origin: TownLabel,
        destination: TownLabel,
        via: Vec<TownLabel>,
        distance: u64,
    ) -> Self {
        let stops = via.len() + 1;
        Self {
            origin,
            destination,
            via,
            distance,
            stops,
        }
    }

    /// Returns the departure town.
    pub fn origin(&self) -> TownLabel {
        self.origin
    }

    /// Returns the arrival town.
    pub fn destination(&self) -> TownLabel {
        self.destination
    }

    /// Returns the towns strictly between origin and destination.
    pub fn via(&self) -> &[TownLabel] {
        &self.via
    }

    /// Returns the total distance.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Returns the number of routes traversed.
    pub fn stops(&self) -> usize {
        self.stops
    }

    /// Returns true if this trip runs from `origin` to `destination`.
    pub fn connects(&self, origin: TownLabel, destination: TownLabel) -> bool {
        self.origin == origin && self.destination == destination
    }

    /// Iterate over every town on the trip, origin first.
    pub fn towns(&self) -> impl Iterator<Item = TownLabel> + '_ {
        std::iter::once(self.origin)
            .chain(self.via.iter().copied())
            .chain(std::iter::once(self.destination))
    }

    /// Renders the trip as an `A-B-C` style path.
    ///
    /// This is also the key used for exact-path lookup.
    pub fn path(&self) -> String {
        let mut path = String::with_capacity(self.stops * 2 + 1);
        for (i, town) in self.towns().enumerate() {
            if i > 0 {
                path.push('-');
            }
            path.push(town.as_char());
        }
        path
    }
}

/// Write a trip report line: path, distance and stop count in
/// fixed-width columns.
pub(crate) fn write_report_line(
    f: &mut fmt::Formatter<'_>,
    path: &str,
    distance: u64,
    stops: usize,
) -> fmt::Result {
    write!(f, "{path:20} {distance:4} km {stops:3} stops")
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report_line(f, &self.path(), self.distance, self.stops)
    }
}
