//! Query requests and report views.
//!
//! `Query` names one of the four query kinds with its arguments;
//! `QueryAnswer` is its result, printable as a text report line or
//! serializable as JSON.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::domain::{TownLabel, Trip, write_report_line};
use crate::network::Network;

/// Text shown when a distance query has no matching trip.
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// First line of the text report.
pub const BANNER: &str = "'Trains' Main Program.";

/// Progress line printed before a route file is loaded.
pub fn loading_message(path: &Path) -> String {
    format!("loading {}..", path.display())
}

/// A trip in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripView {
    /// Rendered `A-B-C` path
    pub path: String,
    pub origin: TownLabel,
    pub destination: TownLabel,
    pub via: Vec<TownLabel>,
    /// Total distance in km
    pub distance: u64,
    pub stops: usize,
}

impl From<&Trip> for TripView {
    fn from(trip: &Trip) -> Self {
        Self {
            path: trip.path(),
            origin: trip.origin(),
            destination: trip.destination(),
            via: trip.via().to_vec(),
            distance: trip.distance(),
            stops: trip.stops(),
        }
    }
}

impl fmt::Display for TripView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report_line(f, &self.path, self.distance, self.stops)
    }
}

/// A query against a network's generated trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Distance of an exact `A-B-C` path
    Distance(String),
    /// Trips between two towns with a stop count in an inclusive range
    TripsByStops {
        from: TownLabel,
        to: TownLabel,
        min_stops: usize,
        max_stops: usize,
    },
    /// Shortest trip between two towns
    Shortest { from: TownLabel, to: TownLabel },
    /// Trips between two towns shorter than a distance
    TripsInDistance {
        from: TownLabel,
        to: TownLabel,
        max_distance: u64,
    },
}

impl Query {
    /// Run the query against `network`.
    pub fn answer(&self, network: &Network) -> QueryAnswer {
        match self {
            Query::Distance(path) => QueryAnswer::Distance {
                path: path.clone(),
                distance: network.distance_of_trip(path),
            },
            Query::TripsByStops {
                from,
                to,
                min_stops,
                max_stops,
            } => QueryAnswer::TripsByStops {
                from: *from,
                to: *to,
                min_stops: *min_stops,
                max_stops: *max_stops,
                trips: views(network.trips_by_stops(*from, *to, *min_stops, *max_stops)),
            },
            Query::Shortest { from, to } => QueryAnswer::Shortest {
                from: *from,
                to: *to,
                trip: network.shortest_trip(*from, *to).map(TripView::from),
            },
            Query::TripsInDistance {
                from,
                to,
                max_distance,
            } => QueryAnswer::TripsInDistance {
                from: *from,
                to: *to,
                max_distance: *max_distance,
                trips: views(network.trips_in_distance(*from, *to, *max_distance)),
            },
        }
    }
}

fn views(trips: Vec<&Trip>) -> Vec<TripView> {
    trips.into_iter().map(TripView::from).collect()
}

/// The result of a `Query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryAnswer {
    Distance {
        path: String,
        distance: Option<u64>,
    },
    TripsByStops {
        from: TownLabel,
        to: TownLabel,
        min_stops: usize,
        max_stops: usize,
        trips: Vec<TripView>,
    },
    Shortest {
        from: TownLabel,
        to: TownLabel,
        trip: Option<TripView>,
    },
    TripsInDistance {
        from: TownLabel,
        to: TownLabel,
        max_distance: u64,
        trips: Vec<TripView>,
    },
}

impl fmt::Display for QueryAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryAnswer::Distance { path, distance } => match distance {
                Some(d) => write!(f, "Distance of {path} is {d}"),
                None => write!(f, "Distance of {path} is {NO_SUCH_ROUTE}"),
            },
            QueryAnswer::TripsByStops {
                from,
                to,
                min_stops,
                max_stops,
                trips,
            } => {
                write!(
                    f,
                    "Routes from {from} to {to} with {min_stops} to {max_stops} stops.. {}",
                    trips.len()
                )?;
                write_trips(f, trips)
            }
            QueryAnswer::Shortest { from, to, trip } => match trip {
                Some(trip) => write!(
                    f,
                    "From {from} to {to} shortest route.. {} km\n\t{trip}",
                    trip.distance
                ),
                None => write!(f, "From {from} to {to} shortest route.. {NO_SUCH_ROUTE}"),
            },
            QueryAnswer::TripsInDistance {
                from,
                to,
                max_distance,
                trips,
            } => {
                write!(
                    f,
                    "Routes from {from} to {to} under distance {max_distance}km.. {}",
                    trips.len()
                )?;
                write_trips(f, trips)
            }
        }
    }
}

fn write_trips(f: &mut fmt::Formatter<'_>, trips: &[TripView]) -> fmt::Result {
    for trip in trips {
        write!(f, "\n\t{trip}")?;
    }
    Ok(())
}

/// The ten questions asked of the sample network.
pub fn standard_queries() -> Vec<Query> {
    let [a, b, c] = [b'A', b'B', b'C'].map(town);

    let mut queries: Vec<Query> = ["A-B-C", "A-D", "A-D-C", "A-E-B-C-D", "A-E-D"]
        .into_iter()
        .map(|path| Query::Distance(path.to_string()))
        .collect();

    queries.extend([
        Query::TripsByStops {
            from: c,
            to: c,
            min_stops: 0,
            max_stops: 3,
        },
        Query::TripsByStops {
            from: a,
            to: c,
            min_stops: 4,
            max_stops: 4,
        },
        Query::Shortest { from: a, to: c },
        Query::Shortest { from: b, to: b },
        Query::TripsInDistance {
            from: c,
            to: c,
            max_distance: 30,
        },
    ]);

    queries
}

fn town(b: u8) -> TownLabel {
    TownLabel::from_byte(b).expect("literal town labels are uppercase letters")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::TripConfig;

    fn sample_network() -> Network {
        let mut n = Network::new();
        n.load_str("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7")
            .unwrap();
        n.generate_trips(&TripConfig::default());
        n
    }

    #[test]
    fn loading_message_names_file() {
        assert_eq!(
            loading_message(Path::new("tests/data/graph1")),
            "loading tests/data/graph1.."
        );
        assert_eq!(BANNER, "'Trains' Main Program.");
    }

    #[test]
    fn ten_standard_queries() {
        let queries = standard_queries();
        assert_eq!(queries.len(), 10);
        assert_eq!(queries[0], Query::Distance("A-B-C".to_string()));
        assert_eq!(
            queries[8],
            Query::Shortest {
                from: town(b'B'),
                to: town(b'B')
            }
        );
    }

    #[test]
    fn standard_answers_on_sample() {
        let n = sample_network();
        let answers: Vec<_> = standard_queries().iter().map(|q| q.answer(&n)).collect();

        let text: Vec<_> = answers.iter().map(|a| a.to_string()).collect();
        assert_eq!(text[0], "Distance of A-B-C is 9");
        assert_eq!(text[4], "Distance of A-E-D is NO SUCH ROUTE");
        assert!(text[5].starts_with("Routes from C to C with 0 to 3 stops.. 2\n\t"));
        assert!(text[7].starts_with("From A to C shortest route.. 9 km\n\tA-B-C "));
        assert!(text[9].starts_with("Routes from C to C under distance 30km.. 7"));
        assert_eq!(text[9].lines().count(), 8);
    }

    #[test]
    fn shortest_without_trip_renders_no_such_route() {
        let n = sample_network();
        let answer = Query::Shortest {
            from: town(b'B'),
            to: town(b'A'),
        }
        .answer(&n);

        assert_eq!(answer.to_string(), "From B to A shortest route.. NO SUCH ROUTE");
    }

    #[test]
    fn answers_serialize_with_query_tag() {
        let n = sample_network();
        let answer = Query::Distance("A-E-D".to_string()).answer(&n);
        assert_eq!(
            serde_json::to_value(&answer).unwrap(),
            serde_json::json!({"query": "distance", "path": "A-E-D", "distance": null})
        );

        let answer = Query::Shortest {
            from: town(b'A'),
            to: town(b'C'),
        }
        .answer(&n);
        let value = serde_json::to_value(&answer).unwrap();
        assert_eq!(value["query"], "shortest");
        assert_eq!(value["trip"]["path"], "A-B-C");
        assert_eq!(value["trip"]["via"], serde_json::json!(["B"]));
        assert_eq!(value["trip"]["stops"], 2);
    }

    #[test]
    fn trip_view_matches_trip_report_line() {
        let n = sample_network();
        let trip = n.shortest_trip(town(b'A'), town(b'C')).unwrap();
        assert_eq!(TripView::from(trip).to_string(), trip.to_string());
    }

    #[test]
    fn trip_view_report_line_columns() {
        let n = sample_network();
        let trip = n
            .trips()
            .get_by_path("A-E-B-C-D")
            .map(TripView::from)
            .unwrap();
        assert_eq!(
            trip.to_string(),
            "A-E-B-C-D              22 km   4 stops"
        );
    }
}
