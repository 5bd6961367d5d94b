//! Traversal configuration for trip generation.

/// Environment key for the cycle switch.
pub const ALLOW_CYCLES_KEY: &str = "TRAINS_ALLOW_CYCLES";

/// Environment key for the stop bound.
pub const MAX_STOPS_KEY: &str = "TRAINS_MAX_STOPS";

/// Error from reading a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Value is not a recognised boolean
    #[error("{key}: expected true/false, got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    /// Value is not a non-negative integer
    #[error("{key}: expected a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Configuration parameters for trip generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripConfig {
    /// Allow trips that revisit towns, including their own origin.
    pub allow_cycles: bool,

    /// Recursion bound when cycles are allowed.
    /// Exploration stops once a trip has more than this many stops, so the
    /// longest generated trips have `max_stops + 1` stops.
    /// Ignored when cycles are disallowed.
    pub max_stops: usize,
}

impl TripConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(allow_cycles: bool, max_stops: usize) -> Self {
        Self {
            allow_cycles,
            max_stops,
        }
    }

    /// Returns a copy with the cycle switch set.
    pub fn with_cycles(mut self, allow_cycles: bool) -> Self {
        self.allow_cycles = allow_cycles;
        self
    }

    /// Returns a copy with the stop bound set.
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Build a configuration from key lookups, falling back to defaults
    /// for missing keys.
    ///
    /// ```
    /// use trains::trips::TripConfig;
    ///
    /// let config = TripConfig::from_lookup(|key| match key {
    ///     "TRAINS_MAX_STOPS" => Some("4".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.max_stops, 4);
    /// assert!(config.allow_cycles);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ALLOW_CYCLES_KEY) {
            config.allow_cycles = parse_bool(ALLOW_CYCLES_KEY, &value)?;
        }

        if let Some(value) = lookup(MAX_STOPS_KEY) {
            config.max_stops = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                key: MAX_STOPS_KEY,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            allow_cycles: true,
            max_stops: 10,
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = TripConfig::default();

        assert!(config.allow_cycles);
        assert_eq!(config.max_stops, 10);
    }

    #[test]
    fn custom_config() {
        let config = TripConfig::new(false, 3);

        assert!(!config.allow_cycles);
        assert_eq!(config.max_stops, 3);
    }

    #[test]
    fn builder_methods() {
        let config = TripConfig::default().with_cycles(false).with_max_stops(2);
        assert_eq!(config, TripConfig::new(false, 2));
    }

    #[test]
    fn lookup_with_no_keys_gives_default() {
        let config = TripConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TripConfig::default());
    }

    #[test]
    fn lookup_reads_both_keys() {
        let config = TripConfig::from_lookup(lookup_from(&[
            (ALLOW_CYCLES_KEY, "no"),
            (MAX_STOPS_KEY, " 6 "),
        ]))
        .unwrap();

        assert_eq!(config, TripConfig::new(false, 6));
    }

    #[test]
    fn lookup_accepts_boolean_spellings() {
        for (value, expected) in [("1", true), ("TRUE", true), ("off", false), ("0", false)] {
            let config =
                TripConfig::from_lookup(lookup_from(&[(ALLOW_CYCLES_KEY, value)])).unwrap();
            assert_eq!(config.allow_cycles, expected, "{value}");
        }
    }

    #[test]
    fn lookup_rejects_bad_bool() {
        let err = TripConfig::from_lookup(lookup_from(&[(ALLOW_CYCLES_KEY, "maybe")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "TRAINS_ALLOW_CYCLES: expected true/false, got \"maybe\""
        );
    }

    #[test]
    fn lookup_rejects_bad_number() {
        let err =
            TripConfig::from_lookup(lookup_from(&[(MAX_STOPS_KEY, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }
}
