//! Route directive parsing.
//!
//! A route directive is a single word such as `AB5`: an origin label, a
//! destination label and a distance made of one or more digits.

use super::{LoadError, TownLabel};

/// A decoded route directive.
///
/// The parser only checks the shape of the word. Self-loops and duplicate
/// routes are rejected later, when the directive is applied to a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDirective {
    pub origin: TownLabel,
    pub destination: TownLabel,
    pub distance: u32,
}

impl RouteDirective {
    /// Parse a directive word.
    ///
    /// # Examples
    ///
    /// ```
    /// use trains::domain::RouteDirective;
    ///
    /// let d = RouteDirective::parse("AB5").unwrap();
    /// assert_eq!(d.origin.as_str(), "A");
    /// assert_eq!(d.destination.as_str(), "B");
    /// assert_eq!(d.distance, 5);
    ///
    /// assert!(RouteDirective::parse("A-B5").is_err());
    /// ```
    pub fn parse(word: &str) -> Result<Self, LoadError> {
        let invalid = || LoadError::InvalidWord(word.to_string());

        let bytes = word.as_bytes();
        if bytes.len() < 3 {
            return Err(invalid());
        }

        let origin = TownLabel::from_byte(bytes[0]).map_err(|_| invalid())?;
        let destination = TownLabel::from_byte(bytes[1]).map_err(|_| invalid())?;

        let digits = &word[2..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Overflowing digit strings are rejected rather than truncated
        let distance = digits.parse::<u32>().map_err(|_| invalid())?;

        Ok(RouteDirective {
            origin,
            destination,
            distance,
        })
    }

    /// Returns true if the directive starts and ends at the same town.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> TownLabel {
        TownLabel::parse(s).unwrap()
    }

    #[test]
    fn parse_simple_directive() {
        let d = RouteDirective::parse("AB5").unwrap();
        assert_eq!(d.origin, label("A"));
        assert_eq!(d.destination, label("B"));
        assert_eq!(d.distance, 5);
    }

    #[test]
    fn parse_multi_digit_distance() {
        let d = RouteDirective::parse("CE1024").unwrap();
        assert_eq!(d.distance, 1024);
    }

    #[test]
    fn self_loop_is_not_a_parse_error() {
        let d = RouteDirective::parse("AA3").unwrap();
        assert!(d.is_self_loop());
    }

    #[test]
    fn zero_distance_is_well_formed() {
        assert_eq!(RouteDirective::parse("AB0").unwrap().distance, 0);
    }

    #[test]
    fn reject_malformed_words() {
        for word in [
            "", "A", "AB", "A5", "ab5", "Ab5", "A-B5", "AB-5", "AB5x", "AB 5", " AB5", "AB5 ",
            "1B5", "ABC5", "AB+5",
        ] {
            let err = RouteDirective::parse(word).unwrap_err();
            assert!(
                err.to_string().contains("not a valid route-definition word"),
                "{word:?} gave {err}"
            );
        }
    }

    #[test]
    fn reject_overflowing_distance() {
        assert!(RouteDirective::parse("AB99999999999999999999").is_err());
    }

    #[test]
    fn error_names_offending_word() {
        let err = RouteDirective::parse("XY?").unwrap_err();
        assert_eq!(err.to_string(), "\"XY?\" is not a valid route-definition word");
    }
}
