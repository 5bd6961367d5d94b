//! Town label type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid town label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid town label: {reason}")]
pub struct InvalidLabel {
    reason: &'static str,
}

/// A town label: a single uppercase ASCII letter.
///
/// This type guarantees that any `TownLabel` value is valid by construction.
///
/// # Examples
///
/// ```
/// use trains::domain::TownLabel;
///
/// let a = TownLabel::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // Lowercase is rejected
/// assert!(TownLabel::parse("a").is_err());
///
/// // Wrong length is rejected
/// assert!(TownLabel::parse("").is_err());
/// assert!(TownLabel::parse("AB").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TownLabel(u8);

impl TownLabel {
    /// Parse a label from a string.
    ///
    /// The input must be exactly one uppercase ASCII letter (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidLabel> {
        match s.as_bytes() {
            [b] => Self::from_byte(*b),
            _ => Err(InvalidLabel {
                reason: "must be exactly 1 character",
            }),
        }
    }

    /// Build a label from a single byte.
    pub fn from_byte(b: u8) -> Result<Self, InvalidLabel> {
        if b.is_ascii_uppercase() {
            Ok(TownLabel(b))
        } else {
            Err(InvalidLabel {
                reason: "must be an uppercase ASCII letter A-Z",
            })
        }
    }

    /// Returns the label as a char.
    pub fn as_char(&self) -> char {
        char::from(self.0)
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII uppercase letters
        std::str::from_utf8(std::slice::from_ref(&self.0)).unwrap()
    }
}

impl fmt::Debug for TownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TownLabel({})", self.as_str())
    }
}

impl fmt::Display for TownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TownLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]") {
            let label = TownLabel::parse(&s).unwrap();
            prop_assert_eq!(label.as_str(), s.as_str());
        }

        /// Lowercase letters are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]") {
            prop_assert!(TownLabel::parse(&s).is_err());
        }

        /// Multi-character strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{2,6}") {
            prop_assert!(TownLabel::parse(&s).is_err());
        }
    }
}
