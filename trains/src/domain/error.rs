//! Load error types.
//!
//! Every failure while building a network from route directives is a
//! `LoadError`. Token-level errors are wrapped with the line they came
//! from at the load boundary.

use std::path::PathBuf;

/// Errors raised while loading route directives into a network.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Token does not match the `<origin><destination><distance>` shape
    #[error("\"{0}\" is not a valid route-definition word")]
    InvalidWord(String),

    /// Origin and destination are the same town
    #[error("route \"{0}\" doesn't go anywhere")]
    SelfLoop(String),

    /// A route between the same two towns was already loaded
    #[error("\"{0}\": route definition already known")]
    Duplicate(String),

    /// A token-level error, with the offending line attached
    #[error("Line {line_no} [{line}]\n\t{source}")]
    Line {
        line_no: usize,
        line: String,
        source: Box<LoadError>,
    },

    /// The source could not be read
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LoadError {
    /// Wrap a token-level error with its 1-based line number and raw text.
    pub fn at_line(self, line_no: usize, line: &str) -> Self {
        LoadError::Line {
            line_no,
            line: line.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping line context.
    pub fn root_cause(&self) -> &LoadError {
        match self {
            LoadError::Line { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the line number this error was raised on, if known.
    pub fn line_no(&self) -> Option<usize> {
        match self {
            LoadError::Line { line_no, .. } => Some(*line_no),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::InvalidWord("A-B5".into());
        assert_eq!(err.to_string(), "\"A-B5\" is not a valid route-definition word");

        let err = LoadError::SelfLoop("AA3".into());
        assert_eq!(err.to_string(), "route \"AA3\" doesn't go anywhere");

        let err = LoadError::Duplicate("AB5".into());
        assert_eq!(err.to_string(), "\"AB5\": route definition already known");
    }

    #[test]
    fn line_context_embeds_number_text_and_cause() {
        let err = LoadError::Duplicate("AB5".into()).at_line(3, "AB5, BC4");
        assert_eq!(
            err.to_string(),
            "Line 3 [AB5, BC4]\n\t\"AB5\": route definition already known"
        );
        assert_eq!(err.line_no(), Some(3));
        assert!(matches!(err.root_cause(), LoadError::Duplicate(w) if w == "AB5"));
    }

    #[test]
    fn io_error_names_path() {
        let err = LoadError::Io {
            path: PathBuf::from("/no/such/graph"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read /no/such/graph: not found");
        assert_eq!(err.line_no(), None);
    }
}
