//! Loader errors.

use std::fmt;

/// Error raised when a problem file cannot be loaded.
///
/// Line numbers are 1-based positions in the whole input.
#[derive(Debug)]
pub enum ParseError {
    /// The input could not be read.
    Io(std::io::Error),
    /// The `NODE_COORD_SECTION` separator does not occur.
    MissingSection,
    /// The `NODE_COORD_SECTION` separator occurs more than once.
    DuplicateSection,
    /// A header line is not a single `key: value` pair.
    MalformedHeader { line: usize, content: String },
    /// A body line is not an `id x y` triple.
    MalformedPoint {
        line: usize,
        content: String,
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "cannot read problem: {err}"),
            ParseError::MissingSection => write!(f, "missing NODE_COORD_SECTION"),
            ParseError::DuplicateSection => write!(f, "NODE_COORD_SECTION occurs more than once"),
            ParseError::MalformedHeader { line, content } => {
                write!(f, "line {line}: expected 'key: value', got '{content}'")
            }
            ParseError::MalformedPoint {
                line,
                content,
                reason,
            } => write!(f, "line {line}: {reason} in '{content}'"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(err)
    }
}
