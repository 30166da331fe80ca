//! TSPLIB-style problem loader.
//!
//! Reads the two-section coordinate files published for national TSP
//! instances into a [`TspProblem`]: lower-cased header fields plus the
//! ordered point list. Malformed input fails the whole load with a
//! [`ParseError`]; coordinate ranges and identifier uniqueness are not
//! checked.

mod error;
mod reader;
mod types;

pub use error::ParseError;
pub use reader::{parse, read_problem, ReadTsp, SECTION_SEPARATOR};
pub use types::{Point, TspProblem};
