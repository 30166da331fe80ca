//! Two-section problem file reader.
//!
//! The header holds one `key: value` pair per line; the body, introduced
//! by `NODE_COORD_SECTION`, holds one `id x y` record per line:
//!
//! ```text
//! NAME : uy734
//! COMMENT : 734 locations in Uruguay
//! TYPE : TSP
//! DIMENSION : 734
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! 1 30133.3333 57633.3333
//! 2 30166.6667 57100.0000
//! EOF
//! ```
//!
//! Blank lines are skipped. A body line reading `EOF` ends the point list;
//! only blank lines may follow it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::error::ParseError;
use super::types::{Point, TspProblem};

/// Token separating the header from the point list.
pub const SECTION_SEPARATOR: &str = "NODE_COORD_SECTION";

const END_OF_FILE: &str = "EOF";

/// A trait to read a problem from a text source.
pub trait ReadTsp {
    /// Reads and parses the whole source.
    fn read_tsp(self) -> Result<TspProblem, ParseError>;
}

impl<R: Read> ReadTsp for BufReader<R> {
    fn read_tsp(mut self) -> Result<TspProblem, ParseError> {
        let mut content = String::new();
        self.read_to_string(&mut content)?;
        parse(&content)
    }
}

impl ReadTsp for String {
    fn read_tsp(self) -> Result<TspProblem, ParseError> {
        parse(&self)
    }
}

/// Reads the problem file at `path`.
pub fn read_problem<P: AsRef<Path>>(path: P) -> Result<TspProblem, ParseError> {
    let path = path.as_ref();
    let problem = BufReader::new(File::open(path)?).read_tsp()?;
    debug!("loaded {} points from '{}'", problem.points.len(), path.display());
    Ok(problem)
}

/// Parses a problem from its text content.
///
/// # Examples
///
/// ```
/// use u_hillclimb::tsplib::{parse, Point};
///
/// let problem = parse("NAME: test\nTYPE: EUC_2D\nNODE_COORD_SECTION\n1 0.0 0.0\n2 3.0 4.0\n").unwrap();
/// assert_eq!(problem.get("name"), Some("test"));
/// assert_eq!(problem.points, vec![Point::new(1, 0.0, 0.0), Point::new(2, 3.0, 4.0)]);
/// ```
pub fn parse(content: &str) -> Result<TspProblem, ParseError> {
    let (header, body) = split_sections(content)?;

    let mut problem = TspProblem::default();

    for (index, raw) in header.split('\n').enumerate() {
        if let Some((key, value)) = parse_field(raw, index + 1)? {
            problem.fields.insert(key, value);
        }
    }

    let body_offset = header.matches('\n').count();
    let mut ended = false;
    for (index, raw) in body.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if ended {
            return Err(ParseError::MalformedPoint {
                line: body_offset + index + 1,
                content: line.to_string(),
                reason: format!("unexpected content after {END_OF_FILE}"),
            });
        }
        if line == END_OF_FILE {
            ended = true;
            continue;
        }
        problem.points.push(parse_point(line, body_offset + index + 1)?);
    }

    debug!(
        "parsed {} header fields and {} points",
        problem.fields.len(),
        problem.points.len()
    );

    Ok(problem)
}

fn split_sections(content: &str) -> Result<(&str, &str), ParseError> {
    let start = content
        .find(SECTION_SEPARATOR)
        .ok_or(ParseError::MissingSection)?;
    let header = &content[..start];
    let body = &content[start + SECTION_SEPARATOR.len()..];

    if body.contains(SECTION_SEPARATOR) {
        return Err(ParseError::DuplicateSection);
    }

    Ok((header, body))
}

fn parse_field(raw: &str, line: usize) -> Result<Option<(String, String)>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut parts = trimmed.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok(Some((
            key.trim().to_lowercase(),
            value.trim().to_string(),
        ))),
        _ => Err(ParseError::MalformedHeader {
            line,
            content: trimmed.to_string(),
        }),
    }
}

fn parse_point(line_content: &str, line: usize) -> Result<Point, ParseError> {
    let malformed = |reason: String| ParseError::MalformedPoint {
        line,
        content: line_content.to_string(),
        reason,
    };

    let data = line_content.split_whitespace().collect::<Vec<_>>();
    if data.len() != 3 {
        return Err(malformed(format!("expected 3 fields, got {}", data.len())));
    }

    let id = data[0]
        .parse::<i64>()
        .map_err(|err| malformed(format!("cannot parse id '{}': {err}", data[0])))?;
    let x = data[1]
        .parse::<f64>()
        .map_err(|err| malformed(format!("cannot parse x '{}': {err}", data[1])))?;
    let y = data[2]
        .parse::<f64>()
        .map_err(|err| malformed(format!("cannot parse y '{}': {err}", data[2])))?;

    Ok(Point::new(id, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = "NAME: test\nTYPE: EUC_2D\nNODE_COORD_SECTION\n1 0.0 0.0\n2 3.0 4.0";

    #[test]
    fn test_parse_small_problem() {
        let problem = parse(SMALL).unwrap();

        assert_eq!(problem.fields.len(), 2);
        assert_eq!(problem.fields["name"], "test");
        assert_eq!(problem.fields["type"], "EUC_2D");
        assert_eq!(
            problem.points,
            vec![Point::new(1, 0.0, 0.0), Point::new(2, 3.0, 4.0)]
        );
    }

    #[test]
    fn test_parse_country_file_layout() {
        let content = "NAME : dj38\n\
                       COMMENT : 38 locations in Djibouti\n\
                       TYPE : TSP\n\
                       DIMENSION : 3\n\
                       EDGE_WEIGHT_TYPE : EUC_2D\n\
                       NODE_COORD_SECTION\n\
                       1 11003.611100 42102.500000\n\
                       2 11108.611100 42373.888900\n\
                       3 11133.333300 42885.833300\n\
                       EOF\n";

        let problem = parse(content).unwrap();

        assert_eq!(problem.name(), Some("dj38"));
        assert_eq!(problem.get("comment"), Some("38 locations in Djibouti"));
        assert_eq!(problem.get("edge_weight_type"), Some("EUC_2D"));
        assert_eq!(problem.dimension(), Some(3));
        assert_eq!(problem.points.len(), 3);
        assert_eq!(problem.points[2], Point::new(3, 11133.3333, 42885.8333));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let content = concat!(
            "\n  NAME:   spaced  \n\n\tTYPE :TSP\n",
            "NODE_COORD_SECTION\n\n 1 1 2 \n\n2\t3.5   -4e2\n\n",
        );

        let problem = parse(content).unwrap();

        assert_eq!(problem.get("name"), Some("spaced"));
        assert_eq!(problem.get("type"), Some("TSP"));
        assert_eq!(
            problem.points,
            vec![Point::new(1, 1.0, 2.0), Point::new(2, 3.5, -400.0)]
        );
    }

    #[test]
    fn test_parse_keeps_point_order_and_duplicate_ids() {
        let problem = parse("NODE_COORD_SECTION\n3 0 0\n1 1 1\n3 2 2\n").unwrap();

        let ids: Vec<i64> = problem.points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 3]);
        assert!(problem.fields.is_empty());
    }

    #[test]
    fn test_parse_accepts_trailing_eof_marker() {
        let problem = parse("NODE_COORD_SECTION\n1 0 0\nEOF\n\n  \n").unwrap();
        assert_eq!(problem.points, vec![Point::new(1, 0.0, 0.0)]);
    }

    #[test]
    fn test_content_after_eof_marker() {
        let content = "NODE_COORD_SECTION\n1 0 0\nEOF\nthis is not a point\n2 1\n";
        let err = parse(content).unwrap_err();
        match err {
            ParseError::MalformedPoint { line, content, .. } => {
                assert_eq!(line, 4);
                assert_eq!(content, "this is not a point");
            }
            other => panic!("unexpected error: {other}"),
        }

        // A well-formed point after the marker is rejected too.
        let err = parse("NODE_COORD_SECTION\n1 0 0\nEOF\n2 1 1\n").unwrap_err();
        assert_eq!(err.to_string(), "line 4: unexpected content after EOF in '2 1 1'");
    }

    #[test]
    fn test_parse_empty_body() {
        let problem = parse("NAME: empty\nNODE_COORD_SECTION\n").unwrap();
        assert!(problem.points.is_empty());
    }

    #[test]
    fn test_missing_section() {
        let err = parse("NAME: test\n1 0.0 0.0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingSection));
    }

    #[test]
    fn test_duplicate_section() {
        let err = parse("NODE_COORD_SECTION\n1 0 0\nNODE_COORD_SECTION\n").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateSection));
    }

    #[test]
    fn test_header_without_colon() {
        let err = parse("NAME: test\nTYPE EUC_2D\nNODE_COORD_SECTION\n").unwrap_err();
        match err {
            ParseError::MalformedHeader { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "TYPE EUC_2D");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_with_two_colons() {
        let err = parse("COMMENT: a: b\nNODE_COORD_SECTION\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedHeader { line: 1, .. }));
    }

    #[test]
    fn test_point_with_two_fields() {
        let err = parse("NAME: test\nNODE_COORD_SECTION\n1 0.0 0.0\n2 3.0\n").unwrap_err();
        match err {
            ParseError::MalformedPoint { line, content, .. } => {
                assert_eq!(line, 4);
                assert_eq!(content, "2 3.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_point_with_four_fields() {
        let err = parse("NODE_COORD_SECTION\n1 0 0 0\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedPoint { line: 2, .. }));
    }

    #[test]
    fn test_point_with_non_numeric_fields() {
        for body in ["a 0 0", "1 x 0", "1 0 y", "1.5 0 0"] {
            let content = format!("NODE_COORD_SECTION\n{body}\n");
            let err = parse(&content).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedPoint { .. }),
                "expected malformed point for '{body}', got {err}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        let err = parse("NODE_COORD_SECTION\n1 2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: expected 3 fields, got 2 in '1 2'");
        assert_eq!(
            ParseError::MissingSection.to_string(),
            "missing NODE_COORD_SECTION"
        );
    }

    #[test]
    fn test_read_tsp_from_string_and_reader() {
        let from_string = SMALL.to_string().read_tsp().unwrap();
        let from_reader = BufReader::new(SMALL.as_bytes()).read_tsp().unwrap();
        assert_eq!(from_string, from_reader);
    }

    #[test]
    fn test_read_problem_from_file() {
        let path = std::env::temp_dir().join(format!("u-hillclimb-{}.tsp", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            file.write_all(SMALL.as_bytes()).unwrap();
        }

        let problem = read_problem(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(problem.points.len(), 2);
    }

    #[test]
    fn test_read_problem_missing_file() {
        let err = read_problem("/nonexistent/u-hillclimb/problem.tsp").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
