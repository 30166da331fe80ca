//! Problem record produced by the loader.

use std::collections::HashMap;

/// A labeled point of a problem instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Identifier as written in the file. Not checked for uniqueness.
    pub id: i64,
    /// First coordinate.
    pub x: f64,
    /// Second coordinate.
    pub y: f64,
}

impl Point {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A loaded problem: header fields plus the ordered point list.
///
/// Header keys are stored lower-cased and trimmed, values trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspProblem {
    /// Header fields, e.g. `name`, `type`, `dimension`.
    pub fields: HashMap<String, String>,
    /// Points in file order.
    pub points: Vec<Point>,
}

impl TspProblem {
    /// Looks up a header field. The key is matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(&key.trim().to_lowercase())
            .map(String::as_str)
    }

    /// The `NAME` header field.
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// The `DIMENSION` header field, if present and numeric.
    ///
    /// The loader does not check it against the number of points.
    pub fn dimension(&self) -> Option<usize> {
        self.get("dimension").and_then(|value| value.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> TspProblem {
        TspProblem {
            fields: HashMap::from([
                ("name".to_string(), "uy734".to_string()),
                ("dimension".to_string(), "734".to_string()),
                ("comment".to_string(), "n/a".to_string()),
            ]),
            points: vec![],
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let problem = problem();
        assert_eq!(problem.get("NAME"), Some("uy734"));
        assert_eq!(problem.get(" Comment "), Some("n/a"));
        assert_eq!(problem.get("type"), None);
    }

    #[test]
    fn test_accessors() {
        let mut problem = problem();
        assert_eq!(problem.name(), Some("uy734"));
        assert_eq!(problem.dimension(), Some(734));

        problem
            .fields
            .insert("dimension".to_string(), "many".to_string());
        assert_eq!(problem.dimension(), None);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(1, 0.0, 0.0);
        let b = Point::new(2, 3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(&a), 0.0);
    }
}
