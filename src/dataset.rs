use crate::error::ClusterError;
use crate::point::Point;
use ndarray::ArrayView2;
use std::collections::HashSet;
use std::ops::Deref;

/// A validated, non-empty, ordered set of data points.
///
/// Dereferences to `[Point]`, so the whole slice API is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Wrap a list of points.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::EmptyDataset` if `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self, ClusterError> {
        if points.is_empty() {
            return Err(ClusterError::EmptyDataset);
        }
        Ok(Self { points })
    }

    /// Build a data set from an `(n_samples, 2)` integer array.
    ///
    /// # Errors
    ///
    /// Returns an error if the array does not have exactly 2 columns or has no rows.
    pub fn from_array(data: &ArrayView2<i32>) -> Result<Self, ClusterError> {
        if data.ncols() != 2 {
            return Err(ClusterError::InvalidDimensions(format!(
                "Expected 2 columns, got {}",
                data.ncols()
            )));
        }

        let points = data
            .outer_iter()
            .map(|row| Point::new(row[0], row[1]))
            .collect();
        Self::new(points)
    }

    /// Parse whitespace-separated text, one `x y` pair per line.
    ///
    /// Blank lines are skipped. Anything after the second integer on a line is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::Parse` with the 1-based line number for the first
    /// malformed line, or `EmptyDataset` if no point was found.
    pub fn parse(text: &str) -> Result<Self, ClusterError> {
        let mut points = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(first) = fields.next() else {
                continue;
            };
            let second = fields.next().ok_or_else(|| ClusterError::Parse {
                line: idx + 1,
                message: "expected two integers".to_string(),
            })?;

            let x = parse_coordinate(first, idx + 1)?;
            let y = parse_coordinate(second, idx + 1)?;
            points.push(Point::new(x, y));
        }

        Self::new(points)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the data set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of distinct coordinates in the data set.
    pub fn distinct_count(&self) -> usize {
        self.points.iter().collect::<HashSet<_>>().len()
    }
}

impl Deref for Dataset {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}

impl TryFrom<Vec<Point>> for Dataset {
    type Error = ClusterError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

fn parse_coordinate(field: &str, line: usize) -> Result<i32, ClusterError> {
    field.parse::<i32>().map_err(|e| ClusterError::Parse {
        line,
        message: format!("'{}': {}", field, e),
    })
}
