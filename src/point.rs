use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2-D integer coordinate.
///
/// Points are plain `Copy` values, so storing one as a centroid never aliases
/// the data point it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality_is_coordinate_equality() {
        assert_eq!(Point::new(3, -4), Point::from((3, -4)));
        assert_ne!(Point::new(3, -4), Point::new(-4, 3));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(7, -2).to_string(), "7 -2");
    }
}
