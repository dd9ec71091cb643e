use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Rule used to relocate a centroid from its cluster's members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentroidRule {
    /// Arithmetic mean, truncated toward zero
    #[default]
    Mean,
    /// Coordinate-wise median; the truncated average of the two middle values
    /// for an even member count
    Median,
}

impl CentroidRule {
    /// Compute the new centroid for `members`.
    ///
    /// Returns `None` for an empty member list; the caller keeps the previous
    /// centroid in that case.
    pub fn relocate(self, members: &[Point]) -> Option<Point> {
        if members.is_empty() {
            return None;
        }
        Some(match self {
            CentroidRule::Mean => mean(members),
            CentroidRule::Median => median(members),
        })
    }
}

fn mean(members: &[Point]) -> Point {
    let n = members.len() as i64;
    let (sum_x, sum_y) = members.iter().fold((0i64, 0i64), |(sx, sy), p| {
        (sx + i64::from(p.x), sy + i64::from(p.y))
    });

    // i64 division truncates toward zero; the quotient is within i32 range
    Point::new((sum_x / n) as i32, (sum_y / n) as i32)
}

fn median(members: &[Point]) -> Point {
    let mut xs: Vec<i64> = members.iter().map(|p| i64::from(p.x)).collect();
    let mut ys: Vec<i64> = members.iter().map(|p| i64::from(p.y)).collect();
    xs.sort_unstable();
    ys.sort_unstable();

    Point::new(middle(&xs) as i32, middle(&ys) as i32)
}

fn middle(sorted: &[i64]) -> i64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2
    }
}
