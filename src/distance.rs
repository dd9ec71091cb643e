use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Distance metric used for assignment, spread and separation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Straight-line (L2) distance
    #[default]
    Euclidean,
    /// City-block (L1) distance
    Manhattan,
}

impl Metric {
    /// Distance between two points under this metric
    #[inline]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
        }
    }
}

/// sqrt((ax - bx)^2 + (ay - by)^2)
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt()
}

/// |ax - bx| + |ay - by|
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.abs() + dy.abs()
}

/// Find the index of the centroid nearest to `point`.
///
/// Centroids are scanned in order and only a strictly smaller distance replaces
/// the current best, so ties go to the earliest centroid.
///
/// Returns `None` if `centroids` is empty.
pub fn nearest_centroid<I>(point: Point, centroids: I, metric: Metric) -> Option<usize>
where
    I: IntoIterator<Item = Point>,
{
    let mut best_label = None;
    let mut best_dist = f64::INFINITY;

    for (j, centroid) in centroids.into_iter().enumerate() {
        let dist = metric.distance(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_label = Some(j);
        }
    }

    best_label
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_euclidean() {
        let d = euclidean(Point::new(0, 0), Point::new(3, 4));
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_manhattan() {
        let d = manhattan(Point::new(-1, 2), Point::new(3, -4));
        assert_relative_eq!(d, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        assert!(Metric::Manhattan.distance(a, b).is_finite());
        assert!(Metric::Euclidean.distance(a, b).is_finite());
    }

    #[test]
    fn test_find_nearest_centroid() {
        let centroids = [Point::new(0, 0), Point::new(10, 10)];

        assert_eq!(
            nearest_centroid(Point::new(1, 1), centroids, Metric::Euclidean),
            Some(0)
        );
        assert_eq!(
            nearest_centroid(Point::new(9, 8), centroids, Metric::Euclidean),
            Some(1)
        );
        // (5,5) is equidistant, but we take the first one found (0)
        assert_eq!(
            nearest_centroid(Point::new(5, 5), centroids, Metric::Manhattan),
            Some(0)
        );
    }

    #[test]
    fn test_tie_break_prefers_stored_order() {
        let centroids = [Point::new(4, 0), Point::new(0, 0), Point::new(2, 2)];
        // (2,0) is 2 away from both (4,0) and (0,0) under both metrics
        assert_eq!(
            nearest_centroid(Point::new(2, 0), centroids, Metric::Euclidean),
            Some(0)
        );
        assert_eq!(
            nearest_centroid(Point::new(2, 0), centroids, Metric::Manhattan),
            Some(0)
        );
    }

    #[test]
    fn test_nearest_centroid_empty() {
        assert_eq!(
            nearest_centroid(Point::new(0, 0), Vec::new(), Metric::Euclidean),
            None
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_metric_symmetric_and_non_negative(
            ax in -10_000..10_000i32,
            ay in -10_000..10_000i32,
            bx in -10_000..10_000i32,
            by in -10_000..10_000i32,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);

            for metric in [Metric::Euclidean, Metric::Manhattan] {
                let ab = metric.distance(a, b);
                let ba = metric.distance(b, a);
                prop_assert!(ab >= 0.0);
                prop_assert_eq!(ab, ba);
                prop_assert_eq!(ab == 0.0, a == b);
            }
        }
    }
}
