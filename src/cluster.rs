use crate::centroid::CentroidRule;
use crate::distance::Metric;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// A centroid plus the points currently assigned to it.
///
/// Equality compares the centroid location only; membership never takes part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    centroid: Point,
    members: Vec<Point>,
}

impl Cluster {
    /// Create an empty cluster centred at `centroid`
    pub fn new(centroid: Point) -> Self {
        Self {
            centroid,
            members: Vec::new(),
        }
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Members in assignment order
    pub fn members(&self) -> &[Point] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.members.push(point);
    }

    pub fn clear_members(&mut self) {
        self.members.clear();
    }

    /// Move the centroid according to `rule`.
    ///
    /// Returns `false` and leaves the centroid untouched when the cluster has
    /// no members.
    pub fn relocate(&mut self, rule: CentroidRule) -> bool {
        match rule.relocate(&self.members) {
            Some(centroid) => {
                self.centroid = centroid;
                true
            }
            None => false,
        }
    }

    /// Largest distance between two members of this cluster (0 for fewer than
    /// two members)
    pub fn spread(&self, metric: Metric) -> f64 {
        let mut largest = 0.0f64;
        for (i, &p1) in self.members.iter().enumerate() {
            for &p2 in &self.members[i + 1..] {
                let dist = metric.distance(p1, p2);
                if dist > largest {
                    largest = dist;
                }
            }
        }
        largest
    }
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.centroid == other.centroid
    }
}

impl Eq for Cluster {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equality_ignores_members() {
        let mut a = Cluster::new(Point::new(1, 1));
        let b = Cluster::new(Point::new(1, 1));
        a.push(Point::new(5, 5));

        assert_eq!(a, b);
        assert_ne!(a, Cluster::new(Point::new(1, 2)));
    }

    #[test]
    fn test_relocate_empty_keeps_centroid() {
        let mut c = Cluster::new(Point::new(4, 4));
        assert!(!c.relocate(CentroidRule::Mean));
        assert_eq!(c.centroid(), Point::new(4, 4));
    }

    #[test]
    fn test_relocate_moves_centroid() {
        let mut c = Cluster::new(Point::new(0, 0));
        c.push(Point::new(2, 2));
        c.push(Point::new(4, 6));

        assert!(c.relocate(CentroidRule::Mean));
        assert_eq!(c.centroid(), Point::new(3, 4));
        // Relocation leaves membership alone
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_spread() {
        let mut c = Cluster::new(Point::new(0, 0));
        assert_relative_eq!(c.spread(Metric::Euclidean), 0.0);

        c.push(Point::new(0, 0));
        c.push(Point::new(3, 4));
        c.push(Point::new(1, 1));

        assert_relative_eq!(c.spread(Metric::Euclidean), 5.0, epsilon = 1e-12);
        assert_relative_eq!(c.spread(Metric::Manhattan), 7.0, epsilon = 1e-12);
    }
}
