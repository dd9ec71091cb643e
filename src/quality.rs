//! Dunn Index scoring of a partition.

use crate::distance::Metric;
use crate::partition::{AssignmentIndex, Partition};
use crate::point::Point;
use tracing::{debug, warn};

/// Smallest distance between two data points owned by different clusters.
///
/// Two clusters count as the same when their centroids coincide. Returns
/// `None` when no such pair exists.
pub fn min_separation(
    data: &[Point],
    partition: &Partition,
    index: &AssignmentIndex,
    metric: Metric,
) -> Option<f64> {
    let centroids = partition.centroids();
    let mut shortest: Option<f64> = None;

    for (i, &p1) in data.iter().enumerate() {
        let c1 = centroids[index.cluster_of(i)];
        for (j, &p2) in data.iter().enumerate().skip(i + 1) {
            if p1 == p2 || c1 == centroids[index.cluster_of(j)] {
                continue;
            }
            let dist = metric.distance(p1, p2);
            if shortest.map_or(true, |s| dist < s) {
                shortest = Some(dist);
            }
        }
    }

    shortest
}

/// Largest within-cluster member distance over all clusters.
pub fn max_spread(partition: &Partition, metric: Metric) -> f64 {
    partition
        .clusters()
        .iter()
        .map(|cluster| cluster.spread(metric))
        .fold(0.0, f64::max)
}

/// Dunn Index: minimum separation over maximum spread. Higher is better.
///
/// Scores 0.0 for a single cluster, for a zero spread, and when no pair of
/// points straddles two clusters.
pub fn dunn_index(
    data: &[Point],
    partition: &Partition,
    index: &AssignmentIndex,
    metric: Metric,
) -> f64 {
    if partition.k() < 2 {
        return 0.0;
    }

    let dmin = min_separation(data, partition, index, metric);
    let dmax = max_spread(partition, metric);

    let Some(dmin) = dmin else {
        warn!(
            k = partition.k(),
            "every point landed in one effective cluster, scoring 0"
        );
        return 0.0;
    };

    if dmax == 0.0 {
        debug!(k = partition.k(), dmin, "zero cluster spread, scoring 0");
        return 0.0;
    }

    dmin / dmax
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn assigned(data: &[Point], seeds: &[(i32, i32)], metric: Metric) -> (Partition, AssignmentIndex) {
        let mut partition = Partition::from_centroids(pts(seeds));
        let index = partition.assign(data, metric);
        (partition, index)
    }

    #[test]
    fn test_dunn_two_separated_pairs() {
        let data = pts(&[(0, 0), (1, 0), (10, 0), (11, 0)]);
        let (partition, index) = assigned(&data, &[(0, 0), (11, 0)], Metric::Euclidean);

        assert_relative_eq!(max_spread(&partition, Metric::Euclidean), 1.0);
        assert_relative_eq!(
            min_separation(&data, &partition, &index, Metric::Euclidean).unwrap(),
            9.0
        );
        assert_relative_eq!(
            dunn_index(&data, &partition, &index, Metric::Euclidean),
            9.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dunn_manhattan() {
        let data = pts(&[(0, 0), (1, 1), (10, 0), (10, 2)]);
        let (partition, index) = assigned(&data, &[(0, 0), (10, 0)], Metric::Manhattan);

        // dmax = max(2, 2), dmin = |10-1| + |0-1| = 10
        assert_relative_eq!(
            dunn_index(&data, &partition, &index, Metric::Manhattan),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_single_cluster_scores_zero() {
        let data = pts(&[(0, 0), (5, 5)]);
        let (partition, index) = assigned(&data, &[(0, 0)], Metric::Euclidean);
        assert_eq!(dunn_index(&data, &partition, &index, Metric::Euclidean), 0.0);
    }

    #[test]
    fn test_singleton_clusters_score_zero() {
        let data = pts(&[(0, 0), (5, 5)]);
        let (partition, index) = assigned(&data, &[(0, 0), (5, 5)], Metric::Euclidean);
        assert_eq!(max_spread(&partition, Metric::Euclidean), 0.0);
        assert_eq!(dunn_index(&data, &partition, &index, Metric::Euclidean), 0.0);
    }

    #[test]
    fn test_no_cross_pair_scores_zero() {
        // Second cluster never receives a point
        let data = pts(&[(0, 0), (1, 0), (2, 0)]);
        let (partition, index) = assigned(&data, &[(1, 0), (50, 50)], Metric::Euclidean);

        assert!(min_separation(&data, &partition, &index, Metric::Euclidean).is_none());
        assert_eq!(dunn_index(&data, &partition, &index, Metric::Euclidean), 0.0);
    }

    #[test]
    fn test_coinciding_centroids_count_as_one_cluster() {
        let data = pts(&[(0, 0), (4, 0)]);
        let mut partition = Partition::from_centroids(pts(&[(2, 0), (2, 0)]));
        let index = partition.assign(&data, Metric::Euclidean);

        assert!(min_separation(&data, &partition, &index, Metric::Euclidean).is_none());
    }

    #[test]
    fn test_duplicate_points_are_skipped() {
        let data = pts(&[(0, 0), (0, 0), (3, 0)]);
        let (partition, index) = assigned(&data, &[(0, 0), (3, 0)], Metric::Euclidean);

        assert_relative_eq!(
            min_separation(&data, &partition, &index, Metric::Euclidean).unwrap(),
            3.0
        );
    }
}
