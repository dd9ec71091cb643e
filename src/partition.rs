use crate::centroid::CentroidRule;
use crate::cluster::Cluster;
use crate::distance::{nearest_centroid, Metric};
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Which cluster owns each data point, by data position.
///
/// Only valid immediately after the assignment pass that produced it; a new
/// index is built from scratch on every pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentIndex {
    labels: Vec<usize>,
}

impl AssignmentIndex {
    /// Index of the cluster that owns data point `i`
    #[inline]
    pub fn cluster_of(&self, i: usize) -> usize {
        self.labels[i]
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The ordered sequence of clusters active at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    clusters: Vec<Cluster>,
}

impl Partition {
    /// Build a partition from cluster seeds.
    ///
    /// # Panics
    ///
    /// Panics if `centroids` yields nothing.
    pub fn from_centroids<I>(centroids: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::from_clusters(centroids.into_iter().map(Cluster::new).collect())
    }

    pub(crate) fn from_clusters(clusters: Vec<Cluster>) -> Self {
        assert!(!clusters.is_empty(), "a partition needs at least one cluster");
        Self { clusters }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub(crate) fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }

    /// Number of clusters
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    /// Centroid locations in stored order
    pub fn centroids(&self) -> Vec<Point> {
        self.clusters.iter().map(Cluster::centroid).collect()
    }

    /// Member count of every cluster in stored order
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }

    pub fn clear_members(&mut self) {
        for cluster in &mut self.clusters {
            cluster.clear_members();
        }
    }

    /// Assign every point of `data` to its nearest cluster.
    ///
    /// Expects all member lists to be empty; call `clear_members` first.
    /// Points are appended to the members in data order, and ties go to the
    /// earliest cluster.
    pub fn assign(&mut self, data: &[Point], metric: Metric) -> AssignmentIndex {
        debug_assert!(self.clusters.iter().all(Cluster::is_empty));

        let centroids = self.centroids();
        let mut labels = Vec::with_capacity(data.len());

        for &point in data {
            // Never None: a partition is non-empty by construction
            let label = nearest_centroid(point, centroids.iter().copied(), metric).unwrap_or(0);
            self.clusters[label].push(point);
            labels.push(label);
        }

        AssignmentIndex { labels }
    }

    /// Relocate every cluster that has members; returns how many moved.
    ///
    /// Clusters without members keep their centroid and may stay unselected
    /// for the rest of the run.
    pub fn relocate(&mut self, rule: CentroidRule) -> usize {
        self.clusters
            .iter_mut()
            .map(|cluster| cluster.relocate(rule))
            .filter(|&moved| moved)
            .count()
    }

    /// One Lloyd step: clear, assign, relocate, clear again.
    pub fn step(&mut self, data: &[Point], metric: Metric, rule: CentroidRule) {
        self.clear_members();
        self.assign(data, metric);
        self.relocate(rule);
        self.clear_members();
    }

    /// Whether the centroid sequence equals `snapshot` position by position.
    pub fn same_locations(&self, snapshot: &[Point]) -> bool {
        locations_match(&self.centroids(), snapshot)
    }
}

/// Location-only comparison of two centroid sequences.
///
/// An empty side never matches, so the first pass of a loop (which has no
/// snapshot yet) is never reported as converged.
pub fn locations_match(current: &[Point], snapshot: &[Point]) -> bool {
    if current.is_empty() || snapshot.is_empty() {
        return false;
    }
    current == snapshot
}
