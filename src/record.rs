use crate::cluster::Cluster;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// How a convergence loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Convergence {
    /// A pass left every centroid where the previous pass put it
    Converged { iterations: usize },
    /// The iteration ceiling was reached first
    ForcedStop { iterations: usize },
}

impl Convergence {
    pub fn is_converged(self) -> bool {
        matches!(self, Convergence::Converged { .. })
    }

    /// Number of Lloyd steps taken
    pub fn iterations(self) -> usize {
        match self {
            Convergence::Converged { iterations } | Convergence::ForcedStop { iterations } => {
                iterations
            }
        }
    }
}

/// Frozen result of one converged partition.
///
/// Clusters carry the membership of the final assignment pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Number of clusters
    pub k: usize,

    /// Restart that produced this record
    pub restart: usize,

    /// Clusters in stable order
    pub clusters: Vec<Cluster>,

    /// Dunn Index of the partition
    pub score: f64,

    /// How the convergence loop ended
    pub convergence: Convergence,
}

impl RunRecord {
    pub fn centroids(&self) -> Vec<Point> {
        self.clusters.iter().map(Cluster::centroid).collect()
    }

    /// Member count of each cluster
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }
}

/// Highest-scoring record; the earliest one wins a tie.
pub fn best_record<'a, I>(records: I) -> Option<&'a RunRecord>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut best: Option<&RunRecord> = None;
    for record in records {
        match best {
            Some(current) if record.score <= current.score => {}
            _ => best = Some(record),
        }
    }
    best
}

/// Position of the highest-scoring record; the earliest one wins a tie.
pub fn best_position(records: &[RunRecord]) -> Option<usize> {
    let best = best_record(records)?;
    records.iter().position(|r| std::ptr::eq(r, best))
}
