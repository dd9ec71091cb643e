use crate::centroid::CentroidRule;
use crate::distance::Metric;
use crate::partition::{AssignmentIndex, Partition};
use crate::point::Point;
use crate::record::Convergence;
use crate::sampling::sample_distinct;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, warn};

/// Settings shared by every convergence loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LloydParams {
    pub metric: Metric,
    pub centroid_rule: CentroidRule,
    pub max_iters: usize,
}

/// Run Lloyd iteration on `partition` until its centroids stop moving.
///
/// Each pass assigns every point, relocates the clusters that received
/// members, and compares the new centroid sequence with the previous pass.
/// The loop ends when they match or after `max_iters` passes, whichever comes
/// first. A final assignment pass then fills the member lists for the
/// resulting centroids, and its index is returned together with the outcome.
pub fn run_to_convergence(
    partition: &mut Partition,
    data: &[Point],
    params: &LloydParams,
) -> (AssignmentIndex, Convergence) {
    let start = Instant::now();
    let mut snapshot: Vec<Point> = Vec::new();
    let mut convergence = Convergence::ForcedStop {
        iterations: params.max_iters,
    };

    for iteration in 0..params.max_iters {
        partition.step(data, params.metric, params.centroid_rule);

        if partition.same_locations(&snapshot) {
            convergence = Convergence::Converged {
                iterations: iteration + 1,
            };
            break;
        }

        snapshot = partition.centroids();
        debug!(
            iteration = iteration + 1,
            k = partition.k(),
            "centroids moved"
        );
    }

    if !convergence.is_converged() {
        warn!(
            max_iters = params.max_iters,
            k = partition.k(),
            "centroids still moving at the iteration ceiling, stopping"
        );
    }

    partition.clear_members();
    let index = partition.assign(data, params.metric);

    debug!(
        iterations = convergence.iterations(),
        converged = convergence.is_converged(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "convergence loop finished"
    );

    (index, convergence)
}

/// Seed `k` clusters at distinct randomly chosen data points.
///
/// # Panics
///
/// Panics if `data` is empty or `k` is 0.
pub fn initialize_partition<R: Rng + ?Sized>(data: &[Point], k: usize, rng: &mut R) -> Partition {
    Partition::from_centroids(sample_distinct(data, k, rng))
}
