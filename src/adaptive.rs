use crate::algorithm::{initialize_partition, run_to_convergence, LloydParams};
use crate::cluster::Cluster;
use crate::config::AdaptiveConfig;
use crate::dataset::Dataset;
use crate::distance::Metric;
use crate::error::ClusterError;
use crate::partition::Partition;
use crate::point::Point;
use crate::quality::dunn_index;
use crate::record::{best_position, best_record, RunRecord};
use crate::sampling::{restart_rng, sample_distinct};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// K at which every growth run starts
pub const START_K: usize = 2;

/// Lloyd clustering that grows K by splitting its least cohesive clusters.
///
/// A growth run starts with two clusters. After each convergence the partition
/// is scored and recorded, then the half of the clusters with the largest
/// internal spread are each replaced by two clusters seeded from their own
/// members. Growth stops once K exceeds `max_k`, and the best-scoring record
/// of the run wins.
#[derive(Debug, Clone)]
pub struct AdaptiveKEngine {
    config: AdaptiveConfig,
}

impl AdaptiveKEngine {
    /// Create an engine growing up to `max_k` clusters with default settings.
    pub fn new(max_k: usize) -> Self {
        Self {
            config: AdaptiveConfig::new(max_k),
        }
    }

    pub fn with_config(config: AdaptiveConfig) -> Self {
        Self { config }
    }

    /// Run every restart on `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_k` is below 2 or above the data set size, or if
    /// restarts or iterations are zero.
    pub fn run(&self, data: &Dataset) -> Result<AdaptiveOutcome, ClusterError> {
        self.config.validate(data.len())?;

        let runs = (0..self.config.restarts)
            .map(|restart| self.growth_run(data, restart))
            .collect();

        Ok(AdaptiveOutcome {
            seed: self.config.seed,
            runs,
        })
    }

    /// Run a single growth run.
    ///
    /// # Errors
    ///
    /// Same conditions as `run`.
    pub fn grow(&self, data: &Dataset, restart: usize) -> Result<GrowthRun, ClusterError> {
        self.config.validate(data.len())?;
        Ok(self.growth_run(data, restart))
    }

    /// Get the ceiling on K.
    pub fn max_k(&self) -> usize {
        self.config.max_k
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    fn growth_run(&self, data: &Dataset, restart: usize) -> GrowthRun {
        let mut rng = restart_rng(self.config.seed, restart);
        let params = LloydParams {
            metric: self.config.metric,
            centroid_rule: self.config.centroid_rule,
            max_iters: self.config.max_iters,
        };

        let mut partition = initialize_partition(data, START_K, &mut rng);
        let mut history = Vec::new();

        loop {
            let (index, convergence) = run_to_convergence(&mut partition, data, &params);
            let score = dunn_index(data, &partition, &index, self.config.metric);

            debug!(
                restart,
                k = partition.k(),
                iterations = convergence.iterations(),
                score,
                "growth step converged"
            );

            history.push(RunRecord {
                k: partition.k(),
                restart,
                clusters: partition.clusters().to_vec(),
                score,
                convergence,
            });

            let (next, splits) = split_worst_half(partition, data, self.config.metric, &mut rng);
            if splits == 0 || next.k() > self.config.max_k {
                break;
            }
            partition = next;
        }

        let run = GrowthRun::new(restart, history);
        info!(
            restart,
            best_k = run.winner().k,
            score = run.winner().score,
            steps = run.history().len(),
            "adaptive run finished"
        );
        run
    }
}

/// Split the least cohesive half of the clusters in two.
///
/// Clusters are ranked by spread, largest first (stable on ties), and the first
/// `k / 2` of that ranking are split; for an odd K the middle cluster is left
/// alone. Unsplit clusters keep their relative order and centroids; the new
/// pairs are appended in ranking order. Each pair is seeded from the split
/// cluster's members, or from `data` when it has none.
///
/// Returns the new partition and the number of splits performed, which is also
/// how much K grew.
pub fn split_worst_half<R: Rng + ?Sized>(
    partition: Partition,
    data: &[Point],
    metric: Metric,
    rng: &mut R,
) -> (Partition, usize) {
    let clusters = partition.into_clusters();

    let mut ranked: Vec<(usize, f64)> = clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| (i, cluster.spread(metric)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let n_splits = clusters.len() / 2;
    let mut selected = vec![false; clusters.len()];
    let split_order: Vec<usize> = ranked[..n_splits].iter().map(|&(i, _)| i).collect();
    for &i in &split_order {
        selected[i] = true;
    }

    let mut next: Vec<Cluster> = clusters
        .iter()
        .zip(&selected)
        .filter(|(_, &chosen)| !chosen)
        .map(|(cluster, _)| Cluster::new(cluster.centroid()))
        .collect();

    for &i in &split_order {
        let parent = &clusters[i];
        let pool = if parent.is_empty() {
            warn!(
                centroid = %parent.centroid(),
                "splitting a cluster without members, seeding from the whole data set"
            );
            data
        } else {
            parent.members()
        };

        for seed in sample_distinct(pool, 2, rng) {
            next.push(Cluster::new(seed));
        }

        debug!(
            centroid = %parent.centroid(),
            members = parent.len(),
            "split cluster"
        );
    }

    (Partition::from_clusters(next), n_splits)
}

/// Every record of one growth run plus its winner
#[derive(Debug, Clone, Serialize)]
pub struct GrowthRun {
    restart: usize,
    history: Vec<RunRecord>,
    winner: usize,
}

impl GrowthRun {
    fn new(restart: usize, history: Vec<RunRecord>) -> Self {
        let winner = best_position(&history).unwrap_or(0);
        Self {
            restart,
            history,
            winner,
        }
    }

    pub fn restart(&self) -> usize {
        self.restart
    }

    /// One record per K visited, in growth order
    pub fn history(&self) -> &[RunRecord] {
        &self.history
    }

    /// Highest-scoring record of the run; the earliest K wins a tie
    pub fn winner(&self) -> &RunRecord {
        &self.history[self.winner]
    }
}

/// Growth runs of every adaptive restart, in restart order
#[derive(Debug, Clone, Serialize)]
pub struct AdaptiveOutcome {
    seed: u64,
    runs: Vec<GrowthRun>,
}

impl AdaptiveOutcome {
    /// Seed the run was made with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn runs(&self) -> &[GrowthRun] {
        &self.runs
    }

    /// Best winner over all restarts; the earliest wins a tie
    pub fn best(&self) -> Option<&RunRecord> {
        best_record(self.runs.iter().map(GrowthRun::winner))
    }
}
