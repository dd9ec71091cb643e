use crate::algorithm::{initialize_partition, run_to_convergence, LloydParams};
use crate::config::ClusterConfig;
use crate::dataset::Dataset;
use crate::error::ClusterError;
use crate::quality::dunn_index;
use crate::record::{best_record, RunRecord};
use crate::sampling::restart_rng;
use serde::Serialize;
use tracing::info;

/// Lloyd clustering with a caller-chosen number of clusters.
///
/// Every restart seeds `k` clusters at distinct random data points, iterates
/// to convergence and scores the result with the Dunn Index. All restarts are
/// reported; picking one is left to the caller.
///
/// # Example
///
/// ```
/// use kcluster2d::{ClusterConfig, Dataset, FixedKEngine, Point};
///
/// let data = Dataset::new(vec![
///     Point::new(0, 0),
///     Point::new(1, 0),
///     Point::new(10, 0),
///     Point::new(11, 0),
/// ])
/// .unwrap();
///
/// let engine = FixedKEngine::with_config(ClusterConfig::new(2).with_restarts(5));
/// let outcome = engine.run(&data).unwrap();
///
/// assert_eq!(outcome.records().len(), 5);
/// assert!(outcome.best().unwrap().score > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FixedKEngine {
    config: ClusterConfig,
}

impl FixedKEngine {
    /// Create an engine for `k` clusters with default settings.
    pub fn new(k: usize) -> Self {
        Self {
            config: ClusterConfig::new(k),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: ClusterConfig) -> Self {
        Self { config }
    }

    /// Run every restart on `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not fit the data set
    /// (k of 0, k larger than the data set, zero restarts or iterations).
    pub fn run(&self, data: &Dataset) -> Result<FixedOutcome, ClusterError> {
        self.config.validate(data.len())?;

        let records = (0..self.config.restarts)
            .map(|restart| self.restart_record(data, restart))
            .collect();

        Ok(FixedOutcome {
            seed: self.config.seed,
            records,
        })
    }

    /// Run a single restart.
    ///
    /// Restart `r` always draws from the same random stream for a given seed,
    /// so this reproduces record `r` of `run`.
    ///
    /// # Errors
    ///
    /// Same conditions as `run`.
    pub fn run_restart(&self, data: &Dataset, restart: usize) -> Result<RunRecord, ClusterError> {
        self.config.validate(data.len())?;
        Ok(self.restart_record(data, restart))
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    fn restart_record(&self, data: &Dataset, restart: usize) -> RunRecord {
        let mut rng = restart_rng(self.config.seed, restart);
        let mut partition = initialize_partition(data, self.config.k, &mut rng);

        let (index, convergence) = run_to_convergence(&mut partition, data, &self.params());
        let score = dunn_index(data, &partition, &index, self.config.metric);

        info!(
            restart,
            k = self.config.k,
            iterations = convergence.iterations(),
            converged = convergence.is_converged(),
            score,
            "fixed-k run finished"
        );

        RunRecord {
            k: partition.k(),
            restart,
            clusters: partition.into_clusters(),
            score,
            convergence,
        }
    }

    fn params(&self) -> LloydParams {
        LloydParams {
            metric: self.config.metric,
            centroid_rule: self.config.centroid_rule,
            max_iters: self.config.max_iters,
        }
    }
}

/// Records of every fixed-K restart, in restart order
#[derive(Debug, Clone, Serialize)]
pub struct FixedOutcome {
    seed: u64,
    records: Vec<RunRecord>,
}

impl FixedOutcome {
    /// Seed the run was made with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// Record of the final restart.
    ///
    /// Legacy single-result reporting; it ignores the scores of every
    /// earlier restart. Prefer `best`.
    pub fn last(&self) -> Option<&RunRecord> {
        self.records.last()
    }

    /// Highest-scoring restart; the earliest wins a tie.
    pub fn best(&self) -> Option<&RunRecord> {
        best_record(&self.records)
    }

    /// Take ownership of the records, in restart order.
    pub fn into_records(self) -> Vec<RunRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centroid::CentroidRule;
    use crate::distance::Metric;
    use crate::point::Point;

    fn blobs() -> Dataset {
        let mut points = Vec::new();
        for (cx, cy) in [(0, 0), (50, 0), (0, 50)] {
            for dx in 0..3 {
                for dy in 0..3 {
                    points.push(Point::new(cx + dx, cy + dy));
                }
            }
        }
        Dataset::new(points).unwrap()
    }

    #[test]
    fn test_engine_new() {
        let engine = FixedKEngine::new(3);
        assert_eq!(engine.k(), 3);
        assert_eq!(engine.config().restarts, 30);
    }

    #[test]
    fn test_run_reports_every_restart() {
        let data = blobs();
        let engine = FixedKEngine::with_config(ClusterConfig::new(3).with_restarts(4).with_seed(9));

        let outcome = engine.run(&data).unwrap();

        assert_eq!(outcome.seed(), 9);
        assert_eq!(outcome.records().len(), 4);
        for (i, record) in outcome.records().iter().enumerate() {
            assert_eq!(record.restart, i);
            assert_eq!(record.k, 3);
            assert_eq!(record.sizes().iter().sum::<usize>(), data.len());
            assert!(record.convergence.is_converged());
        }
        assert_eq!(outcome.last().unwrap().restart, 3);
    }

    #[test]
    fn test_best_finds_the_blobs() {
        let data = blobs();
        let engine = FixedKEngine::with_config(
            ClusterConfig::new(3)
                .with_restarts(30)
                .with_seed(1)
                .with_metric(Metric::Manhattan)
                .with_centroid_rule(CentroidRule::Median),
        );

        let outcome = engine.run(&data).unwrap();
        let best = outcome.best().unwrap();

        let mut centroids = best.centroids();
        centroids.sort();
        assert_eq!(
            centroids,
            vec![Point::new(1, 1), Point::new(1, 51), Point::new(51, 1)]
        );
        assert_eq!(best.sizes(), vec![9, 9, 9]);
    }

    #[test]
    fn test_run_restart_matches_run() {
        let data = blobs();
        let engine = FixedKEngine::with_config(ClusterConfig::new(2).with_restarts(3).with_seed(77));

        let outcome = engine.run(&data).unwrap();
        let again = engine.run_restart(&data, 2).unwrap();

        assert_eq!(outcome.records()[2].centroids(), again.centroids());
        assert_eq!(outcome.records()[2].score, again.score);
    }

    #[test]
    fn test_invalid_k_rejected() {
        let data = blobs();
        assert!(matches!(
            FixedKEngine::new(0).run(&data),
            Err(ClusterError::InvalidK(_))
        ));
        assert!(matches!(
            FixedKEngine::new(data.len() + 1).run(&data),
            Err(ClusterError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_run_restart_rejects_invalid_k() {
        let data = blobs();
        assert!(matches!(
            FixedKEngine::new(0).run_restart(&data, 0),
            Err(ClusterError::InvalidK(_))
        ));
        assert!(matches!(
            FixedKEngine::with_config(ClusterConfig::new(2).with_max_iters(0)).run_restart(&data, 0),
            Err(ClusterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_into_records_keeps_restart_order() {
        let data = blobs();
        let engine = FixedKEngine::with_config(ClusterConfig::new(3).with_restarts(3).with_seed(4));

        let outcome = engine.run(&data).unwrap();
        let best_restart = outcome.best().unwrap().restart;
        let records = outcome.into_records();

        assert_eq!(records.len(), 3);
        assert!(records.iter().map(|r| r.restart).eq(0..3));
        assert!(records.iter().all(|r| r.score <= records[best_restart].score));
    }
}
