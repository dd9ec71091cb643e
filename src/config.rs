use crate::centroid::CentroidRule;
use crate::distance::Metric;
use crate::error::ClusterError;
use serde::{Deserialize, Serialize};

/// Default number of independent restarts
pub const DEFAULT_RESTARTS: usize = 30;

/// Default ceiling on Lloyd iterations per convergence loop
pub const DEFAULT_MAX_ITERS: usize = 1_000;

/// Configuration for the fixed-K engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Number of clusters
    pub k: usize,

    /// Number of independent random restarts
    pub restarts: usize,

    /// Maximum number of Lloyd iterations before a run is force-stopped
    pub max_iters: usize,

    /// Random seed for centroid initialization
    pub seed: u64,

    /// Distance metric for assignment and scoring
    pub metric: Metric,

    /// Centroid update rule
    pub centroid_rule: CentroidRule,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: 2,
            restarts: DEFAULT_RESTARTS,
            max_iters: DEFAULT_MAX_ITERS,
            seed: 0,
            metric: Metric::Euclidean,
            centroid_rule: CentroidRule::Mean,
        }
    }
}

impl ClusterConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of restarts
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Set the iteration ceiling
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the distance metric
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the centroid rule
    pub fn with_centroid_rule(mut self, rule: CentroidRule) -> Self {
        self.centroid_rule = rule;
        self
    }

    /// Check the configuration against a data set of `n_points` points.
    pub fn validate(&self, n_points: usize) -> Result<(), ClusterError> {
        if self.k == 0 {
            return Err(ClusterError::InvalidK(
                "k must be greater than 0".to_string(),
            ));
        }
        if self.k > n_points {
            return Err(ClusterError::InsufficientData(format!(
                "Number of samples ({}) is less than k ({})",
                n_points, self.k
            )));
        }
        validate_loop(self.restarts, self.max_iters)
    }
}

/// Configuration for the adaptive-K engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    /// Largest K the growth loop may run at
    pub max_k: usize,

    /// Number of independent growth runs, each starting again from K = 2
    pub restarts: usize,

    /// Maximum number of Lloyd iterations per convergence loop
    pub max_iters: usize,

    /// Random seed for initialization and split seeding
    pub seed: u64,

    /// Distance metric for assignment, spread and scoring
    pub metric: Metric,

    /// Centroid update rule
    pub centroid_rule: CentroidRule,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            max_k: 2,
            restarts: DEFAULT_RESTARTS,
            max_iters: DEFAULT_MAX_ITERS,
            seed: 0,
            metric: Metric::Euclidean,
            centroid_rule: CentroidRule::Mean,
        }
    }
}

impl AdaptiveConfig {
    /// Create a new configuration with the specified ceiling on K
    pub fn new(max_k: usize) -> Self {
        Self {
            max_k,
            ..Default::default()
        }
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_centroid_rule(mut self, rule: CentroidRule) -> Self {
        self.centroid_rule = rule;
        self
    }

    /// Check the configuration against a data set of `n_points` points.
    pub fn validate(&self, n_points: usize) -> Result<(), ClusterError> {
        if self.max_k < 2 {
            return Err(ClusterError::InvalidK(format!(
                "max_k must be at least 2, got {}",
                self.max_k
            )));
        }
        if self.max_k > n_points {
            return Err(ClusterError::InsufficientData(format!(
                "Number of samples ({}) is less than max_k ({})",
                n_points, self.max_k
            )));
        }
        validate_loop(self.restarts, self.max_iters)
    }
}

fn validate_loop(restarts: usize, max_iters: usize) -> Result<(), ClusterError> {
    if restarts == 0 {
        return Err(ClusterError::InvalidConfig(
            "restarts must be greater than 0".to_string(),
        ));
    }
    if max_iters == 0 {
        return Err(ClusterError::InvalidConfig(
            "max_iters must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// The four classic program variants as metric/rule/driver presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Euclidean distance, mean centroids, fixed K
    KMeans,
    /// Manhattan distance, median centroids, fixed K
    KMedians,
    /// Euclidean distance, mean centroids, adaptive K
    XMeans,
    /// Manhattan distance, median centroids, adaptive K
    XMedians,
}

impl Variant {
    pub fn metric(self) -> Metric {
        match self {
            Variant::KMeans | Variant::XMeans => Metric::Euclidean,
            Variant::KMedians | Variant::XMedians => Metric::Manhattan,
        }
    }

    pub fn centroid_rule(self) -> CentroidRule {
        match self {
            Variant::KMeans | Variant::XMeans => CentroidRule::Mean,
            Variant::KMedians | Variant::XMedians => CentroidRule::Median,
        }
    }

    /// Whether the variant searches K adaptively
    pub fn is_adaptive(self) -> bool {
        matches!(self, Variant::XMeans | Variant::XMedians)
    }

    /// Fixed-K configuration for this variant
    pub fn fixed(self, k: usize) -> ClusterConfig {
        ClusterConfig::new(k)
            .with_metric(self.metric())
            .with_centroid_rule(self.centroid_rule())
    }

    /// Adaptive configuration for this variant
    pub fn adaptive(self, max_k: usize) -> AdaptiveConfig {
        AdaptiveConfig::new(max_k)
            .with_metric(self.metric())
            .with_centroid_rule(self.centroid_rule())
    }
}
