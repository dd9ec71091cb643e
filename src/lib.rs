//! # kcluster2d
//!
//! Lloyd-style clustering of 2-D integer points, scored with the Dunn Index.
//!
//! ## Features
//!
//! - **Two metrics**: Euclidean and Manhattan distance
//! - **Two centroid rules**: truncated mean and coordinate-wise median
//! - **Fixed K**: repeated random restarts, every restart reported with its score
//! - **Adaptive K**: grows K from 2 by splitting the least cohesive half of the
//!   clusters and keeps the best-scoring partition
//! - **Bounded iteration**: a configurable iteration ceiling, reported as a
//!   forced stop rather than a silent convergence
//! - **ndarray compatible**: build a data set from any `(n, 2)` `i32` array
//!
//! The classic k-means, k-medians, x-means and x-medians programs are
//! available as [`Variant`] presets.
//!
//! ## Example
//!
//! ```rust
//! use kcluster2d::{ClusterConfig, Dataset, FixedKEngine, Metric, CentroidRule};
//!
//! let data = Dataset::parse("0 0\n1 0\n0 1\n20 20\n21 20\n20 21\n").unwrap();
//!
//! let config = ClusterConfig::new(2)
//!     .with_restarts(10)
//!     .with_seed(42)
//!     .with_metric(Metric::Manhattan)
//!     .with_centroid_rule(CentroidRule::Median);
//!
//! let outcome = FixedKEngine::with_config(config).run(&data).unwrap();
//! let best = outcome.best().unwrap();
//! assert_eq!(best.sizes(), vec![3, 3]);
//! ```
//!
//! ## Adaptive K
//!
//! ```rust
//! use kcluster2d::{AdaptiveKEngine, Dataset, Variant};
//! use ndarray::array;
//!
//! let data = array![[0, 0], [1, 1], [40, 0], [41, 1], [0, 40], [1, 41]];
//! let data = Dataset::from_array(&data.view()).unwrap();
//!
//! let engine = AdaptiveKEngine::with_config(Variant::XMeans.adaptive(4).with_restarts(5));
//! let outcome = engine.run(&data).unwrap();
//! assert!(outcome.best().unwrap().k <= 4);
//! ```

mod adaptive;
mod algorithm;
mod centroid;
mod cluster;
mod config;
mod dataset;
mod distance;
mod error;
mod fixed;
mod partition;
mod point;
mod quality;
mod record;
mod sampling;

pub use adaptive::{split_worst_half, AdaptiveKEngine, AdaptiveOutcome, GrowthRun, START_K};
pub use algorithm::{initialize_partition, run_to_convergence, LloydParams};
pub use centroid::CentroidRule;
pub use cluster::Cluster;
pub use config::{AdaptiveConfig, ClusterConfig, Variant, DEFAULT_MAX_ITERS, DEFAULT_RESTARTS};
pub use dataset::Dataset;
pub use distance::{euclidean, manhattan, nearest_centroid, Metric};
pub use error::ClusterError;
pub use fixed::{FixedKEngine, FixedOutcome};
pub use partition::{locations_match, AssignmentIndex, Partition};
pub use point::Point;
pub use quality::{dunn_index, max_spread, min_separation};
pub use record::{best_position, best_record, Convergence, RunRecord};
pub use sampling::{random_seed, restart_rng, sample_distinct};
