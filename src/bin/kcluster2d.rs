//! Command-line front end for kcluster2d.
//!
//! Reads a data set, runs the fixed-K or adaptive-K engine and prints the
//! report. Input is either text (one `x y` pair per line) or a `.npy` file
//! holding an `(n, 2)` `i32` array.
//!
//! ## Usage
//!
//! ```bash
//! # k-means with 4 clusters, 30 restarts
//! kcluster2d data/points.txt --variant kmeans -k 4
//!
//! # x-medians growing up to 10 clusters, reproducible
//! kcluster2d data/points.txt --variant xmedians --max-k 10 --seed 1234
//!
//! # Mix metric and rule freely, JSON output, also written to a file
//! kcluster2d data/points.npy -k 3 --metric manhattan --rule mean \
//!     --format json --output-dir outputs
//!
//! # Debug logging
//! RUST_LOG=kcluster2d=debug kcluster2d data/points.txt -k 3
//! ```

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use ndarray::Array2;
use ndarray_npy::ReadNpyExt;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use kcluster2d::{
    random_seed, AdaptiveConfig, AdaptiveKEngine, AdaptiveOutcome, CentroidRule, ClusterConfig,
    Dataset, FixedKEngine, FixedOutcome, Metric, RunRecord, Variant, DEFAULT_MAX_ITERS,
    DEFAULT_RESTARTS,
};

/// Program preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    /// Euclidean distance, mean centroids, fixed K.
    Kmeans,
    /// Manhattan distance, median centroids, fixed K.
    Kmedians,
    /// Euclidean distance, mean centroids, adaptive K.
    Xmeans,
    /// Manhattan distance, median centroids, adaptive K.
    Xmedians,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Kmeans => Variant::KMeans,
            VariantArg::Kmedians => Variant::KMedians,
            VariantArg::Xmeans => Variant::XMeans,
            VariantArg::Xmedians => Variant::XMedians,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    Euclidean,
    Manhattan,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Euclidean => Metric::Euclidean,
            MetricArg::Manhattan => Metric::Manhattan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    Mean,
    Median,
}

impl From<RuleArg> for CentroidRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Mean => CentroidRule::Mean,
            RuleArg::Median => CentroidRule::Median,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per restart.
    Text,
    /// The full outcome as JSON.
    Json,
}

/// Cluster 2-D integer points with k-means / k-medians and Dunn-Index scoring.
#[derive(Debug, Parser)]
#[command(name = "kcluster2d", version, about)]
struct Args {
    /// Data set: text with one "x y" pair per line, or a .npy (n, 2) i32 array.
    input: PathBuf,

    /// Program preset. Defaults to kmeans, or xmeans when --max-k is given.
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Number of clusters (fixed-K variants).
    #[arg(short = 'k', long)]
    k: Option<usize>,

    /// Largest number of clusters to grow to (adaptive variants).
    #[arg(long)]
    max_k: Option<usize>,

    /// Override the preset's distance metric.
    #[arg(long, value_enum)]
    metric: Option<MetricArg>,

    /// Override the preset's centroid rule.
    #[arg(long, value_enum)]
    rule: Option<RuleArg>,

    /// Independent restarts.
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    restarts: usize,

    /// Iteration ceiling per convergence loop.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERS)]
    max_iters: usize,

    /// Random seed; a fresh one is drawn and reported when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the report into this directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let data = load_dataset(&args.input)?;
    info!(points = data.len(), input = %args.input.display(), "loaded data set");

    let variant: Variant = match (args.variant, args.max_k) {
        (Some(v), _) => v.into(),
        (None, Some(_)) => Variant::XMeans,
        (None, None) => Variant::KMeans,
    };
    let metric = args.metric.map(Metric::from).unwrap_or(variant.metric());
    let rule = args.rule.map(CentroidRule::from).unwrap_or(variant.centroid_rule());
    let seed = args.seed.unwrap_or_else(random_seed);

    let (report, file_name) = if variant.is_adaptive() {
        let Some(max_k) = args.max_k else {
            bail!("adaptive variants need --max-k");
        };
        let config = AdaptiveConfig::new(max_k)
            .with_metric(metric)
            .with_centroid_rule(rule)
            .with_restarts(args.restarts)
            .with_max_iters(args.max_iters)
            .with_seed(seed);
        let outcome = AdaptiveKEngine::with_config(config).run(&data)?;
        let report = match args.format {
            Format::Text => adaptive_report(&outcome),
            Format::Json => serde_json::to_string_pretty(&outcome)?,
        };
        (report, format!("{}.txt", outcome.seed()))
    } else {
        let Some(k) = args.k else {
            bail!("fixed-K variants need -k");
        };
        let config = ClusterConfig::new(k)
            .with_metric(metric)
            .with_centroid_rule(rule)
            .with_restarts(args.restarts)
            .with_max_iters(args.max_iters)
            .with_seed(seed);
        let outcome = FixedKEngine::with_config(config).run(&data)?;
        let report = match args.format {
            Format::Text => fixed_report(&outcome),
            Format::Json => serde_json::to_string_pretty(&outcome)?,
        };
        (report, format!("{}_{}.txt", input_stem(&args.input), k))
    };

    print!("{}", report);
    if !report.ends_with('\n') {
        println!();
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(file_name);
        fs::write(&path, &report).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), seed, "report written");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let is_npy = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("npy"));

    if is_npy {
        let reader = BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        );
        let array: Array2<i32> = Array2::read_npy(reader)
            .with_context(|| format!("Failed to read {} as an i32 array", path.display()))?;
        Ok(Dataset::from_array(&array.view())?)
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Dataset::parse(&text)?)
    }
}

fn input_stem(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or("data")
        .to_string()
}

/// Centroids as "x y x y ..." followed by the score, one restart per line.
fn fixed_report(outcome: &FixedOutcome) -> String {
    let mut lines: Vec<String> = outcome
        .records()
        .iter()
        .map(|record| {
            let centroids: String = record
                .centroids()
                .iter()
                .map(|centroid| format!("{} ", centroid))
                .collect();
            format!("{}{}", centroids, record.score)
        })
        .collect();
    lines.extend(footer(outcome.best(), outcome.seed()));
    lines.join("\n") + "\n"
}

/// Winner of every growth run, one per line.
fn adaptive_report(outcome: &AdaptiveOutcome) -> String {
    let mut lines: Vec<String> = outcome
        .runs()
        .iter()
        .map(|run| summary(run.winner()))
        .collect();
    lines.extend(footer(outcome.best(), outcome.seed()));
    lines.join("\n") + "\n"
}

fn footer(best: Option<&RunRecord>, seed: u64) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(best) = best {
        lines.push(format!("# best restart {}: {}", best.restart, summary(best)));
    }
    lines.push(format!("# seed {}", seed));
    lines
}

fn summary(record: &RunRecord) -> String {
    let centroids: Vec<String> = record.centroids().iter().map(ToString::to_string).collect();
    let mut line = format!(
        "K: {} V: [{}] Dunn Index: {}",
        record.k,
        centroids.join(", "),
        record.score
    );
    if !record.convergence.is_converged() {
        line.push_str(&format!(
            " (stopped after {} iterations)",
            record.convergence.iterations()
        ));
    }
    line
}
