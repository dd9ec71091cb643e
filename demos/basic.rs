//! Basic example demonstrating kcluster2d usage
//!
//! Run with: cargo run --example basic --release

use kcluster2d::{AdaptiveKEngine, ClusterConfig, Dataset, FixedKEngine, Point, Variant};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== kcluster2d example ===\n");

    // Generate synthetic data: 3 clusters in 2D
    let n_samples = 300;
    let centers = [(-50, -50), (0, 50), (50, -50)];

    println!("Generating {} samples...", n_samples);

    let noise = Array2::random((n_samples, 2), Uniform::new_inclusive(-10, 10));
    let points: Vec<Point> = (0..n_samples)
        .map(|i| {
            let (cx, cy) = centers[i % 3];
            Point::new(cx + noise[[i, 0]], cy + noise[[i, 1]])
        })
        .collect();
    let data = Dataset::new(points).expect("non-empty data set");

    println!("True cluster centers:");
    for (i, (x, y)) in centers.iter().enumerate() {
        println!("  Cluster {}: ({}, {})", i, x, y);
    }
    println!();

    // Fixed K: every restart is reported, pick the best by Dunn Index
    let config = ClusterConfig::new(3).with_restarts(10).with_seed(42);
    let outcome = FixedKEngine::with_config(config)
        .run(&data)
        .expect("Clustering failed");

    let best = outcome.best().expect("at least one restart");
    println!("Best of {} restarts (restart {}):", outcome.records().len(), best.restart);
    for (i, cluster) in best.clusters.iter().enumerate() {
        println!(
            "  Centroid {}: ({}) with {} samples ({:.1}%)",
            i,
            cluster.centroid(),
            cluster.len(),
            (cluster.len() as f64 / n_samples as f64) * 100.0
        );
    }
    println!("  Dunn Index: {:.4}\n", best.score);

    // Adaptive K: let the Dunn Index choose K up to 8
    let engine = AdaptiveKEngine::with_config(Variant::XMedians.adaptive(8).with_restarts(10).with_seed(42));
    let outcome = engine.run(&data).expect("Clustering failed");

    println!("Adaptive growth of the first restart:");
    for record in outcome.runs()[0].history() {
        println!("  K = {:>2}: Dunn Index {:.4}", record.k, record.score);
    }

    let best = outcome.best().expect("at least one restart");
    println!("\nChosen K = {} (Dunn Index {:.4})", best.k, best.score);

    println!("\n=== Done! ===");
}
