// ABOUTME: Nutritional similarity grouping with seeded k-means++ on standardized macros
// ABOUTME: Partitions the working dataset into k clusters reproducibly for a fixed seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Similarity Grouper
//!
//! Features are calories, protein, carbohydrate and fat, each z-scored over
//! the working dataset with the sample standard deviation. A feature whose
//! deviation is zero (or undefined for a single record) contributes zero.
//!
//! Clustering runs `restarts` independent k-means++ initializations from one
//! `ChaCha8Rng` stream and keeps the run with the lowest inertia, so a given
//! dataset and seed always produce the same labels.

use super::models::CleanRecord;
use crate::config::intelligence::ClusteringConfig;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Number of macro features per record
pub const FEATURE_COUNT: usize = 4;

/// One standardized feature vector
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Result of clustering the working dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    /// Cluster label per record, aligned with the input order
    pub labels: Vec<usize>,
    /// Final centroids in standardized feature space
    pub centroids: Vec<FeatureVector>,
    /// Within-cluster sum of squared distances
    pub inertia: f64,
}

impl ClusterAssignment {
    /// Number of records per cluster, indexed by label
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.centroids.len()];
        for &label in &self.labels {
            if let Some(size) = sizes.get_mut(label) {
                *size += 1;
            }
        }
        sizes
    }
}

const fn raw_features(record: &CleanRecord) -> FeatureVector {
    [
        record.calories,
        record.protein_g,
        record.carb_g,
        record.fat_g,
    ]
}

/// Z-score the macro features of every record
///
/// Uses the sample standard deviation (n - 1 denominator). Columns with a
/// zero or undefined deviation become all zeros.
#[must_use]
pub fn standardize_features(records: &[CleanRecord]) -> Vec<FeatureVector> {
    let rows: Vec<FeatureVector> = records.iter().map(raw_features).collect();
    let n = rows.len();
    if n == 0 {
        return rows;
    }

    let mut means = [0.0; FEATURE_COUNT];
    for row in &rows {
        for (mean, value) in means.iter_mut().zip(row) {
            *mean += value;
        }
    }
    for mean in &mut means {
        *mean /= n as f64;
    }

    let mut std_devs = [0.0; FEATURE_COUNT];
    if n > 1 {
        for row in &rows {
            for (feature, value) in row.iter().enumerate() {
                std_devs[feature] += (value - means[feature]).powi(2);
            }
        }
        for std_dev in &mut std_devs {
            *std_dev = (*std_dev / (n - 1) as f64).sqrt();
        }
    }

    rows.iter()
        .map(|row| {
            let mut scaled = [0.0; FEATURE_COUNT];
            for feature in 0..FEATURE_COUNT {
                let std_dev = std_devs[feature];
                scaled[feature] = if std_dev > 0.0 && std_dev.is_finite() {
                    (row[feature] - means[feature]) / std_dev
                } else {
                    0.0
                };
            }
            scaled
        })
        .collect()
}

fn squared_distance(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Index and squared distance of the nearest centroid (lowest index on ties)
fn nearest_centroid(point: &FeatureVector, centroids: &[FeatureVector]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(point, centroid);
        if distance < best.1 {
            best = (index, distance);
        }
    }
    best
}

/// k-means++ seeding: first center uniform, then proportional to squared distance
fn seed_centroids(points: &[FeatureVector], k: usize, rng: &mut ChaCha8Rng) -> Vec<FeatureVector> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    let mut distances: Vec<f64> = points
        .iter()
        .map(|point| squared_distance(point, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = distances.iter().sum();
        let chosen = if total > 0.0 {
            let target = rng.gen_range(0.0..total);
            let mut cumulative = 0.0;
            distances
                .iter()
                .position(|distance| {
                    cumulative += distance;
                    cumulative > target
                })
                .unwrap_or(points.len() - 1)
        } else {
            rng.gen_range(0..points.len())
        };

        let centroid = points[chosen];
        for (distance, point) in distances.iter_mut().zip(points) {
            *distance = distance.min(squared_distance(point, &centroid));
        }
        centroids.push(centroid);
    }
    centroids
}

/// Lloyd iterations from the given centroids until assignments stabilize
fn lloyd(
    points: &[FeatureVector],
    mut centroids: Vec<FeatureVector>,
    max_iterations: usize,
) -> ClusterAssignment {
    let k = centroids.len();
    let mut labels = vec![usize::MAX; points.len()];

    for _ in 0..max_iterations.max(1) {
        let mut changed = false;
        for (label, point) in labels.iter_mut().zip(points) {
            let (nearest, _) = nearest_centroid(point, &centroids);
            if *label != nearest {
                *label = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![[0.0; FEATURE_COUNT]; k];
        let mut counts = vec![0_usize; k];
        for (&label, point) in labels.iter().zip(points) {
            counts[label] += 1;
            for (sum, value) in sums[label].iter_mut().zip(point) {
                *sum += value;
            }
        }
        for ((centroid, sum), count) in centroids.iter_mut().zip(&sums).zip(&counts) {
            // An emptied cluster keeps its previous centroid
            if *count > 0 {
                for (coordinate, total) in centroid.iter_mut().zip(sum) {
                    *coordinate = total / *count as f64;
                }
            }
        }
    }

    let inertia = points
        .iter()
        .zip(&labels)
        .map(|(point, &label)| squared_distance(point, &centroids[label]))
        .sum();

    ClusterAssignment {
        labels,
        centroids,
        inertia,
    }
}

/// Partition records into nutritional similarity clusters
///
/// The effective cluster count is `min(cluster_count, records.len())`; an
/// empty dataset yields an empty assignment.
#[must_use]
pub fn cluster_records(records: &[CleanRecord], config: &ClusteringConfig) -> ClusterAssignment {
    let points = standardize_features(records);
    let k = config.cluster_count.min(points.len());
    if k == 0 {
        return ClusterAssignment {
            labels: Vec::new(),
            centroids: Vec::new(),
            inertia: 0.0,
        };
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut best: Option<ClusterAssignment> = None;
    for _ in 0..config.restarts.max(1) {
        let centroids = seed_centroids(&points, k, &mut rng);
        let candidate = lloyd(&points, centroids, config.max_iterations);
        if best
            .as_ref()
            .is_none_or(|current| candidate.inertia < current.inertia)
        {
            best = Some(candidate);
        }
    }

    let assignment = best.unwrap_or_else(|| lloyd(&points, vec![points[0]; k], 1));
    debug!(
        records = records.len(),
        clusters = k,
        inertia = assignment.inertia,
        "Clustered working dataset"
    );
    assignment
}
