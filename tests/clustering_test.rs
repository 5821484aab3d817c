// ABOUTME: Tests for seeded k-means++ nutritional similarity grouping
// ABOUTME: Label validity, reproducibility, small datasets and zero-variance features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::synthetic_recipes::SyntheticRecipeBuilder;
use pierre_intelligence::config::intelligence::ClusteringConfig;
use pierre_intelligence::recipes::{cluster_records, standardize_features, CleanRecord};

fn uniform_recipe(id: usize) -> CleanRecord {
    CleanRecord {
        id,
        name: format!("Uniform {id}"),
        calories: 400.0,
        protein_g: 20.0,
        carb_g: 50.0,
        fat_g: 12.0,
        ingredients: Vec::new(),
        instructions: Vec::new(),
        image_url: String::new(),
        rating: None,
    }
}

#[test]
fn test_every_record_gets_a_valid_label() {
    let records = SyntheticRecipeBuilder::new(5).random(90);
    let config = ClusteringConfig::default();
    let assignment = cluster_records(&records, &config);

    assert_eq!(assignment.labels.len(), records.len());
    assert_eq!(assignment.centroids.len(), config.cluster_count);
    assert!(assignment.labels.iter().all(|&label| label < config.cluster_count));
    assert_eq!(assignment.cluster_sizes().iter().sum::<usize>(), records.len());
    assert!(assignment.inertia.is_finite());
}

#[test]
fn test_clustering_is_reproducible_for_fixed_seed() {
    let records = SyntheticRecipeBuilder::new(8).random(120);
    let config = ClusteringConfig::default();
    let first = cluster_records(&records, &config);
    let second = cluster_records(&records, &config);
    assert_eq!(first.labels, second.labels);
    assert_eq!(first.centroids, second.centroids);
}

#[test]
fn test_well_separated_groups_are_recovered() {
    let mut builder = SyntheticRecipeBuilder::new(21);
    let mut records = Vec::new();
    for calories in [150.0, 800.0, 1600.0] {
        for _ in 0..10 {
            let mut record = builder.recipe(calories);
            // Identical macros inside a group
            record.protein_g = calories / 20.0;
            record.carb_g = calories / 10.0;
            record.fat_g = calories / 40.0;
            records.push(record);
        }
    }

    let assignment = cluster_records(&records, &ClusteringConfig::default());
    for group in assignment.labels.chunks(10) {
        assert!(group.iter().all(|&label| label == group[0]));
    }
    let mut group_labels: Vec<usize> = assignment.labels.chunks(10).map(|group| group[0]).collect();
    group_labels.sort_unstable();
    group_labels.dedup();
    assert_eq!(group_labels.len(), 3);
    assert!(assignment.inertia < 1e-9);
}

#[test]
fn test_fewer_records_than_clusters_caps_k() {
    let records = SyntheticRecipeBuilder::new(2).with_calories([300.0, 900.0]);
    let assignment = cluster_records(&records, &ClusteringConfig::default());
    assert_eq!(assignment.centroids.len(), 2);
    assert_eq!(assignment.cluster_sizes(), vec![1, 1]);
}

#[test]
fn test_empty_dataset_yields_empty_assignment() {
    let assignment = cluster_records(&[], &ClusteringConfig::default());
    assert!(assignment.labels.is_empty());
    assert!(assignment.centroids.is_empty());
    assert!(assignment.inertia.abs() < f64::EPSILON);
}

#[test]
fn test_zero_variance_features_standardize_to_zero() {
    let records: Vec<CleanRecord> = (0..6).map(uniform_recipe).collect();
    let features = standardize_features(&records);
    assert!(features.iter().flatten().all(|value| value.abs() < f64::EPSILON));

    let assignment = cluster_records(&records, &ClusteringConfig::default());
    assert!(assignment.labels.iter().all(|&label| label == 0));
    assert!(assignment.inertia.abs() < f64::EPSILON);
}

#[test]
fn test_standardized_columns_have_zero_mean() {
    let records = SyntheticRecipeBuilder::new(13).random(50);
    let features = standardize_features(&records);
    for column in 0..4 {
        let mean = features.iter().map(|row| row[column]).sum::<f64>() / features.len() as f64;
        assert!(mean.abs() < 1e-9, "column {column} mean {mean}");
    }
}
