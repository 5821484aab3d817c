// ABOUTME: Criterion benchmarks for the recipe pipeline
// ABOUTME: Measures sanitization, clustering, candidate selection and full meal planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal planning pipeline.
//!
//! Datasets are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_raw_recipes, RecipeBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_intelligence::recipes::{
    cluster_records, filter_candidates, plan_meals, sanitize_records, score_candidates,
    select_meals, AnnotatedRecord, CleanRecord, FieldNormalizer, MealPlanRequest, MealType,
};
use pierre_intelligence::{Goal, MealPlannerConfig};

const DAILY_CALORIES: f64 = 2400.0;

fn clean_dataset(size: RecipeBatchSize, config: &MealPlannerConfig) -> Vec<CleanRecord> {
    let normalizer = FieldNormalizer::new(&config.normalizer);
    sanitize_records(&generate_raw_recipes(size), &normalizer)
}

/// Benchmark raw row normalization and sanitization
fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");
    let config = MealPlannerConfig::default();
    let normalizer = FieldNormalizer::new(&config.normalizer);

    for size in [RecipeBatchSize::Small, RecipeBatchSize::Medium] {
        let raw = generate_raw_recipes(size);
        group.throughput(Throughput::Elements(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.label()), &raw, |b, raw| {
            b.iter(|| sanitize_records(black_box(raw), &normalizer));
        });
    }

    group.finish();
}

/// Benchmark seeded k-means++ with restarts
fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");
    group.sample_size(20);
    let config = MealPlannerConfig::default();

    for size in [RecipeBatchSize::Small, RecipeBatchSize::Medium] {
        let records = clean_dataset(size, &config);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size.label()),
            &records,
            |b, records| {
                b.iter(|| cluster_records(black_box(records), &config.clustering));
            },
        );
    }

    group.finish();
}

/// Benchmark filtering, scoring and selection without clustering
fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let config = MealPlannerConfig::default();
    let records = clean_dataset(RecipeBatchSize::Medium, &config);
    let annotated: Vec<AnnotatedRecord<'_>> = records
        .iter()
        .map(|record| AnnotatedRecord::new(record, 0))
        .collect();
    let meal_types = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    group.bench_function("filter_score_select_3_meals", |b| {
        b.iter(|| {
            let candidates = filter_candidates(
                black_box(&annotated),
                DAILY_CALORIES / 3.0,
                meal_types.len(),
                &config.filter,
            );
            let mut scored = candidates.records;
            score_candidates(&mut scored, Goal::MuscleGain, &config.scoring);
            select_meals(scored, &meal_types, black_box(7), &config.selection)
        });
    });

    group.finish();
}

/// Benchmark the whole per-request pipeline
fn bench_plan_meals(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_meals");
    group.sample_size(20);
    let config = MealPlannerConfig::default();

    for size in [RecipeBatchSize::Medium, RecipeBatchSize::Large] {
        let records = clean_dataset(size, &config);
        let request = MealPlanRequest {
            goal: Goal::WeightLoss,
            meal_count: 4,
            day_seed: 3,
            fill_missing_slots: false,
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(size.label()),
            &records,
            |b, records| {
                b.iter(|| plan_meals(black_box(records), DAILY_CALORIES, &request, &config));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sanitize,
    bench_clustering,
    bench_selection,
    bench_plan_meals
);
criterion_main!(benches);
