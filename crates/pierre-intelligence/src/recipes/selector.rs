// ABOUTME: Day-seeded meal selector picking one top-scoring recipe per meal slot
// ABOUTME: Double seeded shuffle, per-slot window offsets and an explicit SelectionState accumulator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Selector
//!
//! For a fixed candidate set and `day_seed` the selection is bit-identical
//! across runs; different day seeds reorder the candidates and move the
//! inspected windows, producing a different but reproducible plan.
//!
//! ## Seed derivation
//!
//! When `day_seed > 0` the candidates are permuted twice with
//! `ChaCha8Rng::seed_from_u64(day_seed * 42 + 17)` and then
//! `ChaCha8Rng::seed_from_u64(day_seed * 73 + 29)` (wrapping arithmetic,
//! multipliers configurable). With `n` candidates the window start of slot
//! `i` is `(31d mod n + 47d mod n + 41i + 19d) mod n`.

use super::models::{round_to, AnnotatedRecord, MealType, SelectedMeal};
use crate::config::intelligence::SelectionConfig;
use pierre_core::constants::dataset::DEFAULT_RECIPE_CATEGORY;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::debug;

/// Recipes already chosen within one request
///
/// Grows monotonically across slots and remembers insertion order so the most
/// recent choices can still be excluded after relaxation.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    order: Vec<usize>,
    used: HashSet<usize>,
}

impl SelectionState {
    /// Empty state for a new request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a chosen recipe id
    pub fn record(&mut self, id: usize) {
        if self.used.insert(id) {
            self.order.push(id);
        }
    }

    /// Whether a recipe id was already chosen
    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        self.used.contains(&id)
    }

    /// The `count` most recently chosen ids, oldest first
    #[must_use]
    pub fn recent(&self, count: usize) -> &[usize] {
        &self.order[self.order.len().saturating_sub(count)..]
    }

    /// All chosen ids in insertion order
    #[must_use]
    pub fn used_ids(&self) -> &[usize] {
        &self.order
    }

    /// Number of chosen ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was chosen yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Day-level window offsets, computed once per request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOffsets {
    day_seed: u64,
    base: u64,
    secondary: u64,
    candidate_count: u64,
}

impl DayOffsets {
    /// Derive offsets for `candidate_count` candidates
    #[must_use]
    pub fn new(day_seed: u64, candidate_count: usize, config: &SelectionConfig) -> Self {
        let n = candidate_count as u64;
        let (base, secondary) = if n == 0 || day_seed == 0 {
            (0, 0)
        } else {
            (
                day_seed.wrapping_mul(config.base_offset_multiplier) % n,
                day_seed.wrapping_mul(config.secondary_offset_multiplier) % n,
            )
        };
        Self {
            day_seed,
            base,
            secondary,
            candidate_count: n,
        }
    }

    /// Window start for a meal slot, modulo the unfiltered candidate count
    #[must_use]
    pub fn slot_offset(&self, slot_index: usize, config: &SelectionConfig) -> usize {
        if self.candidate_count == 0 {
            return 0;
        }
        let offset = self
            .base
            .wrapping_add((slot_index as u64).wrapping_mul(config.slot_stride))
            .wrapping_add(self.secondary)
            .wrapping_add(self.day_seed.wrapping_mul(config.day_stride));
        (offset % self.candidate_count) as usize
    }
}

/// Apply the two seeded permutations (no-op for `day_seed == 0`)
pub fn shuffle_candidates(
    candidates: &mut [AnnotatedRecord<'_>],
    day_seed: u64,
    config: &SelectionConfig,
) {
    if day_seed == 0 {
        return;
    }
    for derivation in [config.first_shuffle, config.second_shuffle] {
        let mut rng = ChaCha8Rng::seed_from_u64(derivation.derive(day_seed));
        candidates.shuffle(&mut rng);
    }
}

/// Synthetic quality score used when a recipe has no native rating
#[must_use]
pub fn synthetic_quality_score(protein_density: f64, config: &SelectionConfig) -> f64 {
    (protein_density * config.quality_density_factor + config.quality_base)
        .clamp(config.quality_min, config.quality_max)
}

/// Build the caller-facing meal for a chosen candidate
#[must_use]
pub fn to_selected_meal(
    candidate: &AnnotatedRecord<'_>,
    meal_type: MealType,
    slot_index: usize,
    config: &SelectionConfig,
) -> SelectedMeal {
    let record = candidate.record;
    let protein_density = record.protein_density();
    let rating = record
        .rating
        .unwrap_or_else(|| synthetic_quality_score(protein_density, config));

    SelectedMeal {
        recipe_id: record.id.to_string(),
        name: record.name.clone(),
        category: DEFAULT_RECIPE_CATEGORY.to_owned(),
        calories: record.calories as i64,
        protein: record.protein_g as i64,
        carbs: record.carb_g as i64,
        fat: record.fat_g as i64,
        instructions: record.instructions.clone(),
        ingredients: record.ingredients.clone(),
        rating,
        image_url: record.image_url.clone(),
        meal_type,
        protein_density: round_to(protein_density, 1),
        goal_alignment: round_to(candidate.score, 1),
        meal_timing: String::new(),
        portion_size: String::new(),
        slot_index,
    }
}

/// Candidates still available for a slot, after exclusion and relaxation
fn available_candidates<'c, 'a>(
    candidates: &'c [AnnotatedRecord<'a>],
    state: &SelectionState,
    config: &SelectionConfig,
) -> Vec<&'c AnnotatedRecord<'a>> {
    let available: Vec<_> = candidates
        .iter()
        .filter(|candidate| !state.contains(candidate.record.id))
        .collect();
    if available.len() >= config.relaxation_threshold {
        return available;
    }

    let recent = state.recent(config.recent_exclusion_window);
    candidates
        .iter()
        .filter(|candidate| !recent.contains(&candidate.record.id))
        .collect()
}

/// Choose the recipe for one slot and record it in `state`
///
/// `candidates` must already be shuffled for the day. The window holds at
/// most `min(max_window, available / 2)` candidates from the slot offset; an
/// offset beyond the available list considers every available candidate.
/// Returns `None` when nothing is available or the window is empty.
pub fn select_for_slot(
    candidates: &[AnnotatedRecord<'_>],
    slot_index: usize,
    meal_type: MealType,
    offsets: &DayOffsets,
    state: &mut SelectionState,
    config: &SelectionConfig,
) -> Option<SelectedMeal> {
    let available = available_candidates(candidates, state, config);
    if available.is_empty() {
        debug!(slot_index, %meal_type, "No candidates available for slot");
        return None;
    }

    // An offset past the available list inspects the whole pool; a window of
    // zero (one available candidate) omits the slot
    let offset = offsets.slot_offset(slot_index, config);
    let pool = if offset < available.len() {
        let window = config.max_window.min(available.len() / 2);
        &available[offset..(offset + window).min(available.len())]
    } else {
        &available[..]
    };
    let Some((&first, rest)) = pool.split_first() else {
        debug!(slot_index, %meal_type, offset, "Empty selection window, slot omitted");
        return None;
    };

    // First occurrence wins on equal scores
    let mut best = first;
    for &candidate in rest {
        if candidate.score > best.score {
            best = candidate;
        }
    }

    state.record(best.record.id);
    debug!(
        slot_index,
        %meal_type,
        recipe_id = best.record.id,
        available = available.len(),
        offset,
        window_len = pool.len(),
        "Selected meal for slot"
    );
    Some(to_selected_meal(best, meal_type, slot_index, config))
}

/// Select one meal per slot for the day
///
/// Slots with no available candidate or an empty window are omitted, so the
/// result may be shorter than `meal_types`.
#[must_use]
pub fn select_meals(
    mut candidates: Vec<AnnotatedRecord<'_>>,
    meal_types: &[MealType],
    day_seed: u64,
    config: &SelectionConfig,
) -> Vec<SelectedMeal> {
    shuffle_candidates(&mut candidates, day_seed, config);
    let offsets = DayOffsets::new(day_seed, candidates.len(), config);
    let mut state = SelectionState::new();

    meal_types
        .iter()
        .enumerate()
        .filter_map(|(slot_index, &meal_type)| {
            select_for_slot(
                &candidates,
                slot_index,
                meal_type,
                &offsets,
                &mut state,
                config,
            )
        })
        .collect()
}
