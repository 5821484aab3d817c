// ABOUTME: Common benchmark utilities for the meal planner benchmarks
// ABOUTME: Re-exports deterministic recipe fixtures used by Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
