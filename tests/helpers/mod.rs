// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the deterministic synthetic recipe generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod synthetic_recipes;
