// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports a small exercise catalog plus set, session, and workout log builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod training_data;
