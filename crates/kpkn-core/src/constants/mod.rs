// ABOUTME: Engine-wide constants organized by domain
// ABOUTME: Physiological defaults for estimation, volume, fitness-fatigue, and recovery models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Physiological and training-science constants with literature references
pub mod physiological;
