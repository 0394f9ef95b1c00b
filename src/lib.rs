// ABOUTME: Main library entry point for the KPKN training load and recovery engine
// ABOUTME: Re-exports the core models and intelligence algorithms, plus logging and memoization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy, matching the workspace lint table
#![deny(unsafe_code)]

//! # KPKN Engine
//!
//! Computational core of a strength-training companion: turns logged sets,
//! body metrics, and athlete self-assessments into actionable numbers.
//!
//! ## Features
//!
//! - **Strength estimation**: Brzycki, Epley, and hybrid 1RM formulas, RPE chart,
//!   prescribed working weights
//! - **Body composition**: FFMI and IPF GL points
//! - **Volume management**: MEV/MAV/MRV landmarks, session caps, unified per-muscle volume
//! - **Recovery modeling**: multi-system Banister fitness-fatigue model with
//!   per-muscle recovery time
//! - **Athlete profiling**: questionnaire scoring and level classification
//!
//! ## Architecture
//!
//! - **`kpkn-core`**: error types, physiological constants, data models
//! - **`kpkn-intelligence`**: pure deterministic algorithms
//! - **this crate**: logging setup, fatigue-model memoization, and the `kpkn-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use kpkn_engine::intelligence::calculate_brzycki_1rm;
//!
//! let one_rm = calculate_brzycki_1rm(100.0, 5);
//! assert!((one_rm - 112.5).abs() < 1e-9);
//! ```

// Re-export core modules at the top level
pub use kpkn_core::constants;
pub use kpkn_core::errors;
pub use kpkn_core::models;

/// Training intelligence algorithms and fatigue-model memoization
pub mod intelligence;

/// Structured logging setup
pub mod logging;
