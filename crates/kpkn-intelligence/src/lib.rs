// ABOUTME: Training intelligence engine - strength estimation, volume landmarks, fitness-fatigue modeling
// ABOUTME: Pure deterministic computations over athlete data, reusable by any front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! Training load and recovery intelligence.
//!
//! Every function here is a pure computation over owned input data: no I/O,
//! no clocks, no global mutable state beyond the read-only [`config::EngineConfig`]
//! singleton. Callers pass `as_of` timestamps explicitly.

// Re-export kpkn-core modules so algorithm files can keep short paths
pub use kpkn_core::constants;
pub use kpkn_core::errors;
pub use kpkn_core::models;

/// Strength estimation: 1RM formulas, RPE chart, prescribed weights
pub mod algorithms;
/// Athlete profiling questionnaire
pub mod athlete_profile;
/// FFMI and IPF GL points
pub mod body_composition;
/// Engine configuration with environment overrides
pub mod config;
/// Multi-system Banister fitness-fatigue model
pub mod fitness_fatigue;
/// Training impulse per physiological system
pub mod impulse;
/// Per-muscle recovery time estimation
pub mod recovery;
/// Volume landmarks, session caps, and unified muscle volume
pub mod volume;

pub use algorithms::{
    calculate_brzycki_1rm, calculate_epley_1rm, calculate_hybrid_1rm,
    calculate_weight_from_1rm_and_intensity, OneRepMaxAlgorithm,
};
pub use athlete_profile::{ProfileAnswer, ProfileQuestion, ProfilingWizard, WizardState};
pub use body_composition::{calculate_ffmi, calculate_ipf_gl_points, FfmiResult, IpfGlOptions};
pub use config::{ConfigError, EngineConfig};
pub use fitness_fatigue::{
    FatigueForecast, FatigueModelSnapshot, FitnessFatigueModel, PhysiologicalSystem,
    TrainingStatus,
};
pub use recovery::{
    learn_recovery_rate, personalized_recovery_hours, RecoveryEstimate, RecoveryEstimator,
    RecoveryModifiers,
};
pub use volume::{
    calculate_unified_muscle_volume, calculate_unified_muscle_volume_from_logs,
    MuscleVolumeReport,
};
