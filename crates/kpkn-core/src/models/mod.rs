// ABOUTME: Core data models for the training engine
// ABOUTME: Sets, sessions, workout logs, the exercise catalog, athlete profile, and volume rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are owned value types serialized with camelCase field names so
//! the application's stored JSON loads without translation. Computations borrow
//! them immutably.

/// Athlete profiling questionnaire and composite score
pub mod athlete;
/// Exercise catalog with muscle involvement and fatigue coefficients
pub mod catalog;
/// Muscle groups, roles, and recovery profiles
pub mod muscle;
/// Weight units
pub mod units;
/// Volume landmark rows and volume settings
pub mod volume;
/// Planned sessions and completed workout logs
pub mod workout;

pub use athlete::{AthleteProfileScore, ProfileAnswers, ProfileLevel, TrainingStyle};
pub use catalog::{
    ExerciseCatalog, ExerciseKind, ExerciseMuscleInfo, InvolvedMuscle, SystemCoefficients,
};
pub use muscle::{MuscleGroup, MuscleRole, RecoveryProfile};
pub use units::WeightUnit;
pub use volume::{
    merge_regenerated, IntensityPreference, MesocyclePhase, MuscleFeedback, PostSessionFeedback,
    TrainingProfile, VolumeRecommendation, VolumeSettings,
};
pub use workout::{
    CompletedExercise, Exercise, ExerciseFeedback, ExerciseSet, GoverningIntensity, IntensityMode,
    Session, SessionPart, WorkoutLog,
};
