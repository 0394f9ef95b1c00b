// ABOUTME: Fitness-fatigue and recovery commands for kpkn-cli
// ABOUTME: Evaluates the model at a point in time, forecasts forward, and estimates muscle recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use kpkn_engine::intelligence::config::EngineConfig;
use kpkn_engine::intelligence::fitness_fatigue::FitnessFatigueModel;
use kpkn_engine::intelligence::recovery::{RecoveryEstimator, RecoveryModifiers};
use kpkn_engine::intelligence::FatigueModelCache;
use kpkn_engine::models::{ExerciseCatalog, MuscleGroup, WorkoutLog};
use serde_json::json;
use tracing::info;

use crate::helpers::io::{as_of_or_now, print_json, read_json};

/// Training history inputs
pub struct HistoryInput<'a> {
    /// Workout log document
    pub history: &'a Path,
    /// Exercise catalog document
    pub catalog: &'a Path,
    /// Evaluation time
    pub as_of: Option<DateTime<Utc>>,
}

impl HistoryInput<'_> {
    fn load(&self) -> Result<(Vec<WorkoutLog>, ExerciseCatalog)> {
        Ok((read_json(self.history)?, read_json(self.catalog)?))
    }
}

/// Forecast horizon
pub struct ForecastWindow {
    /// Hours to project
    pub hours: u32,
    /// Hours between points
    pub step: u32,
}

/// Fitness-fatigue snapshot, optionally with a forecast
pub fn fatigue(input: &HistoryInput<'_>, forecast: Option<ForecastWindow>) -> Result<()> {
    let (history, catalog) = input.load()?;
    let model = FitnessFatigueModel::new(EngineConfig::global());
    let as_of = as_of_or_now(input.as_of);

    let mut cache = FatigueModelCache::default();
    let snapshot = cache.get_or_evaluate(&model, &history, &catalog, as_of)?;
    info!(
        status = ?snapshot.status,
        combined = snapshot.combined_performance,
        sessions = snapshot.sessions_considered,
        "Fitness-fatigue snapshot"
    );

    match forecast {
        None => print_json(&snapshot),
        Some(window) => {
            let projection = model.forecast(&history, &catalog, as_of, window.hours, window.step);
            print_json(&json!({
                "snapshot": snapshot,
                "forecast": projection,
            }))
        }
    }
}

/// Recovery outlook per muscle
pub fn recovery(
    input: &HistoryInput<'_>,
    muscle: Option<MuscleGroup>,
    modifiers: Option<&Path>,
) -> Result<()> {
    let (history, catalog) = input.load()?;
    let model = FitnessFatigueModel::new(EngineConfig::global());
    let as_of = as_of_or_now(input.as_of);

    let modifiers: RecoveryModifiers = modifiers.map(read_json).transpose()?.unwrap_or_default();
    let estimator = RecoveryEstimator::new().with_modifiers(&modifiers);
    let snapshot = model.evaluate(&history, &catalog, as_of);

    match muscle {
        Some(muscle) => print_json(&json!({
            "asOf": as_of,
            "muscle": muscle,
            "personalMultiplier": estimator.personal_multiplier(),
            "estimate": estimator.estimate(&snapshot, muscle),
        })),
        None => print_json(&json!({
            "asOf": as_of,
            "personalMultiplier": estimator.personal_multiplier(),
            "muscles": estimator.estimate_all(&snapshot),
            "unresolvedExercises": snapshot.unresolved_exercises,
        })),
    }
}
