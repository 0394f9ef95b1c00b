// ABOUTME: Volume commands for kpkn-cli
// ABOUTME: Landmark tables and unified per-muscle volume from sessions or workout logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use kpkn_engine::intelligence::volume::{
    calculate_unified_muscle_volume, calculate_unified_muscle_volume_from_logs,
    calculate_weekly_volume, get_israetel_volume_recommendations,
    get_kpkn_volume_recommendations,
};
use kpkn_engine::models::{
    AthleteProfileScore, ExerciseCatalog, IntensityPreference, MesocyclePhase, Session,
    VolumeSettings, WorkoutLog,
};
use serde_json::json;
use tracing::info;

use crate::helpers::io::{parse_named, print_json, read_json};

/// Landmark table options
pub struct LandmarkOptions<'a> {
    /// Athlete profile score document
    pub profile: Option<&'a Path>,
    /// Mesocycle phase name
    pub phase: Option<&'a str>,
    /// Intensity preference name
    pub intensity: Option<&'a str>,
    /// Volume engine name
    pub training_profile: Option<&'a str>,
}

/// Weekly MEV/MAV/MRV per muscle, personalized when a profile is given
pub fn landmarks(options: &LandmarkOptions<'_>) -> Result<()> {
    let phase: MesocyclePhase = options
        .phase
        .map(parse_named)
        .transpose()?
        .unwrap_or_default();
    let preferred_intensity: IntensityPreference = options
        .intensity
        .map(parse_named)
        .transpose()?
        .unwrap_or_default();
    let settings = VolumeSettings {
        training_profile: options
            .training_profile
            .map(parse_named)
            .transpose()?
            .unwrap_or_default(),
        preferred_intensity,
        deficit_regime: false,
    };

    let Some(path) = options.profile else {
        return print_json(&json!({
            "source": "israetel",
            "weeklyTarget": calculate_weekly_volume(None, &settings, phase),
            "landmarks": get_israetel_volume_recommendations(),
        }));
    };

    let score: AthleteProfileScore = read_json(path)?;
    info!(level = %score.profile_level(), total = score.total_score(), ?phase, "Personalizing landmarks");
    print_json(&json!({
        "source": "kpkn",
        "profile": score,
        "weeklyTarget": calculate_weekly_volume(Some(&score), &settings, phase),
        "landmarks": get_kpkn_volume_recommendations(&score, &settings, phase),
    }))
}

/// Effective sets per muscle
pub fn volume(input: &Path, catalog: &Path, logs: bool) -> Result<()> {
    let catalog: ExerciseCatalog = read_json(catalog)?;
    let report = if logs {
        let logs: Vec<WorkoutLog> = read_json(input)?;
        calculate_unified_muscle_volume_from_logs(&logs, &catalog)
    } else {
        let sessions: Vec<Session> = read_json(input)?;
        calculate_unified_muscle_volume(&sessions, &catalog)
    };
    print_json(&report)
}
