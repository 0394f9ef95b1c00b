// ABOUTME: Strength estimation commands for kpkn-cli
// ABOUTME: One-rep-max estimation and prescribed working weight from a reference 1RM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use kpkn_engine::intelligence::algorithms::{
    calculate_weight_from_1rm_and_intensity, round_to_plate, OneRepMaxAlgorithm,
};
use kpkn_engine::models::{ExerciseSet, IntensityMode, WeightUnit};
use serde_json::json;
use tracing::info;

use crate::helpers::io::{parse_named, print_json};

/// Estimate a one-rep max
pub fn one_rm(weight: f64, reps: u32, formula: OneRepMaxAlgorithm) -> Result<()> {
    let one_rep_max = formula.estimate(weight, reps);
    info!(weight, reps, %formula, one_rep_max, "Estimated one-rep max");
    print_json(&json!({
        "weight": weight,
        "reps": reps,
        "formula": formula,
        "expression": formula.formula(),
        "oneRepMax": one_rep_max,
    }))
}

/// Intensity target of a prescribed set
pub struct TargetIntensity {
    /// Planned RPE
    pub rpe: Option<f64>,
    /// Planned reps in reserve
    pub rir: Option<f64>,
    /// Percentage of 1RM
    pub percent: Option<f64>,
    /// Explicit prescription mode (rpe, rir, failure, load, solo_rm)
    pub mode: Option<String>,
}

/// Prescribe a working weight
pub fn target_weight(
    one_rep_max: f64,
    reps: u32,
    intensity: TargetIntensity,
    unit: WeightUnit,
) -> Result<()> {
    let intensity_mode = intensity
        .mode
        .as_deref()
        .map(parse_named::<IntensityMode>)
        .transpose()?
        .or_else(|| intensity.percent.map(|_| IntensityMode::Load));

    let set = ExerciseSet {
        target_reps: Some(reps),
        target_rpe: intensity.rpe,
        target_rir: intensity.rir,
        target_percentage_rm: intensity.percent,
        intensity_mode,
        ..ExerciseSet::default()
    };

    let weight = calculate_weight_from_1rm_and_intensity(Some(one_rep_max), &set);
    print_json(&json!({
        "oneRepMax": one_rep_max,
        "reps": reps,
        "unit": unit,
        "weight": weight,
        "plateRounded": weight.map(|weight| round_to_plate(weight, unit)),
    }))
}
