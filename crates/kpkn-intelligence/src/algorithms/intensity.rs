// ABOUTME: Prescribed-weight calculation from a reference 1RM and a set's intensity target
// ABOUTME: Also provides weight rounding and rest-interval suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kpkn_core::constants::physiological::one_rep_max::DEFAULT_TARGET_REPS;
use kpkn_core::constants::physiological::rest::{
    BASE_REST_SECONDS, FATIGUE_EXTRA_SECONDS, HIGH_DRAIN_THRESHOLD, HIGH_INTENSITY_PERCENT,
    HIGH_INTENSITY_REST_SECONDS, HIGH_INTENSITY_RPE, HIGH_VOLUME_REST_SECONDS,
    MAXIMAL_REST_SECONDS, MAX_REST_SECONDS, MIN_REST_SECONDS, NEAR_FAILURE_RPE,
    NEAR_MAXIMAL_PERCENT, REST_STEP_SECONDS,
};
use kpkn_core::models::{ExerciseSet, GoverningIntensity, WeightUnit};
use tracing::trace;

use super::rpe_chart::{percent_of_1rm, rpe_to_rir};
use crate::config::EstimationConfig;

/// Sets at or below which a session counts as low volume for rest purposes
const LOW_VOLUME_SETS: usize = 3;

/// Sets above which a session counts as high volume for rest purposes
const HIGH_VOLUME_SETS: usize = 6;

/// Prescribed weight for a set given a reference 1RM, using default estimation settings
///
/// See [`calculate_weight_with_config`].
#[must_use]
pub fn calculate_weight_from_1rm_and_intensity(
    reference_1rm: Option<f64>,
    set: &ExerciseSet,
) -> Option<f64> {
    calculate_weight_with_config(reference_1rm, set, &EstimationConfig::default())
}

/// Prescribed weight for a set given a reference 1RM
///
/// The governing intensity is resolved with explicit mode first, then RIR,
/// then RPE:
///
/// - load mode: `reference x pct / 100`, or `None` without a percentage
/// - RPE / RIR: `targetReps + RIR` reps-to-failure through the RPE chart
/// - failure / max single: the reference itself, unrounded
/// - no signal: the configured default RPE
///
/// Returns `None` when the reference is absent, non-finite, or non-positive.
/// Computed weights are rounded to the configured increment.
#[must_use]
pub fn calculate_weight_with_config(
    reference_1rm: Option<f64>,
    set: &ExerciseSet,
    config: &EstimationConfig,
) -> Option<f64> {
    let reference = reference_1rm.filter(|r| r.is_finite() && *r > 0.0)?;
    let intensity = set
        .governing_intensity()
        .unwrap_or(GoverningIntensity::Rpe(config.default_target_rpe));

    let percent = match intensity {
        GoverningIntensity::Maximal => return Some(reference),
        GoverningIntensity::Unspecified => return None,
        GoverningIntensity::PercentOfMax(percent) => percent.max(0.0),
        GoverningIntensity::Rir(rir) => percent_of_1rm(prescribed_reps(set) + rir.max(0.0)),
        GoverningIntensity::Rpe(rpe) => percent_of_1rm(prescribed_reps(set) + rpe_to_rir(rpe)),
    };

    let weight = round_to_increment(reference * percent / 100.0, config.rounding_increment);
    trace!(reference, percent, weight, "Prescribed weight from 1RM");
    Some(weight)
}

fn prescribed_reps(set: &ExerciseSet) -> f64 {
    let reps = set
        .target_reps
        .or(set.completed_reps)
        .filter(|&reps| reps > 0)
        .unwrap_or(DEFAULT_TARGET_REPS);
    f64::from(reps)
}

/// Reps-to-failure implied by a planned set (`targetReps + RIR`)
///
/// Failure sets are their own rep count. Returns `None` without planned reps
/// or without an RPE/RIR/failure signal.
#[must_use]
pub fn effective_reps_to_failure(set: &ExerciseSet) -> Option<f64> {
    let reps = f64::from(set.target_reps.filter(|&reps| reps > 0)?);
    match set.governing_intensity()? {
        GoverningIntensity::Maximal => Some(reps),
        GoverningIntensity::Rir(rir) => Some(reps + rir.max(0.0)),
        GoverningIntensity::Rpe(rpe) => Some(reps + rpe_to_rir(rpe)),
        GoverningIntensity::PercentOfMax(_) | GoverningIntensity::Unspecified => None,
    }
}

/// Round to the nearest multiple of `increment`
///
/// Non-positive or non-finite increments leave the value unchanged.
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    if !increment.is_finite() || increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

/// Round a load to what can actually be put on the bar
///
/// Non-positive or non-finite loads round to 0.
#[must_use]
pub fn round_to_plate(weight: f64, unit: WeightUnit) -> f64 {
    if !weight.is_finite() || weight <= 0.0 {
        return 0.0;
    }
    round_to_increment(weight, unit.plate_increment())
}

/// Suggested rest between sets, in seconds
///
/// Starts from 150 s. Near-failure or near-maximal work gets 180 s, other
/// high-intensity work 165 s, long sessions (more than 6 sets) 120 s and short
/// ones (3 or fewer) 180 s. A normalized fatigue drain above 0.5 adds 30 s.
/// The result is rounded to 30 s and clamped to 60-300 s.
#[must_use]
pub fn suggest_rest_seconds(
    sets: usize,
    avg_rpe: Option<f64>,
    avg_percent_1rm: Option<f64>,
    drain_normalized: Option<f64>,
) -> u32 {
    let rpe = avg_rpe
        .filter(|rpe| rpe.is_finite())
        .unwrap_or(HIGH_INTENSITY_RPE)
        .clamp(0.0, 10.0);
    let percent = avg_percent_1rm
        .filter(|pct| pct.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);

    let near_failure = rpe >= NEAR_FAILURE_RPE;
    let near_maximal = percent >= NEAR_MAXIMAL_PERCENT;
    let high_intensity = rpe >= HIGH_INTENSITY_RPE || percent >= HIGH_INTENSITY_PERCENT;

    let mut seconds = if near_failure || near_maximal {
        MAXIMAL_REST_SECONDS
    } else if high_intensity {
        HIGH_INTENSITY_REST_SECONDS
    } else if sets > HIGH_VOLUME_SETS {
        HIGH_VOLUME_REST_SECONDS
    } else if sets <= LOW_VOLUME_SETS {
        MAXIMAL_REST_SECONDS
    } else {
        BASE_REST_SECONDS
    };

    if drain_normalized.is_some_and(|drain| drain > HIGH_DRAIN_THRESHOLD) {
        seconds += FATIGUE_EXTRA_SECONDS;
    }

    let rounded = (f64::from(seconds) / f64::from(REST_STEP_SECONDS)).round() as u32 * REST_STEP_SECONDS;
    rounded.clamp(MIN_REST_SECONDS, MAX_REST_SECONDS)
}
