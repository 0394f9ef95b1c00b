// ABOUTME: Per-muscle recovery time estimation from fitness-fatigue snapshots
// ABOUTME: Applies lifestyle modifiers and a learned recovery rate to profile time constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recovery Estimation
//!
//! A muscle's residual fatigue decays as `F(t) = F0 x e^(-t/τ)`. It counts as
//! recovered once `F` falls to `ready_fraction` of its most recent impulse,
//! which takes
//!
//! ```text
//! hours = -τ x ln(threshold / current)
//! ```
//!
//! With `τ = profile_hours / ln(1 / ready_fraction)`, a single session clears
//! in exactly the profile hours (24/48/72/96 h).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kpkn_core::constants::physiological::recovery::{
    AGE_PENALTY_PER_YEAR, AGE_PENALTY_START, DEFICIT_MULTIPLIER, EXCELLENT_SLEEP_HOURS,
    EXCELLENT_SLEEP_MULTIPLIER, FEMALE_MULTIPLIER, GOOD_SLEEP_HOURS, GOOD_SLEEP_MULTIPLIER,
    HIGH_STRESS_LEVEL, HIGH_STRESS_MULTIPLIER, LEARNING_RATE, MAX_RECOVERY_RATE,
    MILD_SLEEP_HOURS, MILD_SLEEP_MULTIPLIER, MIN_PERSONAL_MULTIPLIER, MIN_RECOVERY_RATE,
    SEVERE_SLEEP_HOURS, SEVERE_SLEEP_MULTIPLIER, SURPLUS_MULTIPLIER,
};
use kpkn_core::models::{ExerciseCatalog, MuscleGroup, WorkoutLog};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::body_composition::Gender;
use crate::fitness_fatigue::{FatigueModelSnapshot, FitnessFatigueModel};

/// Hours until fatigue decays from `current_fatigue` to `threshold`
///
/// Returns 0 when already at or below the threshold, and 0 for non-positive
/// or non-finite inputs. Never negative.
#[must_use]
pub fn personalized_recovery_hours(current_fatigue: f64, tau_hours: f64, threshold: f64) -> f64 {
    let valid = |value: f64| value.is_finite() && value > 0.0;
    if !valid(current_fatigue) || !valid(tau_hours) || !valid(threshold) {
        return 0.0;
    }
    if current_fatigue <= threshold {
        return 0.0;
    }
    (-tau_hours * (threshold / current_fatigue).ln()).max(0.0)
}

/// Recovery outlook of a muscle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum RecoveryEstimate {
    /// Hours until the muscle is ready (0 when ready now)
    Hours(f64),
    /// The muscle has not been trained in the history window
    InsufficientData,
}

impl RecoveryEstimate {
    /// Hours until ready, if known
    #[must_use]
    pub const fn hours(&self) -> Option<f64> {
        match self {
            Self::Hours(hours) => Some(*hours),
            Self::InsufficientData => None,
        }
    }

    /// Whether the muscle is known to be ready now
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.hours().is_some_and(|hours| hours <= 0.0)
    }
}

/// Energy balance relative to maintenance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionBalance {
    /// Eating below maintenance
    Deficit,
    /// Eating at maintenance
    #[default]
    Maintenance,
    /// Eating above maintenance
    Surplus,
}

/// Lifestyle factors that slow down or speed up recovery
///
/// Absent fields are neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryModifiers {
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Average nightly sleep
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    /// Energy balance
    #[serde(default)]
    pub nutrition: NutritionBalance,
    /// Stress level, 1-5
    #[serde(default)]
    pub stress_level: Option<u8>,
}

impl RecoveryModifiers {
    /// Combined multiplier on recovery time, floored at 0.5
    ///
    /// - age above 35: +1% per year
    /// - female: x0.85
    /// - sleep under 6 h x1.5, under 7 h x1.2, 8.5 h or more x0.8, 7.5 h or more x0.9
    /// - deficit x1.35, surplus x0.85
    /// - stress 4 or higher x1.4
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        let mut multiplier = 1.0;

        if let Some(age) = self.age.filter(|&age| age > AGE_PENALTY_START) {
            multiplier *= AGE_PENALTY_PER_YEAR.mul_add(f64::from(age - AGE_PENALTY_START), 1.0);
        }
        if self.gender == Some(Gender::Female) {
            multiplier *= FEMALE_MULTIPLIER;
        }
        if let Some(sleep) = self.sleep_hours.filter(|hours| hours.is_finite()) {
            multiplier *= sleep_multiplier(sleep);
        }
        multiplier *= match self.nutrition {
            NutritionBalance::Deficit => DEFICIT_MULTIPLIER,
            NutritionBalance::Maintenance => 1.0,
            NutritionBalance::Surplus => SURPLUS_MULTIPLIER,
        };
        if self.stress_level.is_some_and(|level| level >= HIGH_STRESS_LEVEL) {
            multiplier *= HIGH_STRESS_MULTIPLIER;
        }

        multiplier.max(MIN_PERSONAL_MULTIPLIER)
    }
}

fn sleep_multiplier(hours: f64) -> f64 {
    if hours < SEVERE_SLEEP_HOURS {
        SEVERE_SLEEP_MULTIPLIER
    } else if hours < MILD_SLEEP_HOURS {
        MILD_SLEEP_MULTIPLIER
    } else if hours >= EXCELLENT_SLEEP_HOURS {
        EXCELLENT_SLEEP_MULTIPLIER
    } else if hours >= GOOD_SLEEP_HOURS {
        GOOD_SLEEP_MULTIPLIER
    } else {
        1.0
    }
}

/// Calibrate the personal recovery rate from how recovered the athlete felt
///
/// `current + (felt - calculated) x 0.005`, clamped to 0.5-2.0. A rate above
/// 1 means the athlete recovers faster than modeled.
#[must_use]
pub fn learn_recovery_rate(current_rate: f64, calculated_score: f64, felt_score: f64) -> f64 {
    let adjustment = (felt_score - calculated_score) * LEARNING_RATE;
    (current_rate + adjustment).clamp(MIN_RECOVERY_RATE, MAX_RECOVERY_RATE)
}

/// Estimates per-muscle recovery time from a model snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryEstimator {
    personal_multiplier: f64,
}

impl Default for RecoveryEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryEstimator {
    /// Estimator without personal adjustments
    #[must_use]
    pub const fn new() -> Self {
        Self {
            personal_multiplier: 1.0,
        }
    }

    /// Apply lifestyle modifiers
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: &RecoveryModifiers) -> Self {
        self.personal_multiplier *= modifiers.multiplier();
        self
    }

    /// Apply a learned recovery rate (see [`learn_recovery_rate`])
    #[must_use]
    pub fn with_recovery_rate(mut self, rate: f64) -> Self {
        let rate = if rate.is_finite() {
            rate.clamp(MIN_RECOVERY_RATE, MAX_RECOVERY_RATE)
        } else {
            1.0
        };
        self.personal_multiplier /= rate;
        self
    }

    /// Multiplier applied to every muscle's time constant
    #[must_use]
    pub const fn personal_multiplier(&self) -> f64 {
        self.personal_multiplier
    }

    /// Hours until `muscle` is ready, as of the snapshot time
    #[must_use]
    pub fn estimate(&self, snapshot: &FatigueModelSnapshot, muscle: MuscleGroup) -> RecoveryEstimate {
        let Some(fatigue) = snapshot.muscles.get(&muscle) else {
            return RecoveryEstimate::InsufficientData;
        };
        let hours = personalized_recovery_hours(
            fatigue.current_fatigue,
            fatigue.tau_hours * self.personal_multiplier,
            fatigue.ready_threshold,
        );
        debug!(%muscle, hours, current = fatigue.current_fatigue, "Recovery estimate");
        RecoveryEstimate::Hours(hours)
    }

    /// Recovery outlook for every muscle group
    #[must_use]
    pub fn estimate_all(&self, snapshot: &FatigueModelSnapshot) -> BTreeMap<MuscleGroup, RecoveryEstimate> {
        MuscleGroup::ALL
            .into_iter()
            .map(|muscle| (muscle, self.estimate(snapshot, muscle)))
            .collect()
    }

    /// Evaluate the model and estimate one muscle in a single call
    #[must_use]
    pub fn estimate_from_history(
        &self,
        model: &FitnessFatigueModel,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        as_of: DateTime<Utc>,
        muscle: MuscleGroup,
    ) -> RecoveryEstimate {
        self.estimate(&model.evaluate(history, catalog, as_of), muscle)
    }
}
