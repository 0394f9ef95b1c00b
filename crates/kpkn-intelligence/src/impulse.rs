// ABOUTME: Training impulse calculation per physiological system from completed workouts
// ABOUTME: Combines tonnage, effort, exercise fatigue coefficients, and subjective feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Impulse
//!
//! Each effective set contributes
//!
//! ```text
//! impulse = tonnes x intensity(effective RPE) x system coefficient x feedback factor
//! ```
//!
//! where tonnes is `weight x reps / 1000`, or `reps x 0.02` for unweighted
//! work. Muscular and CNS load scale with perceived fatigue, CNS load also
//! grows as technique degrades, and spinal load scales with joint stress.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use kpkn_core::constants::physiological::fitness_fatigue::{
    BODYWEIGHT_REP_TONNES, DEFAULT_EFFECTIVE_RPE, FAILURE_EFFECTIVE_RPE, FEEDBACK_FACTOR_BASE,
    FEEDBACK_FACTOR_SCALE, INTENSITY_FAILURE, INTENSITY_LOW, INTENSITY_RPE_10, INTENSITY_RPE_6,
    INTENSITY_RPE_8, INTENSITY_RPE_9, TECHNIQUE_FACTOR_SCALE, TECHNIQUE_NEUTRAL_SCORE,
};
use kpkn_core::models::{
    CompletedExercise, ExerciseCatalog, ExerciseFeedback, ExerciseMuscleInfo, ExerciseSet,
    MuscleGroup, WorkoutLog,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::algorithms::rpe_chart::rir_to_rpe;
use crate::volume::UnresolvedExercises;

/// Kilograms per tonne
const KG_PER_TONNE: f64 = 1000.0;

/// Load on each physiological system
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemLoad {
    /// Peripheral muscular load
    pub muscular: f64,
    /// Central nervous system load
    pub cns: f64,
    /// Axial / spinal load
    pub spinal: f64,
}

impl SystemLoad {
    fn accumulate(&mut self, other: Self) {
        self.muscular += other.muscular;
        self.cns += other.cns;
        self.spinal += other.spinal;
    }

    /// Whether every system is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.muscular <= 0.0 && self.cns <= 0.0 && self.spinal <= 0.0
    }
}

/// Impulse of one logged session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionImpulse {
    /// Id of the workout log
    pub log_id: String,
    /// When the session was performed
    pub date: DateTime<Utc>,
    /// Load per system
    pub systems: SystemLoad,
    /// Muscular load attributed to each muscle by its fatigue role credit
    pub muscles: BTreeMap<MuscleGroup, f64>,
}

/// Effective RPE of a performed set
///
/// Failure and AMRAP sets count as 11. Otherwise the reported effort wins
/// over the planned one and RIR is converted to RPE; sets with no effort data
/// count as RPE 7.
#[must_use]
pub fn effective_rpe(set: &ExerciseSet) -> f64 {
    if set.reached_failure() {
        return FAILURE_EFFECTIVE_RPE;
    }
    set.completed_rpe
        .or_else(|| set.completed_rir.map(rir_to_rpe))
        .or(set.target_rpe)
        .or_else(|| set.target_rir.map(rir_to_rpe))
        .filter(|rpe| rpe.is_finite())
        .map_or(DEFAULT_EFFECTIVE_RPE, |rpe| rpe.clamp(0.0, 10.0))
}

/// Impulse multiplier for an effective RPE
#[must_use]
pub fn intensity_multiplier(effective_rpe: f64) -> f64 {
    if effective_rpe >= FAILURE_EFFECTIVE_RPE {
        INTENSITY_FAILURE
    } else if effective_rpe >= 10.0 {
        INTENSITY_RPE_10
    } else if effective_rpe >= 9.0 {
        INTENSITY_RPE_9
    } else if effective_rpe >= 8.0 {
        INTENSITY_RPE_8
    } else if effective_rpe >= 6.0 {
        INTENSITY_RPE_6
    } else {
        INTENSITY_LOW
    }
}

/// Tonnage of a set, with a per-rep proxy for unweighted work
#[must_use]
pub fn set_tonnes(set: &ExerciseSet) -> f64 {
    let reps = f64::from(set.reps());
    let load = set.load_kg();
    if load > 0.0 {
        load * reps / KG_PER_TONNE
    } else {
        reps * BODYWEIGHT_REP_TONNES
    }
}

fn feedback_factor(score: f64) -> f64 {
    FEEDBACK_FACTOR_BASE + score / FEEDBACK_FACTOR_SCALE
}

/// Per-system impulse of a performed exercise
#[must_use]
pub fn exercise_impulse(exercise: &CompletedExercise, info: &ExerciseMuscleInfo) -> SystemLoad {
    let effort: f64 = exercise
        .sets
        .iter()
        .filter(|set| set.counts_toward_volume())
        .map(|set| set_tonnes(set) * intensity_multiplier(effective_rpe(set)))
        .sum();
    if effort <= 0.0 {
        return SystemLoad::default();
    }

    let ExerciseFeedback {
        technical_quality,
        joint_load,
        perceived_fatigue,
    } = exercise.feedback();
    let coefficients = info.coefficients();
    let fatigue_factor = feedback_factor(perceived_fatigue);
    let technique_factor = 1.0 + (TECHNIQUE_NEUTRAL_SCORE - technical_quality) / TECHNIQUE_FACTOR_SCALE;

    SystemLoad {
        muscular: effort * coefficients.muscular * fatigue_factor,
        cns: effort * coefficients.cns * fatigue_factor * technique_factor,
        spinal: effort * coefficients.spinal * feedback_factor(joint_load),
    }
}

/// Impulses of a workout history, resolved against the catalog once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpulseSeries {
    sessions: Vec<SessionImpulse>,
    unresolved: UnresolvedExercises,
}

impl ImpulseSeries {
    /// Resolve every logged exercise and compute session impulses
    ///
    /// Only logs passing `include` are considered. Exercises missing from the
    /// catalog contribute nothing and are reported as unresolved.
    /// Catalog muscles outside the tracked groups load the systems but no
    /// muscle, and are listed as untracked.
    pub fn from_history<F>(history: &[WorkoutLog], catalog: &ExerciseCatalog, include: F) -> Self
    where
        F: Fn(&WorkoutLog) -> bool,
    {
        let mut unresolved_names = BTreeSet::new();
        let mut unresolved_sets = 0_u32;
        let mut untracked_muscles = BTreeSet::new();
        let mut sessions = Vec::new();

        for log in history.iter().filter(|log| include(log)) {
            let mut systems = SystemLoad::default();
            let mut muscles: BTreeMap<MuscleGroup, f64> = BTreeMap::new();

            for exercise in &log.completed_exercises {
                let Some(info) = catalog.resolve(
                    exercise.exercise_db_id.as_deref(),
                    &exercise.exercise_id,
                    &exercise.exercise_name,
                ) else {
                    let valid = exercise
                        .sets
                        .iter()
                        .filter(|set| set.counts_toward_volume())
                        .count() as u32;
                    if valid > 0 {
                        unresolved_names.insert(exercise.exercise_name.clone());
                        unresolved_sets += valid;
                    }
                    continue;
                };

                let load = exercise_impulse(exercise, info);
                if load.is_zero() {
                    continue;
                }
                systems.accumulate(load);
                untracked_muscles.extend(info.untracked_muscles.iter().cloned());

                let mut credits: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
                for involved in &info.involved_muscles {
                    let credit = credits.entry(involved.muscle).or_insert(0.0);
                    *credit = credit.max(MuscleGroup::fatigue_credit(involved.role));
                }
                for (muscle, credit) in credits {
                    *muscles.entry(muscle).or_insert(0.0) += load.muscular * credit;
                }
            }

            if !systems.is_zero() {
                trace!(log_id = %log.id, ?systems, "Session impulse");
                sessions.push(SessionImpulse {
                    log_id: log.id.clone(),
                    date: log.date,
                    systems,
                    muscles,
                });
            }
        }

        sessions.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.log_id.cmp(&b.log_id)));
        Self {
            sessions,
            unresolved: UnresolvedExercises {
                names: unresolved_names.into_iter().collect(),
                unresolved_sets,
                untracked_muscles: untracked_muscles.into_iter().collect(),
            },
        }
    }

    /// Session impulses in chronological order, ties broken by log id
    #[must_use]
    pub fn sessions(&self) -> &[SessionImpulse] {
        &self.sessions
    }

    /// Exercises that could not be resolved
    #[must_use]
    pub const fn unresolved(&self) -> &UnresolvedExercises {
        &self.unresolved
    }

    /// Date of the most recent impulse
    #[must_use]
    pub fn last_impulse_at(&self) -> Option<DateTime<Utc>> {
        self.sessions.last().map(|session| session.date)
    }

    /// Whether no session produced any load
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
