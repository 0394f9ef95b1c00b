// ABOUTME: Unified effective-set volume per muscle group from planned sessions or workout logs
// ABOUTME: Credits each muscle once per exercise at its strongest role and reports catalog gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use kpkn_core::models::{ExerciseCatalog, ExerciseSet, MuscleGroup, Session, WorkoutLog};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Effective weekly sets for one muscle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleVolume {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Effective sets, rounded to 0.1
    pub volume: f64,
}

/// Exercises and muscles the catalog could not account for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedExercises {
    /// Distinct exercise names, sorted
    pub names: Vec<String>,
    /// Valid sets that contributed nothing, either because their exercise was
    /// unknown or because it trains only untracked muscles
    pub unresolved_sets: u32,
    /// Distinct catalog muscle names outside the tracked groups, sorted
    #[serde(default)]
    pub untracked_muscles: Vec<String>,
}

impl UnresolvedExercises {
    /// Whether every exercise was resolved onto tracked muscles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.untracked_muscles.is_empty()
    }
}

/// Per-muscle volume with data-gap accounting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleVolumeReport {
    /// Trained muscles by descending volume, ties by name
    pub muscles: Vec<MuscleVolume>,
    /// Exercises missing from the catalog or training untracked muscles
    pub unresolved_exercises: UnresolvedExercises,
}

impl MuscleVolumeReport {
    /// Volume for a muscle, 0 when untrained
    #[must_use]
    pub fn volume_for(&self, muscle: MuscleGroup) -> f64 {
        self.muscles
            .iter()
            .find(|entry| entry.muscle_group == muscle)
            .map_or(0.0, |entry| entry.volume)
    }
}

/// Exercise reference and sets, independent of where they came from
struct ExerciseRef<'a> {
    catalog_id: Option<&'a str>,
    exercise_id: &'a str,
    name: &'a str,
    sets: &'a [ExerciseSet],
}

#[derive(Default)]
struct VolumeAccumulator {
    volumes: BTreeMap<MuscleGroup, f64>,
    unresolved: BTreeSet<String>,
    unresolved_sets: u32,
    untracked: BTreeSet<String>,
}

impl VolumeAccumulator {
    fn add(&mut self, exercise: &ExerciseRef<'_>, catalog: &ExerciseCatalog) {
        let valid_sets = exercise
            .sets
            .iter()
            .filter(|set| set.counts_toward_volume())
            .count() as u32;
        if valid_sets == 0 {
            return;
        }

        let Some(info) = catalog.resolve(exercise.catalog_id, exercise.exercise_id, exercise.name)
        else {
            self.unresolved.insert(exercise.name.to_owned());
            self.unresolved_sets += valid_sets;
            return;
        };

        let mut strongest: BTreeMap<MuscleGroup, f64> = BTreeMap::new();
        for involved in &info.involved_muscles {
            let credit = MuscleGroup::hypertrophy_credit(involved.role);
            if credit <= 0.0 {
                continue;
            }
            let best = strongest.entry(involved.muscle).or_insert(0.0);
            *best = best.max(credit);
        }

        self.untracked.extend(info.untracked_muscles.iter().cloned());
        if strongest.is_empty() && !info.untracked_muscles.is_empty() {
            self.unresolved.insert(exercise.name.to_owned());
            self.unresolved_sets += valid_sets;
            return;
        }

        for (muscle, credit) in strongest {
            *self.volumes.entry(muscle).or_insert(0.0) += credit * f64::from(valid_sets);
        }
    }

    fn finish(self) -> MuscleVolumeReport {
        if !self.unresolved.is_empty() {
            warn!(
                exercises = self.unresolved.len(),
                sets = self.unresolved_sets,
                "Exercises missing from catalog contributed no volume"
            );
        }
        if !self.untracked.is_empty() {
            warn!(
                muscles = ?self.untracked,
                "Catalog muscles outside the tracked groups were not credited"
            );
        }

        let mut muscles: Vec<MuscleVolume> = self
            .volumes
            .into_iter()
            .map(|(muscle_group, volume)| MuscleVolume {
                muscle_group,
                volume: (volume * 10.0).round() / 10.0,
            })
            .collect();
        muscles.sort_by(|a, b| {
            b.volume
                .total_cmp(&a.volume)
                .then_with(|| a.muscle_group.name().cmp(b.muscle_group.name()))
        });
        debug!(muscles = muscles.len(), "Unified muscle volume computed");

        MuscleVolumeReport {
            muscles,
            unresolved_exercises: UnresolvedExercises {
                names: self.unresolved.into_iter().collect(),
                unresolved_sets: self.unresolved_sets,
                untracked_muscles: self.untracked.into_iter().collect(),
            },
        }
    }
}

/// Effective sets per muscle across planned sessions
///
/// A set counts when it is not flagged ineffective and has reps or load.
/// Each muscle of an exercise is credited once, at its strongest role.
/// The result does not depend on session or exercise order.
#[must_use]
pub fn calculate_unified_muscle_volume(
    sessions: &[Session],
    catalog: &ExerciseCatalog,
) -> MuscleVolumeReport {
    let mut accumulator = VolumeAccumulator::default();
    for exercise in sessions.iter().flat_map(|session| session.all_exercises()) {
        accumulator.add(
            &ExerciseRef {
                catalog_id: exercise.exercise_db_id.as_deref(),
                exercise_id: &exercise.id,
                name: &exercise.name,
                sets: &exercise.sets,
            },
            catalog,
        );
    }
    accumulator.finish()
}

/// Effective sets per muscle across completed workout logs
#[must_use]
pub fn calculate_unified_muscle_volume_from_logs(
    logs: &[WorkoutLog],
    catalog: &ExerciseCatalog,
) -> MuscleVolumeReport {
    let mut accumulator = VolumeAccumulator::default();
    for exercise in logs.iter().flat_map(|log| &log.completed_exercises) {
        accumulator.add(
            &ExerciseRef {
                catalog_id: exercise.exercise_db_id.as_deref(),
                exercise_id: &exercise.exercise_id,
                name: &exercise.exercise_name,
                sets: &exercise.sets,
            },
            catalog,
        );
    }
    accumulator.finish()
}
