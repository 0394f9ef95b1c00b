// ABOUTME: Weekly volume landmark rows (MEV/MAV/MRV) and the settings that shape them
// ABOUTME: Every constructor funnels through normalization so MEV < MAV <= MRV always holds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::muscle::MuscleGroup;

/// Mesocycle phase, which scales adaptive and recoverable volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MesocyclePhase {
    /// Volume accumulation block
    #[default]
    #[serde(alias = "Acumulación", alias = "acumulacion")]
    Accumulation,
    /// Intensity-focused (transformation) block
    #[serde(alias = "Intensificación", alias = "intensificacion", alias = "transformation")]
    Intensification,
    /// Peaking / taper block
    #[serde(alias = "Realización", alias = "realizacion")]
    Realization,
    /// Recovery week
    #[serde(alias = "Descarga", alias = "descarga")]
    Deload,
    /// User-defined block, neutral factors
    #[serde(alias = "Custom")]
    Custom,
}

/// Which engine a lifter's volume is computed with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingProfile {
    /// Hypertrophy sets per muscle
    #[default]
    Aesthetics,
    /// Competition lifts measured in number of lifts
    Powerlifting,
    /// Hybrid, computed as hypertrophy sets
    Powerbuilding,
}

/// How close to failure the lifter prefers to train
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntensityPreference {
    /// RPE 10 work, least volume tolerated
    Failure,
    /// RPE 8-9 (RIR 1-2)
    #[default]
    #[serde(rename = "RIR_High", alias = "rir_high")]
    RirHigh,
    /// RPE 6-7 (RIR 3-4), most volume tolerated
    #[serde(rename = "RIR_Low", alias = "rir_low")]
    RirLow,
}

/// Lifter settings consulted by volume generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSettings {
    /// Volume engine selection
    #[serde(default)]
    pub training_profile: TrainingProfile,
    /// Proximity-to-failure preference
    #[serde(default)]
    pub preferred_intensity: IntensityPreference,
    /// Whether the lifter is in a caloric deficit
    #[serde(default)]
    pub deficit_regime: bool,
}

/// Weekly volume landmarks for one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRecommendation {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Minimum effective volume (MEV), sets/week
    pub min_effective_volume: u32,
    /// Maximum adaptive volume (MAV), the weekly target
    pub max_adaptive_volume: u32,
    /// Maximum recoverable volume (MRV)
    pub max_recoverable_volume: u32,
    /// Sessions per week this muscle should be trained at most
    pub frequency_cap: u32,
    /// Edited by the user; regeneration leaves it alone
    #[serde(default, skip_serializing_if = "is_false")]
    pub customized: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde skip_serializing_if passes by reference
const fn is_false(value: &bool) -> bool {
    !*value
}

impl VolumeRecommendation {
    /// Create a normalized row
    #[must_use]
    pub fn new(muscle_group: MuscleGroup, mev: u32, mav: u32, mrv: u32, frequency_cap: u32) -> Self {
        Self {
            muscle_group,
            min_effective_volume: mev,
            max_adaptive_volume: mav,
            max_recoverable_volume: mrv,
            frequency_cap,
            customized: false,
        }
        .normalized()
    }

    /// Repair the landmark ordering: MAV is raised above MEV, MRV to at least MAV
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.max_adaptive_volume = self
            .max_adaptive_volume
            .max(self.min_effective_volume.saturating_add(1));
        self.max_recoverable_volume = self.max_recoverable_volume.max(self.max_adaptive_volume);
        self.frequency_cap = self.frequency_cap.max(1);
        self
    }

    /// Retarget MAV to a user-chosen weekly set count, keeping the ordering valid
    ///
    /// MEV is lowered when the target falls to or below it and MRV is raised when
    /// the target exceeds it. The row is flagged as customized.
    #[must_use]
    pub fn with_target(mut self, target_sets: u32) -> Self {
        let target = target_sets.max(1);
        self.max_adaptive_volume = target;
        self.min_effective_volume = self.min_effective_volume.min(target - 1);
        self.max_recoverable_volume = self.max_recoverable_volume.max(target);
        self.customized = true;
        self
    }

    /// Whether the ordering invariant holds
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.min_effective_volume < self.max_adaptive_volume
            && self.max_adaptive_volume <= self.max_recoverable_volume
    }
}

/// Merge freshly generated rows into an existing table, preserving user edits
#[must_use]
pub fn merge_regenerated(
    existing: &[VolumeRecommendation],
    regenerated: Vec<VolumeRecommendation>,
) -> Vec<VolumeRecommendation> {
    regenerated
        .into_iter()
        .map(|row| {
            existing
                .iter()
                .find(|old| old.customized && old.muscle_group == row.muscle_group)
                .copied()
                .unwrap_or(row)
        })
        .collect()
}

/// Post-session rating of one muscle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleFeedback {
    /// Soreness, 1 (none) to 5 (extreme)
    pub doms: f64,
    /// Strength felt, 1 (weak) to 10 (strong)
    pub strength_capacity: f64,
    /// Joint pain reported
    #[serde(default)]
    pub joint_pain: bool,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Feedback collected after a logged session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSessionFeedback {
    /// Workout log this feedback belongs to
    #[serde(default)]
    pub log_id: String,
    /// When the feedback was given
    pub date: DateTime<Utc>,
    /// Perceived CNS recovery, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cns_recovery: Option<f64>,
    /// Per-muscle ratings
    #[serde(default)]
    pub feedback: BTreeMap<MuscleGroup, MuscleFeedback>,
}
