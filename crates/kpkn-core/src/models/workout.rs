// ABOUTME: Training data model - planned sets and sessions plus completed workout logs
// ABOUTME: Serde camelCase mapping matches the application's stored JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::physiological::feedback;

/// How a set's load is prescribed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityMode {
    /// Rate of perceived exertion target
    Rpe,
    /// Reps in reserve target
    Rir,
    /// Taken to momentary failure (AMRAP sets load as failure sets)
    #[serde(alias = "amrap")]
    Failure,
    /// Fixed percentage of 1RM
    Load,
    /// Single max-effort attempt
    SoloRm,
}

/// Intensity signal that governs a set's prescribed weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoverningIntensity {
    /// Target reps in reserve
    Rir(f64),
    /// Target RPE
    Rpe(f64),
    /// Percentage of 1RM
    PercentOfMax(f64),
    /// Failure or max single: the reference 1RM itself
    Maximal,
    /// Load mode without a percentage
    Unspecified,
}

/// A single planned or completed set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    /// Set identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Planned repetitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<u32>,
    /// Repetitions actually performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_reps: Option<u32>,
    /// Load in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Planned RPE
    #[serde(default, rename = "targetRPE", skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f64>,
    /// Planned reps in reserve
    #[serde(default, rename = "targetRIR", skip_serializing_if = "Option::is_none")]
    pub target_rir: Option<f64>,
    /// Reported RPE
    #[serde(default, rename = "completedRPE", skip_serializing_if = "Option::is_none")]
    pub completed_rpe: Option<f64>,
    /// Reported reps in reserve
    #[serde(default, rename = "completedRIR", skip_serializing_if = "Option::is_none")]
    pub completed_rir: Option<f64>,
    /// Explicit prescription mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_mode: Option<IntensityMode>,
    /// Percentage of 1RM for load-mode sets
    #[serde(default, rename = "targetPercentageRM", skip_serializing_if = "Option::is_none")]
    pub target_percentage_rm: Option<f64>,
    /// Flagged by the athlete as junk volume
    #[serde(default)]
    pub is_ineffective: bool,
    /// As-many-reps-as-possible set
    #[serde(default)]
    pub is_amrap: bool,
    /// Set ended at momentary failure
    #[serde(default)]
    pub is_failure: bool,
}

impl ExerciseSet {
    /// Performed reps when logged, otherwise the planned reps
    #[must_use]
    pub fn reps(&self) -> u32 {
        self.completed_reps.or(self.target_reps).unwrap_or(0)
    }

    /// Load in kilograms, zero when absent or negative
    #[must_use]
    pub fn load_kg(&self) -> f64 {
        self.weight.filter(|w| w.is_finite() && *w > 0.0).unwrap_or(0.0)
    }

    /// Whether the set counts toward volume: not ineffective, and some work was done
    #[must_use]
    pub fn counts_toward_volume(&self) -> bool {
        !self.is_ineffective && (self.reps() > 0 || self.load_kg() > 0.0)
    }

    /// Whether the set was taken to failure in any of the ways it can be recorded
    #[must_use]
    pub fn reached_failure(&self) -> bool {
        self.is_failure || self.is_amrap || self.intensity_mode == Some(IntensityMode::Failure)
    }

    /// Resolve which intensity signal governs the prescribed weight
    ///
    /// Precedence: explicit mode first, then RIR, then RPE. Returns `None` when
    /// the set carries no intensity signal at all.
    #[must_use]
    pub fn governing_intensity(&self) -> Option<GoverningIntensity> {
        match self.intensity_mode {
            Some(IntensityMode::Load) => Some(
                self.target_percentage_rm
                    .map_or(GoverningIntensity::Unspecified, GoverningIntensity::PercentOfMax),
            ),
            Some(IntensityMode::Failure | IntensityMode::SoloRm) => {
                Some(GoverningIntensity::Maximal)
            }
            Some(IntensityMode::Rir) => self
                .target_rir
                .map(GoverningIntensity::Rir)
                .or_else(|| self.target_rpe.map(GoverningIntensity::Rpe)),
            Some(IntensityMode::Rpe) => self
                .target_rpe
                .map(GoverningIntensity::Rpe)
                .or_else(|| self.target_rir.map(GoverningIntensity::Rir)),
            None => self
                .target_rir
                .map(GoverningIntensity::Rir)
                .or_else(|| self.target_rpe.map(GoverningIntensity::Rpe)),
        }
    }
}

/// A planned exercise within a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise identifier within the program
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog identifier when linked to the exercise database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_db_id: Option<String>,
    /// Planned sets
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
    /// Rest between sets in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
}

/// A block of a session (warm-up, main work, accessories)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPart {
    /// Part label
    #[serde(default)]
    pub name: String,
    /// Exercises in this part
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// A planned training session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier
    #[serde(default)]
    pub id: String,
    /// Session name
    #[serde(default)]
    pub name: String,
    /// Structured parts; take precedence over the flat list when present
    #[serde(default)]
    pub parts: Vec<SessionPart>,
    /// Flat exercise list
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Session {
    /// All exercises of the session
    pub fn all_exercises(&self) -> Box<dyn Iterator<Item = &Exercise> + '_> {
        if self.parts.is_empty() {
            Box::new(self.exercises.iter())
        } else {
            Box::new(self.parts.iter().flat_map(|part| part.exercises.iter()))
        }
    }
}

/// Subjective feedback for an exercise with missing values resolved to defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFeedback {
    /// Technique quality, 1-10
    pub technical_quality: f64,
    /// Joint stress, 1-10
    pub joint_load: f64,
    /// Perceived fatigue, 1-10
    pub perceived_fatigue: f64,
}

impl Default for ExerciseFeedback {
    fn default() -> Self {
        Self {
            technical_quality: feedback::DEFAULT_TECHNICAL_QUALITY,
            joint_load: feedback::DEFAULT_JOINT_LOAD,
            perceived_fatigue: feedback::DEFAULT_PERCEIVED_FATIGUE,
        }
    }
}

impl ExerciseFeedback {
    /// Clamp a reported score to the feedback scale; absent or non-finite falls back to `default`
    ///
    /// A reported 0 is a real answer and clamps to the bottom of the scale.
    #[must_use]
    pub fn resolve(reported: Option<f64>, default: f64) -> f64 {
        reported
            .filter(|score| score.is_finite())
            .map_or(default, |score| {
                score.clamp(feedback::MIN_SCORE, feedback::MAX_SCORE)
            })
    }
}

/// An exercise as performed in a logged workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedExercise {
    /// Program exercise identifier
    pub exercise_id: String,
    /// Catalog identifier when linked to the exercise database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_db_id: Option<String>,
    /// Display name at time of logging
    #[serde(default)]
    pub exercise_name: String,
    /// Performed sets, in order
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
    /// Reported technique quality, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_quality: Option<f64>,
    /// Reported joint stress, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_load: Option<f64>,
    /// Reported perceived fatigue, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perceived_fatigue: Option<f64>,
}

impl CompletedExercise {
    /// Feedback with unreported values replaced by the documented defaults
    #[must_use]
    pub fn feedback(&self) -> ExerciseFeedback {
        ExerciseFeedback {
            technical_quality: ExerciseFeedback::resolve(
                self.technical_quality,
                feedback::DEFAULT_TECHNICAL_QUALITY,
            ),
            joint_load: ExerciseFeedback::resolve(self.joint_load, feedback::DEFAULT_JOINT_LOAD),
            perceived_fatigue: ExerciseFeedback::resolve(
                self.perceived_fatigue,
                feedback::DEFAULT_PERCEIVED_FATIGUE,
            ),
        }
    }
}

/// A completed training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// Log identifier
    pub id: String,
    /// When the session was performed
    pub date: DateTime<Utc>,
    /// Name of the session that was performed
    #[serde(default)]
    pub session_name: String,
    /// Exercises performed
    #[serde(default)]
    pub completed_exercises: Vec<CompletedExercise>,
}
