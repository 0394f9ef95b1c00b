// ABOUTME: Weekly volume landmarks (MEV/MAV/MRV) from the Israetel table or the athlete profile
// ABOUTME: Includes weekly volume targets, session caps, and feedback-driven auto-regulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Volume Landmarks
//!
//! Weekly set landmarks per muscle group:
//!
//! - **MEV** (minimum effective volume): least volume that still drives growth
//! - **MAV** (maximum adaptive volume): the productive weekly target
//! - **MRV** (maximum recoverable volume): the most volume that can be recovered from
//!
//! # Scientific References
//!
//! - Israetel, M., Hoffmann, J., Smith, C.W. (2017). *Scientific Principles of
//!   Strength Training*. Renaissance Periodization.
//! - Schoenfeld, B.J. et al. (2017). "Dose-response relationship between weekly
//!   resistance training volume and increases in muscle mass." *J Sports Sci*, 35(11).
//! - Sheiko, B. (2018). *Powerlifting: Foundations and Methods*.

use kpkn_core::constants::physiological::volume::{
    ACCUMULATION_CAPACITY, ACCUMULATION_FACTORS, ADVANCED_MONTHLY_LIFTS, ADVANCED_WEEKLY_SETS,
    BEGINNER_MONTHLY_LIFTS, BEGINNER_WEEKLY_SETS, DELOAD_CAPACITY, DELOAD_FACTORS,
    GENERIC_WEEKLY_SETS, HIGH_DOMS, HIGH_STRENGTH, INTENSIFICATION_CAPACITY,
    INTENSIFICATION_FACTORS, INTENSITY_FACTOR_FAILURE, INTENSITY_FACTOR_RIR_HIGH,
    INTENSITY_FACTOR_RIR_LOW, LOW_DOMS, LOW_STRENGTH, PROFILE_MULTIPLIER_BASE,
    PROFILE_MULTIPLIER_STEP, REALIZATION_CAPACITY, REALIZATION_FACTORS, RECOVERY_DEBT_FACTOR,
    UNDERTRAINING_FACTOR, WEEKS_PER_MONTH,
};
use kpkn_core::constants::physiological::profiling::MIN_TOTAL;
use kpkn_core::models::{
    AthleteProfileScore, IntensityPreference, MesocyclePhase, MuscleGroup, MuscleRole,
    PostSessionFeedback, ProfileLevel, TrainingProfile, VolumeRecommendation, VolumeSettings,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::VolumeConfig;

/// Israetel landmarks: `(muscle, MEV, MAV, MRV, sessions/week cap)`
///
/// MAV is the midpoint of the published MAV range.
const ISRAETEL_LANDMARKS: [(MuscleGroup, u32, u32, u32, u32); 15] = [
    (MuscleGroup::Chest, 8, 16, 22, 3),
    (MuscleGroup::Lats, 10, 18, 25, 4),
    (MuscleGroup::Traps, 0, 16, 26, 4),
    (MuscleGroup::LowerBack, 2, 6, 10, 2),
    (MuscleGroup::FrontDelts, 0, 7, 12, 2),
    (MuscleGroup::SideDelts, 8, 19, 26, 4),
    (MuscleGroup::RearDelts, 8, 19, 26, 4),
    (MuscleGroup::Biceps, 8, 17, 26, 4),
    (MuscleGroup::Triceps, 6, 12, 18, 3),
    (MuscleGroup::Forearms, 2, 12, 20, 4),
    (MuscleGroup::Quads, 8, 15, 20, 3),
    (MuscleGroup::Hamstrings, 6, 13, 20, 3),
    (MuscleGroup::Glutes, 0, 8, 16, 3),
    (MuscleGroup::Calves, 8, 14, 20, 4),
    (MuscleGroup::Abs, 0, 18, 25, 4),
];

/// Static Israetel volume landmarks, one row per muscle group
#[must_use]
pub fn get_israetel_volume_recommendations() -> Vec<VolumeRecommendation> {
    ISRAETEL_LANDMARKS
        .iter()
        .map(|&(muscle, mev, mav, mrv, cap)| VolumeRecommendation::new(muscle, mev, mav, mrv, cap))
        .collect()
}

/// Volume multiplier from the athlete profile total: 0.8 at 4, 1.0 at 8, 1.2 at 12
#[must_use]
pub fn profile_multiplier(score: &AthleteProfileScore) -> f64 {
    let above_min = score.total_score().saturating_sub(MIN_TOTAL);
    PROFILE_MULTIPLIER_STEP.mul_add(f64::from(above_min), PROFILE_MULTIPLIER_BASE)
}

/// Volume tolerance factor for the preferred proximity to failure
#[must_use]
pub const fn intensity_factor(preference: IntensityPreference) -> f64 {
    match preference {
        IntensityPreference::Failure => INTENSITY_FACTOR_FAILURE,
        IntensityPreference::RirHigh => INTENSITY_FACTOR_RIR_HIGH,
        IntensityPreference::RirLow => INTENSITY_FACTOR_RIR_LOW,
    }
}

/// `(MAV, MRV)` scaling of a mesocycle phase
#[must_use]
pub const fn phase_landmark_factors(phase: MesocyclePhase) -> (f64, f64) {
    match phase {
        MesocyclePhase::Accumulation => ACCUMULATION_FACTORS,
        MesocyclePhase::Intensification => INTENSIFICATION_FACTORS,
        MesocyclePhase::Realization => REALIZATION_FACTORS,
        MesocyclePhase::Deload => DELOAD_FACTORS,
        MesocyclePhase::Custom => (1.0, 1.0),
    }
}

/// Weekly capacity scaling of a mesocycle phase
#[must_use]
pub const fn phase_capacity_factor(phase: MesocyclePhase) -> f64 {
    match phase {
        MesocyclePhase::Accumulation | MesocyclePhase::Custom => ACCUMULATION_CAPACITY,
        MesocyclePhase::Intensification => INTENSIFICATION_CAPACITY,
        MesocyclePhase::Realization => REALIZATION_CAPACITY,
        MesocyclePhase::Deload => DELOAD_CAPACITY,
    }
}

fn scaled(sets: u32, factor: f64) -> u32 {
    (f64::from(sets) * factor).round().max(0.0) as u32
}

/// Landmarks personalized by the athlete profile, intensity preference, and phase
///
/// MEV, MAV, and MRV scale with the profile multiplier; MAV and MRV also scale
/// with the intensity factor and the phase factors. Rows are normalized.
#[must_use]
pub fn get_kpkn_volume_recommendations(
    score: &AthleteProfileScore,
    settings: &VolumeSettings,
    phase: MesocyclePhase,
) -> Vec<VolumeRecommendation> {
    let profile = profile_multiplier(score);
    let intensity = intensity_factor(settings.preferred_intensity);
    let (mav_phase, mrv_phase) = phase_landmark_factors(phase);
    debug!(profile, intensity, mav_phase, mrv_phase, ?phase, "Personalizing volume landmarks");

    get_israetel_volume_recommendations()
        .into_iter()
        .map(|row| {
            VolumeRecommendation::new(
                row.muscle_group,
                scaled(row.min_effective_volume, profile),
                scaled(row.max_adaptive_volume, profile * intensity * mav_phase),
                scaled(row.max_recoverable_volume, profile * intensity * mrv_phase),
                row.frequency_cap,
            )
        })
        .collect()
}

/// Unit a weekly target is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    /// Hard sets per muscle
    Sets,
    /// Number of competition-lift reps (NL)
    Lifts,
}

/// Weekly volume target for a lifter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyVolumeTarget {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
    /// Midpoint target
    pub optimal: u32,
    /// Unit of the bounds
    pub unit: VolumeUnit,
    /// Human-readable derivation
    pub reasoning: String,
}

/// Weekly volume target from the athlete profile, settings, and phase
///
/// Without a profile the generic 10-20 sets apply. Powerlifting profiles get a
/// weekly number of lifts from the monthly NL ranges; everyone else gets sets
/// from the base capacity scaled by the phase and intensity factors.
#[must_use]
pub fn calculate_weekly_volume(
    score: Option<&AthleteProfileScore>,
    settings: &VolumeSettings,
    phase: MesocyclePhase,
) -> WeeklyVolumeTarget {
    let Some(score) = score else {
        let (min, max) = GENERIC_WEEKLY_SETS;
        return WeeklyVolumeTarget {
            min,
            max,
            optimal: (min + max) / 2,
            unit: VolumeUnit::Sets,
            reasoning: format!("No athlete profile; generic {min}-{max} sets per week"),
        };
    };

    let level = score.profile_level();
    let phase_factor = phase_capacity_factor(phase);

    if settings.training_profile == TrainingProfile::Powerlifting {
        let (monthly_min, monthly_max) = match level {
            ProfileLevel::Advanced => ADVANCED_MONTHLY_LIFTS,
            ProfileLevel::Beginner => BEGINNER_MONTHLY_LIFTS,
        };
        let min = (monthly_min / WEEKS_PER_MONTH * phase_factor).round() as u32;
        let max = (monthly_max / WEEKS_PER_MONTH * phase_factor).round() as u32;
        return WeeklyVolumeTarget {
            min,
            max,
            optimal: (f64::from(min + max) / 2.0).round() as u32,
            unit: VolumeUnit::Lifts,
            reasoning: format!(
                "Powerlifting engine: {level} profile, {phase:?} phase ({phase_factor}x) on monthly number of lifts"
            ),
        };
    }

    let (base_min, base_max) = match level {
        ProfileLevel::Advanced => ADVANCED_WEEKLY_SETS,
        ProfileLevel::Beginner => BEGINNER_WEEKLY_SETS,
    };
    let intensity = intensity_factor(settings.preferred_intensity);
    let min = ((base_min * phase_factor * intensity).round() as u32).max(1);
    let max = ((base_max * phase_factor * intensity).round() as u32).max(min + 2);
    WeeklyVolumeTarget {
        min,
        max,
        optimal: (f64::from(min + max) / 2.0).round() as u32,
        unit: VolumeUnit::Sets,
        reasoning: format!(
            "Hypertrophy engine: {level} base ({base_min}-{base_max}) x {phase:?} phase ({phase_factor}x) x intensity ({intensity}x)"
        ),
    }
}

/// Outcome of a per-session volume check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionVolumeStatus {
    /// Comfortably under the cap
    Ok,
    /// At or above the warning threshold
    NearLimit,
    /// Above the productive cap
    Excessive,
}

/// Per-session volume check for one muscle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionVolumeCheck {
    /// False only when the cap is exceeded
    pub is_valid: bool,
    /// Severity
    pub status: SessionVolumeStatus,
    /// Productive cap applied
    pub max_sets: u32,
    /// Warning threshold applied
    pub warning_sets: u32,
    /// Advice when near or over the limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Auto-regulation verdict from recent feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentStatus {
    /// Soreness high or strength low: reduce volume
    RecoveryDebt,
    /// Keep the plan
    Optimal,
    /// Little soreness and high strength: room for more
    Undertraining,
}

/// Suggested weekly volume adjustment for a muscle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAdjustment {
    /// Volume multiplier
    pub factor: f64,
    /// Verdict
    pub status: AdjustmentStatus,
    /// Human-readable advice, empty without data
    pub suggestion: String,
}

impl VolumeAdjustment {
    fn no_data() -> Self {
        Self {
            factor: 1.0,
            status: AdjustmentStatus::Optimal,
            suggestion: String::new(),
        }
    }
}

/// Session caps and feedback auto-regulation with configurable thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VolumeAdvisor {
    config: VolumeConfig,
}

impl VolumeAdvisor {
    /// Create an advisor with the given configuration
    #[must_use]
    pub const fn new(config: VolumeConfig) -> Self {
        Self { config }
    }

    /// Check sets for one muscle in one session against the productive cap
    ///
    /// In a caloric deficit the cap and warning threshold are scaled down.
    #[must_use]
    pub fn validate_session(&self, sets: u32, muscle: MuscleGroup, deficit: bool) -> SessionVolumeCheck {
        let factor = if deficit {
            self.config.deficit_session_factor
        } else {
            1.0
        };
        let max_sets = scaled(self.config.session_set_cap, factor);
        let warning_sets = scaled(self.config.session_set_warning, factor);

        if sets > max_sets {
            let message = if deficit {
                format!("In a deficit: {sets} sets of {muscle} exceed the recommended limit ({max_sets}); reduce volume to protect muscle mass")
            } else {
                format!("Junk volume: {sets} sets of {muscle} in one session exceed the productive limit ({max_sets}); consider splitting across two days")
            };
            return SessionVolumeCheck {
                is_valid: false,
                status: SessionVolumeStatus::Excessive,
                max_sets,
                warning_sets,
                message: Some(message),
            };
        }

        if sets >= warning_sets {
            return SessionVolumeCheck {
                is_valid: true,
                status: SessionVolumeStatus::NearLimit,
                max_sets,
                warning_sets,
                message: Some(format!(
                    "Close to the per-session limit for {muscle} ({sets}/{max_sets})"
                )),
            };
        }

        SessionVolumeCheck {
            is_valid: true,
            status: SessionVolumeStatus::Ok,
            max_sets,
            warning_sets,
            message: None,
        }
    }

    /// Volume adjustment from the most recent feedback entries for a muscle
    ///
    /// Averages the newest entries (up to the configured window) that rate the
    /// muscle. High soreness or low strength signals recovery debt; low
    /// soreness with high strength signals undertraining.
    #[must_use]
    pub fn adjustment(&self, muscle: MuscleGroup, history: &[PostSessionFeedback]) -> VolumeAdjustment {
        let mut rated: Vec<_> = history
            .iter()
            .filter_map(|entry| entry.feedback.get(&muscle).map(|rating| (entry.date, rating)))
            .collect();
        if rated.is_empty() {
            return VolumeAdjustment::no_data();
        }
        rated.sort_by(|a, b| b.0.cmp(&a.0));
        rated.truncate(self.config.feedback_window);

        let count = rated.len() as f64;
        let avg_doms = rated.iter().map(|(_, rating)| rating.doms).sum::<f64>() / count;
        let avg_strength = rated
            .iter()
            .map(|(_, rating)| rating.strength_capacity)
            .sum::<f64>()
            / count;
        debug!(%muscle, avg_doms, avg_strength, entries = rated.len(), "Feedback averages");

        if avg_doms >= HIGH_DOMS || avg_strength <= LOW_STRENGTH {
            VolumeAdjustment {
                factor: RECOVERY_DEBT_FACTOR,
                status: AdjustmentStatus::RecoveryDebt,
                suggestion: format!(
                    "Slow recovery in {muscle}; reduce volume by about 15% this week"
                ),
            }
        } else if avg_doms <= LOW_DOMS && avg_strength >= HIGH_STRENGTH {
            VolumeAdjustment {
                factor: UNDERTRAINING_FACTOR,
                status: AdjustmentStatus::Undertraining,
                suggestion: format!(
                    "{muscle} recovers with room to spare; about 10% more volume is tolerable"
                ),
            }
        } else {
            VolumeAdjustment {
                factor: 1.0,
                status: AdjustmentStatus::Optimal,
                suggestion: format!("Load is right for {muscle}; keep the plan"),
            }
        }
    }
}

/// Check per-session sets for a muscle with default caps
#[must_use]
pub fn validate_session_volume(sets: u32, muscle: MuscleGroup, deficit: bool) -> SessionVolumeCheck {
    VolumeAdvisor::default().validate_session(sets, muscle, deficit)
}

/// Feedback-driven volume adjustment with the default window
#[must_use]
pub fn calculate_volume_adjustment(
    muscle: MuscleGroup,
    feedback_history: &[PostSessionFeedback],
) -> VolumeAdjustment {
    VolumeAdvisor::default().adjustment(muscle, feedback_history)
}

/// Fractional weekly sets: each set counts with its role's hypertrophy credit
#[must_use]
pub fn calculate_fractional_volume(contributions: &[(MuscleRole, f64)]) -> f64 {
    contributions
        .iter()
        .map(|&(role, sets)| sets.max(0.0) * MuscleGroup::hypertrophy_credit(role))
        .sum()
}
