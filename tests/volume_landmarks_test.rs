// ABOUTME: Integration tests for weekly volume landmarks, weekly targets, and session caps
// ABOUTME: Also covers feedback auto-regulation and preservation of user-edited landmark rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::BTreeMap;

use chrono::Duration;
use helpers::training_data::*;
use kpkn_engine::intelligence::config::VolumeConfig;
use kpkn_engine::intelligence::volume::landmarks::profile_multiplier;
use kpkn_engine::intelligence::volume::{
    calculate_fractional_volume, calculate_volume_adjustment, calculate_weekly_volume,
    get_israetel_volume_recommendations, get_kpkn_volume_recommendations, validate_session_volume,
    AdjustmentStatus, SessionVolumeStatus, VolumeAdvisor, VolumeUnit,
};
use kpkn_engine::models::{
    merge_regenerated, IntensityPreference, MesocyclePhase, MuscleFeedback, MuscleGroup,
    MuscleRole, PostSessionFeedback, TrainingProfile, VolumeSettings,
};

fn settings(profile: TrainingProfile, intensity: IntensityPreference) -> VolumeSettings {
    VolumeSettings {
        training_profile: profile,
        preferred_intensity: intensity,
        deficit_regime: false,
    }
}

fn feedback(hours_ago: i64, muscle: MuscleGroup, doms: f64, strength: f64) -> PostSessionFeedback {
    let mut ratings = BTreeMap::new();
    ratings.insert(
        muscle,
        MuscleFeedback {
            doms,
            strength_capacity: strength,
            joint_pain: false,
            notes: String::new(),
        },
    );
    PostSessionFeedback {
        log_id: format!("log_{hours_ago}"),
        date: base_time() - Duration::hours(hours_ago),
        cns_recovery: None,
        feedback: ratings,
    }
}

// === Landmark Tables ===

#[test]
fn test_israetel_rows_are_consistent() {
    let rows = get_israetel_volume_recommendations();
    assert_eq!(rows.len(), 15);
    for row in &rows {
        assert!(row.is_consistent(), "{:?}", row.muscle_group);
        assert!(row.frequency_cap >= 1);
    }
}

#[test]
fn test_kpkn_rows_are_consistent_for_every_combination() {
    let phases = [
        MesocyclePhase::Accumulation,
        MesocyclePhase::Intensification,
        MesocyclePhase::Realization,
        MesocyclePhase::Deload,
        MesocyclePhase::Custom,
    ];
    let intensities = [
        IntensityPreference::Failure,
        IntensityPreference::RirHigh,
        IntensityPreference::RirLow,
    ];
    for score in [profile(1, 1, 1, 1), profile(2, 2, 2, 2), profile(3, 3, 3, 3)] {
        for phase in phases {
            for intensity in intensities {
                let rows = get_kpkn_volume_recommendations(
                    &score,
                    &settings(TrainingProfile::Aesthetics, intensity),
                    phase,
                );
                assert!(rows.iter().all(|row| row.is_consistent()));
            }
        }
    }
}

#[test]
fn test_profile_multiplier_range() {
    assert!((profile_multiplier(&profile(1, 1, 1, 1)) - 0.8).abs() < 1e-9);
    assert!((profile_multiplier(&profile(2, 2, 2, 2)) - 1.0).abs() < 1e-9);
    assert!((profile_multiplier(&profile(3, 3, 3, 3)) - 1.2).abs() < 1e-9);
}

#[test]
fn test_neutral_profile_reproduces_israetel_table() {
    let rows = get_kpkn_volume_recommendations(
        &profile(2, 2, 2, 2),
        &settings(TrainingProfile::Aesthetics, IntensityPreference::RirHigh),
        MesocyclePhase::Custom,
    );
    assert_eq!(rows, get_israetel_volume_recommendations());
}

#[test]
fn test_deload_shrinks_adaptive_volume() {
    let score = profile(3, 3, 2, 2);
    let volume_settings = settings(TrainingProfile::Aesthetics, IntensityPreference::RirHigh);
    let accumulation =
        get_kpkn_volume_recommendations(&score, &volume_settings, MesocyclePhase::Accumulation);
    let deload = get_kpkn_volume_recommendations(&score, &volume_settings, MesocyclePhase::Deload);

    for (acc, del) in accumulation.iter().zip(&deload) {
        assert_eq!(acc.muscle_group, del.muscle_group);
        assert!(del.max_adaptive_volume <= acc.max_adaptive_volume);
        assert!(del.max_recoverable_volume <= acc.max_recoverable_volume);
    }
}

#[test]
fn test_with_target_keeps_ordering_and_marks_customized() {
    let chest = get_israetel_volume_recommendations()
        .into_iter()
        .find(|row| row.muscle_group == MuscleGroup::Chest)
        .unwrap();

    let low = chest.with_target(5);
    assert_eq!(low.max_adaptive_volume, 5);
    assert_eq!(low.min_effective_volume, 4);
    assert!(low.is_consistent());
    assert!(low.customized);

    let high = chest.with_target(30);
    assert_eq!(high.max_recoverable_volume, 30);
    assert!(high.is_consistent());
}

#[test]
fn test_regeneration_preserves_customized_rows() {
    let existing: Vec<_> = get_israetel_volume_recommendations()
        .into_iter()
        .map(|row| {
            if row.muscle_group == MuscleGroup::Biceps {
                row.with_target(11)
            } else {
                row
            }
        })
        .collect();
    let regenerated = get_kpkn_volume_recommendations(
        &profile(3, 3, 3, 3),
        &settings(TrainingProfile::Aesthetics, IntensityPreference::RirLow),
        MesocyclePhase::Accumulation,
    );

    let merged = merge_regenerated(&existing, regenerated.clone());
    let biceps = merged
        .iter()
        .find(|row| row.muscle_group == MuscleGroup::Biceps)
        .unwrap();
    assert_eq!(biceps.max_adaptive_volume, 11);
    assert!(biceps.customized);

    let quads_merged = merged
        .iter()
        .find(|row| row.muscle_group == MuscleGroup::Quads)
        .unwrap();
    let quads_fresh = regenerated
        .iter()
        .find(|row| row.muscle_group == MuscleGroup::Quads)
        .unwrap();
    assert_eq!(quads_merged, quads_fresh);
}

// === Weekly Targets ===

#[test]
fn test_weekly_volume_without_profile() {
    let target = calculate_weekly_volume(
        None,
        &VolumeSettings::default(),
        MesocyclePhase::Accumulation,
    );
    assert_eq!((target.min, target.max, target.optimal), (10, 20, 15));
    assert_eq!(target.unit, VolumeUnit::Sets);
}

#[test]
fn test_weekly_volume_powerlifting_counts_lifts() {
    let target = calculate_weekly_volume(
        Some(&profile(3, 3, 2, 2)),
        &settings(TrainingProfile::Powerlifting, IntensityPreference::RirHigh),
        MesocyclePhase::Accumulation,
    );
    assert_eq!((target.min, target.max, target.optimal), (325, 625, 475));
    assert_eq!(target.unit, VolumeUnit::Lifts);
}

#[test]
fn test_weekly_volume_beginner_hypertrophy() {
    let target = calculate_weekly_volume(
        Some(&profile(1, 2, 1, 1)),
        &settings(TrainingProfile::Aesthetics, IntensityPreference::RirHigh),
        MesocyclePhase::Accumulation,
    );
    assert_eq!((target.min, target.max, target.optimal), (10, 14, 12));
    assert!(target.reasoning.contains("Hypertrophy"));
}

#[test]
fn test_weekly_volume_keeps_a_usable_range() {
    let target = calculate_weekly_volume(
        Some(&profile(1, 1, 1, 1)),
        &settings(TrainingProfile::Powerbuilding, IntensityPreference::Failure),
        MesocyclePhase::Deload,
    );
    assert!(target.min >= 1);
    assert!(target.max >= target.min + 2);
}

// === Session Caps ===

#[test]
fn test_session_volume_thresholds() {
    assert_eq!(
        validate_session_volume(13, MuscleGroup::Chest, false).status,
        SessionVolumeStatus::Excessive
    );
    assert_eq!(
        validate_session_volume(11, MuscleGroup::Chest, false).status,
        SessionVolumeStatus::NearLimit
    );
    let ok = validate_session_volume(8, MuscleGroup::Chest, false);
    assert_eq!(ok.status, SessionVolumeStatus::Ok);
    assert!(ok.is_valid);
    assert!(ok.message.is_none());
}

#[test]
fn test_session_volume_in_deficit() {
    let check = validate_session_volume(11, MuscleGroup::Quads, true);
    assert_eq!(check.max_sets, 10);
    assert_eq!(check.warning_sets, 8);
    assert_eq!(check.status, SessionVolumeStatus::Excessive);
    assert!(!check.is_valid);
    assert!(check.message.unwrap().contains("deficit"));
}

#[test]
fn test_custom_session_cap() {
    let advisor = VolumeAdvisor::new(VolumeConfig {
        session_set_cap: 8,
        session_set_warning: 6,
        ..VolumeConfig::default()
    });
    assert_eq!(
        advisor.validate_session(9, MuscleGroup::Lats, false).status,
        SessionVolumeStatus::Excessive
    );
}

// === Auto-Regulation ===

#[test]
fn test_adjustment_without_feedback_is_neutral() {
    let adjustment = calculate_volume_adjustment(MuscleGroup::Chest, &[]);
    assert_eq!(adjustment.status, AdjustmentStatus::Optimal);
    assert!((adjustment.factor - 1.0).abs() < f64::EPSILON);
    assert!(adjustment.suggestion.is_empty());

    let other_muscle = [feedback(24, MuscleGroup::Quads, 5.0, 2.0)];
    let adjustment = calculate_volume_adjustment(MuscleGroup::Chest, &other_muscle);
    assert_eq!(adjustment.status, AdjustmentStatus::Optimal);
}

#[test]
fn test_adjustment_detects_recovery_debt() {
    let history = [
        feedback(24, MuscleGroup::Quads, 4.0, 6.0),
        feedback(72, MuscleGroup::Quads, 3.5, 6.0),
    ];
    let adjustment = calculate_volume_adjustment(MuscleGroup::Quads, &history);
    assert_eq!(adjustment.status, AdjustmentStatus::RecoveryDebt);
    assert!((adjustment.factor - 0.85).abs() < 1e-9);

    let weak = [feedback(24, MuscleGroup::Quads, 2.0, 5.0)];
    assert_eq!(
        calculate_volume_adjustment(MuscleGroup::Quads, &weak).status,
        AdjustmentStatus::RecoveryDebt
    );
}

#[test]
fn test_adjustment_detects_undertraining() {
    let history = [
        feedback(24, MuscleGroup::Biceps, 1.0, 9.0),
        feedback(96, MuscleGroup::Biceps, 1.5, 8.0),
    ];
    let adjustment = calculate_volume_adjustment(MuscleGroup::Biceps, &history);
    assert_eq!(adjustment.status, AdjustmentStatus::Undertraining);
    assert!((adjustment.factor - 1.1).abs() < 1e-9);
}

#[test]
fn test_adjustment_only_uses_recent_entries() {
    // Three fresh easy sessions outweigh older painful ones
    let history = [
        feedback(500, MuscleGroup::Chest, 5.0, 2.0),
        feedback(400, MuscleGroup::Chest, 5.0, 2.0),
        feedback(72, MuscleGroup::Chest, 1.0, 9.0),
        feedback(48, MuscleGroup::Chest, 1.0, 9.0),
        feedback(24, MuscleGroup::Chest, 1.0, 9.0),
    ];
    let adjustment = calculate_volume_adjustment(MuscleGroup::Chest, &history);
    assert_eq!(adjustment.status, AdjustmentStatus::Undertraining);
}

#[test]
fn test_fractional_volume_counts_secondaries_as_half() {
    let volume = calculate_fractional_volume(&[
        (MuscleRole::Primary, 4.0),
        (MuscleRole::Secondary, 3.0),
        (MuscleRole::Stabilizer, 5.0),
    ]);
    assert!((volume - 5.5).abs() < 1e-9);
}
