// ABOUTME: Integration tests for one-rep-max formulas, the RPE chart, and prescribed weights
// ABOUTME: Covers invalid inputs, formula parsing, and the load round-trip through the public API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use kpkn_engine::errors::ErrorCode;
use kpkn_engine::intelligence::algorithms::{
    amrap_adjusted, calculate_brzycki_1rm, calculate_epley_1rm, calculate_hybrid_1rm,
    calculate_weight_from_1rm_and_intensity, effective_reps_to_failure, estimate_percent_1rm,
    percent_of_1rm, rir_to_rpe, round_to_increment, round_to_plate, rpe_to_rir,
    OneRepMaxAlgorithm,
};
use kpkn_engine::models::{ExerciseSet, IntensityMode, WeightUnit};

const TOLERANCE: f64 = 1e-9;

// === One-Rep-Max Formulas ===

#[test]
fn test_brzycki_reference_value() {
    assert!((calculate_brzycki_1rm(100.0, 5) - 112.5).abs() < TOLERANCE);
}

#[test]
fn test_single_rep_returns_weight() {
    for formula in [
        OneRepMaxAlgorithm::Brzycki,
        OneRepMaxAlgorithm::Epley,
        OneRepMaxAlgorithm::Hybrid,
    ] {
        assert!((formula.estimate(180.0, 1) - 180.0).abs() < TOLERANCE, "{formula}");
    }
}

#[test]
fn test_invalid_inputs_return_zero() {
    assert!(calculate_brzycki_1rm(0.0, 5).abs() < TOLERANCE);
    assert!(calculate_brzycki_1rm(-20.0, 5).abs() < TOLERANCE);
    assert!(calculate_brzycki_1rm(100.0, 0).abs() < TOLERANCE);
    assert!(calculate_epley_1rm(f64::NAN, 5).abs() < TOLERANCE);
    assert!(calculate_hybrid_1rm(f64::INFINITY, 5).abs() < TOLERANCE);
}

#[test]
fn test_brzycki_never_hits_singularity() {
    let at_cap = calculate_brzycki_1rm(50.0, 30);
    let beyond = calculate_brzycki_1rm(50.0, 37);
    assert!(at_cap.is_finite());
    assert!((at_cap - beyond).abs() < TOLERANCE);
}

#[test]
fn test_brzycki_strictly_increasing_in_weight() {
    for reps in 1..=12 {
        let mut previous = 0.0;
        for step in 1..=40 {
            let weight = f64::from(step) * 5.0;
            let estimate = calculate_brzycki_1rm(weight, reps);
            assert!(estimate >= 0.0);
            assert!(estimate > previous, "reps {reps}, weight {weight}");
            previous = estimate;
        }
    }
}

#[test]
fn test_epley_reference_value() {
    // 100 x (1 + 10/30)
    assert!((calculate_epley_1rm(100.0, 10) - 133.333_333_333).abs() < 1e-6);
}

#[test]
fn test_hybrid_matches_brzycki_for_low_reps() {
    for reps in 1..=10 {
        let hybrid = calculate_hybrid_1rm(120.0, reps);
        let brzycki = calculate_brzycki_1rm(120.0, reps);
        assert!((hybrid - brzycki).abs() < TOLERANCE, "reps {reps}");
    }
}

#[test]
fn test_hybrid_blends_between_formulas() {
    let hybrid = calculate_hybrid_1rm(100.0, 15);
    let brzycki = calculate_brzycki_1rm(100.0, 15);
    let epley = calculate_epley_1rm(100.0, 15);
    assert!(hybrid >= brzycki.min(epley) - TOLERANCE);
    assert!(hybrid <= brzycki.max(epley) + TOLERANCE);
}

#[test]
fn test_hybrid_keeps_rising_past_twenty_reps() {
    let at_twenty = calculate_hybrid_1rm(60.0, 20);
    let at_thirty = calculate_hybrid_1rm(60.0, 30);
    assert!((at_twenty - calculate_epley_1rm(60.0, 20)).abs() < TOLERANCE);
    assert!(at_thirty > at_twenty);
}

#[test]
fn test_weight_for_reps_inverts_estimate() {
    for formula in [
        OneRepMaxAlgorithm::Brzycki,
        OneRepMaxAlgorithm::Epley,
        OneRepMaxAlgorithm::Hybrid,
    ] {
        let one_rm = formula.estimate(140.0, 6);
        assert!((formula.weight_for_reps(one_rm, 6) - 140.0).abs() < 1e-6, "{formula}");
    }
}

#[test]
fn test_amrap_bonus_applies_above_three_reps() {
    assert!((amrap_adjusted(100.0, 5) - 102.5).abs() < TOLERANCE);
    assert!((amrap_adjusted(100.0, 3) - 100.0).abs() < TOLERANCE);
}

#[test]
fn test_formula_parsing() {
    assert_eq!(
        "Brzycki".parse::<OneRepMaxAlgorithm>().unwrap(),
        OneRepMaxAlgorithm::Brzycki
    );
    assert_eq!(
        "epley".parse::<OneRepMaxAlgorithm>().unwrap(),
        OneRepMaxAlgorithm::Epley
    );
    let err = "lombardi".parse::<OneRepMaxAlgorithm>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("lombardi"));
}

// === RPE Chart ===

#[test]
fn test_rpe_chart_reference_points() {
    assert!((percent_of_1rm(1.0) - 100.0).abs() < TOLERANCE);
    assert!((percent_of_1rm(7.0) - 81.1).abs() < TOLERANCE);
    // Halfway between 81.1 (7.0) and 79.9 (7.5)
    assert!((percent_of_1rm(7.25) - 80.5).abs() < 1e-6);
    assert!((percent_of_1rm(0.0) - 100.0).abs() < TOLERANCE);
}

#[test]
fn test_rpe_chart_decreases_with_reps_to_failure() {
    let mut previous = percent_of_1rm(1.0);
    for half_steps in 3..=40 {
        let current = percent_of_1rm(f64::from(half_steps) * 0.5);
        assert!(current < previous);
        previous = current;
    }
}

#[test]
fn test_rpe_rir_conversion() {
    assert!((rpe_to_rir(8.0) - 2.0).abs() < TOLERANCE);
    assert!((rir_to_rpe(2.0) - 8.0).abs() < TOLERANCE);
    assert!((rpe_to_rir(10.0)).abs() < TOLERANCE);
}

#[test]
fn test_estimate_percent_1rm_table_and_extension() {
    assert_eq!(estimate_percent_1rm(1.0), Some(100.0));
    assert_eq!(estimate_percent_1rm(5.0), Some(87.0));
    assert_eq!(estimate_percent_1rm(15.0), Some(65.0));
    assert_eq!(estimate_percent_1rm(20.0), Some(60.0));
    assert_eq!(estimate_percent_1rm(0.4), None);
    assert_eq!(estimate_percent_1rm(f64::NAN), None);
}

// === Prescribed Weights ===

fn load_set(percent: f64) -> ExerciseSet {
    ExerciseSet {
        target_reps: Some(5),
        intensity_mode: Some(IntensityMode::Load),
        target_percentage_rm: Some(percent),
        ..ExerciseSet::default()
    }
}

#[test]
fn test_load_round_trip() {
    let one_rm = 142.5;
    for percent in 0..=100 {
        let percent = f64::from(percent);
        let weight = calculate_weight_from_1rm_and_intensity(Some(one_rm), &load_set(percent))
            .unwrap();
        let expected = round_to_increment(one_rm * percent / 100.0, 0.25);
        assert!((weight - expected).abs() < TOLERANCE, "percent {percent}");
    }
}

#[test]
fn test_rpe_target_uses_chart() {
    let set = ExerciseSet {
        target_reps: Some(5),
        target_rpe: Some(8.0),
        ..ExerciseSet::default()
    };
    // 5 reps + 2 RIR = 7 reps to failure = 81.1%; 140 x 0.811 = 113.54
    let weight = calculate_weight_from_1rm_and_intensity(Some(140.0), &set).unwrap();
    assert!((weight - 113.5).abs() < TOLERANCE);
}

#[test]
fn test_rir_takes_precedence_over_rpe() {
    let set = ExerciseSet {
        target_reps: Some(5),
        target_rpe: Some(6.0),
        target_rir: Some(2.0),
        ..ExerciseSet::default()
    };
    let weight = calculate_weight_from_1rm_and_intensity(Some(140.0), &set).unwrap();
    assert!((weight - 113.5).abs() < TOLERANCE);
    assert_eq!(effective_reps_to_failure(&set), Some(7.0));
}

#[test]
fn test_maximal_modes_return_reference() {
    for mode in [IntensityMode::Failure, IntensityMode::SoloRm] {
        let set = ExerciseSet {
            target_reps: Some(1),
            intensity_mode: Some(mode),
            ..ExerciseSet::default()
        };
        let weight = calculate_weight_from_1rm_and_intensity(Some(151.3), &set).unwrap();
        assert!((weight - 151.3).abs() < TOLERANCE);
    }
}

#[test]
fn test_missing_reference_or_percentage_gives_none() {
    let set = load_set(80.0);
    assert_eq!(calculate_weight_from_1rm_and_intensity(None, &set), None);
    assert_eq!(calculate_weight_from_1rm_and_intensity(Some(0.0), &set), None);
    assert_eq!(calculate_weight_from_1rm_and_intensity(Some(f64::NAN), &set), None);

    let no_percent = ExerciseSet {
        target_reps: Some(5),
        intensity_mode: Some(IntensityMode::Load),
        ..ExerciseSet::default()
    };
    assert_eq!(calculate_weight_from_1rm_and_intensity(Some(100.0), &no_percent), None);
}

#[test]
fn test_set_without_signal_uses_default_rpe() {
    let plain = ExerciseSet {
        target_reps: Some(5),
        ..ExerciseSet::default()
    };
    let rpe_8 = ExerciseSet {
        target_reps: Some(5),
        target_rpe: Some(8.0),
        ..ExerciseSet::default()
    };
    assert_eq!(
        calculate_weight_from_1rm_and_intensity(Some(140.0), &plain),
        calculate_weight_from_1rm_and_intensity(Some(140.0), &rpe_8)
    );
}

#[test]
fn test_plate_rounding() {
    assert!((round_to_plate(101.1, WeightUnit::Kg) - 101.25).abs() < TOLERANCE);
    assert!((round_to_plate(226.0, WeightUnit::Lb) - 225.0).abs() < TOLERANCE);
    assert!(round_to_plate(-5.0, WeightUnit::Kg).abs() < TOLERANCE);
}
