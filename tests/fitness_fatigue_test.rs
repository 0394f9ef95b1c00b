// ABOUTME: Integration tests for training impulses and the Banister fitness-fatigue model
// ABOUTME: Covers system impulses, training status bands, history windowing, and forecasting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::{DateTime, Duration, Utc};
use helpers::training_data::*;
use kpkn_engine::intelligence::config::{EngineConfig, FitnessFatigueConfig};
use kpkn_engine::intelligence::fitness_fatigue::{
    FitnessFatigueModel, PhysiologicalSystem, SystemEstimate, TrainingStatus,
};
use kpkn_engine::intelligence::impulse::{
    effective_rpe, exercise_impulse, intensity_multiplier, set_tonnes, ImpulseSeries,
};
use kpkn_engine::intelligence::FatigueModelCache;
use kpkn_engine::models::{ExerciseSet, IntensityMode, MuscleGroup, WorkoutLog};

const EPS: f64 = 1e-9;

// === Impulses ===

#[test]
fn test_effective_rpe_precedence() {
    let failure = ExerciseSet {
        completed_rpe: Some(7.0),
        is_failure: true,
        ..ExerciseSet::default()
    };
    assert!((effective_rpe(&failure) - 11.0).abs() < EPS);

    let amrap_mode = ExerciseSet {
        intensity_mode: Some(IntensityMode::Failure),
        ..ExerciseSet::default()
    };
    assert!((effective_rpe(&amrap_mode) - 11.0).abs() < EPS);

    let reported_rir = ExerciseSet {
        completed_rir: Some(1.0),
        target_rpe: Some(6.0),
        ..ExerciseSet::default()
    };
    assert!((effective_rpe(&reported_rir) - 9.0).abs() < EPS);

    assert!((effective_rpe(&ExerciseSet::default()) - 7.0).abs() < EPS);
}

#[test]
fn test_intensity_multiplier_bands() {
    assert!((intensity_multiplier(11.0) - 1.8).abs() < EPS);
    assert!((intensity_multiplier(10.0) - 1.5).abs() < EPS);
    assert!((intensity_multiplier(9.5) - 1.15).abs() < EPS);
    assert!((intensity_multiplier(8.0) - 1.0).abs() < EPS);
    assert!((intensity_multiplier(6.0) - 0.7).abs() < EPS);
    assert!((intensity_multiplier(5.0) - 0.4).abs() < EPS);
}

#[test]
fn test_set_tonnes_uses_bodyweight_proxy() {
    assert!((set_tonnes(&working_set(140.0, 5, 8.0)) - 0.7).abs() < EPS);
    let pull_ups = ExerciseSet {
        completed_reps: Some(10),
        ..ExerciseSet::default()
    };
    assert!((set_tonnes(&pull_ups) - 0.2).abs() < EPS);
}

#[test]
fn test_squat_session_impulse() {
    let catalog = test_catalog();
    let log = squat_log("squat", base_time());
    let info = catalog.get("db_squat").unwrap();
    let load = exercise_impulse(&log.completed_exercises[0], info);

    // 5 x 0.7 t at RPE 8 = 3.5; technique 8 lowers CNS load to 0.85x
    assert!((load.muscular - 14.0).abs() < 1e-6);
    assert!((load.cns - 11.9).abs() < 1e-6);
    assert!((load.spinal - 3.5).abs() < 1e-6);
}

#[test]
fn test_feedback_scales_impulse() {
    let catalog = test_catalog();
    let info = catalog.get("db_squat").unwrap();
    let mut exercise = squat_log("squat", base_time()).completed_exercises.remove(0);
    exercise.perceived_fatigue = Some(10.0);
    exercise.joint_load = Some(0.0);
    let load = exercise_impulse(&exercise, info);

    // Fatigue 10 -> 1.5x, joint 0 clamps to 1 -> 0.6x
    assert!((load.muscular - 21.0).abs() < 1e-6);
    assert!((load.spinal - 2.1).abs() < 1e-6);
}

#[test]
fn test_muscle_impulses_follow_fatigue_credit() {
    let series = ImpulseSeries::from_history(
        &[squat_log("squat", base_time())],
        &test_catalog(),
        |_| true,
    );
    let session = &series.sessions()[0];

    assert!((session.muscles[&MuscleGroup::Quads] - 14.0).abs() < 1e-6);
    assert!((session.muscles[&MuscleGroup::Glutes] - 8.4).abs() < 1e-6);
    assert!((session.muscles[&MuscleGroup::LowerBack] - 4.2).abs() < 1e-6);
}

#[test]
fn test_series_is_chronological_and_skips_empty_logs() {
    let history = vec![
        upper_log("later", hours_after_base(48)),
        workout_log("empty", hours_after_base(24), Vec::new()),
        squat_log("earlier", base_time()),
    ];
    let series = ImpulseSeries::from_history(&history, &test_catalog(), |_| true);

    assert_eq!(series.sessions().len(), 2);
    assert_eq!(series.sessions()[0].date, base_time());
    assert_eq!(series.last_impulse_at(), Some(hours_after_base(48)));
}

// === Model Evaluation ===

#[test]
fn test_empty_history_is_insufficient_data() {
    let model = FitnessFatigueModel::default();
    let snapshot = model.evaluate(&[], &test_catalog(), base_time());

    for system in PhysiologicalSystem::ALL {
        assert_eq!(snapshot.systems[&system], SystemEstimate::InsufficientData);
    }
    assert_eq!(snapshot.status, TrainingStatus::Detraining);
    assert!(snapshot.combined_performance.abs() < EPS);
    assert!(snapshot.muscles.is_empty());
}

#[test]
fn test_fatigue_dominates_right_after_session() {
    let model = FitnessFatigueModel::default();
    let snapshot = model.evaluate(
        &[squat_log("squat", base_time())],
        &test_catalog(),
        hours_after_base(1),
    );

    let muscular = snapshot.system(PhysiologicalSystem::Muscular).unwrap();
    assert!(muscular.fatigue > muscular.fitness);
    assert!((muscular.performance - (muscular.fitness - muscular.fatigue)).abs() < EPS);
    assert!(snapshot.combined_performance < 0.0);
    assert_eq!(snapshot.status, TrainingStatus::Productive);
    assert_eq!(snapshot.sessions_considered, 1);
}

#[test]
fn test_stacked_sessions_overreach() {
    let history: Vec<_> = (0..3)
        .map(|index| squat_log(&format!("squat_{index}"), base_time()))
        .collect();
    let snapshot =
        FitnessFatigueModel::default().evaluate(&history, &test_catalog(), hours_after_base(1));

    assert!(snapshot.combined_performance < -10.0);
    assert_eq!(snapshot.status, TrainingStatus::Overreaching);
}

#[test]
fn test_fitness_outlasts_fatigue() {
    let model = FitnessFatigueModel::default();
    let catalog = test_catalog();
    let as_of = base_time() + Duration::days(24);

    let single = model.evaluate(&[squat_log("a", base_time())], &catalog, as_of);
    assert!(single.combined_performance > 0.0);
    assert_eq!(single.status, TrainingStatus::Productive);

    let double = model.evaluate(
        &[squat_log("a", base_time()), squat_log("b", hours_after_base(1))],
        &catalog,
        as_of,
    );
    assert!(double.combined_performance > 5.0);
    assert_eq!(double.status, TrainingStatus::Supercompensating);
}

#[test]
fn test_long_break_is_detraining() {
    let snapshot = FitnessFatigueModel::default().evaluate(
        &[squat_log("old", base_time())],
        &test_catalog(),
        base_time() + Duration::days(150),
    );
    assert!(snapshot.system(PhysiologicalSystem::Muscular).is_some());
    assert_eq!(snapshot.status, TrainingStatus::Detraining);
}

#[test]
fn test_history_window_and_future_logs() {
    let model = FitnessFatigueModel::default();
    let catalog = test_catalog();

    let stale = model.evaluate(
        &[squat_log("stale", base_time() - Duration::days(200))],
        &catalog,
        base_time(),
    );
    assert_eq!(stale.sessions_considered, 0);
    assert_eq!(
        stale.systems[&PhysiologicalSystem::Cns],
        SystemEstimate::InsufficientData
    );

    let future = model.evaluate(
        &[squat_log("future", hours_after_base(5))],
        &catalog,
        base_time(),
    );
    assert_eq!(future.sessions_considered, 0);
}

#[test]
fn test_isolation_work_barely_loads_spine() {
    let snapshot = FitnessFatigueModel::default().evaluate(
        &[upper_log("upper", base_time())],
        &test_catalog(),
        hours_after_base(2),
    );
    let muscular = snapshot.system(PhysiologicalSystem::Muscular).unwrap();
    let spinal = snapshot.system(PhysiologicalSystem::Spinal).unwrap();
    assert!(spinal.fitness < muscular.fitness);
}

#[test]
fn test_evaluation_is_deterministic_and_order_free() {
    let model = FitnessFatigueModel::default();
    let catalog = test_catalog();
    let history = training_block();
    let mut shuffled = history.clone();
    shuffled.reverse();

    let first = model.evaluate(&history, &catalog, base_time());
    let second = model.evaluate(&shuffled, &catalog, base_time());
    assert_eq!(first, second);
    assert_eq!(first.sessions_considered, 48);
}

#[test]
fn test_muscle_fatigue_tracks_latest_session() {
    let history = vec![
        squat_log("first", base_time()),
        squat_log("second", hours_after_base(48)),
    ];
    let snapshot =
        FitnessFatigueModel::default().evaluate(&history, &test_catalog(), hours_after_base(50));
    let quads = &snapshot.muscles[&MuscleGroup::Quads];

    assert_eq!(quads.last_trained, hours_after_base(48));
    assert!((quads.last_impulse - 14.0).abs() < 1e-6);
    assert!((quads.ready_threshold - 0.7).abs() < 1e-6);
    assert!((quads.tau_hours - 72.0 / 20.0_f64.ln()).abs() < 1e-9);
    assert!(quads.current_fatigue > 14.0 * (-2.0 / quads.tau_hours).exp());
}

/// Squat 3x5 at 60 kg, RPE 6
fn light_squat_log(id: &str, date: DateTime<Utc>) -> WorkoutLog {
    workout_log(
        id,
        date,
        vec![completed_exercise(
            "db_squat",
            "Back Squat",
            vec![working_set(60.0, 5, 6.0); 3],
        )],
    )
}

#[test]
fn test_sessions_sharing_a_timestamp_add_up() {
    let model = FitnessFatigueModel::default();
    let catalog = test_catalog();
    let as_of = hours_after_base(10);
    let light_first = vec![
        light_squat_log("morning", base_time()),
        squat_log("evening", base_time()),
    ];
    let heavy_first = vec![light_first[1].clone(), light_first[0].clone()];

    let forward = model.evaluate(&light_first, &catalog, as_of);
    let backward = model.evaluate(&heavy_first, &catalog, as_of);
    assert_eq!(forward, backward);

    let light = model.evaluate(&light_first[..1], &catalog, as_of).muscles[&MuscleGroup::Quads]
        .last_impulse;
    let quads = &forward.muscles[&MuscleGroup::Quads];
    assert_eq!(quads.last_trained, base_time());
    assert!((quads.last_impulse - (14.0 + light)).abs() < 1e-6);
    assert!((quads.ready_threshold - quads.last_impulse * 0.05).abs() < 1e-9);

    let mut cache = FatigueModelCache::default();
    let cached = cache.get_or_evaluate(&model, &light_first, &catalog, as_of).unwrap();
    let reordered = cache.get_or_evaluate(&model, &heavy_first, &catalog, as_of).unwrap();
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(cached, backward);
    assert_eq!(reordered, forward);
}

#[test]
fn test_same_timestamp_series_breaks_ties_by_log_id() {
    let history = vec![
        squat_log("b", base_time()),
        light_squat_log("a", base_time()),
    ];
    let series = ImpulseSeries::from_history(&history, &test_catalog(), |_| true);
    let ids: Vec<_> = series.sessions().iter().map(|session| session.log_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_oversized_history_window_does_not_overflow() {
    let config = EngineConfig {
        fitness_fatigue: FitnessFatigueConfig {
            history_window_days: i64::MAX,
            ..FitnessFatigueConfig::default()
        },
        ..EngineConfig::default()
    };
    let model = FitnessFatigueModel::new(&config);
    let history = vec![squat_log("ancient", base_time() - Duration::days(4000))];

    let snapshot = model.evaluate(&history, &test_catalog(), base_time());
    assert_eq!(snapshot.sessions_considered, 1);
    assert!(FatigueModelCache::key_for(&model, &history, &test_catalog(), base_time()).is_ok());
}

#[test]
fn test_unresolved_exercises_surface_in_snapshot() {
    let log = workout_log(
        "mystery",
        base_time(),
        vec![completed_exercise(
            "db_unknown",
            "Zercher Carry",
            vec![working_set(60.0, 10, 7.0); 3],
        )],
    );
    let snapshot =
        FitnessFatigueModel::default().evaluate(&[log], &test_catalog(), hours_after_base(1));

    assert_eq!(snapshot.unresolved_exercises.names, vec!["Zercher Carry".to_owned()]);
    assert_eq!(snapshot.unresolved_exercises.unresolved_sets, 3);
    assert_eq!(snapshot.sessions_considered, 0);
}

// === Forecast ===

#[test]
fn test_forecast_finds_next_optimal_session() {
    let forecast = FitnessFatigueModel::default().forecast(
        &[squat_log("squat", base_time())],
        &test_catalog(),
        base_time(),
        1008,
        6,
    );

    assert_eq!(forecast.points.len(), 169);
    assert_eq!(forecast.points[0].hours_ahead, 0);
    assert_eq!(forecast.points[168].hours_ahead, 1008);
    assert_eq!(forecast.last_impulse_at, Some(base_time()));

    let peak = forecast.next_optimal_session_hour.unwrap();
    assert!((300..800).contains(&peak), "peak at {peak} h");
    let at_peak = forecast
        .points
        .iter()
        .find(|point| point.hours_ahead == peak)
        .unwrap();
    assert!(forecast
        .points
        .iter()
        .all(|point| point.combined_performance <= at_peak.combined_performance));
}

#[test]
fn test_forecast_still_rising_has_no_optimum() {
    let forecast = FitnessFatigueModel::default().forecast(
        &[squat_log("squat", base_time())],
        &test_catalog(),
        base_time(),
        48,
        6,
    );
    assert_eq!(forecast.next_optimal_session_hour, None);
}

#[test]
fn test_forecast_without_history() {
    let forecast = FitnessFatigueModel::default().forecast(&[], &test_catalog(), base_time(), 72, 0);

    // Step 0 is treated as 1 hour
    assert_eq!(forecast.points.len(), 73);
    assert_eq!(forecast.next_optimal_session_hour, None);
    assert_eq!(forecast.last_impulse_at, None);
}

#[test]
fn test_forecast_horizon_is_clamped_to_one_year() {
    let forecast = FitnessFatigueModel::default().forecast(
        &[squat_log("squat", base_time())],
        &test_catalog(),
        base_time(),
        u32::MAX,
        24,
    );

    assert_eq!(forecast.points.len(), 366);
    assert_eq!(forecast.points.last().unwrap().hours_ahead, 8760);
}

#[test]
fn test_forecast_stops_at_last_representable_time() {
    let from = DateTime::<Utc>::MAX_UTC - Duration::hours(10);
    let forecast = FitnessFatigueModel::default().forecast(&[], &test_catalog(), from, 48, 1);

    assert_eq!(forecast.points.len(), 11);
    assert_eq!(forecast.points.last().unwrap().hours_ahead, 10);
}
