// ABOUTME: Deterministic training fixtures for intelligence integration tests
// ABOUTME: Catalog entries with known muscle roles and builders for sets, sessions, and logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use kpkn_engine::models::{
    AthleteProfileScore, CompletedExercise, Exercise, ExerciseCatalog, ExerciseKind,
    ExerciseMuscleInfo, ExerciseSet, InvolvedMuscle, MuscleGroup, MuscleRole, ProfileAnswers,
    Session, TrainingStyle, WorkoutLog,
};

/// Fixed reference time so every test is reproducible
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
}

/// `base_time()` plus a number of hours
pub fn hours_after_base(hours: i64) -> DateTime<Utc> {
    base_time() + Duration::hours(hours)
}

fn involved(muscle: MuscleGroup, role: MuscleRole) -> InvolvedMuscle {
    InvolvedMuscle { muscle, role }
}

fn entry(
    id: &str,
    name: &str,
    aliases: &[&str],
    kind: ExerciseKind,
    muscles: Vec<InvolvedMuscle>,
) -> ExerciseMuscleInfo {
    ExerciseMuscleInfo {
        id: id.to_owned(),
        name: name.to_owned(),
        aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
        kind,
        involved_muscles: muscles,
        untracked_muscles: Vec::new(),
        efc: None,
        cnc: None,
        ssc: None,
    }
}

/// Squat, bench press, barbell curl, and lateral raise
pub fn test_catalog() -> ExerciseCatalog {
    ExerciseCatalog::new(vec![
        entry(
            "db_squat",
            "Back Squat",
            &["sentadilla"],
            ExerciseKind::Compound,
            vec![
                involved(MuscleGroup::Quads, MuscleRole::Primary),
                involved(MuscleGroup::Glutes, MuscleRole::Secondary),
                involved(MuscleGroup::LowerBack, MuscleRole::Stabilizer),
            ],
        ),
        entry(
            "db_bench",
            "Bench Press",
            &["press banca"],
            ExerciseKind::Compound,
            vec![
                involved(MuscleGroup::Chest, MuscleRole::Primary),
                involved(MuscleGroup::Triceps, MuscleRole::Secondary),
                involved(MuscleGroup::FrontDelts, MuscleRole::Secondary),
                involved(MuscleGroup::Triceps, MuscleRole::Primary),
            ],
        ),
        entry(
            "db_curl",
            "Barbell Curl",
            &[],
            ExerciseKind::Isolation,
            vec![
                involved(MuscleGroup::Biceps, MuscleRole::Primary),
                involved(MuscleGroup::Forearms, MuscleRole::Secondary),
            ],
        ),
        entry(
            "db_lateral_raise",
            "Lateral Raise",
            &["side raise"],
            ExerciseKind::Isolation,
            vec![involved(MuscleGroup::SideDelts, MuscleRole::Primary)],
        ),
    ])
}

/// A working set with weight, reps, and RPE
pub fn working_set(weight: f64, reps: u32, rpe: f64) -> ExerciseSet {
    ExerciseSet {
        weight: Some(weight),
        target_reps: Some(reps),
        completed_reps: Some(reps),
        completed_rpe: Some(rpe),
        ..ExerciseSet::default()
    }
}

/// A planned set with reps and target RPE
pub fn planned_set(reps: u32, rpe: f64) -> ExerciseSet {
    ExerciseSet {
        target_reps: Some(reps),
        target_rpe: Some(rpe),
        ..ExerciseSet::default()
    }
}

/// Planned exercise linked to the catalog by id
pub fn planned_exercise(db_id: &str, name: &str, sets: usize) -> Exercise {
    Exercise {
        id: format!("prog_{db_id}"),
        name: name.to_owned(),
        exercise_db_id: Some(db_id.to_owned()),
        sets: vec![planned_set(8, 8.0); sets],
        rest_time: None,
    }
}

/// Planned session with a flat exercise list
pub fn planned_session(id: &str, exercises: Vec<Exercise>) -> Session {
    Session {
        id: id.to_owned(),
        name: id.to_owned(),
        parts: Vec::new(),
        exercises,
    }
}

/// Completed exercise linked to the catalog by id
pub fn completed_exercise(db_id: &str, name: &str, sets: Vec<ExerciseSet>) -> CompletedExercise {
    CompletedExercise {
        exercise_id: format!("prog_{db_id}"),
        exercise_db_id: Some(db_id.to_owned()),
        exercise_name: name.to_owned(),
        sets,
        ..CompletedExercise::default()
    }
}

/// Workout log at a point in time
pub fn workout_log(id: &str, date: DateTime<Utc>, exercises: Vec<CompletedExercise>) -> WorkoutLog {
    WorkoutLog {
        id: id.to_owned(),
        date,
        session_name: id.to_owned(),
        completed_exercises: exercises,
    }
}

/// Squat 5x5 at 140 kg, RPE 8
pub fn squat_log(id: &str, date: DateTime<Utc>) -> WorkoutLog {
    workout_log(
        id,
        date,
        vec![completed_exercise(
            "db_squat",
            "Back Squat",
            vec![working_set(140.0, 5, 8.0); 5],
        )],
    )
}

/// Bench 4x6 at 100 kg RPE 8 plus curls 3x10 at 40 kg RPE 9
pub fn upper_log(id: &str, date: DateTime<Utc>) -> WorkoutLog {
    workout_log(
        id,
        date,
        vec![
            completed_exercise("db_bench", "Bench Press", vec![working_set(100.0, 6, 8.0); 4]),
            completed_exercise("db_curl", "Barbell Curl", vec![working_set(40.0, 10, 9.0); 3]),
        ],
    )
}

/// Twelve weeks of alternating lower and upper sessions, four per week, ending at `base_time()`
pub fn training_block() -> Vec<WorkoutLog> {
    (0..48)
        .map(|index| {
            let date = base_time() - Duration::hours(42 * (48 - index));
            let id = format!("log_{index}");
            if index % 2 == 0 {
                squat_log(&id, date)
            } else {
                upper_log(&id, date)
            }
        })
        .collect()
}

/// Profile score from the four scored answers
pub fn profile(technical: u8, consistency: u8, strength: u8, mobility: u8) -> AthleteProfileScore {
    AthleteProfileScore::from_answers(&ProfileAnswers {
        training_style: TrainingStyle::Powerbuilder,
        technical_score: technical,
        consistency_score: consistency,
        strength_score: strength,
        mobility_score: mobility,
    })
    .unwrap()
}
