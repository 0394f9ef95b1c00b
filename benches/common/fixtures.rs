// ABOUTME: Benchmark fixtures generating deterministic training histories and catalogs
// ABOUTME: Provides reproducible workout logs of configurable size for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic training data.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{DateTime, Duration, TimeZone, Utc};
use kpkn_engine::models::{
    CompletedExercise, Exercise, ExerciseCatalog, ExerciseKind, ExerciseMuscleInfo, ExerciseSet,
    InvolvedMuscle, MuscleGroup, MuscleRole, Session, WorkoutLog,
};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One month of training
    Small,
    /// Full six-month model window
    Medium,
    /// A year, half of it outside the model window
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn sessions(self) -> usize {
        match self {
            Self::Small => 16,
            Self::Medium => 100,
            Self::Large => 200,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "16_sessions",
            Self::Medium => "100_sessions",
            Self::Large => "200_sessions",
        }
    }
}

/// Fixed evaluation time
#[must_use]
pub fn bench_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn entry(id: &str, name: &str, kind: ExerciseKind, muscles: &[(MuscleGroup, MuscleRole)]) -> ExerciseMuscleInfo {
    ExerciseMuscleInfo {
        id: id.to_owned(),
        name: name.to_owned(),
        aliases: Vec::new(),
        kind,
        involved_muscles: muscles
            .iter()
            .map(|&(muscle, role)| InvolvedMuscle { muscle, role })
            .collect(),
        untracked_muscles: Vec::new(),
        efc: None,
        cnc: None,
        ssc: None,
    }
}

/// Six-exercise catalog covering a full-body split
#[must_use]
pub fn bench_catalog() -> ExerciseCatalog {
    use MuscleGroup::{
        Biceps, Chest, FrontDelts, Glutes, Hamstrings, Lats, LowerBack, Quads, SideDelts, Traps,
        Triceps,
    };
    use MuscleRole::{Primary, Secondary, Stabilizer};

    ExerciseCatalog::new(vec![
        entry("squat", "Back Squat", ExerciseKind::Compound, &[(Quads, Primary), (Glutes, Secondary), (LowerBack, Stabilizer)]),
        entry("deadlift", "Deadlift", ExerciseKind::Compound, &[(Glutes, Primary), (Hamstrings, Primary), (LowerBack, Secondary)]),
        entry("bench", "Bench Press", ExerciseKind::Compound, &[(Chest, Primary), (Triceps, Secondary), (FrontDelts, Secondary)]),
        entry("row", "Barbell Row", ExerciseKind::Compound, &[(Lats, Primary), (Traps, Secondary), (Biceps, Secondary)]),
        entry("curl", "Barbell Curl", ExerciseKind::Isolation, &[(Biceps, Primary)]),
        entry("raise", "Lateral Raise", ExerciseKind::Isolation, &[(SideDelts, Primary)]),
    ])
}

#[allow(clippy::cast_precision_loss)]
fn sets(index: usize, weight: f64, reps: u32, count: usize) -> Vec<ExerciseSet> {
    let rpe = 7.0 + (index % 3) as f64;
    (0..count)
        .map(|_| ExerciseSet {
            weight: Some(weight),
            target_reps: Some(reps),
            completed_reps: Some(reps),
            completed_rpe: Some(rpe),
            ..ExerciseSet::default()
        })
        .collect()
}

fn completed(id: &str, name: &str, sets: Vec<ExerciseSet>) -> CompletedExercise {
    CompletedExercise {
        exercise_id: format!("prog_{id}"),
        exercise_db_id: Some(id.to_owned()),
        exercise_name: name.to_owned(),
        sets,
        ..CompletedExercise::default()
    }
}

/// Alternating lower and upper sessions every 44 hours, ending at `bench_time()`
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn generate_history(size: HistorySize) -> Vec<WorkoutLog> {
    let count = size.sessions();
    (0..count)
        .map(|index| {
            let date = bench_time() - Duration::hours(44 * (count - index) as i64);
            let progression = (index % 12) as f64 * 2.5;
            let exercises = if index % 2 == 0 {
                vec![
                    completed("squat", "Back Squat", sets(index, 120.0 + progression, 5, 5)),
                    completed("deadlift", "Deadlift", sets(index, 160.0 + progression, 3, 3)),
                ]
            } else {
                vec![
                    completed("bench", "Bench Press", sets(index, 90.0 + progression, 6, 4)),
                    completed("row", "Barbell Row", sets(index, 80.0, 8, 4)),
                    completed("curl", "Barbell Curl", sets(index, 35.0, 12, 3)),
                    completed("raise", "Lateral Raise", sets(index, 12.0, 15, 3)),
                ]
            };
            WorkoutLog {
                id: format!("bench_log_{index}"),
                date,
                session_name: format!("Session {index}"),
                completed_exercises: exercises,
            }
        })
        .collect()
}

/// A four-day planned week built from the catalog
#[must_use]
pub fn generate_week() -> Vec<Session> {
    let planned = |id: &str, name: &str, count: usize| Exercise {
        id: format!("prog_{id}"),
        name: name.to_owned(),
        exercise_db_id: Some(id.to_owned()),
        sets: sets(0, 0.0, 8, count),
        rest_time: None,
    };
    let session = |id: &str, exercises: Vec<Exercise>| Session {
        id: id.to_owned(),
        name: id.to_owned(),
        parts: Vec::new(),
        exercises,
    };

    vec![
        session("lower_a", vec![planned("squat", "Back Squat", 5), planned("deadlift", "Deadlift", 3)]),
        session("upper_a", vec![planned("bench", "Bench Press", 4), planned("row", "Barbell Row", 4), planned("curl", "Barbell Curl", 3)]),
        session("lower_b", vec![planned("deadlift", "Deadlift", 4), planned("squat", "Back Squat", 3)]),
        session("upper_b", vec![planned("row", "Barbell Row", 4), planned("bench", "Bench Press", 3), planned("raise", "Lateral Raise", 4)]),
    ]
}
