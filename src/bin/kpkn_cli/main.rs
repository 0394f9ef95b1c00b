// ABOUTME: KPKN CLI - command-line front end for the training load and recovery engine
// ABOUTME: Reads JSON inputs, runs one engine computation, and prints pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate a one-rep max
//! kpkn-cli one-rm --weight 100 --reps 5 --formula brzycki
//!
//! # Working weight for 5 reps at RPE 8
//! kpkn-cli target-weight --one-rm 140 --reps 5 --rpe 8
//!
//! # Personalized weekly landmarks
//! kpkn-cli landmarks --profile profile.json --phase intensification
//!
//! # Fitness-fatigue snapshot with a six-week forecast
//! kpkn-cli fatigue --history logs.json --catalog catalog.json --forecast-hours 1008
//!
//! # Recovery outlook for one muscle
//! kpkn-cli recovery --history logs.json --catalog catalog.json --muscle quads
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use kpkn_engine::intelligence::algorithms::OneRepMaxAlgorithm;
use kpkn_engine::intelligence::body_composition::{Equipment, Gender, IpfGlOptions, Lift};
use kpkn_engine::logging::LoggingConfig;
use kpkn_engine::models::{MuscleGroup, WeightUnit};

use commands::recovery::{ForecastWindow, HistoryInput};
use commands::strength::TargetIntensity;
use commands::volume::LandmarkOptions;

#[derive(Parser)]
#[command(
    name = "kpkn-cli",
    about = "KPKN training load and recovery engine",
    long_about = "Strength estimation, body composition, volume landmarks, and fitness-fatigue recovery modeling from JSON inputs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate a one-rep max from a weight and rep count
    OneRm {
        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Repetitions performed
        #[arg(long)]
        reps: u32,

        /// Estimation formula (brzycki, epley, hybrid)
        #[arg(long, default_value = "hybrid")]
        formula: OneRepMaxAlgorithm,
    },

    /// Prescribe a working weight from a reference one-rep max
    TargetWeight {
        /// Reference one-rep max
        #[arg(long = "one-rm")]
        one_rm: f64,

        /// Planned repetitions
        #[arg(long)]
        reps: u32,

        /// Target RPE
        #[arg(long, conflicts_with_all = ["rir", "percent"])]
        rpe: Option<f64>,

        /// Target reps in reserve
        #[arg(long, conflicts_with = "percent")]
        rir: Option<f64>,

        /// Percentage of 1RM
        #[arg(long)]
        percent: Option<f64>,

        /// Prescription mode (rpe, rir, failure, load, solo_rm)
        #[arg(long)]
        mode: Option<String>,

        /// Weight unit for plate rounding
        #[arg(long, default_value = "kg")]
        unit: WeightUnit,
    },

    /// Fat-free mass index
    Ffmi {
        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Bodyweight in kilograms
        #[arg(long)]
        weight: f64,

        /// Body fat percentage
        #[arg(long)]
        body_fat: Option<f64>,
    },

    /// IPF GL points for a total or single lift
    IpfGl {
        /// Weight lifted
        #[arg(long)]
        total: f64,

        /// Lifter bodyweight
        #[arg(long)]
        bodyweight: f64,

        /// Coefficient set (male, female)
        #[arg(long, default_value = "male")]
        gender: Gender,

        /// Equipment (classic, equipped)
        #[arg(long, default_value = "classic")]
        equipment: Equipment,

        /// Scored lift (total, bench, squat, deadlift)
        #[arg(long, default_value = "total")]
        lift: Lift,

        /// Unit of both weights (kg, lb)
        #[arg(long, default_value = "kg")]
        unit: WeightUnit,
    },

    /// Weekly MEV/MAV/MRV landmarks per muscle
    Landmarks {
        /// Athlete profile score JSON; generic landmarks when omitted
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Mesocycle phase (accumulation, intensification, realization, deload, custom)
        #[arg(long)]
        phase: Option<String>,

        /// Intensity preference (Failure, RIR_High, RIR_Low)
        #[arg(long)]
        intensity: Option<String>,

        /// Volume engine (Aesthetics, Powerlifting, Powerbuilding)
        #[arg(long)]
        training_profile: Option<String>,
    },

    /// Effective sets per muscle group
    Volume {
        /// Planned sessions JSON (or workout logs with --logs)
        #[arg(long)]
        sessions: PathBuf,

        /// Exercise catalog JSON
        #[arg(long)]
        catalog: PathBuf,

        /// Treat the input as completed workout logs
        #[arg(long)]
        logs: bool,
    },

    /// Fitness-fatigue snapshot per physiological system
    Fatigue {
        /// Workout log history JSON
        #[arg(long)]
        history: PathBuf,

        /// Exercise catalog JSON
        #[arg(long)]
        catalog: PathBuf,

        /// Evaluation time (RFC 3339), defaults to now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,

        /// Also project performance this many hours ahead
        #[arg(long)]
        forecast_hours: Option<u32>,

        /// Hours between forecast points
        #[arg(long, default_value = "6")]
        forecast_step: u32,
    },

    /// Hours until each muscle is recovered
    Recovery {
        /// Workout log history JSON
        #[arg(long)]
        history: PathBuf,

        /// Exercise catalog JSON
        #[arg(long)]
        catalog: PathBuf,

        /// Evaluation time (RFC 3339), defaults to now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,

        /// Single muscle group; all muscles when omitted
        #[arg(long)]
        muscle: Option<MuscleGroup>,

        /// Lifestyle recovery modifiers JSON
        #[arg(long)]
        modifiers: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::OneRm {
            weight,
            reps,
            formula,
        } => commands::strength::one_rm(weight, reps, formula),
        Command::TargetWeight {
            one_rm,
            reps,
            rpe,
            rir,
            percent,
            mode,
            unit,
        } => commands::strength::target_weight(
            one_rm,
            reps,
            TargetIntensity {
                rpe,
                rir,
                percent,
                mode,
            },
            unit,
        ),
        Command::Ffmi {
            height,
            weight,
            body_fat,
        } => commands::body::ffmi(height, weight, body_fat),
        Command::IpfGl {
            total,
            bodyweight,
            gender,
            equipment,
            lift,
            unit,
        } => commands::body::ipf_gl(
            total,
            bodyweight,
            IpfGlOptions {
                gender,
                equipment,
                lift,
                weight_unit: unit,
            },
        ),
        Command::Landmarks {
            profile,
            phase,
            intensity,
            training_profile,
        } => commands::volume::landmarks(&LandmarkOptions {
            profile: profile.as_deref(),
            phase: phase.as_deref(),
            intensity: intensity.as_deref(),
            training_profile: training_profile.as_deref(),
        }),
        Command::Volume {
            sessions,
            catalog,
            logs,
        } => commands::volume::volume(&sessions, &catalog, logs),
        Command::Fatigue {
            history,
            catalog,
            as_of,
            forecast_hours,
            forecast_step,
        } => commands::recovery::fatigue(
            &HistoryInput {
                history: &history,
                catalog: &catalog,
                as_of,
            },
            forecast_hours.map(|hours| ForecastWindow {
                hours,
                step: forecast_step,
            }),
        ),
        Command::Recovery {
            history,
            catalog,
            as_of,
            muscle,
            modifiers,
        } => commands::recovery::recovery(
            &HistoryInput {
                history: &history,
                catalog: &catalog,
                as_of,
            },
            muscle,
            modifiers.as_deref(),
        ),
    }
}
