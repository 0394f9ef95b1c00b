// ABOUTME: Physiological constants backing strength estimation, volume, and recovery models
// ABOUTME: Every tunable default of the engine is named here instead of inlined in formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on strength-training research.
//!
//! Values are grouped by the model that consumes them. Engine configuration
//! defaults are built from these constants; formulas never inline them.

/// One-rep-max estimation constants
pub mod one_rep_max {
    /// Brzycki numerator (Brzycki, 1993): `1RM = w * 36 / (37 - r)`
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;

    /// Brzycki denominator offset; the formula is singular at this rep count
    pub const BRZYCKI_DENOMINATOR: f64 = 37.0;

    /// Reps beyond which Brzycki stops being meaningful; inputs are clamped here
    pub const BRZYCKI_MAX_REPS: u32 = 30;

    /// Epley divisor (Epley, 1985): `1RM = w * (1 + r / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;

    /// Last rep count where the hybrid estimate is pure Brzycki
    pub const HYBRID_BRZYCKI_UPPER_REPS: u32 = 10;

    /// Last rep count of the Brzycki-to-Epley blend
    pub const HYBRID_EPLEY_UPPER_REPS: u32 = 20;

    /// Hard cap on reps for the high-rep extrapolation
    pub const HYBRID_MAX_REPS: u32 = 50;

    /// Divisor of the high-rep extrapolation term
    pub const HYBRID_HIGH_REP_DIVISOR: f64 = 80.0;

    /// Exponent damping the high-rep extrapolation
    pub const HYBRID_HIGH_REP_EXPONENT: f64 = 0.9;

    /// AMRAP sets above this rep count get a bonus for the extra effort
    pub const AMRAP_BONUS_MIN_REPS: u32 = 3;

    /// Multiplier applied to AMRAP-derived estimates
    pub const AMRAP_BONUS_FACTOR: f64 = 1.025;

    /// Default RPE when a set carries no intensity signal at all
    pub const DEFAULT_TARGET_RPE: f64 = 8.0;

    /// Rep target assumed when an RPE/RIR set has no planned reps
    pub const DEFAULT_TARGET_REPS: u32 = 8;

    /// Rounding increment for prescribed weights (kg)
    pub const WEIGHT_ROUNDING_INCREMENT: f64 = 0.25;

    /// Smallest plate pair increment in kilograms
    pub const KG_PLATE_INCREMENT: f64 = 1.25;

    /// Smallest plate pair increment in pounds
    pub const LB_PLATE_INCREMENT: f64 = 2.5;
}

/// Rest interval heuristics (seconds)
pub mod rest {
    /// Default rest between working sets
    pub const BASE_REST_SECONDS: u32 = 150;
    /// Rest near failure or near maximal load
    pub const MAXIMAL_REST_SECONDS: u32 = 180;
    /// Rest for high-intensity work
    pub const HIGH_INTENSITY_REST_SECONDS: u32 = 165;
    /// Rest for high-volume sessions
    pub const HIGH_VOLUME_REST_SECONDS: u32 = 120;
    /// Extra rest when accumulated fatigue drain is high
    pub const FATIGUE_EXTRA_SECONDS: u32 = 30;
    /// Lower clamp
    pub const MIN_REST_SECONDS: u32 = 60;
    /// Upper clamp
    pub const MAX_REST_SECONDS: u32 = 300;
    /// Suggestions are rounded to this step
    pub const REST_STEP_SECONDS: u32 = 30;
    /// RPE considered near failure
    pub const NEAR_FAILURE_RPE: f64 = 9.0;
    /// RPE considered high intensity
    pub const HIGH_INTENSITY_RPE: f64 = 8.0;
    /// %1RM considered near maximal
    pub const NEAR_MAXIMAL_PERCENT: f64 = 85.0;
    /// %1RM considered high intensity
    pub const HIGH_INTENSITY_PERCENT: f64 = 80.0;
    /// Normalized fatigue drain above which extra rest is prescribed
    pub const HIGH_DRAIN_THRESHOLD: f64 = 0.5;
}

/// Body composition constants
pub mod body_composition {
    /// Reference height (m) for normalized FFMI (Kouri et al., 1995)
    pub const FFMI_REFERENCE_HEIGHT_M: f64 = 1.8;

    /// Height correction slope for normalized FFMI
    pub const FFMI_HEIGHT_CORRECTION: f64 = 6.1;

    /// Normalized FFMI where the Average category starts
    pub const FFMI_AVERAGE_THRESHOLD: f64 = 20.0;

    /// Normalized FFMI where the Excellent category starts
    pub const FFMI_EXCELLENT_THRESHOLD: f64 = 22.0;

    /// Normalized FFMI where the Elite category starts
    pub const FFMI_ELITE_THRESHOLD: f64 = 26.0;

    /// Pounds to kilograms
    pub const LB_TO_KG: f64 = 0.453_592_37;

    /// Minimum bodyweight (kg) for IPF GL points, men
    pub const IPF_GL_MIN_BODYWEIGHT_MEN_KG: f64 = 40.0;

    /// Minimum bodyweight (kg) for IPF GL points, women
    pub const IPF_GL_MIN_BODYWEIGHT_WOMEN_KG: f64 = 35.0;
}

/// Volume landmark constants (effective sets per muscle per week)
pub mod volume {
    /// Hypertrophy credit for a primary mover
    pub const HYPERTROPHY_PRIMARY_CREDIT: f64 = 1.0;
    /// Hypertrophy credit for a secondary mover
    pub const HYPERTROPHY_SECONDARY_CREDIT: f64 = 0.5;

    /// Fatigue credit for a primary mover
    pub const FATIGUE_PRIMARY_CREDIT: f64 = 1.0;
    /// Fatigue credit for a secondary mover
    pub const FATIGUE_SECONDARY_CREDIT: f64 = 0.6;
    /// Fatigue credit for a stabilizer
    pub const FATIGUE_STABILIZER_CREDIT: f64 = 0.3;
    /// Fatigue credit for a neutralizer
    pub const FATIGUE_NEUTRALIZER_CREDIT: f64 = 0.15;

    /// Profile score multiplier at the minimum total score
    pub const PROFILE_MULTIPLIER_BASE: f64 = 0.8;
    /// Profile score multiplier increase per point above the minimum
    pub const PROFILE_MULTIPLIER_STEP: f64 = 0.05;

    /// Intensity factor when training to failure
    pub const INTENSITY_FACTOR_FAILURE: f64 = 0.6;
    /// Intensity factor at RIR 2-3
    pub const INTENSITY_FACTOR_RIR_HIGH: f64 = 1.0;
    /// Intensity factor at RIR 3-4
    pub const INTENSITY_FACTOR_RIR_LOW: f64 = 1.2;

    /// Accumulation phase (MAV, MRV) factors
    pub const ACCUMULATION_FACTORS: (f64, f64) = (1.10, 1.0);
    /// Intensification phase (MAV, MRV) factors
    pub const INTENSIFICATION_FACTORS: (f64, f64) = (0.85, 0.90);
    /// Realization phase (MAV, MRV) factors
    pub const REALIZATION_FACTORS: (f64, f64) = (0.60, 0.75);
    /// Deload phase (MAV, MRV) factors
    pub const DELOAD_FACTORS: (f64, f64) = (0.50, 0.60);

    /// Weekly capacity phase factors
    pub const ACCUMULATION_CAPACITY: f64 = 1.0;
    /// Weekly capacity factor for intensification
    pub const INTENSIFICATION_CAPACITY: f64 = 0.75;
    /// Weekly capacity factor for realization
    pub const REALIZATION_CAPACITY: f64 = 0.5;
    /// Weekly capacity factor for deload
    pub const DELOAD_CAPACITY: f64 = 0.4;

    /// Generic weekly set range without an athlete profile
    pub const GENERIC_WEEKLY_SETS: (u32, u32) = (10, 20);
    /// Beginner hypertrophy weekly set capacity
    pub const BEGINNER_WEEKLY_SETS: (f64, f64) = (10.0, 14.0);
    /// Advanced hypertrophy weekly set capacity
    pub const ADVANCED_WEEKLY_SETS: (f64, f64) = (14.0, 22.0);
    /// Beginner powerlifting monthly number of lifts
    pub const BEGINNER_MONTHLY_LIFTS: (f64, f64) = (1000.0, 1300.0);
    /// Advanced powerlifting monthly number of lifts
    pub const ADVANCED_MONTHLY_LIFTS: (f64, f64) = (1300.0, 2500.0);
    /// Weeks per month used to spread monthly lift counts
    pub const WEEKS_PER_MONTH: f64 = 4.0;

    /// Productive sets per muscle per session
    pub const SESSION_SET_CAP: u32 = 12;
    /// Sets per session that trigger a warning
    pub const SESSION_SET_WARNING: u32 = 10;
    /// Session cap multiplier during a caloric deficit
    pub const DEFICIT_SESSION_FACTOR: f64 = 0.8;

    /// Feedback entries averaged for auto-regulation
    pub const FEEDBACK_WINDOW: usize = 3;
    /// Average soreness at or above which volume is reduced
    pub const HIGH_DOMS: f64 = 3.5;
    /// Average soreness at or below which volume may rise
    pub const LOW_DOMS: f64 = 1.5;
    /// Average strength rating at or below which volume is reduced
    pub const LOW_STRENGTH: f64 = 5.0;
    /// Average strength rating at or above which volume may rise
    pub const HIGH_STRENGTH: f64 = 8.0;
    /// Volume multiplier under recovery debt
    pub const RECOVERY_DEBT_FACTOR: f64 = 0.85;
    /// Volume multiplier when undertraining
    pub const UNDERTRAINING_FACTOR: f64 = 1.1;
}

/// Fitness-fatigue (Banister impulse-response) constants
///
/// # Scientific References
///
/// - Banister, E.W. et al. (1975). "A systems model of training for athletic performance."
/// - Busso, T. (2003). "Variable dose-response relationship between exercise training and performance."
pub mod fitness_fatigue {
    /// Muscular fitness time constant (days)
    pub const MUSCULAR_TAU_FITNESS_DAYS: f64 = 42.0;
    /// Muscular fatigue time constant (days)
    pub const MUSCULAR_TAU_FATIGUE_DAYS: f64 = 10.0;
    /// Muscular fitness gain
    pub const MUSCULAR_K_FITNESS: f64 = 1.0;
    /// Muscular fatigue gain
    pub const MUSCULAR_K_FATIGUE: f64 = 1.5;

    /// CNS fitness time constant (days)
    pub const CNS_TAU_FITNESS_DAYS: f64 = 35.0;
    /// CNS fatigue time constant (days)
    pub const CNS_TAU_FATIGUE_DAYS: f64 = 7.0;
    /// CNS fitness gain
    pub const CNS_K_FITNESS: f64 = 1.0;
    /// CNS fatigue gain
    pub const CNS_K_FATIGUE: f64 = 2.0;

    /// Spinal fitness time constant (days)
    pub const SPINAL_TAU_FITNESS_DAYS: f64 = 45.0;
    /// Spinal fatigue time constant (days)
    pub const SPINAL_TAU_FATIGUE_DAYS: f64 = 10.0;
    /// Spinal fitness gain
    pub const SPINAL_K_FITNESS: f64 = 0.6;
    /// Spinal fatigue gain
    pub const SPINAL_K_FATIGUE: f64 = 1.2;

    /// Days of history considered by a recomputation
    pub const HISTORY_WINDOW_DAYS: i64 = 180;
    /// Longest accepted history window (days)
    pub const MAX_HISTORY_WINDOW_DAYS: i64 = 3650;
    /// Longest forecast horizon (hours); longer requests are clamped
    pub const MAX_FORECAST_HORIZON_HOURS: u32 = 8760;

    /// Weight of the muscular system in combined performance
    pub const MUSCULAR_WEIGHT: f64 = 0.4;
    /// Weight of the CNS in combined performance
    pub const CNS_WEIGHT: f64 = 0.35;
    /// Weight of the spinal system in combined performance
    pub const SPINAL_WEIGHT: f64 = 0.25;

    /// Tonnage proxy per rep for unweighted sets
    pub const BODYWEIGHT_REP_TONNES: f64 = 0.02;

    /// Intensity multiplier at failure (effective RPE >= 11)
    pub const INTENSITY_FAILURE: f64 = 1.8;
    /// Intensity multiplier at RPE 10
    pub const INTENSITY_RPE_10: f64 = 1.5;
    /// Intensity multiplier at RPE 9
    pub const INTENSITY_RPE_9: f64 = 1.15;
    /// Intensity multiplier at RPE 8
    pub const INTENSITY_RPE_8: f64 = 1.0;
    /// Intensity multiplier at RPE 6-7
    pub const INTENSITY_RPE_6: f64 = 0.7;
    /// Intensity multiplier below RPE 6
    pub const INTENSITY_LOW: f64 = 0.4;
    /// Effective RPE assumed for sets with no intensity data
    pub const DEFAULT_EFFECTIVE_RPE: f64 = 7.0;
    /// Effective RPE floor for failure and AMRAP sets
    pub const FAILURE_EFFECTIVE_RPE: f64 = 11.0;

    /// Compound movement (muscular, CNS, spinal) coefficients
    pub const COMPOUND_COEFFICIENTS: (f64, f64, f64) = (4.0, 4.0, 1.0);
    /// Accessory movement coefficients
    pub const ACCESSORY_COEFFICIENTS: (f64, f64, f64) = (2.5, 2.5, 0.1);
    /// Isolation movement coefficients
    pub const ISOLATION_COEFFICIENTS: (f64, f64, f64) = (1.5, 1.5, 0.1);

    /// Combined performance above which the athlete is supercompensating
    pub const SUPERCOMPENSATION_THRESHOLD: f64 = 5.0;
    /// Combined performance below which the athlete is overreaching
    pub const OVERREACHING_THRESHOLD: f64 = -10.0;
    /// Fatigue-to-fitness ratio below which training has effectively stopped
    pub const DETRAINING_FATIGUE_RATIO: f64 = 0.05;

    /// Feedback factor offset: `0.5 + score / 10`
    pub const FEEDBACK_FACTOR_BASE: f64 = 0.5;
    /// Feedback factor divisor
    pub const FEEDBACK_FACTOR_SCALE: f64 = 10.0;
    /// Technique score with no effect on CNS load
    pub const TECHNIQUE_NEUTRAL_SCORE: f64 = 5.0;
    /// Technique factor divisor: `1 + (5 - quality) / 20`
    pub const TECHNIQUE_FACTOR_SCALE: f64 = 20.0;
}

/// Per-muscle recovery constants
pub mod recovery {
    /// Fast-recovering muscles (arms, delts, calves, abs)
    pub const FAST_PROFILE_HOURS: f64 = 24.0;
    /// Medium-recovering muscles (chest, lats, traps)
    pub const MEDIUM_PROFILE_HOURS: f64 = 48.0;
    /// Slow-recovering muscles (quads, glutes)
    pub const SLOW_PROFILE_HOURS: f64 = 72.0;
    /// Heavy-recovering muscles (hamstrings, lower back)
    pub const HEAVY_PROFILE_HOURS: f64 = 96.0;

    /// Remaining fraction of the last impulse considered "ready"
    pub const READY_FRACTION: f64 = 0.05;

    /// Age above which recovery slows
    pub const AGE_PENALTY_START: u32 = 35;
    /// Recovery slowdown per year above the threshold
    pub const AGE_PENALTY_PER_YEAR: f64 = 0.01;
    /// Multiplier for female athletes
    pub const FEMALE_MULTIPLIER: f64 = 0.85;
    /// Sleep under this many hours is severe deprivation
    pub const SEVERE_SLEEP_HOURS: f64 = 6.0;
    /// Multiplier for severe deprivation
    pub const SEVERE_SLEEP_MULTIPLIER: f64 = 1.5;
    /// Sleep under this many hours is mild deprivation
    pub const MILD_SLEEP_HOURS: f64 = 7.0;
    /// Multiplier for mild deprivation
    pub const MILD_SLEEP_MULTIPLIER: f64 = 1.2;
    /// Sleep at or above this many hours is excellent
    pub const EXCELLENT_SLEEP_HOURS: f64 = 8.5;
    /// Multiplier for excellent sleep
    pub const EXCELLENT_SLEEP_MULTIPLIER: f64 = 0.8;
    /// Sleep at or above this many hours is good
    pub const GOOD_SLEEP_HOURS: f64 = 7.5;
    /// Multiplier for good sleep
    pub const GOOD_SLEEP_MULTIPLIER: f64 = 0.9;
    /// Multiplier in a caloric deficit
    pub const DEFICIT_MULTIPLIER: f64 = 1.35;
    /// Multiplier in a caloric surplus
    pub const SURPLUS_MULTIPLIER: f64 = 0.85;
    /// Stress level (1-5) at or above which recovery slows
    pub const HIGH_STRESS_LEVEL: u8 = 4;
    /// Multiplier under high stress
    pub const HIGH_STRESS_MULTIPLIER: f64 = 1.4;
    /// Floor of the combined personal multiplier
    pub const MIN_PERSONAL_MULTIPLIER: f64 = 0.5;

    /// Learning rate when calibrating the recovery rate from felt recovery
    pub const LEARNING_RATE: f64 = 0.005;
    /// Lower bound of the learned recovery rate
    pub const MIN_RECOVERY_RATE: f64 = 0.5;
    /// Upper bound of the learned recovery rate
    pub const MAX_RECOVERY_RATE: f64 = 2.0;
}

/// Subjective feedback scale
pub mod feedback {
    /// Lowest score on the 1-10 feedback scales
    pub const MIN_SCORE: f64 = 1.0;
    /// Highest score on the 1-10 feedback scales
    pub const MAX_SCORE: f64 = 10.0;
    /// Technique quality assumed when unreported
    pub const DEFAULT_TECHNICAL_QUALITY: f64 = 8.0;
    /// Joint load assumed when unreported (mid-scale)
    pub const DEFAULT_JOINT_LOAD: f64 = 5.0;
    /// Perceived fatigue assumed when unreported (mid-scale)
    pub const DEFAULT_PERCEIVED_FATIGUE: f64 = 5.0;
}

/// Athlete profiling questionnaire
pub mod profiling {
    /// Lowest answer score
    pub const MIN_ANSWER_SCORE: u8 = 1;
    /// Highest answer score
    pub const MAX_ANSWER_SCORE: u8 = 3;
    /// Total score at which an athlete is classified as advanced
    pub const ADVANCED_MIN_TOTAL: u8 = 8;
    /// Lowest possible total (four scored questions)
    pub const MIN_TOTAL: u8 = 4;
}
