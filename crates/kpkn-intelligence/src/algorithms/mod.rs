// ABOUTME: Strength estimation algorithms - one-rep-max formulas, RPE chart, and load prescription
// ABOUTME: Pure numeric functions with documented handling of invalid inputs

/// Prescribed weight, rounding, and rest suggestions
pub mod intensity;
/// One-rep-max estimation formulas
pub mod one_rep_max;
/// RPE chart (reps-to-failure to %1RM)
pub mod rpe_chart;

pub use intensity::{
    calculate_weight_from_1rm_and_intensity, calculate_weight_with_config,
    effective_reps_to_failure, round_to_increment, round_to_plate, suggest_rest_seconds,
};
pub use one_rep_max::{
    amrap_adjusted, calculate_brzycki_1rm, calculate_epley_1rm, calculate_hybrid_1rm,
    OneRepMaxAlgorithm,
};
pub use rpe_chart::{estimate_percent_1rm, percent_of_1rm, rir_to_rpe, rpe_to_rir};
