// ABOUTME: Volume module - weekly landmarks, session caps, auto-regulation, and unified volume
// ABOUTME: Re-exports the landmark generators and the per-muscle volume aggregation

/// MEV/MAV/MRV generators, weekly targets, and session checks
pub mod landmarks;
/// Per-muscle effective set aggregation
pub mod unified;

pub use landmarks::{
    calculate_fractional_volume, calculate_volume_adjustment, calculate_weekly_volume,
    get_israetel_volume_recommendations, get_kpkn_volume_recommendations, validate_session_volume,
    AdjustmentStatus, SessionVolumeCheck, SessionVolumeStatus, VolumeAdjustment, VolumeAdvisor,
    VolumeUnit, WeeklyVolumeTarget,
};
pub use unified::{
    calculate_unified_muscle_volume, calculate_unified_muscle_volume_from_logs, MuscleVolume,
    MuscleVolumeReport, UnresolvedExercises,
};
