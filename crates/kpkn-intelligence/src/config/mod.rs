// ABOUTME: Engine configuration with physiological defaults and KPKN_* environment overrides
// ABOUTME: Global OnceLock singleton validated on load, falling back to defaults on error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Configuration
//!
//! Every tunable of the engine (time constants, gains, thresholds) lives here
//! with a default drawn from `kpkn_core::constants::physiological`. Values can
//! be overridden through `KPKN_*` environment variables and are validated
//! before use.

/// Configuration error types
pub mod error;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use kpkn_core::constants::physiological::{fitness_fatigue, one_rep_max, recovery, volume};
use kpkn_core::models::RecoveryProfile;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use error::ConfigError;

use crate::algorithms::one_rep_max::OneRepMaxAlgorithm;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Tolerance when checking that weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Impulse-response parameters of one physiological system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemResponseConfig {
    /// Fitness decay time constant (days)
    pub tau_fitness_days: f64,
    /// Fatigue decay time constant (days)
    pub tau_fatigue_days: f64,
    /// Fitness gain (k1)
    pub k_fitness: f64,
    /// Fatigue gain (k2)
    pub k_fatigue: f64,
}

/// Fitness-fatigue model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessFatigueConfig {
    /// Peripheral muscular system
    pub muscular: SystemResponseConfig,
    /// Central nervous system
    pub cns: SystemResponseConfig,
    /// Spinal / axial loading system
    pub spinal: SystemResponseConfig,
    /// Days of history included in a recomputation
    pub history_window_days: i64,
    /// Muscular weight in combined performance
    pub muscular_weight: f64,
    /// CNS weight in combined performance
    pub cns_weight: f64,
    /// Spinal weight in combined performance
    pub spinal_weight: f64,
    /// Combined performance above which the athlete is supercompensating
    pub supercompensation_threshold: f64,
    /// Combined performance below which the athlete is overreaching
    pub overreaching_threshold: f64,
}

impl Default for FitnessFatigueConfig {
    fn default() -> Self {
        Self {
            muscular: SystemResponseConfig {
                tau_fitness_days: fitness_fatigue::MUSCULAR_TAU_FITNESS_DAYS,
                tau_fatigue_days: fitness_fatigue::MUSCULAR_TAU_FATIGUE_DAYS,
                k_fitness: fitness_fatigue::MUSCULAR_K_FITNESS,
                k_fatigue: fitness_fatigue::MUSCULAR_K_FATIGUE,
            },
            cns: SystemResponseConfig {
                tau_fitness_days: fitness_fatigue::CNS_TAU_FITNESS_DAYS,
                tau_fatigue_days: fitness_fatigue::CNS_TAU_FATIGUE_DAYS,
                k_fitness: fitness_fatigue::CNS_K_FITNESS,
                k_fatigue: fitness_fatigue::CNS_K_FATIGUE,
            },
            spinal: SystemResponseConfig {
                tau_fitness_days: fitness_fatigue::SPINAL_TAU_FITNESS_DAYS,
                tau_fatigue_days: fitness_fatigue::SPINAL_TAU_FATIGUE_DAYS,
                k_fitness: fitness_fatigue::SPINAL_K_FITNESS,
                k_fatigue: fitness_fatigue::SPINAL_K_FATIGUE,
            },
            history_window_days: fitness_fatigue::HISTORY_WINDOW_DAYS,
            muscular_weight: fitness_fatigue::MUSCULAR_WEIGHT,
            cns_weight: fitness_fatigue::CNS_WEIGHT,
            spinal_weight: fitness_fatigue::SPINAL_WEIGHT,
            supercompensation_threshold: fitness_fatigue::SUPERCOMPENSATION_THRESHOLD,
            overreaching_threshold: fitness_fatigue::OVERREACHING_THRESHOLD,
        }
    }
}

impl FitnessFatigueConfig {
    /// Oldest session date included in an evaluation at `as_of`
    ///
    /// Saturates at the earliest representable timestamp.
    #[must_use]
    pub fn window_start(&self, as_of: DateTime<Utc>) -> DateTime<Utc> {
        Duration::try_days(self.history_window_days)
            .and_then(|window| as_of.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Per-muscle recovery configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Hours for fast-recovering muscles
    pub fast_hours: f64,
    /// Hours for medium-recovering muscles
    pub medium_hours: f64,
    /// Hours for slow-recovering muscles
    pub slow_hours: f64,
    /// Hours for heavy-recovering muscles
    pub heavy_hours: f64,
    /// Fraction of the last impulse below which a muscle counts as recovered
    pub ready_fraction: f64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            fast_hours: recovery::FAST_PROFILE_HOURS,
            medium_hours: recovery::MEDIUM_PROFILE_HOURS,
            slow_hours: recovery::SLOW_PROFILE_HOURS,
            heavy_hours: recovery::HEAVY_PROFILE_HOURS,
            ready_fraction: recovery::READY_FRACTION,
        }
    }
}

impl RecoveryConfig {
    /// Baseline hours for a recovery profile
    #[must_use]
    pub const fn base_hours(&self, profile: RecoveryProfile) -> f64 {
        match profile {
            RecoveryProfile::Fast => self.fast_hours,
            RecoveryProfile::Medium => self.medium_hours,
            RecoveryProfile::Slow => self.slow_hours,
            RecoveryProfile::Heavy => self.heavy_hours,
        }
    }
}

/// Strength estimation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Formula used when callers don't pick one
    pub formula: OneRepMaxAlgorithm,
    /// Prescribed-weight rounding increment (kg)
    pub rounding_increment: f64,
    /// RPE assumed for sets without any intensity signal
    pub default_target_rpe: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            formula: OneRepMaxAlgorithm::default(),
            rounding_increment: one_rep_max::WEIGHT_ROUNDING_INCREMENT,
            default_target_rpe: one_rep_max::DEFAULT_TARGET_RPE,
        }
    }
}

/// Volume management configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Productive sets per muscle per session
    pub session_set_cap: u32,
    /// Sets per muscle per session that trigger a warning
    pub session_set_warning: u32,
    /// Session limits multiplier in a caloric deficit
    pub deficit_session_factor: f64,
    /// Number of recent feedback entries used for auto-regulation
    pub feedback_window: usize,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            session_set_cap: volume::SESSION_SET_CAP,
            session_set_warning: volume::SESSION_SET_WARNING,
            deficit_session_factor: volume::DEFICIT_SESSION_FACTOR,
            feedback_window: volume::FEEDBACK_WINDOW,
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strength estimation
    pub estimation: EstimationConfig,
    /// Fitness-fatigue model
    pub fitness_fatigue: FitnessFatigueConfig,
    /// Per-muscle recovery
    pub recovery: RecoveryConfig,
    /// Volume management
    pub volume: VolumeConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override fails to parse or the
    /// resulting configuration is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if time constants, gains, weights, or thresholds are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;

        let ff = &self.fitness_fatigue;
        for system in [&ff.muscular, &ff.cns, &ff.spinal] {
            Self::validate_system(system)?;
        }

        if !(1..=fitness_fatigue::MAX_HISTORY_WINDOW_DAYS).contains(&ff.history_window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "history_window_days must be between 1 and 3650",
            ));
        }

        let weight_sum = ff.muscular_weight + ff.cns_weight + ff.spinal_weight;
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "system performance weights must sum to 1.0",
            ));
        }
        if ff.muscular_weight < 0.0 || ff.cns_weight < 0.0 || ff.spinal_weight < 0.0 {
            return Err(ConfigError::InvalidWeights(
                "system performance weights must be non-negative",
            ));
        }

        if ff.overreaching_threshold >= ff.supercompensation_threshold {
            return Err(ConfigError::InvalidRange(
                "overreaching_threshold must be < supercompensation_threshold",
            ));
        }

        self.validate_recovery()?;
        self.validate_estimation()?;
        self.validate_volume()
    }

    /// Reject NaN and infinite values, which slip through ordered comparisons
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let ff = &self.fitness_fatigue;
        let rec = &self.recovery;
        let est = &self.estimation;
        let mut values = vec![
            ff.muscular_weight,
            ff.cns_weight,
            ff.spinal_weight,
            ff.supercompensation_threshold,
            ff.overreaching_threshold,
            rec.fast_hours,
            rec.medium_hours,
            rec.slow_hours,
            rec.heavy_hours,
            rec.ready_fraction,
            est.rounding_increment,
            est.default_target_rpe,
            self.volume.deficit_session_factor,
        ];
        for system in [&ff.muscular, &ff.cns, &ff.spinal] {
            values.extend([
                system.tau_fitness_days,
                system.tau_fatigue_days,
                system.k_fitness,
                system.k_fatigue,
            ]);
        }

        if values.iter().all(|value| value.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "configuration values must be finite numbers",
            ))
        }
    }

    fn validate_system(system: &SystemResponseConfig) -> Result<(), ConfigError> {
        if system.tau_fatigue_days <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue time constant must be positive",
            ));
        }
        if system.tau_fitness_days <= system.tau_fatigue_days {
            return Err(ConfigError::InvalidRange(
                "fitness must decay slower than fatigue (tau_fitness > tau_fatigue)",
            ));
        }
        if system.k_fitness <= 0.0 || system.k_fatigue <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fitness and fatigue gains must be positive",
            ));
        }
        Ok(())
    }

    fn validate_recovery(&self) -> Result<(), ConfigError> {
        let rec = &self.recovery;
        if !(rec.ready_fraction > 0.0 && rec.ready_fraction < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "ready_fraction must be between 0 and 1 (exclusive)",
            ));
        }
        if rec.fast_hours <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recovery profile hours must be positive",
            ));
        }
        if !(rec.fast_hours <= rec.medium_hours
            && rec.medium_hours <= rec.slow_hours
            && rec.slow_hours <= rec.heavy_hours)
        {
            return Err(ConfigError::InvalidRange(
                "recovery profile hours must be ordered fast <= medium <= slow <= heavy",
            ));
        }
        Ok(())
    }

    fn validate_estimation(&self) -> Result<(), ConfigError> {
        let est = &self.estimation;
        if est.rounding_increment <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rounding_increment must be positive",
            ));
        }
        if !(1.0..=10.0).contains(&est.default_target_rpe) {
            return Err(ConfigError::ValueOutOfRange(
                "default_target_rpe must be between 1 and 10",
            ));
        }
        Ok(())
    }

    fn validate_volume(&self) -> Result<(), ConfigError> {
        let vol = &self.volume;
        if vol.session_set_warning > vol.session_set_cap {
            return Err(ConfigError::InvalidRange(
                "session_set_warning must be <= session_set_cap",
            ));
        }
        if !(vol.deficit_session_factor > 0.0 && vol.deficit_session_factor <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "deficit_session_factor must be in (0, 1]",
            ));
        }
        if vol.feedback_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "feedback_window must be at least 1",
            ));
        }
        Ok(())
    }

    /// Apply a single environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("KPKN_ESTIMATION_FORMULA", &mut self.estimation.formula)?;
        Self::apply_env_var(
            "KPKN_ROUNDING_INCREMENT",
            &mut self.estimation.rounding_increment,
        )?;
        Self::apply_env_var(
            "KPKN_DEFAULT_TARGET_RPE",
            &mut self.estimation.default_target_rpe,
        )?;

        let ff = &mut self.fitness_fatigue;
        for (prefix, system) in [
            ("MUSCULAR", &mut ff.muscular),
            ("CNS", &mut ff.cns),
            ("SPINAL", &mut ff.spinal),
        ] {
            Self::apply_env_var(
                &format!("KPKN_{prefix}_TAU_FITNESS_DAYS"),
                &mut system.tau_fitness_days,
            )?;
            Self::apply_env_var(
                &format!("KPKN_{prefix}_TAU_FATIGUE_DAYS"),
                &mut system.tau_fatigue_days,
            )?;
            Self::apply_env_var(&format!("KPKN_{prefix}_K_FITNESS"), &mut system.k_fitness)?;
            Self::apply_env_var(&format!("KPKN_{prefix}_K_FATIGUE"), &mut system.k_fatigue)?;
        }
        Self::apply_env_var("KPKN_HISTORY_WINDOW_DAYS", &mut ff.history_window_days)?;

        Self::apply_env_var("KPKN_READY_FRACTION", &mut self.recovery.ready_fraction)?;
        Self::apply_env_var("KPKN_RECOVERY_FAST_HOURS", &mut self.recovery.fast_hours)?;
        Self::apply_env_var("KPKN_RECOVERY_MEDIUM_HOURS", &mut self.recovery.medium_hours)?;
        Self::apply_env_var("KPKN_RECOVERY_SLOW_HOURS", &mut self.recovery.slow_hours)?;
        Self::apply_env_var("KPKN_RECOVERY_HEAVY_HOURS", &mut self.recovery.heavy_hours)?;

        Self::apply_env_var("KPKN_SESSION_SET_CAP", &mut self.volume.session_set_cap)?;
        Self::apply_env_var(
            "KPKN_SESSION_SET_WARNING",
            &mut self.volume.session_set_warning,
        )?;

        Ok(self)
    }
}
