// ABOUTME: Banister fitness-fatigue model for muscular, CNS, and spinal systems
// ABOUTME: Stateless closed-form recomputation over a rolling history window with forecasting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitness-Fatigue Model
//!
//! Every session impulse `w_i` feeds two exponentially decaying traces per
//! physiological system:
//!
//! ```text
//! fitness(t) = k1 x Σ w_i x e^(-(t - t_i) / τ_fitness)
//! fatigue(t) = k2 x Σ w_i x e^(-(t - t_i) / τ_fatigue)
//! performance(t) = fitness(t) - fatigue(t)
//! ```
//!
//! The sums are evaluated in closed form from the history window on every
//! query, so there is no incremental state to drift or persist.
//!
//! # Scientific References
//!
//! - Banister, E.W., Calvert, T.W., Savage, M.V., Bach, T. (1975). "A systems model of
//!   training for athletic performance." *Aust J Sports Med*, 7, 57-61.
//! - Busso, T. (2003). "Variable dose-response relationship between exercise training
//!   and performance." *Med Sci Sports Exerc*, 35(7), 1188-1195.
//! - Chiu, L.Z., Barnes, J.L. (2003). "The fitness-fatigue model revisited: implications
//!   for planning short- and long-term training." *Strength Cond J*, 25(6), 42-51.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use kpkn_core::constants::physiological::fitness_fatigue::{
    DETRAINING_FATIGUE_RATIO, MAX_FORECAST_HORIZON_HOURS,
};
use kpkn_core::models::{ExerciseCatalog, MuscleGroup, WorkoutLog};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{EngineConfig, FitnessFatigueConfig, RecoveryConfig, SystemResponseConfig};
use crate::impulse::{ImpulseSeries, SystemLoad};
use crate::volume::UnresolvedExercises;

const HOURS_PER_DAY: f64 = 24.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Physiological systems tracked by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysiologicalSystem {
    /// Peripheral muscular system
    Muscular,
    /// Central nervous system
    Cns,
    /// Axial skeleton and spinal structures
    Spinal,
}

impl PhysiologicalSystem {
    /// All systems
    pub const ALL: [Self; 3] = [Self::Muscular, Self::Cns, Self::Spinal];

    const fn load(self, load: &SystemLoad) -> f64 {
        match self {
            Self::Muscular => load.muscular,
            Self::Cns => load.cns,
            Self::Spinal => load.spinal,
        }
    }

    const fn response(self, config: &FitnessFatigueConfig) -> &SystemResponseConfig {
        match self {
            Self::Muscular => &config.muscular,
            Self::Cns => &config.cns,
            Self::Spinal => &config.spinal,
        }
    }

    const fn weight(self, config: &FitnessFatigueConfig) -> f64 {
        match self {
            Self::Muscular => config.muscular_weight,
            Self::Cns => config.cns_weight,
            Self::Spinal => config.spinal_weight,
        }
    }
}

impl fmt::Display for PhysiologicalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Muscular => f.write_str("muscular"),
            Self::Cns => f.write_str("cns"),
            Self::Spinal => f.write_str("spinal"),
        }
    }
}

/// Fitness and fatigue traces of one system at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueSystemState {
    /// Fitness trace
    pub fitness: f64,
    /// Fatigue trace
    pub fatigue: f64,
    /// Fitness minus fatigue
    pub performance: f64,
}

impl FatigueSystemState {
    fn new(fitness: f64, fatigue: f64) -> Self {
        Self {
            fitness,
            fatigue,
            performance: fitness - fatigue,
        }
    }
}

/// State of a system, or the absence of any impulse to derive it from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SystemEstimate {
    /// Derived from at least one impulse
    State(FatigueSystemState),
    /// No impulse in the window
    InsufficientData,
}

impl SystemEstimate {
    /// The state, if any
    #[must_use]
    pub const fn state(&self) -> Option<&FatigueSystemState> {
        match self {
            Self::State(state) => Some(state),
            Self::InsufficientData => None,
        }
    }
}

/// Residual fatigue of one muscle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleFatigue {
    /// Muscle group
    pub muscle: MuscleGroup,
    /// Remaining fatigue at the snapshot time
    pub current_fatigue: f64,
    /// Size of the most recent impulse, summed over sessions sharing its date
    pub last_impulse: f64,
    /// When the muscle was last trained
    pub last_trained: DateTime<Utc>,
    /// Fatigue decay time constant (hours) from the muscle's recovery profile
    pub tau_hours: f64,
    /// Fatigue at or below which the muscle counts as recovered
    pub ready_threshold: f64,
}

/// Overall training state from the combined performance signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Fitness clearly outweighs fatigue
    Supercompensating,
    /// Normal training balance
    Productive,
    /// Fatigue clearly outweighs fitness
    Overreaching,
    /// Fatigue has cleared and fitness is decaying, or there is no history
    Detraining,
}

/// Result of evaluating the model at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueModelSnapshot {
    /// Evaluation time
    pub as_of: DateTime<Utc>,
    /// Per-system state
    pub systems: BTreeMap<PhysiologicalSystem, SystemEstimate>,
    /// Per-muscle residual fatigue for every muscle trained in the window
    pub muscles: BTreeMap<MuscleGroup, MuscleFatigue>,
    /// Weighted performance across systems
    pub combined_performance: f64,
    /// Training status derived from the combined signal
    pub status: TrainingStatus,
    /// Sessions that contributed load
    pub sessions_considered: usize,
    /// Exercises missing from the catalog
    pub unresolved_exercises: UnresolvedExercises,
}

impl FatigueModelSnapshot {
    /// State of one system, if it has data
    #[must_use]
    pub fn system(&self, system: PhysiologicalSystem) -> Option<&FatigueSystemState> {
        self.systems.get(&system).and_then(SystemEstimate::state)
    }
}

/// One point of a forecast timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Hours after the forecast start
    pub hours_ahead: u32,
    /// Timestamp of the point
    pub at: DateTime<Utc>,
    /// Weighted performance across systems
    pub combined_performance: f64,
}

/// Projected performance assuming no further training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueForecast {
    /// Forecast start
    pub from: DateTime<Utc>,
    /// Most recent impulse before the start
    pub last_impulse_at: Option<DateTime<Utc>>,
    /// Timeline at the requested step
    pub points: Vec<ForecastPoint>,
    /// Hours after the start at which combined performance first peaks, if within the horizon
    pub next_optimal_session_hour: Option<u32>,
}

/// Banister fitness-fatigue model
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessFatigueModel {
    config: FitnessFatigueConfig,
    recovery: RecoveryConfig,
}

impl Default for FitnessFatigueModel {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl FitnessFatigueModel {
    /// Create a model from the engine configuration
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.fitness_fatigue.clone(),
            recovery: config.recovery,
        }
    }

    /// Model parameters
    #[must_use]
    pub const fn config(&self) -> &FitnessFatigueConfig {
        &self.config
    }

    /// Recovery parameters
    #[must_use]
    pub const fn recovery_config(&self) -> &RecoveryConfig {
        &self.recovery
    }

    /// Resolve the impulses that can influence the state at `as_of`
    fn impulses(
        &self,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        as_of: DateTime<Utc>,
    ) -> ImpulseSeries {
        let window_start = self.config.window_start(as_of);
        ImpulseSeries::from_history(history, catalog, |log| {
            log.date <= as_of && log.date >= window_start
        })
    }

    fn system_state(
        &self,
        series: &ImpulseSeries,
        system: PhysiologicalSystem,
        at: DateTime<Utc>,
    ) -> SystemEstimate {
        let response = system.response(&self.config);
        let mut fitness = 0.0;
        let mut fatigue = 0.0;
        let mut any = false;

        for session in series.sessions().iter().filter(|s| s.date <= at) {
            let load = system.load(&session.systems);
            if load <= 0.0 {
                continue;
            }
            any = true;
            let days = hours_between(session.date, at) / HOURS_PER_DAY;
            fitness += load * (-days / response.tau_fitness_days).exp();
            fatigue += load * (-days / response.tau_fatigue_days).exp();
        }

        if any {
            SystemEstimate::State(FatigueSystemState::new(
                response.k_fitness * fitness,
                response.k_fatigue * fatigue,
            ))
        } else {
            SystemEstimate::InsufficientData
        }
    }

    fn combined(&self, systems: &BTreeMap<PhysiologicalSystem, SystemEstimate>) -> f64 {
        systems
            .iter()
            .filter_map(|(system, estimate)| {
                estimate
                    .state()
                    .map(|state| system.weight(&self.config) * state.performance)
            })
            .sum()
    }

    fn status(&self, systems: &BTreeMap<PhysiologicalSystem, SystemEstimate>, combined: f64) -> TrainingStatus {
        let (fitness, fatigue) = systems
            .iter()
            .filter_map(|(system, estimate)| estimate.state().map(|state| (system, state)))
            .fold((0.0, 0.0), |(fit, fat), (system, state)| {
                let weight = system.weight(&self.config);
                (weight.mul_add(state.fitness, fit), weight.mul_add(state.fatigue, fat))
            });

        if fitness <= 0.0 || fatigue < DETRAINING_FATIGUE_RATIO * fitness {
            TrainingStatus::Detraining
        } else if combined > self.config.supercompensation_threshold {
            TrainingStatus::Supercompensating
        } else if combined < self.config.overreaching_threshold {
            TrainingStatus::Overreaching
        } else {
            TrainingStatus::Productive
        }
    }

    /// Residual fatigue per muscle; sessions sharing the latest date add up
    fn muscle_fatigue(&self, series: &ImpulseSeries, at: DateTime<Utc>) -> BTreeMap<MuscleGroup, MuscleFatigue> {
        let ready_decay = (1.0 / self.recovery.ready_fraction).ln();
        let mut muscles = BTreeMap::new();

        for session in series.sessions().iter().filter(|s| s.date <= at) {
            for (&muscle, &impulse) in &session.muscles {
                if impulse <= 0.0 {
                    continue;
                }
                let tau_hours = self.recovery.base_hours(muscle.recovery_profile()) / ready_decay;
                let residual = impulse * (-hours_between(session.date, at) / tau_hours).exp();
                muscles
                    .entry(muscle)
                    .and_modify(|entry: &mut MuscleFatigue| {
                        entry.current_fatigue += residual;
                        if session.date > entry.last_trained {
                            entry.last_trained = session.date;
                            entry.last_impulse = impulse;
                        } else if session.date == entry.last_trained {
                            entry.last_impulse += impulse;
                        }
                        entry.ready_threshold = entry.last_impulse * self.recovery.ready_fraction;
                    })
                    .or_insert(MuscleFatigue {
                        muscle,
                        current_fatigue: residual,
                        last_impulse: impulse,
                        last_trained: session.date,
                        tau_hours,
                        ready_threshold: impulse * self.recovery.ready_fraction,
                    });
            }
        }
        muscles
    }

    fn systems_at(&self, series: &ImpulseSeries, at: DateTime<Utc>) -> BTreeMap<PhysiologicalSystem, SystemEstimate> {
        PhysiologicalSystem::ALL
            .into_iter()
            .map(|system| (system, self.system_state(series, system, at)))
            .collect()
    }

    /// Evaluate the model from the history window ending at `as_of`
    ///
    /// Sessions after `as_of` or older than the history window are ignored.
    /// Systems without impulses report `InsufficientData`.
    #[must_use]
    pub fn evaluate(
        &self,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        as_of: DateTime<Utc>,
    ) -> FatigueModelSnapshot {
        let series = self.impulses(history, catalog, as_of);
        let systems = self.systems_at(&series, as_of);
        let combined_performance = self.combined(&systems);
        let status = self.status(&systems, combined_performance);
        let muscles = self.muscle_fatigue(&series, as_of);

        debug!(
            sessions = series.sessions().len(),
            combined_performance,
            ?status,
            "Fitness-fatigue model evaluated"
        );

        FatigueModelSnapshot {
            as_of,
            systems,
            muscles,
            combined_performance,
            status,
            sessions_considered: series.sessions().len(),
            unresolved_exercises: series.unresolved().clone(),
        }
    }

    /// Project combined performance forward from `from` with no further training
    ///
    /// Points are produced every `step_hours` (at least 1) up to `horizon_hours`,
    /// which is clamped to one year. Points past the last representable
    /// timestamp are dropped.
    /// `next_optimal_session_hour` is the first point of maximum combined
    /// performance, or `None` when performance is still rising at the horizon
    /// or there is no history.
    #[must_use]
    pub fn forecast(
        &self,
        history: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        from: DateTime<Utc>,
        horizon_hours: u32,
        step_hours: u32,
    ) -> FatigueForecast {
        let series = self.impulses(history, catalog, from);
        let step = step_hours.max(1);
        let horizon = horizon_hours.min(MAX_FORECAST_HORIZON_HOURS);
        if horizon < horizon_hours {
            warn!(requested = horizon_hours, horizon, "Forecast horizon clamped");
        }

        let points: Vec<ForecastPoint> = (0..=horizon)
            .step_by(step as usize)
            .map_while(|hours_ahead| {
                let at = from.checked_add_signed(Duration::hours(i64::from(hours_ahead)))?;
                let systems = self.systems_at(&series, at);
                Some(ForecastPoint {
                    hours_ahead,
                    at,
                    combined_performance: self.combined(&systems),
                })
            })
            .collect();

        let next_optimal_session_hour = if series.is_empty() {
            None
        } else {
            peak_hour(&points)
        };

        FatigueForecast {
            from,
            last_impulse_at: series.last_impulse_at(),
            points,
            next_optimal_session_hour,
        }
    }
}

/// First point of maximum performance, unless the maximum is the final point
fn peak_hour(points: &[ForecastPoint]) -> Option<u32> {
    let mut peak_index = 0;
    for (index, point) in points.iter().enumerate().skip(1) {
        if point.combined_performance > points[peak_index].combined_performance {
            peak_index = index;
        }
    }
    if points.len() > 1 && peak_index + 1 == points.len() {
        return None;
    }
    points.get(peak_index).map(|point| point.hours_ahead)
}

fn hours_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MILLIS_PER_HOUR
}
