// ABOUTME: One-rep-max estimation algorithms (Brzycki, Epley, and a rep-weighted hybrid)
// ABOUTME: Guards every formula against its singularities so estimates are never negative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use kpkn_core::constants::physiological::one_rep_max::{
    AMRAP_BONUS_FACTOR, AMRAP_BONUS_MIN_REPS, BRZYCKI_DENOMINATOR, BRZYCKI_MAX_REPS,
    BRZYCKI_NUMERATOR, EPLEY_DIVISOR, HYBRID_BRZYCKI_UPPER_REPS, HYBRID_EPLEY_UPPER_REPS,
    HYBRID_HIGH_REP_DIVISOR, HYBRID_HIGH_REP_EXPONENT, HYBRID_MAX_REPS,
};
use kpkn_core::errors::AppError;
use serde::{Deserialize, Serialize};

/// One-rep-max estimation algorithm selection
///
/// - `Brzycki`: accurate for low reps (1-10), degrades above
/// - `Epley`: linear in reps, better for moderate rep ranges
/// - `Hybrid`: Brzycki up to 10 reps, blended toward Epley up to 20, damped extrapolation above
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - Epley, B. (1985). "Poundage Chart." *Boyd Epley Workout*.
/// - `LeSuer`, D.A. et al. (1997). "The accuracy of prediction equations for estimating 1-RM
///   performance in the bench press, squat, and deadlift." *J Strength Cond Res*, 11(4), 211-213.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Brzycki: `1RM = w x 36 / (37 - r)`
    Brzycki,
    /// Epley: `1RM = w x (1 + r/30)`
    Epley,
    /// Rep-weighted blend of Brzycki and Epley
    #[default]
    Hybrid,
}

impl OneRepMaxAlgorithm {
    /// Estimate 1RM from a performed set
    ///
    /// Returns 0 for non-positive or non-finite weight and for zero reps.
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: u32) -> f64 {
        if !is_valid_weight(weight) || reps == 0 {
            return 0.0;
        }
        weight * self.factor(reps)
    }

    /// Weight liftable for `reps` given a 1RM (exact inverse of `estimate`)
    ///
    /// Returns 0 for non-positive or non-finite 1RM and for zero reps.
    #[must_use]
    pub fn weight_for_reps(&self, one_rep_max: f64, reps: u32) -> f64 {
        if !is_valid_weight(one_rep_max) || reps == 0 {
            return 0.0;
        }
        one_rep_max / self.factor(reps)
    }

    /// Ratio `1RM / weight` for a rep count (reps >= 1)
    fn factor(&self, reps: u32) -> f64 {
        match self {
            Self::Brzycki => brzycki_factor(reps),
            Self::Epley => epley_factor(reps),
            Self::Hybrid => hybrid_factor(reps),
        }
    }

    /// Algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Brzycki => "brzycki",
            Self::Epley => "epley",
            Self::Hybrid => "hybrid",
        }
    }

    /// Formula in readable form
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Brzycki => "1RM = w x 36 / (37 - r), r <= 30",
            Self::Epley => "1RM = w x (1 + r/30)",
            Self::Hybrid => {
                "r <= 10: Brzycki; 10 < r <= 20: linear blend to Epley; r > 20: w x (1 + 20/30) x (1 + (r-20)/80)^0.9"
            }
        }
    }

    /// Short description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Brzycki => "Most accurate for 1-10 reps",
            Self::Epley => "Linear estimate suited to moderate rep ranges",
            Self::Hybrid => "Brzycki for low reps, Epley for high reps, continuous in between",
        }
    }
}

impl fmt::Display for OneRepMaxAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brzycki" => Ok(Self::Brzycki),
            "epley" => Ok(Self::Epley),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(AppError::invalid_input(format!(
                "Unknown 1RM formula: '{other}'. Valid options: brzycki, epley, hybrid"
            ))),
        }
    }
}

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

fn brzycki_factor(reps: u32) -> f64 {
    if reps <= 1 {
        return 1.0;
    }
    let reps = f64::from(reps.min(BRZYCKI_MAX_REPS));
    BRZYCKI_NUMERATOR / (BRZYCKI_DENOMINATOR - reps)
}

fn epley_factor(reps: u32) -> f64 {
    if reps <= 1 {
        return 1.0;
    }
    1.0 + f64::from(reps) / EPLEY_DIVISOR
}

fn hybrid_factor(reps: u32) -> f64 {
    if reps <= HYBRID_BRZYCKI_UPPER_REPS {
        return brzycki_factor(reps);
    }
    if reps <= HYBRID_EPLEY_UPPER_REPS {
        // Brzycki and Epley agree at the lower bound, so the blend is continuous
        let span = f64::from(HYBRID_EPLEY_UPPER_REPS - HYBRID_BRZYCKI_UPPER_REPS);
        let epley_weight = f64::from(reps - HYBRID_BRZYCKI_UPPER_REPS) / span;
        return (1.0 - epley_weight).mul_add(brzycki_factor(reps), epley_weight * epley_factor(reps));
    }
    let extra_reps = f64::from(reps.min(HYBRID_MAX_REPS) - HYBRID_EPLEY_UPPER_REPS);
    epley_factor(HYBRID_EPLEY_UPPER_REPS)
        * (1.0 + extra_reps / HYBRID_HIGH_REP_DIVISOR).powf(HYBRID_HIGH_REP_EXPONENT)
}

/// Brzycki 1RM estimate
///
/// Returns 0 for invalid weight or zero reps, the weight itself for a single,
/// and clamps reps to 30 so the `37 - r` singularity is unreachable.
///
/// # Example
///
/// ```rust
/// use kpkn_intelligence::algorithms::one_rep_max::calculate_brzycki_1rm;
///
/// assert!((calculate_brzycki_1rm(100.0, 5) - 112.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_brzycki_1rm(weight: f64, reps: u32) -> f64 {
    OneRepMaxAlgorithm::Brzycki.estimate(weight, reps)
}

/// Epley 1RM estimate
#[must_use]
pub fn calculate_epley_1rm(weight: f64, reps: u32) -> f64 {
    OneRepMaxAlgorithm::Epley.estimate(weight, reps)
}

/// Hybrid 1RM estimate (Brzycki for low reps, Epley-weighted for high reps)
#[must_use]
pub fn calculate_hybrid_1rm(weight: f64, reps: u32) -> f64 {
    OneRepMaxAlgorithm::Hybrid.estimate(weight, reps)
}

/// Apply the AMRAP effort bonus to an estimate from an AMRAP set
///
/// Sets of more than 3 reps taken to true failure under-predict the max slightly.
#[must_use]
pub fn amrap_adjusted(estimate: f64, reps: u32) -> f64 {
    if reps > AMRAP_BONUS_MIN_REPS {
        estimate * AMRAP_BONUS_FACTOR
    } else {
        estimate
    }
}
