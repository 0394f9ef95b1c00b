// ABOUTME: Weight unit handling for loads, bodyweight, and plate rounding
// ABOUTME: Kilograms are canonical; pounds are converted at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::physiological::body_composition::LB_TO_KG;
use crate::constants::physiological::one_rep_max::{KG_PLATE_INCREMENT, LB_PLATE_INCREMENT};
use crate::errors::AppError;

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    #[serde(alias = "lbs")]
    Lb,
}

impl WeightUnit {
    /// Convert a value in this unit to kilograms
    #[must_use]
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            Self::Kg => value,
            Self::Lb => value * LB_TO_KG,
        }
    }

    /// Smallest loadable increment (one pair of the lightest plates)
    #[must_use]
    pub const fn plate_increment(self) -> f64 {
        match self {
            Self::Kg => KG_PLATE_INCREMENT,
            Self::Lb => LB_PLATE_INCREMENT,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kg => f.write_str("kg"),
            Self::Lb => f.write_str("lb"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(Self::Kg),
            "lb" | "lbs" | "pounds" => Ok(Self::Lb),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: '{other}'. Valid options: kg, lb"
            ))),
        }
    }
}
