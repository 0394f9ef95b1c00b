// ABOUTME: Body composition metrics - fat-free mass index and IPF GL powerlifting points
// ABOUTME: Returns None or 0 for invalid inputs instead of propagating NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Body Composition
//!
//! ## FFMI
//!
//! `FFMI = lean mass / height²`, normalized to a 1.8 m reference height with
//! `FFMI + 6.1 x (1.8 - height)` (Kouri et al., 1995).
//!
//! ## IPF GL points
//!
//! `points = total x 100 / (A - B x e^(-C x bodyweight))` with the
//! coefficients published by the International Powerlifting Federation (2020).

use std::fmt;
use std::str::FromStr;

use kpkn_core::constants::physiological::body_composition::{
    FFMI_AVERAGE_THRESHOLD, FFMI_ELITE_THRESHOLD, FFMI_EXCELLENT_THRESHOLD,
    FFMI_HEIGHT_CORRECTION, FFMI_REFERENCE_HEIGHT_M, IPF_GL_MIN_BODYWEIGHT_MEN_KG,
    IPF_GL_MIN_BODYWEIGHT_WOMEN_KG,
};
use kpkn_core::errors::AppError;
use kpkn_core::models::WeightUnit;
use serde::{Deserialize, Serialize};

/// Interpretation band of normalized FFMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FfmiCategory {
    /// Below 20
    Novice,
    /// 20 to 22
    Average,
    /// 22 to 26
    Excellent,
    /// 26 and above
    Elite,
}

impl FfmiCategory {
    /// Category for a normalized FFMI value
    #[must_use]
    pub fn from_normalized(normalized_ffmi: f64) -> Self {
        if normalized_ffmi >= FFMI_ELITE_THRESHOLD {
            Self::Elite
        } else if normalized_ffmi >= FFMI_EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if normalized_ffmi >= FFMI_AVERAGE_THRESHOLD {
            Self::Average
        } else {
            Self::Novice
        }
    }
}

/// Result of an FFMI calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FfmiResult {
    /// Fat-free mass index (kg/m²)
    pub ffmi: f64,
    /// FFMI adjusted to a 1.8 m reference height
    pub normalized_ffmi: f64,
    /// Lean body mass (kg)
    pub lean_body_mass_kg: f64,
    /// Interpretation of the normalized value
    pub category: FfmiCategory,
}

/// Calculate fat-free mass index
///
/// Returns `None` when height or weight is non-positive or non-finite, or when
/// body fat is absent or non-finite. Body fat is clamped to 0-100%.
#[must_use]
pub fn calculate_ffmi(height_cm: f64, weight_kg: f64, body_fat_pct: Option<f64>) -> Option<FfmiResult> {
    let is_positive = |value: f64| value.is_finite() && value > 0.0;
    if !is_positive(height_cm) || !is_positive(weight_kg) {
        return None;
    }
    let body_fat = body_fat_pct.filter(|bf| bf.is_finite())?.clamp(0.0, 100.0);

    let height_m = height_cm / 100.0;
    let lean_body_mass_kg = weight_kg * (1.0 - body_fat / 100.0);
    let ffmi = lean_body_mass_kg / (height_m * height_m);
    let normalized_ffmi = FFMI_HEIGHT_CORRECTION.mul_add(FFMI_REFERENCE_HEIGHT_M - height_m, ffmi);

    Some(FfmiResult {
        ffmi,
        normalized_ffmi,
        lean_body_mass_kg,
        category: FfmiCategory::from_normalized(normalized_ffmi),
    })
}

/// Lifter gender for IPF coefficient selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Men's coefficients
    #[default]
    #[serde(alias = "transmale")]
    Male,
    /// Women's coefficients
    #[serde(alias = "transfemale")]
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" | "man" | "transmale" => Ok(Self::Male),
            "female" | "f" | "woman" | "transfemale" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Competition equipment category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    /// Raw / classic
    #[default]
    #[serde(alias = "raw")]
    Classic,
    /// Single-ply equipped
    Equipped,
}

impl FromStr for Equipment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" | "raw" => Ok(Self::Classic),
            "equipped" => Ok(Self::Equipped),
            other => Err(AppError::invalid_input(format!(
                "Unknown equipment: '{other}'. Valid options: classic, equipped"
            ))),
        }
    }
}

/// Which result the points are computed for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
    /// Three-lift total
    #[default]
    Total,
    /// Bench press only
    Bench,
    /// Squat only (scored with total coefficients)
    Squat,
    /// Deadlift only (scored with total coefficients)
    Deadlift,
}

impl FromStr for Lift {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "total" => Ok(Self::Total),
            "bench" => Ok(Self::Bench),
            "squat" => Ok(Self::Squat),
            "deadlift" => Ok(Self::Deadlift),
            other => Err(AppError::invalid_input(format!(
                "Unknown lift: '{other}'. Valid options: total, bench, squat, deadlift"
            ))),
        }
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total => f.write_str("total"),
            Self::Bench => f.write_str("bench"),
            Self::Squat => f.write_str("squat"),
            Self::Deadlift => f.write_str("deadlift"),
        }
    }
}

/// Options for IPF GL points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpfGlOptions {
    /// Coefficient set
    pub gender: Gender,
    /// Equipment category
    pub equipment: Equipment,
    /// Scored lift
    pub lift: Lift,
    /// Unit of both the lifted weight and bodyweight
    pub weight_unit: WeightUnit,
}

/// IPF GL coefficients `(A, B, C)`
#[derive(Debug, Clone, Copy, PartialEq)]
struct GlCoefficients {
    a: f64,
    b: f64,
    c: f64,
}

const fn gl(a: f64, b: f64, c: f64) -> GlCoefficients {
    GlCoefficients { a, b, c }
}

const fn gl_coefficients(gender: Gender, equipment: Equipment, lift: Lift) -> GlCoefficients {
    let bench_only = matches!(lift, Lift::Bench);
    match (gender, equipment, bench_only) {
        (Gender::Male, Equipment::Equipped, false) => gl(1236.251_15, 1449.218_64, 0.016_44),
        (Gender::Male, Equipment::Classic, false) => gl(1199.728_39, 1025.181_62, 0.009_21),
        (Gender::Male, Equipment::Equipped, true) => gl(381.220_73, 733.793_78, 0.023_98),
        (Gender::Male, Equipment::Classic, true) => gl(320.980_41, 281.402_58, 0.010_08),
        (Gender::Female, Equipment::Equipped, false) => gl(758.638_78, 949.313_82, 0.024_35),
        (Gender::Female, Equipment::Classic, false) => gl(610.327_96, 1045.592_82, 0.030_48),
        (Gender::Female, Equipment::Equipped, true) => gl(221.822_09, 357.003_77, 0.029_37),
        (Gender::Female, Equipment::Classic, true) => gl(142.403_98, 442.526_71, 0.047_24),
    }
}

/// Calculate IPF GL points
///
/// Both weights are converted to kilograms first. Bodyweight is floored at
/// 40 kg for men and 35 kg for women. Returns 0 for non-positive or
/// non-finite inputs and for a non-positive formula denominator.
#[must_use]
pub fn calculate_ipf_gl_points(total: f64, bodyweight: f64, options: &IpfGlOptions) -> f64 {
    let is_positive = |value: f64| value.is_finite() && value > 0.0;
    if !is_positive(total) || !is_positive(bodyweight) {
        return 0.0;
    }

    let total_kg = options.weight_unit.to_kg(total);
    let min_bodyweight = match options.gender {
        Gender::Male => IPF_GL_MIN_BODYWEIGHT_MEN_KG,
        Gender::Female => IPF_GL_MIN_BODYWEIGHT_WOMEN_KG,
    };
    let bodyweight_kg = options.weight_unit.to_kg(bodyweight).max(min_bodyweight);

    let GlCoefficients { a, b, c } = gl_coefficients(options.gender, options.equipment, options.lift);
    let denominator = b.mul_add(-(-c * bodyweight_kg).exp(), a);
    if denominator <= 0.0 {
        return 0.0;
    }
    total_kg * 100.0 / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries() {
        assert_eq!(FfmiCategory::from_normalized(19.99), FfmiCategory::Novice);
        assert_eq!(FfmiCategory::from_normalized(20.0), FfmiCategory::Average);
        assert_eq!(FfmiCategory::from_normalized(22.0), FfmiCategory::Excellent);
        assert_eq!(FfmiCategory::from_normalized(26.0), FfmiCategory::Elite);
    }

    #[test]
    fn squat_uses_total_coefficients() {
        let total = IpfGlOptions::default();
        let squat = IpfGlOptions {
            lift: Lift::Squat,
            ..IpfGlOptions::default()
        };
        let a = calculate_ipf_gl_points(200.0, 80.0, &total);
        let b = calculate_ipf_gl_points(200.0, 80.0, &squat);
        assert!((a - b).abs() < f64::EPSILON);
    }
}
