// ABOUTME: Typed muscle groups, muscle roles, and per-muscle recovery profiles
// ABOUTME: Resolves English and Spanish anatomical names once, at deserialization time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::constants::physiological::volume;
use crate::errors::AppError;

/// Muscle groups tracked by volume landmarks and recovery modeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Latissimus dorsi and upper back pullers
    Lats,
    /// Trapezius and rhomboids
    Traps,
    /// Spinal erectors
    LowerBack,
    /// Anterior deltoid
    FrontDelts,
    /// Lateral deltoid
    SideDelts,
    /// Posterior deltoid
    RearDelts,
    /// Elbow flexors
    Biceps,
    /// Elbow extensors
    Triceps,
    /// Forearm flexors and extensors
    Forearms,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Gluteal complex
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
    /// Abdominals and obliques
    Abs,
}

/// Recovery speed class of a muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryProfile {
    /// ~24 h to baseline
    Fast,
    /// ~48 h to baseline
    Medium,
    /// ~72 h to baseline
    Slow,
    /// ~96 h to baseline
    Heavy,
}

impl MuscleGroup {
    /// Every tracked muscle group, in display order
    pub const ALL: [Self; 15] = [
        Self::Chest,
        Self::Lats,
        Self::Traps,
        Self::LowerBack,
        Self::FrontDelts,
        Self::SideDelts,
        Self::RearDelts,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
        Self::Abs,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Lats => "lats",
            Self::Traps => "traps",
            Self::LowerBack => "lower_back",
            Self::FrontDelts => "front_delts",
            Self::SideDelts => "side_delts",
            Self::RearDelts => "rear_delts",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
            Self::Abs => "abs",
        }
    }

    /// Recovery speed class for this muscle
    #[must_use]
    pub const fn recovery_profile(self) -> RecoveryProfile {
        match self {
            Self::Biceps
            | Self::Triceps
            | Self::FrontDelts
            | Self::SideDelts
            | Self::RearDelts
            | Self::Calves
            | Self::Abs
            | Self::Forearms => RecoveryProfile::Fast,
            Self::Chest | Self::Lats | Self::Traps => RecoveryProfile::Medium,
            Self::Quads | Self::Glutes => RecoveryProfile::Slow,
            Self::Hamstrings | Self::LowerBack => RecoveryProfile::Heavy,
        }
    }

    /// Resolve an anatomical name (English or Spanish, any case) to a muscle group
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase().replace(['-', ' '], "_");
        let group = match key.as_str() {
            "chest" | "pecs" | "pectoral" | "pectorales" | "pecho" => Self::Chest,
            "lats" | "back" | "dorsal" | "dorsales" | "dorsal_ancho" | "espalda"
            | "redondo_mayor" => Self::Lats,
            "traps" | "trapecio" | "trapecio_superior" | "trapecio_medio"
            | "trapecio_inferior" | "romboides" => Self::Traps,
            "lower_back" | "erectors" | "espalda_baja" | "erectores" | "erectores_espinales"
            | "lumbares" | "lumbar" => Self::LowerBack,
            "front_delts" | "anterior_deltoid" | "deltoides_anterior" | "deltoides"
            | "hombros" => Self::FrontDelts,
            "side_delts" | "lateral_deltoid" | "deltoides_lateral" => Self::SideDelts,
            "rear_delts" | "posterior_deltoid" | "deltoides_posterior" => Self::RearDelts,
            "biceps" | "bíceps" | "braquial" => Self::Biceps,
            "triceps" | "tríceps" => Self::Triceps,
            "forearms" | "forearm" | "antebrazo" | "antebrazos" | "braquiorradial"
            | "flexores_del_antebrazo" | "extensores_del_antebrazo" => Self::Forearms,
            "quads" | "quadriceps" | "cuádriceps" | "cuadriceps" => Self::Quads,
            "hamstrings" | "isquiotibiales" | "isquiosurales" => Self::Hamstrings,
            "glutes" | "glúteos" | "gluteos" | "glúteo_mayor" | "glúteo_medio" => Self::Glutes,
            "calves" | "pantorrillas" | "gemelos" | "gastrocnemio" | "sóleo" | "soleo" => {
                Self::Calves
            }
            "abs" | "core" | "abdomen" | "abdominales" | "recto_abdominal" | "oblicuos"
            | "transverso_abdominal" => Self::Abs,
            _ => return None,
        };
        Some(group)
    }

    /// Hypertrophy credit a muscle earns for one set given its role
    #[must_use]
    pub const fn hypertrophy_credit(role: MuscleRole) -> f64 {
        match role {
            MuscleRole::Primary => volume::HYPERTROPHY_PRIMARY_CREDIT,
            MuscleRole::Secondary => volume::HYPERTROPHY_SECONDARY_CREDIT,
            MuscleRole::Stabilizer | MuscleRole::Neutralizer => 0.0,
        }
    }

    /// Fatigue credit a muscle accrues for one set given its role
    #[must_use]
    pub const fn fatigue_credit(role: MuscleRole) -> f64 {
        match role {
            MuscleRole::Primary => volume::FATIGUE_PRIMARY_CREDIT,
            MuscleRole::Secondary => volume::FATIGUE_SECONDARY_CREDIT,
            MuscleRole::Stabilizer => volume::FATIGUE_STABILIZER_CREDIT,
            MuscleRole::Neutralizer => volume::FATIGUE_NEUTRALIZER_CREDIT,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AppError::not_found(format!("Muscle group '{s}'")))
    }
}

impl<'de> Deserialize<'de> for MuscleGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_name(&raw).ok_or_else(|| de::Error::custom(format!("unknown muscle '{raw}'")))
    }
}

/// Role a muscle plays in an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleRole {
    /// Prime mover
    Primary,
    /// Synergist
    Secondary,
    /// Holds a joint steady under load
    Stabilizer,
    /// Cancels an unwanted action of a prime mover
    Neutralizer,
}
