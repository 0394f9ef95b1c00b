// ABOUTME: Static exercise catalog with muscle involvement and fatigue coefficients
// ABOUTME: Index keyed by id, lowercase name, and explicit aliases is built once at load time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::iter;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::muscle::{MuscleGroup, MuscleRole};
use crate::constants::physiological::fitness_fatigue::{
    ACCESSORY_COEFFICIENTS, COMPOUND_COEFFICIENTS, ISOLATION_COEFFICIENTS,
};

/// Movement classification driving default fatigue coefficients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Multi-joint barbell-class movement
    #[serde(alias = "Básico", alias = "basico", alias = "básico")]
    Compound,
    /// Multi-joint supporting movement
    #[default]
    #[serde(alias = "Accesorio", alias = "accesorio")]
    Accessory,
    /// Single-joint movement
    #[serde(alias = "Aislamiento", alias = "aislamiento")]
    Isolation,
}

/// Per-system fatigue coefficients of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemCoefficients {
    /// Peripheral (muscular) fatigue coefficient
    pub muscular: f64,
    /// Central nervous system coefficient
    pub cns: f64,
    /// Spinal loading coefficient
    pub spinal: f64,
}

impl ExerciseKind {
    /// Default coefficients for the movement class
    #[must_use]
    pub const fn default_coefficients(self) -> SystemCoefficients {
        let (muscular, cns, spinal) = match self {
            Self::Compound => COMPOUND_COEFFICIENTS,
            Self::Accessory => ACCESSORY_COEFFICIENTS,
            Self::Isolation => ISOLATION_COEFFICIENTS,
        };
        SystemCoefficients {
            muscular,
            cns,
            spinal,
        }
    }
}

/// A muscle's involvement in an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvolvedMuscle {
    /// Muscle group
    pub muscle: MuscleGroup,
    /// Role in the movement
    pub role: MuscleRole,
}

/// Catalog entry describing an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawExerciseMuscleInfo")]
pub struct ExerciseMuscleInfo {
    /// Catalog identifier
    pub id: String,
    /// Canonical name
    pub name: String,
    /// Alternative names resolved to this entry
    pub aliases: Vec<String>,
    /// Movement class
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    /// Muscles trained within the tracked groups
    pub involved_muscles: Vec<InvolvedMuscle>,
    /// Catalog muscle names outside the tracked groups, kept for reporting
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub untracked_muscles: Vec<String>,
    /// Muscular fatigue coefficient override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efc: Option<f64>,
    /// CNS fatigue coefficient override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnc: Option<f64>,
    /// Spinal loading coefficient override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssc: Option<f64>,
}

/// Catalog entry as written in catalog files
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExerciseMuscleInfo {
    id: String,
    name: String,
    #[serde(default, alias = "alias", deserialize_with = "one_or_many")]
    aliases: Vec<String>,
    #[serde(default, rename = "type", alias = "kind")]
    kind: ExerciseKind,
    #[serde(default)]
    involved_muscles: Vec<RawInvolvedMuscle>,
    #[serde(default)]
    untracked_muscles: Vec<String>,
    #[serde(default)]
    efc: Option<f64>,
    #[serde(default)]
    cnc: Option<f64>,
    #[serde(default)]
    ssc: Option<f64>,
}

impl From<RawExerciseMuscleInfo> for ExerciseMuscleInfo {
    fn from(raw: RawExerciseMuscleInfo) -> Self {
        let mut involved_muscles = Vec::with_capacity(raw.involved_muscles.len());
        let mut untracked_muscles = raw.untracked_muscles;
        for entry in raw.involved_muscles {
            match MuscleGroup::from_name(&entry.muscle) {
                Some(muscle) => involved_muscles.push(InvolvedMuscle {
                    muscle,
                    role: entry.role,
                }),
                None => {
                    warn!(
                        exercise = %raw.name,
                        muscle = %entry.muscle,
                        "Untracked muscle in catalog entry"
                    );
                    if !untracked_muscles.contains(&entry.muscle) {
                        untracked_muscles.push(entry.muscle);
                    }
                }
            }
        }

        Self {
            id: raw.id,
            name: raw.name,
            aliases: raw.aliases,
            kind: raw.kind,
            involved_muscles,
            untracked_muscles,
            efc: raw.efc,
            cnc: raw.cnc,
            ssc: raw.ssc,
        }
    }
}

impl ExerciseMuscleInfo {
    /// Fatigue coefficients with per-exercise overrides applied over the kind defaults
    #[must_use]
    pub fn coefficients(&self) -> SystemCoefficients {
        let defaults = self.kind.default_coefficients();
        SystemCoefficients {
            muscular: self.efc.unwrap_or(defaults.muscular),
            cns: self.cnc.unwrap_or(defaults.cns),
            spinal: self.ssc.unwrap_or(defaults.spinal),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(alias)) => alias
            .split(',')
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
            .map(str::to_owned)
            .collect(),
        Some(OneOrMany::Many(aliases)) => aliases,
    })
}

#[derive(Deserialize)]
struct RawInvolvedMuscle {
    muscle: String,
    role: MuscleRole,
}

/// Exercise catalog indexed for lookup by id, name, or alias
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ExerciseMuscleInfo>", into = "Vec<ExerciseMuscleInfo>")]
pub struct ExerciseCatalog {
    entries: Vec<ExerciseMuscleInfo>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl ExerciseCatalog {
    /// Build the catalog and its lookup index
    ///
    /// The first entry wins when two entries share an id or name.
    #[must_use]
    pub fn new(entries: Vec<ExerciseMuscleInfo>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            match by_id.entry(entry.id.clone()) {
                Entry::Occupied(_) => warn!(id = %entry.id, "Duplicate exercise id in catalog"),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
            for key in iter::once(&entry.name).chain(entry.aliases.iter()) {
                by_name.entry(key.trim().to_lowercase()).or_insert(index);
            }
        }

        Self {
            entries,
            by_id,
            by_name,
        }
    }

    /// Look up an entry by catalog id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ExerciseMuscleInfo> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    /// Look up an entry by name or alias, case-insensitively
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ExerciseMuscleInfo> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&index| &self.entries[index])
    }

    /// Resolve an exercise reference: catalog id, then program id, then name
    #[must_use]
    pub fn resolve(
        &self,
        catalog_id: Option<&str>,
        exercise_id: &str,
        name: &str,
    ) -> Option<&ExerciseMuscleInfo> {
        catalog_id
            .and_then(|id| self.get(id))
            .or_else(|| self.get(exercise_id))
            .or_else(|| self.find_by_name(name))
    }

    /// All entries in load order
    #[must_use]
    pub fn entries(&self) -> &[ExerciseMuscleInfo] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ExerciseMuscleInfo>> for ExerciseCatalog {
    fn from(entries: Vec<ExerciseMuscleInfo>) -> Self {
        Self::new(entries)
    }
}

impl From<ExerciseCatalog> for Vec<ExerciseMuscleInfo> {
    fn from(catalog: ExerciseCatalog) -> Self {
        catalog.entries
    }
}
