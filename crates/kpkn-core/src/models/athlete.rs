// ABOUTME: Athlete profile score derived from the five-question self-assessment
// ABOUTME: Validated once on construction and immutable afterward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::physiological::profiling::{
    ADVANCED_MIN_TOTAL, MAX_ANSWER_SCORE, MIN_ANSWER_SCORE,
};
use crate::errors::{AppError, AppResult};

/// Preferred training style (categorical, does not affect the total)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingStyle {
    /// Hypertrophy-focused
    Bodybuilder,
    /// Hybrid strength and hypertrophy
    Powerbuilder,
    /// Competition strength-focused
    Powerlifter,
}

/// Experience level derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileLevel {
    /// Total below the advanced threshold
    Beginner,
    /// Total at or above the advanced threshold
    Advanced,
}

impl fmt::Display for ProfileLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => f.write_str("Beginner"),
            Self::Advanced => f.write_str("Advanced"),
        }
    }
}

/// Raw questionnaire answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnswers {
    /// Answer to the training-style question
    pub training_style: TrainingStyle,
    /// Technique self-rating, 1-3
    pub technical_score: u8,
    /// Training consistency, 1-3
    pub consistency_score: u8,
    /// Relative strength, 1-3
    pub strength_score: u8,
    /// Mobility, 1-3
    pub mobility_score: u8,
}

/// Composite athlete profile
///
/// Deserialization re-derives the total and level from the individual answers,
/// so a stored score can never disagree with its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileAnswers")]
pub struct AthleteProfileScore {
    training_style: TrainingStyle,
    technical_score: u8,
    consistency_score: u8,
    strength_score: u8,
    mobility_score: u8,
    total_score: u8,
    profile_level: ProfileLevel,
}

impl AthleteProfileScore {
    /// Score a completed questionnaire
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if any scored answer is outside 1-3
    pub fn from_answers(answers: &ProfileAnswers) -> AppResult<Self> {
        let scores = [
            ("technicalScore", answers.technical_score),
            ("consistencyScore", answers.consistency_score),
            ("strengthScore", answers.strength_score),
            ("mobilityScore", answers.mobility_score),
        ];
        for (field, score) in scores {
            if !(MIN_ANSWER_SCORE..=MAX_ANSWER_SCORE).contains(&score) {
                return Err(AppError::out_of_range(format!(
                    "{field} must be between {MIN_ANSWER_SCORE} and {MAX_ANSWER_SCORE}, got {score}"
                )));
            }
        }

        let total_score = scores.iter().map(|(_, score)| score).sum::<u8>();
        let profile_level = if total_score >= ADVANCED_MIN_TOTAL {
            ProfileLevel::Advanced
        } else {
            ProfileLevel::Beginner
        };

        Ok(Self {
            training_style: answers.training_style,
            technical_score: answers.technical_score,
            consistency_score: answers.consistency_score,
            strength_score: answers.strength_score,
            mobility_score: answers.mobility_score,
            total_score,
            profile_level,
        })
    }

    /// Training style answer
    #[must_use]
    pub const fn training_style(&self) -> TrainingStyle {
        self.training_style
    }

    /// Technique score
    #[must_use]
    pub const fn technical_score(&self) -> u8 {
        self.technical_score
    }

    /// Consistency score
    #[must_use]
    pub const fn consistency_score(&self) -> u8 {
        self.consistency_score
    }

    /// Strength score
    #[must_use]
    pub const fn strength_score(&self) -> u8 {
        self.strength_score
    }

    /// Mobility score
    #[must_use]
    pub const fn mobility_score(&self) -> u8 {
        self.mobility_score
    }

    /// Sum of the four scored answers, 4-12
    #[must_use]
    pub const fn total_score(&self) -> u8 {
        self.total_score
    }

    /// Derived level
    #[must_use]
    pub const fn profile_level(&self) -> ProfileLevel {
        self.profile_level
    }
}

impl TryFrom<ProfileAnswers> for AthleteProfileScore {
    type Error = AppError;

    fn try_from(answers: ProfileAnswers) -> Result<Self, Self::Error> {
        Self::from_answers(&answers)
    }
}
