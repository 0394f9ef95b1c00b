// ABOUTME: Athlete profiling questionnaire - question order and a wizard state machine
// ABOUTME: Produces the immutable AthleteProfileScore once the last question is answered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use kpkn_core::constants::physiological::profiling::{MAX_ANSWER_SCORE, MIN_ANSWER_SCORE};
use kpkn_core::errors::{AppError, AppResult};
pub use kpkn_core::models::{AthleteProfileScore, ProfileAnswers, ProfileLevel, TrainingStyle};
use serde::{Deserialize, Serialize};

/// Questions of the self-assessment, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileQuestion {
    /// Preferred training style (categorical)
    TrainingStyle,
    /// Technique mastery
    Technique,
    /// Training consistency
    Consistency,
    /// Relative strength
    Strength,
    /// Mobility
    Mobility,
}

impl ProfileQuestion {
    /// All questions in order
    pub const ALL: [Self; 5] = [
        Self::TrainingStyle,
        Self::Technique,
        Self::Consistency,
        Self::Strength,
        Self::Mobility,
    ];

    /// Prompt shown to the athlete
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::TrainingStyle => "Which training style describes you best?",
            Self::Technique => "How well do you master the technique of the main lifts?",
            Self::Consistency => "How consistently have you trained over the last year?",
            Self::Strength => "How strong are you relative to your bodyweight?",
            Self::Mobility => "How is your mobility in the main lift positions?",
        }
    }
}

impl fmt::Display for ProfileQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt())
    }
}

/// An answer to one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ProfileAnswer {
    /// Answer to the training-style question
    Style(TrainingStyle),
    /// Score 1-3 for a scored question
    Score(u8),
}

/// Wizard progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Waiting for an answer to this question
    Asking(ProfileQuestion),
    /// All questions answered
    Complete(AthleteProfileScore),
}

/// Questionnaire state machine accepting answers in question order
#[derive(Debug, Clone, Default)]
pub struct ProfilingWizard {
    style: Option<TrainingStyle>,
    scores: Vec<u8>,
    result: Option<AthleteProfileScore>,
}

impl ProfilingWizard {
    /// Start a new questionnaire
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Question awaiting an answer, `None` when complete
    #[must_use]
    pub fn current_question(&self) -> Option<ProfileQuestion> {
        if self.result.is_some() {
            return None;
        }
        if self.style.is_none() {
            return Some(ProfileQuestion::TrainingStyle);
        }
        ProfileQuestion::ALL.get(1 + self.scores.len()).copied()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> WizardState {
        match (self.result, self.current_question()) {
            (Some(score), _) => WizardState::Complete(score),
            (None, Some(question)) => WizardState::Asking(question),
            (None, None) => WizardState::Asking(ProfileQuestion::TrainingStyle),
        }
    }

    /// Record the answer to the current question
    ///
    /// Returns the state after the answer; the final answer produces the score.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the answer type does not match the question or
    /// the questionnaire is complete, and `ValueOutOfRange` for a score outside 1-3
    pub fn answer(&mut self, answer: ProfileAnswer) -> AppResult<WizardState> {
        let question = self
            .current_question()
            .ok_or_else(|| AppError::invalid_input("Questionnaire already complete"))?;

        match (question, answer) {
            (ProfileQuestion::TrainingStyle, ProfileAnswer::Style(style)) => {
                self.style = Some(style);
            }
            (ProfileQuestion::TrainingStyle, ProfileAnswer::Score(_)) => {
                return Err(AppError::invalid_input(
                    "The training style question expects a style answer",
                ));
            }
            (_, ProfileAnswer::Style(_)) => {
                return Err(AppError::invalid_input(format!(
                    "Question '{question:?}' expects a score from {MIN_ANSWER_SCORE} to {MAX_ANSWER_SCORE}"
                )));
            }
            (_, ProfileAnswer::Score(score)) => {
                if !(MIN_ANSWER_SCORE..=MAX_ANSWER_SCORE).contains(&score) {
                    return Err(AppError::out_of_range(format!(
                        "Score for '{question:?}' must be between {MIN_ANSWER_SCORE} and {MAX_ANSWER_SCORE}, got {score}"
                    )));
                }
                self.scores.push(score);
            }
        }

        if let (Some(training_style), [technical, consistency, strength, mobility]) =
            (self.style, self.scores.as_slice())
        {
            self.result = Some(AthleteProfileScore::from_answers(&ProfileAnswers {
                training_style,
                technical_score: *technical,
                consistency_score: *consistency,
                strength_score: *strength,
                mobility_score: *mobility,
            })?);
        }

        Ok(self.state())
    }

    /// The score, once complete
    #[must_use]
    pub const fn result(&self) -> Option<&AthleteProfileScore> {
        self.result.as_ref()
    }
}
