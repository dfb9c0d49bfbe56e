use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question needs at least 2 choices, got {len}")]
    TooFewChoices { len: usize },

    #[error("choice {index} is empty")]
    EmptyChoice { index: usize },

    #[error("answer index {index} is out of range for {len} choices")]
    AnswerOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Choices are order-significant: the index of a choice is its identity, not
/// its text. `answer_index` always points inside `choices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    choices: Vec<String>,
    answer_index: usize,
    explanation: Option<String>,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if `text` is blank.
    /// Returns `QuestionError::TooFewChoices` if fewer than two choices are given.
    /// Returns `QuestionError::EmptyChoice` if any choice is blank.
    /// Returns `QuestionError::AnswerOutOfRange` if `answer_index` is not a valid choice.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        choices: Vec<String>,
        answer_index: usize,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices { len: choices.len() });
        }
        if let Some(index) = choices.iter().position(|c| c.trim().is_empty()) {
            return Err(QuestionError::EmptyChoice { index });
        }
        if answer_index >= choices.len() {
            return Err(QuestionError::AnswerOutOfRange {
                index: answer_index,
                len: choices.len(),
            });
        }

        let explanation = explanation.filter(|e| !e.trim().is_empty());

        Ok(Self {
            id,
            text,
            choices,
            answer_index,
            explanation,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Returns the text of the choice at `index`, if it exists.
    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// Text of the canonical answer.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        &self.choices[self.answer_index]
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in a serialized bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub text: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the draft violates any question invariant.
    pub fn validate(self) -> Result<Question, QuestionError> {
        Question::new(
            self.id,
            self.text,
            self.choices,
            self.answer_index,
            self.explanation,
        )
    }
}

impl From<&Question> for QuestionDraft {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            choices: question.choices.clone(),
            answer_index: question.answer_index,
            explanation: question.explanation.clone(),
        }
    }
}
