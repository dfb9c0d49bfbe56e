use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::grader::{self, Grade};
use quiz_core::model::{AnswerRecord, Question, SessionReport, percent_of};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Where the session stands on the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    Unanswered,
    Graded,
    Finished,
}

/// Outcome of a successful `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub index: usize,
    pub selected: usize,
    pub grade: Grade,
    pub is_last: bool,
}

/// Outcome of a successful `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Finished(SessionReport),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session over a fixed, already sampled question list.
///
/// Each question moves `Unanswered → Graded`, then `advance` either opens the
/// next question or finishes the session. Rejected calls return a
/// `SessionError` and leave every field untouched.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    graded: bool,
    correct_count: usize,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    report: Option<SessionReport>,
}

impl QuizSession {
    /// Start a session on question 0.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn start(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            current: 0,
            selected: None,
            graded: false,
            correct_count: 0,
            started_at,
            report: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based pointer; equals `total()` once finished.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn phase(&self) -> QuestionPhase {
        if self.is_finished() {
            QuestionPhase::Finished
        } else if self.graded {
            QuestionPhase::Graded
        } else {
            QuestionPhase::Unanswered
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            index: self.current,
            total: self.total(),
            answered: self.answers.len(),
            correct: self.correct_count,
            percent_complete: percent_of(self.current, self.total()).value(),
            is_complete: self.is_finished(),
        }
    }

    /// Select a choice on the current, ungraded question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the session finished,
    /// `SessionError::AlreadyGraded` once the question is graded, and
    /// `SessionError::ChoiceOutOfRange` for an index past the last choice.
    pub fn select(&mut self, choice_index: usize) -> Result<(), SessionError> {
        let question = self.ungraded_question()?;
        let len = question.choice_count();
        if choice_index >= len {
            return Err(SessionError::ChoiceOutOfRange {
                index: choice_index,
                len,
            });
        }
        self.selected = Some(choice_index);
        Ok(())
    }

    /// Grade the current selection and record it for review.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the session finished,
    /// `SessionError::AlreadyGraded` on a second submit, and
    /// `SessionError::NotSelected` when nothing is selected.
    pub fn submit(&mut self) -> Result<Submission, SessionError> {
        let question = self.ungraded_question()?;
        let Some(selected) = self.selected else {
            return Err(SessionError::NotSelected);
        };

        let (grade, record) = grader::grade_and_record(question, Some(selected));

        if grade.is_correct {
            self.correct_count += 1;
        }
        self.answers.push(record);
        self.graded = true;

        Ok(Submission {
            index: self.current,
            selected,
            grade,
            is_last: self.is_last_question(),
        })
    }

    /// Move past a graded question.
    ///
    /// On the last question this finishes the session and yields its report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the session finished and
    /// `SessionError::NotGraded` before the current question was submitted.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<Advance, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Completed);
        }
        if !self.graded {
            return Err(SessionError::NotGraded);
        }

        if self.is_last_question() {
            let report = SessionReport::from_answers(
                self.answers.clone(),
                self.questions.len(),
                self.started_at,
                at,
            );
            self.current = self.questions.len();
            self.selected = None;
            self.graded = false;
            self.report = Some(report.clone());
            return Ok(Advance::Finished(report));
        }

        self.current += 1;
        self.selected = None;
        self.graded = false;
        Ok(Advance::Next {
            index: self.current,
        })
    }

    fn ungraded_question(&self) -> Result<&Question, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Completed);
        }
        if self.graded {
            return Err(SessionError::AlreadyGraded);
        }
        self.questions
            .get(self.current)
            .ok_or(SessionError::Completed)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("graded", &self.graded)
            .field("correct_count", &self.correct_count)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
