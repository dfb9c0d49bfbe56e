use chrono::{DateTime, Utc};
use std::fmt;

use crate::model::answer::AnswerRecord;

/// Whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    /// Clamps `value` into `0..=100`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// `round(100 * part / total)` with halves rounded up.
///
/// A zero `total` yields 0% and `part` is clamped to `total`.
#[must_use]
pub fn percent_of(part: usize, total: usize) -> Percent {
    if total == 0 {
        return Percent(0);
    }
    let part = part.min(total) as u128;
    let total = total as u128;
    let rounded = (200 * part + total) / (2 * total);
    Percent(u8::try_from(rounded).unwrap_or(100))
}

/// Outcome of a finished quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    correct_count: usize,
    total: usize,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionReport {
    /// Build a report from the graded answers of a session.
    ///
    /// `total` is the number of questions in the session; the correct count is
    /// derived from the answers themselves.
    #[must_use]
    pub fn from_answers(
        answers: Vec<AnswerRecord>,
        total: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let correct_count = answers.iter().filter(|a| a.is_correct()).count();
        Self {
            correct_count,
            total: total.max(answers.len()),
            answers,
            started_at,
            completed_at: completed_at.max(started_at),
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn percent(&self) -> Percent {
        percent_of(self.correct_count, self.total)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
