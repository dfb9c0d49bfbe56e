use crate::model::{AnswerRecord, Question};

//
// ─── GRADE ─────────────────────────────────────────────────────────────────────
//

/// Result of comparing a pick against a question's canonical answer.
///
/// `correct_text` is filled regardless of the outcome so feedback can always
/// name the right choice.
///
/// # Examples
///
/// ```
/// # use quiz_core::grader::grade;
/// # use quiz_core::model::{Question, QuestionId};
/// let q = Question::new(
///     QuestionId::new("q4").unwrap(),
///     "What keyword creates a constant in JavaScript?",
///     vec!["var".into(), "let".into(), "const".into(), "constant".into()],
///     2,
///     None,
/// )
/// .unwrap();
/// let result = grade(&q, Some(2));
/// assert!(result.is_correct);
/// assert_eq!(result.correct_text, "const");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub is_correct: bool,
    pub correct_index: usize,
    pub correct_text: String,
    pub explanation: Option<String>,
}

/// Grade a pick. `None` means nothing was picked.
///
/// Out-of-range picks grade as incorrect.
#[must_use]
pub fn grade(question: &Question, selected: Option<usize>) -> Grade {
    Grade {
        is_correct: selected == Some(question.answer_index()),
        correct_index: question.answer_index(),
        correct_text: question.answer_text().to_owned(),
        explanation: question.explanation().map(str::to_owned),
    }
}

/// Grade a pick and snapshot it for review in one step.
#[must_use]
pub fn grade_and_record(question: &Question, selected: Option<usize>) -> (Grade, AnswerRecord) {
    (grade(question, selected), AnswerRecord::new(question, selected))
}
