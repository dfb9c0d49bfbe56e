use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// Snapshot of one graded question, taken at grading time.
///
/// Records are appended once per question in presentation order and never
/// revised afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub selected_index: Option<usize>,
    pub correct_index: usize,
    pub text: String,
    pub choices: Vec<String>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question: &Question, selected_index: Option<usize>) -> Self {
        Self {
            question_id: question.id().clone(),
            selected_index,
            correct_index: question.answer_index(),
            text: question.text().to_owned(),
            choices: question.choices().to_vec(),
        }
    }

    /// Whether the recorded pick matches the canonical answer.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected_index == Some(self.correct_index)
    }

    /// Text of the recorded pick, if one was made and is in range.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.choices.get(index))
            .map(String::as_str)
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.choices[self.correct_index]
    }
}
