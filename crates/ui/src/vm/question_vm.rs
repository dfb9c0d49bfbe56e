use quiz_core::model::percent_of;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChoiceState {
    #[default]
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl ChoiceState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "choice",
            Self::Selected => "choice choice--selected",
            Self::Correct => "choice choice--correct",
            Self::Incorrect => "choice choice--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    /// Letter badge, `A` for the first choice.
    pub key: char,
    pub label: String,
    pub state: ChoiceState,
}

impl ChoiceVm {
    #[must_use]
    pub fn dom_id(&self) -> String {
        choice_dom_id(self.index)
    }
}

#[must_use]
pub fn choice_dom_id(index: usize) -> String {
    format!("choice-{index}")
}

fn choice_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub choices: Vec<ChoiceVm>,
    /// Choices stop accepting selection once graded.
    pub locked: bool,
}

impl QuestionVm {
    #[must_use]
    pub fn new(index: usize, total: usize, text: &str, choices: &[String]) -> Self {
        Self {
            index,
            total,
            text: text.to_owned(),
            choices: choices
                .iter()
                .enumerate()
                .map(|(i, label)| ChoiceVm {
                    index: i,
                    key: choice_letter(i),
                    label: label.clone(),
                    state: ChoiceState::Idle,
                })
                .collect(),
            locked: false,
        }
    }

    pub fn select(&mut self, index: usize) {
        for choice in &mut self.choices {
            choice.state = if choice.index == index {
                ChoiceState::Selected
            } else {
                ChoiceState::Idle
            };
        }
    }

    pub fn mark_graded(&mut self, correct_index: usize, selected: Option<usize>) {
        for choice in &mut self.choices {
            choice.state = if choice.index == correct_index {
                ChoiceState::Correct
            } else if Some(choice.index) == selected {
                ChoiceState::Incorrect
            } else {
                ChoiceState::Idle
            };
        }
        self.locked = true;
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.choices
            .iter()
            .any(|choice| choice.state == ChoiceState::Selected)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("Question {} of {}", self.index + 1, self.total)
    }

    /// Width of the progress bar: share of questions already behind.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        percent_of(self.index, self.total).value()
    }

    /// Label of the single action button.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match (self.locked, self.is_last()) {
            (false, _) => "Submit",
            (true, false) => "Next",
            (true, true) => "Finish",
        }
    }

    #[must_use]
    pub fn action_enabled(&self) -> bool {
        self.locked || self.has_selection()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTone {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub tone: FeedbackTone,
    pub headline: &'static str,
    pub detail: Option<String>,
}

impl FeedbackVm {
    #[must_use]
    pub fn new(is_correct: bool, correct_text: &str, explanation: Option<&str>) -> Self {
        if is_correct {
            return Self {
                tone: FeedbackTone::Correct,
                headline: "Correct!",
                detail: explanation.map(str::to_owned),
            };
        }
        let detail = match explanation {
            Some(explanation) => format!("Correct answer: {correct_text} — {explanation}"),
            None => format!("Correct answer: {correct_text}"),
        };
        Self {
            tone: FeedbackTone::Incorrect,
            headline: "Incorrect.",
            detail: Some(detail),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            FeedbackTone::Correct => "feedback feedback--correct",
            FeedbackTone::Incorrect => "feedback feedback--incorrect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(index: usize, total: usize) -> QuestionVm {
        let choices = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        QuestionVm::new(index, total, "Pick one", &choices)
    }

    #[test]
    fn choices_get_letter_keys() {
        let vm = question(0, 3);
        let keys: Vec<_> = vm.choices.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!['A', 'B', 'C']);
        assert_eq!(vm.choices[1].dom_id(), "choice-1");
    }

    #[test]
    fn selection_is_exclusive() {
        let mut vm = question(0, 3);
        assert!(!vm.action_enabled());
        vm.select(0);
        vm.select(2);
        let states: Vec<_> = vm.choices.iter().map(|c| c.state).collect();
        assert_eq!(
            states,
            vec![ChoiceState::Idle, ChoiceState::Idle, ChoiceState::Selected]
        );
        assert!(vm.action_enabled());
        assert_eq!(vm.action_label(), "Submit");
    }

    #[test]
    fn grading_marks_wrong_pick_apart_from_answer() {
        let mut vm = question(0, 3);
        vm.select(2);
        vm.mark_graded(1, Some(2));
        assert_eq!(vm.choices[1].state, ChoiceState::Correct);
        assert_eq!(vm.choices[2].state, ChoiceState::Incorrect);
        assert_eq!(vm.choices[0].state, ChoiceState::Idle);
        assert!(vm.locked);
        assert_eq!(vm.action_label(), "Next");
    }

    #[test]
    fn last_question_offers_finish() {
        let mut vm = question(2, 3);
        vm.mark_graded(0, Some(0));
        assert_eq!(vm.choices[0].state, ChoiceState::Correct);
        assert_eq!(vm.action_label(), "Finish");
        assert_eq!(vm.progress_percent(), 67);
        assert_eq!(vm.counter_label(), "Question 3 of 3");
    }

    #[test]
    fn feedback_text_for_both_outcomes() {
        let right = FeedbackVm::new(true, "blue", None);
        assert_eq!(right.headline, "Correct!");
        assert_eq!(right.detail, None);

        let wrong = FeedbackVm::new(false, "blue", Some("Short wavelengths scatter."));
        assert_eq!(wrong.tone, FeedbackTone::Incorrect);
        assert_eq!(
            wrong.detail.as_deref(),
            Some("Correct answer: blue — Short wavelengths scatter.")
        );
        assert_eq!(
            FeedbackVm::new(false, "blue", None).detail.as_deref(),
            Some("Correct answer: blue")
        );
    }
}
