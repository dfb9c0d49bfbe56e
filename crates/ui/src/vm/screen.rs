use services::{PresentationPort, Summary};

use super::question_vm::{FeedbackVm, QuestionVm};
use super::summary_vm::SummaryVm;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Start,
    Quiz,
    Result,
}

/// Everything the quiz surface renders, kept in step with the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizScreen {
    pub screen: Screen,
    pub question: Option<QuestionVm>,
    pub feedback: Option<FeedbackVm>,
    pub summary: Option<SummaryVm>,
    /// Latest announcement, for presenters without a deferred live region.
    pub announcement: String,
}

impl QuizScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresentationPort for QuizScreen {
    fn render_question(&mut self, index: usize, total: usize, text: &str, choices: &[String]) {
        self.screen = Screen::Quiz;
        self.question = Some(QuestionVm::new(index, total, text, choices));
        self.feedback = None;
        self.summary = None;
    }

    fn select_choice(&mut self, index: usize) {
        if let Some(question) = self.question.as_mut() {
            question.select(index);
        }
    }

    fn mark_graded(&mut self, correct_index: usize, selected: Option<usize>) {
        if let Some(question) = self.question.as_mut() {
            question.mark_graded(correct_index, selected);
        }
    }

    fn show_feedback(&mut self, is_correct: bool, correct_text: &str, explanation: Option<&str>) {
        self.feedback = Some(FeedbackVm::new(is_correct, correct_text, explanation));
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.screen = Screen::Result;
        self.question = None;
        self.feedback = None;
        self.summary = Some(SummaryVm::from(summary));
    }

    fn announce(&mut self, message: &str) {
        message.clone_into(&mut self.announcement);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::model::QuizConfig;
    use quiz_core::time::fixed_clock;
    use services::{QuestionBank, QuizController, Step};

    use super::*;
    use crate::vm::ChoiceState;

    fn controller(len: u32) -> QuizController<QuizScreen> {
        let bank = Arc::new(QuestionBank::builtin().unwrap());
        QuizController::new(bank, QuizConfig::new(len).unwrap(), QuizScreen::new())
            .with_clock(fixed_clock())
    }

    fn current_answer(ctl: &QuizController<QuizScreen>) -> usize {
        ctl.session()
            .unwrap()
            .current_question()
            .unwrap()
            .answer_index()
    }

    #[test]
    fn starts_on_first_question() {
        let mut ctl = controller(2);
        assert_eq!(ctl.presenter().screen, Screen::Start);

        ctl.start().unwrap();
        let screen = ctl.presenter();
        assert_eq!(screen.screen, Screen::Quiz);
        let question = screen.question.as_ref().unwrap();
        assert_eq!(question.index, 0);
        assert_eq!(question.total, 2);
        assert!(!question.action_enabled());
        assert_eq!(screen.announcement, "Question 1 of 2");
    }

    #[test]
    fn wrong_answer_shows_correct_one() {
        let mut ctl = controller(2);
        ctl.start().unwrap();
        let answer = current_answer(&ctl);
        let wrong = (answer + 1) % 4;

        ctl.select(wrong).unwrap();
        ctl.submit().unwrap();

        let screen = ctl.presenter();
        let question = screen.question.as_ref().unwrap();
        assert_eq!(question.choices[answer].state, ChoiceState::Correct);
        assert_eq!(question.choices[wrong].state, ChoiceState::Incorrect);
        assert_eq!(question.action_label(), "Next");
        let feedback = screen.feedback.as_ref().unwrap();
        assert_eq!(feedback.headline, "Incorrect.");
        assert!(
            feedback
                .detail
                .as_deref()
                .unwrap()
                .starts_with("Correct answer: ")
        );
        assert_eq!(screen.announcement, "Answer submitted.");
    }

    #[test]
    fn finishing_switches_to_result() {
        let mut ctl = controller(2);
        ctl.start().unwrap();
        loop {
            let answer = current_answer(&ctl);
            ctl.select(answer).unwrap();
            ctl.proceed().unwrap();
            if matches!(ctl.proceed().unwrap(), Step::Finished(_)) {
                break;
            }
            assert!(ctl.presenter().feedback.is_none());
        }

        let screen = ctl.presenter();
        assert_eq!(screen.screen, Screen::Result);
        assert!(screen.question.is_none());
        let summary = screen.summary.as_ref().unwrap();
        assert_eq!(summary.score_label, "2 / 2");
        assert!(summary.celebrate);
        assert_eq!(summary.review.len(), 2);
    }
}
