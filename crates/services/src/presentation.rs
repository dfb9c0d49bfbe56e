//! Contract between the quiz core and whatever draws it.

use crate::sessions::Summary;

/// Calls the quiz core makes on a presentation surface.
///
/// The core only pushes state through this trait; it never reads anything
/// back from the surface.
pub trait PresentationPort {
    /// Show question `index` (zero-based) of `total`.
    fn render_question(&mut self, index: usize, total: usize, text: &str, choices: &[String]);

    /// Mark the choice the user currently has selected.
    fn select_choice(&mut self, index: usize);

    /// Lock the choices and highlight the outcome. `selected` is highlighted as
    /// wrong only when it differs from `correct_index`.
    fn mark_graded(&mut self, correct_index: usize, selected: Option<usize>);

    fn show_feedback(&mut self, is_correct: bool, correct_text: &str, explanation: Option<&str>);

    fn show_summary(&mut self, summary: &Summary);

    /// Queue a message for assistive technology.
    fn announce(&mut self, message: &str);
}

/// Every call a `RecordingPresenter` has observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    RenderQuestion {
        index: usize,
        total: usize,
        text: String,
        choices: Vec<String>,
    },
    SelectChoice(usize),
    MarkGraded {
        correct_index: usize,
        selected: Option<usize>,
    },
    ShowFeedback {
        is_correct: bool,
        correct_text: String,
        explanation: Option<String>,
    },
    ShowSummary(Summary),
    Announce(String),
}

/// Presenter that records calls in order, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    #[must_use]
    pub fn last(&self) -> Option<&PresenterCall> {
        self.calls.last()
    }

    /// Drain recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<PresenterCall> {
        std::mem::take(&mut self.calls)
    }

    #[must_use]
    pub fn announcements(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Announce(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PresentationPort for RecordingPresenter {
    fn render_question(&mut self, index: usize, total: usize, text: &str, choices: &[String]) {
        self.calls.push(PresenterCall::RenderQuestion {
            index,
            total,
            text: text.to_owned(),
            choices: choices.to_vec(),
        });
    }

    fn select_choice(&mut self, index: usize) {
        self.calls.push(PresenterCall::SelectChoice(index));
    }

    fn mark_graded(&mut self, correct_index: usize, selected: Option<usize>) {
        self.calls.push(PresenterCall::MarkGraded {
            correct_index,
            selected,
        });
    }

    fn show_feedback(&mut self, is_correct: bool, correct_text: &str, explanation: Option<&str>) {
        self.calls.push(PresenterCall::ShowFeedback {
            is_correct,
            correct_text: correct_text.to_owned(),
            explanation: explanation.map(str::to_owned),
        });
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.calls.push(PresenterCall::ShowSummary(summary.clone()));
    }

    fn announce(&mut self, message: &str) {
        self.calls.push(PresenterCall::Announce(message.to_owned()));
    }
}
