use dioxus::prelude::*;
use services::{PresentationPort, Summary};

use crate::announce::DeferredAnnouncer;
use crate::vm::QuizScreen;

/// Presenter that writes into component signals.
///
/// Screen updates land in `screen`; announcements go through a deferred
/// live region so repeats are still spoken.
#[derive(Clone, Copy)]
pub struct SignalPresenter {
    screen: Signal<QuizScreen>,
    announcer: DeferredAnnouncer<Signal<String>>,
}

impl SignalPresenter {
    #[must_use]
    pub fn new(screen: Signal<QuizScreen>, live_region: Signal<String>) -> Self {
        Self {
            screen,
            announcer: DeferredAnnouncer::new(live_region),
        }
    }
}

impl PresentationPort for SignalPresenter {
    fn render_question(&mut self, index: usize, total: usize, text: &str, choices: &[String]) {
        self.screen
            .write()
            .render_question(index, total, text, choices);
    }

    fn select_choice(&mut self, index: usize) {
        self.screen.write().select_choice(index);
    }

    fn mark_graded(&mut self, correct_index: usize, selected: Option<usize>) {
        self.screen.write().mark_graded(correct_index, selected);
    }

    fn show_feedback(&mut self, is_correct: bool, correct_text: &str, explanation: Option<&str>) {
        self.screen
            .write()
            .show_feedback(is_correct, correct_text, explanation);
    }

    fn show_summary(&mut self, summary: &Summary) {
        self.screen.write().show_summary(summary);
    }

    fn announce(&mut self, message: &str) {
        let delivery = self.announcer.announce(message);
        spawn(delivery);
    }
}
