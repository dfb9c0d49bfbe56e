use std::sync::Arc;

use quiz_core::model::QuizConfig;
use services::{Clock, QuestionBank, ScoreStore, ThemeStore};

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn quiz_config(&self) -> QuizConfig;
    fn clock(&self) -> Clock;

    fn score_store(&self) -> ScoreStore;
    fn theme_store(&self) -> ThemeStore;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
    clock: Clock,

    scores: ScoreStore,
    themes: ThemeStore,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            config: app.quiz_config(),
            clock: app.clock(),
            scores: app.score_store(),
            themes: app.theme_store(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn scores(&self) -> ScoreStore {
        self.scores.clone()
    }

    #[must_use]
    pub fn themes(&self) -> ThemeStore {
        self.themes.clone()
    }
}

// Provided by the composition root in `crates/app`.

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
