use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::QuizConfig;
use quiz_core::time::fixed_now;
use services::{Clock, QuestionBank, ScoreStore, ThemeStore};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

#[derive(Clone)]
struct TestApp {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
    storage: Storage,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn quiz_config(&self) -> QuizConfig {
        self.config
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn score_store(&self) -> ScoreStore {
        ScoreStore::new(Arc::clone(&self.storage.kv))
    }

    fn theme_store(&self) -> ThemeStore {
        ThemeStore::new(Arc::clone(&self.storage.kv))
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(storage: Storage, session_length: u32) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: Arc::new(QuestionBank::builtin().expect("builtin bank")),
        config: QuizConfig::new(session_length).expect("session length"),
        storage: storage.clone(),
    });
    let dom = VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app });
    ViewHarness { dom, storage }
}
