use dioxus::prelude::*;
use quiz_core::model::Percent;
use services::{Remark, ReviewEntry, Summary};
use storage::repository::{KeyValueStore, Storage};

use super::panels::{QuestionPanel, ResultPanel};
use super::test_harness::{drive_dom, setup_quiz_harness};
use crate::vm::{FeedbackVm, QuestionVm, SummaryVm};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_start_screen() {
    let mut harness = setup_quiz_harness(Storage::in_memory(), 5);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("QuizMaster"), "missing title in {html}");
    assert!(html.contains("Start quiz"), "missing start button in {html}");
    assert!(html.contains("Best score: none yet"), "missing best score in {html}");
    assert!(html.contains("aria-live"), "missing live region in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_loads_stored_preferences() {
    let storage = Storage::in_memory();
    storage.kv.write(services::BEST_SCORE_KEY, "70").await.unwrap();
    storage.kv.write(services::THEME_KEY, "dark").await.unwrap();

    let mut harness = setup_quiz_harness(storage, 5);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Best score: 70%"), "missing stored best in {html}");
    assert!(html.contains("data-theme=\"dark\""), "missing theme in {html}");
    assert!(html.contains("Light mode"), "missing theme toggle label in {html}");
}

#[derive(Props, Clone, PartialEq)]
struct QuestionHarnessProps {
    question: QuestionVm,
    feedback: Option<FeedbackVm>,
}

#[component]
fn QuestionHarness(props: QuestionHarnessProps) -> Element {
    rsx! {
        QuestionPanel {
            question: props.question.clone(),
            feedback: props.feedback.clone(),
            on_select: move |_| {},
            on_focus: move |_| {},
            on_proceed: move |_| {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ResultHarnessProps {
    summary: SummaryVm,
}

#[component]
fn ResultHarness(props: ResultHarnessProps) -> Element {
    rsx! {
        ResultPanel {
            summary: props.summary.clone(),
            best: "Best score: 67%".to_string(),
            on_retry: move |_| {},
            on_share: move |_| {},
        }
    }
}

fn colors() -> Vec<String> {
    vec!["red".into(), "green".into(), "blue".into()]
}

#[test]
fn question_panel_smoke_renders_graded_state() {
    let mut question = QuestionVm::new(0, 3, "Which color is the sky?", &colors());
    question.select(0);
    question.mark_graded(2, Some(0));
    let feedback = FeedbackVm::new(false, "blue", None);

    let mut dom = VirtualDom::new_with_props(
        QuestionHarness,
        QuestionHarnessProps {
            question,
            feedback: Some(feedback),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Question 1 of 3"), "missing counter in {html}");
    assert!(html.contains("choice--correct"), "missing correct mark in {html}");
    assert!(html.contains("choice--incorrect"), "missing wrong mark in {html}");
    assert!(html.contains("Incorrect."), "missing feedback in {html}");
    assert!(html.contains("Correct answer: blue"), "missing answer in {html}");
    assert!(html.contains("Next"), "missing action label in {html}");
}

#[test]
fn question_panel_smoke_disables_action_until_selection() {
    let question = QuestionVm::new(2, 3, "Last one?", &colors());
    let mut dom = VirtualDom::new_with_props(
        QuestionHarness,
        QuestionHarnessProps {
            question,
            feedback: None,
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Submit"), "missing submit label in {html}");
    assert!(html.contains("disabled"), "action should be disabled in {html}");
    assert!(!html.contains("feedback--"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_panel_smoke_renders_review() {
    let summary = Summary {
        correct: 2,
        total: 3,
        percent: Percent::new(67),
        remark: Remark::Good,
        review_entries: vec![
            ReviewEntry {
                number: 1,
                question_text: "Which color is the sky?".into(),
                is_correct: false,
                selected_text: Some("red".into()),
                correct_text: "blue".into(),
            },
            ReviewEntry {
                number: 2,
                question_text: "Which color is grass?".into(),
                is_correct: true,
                selected_text: Some("green".into()),
                correct_text: "green".into(),
            },
        ],
        celebrate: true,
    };

    let mut dom = VirtualDom::new_with_props(
        ResultHarness,
        ResultHarnessProps {
            summary: SummaryVm::from(&summary),
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("2 / 3"), "missing score in {html}");
    assert!(html.contains("67%"), "missing percent in {html}");
    assert!(html.contains("Good job! Almost there."), "missing remark in {html}");
    assert!(html.contains("panel--celebrate"), "missing celebration in {html}");
    assert_eq!(html.matches("class=\"confetti\"").count(), 80);
    assert!(html.contains("confetti-fall"), "confetti should animate in {html}");
    assert!(html.contains("1. Which color is the sky?"), "missing review in {html}");
    assert!(html.contains("Your answer: red"), "missing pick in {html}");
    assert!(
        html.contains("Your answer was correct • Correct answer: green"),
        "correct item should name its answer in {html}"
    );
    assert!(html.contains("I scored 67% on QuizMaster!"), "missing share text in {html}");
    assert!(html.contains("Try again"), "missing retry in {html}");
}
