use dioxus::prelude::*;

use crate::vm::{
    CONFETTI_LIFETIME, CONFETTI_PIECES, ChoiceKey, ChoiceState, FeedbackVm, QuestionVm, SummaryVm,
    choice_key, confetti_burst,
};

#[component]
pub fn StartPanel(best: String, on_start: Callback<()>) -> Element {
    rsx! {
        section { class: "panel panel--start",
            h2 { "Ready to test yourself?" }
            p { class: "best-score", "{best}" }
            button {
                id: "start-quiz",
                class: "btn btn--primary",
                onclick: move |_| on_start.call(()),
                "Start quiz"
            }
        }
    }
}

#[component]
pub fn QuestionPanel(
    question: QuestionVm,
    feedback: Option<FeedbackVm>,
    focused: Option<usize>,
    on_select: Callback<usize>,
    on_focus: Callback<usize>,
    on_proceed: Callback<()>,
) -> Element {
    let progress = question.progress_percent();
    let counter = question.counter_label();
    let action_label = question.action_label();
    let action_disabled = !question.action_enabled();
    let locked = question.locked;
    let count = question.choices.len();
    let choices = question
        .choices
        .iter()
        .map(|choice| {
            let mut class = choice.state.class().to_string();
            if focused == Some(choice.index) {
                class.push_str(" choice--focused");
            }
            let checked = choice.state != ChoiceState::Idle;
            (choice.index, choice.clone(), class, checked)
        })
        .collect::<Vec<_>>();

    rsx! {
        section { class: "panel panel--quiz",
            div {
                class: "progress",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{progress}",
                div { class: "progress__bar", style: "width: {progress}%" }
            }
            p { class: "question-counter", "{counter}" }
            h2 { id: "question-text", class: "question-text", "{question.text}" }

            ul { class: "choices", role: "radiogroup", aria_labelledby: "question-text",
                for (index, choice, class, checked) in choices {
                    li { key: "{index}",
                        button {
                            id: "{choice.dom_id()}",
                            class: "{class}",
                            role: "radio",
                            aria_checked: checked,
                            disabled: locked,
                            onclick: move |_| on_select.call(index),
                            onkeydown: move |evt: KeyboardEvent| {
                                let Some(action) = choice_key(&evt.data.key(), index, count) else {
                                    return;
                                };
                                evt.prevent_default();
                                match action {
                                    ChoiceKey::Select(target) => on_select.call(target),
                                    ChoiceKey::Focus(target) => on_focus.call(target),
                                }
                            },
                            span { class: "choice__key", "{choice.key}" }
                            span { class: "choice__label", "{choice.label}" }
                        }
                    }
                }
            }

            if let Some(feedback) = feedback {
                div { class: "{feedback.class()}",
                    strong { "{feedback.headline}" }
                    if let Some(detail) = feedback.detail.clone() {
                        span { " {detail}" }
                    }
                }
            }

            button {
                id: "quiz-action",
                class: "btn btn--primary",
                disabled: action_disabled,
                onclick: move |_| on_proceed.call(()),
                "{action_label}"
            }
        }
    }
}

#[component]
pub fn ResultPanel(
    summary: SummaryVm,
    best: String,
    on_retry: Callback<()>,
    on_share: Callback<String>,
) -> Element {
    let class = if summary.celebrate {
        "panel panel--result panel--celebrate"
    } else {
        "panel panel--result"
    };
    let share_text = summary.share_text.clone();
    let celebrate = summary.celebrate;
    let pieces = use_hook(move || {
        if celebrate {
            confetti_burst(&mut rand::rng(), CONFETTI_PIECES)
        } else {
            Vec::new()
        }
    });
    let mut confetti_live = use_signal(move || celebrate);
    use_future(move || async move {
        if confetti_live() {
            tokio::time::sleep(CONFETTI_LIFETIME).await;
            confetti_live.set(false);
        }
    });

    rsx! {
        section { class: "{class}",
            if confetti_live() {
                div { class: "confetti-layer", aria_hidden: "true",
                    for (i, piece) in pieces.iter().enumerate() {
                        div { key: "{i}", class: "confetti", style: "{piece.style()}" }
                    }
                }
            }
            h2 { "Quiz complete" }
            p { class: "score", "{summary.score_label}" }
            p { class: "percent", "{summary.percent_label}" }
            p { class: "remark", "{summary.remark}" }
            p { class: "best-score", "{best}" }

            h3 { "Review" }
            ol { class: "review",
                for item in summary.review.iter().cloned() {
                    li { key: "{item.number}", class: "{item.class()}",
                        p { class: "review-item__question", "{item.question}" }
                        p { class: "review-item__answer", "{item.answer_line()}" }
                    }
                }
            }

            p { class: "share-text", "{summary.share_text}" }
            div { class: "actions",
                button {
                    id: "share-result",
                    class: "btn",
                    onclick: move |_| on_share.call(share_text.clone()),
                    "Share"
                }
                button {
                    id: "retry-quiz",
                    class: "btn btn--primary",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
        }
    }
}
