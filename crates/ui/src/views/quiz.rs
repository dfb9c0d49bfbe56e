use dioxus::prelude::*;

use quiz_core::model::Percent;
use services::{QuizController, Step, Theme};

use super::panels::{QuestionPanel, ResultPanel, StartPanel};
use super::scripts::{focus_element, prefers_dark_scheme, share_text};
use crate::announce::DeferredAnnouncer;
use crate::context::AppContext;
use crate::presenter::SignalPresenter;
use crate::vm::{
    FocusTarget, QuizScreen, Screen, Shortcut, best_score_label, choice_dom_id, focus_after,
    shortcut_for,
};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();

    let screen = use_signal(QuizScreen::new);
    let live_region = use_signal(String::new);
    let mut controller = use_signal({
        let ctx = ctx.clone();
        move || {
            QuizController::new(
                ctx.bank(),
                ctx.config(),
                SignalPresenter::new(screen, live_region),
            )
            .with_clock(ctx.clock())
        }
    });
    let mut best = use_signal(|| None::<Percent>);
    let mut theme = use_signal(Theme::default);
    let mut focused = use_signal(|| None::<usize>);

    let scores = ctx.scores();
    let themes = ctx.themes();

    {
        let scores = scores.clone();
        let themes = themes.clone();
        use_future(move || {
            let scores = scores.clone();
            let themes = themes.clone();
            async move {
                let saved = themes.load().await;
                let resolved = match saved {
                    Some(saved) => saved,
                    None => Theme::system_default(prefers_dark_scheme().await),
                };
                theme.set(resolved);
                best.set(scores.best().await);
            }
        });
    }

    let mut focus_choice = move |index: usize| {
        focused.set(Some(index));
        focus_element(&choice_dom_id(index));
    };

    let start = use_callback(move |()| {
        let started = controller.write().start();
        match started {
            Ok(()) => focus_choice(0),
            Err(err) => tracing::warn!(%err, "quiz could not start"),
        }
    });

    let select = use_callback(move |index: usize| {
        if controller.write().select(index).is_ok() {
            focused.set(Some(index));
        }
    });

    let proceed = use_callback(move |()| {
        let step = match controller.write().proceed() {
            Ok(step) => step,
            Err(err) => {
                tracing::debug!(%err, "proceed ignored");
                return;
            }
        };
        match focus_after(&step) {
            Some(FocusTarget::Choice(index)) => focus_choice(index),
            Some(FocusTarget::Action) => focus_element("quiz-action"),
            None => focused.set(None),
        }
        if let Step::Finished(report) = step {
            let scores = scores.clone();
            spawn(async move {
                let outcome = scores.record_report(&report).await;
                tracing::debug!(?outcome, "best score checked");
                best.set(scores.best().await);
            });
        }
    });

    let on_focus = use_callback(move |index: usize| focus_choice(index));

    let share = use_callback(move |text: String| {
        spawn(async move {
            let outcome = share_text(&text).await;
            tracing::debug!(?outcome, "result shared");
            if let Some(message) = outcome.announcement() {
                DeferredAnnouncer::new(live_region).announce(message).await;
            }
        });
    });

    let toggle_theme = use_callback(move |()| {
        let next = theme().toggled();
        theme.set(next);
        let themes = themes.clone();
        spawn(async move {
            themes.save(next).await;
        });
    });

    let on_key = move |evt: KeyboardEvent| {
        let current = screen.read().screen;
        let Some(shortcut) = shortcut_for(&evt.data.key(), current) else {
            return;
        };
        evt.prevent_default();
        match shortcut {
            Shortcut::Proceed => proceed.call(()),
            Shortcut::Retry => start.call(()),
        }
    };

    let view = screen.read().clone();
    let best_label = best_score_label(best());
    let current_theme = theme();
    let is_dark = current_theme == Theme::Dark;
    let theme_label = if is_dark { "Light mode" } else { "Dark mode" };

    rsx! {
        div {
            class: "quiz-app",
            "data-theme": "{current_theme}",
            tabindex: "0",
            onkeydown: on_key,

            header { class: "quiz-header",
                h1 { "QuizMaster" }
                button {
                    id: "theme-toggle",
                    class: "btn btn--ghost",
                    aria_pressed: is_dark,
                    onclick: move |_| toggle_theme.call(()),
                    "{theme_label}"
                }
            }

            div { class: "sr-only", role: "status", aria_live: "polite", "{live_region}" }

            match view.screen {
                Screen::Start => rsx! {
                    StartPanel { best: best_label.clone(), on_start: start }
                },
                Screen::Quiz => match view.question {
                    Some(question) => rsx! {
                        QuestionPanel {
                            question,
                            feedback: view.feedback,
                            focused: focused(),
                            on_select: select,
                            on_focus,
                            on_proceed: proceed,
                        }
                    },
                    None => rsx! {},
                },
                Screen::Result => match view.summary {
                    Some(summary) => rsx! {
                        ResultPanel {
                            summary,
                            best: best_label.clone(),
                            on_retry: start,
                            on_share: share,
                        }
                    },
                    None => rsx! {},
                },
            }
        }
    }
}
