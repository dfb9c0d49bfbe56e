mod confetti;
mod question_vm;
mod screen;
mod share;
mod shortcuts;
mod summary_vm;

pub use confetti::{CONFETTI_LIFETIME, CONFETTI_PIECES, ConfettiPiece, confetti_burst};
pub use question_vm::{
    ChoiceState, ChoiceVm, FeedbackTone, FeedbackVm, QuestionVm, choice_dom_id,
};
pub use screen::{QuizScreen, Screen};
pub use share::{COPIED_ANNOUNCEMENT, ShareOutcome};
pub use shortcuts::{
    ChoiceKey, FocusTarget, Shortcut, choice_key, focus_after, move_focus, shortcut_for,
};
pub use summary_vm::{ReviewItemVm, SummaryVm, best_score_label};
