use dioxus::prelude::Key;
use services::Step;

use super::Screen;

/// Screen-wide keyboard actions, handled wherever focus sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Submit or move on, same as the action button.
    Proceed,
    Retry,
}

/// Screen-wide shortcuts only. Enter and Space are left to the focused
/// element so buttons keep their native activation.
#[must_use]
pub fn shortcut_for(key: &Key, screen: Screen) -> Option<Shortcut> {
    let Key::Character(value) = key else {
        return None;
    };
    match screen {
        Screen::Quiz if value.eq_ignore_ascii_case("n") => Some(Shortcut::Proceed),
        Screen::Result if value.eq_ignore_ascii_case("r") => Some(Shortcut::Retry),
        _ => None,
    }
}

/// What a key pressed on a choice button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceKey {
    Select(usize),
    Focus(usize),
}

/// Keys handled by the choice at `index` out of `len`.
#[must_use]
pub fn choice_key(key: &Key, index: usize, len: usize) -> Option<ChoiceKey> {
    let forward = match key {
        Key::Enter => return Some(ChoiceKey::Select(index)),
        Key::Character(value) if value == " " => return Some(ChoiceKey::Select(index)),
        Key::ArrowDown | Key::ArrowRight => true,
        Key::ArrowUp | Key::ArrowLeft => false,
        _ => return None,
    };
    move_focus(Some(index), len, forward).map(ChoiceKey::Focus)
}

/// Wrap-around focus movement over `len` choices.
#[must_use]
pub fn move_focus(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    })
}

/// Where keyboard focus goes after the action button is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    Choice(usize),
    Action,
}

#[must_use]
pub fn focus_after(step: &Step) -> Option<FocusTarget> {
    match step {
        Step::Graded(_) => Some(FocusTarget::Action),
        Step::Next { .. } => Some(FocusTarget::Choice(0)),
        Step::Finished(_) => None,
    }
}
