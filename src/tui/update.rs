//! State transitions: (App, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Every edit goes through the form's setters, so the displayed tip is
//! recomputed synchronously before the next frame is drawn.

use super::state::{Action, App, Field, Transition};

/// Characters a numeric keyboard can produce.
///
/// Advisory only: the form's parser decides what the text means.
pub fn is_numeric_key(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ',' | '-')
}

/// Apply one action to the app.
pub fn update(app: &mut App, action: Action) -> Transition {
    match action {
        Action::Quit => {
            app.should_quit = true;
            return Transition::Quit;
        }
        Action::NextField => app.focus = app.focus.next(),
        Action::PrevField => app.focus = app.focus.prev(),
        Action::Submit => {
            if app.focus == Field::RoundUp {
                toggle_round_up(app);
            } else {
                app.focus = app.focus.next();
            }
        }
        Action::Toggle => {
            if app.focus == Field::RoundUp {
                toggle_round_up(app);
            }
        }
        Action::Input(c) => {
            if is_numeric_key(c) {
                edit_focused(app, |text| text.push(c));
            }
        }
        Action::Backspace => edit_focused(app, |text| {
            text.pop();
        }),
        Action::Clear => edit_focused(app, String::clear),
    }
    Transition::Continue
}

fn toggle_round_up(app: &mut App) {
    let flipped = !app.form.round_up();
    app.form.set_round_up(flipped);
}

/// Apply `edit` to the focused text field. No-op on the toggle.
fn edit_focused<F>(app: &mut App, edit: F)
where
    F: FnOnce(&mut String),
{
    match app.focus {
        Field::Bill => {
            let mut text = app.form.bill_input().to_string();
            edit(&mut text);
            app.form.set_bill(text);
        }
        Field::TipPercent => {
            let mut text = app.form.tip_input().to_string();
            edit(&mut text);
            app.form.set_tip_percent(text);
        }
        Field::RoundUp => {}
    }
}

// ============================================================================
// TESTS
// ============================================================================
