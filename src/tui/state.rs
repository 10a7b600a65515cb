//! TUI state algebra: the screen model, semantic actions, transitions.
//!
//! The screen has a single implicit "editing" state. The only per-screen
//! transient state is which field has focus; the input values themselves
//! live in the [`TipForm`], which keeps the derived tip up to date.

use crate::form::TipForm;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Input fields and derived tip.
    pub form: TipForm,

    /// Field that receives typed characters.
    pub focus: Field,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// FOCUS
// ============================================================================

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Bill,
    TipPercent,
    RoundUp,
}

impl Field {
    /// Next control, wrapping after the toggle.
    pub fn next(self) -> Self {
        match self {
            Field::Bill => Field::TipPercent,
            Field::TipPercent => Field::RoundUp,
            Field::RoundUp => Field::Bill,
        }
    }

    /// Previous control, wrapping before the bill field.
    pub fn prev(self) -> Self {
        match self {
            Field::Bill => Field::RoundUp,
            Field::TipPercent => Field::Bill,
            Field::RoundUp => Field::TipPercent,
        }
    }

    /// Whether this control accepts typed text.
    pub fn is_text(self) -> bool {
        !matches!(self, Field::RoundUp)
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the focused text field.
    Input(char),
    /// Delete the last character of the focused text field.
    Backspace,
    /// Empty the focused text field.
    Clear,
    /// Move focus forward ("Next" on the numeric keyboard).
    NextField,
    /// Move focus backward.
    PrevField,
    /// Confirm: toggles the switch when focused, otherwise moves on.
    Submit,
    /// Flip the round-up switch when it has focus.
    Toggle,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running and redraw.
    Continue,
    /// Leave the screen.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App with focus on the bill field.
    pub fn new(form: TipForm) -> Self {
        App {
            form,
            focus: Field::default(),
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
