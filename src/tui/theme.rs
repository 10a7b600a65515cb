//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Cyan: the focused control and keybinding hints
//! - Green: the switch when on, and the tip amount
//! - Dim: placeholders and the switch when off
//! - Bold: headings and the result

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Positive state, green.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Interactive element or keybinding hint, cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text, dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Screen heading.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the focused control.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Border of an unfocused control.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Switch knob when on.
pub const STYLE_SWITCH_ON: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Switch knob when off.
pub const STYLE_SWITCH_OFF: Style = Style::new().fg(Color::DarkGray);

/// The computed tip line.
pub const STYLE_RESULT: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
