//! Rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::state::{App, Field};
use super::theme;

/// Widest the form gets on large terminals.
const FORM_WIDTH: u16 = 48;

const TITLE: &str = "Calculate Tip";
const LABEL_BILL: &str = "Bill Amount";
const LABEL_TIP: &str = "Tip (%)";
const LABEL_ROUND_UP: &str = "Round up tip?";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the tip screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let [column] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(frame.area());

    let [title, _, bill, tip, round_up, _, result, _, help] = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1),
        Constraint::Length(3), // bill field
        Constraint::Length(3), // tip field
        Constraint::Length(3), // round-up switch
        Constraint::Length(1),
        Constraint::Length(1), // tip amount
        Constraint::Min(0),
        Constraint::Length(1), // help
    ])
    .areas(column);

    frame.render_widget(render_title(), title);

    render_text_field(
        LABEL_BILL,
        app.form.bill_input(),
        app.focus == Field::Bill,
        frame,
        bill,
    );
    render_text_field(
        LABEL_TIP,
        app.form.tip_input(),
        app.focus == Field::TipPercent,
        frame,
        tip,
    );
    render_round_up(
        app.form.round_up(),
        app.focus == Field::RoundUp,
        frame,
        round_up,
    );

    frame.render_widget(render_result(app.form.tip()), result);
    frame.render_widget(render_help(app.focus), help);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(TITLE, theme::STYLE_TITLE)).centered())
}

/// Help line showing available keybindings for the focused control.
fn render_help(focus: Field) -> Paragraph<'static> {
    let (key, what) = if focus.is_text() {
        ("[Enter]", " next  [Tab] move  [^U] clear  [Esc] quit")
    } else {
        ("[Space]", " toggle  [Tab] move  [Esc] quit")
    };

    Paragraph::new(Line::from(vec![
        Span::styled(key, theme::STYLE_INTERACTIVE),
        Span::styled(what, theme::STYLE_HELP),
    ]))
}

fn border_for(focused: bool) -> Block<'static> {
    let style = if focused {
        theme::STYLE_FOCUSED
    } else {
        theme::STYLE_UNFOCUSED
    };
    Block::bordered().border_style(style)
}

// ============================================================================
// CONTROLS
// ============================================================================

fn render_text_field(label: &str, value: &str, focused: bool, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    if value.is_empty() && !focused {
        spans.push(Span::styled("0", theme::STYLE_DIM));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled("_", theme::STYLE_INTERACTIVE));
    }

    let block = border_for(focused).title(label.to_string());
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_round_up(on: bool, focused: bool, frame: &mut Frame, area: Rect) {
    let block = border_for(focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [label, switch] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(6)]).areas(inner);

    frame.render_widget(Paragraph::new(LABEL_ROUND_UP), label);
    frame.render_widget(Paragraph::new(switch_line(on)), switch);
}

/// "( ●)" when on, "(● )" when off.
fn switch_line(on: bool) -> Line<'static> {
    let line = if on {
        Line::from(vec![
            Span::styled("( ", theme::STYLE_SAFE),
            Span::styled("●", theme::STYLE_SWITCH_ON),
            Span::styled(")", theme::STYLE_SAFE),
        ])
    } else {
        Line::from(vec![
            Span::styled("(", theme::STYLE_DIM),
            Span::styled("●", theme::STYLE_SWITCH_OFF),
            Span::styled(" )", theme::STYLE_DIM),
        ])
    };
    line.right_aligned()
}

fn render_result(tip: &str) -> Paragraph<'static> {
    Paragraph::new(
        Line::from(Span::styled(format!("Tip amount: {tip}"), theme::STYLE_RESULT)).centered(),
    )
}

// ============================================================================
// TESTS
// ============================================================================
