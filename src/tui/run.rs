//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the state, update
//! and view layers to the real terminal via crossterm and ratatui.
//!
//! Single-threaded: the loop blocks on `event::read()` and every key is
//! applied and redrawn before the next one is read.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::form::TipForm;

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::Clear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),

        // Focus
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Enter => Some(Action::Submit),

        // Editing
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char(c) => Some(Action::Input(c)),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Run `undo` if `result` is an error, then pass the result through.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Set up the terminal for TUI mode.
///
/// On failure the terminal is left in cooked mode on the main screen.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    undo_on_err(io::stdout().execute(EnterAlternateScreen).map(drop), || {
        let _ = disable_raw_mode();
    })?;
    let backend = CrosstermBackend::new(io::stdout());
    undo_on_err(Terminal::new(backend), || {
        let _ = restore_terminal();
    })
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive tip screen until the user quits.
///
/// Returns the final form so the caller can report the last result.
pub fn run(form: TipForm) -> io::Result<TipForm> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(form);

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result.map(|()| app.form)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let key = match event::read()? {
            // Windows reports releases too; act on presses only
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            _ => continue, // ignore mouse, resize, etc.
        };

        if let Some(action) = map_key(key) {
            debug!(?action, "key action");
            if update(app, action) == Transition::Quit {
                return Ok(());
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
