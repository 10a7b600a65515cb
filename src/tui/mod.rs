//! TUI module for the interactive tip screen.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: data types (App, Field, Action, Transition)
//! - `update`: transitions driven by actions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, key events)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
