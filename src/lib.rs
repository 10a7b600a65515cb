//! tip-time: compute a tip from a bill, a percentage and a round-up flag.

pub mod calculator;
pub mod config;
pub mod currency;
pub mod error;
pub mod form;
pub mod logging;
pub mod parse;
pub mod report;
pub mod tui;
pub mod types;
