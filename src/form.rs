//! Input state holder: the three user-editable fields and the derived tip.
//!
//! Fields are stored as the raw text the user typed. Nothing is validated
//! at write time; every setter parses leniently and recomputes the
//! formatted tip before returning, so readers always see a consistent
//! result.

use tracing::debug;

use crate::calculator::{calculate_tip, quote};
use crate::currency::CurrencyFormatter;
use crate::parse::{ParseDefaults, parse_amount, parse_percent};
use crate::types::TipQuote;

#[derive(Debug)]
pub struct TipForm {
    bill_input: String,
    tip_input: String,
    round_up: bool,
    /// Derived: formatted tip for the current inputs.
    tip: String,
    defaults: ParseDefaults,
    formatter: Box<dyn CurrencyFormatter>,
}

impl TipForm {
    /// Empty form with zero defaults and round-up off.
    pub fn new(formatter: Box<dyn CurrencyFormatter>) -> Self {
        Self::with_defaults(formatter, ParseDefaults::default())
    }

    /// Empty form with explicit parse defaults.
    pub fn with_defaults(formatter: Box<dyn CurrencyFormatter>, defaults: ParseDefaults) -> Self {
        let mut form = TipForm {
            bill_input: String::new(),
            tip_input: String::new(),
            round_up: false,
            tip: String::new(),
            defaults,
            formatter,
        };
        form.recompute();
        form
    }

    // --- raw fields ---

    pub fn bill_input(&self) -> &str {
        &self.bill_input
    }

    pub fn tip_input(&self) -> &str {
        &self.tip_input
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    /// Formatted tip for the current inputs.
    pub fn tip(&self) -> &str {
        &self.tip
    }

    pub fn locale(&self) -> &str {
        self.formatter.locale()
    }

    // --- parsed values ---

    pub fn bill_amount(&self) -> f64 {
        parse_amount(&self.bill_input, &self.defaults)
    }

    pub fn tip_percent(&self) -> f64 {
        parse_percent(&self.tip_input, &self.defaults)
    }

    /// Snapshot of the current calculation.
    pub fn quote(&self) -> TipQuote {
        quote(
            self.bill_amount(),
            self.tip_percent(),
            self.round_up,
            self.formatter.as_ref(),
        )
    }

    // --- updates ---

    pub fn set_bill(&mut self, text: impl Into<String>) {
        self.bill_input = text.into();
        self.recompute();
    }

    pub fn set_tip_percent(&mut self, text: impl Into<String>) {
        self.tip_input = text.into();
        self.recompute();
    }

    pub fn set_round_up(&mut self, round_up: bool) {
        self.round_up = round_up;
        self.recompute();
    }

    fn recompute(&mut self) {
        let amount = self.bill_amount();
        let percent = self.tip_percent();
        self.tip = calculate_tip(amount, percent, self.round_up, self.formatter.as_ref());
        debug!(
            amount,
            percent,
            round_up = self.round_up,
            tip = %self.tip,
            "recomputed tip"
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
