//! Output formatting for one-shot calculations.
//!
//! Pure functions: (TipQuote, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, TipQuote};

/// Format a quote for output.
pub fn format_quote(quote: &TipQuote, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(quote),
        OutputFormat::Json => format_json(quote),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(quote: &TipQuote) -> String {
    let mut out = String::new();
    out.push_str(&format!("Bill amount: {}\n", quote.bill_amount));
    out.push_str(&format!("Tip (%):     {}\n", quote.tip_percent));
    out.push_str(&format!(
        "Round up:    {}\n",
        if quote.round_up { "yes" } else { "no" }
    ));
    out.push('\n');
    out.push_str(&format!("Tip amount: {}\n", quote.formatted));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(quote: &TipQuote) -> String {
    let mut out = serde_json::to_string_pretty(quote).unwrap_or_else(|e| {
        // Plain floats, strings and bools always serialize
        panic!("Failed to serialize quote to JSON: {}", e)
    });
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> TipQuote {
        TipQuote {
            bill_amount: 10.0,
            tip_percent: 15.0,
            round_up: true,
            tip: 2.0,
            formatted: "$2.00".into(),
            locale: "en-US".into(),
        }
    }

    // --- Human format tests ---

    #[test]
    fn human_format_ends_with_tip_line() {
        let output = format_quote(&sample_quote(), OutputFormat::Human);
        assert!(output.ends_with("Tip amount: $2.00\n"));
    }

    #[test]
    fn human_format_echoes_inputs() {
        let output = format_quote(&sample_quote(), OutputFormat::Human);
        assert!(output.contains("Bill amount: 10"));
        assert!(output.contains("Tip (%):     15"));
        assert!(output.contains("Round up:    yes"));
    }

    #[test]
    fn human_format_round_up_off() {
        let quote = TipQuote {
            round_up: false,
            ..sample_quote()
        };
        let output = format_quote(&quote, OutputFormat::Human);
        assert!(output.contains("Round up:    no"));
    }

    // --- JSON format tests ---

    #[test]
    fn json_format_is_valid_json() {
        let output = format_quote(&sample_quote(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");
        assert!(parsed.is_object());
    }

    #[test]
    fn json_format_has_expected_fields() {
        let output = format_quote(&sample_quote(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["bill_amount"], 10.0);
        assert_eq!(parsed["tip_percent"], 15.0);
        assert_eq!(parsed["round_up"], true);
        assert_eq!(parsed["tip"], 2.0);
        assert_eq!(parsed["formatted"], "$2.00");
        assert_eq!(parsed["locale"], "en-US");
    }

    #[test]
    fn json_round_trips_to_quote() {
        let output = format_quote(&sample_quote(), OutputFormat::Json);
        let back: TipQuote = serde_json::from_str(&output).unwrap();
        assert_eq!(back, sample_quote());
    }
}
