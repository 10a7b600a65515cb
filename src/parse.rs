//! Lenient numeric parsing for free-text fields.
//!
//! Pure functions, no I/O. Parsing never fails: anything that is not a
//! finite decimal number is replaced by a caller-supplied default.

/// Tip percent used by the "seeded" variant of the form.
pub const SEEDED_TIP_PERCENT: f64 = 15.0;

/// Values substituted when a field does not parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseDefaults {
    pub bill_amount: f64,
    pub tip_percent: f64,
}

impl Default for ParseDefaults {
    fn default() -> Self {
        Self {
            bill_amount: 0.0,
            tip_percent: 0.0,
        }
    }
}

impl ParseDefaults {
    /// Defaults where an empty tip field means 15%.
    pub fn seeded() -> Self {
        Self {
            tip_percent: SEEDED_TIP_PERCENT,
            ..Self::default()
        }
    }
}

/// Parse `text` as a decimal number, or return `default`.
///
/// Surrounding whitespace is ignored. Accepts an optional sign, a
/// fractional part and an exponent ("12", "-3.5", ".5", "1e2").
/// Empty input, garbage, `NaN` and infinities all yield `default`.
pub fn parse_or(text: &str, default: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

/// Parse a bill amount field.
pub fn parse_amount(text: &str, defaults: &ParseDefaults) -> f64 {
    parse_or(text, defaults.bill_amount)
}

/// Parse a tip percent field.
pub fn parse_percent(text: &str, defaults: &ParseDefaults) -> f64 {
    parse_or(text, defaults.tip_percent)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_or("10", 0.0), 10.0);
        assert_eq!(parse_or("12.75", 0.0), 12.75);
        assert_eq!(parse_or(".5", 0.0), 0.5);
        assert_eq!(parse_or("1e2", 0.0), 100.0);
    }

    #[test]
    fn negative_values_pass_through() {
        assert_eq!(parse_or("-4.5", 0.0), -4.5);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_or("  42 \n", 0.0), 42.0);
    }

    #[test]
    fn empty_input_yields_default() {
        assert_eq!(parse_or("", 0.0), 0.0);
        assert_eq!(parse_or("   ", 7.0), 7.0);
    }

    #[test]
    fn garbage_yields_default() {
        assert_eq!(parse_or("abc", 0.0), 0.0);
        assert_eq!(parse_or("10,50", 0.0), 0.0);
        assert_eq!(parse_or("1.2.3", 3.0), 3.0);
        assert_eq!(parse_or("-", 0.0), 0.0);
    }

    #[test]
    fn non_finite_values_yield_default() {
        assert_eq!(parse_or("NaN", 0.0), 0.0);
        assert_eq!(parse_or("inf", 0.0), 0.0);
        assert_eq!(parse_or("-infinity", 1.0), 1.0);
    }

    #[test]
    fn default_defaults_are_zero() {
        let defaults = ParseDefaults::default();
        assert_eq!(parse_amount("", &defaults), 0.0);
        assert_eq!(parse_percent("", &defaults), 0.0);
    }

    #[test]
    fn seeded_defaults_fill_tip_percent_only() {
        let defaults = ParseDefaults::seeded();
        assert_eq!(parse_percent("", &defaults), 15.0);
        assert_eq!(parse_percent("20", &defaults), 20.0);
        assert_eq!(parse_amount("oops", &defaults), 0.0);
    }
}
