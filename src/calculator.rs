//! The tip calculation.
//!
//! Pure functions: no I/O, no hidden state. Inputs are taken as given:
//! negative amounts or percentages above 100 flow through unchanged.

use crate::currency::CurrencyFormatter;
use crate::types::TipQuote;

/// Numeric tip: `amount * tip_percent / 100`, ceiled when `round_up` is set.
pub fn tip_amount(amount: f64, tip_percent: f64, round_up: bool) -> f64 {
    let tip = amount * (tip_percent / 100.0);
    if round_up { tip.ceil() } else { tip }
}

/// Compute the tip and format it as currency. Never fails.
pub fn calculate_tip(
    amount: f64,
    tip_percent: f64,
    round_up: bool,
    formatter: &dyn CurrencyFormatter,
) -> String {
    formatter.format(tip_amount(amount, tip_percent, round_up))
}

/// Compute the tip and keep the inputs alongside the result.
pub fn quote(
    amount: f64,
    tip_percent: f64,
    round_up: bool,
    formatter: &dyn CurrencyFormatter,
) -> TipQuote {
    let tip = tip_amount(amount, tip_percent, round_up);
    TipQuote {
        bill_amount: amount,
        tip_percent,
        round_up,
        tip,
        formatted: formatter.format(tip),
        locale: formatter.locale().to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::LocaleCurrency;

    fn us() -> LocaleCurrency {
        LocaleCurrency::lookup("en-US").unwrap()
    }

    /// Formatter that exposes the raw number, to test the core without locales.
    #[derive(Debug)]
    struct Plain;

    impl CurrencyFormatter for Plain {
        fn format(&self, amount: f64) -> String {
            format!("{amount}")
        }

        fn locale(&self) -> &str {
            "plain"
        }
    }

    // --- numeric core ---

    #[test]
    fn twenty_percent_of_ten() {
        assert_eq!(tip_amount(10.0, 20.0, false), 2.0);
    }

    #[test]
    fn fifteen_percent_of_ten_is_not_rounded_by_default() {
        assert_eq!(tip_amount(10.0, 15.0, false), 1.5);
    }

    #[test]
    fn round_up_takes_the_ceiling() {
        assert_eq!(tip_amount(10.0, 15.0, true), 2.0);
        assert_eq!(tip_amount(10.0, 20.0, true), 2.0);
        assert_eq!(tip_amount(33.33, 18.0, true), 6.0);
    }

    #[test]
    fn rounded_tip_is_never_below_raw_tip() {
        let amounts = [0.0, 0.01, 9.99, 10.0, 47.35, 123.45, 1000.0];
        let percents = [0.0, 5.0, 12.5, 15.0, 18.0, 20.0, 33.3, 100.0];
        for &a in &amounts {
            for &p in &percents {
                let raw = tip_amount(a, p, false);
                let rounded = tip_amount(a, p, true);
                assert!(rounded >= raw, "{a} @ {p}%: {rounded} < {raw}");
                assert!(rounded - raw < 1.0);
            }
        }
    }

    #[test]
    fn zero_amount_or_percent_gives_zero() {
        for round_up in [false, true] {
            assert_eq!(tip_amount(0.0, 18.0, round_up), 0.0);
            assert_eq!(tip_amount(250.0, 0.0, round_up), 0.0);
        }
    }

    #[test]
    fn negative_inputs_flow_through() {
        assert_eq!(tip_amount(-10.0, 20.0, false), -2.0);
        assert_eq!(tip_amount(-10.0, 15.0, true), -1.0);
    }

    #[test]
    fn percent_above_one_hundred_is_allowed() {
        assert_eq!(tip_amount(10.0, 150.0, false), 15.0);
    }

    // --- formatted output ---

    #[test]
    fn calculate_tip_matches_formatted_core() {
        let f = us();
        for (a, p) in [(10.0, 20.0), (42.5, 18.0), (99.99, 12.5)] {
            assert_eq!(calculate_tip(a, p, false, &f), f.format(a * (p / 100.0)));
            assert_eq!(calculate_tip(a, p, true, &f), f.format((a * (p / 100.0)).ceil()));
        }
    }

    #[test]
    fn scenario_twenty_percent_no_round_up() {
        assert_eq!(calculate_tip(10.0, 20.0, false, &us()), "$2.00");
    }

    #[test]
    fn scenario_twenty_percent_round_up() {
        assert_eq!(calculate_tip(10.0, 20.0, true, &us()), "$2.00");
    }

    #[test]
    fn scenario_fifteen_percent_round_up() {
        assert_eq!(calculate_tip(10.0, 15.0, true, &us()), "$2.00");
    }

    #[test]
    fn zero_inputs_format_as_zero() {
        let f = us();
        assert_eq!(calculate_tip(0.0, 25.0, true, &f), f.format(0.0));
        assert_eq!(calculate_tip(80.0, 0.0, false, &f), f.format(0.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let f = us();
        let first = calculate_tip(57.8, 17.5, false, &f);
        let second = calculate_tip(57.8, 17.5, false, &f);
        assert_eq!(first, second);
    }

    #[test]
    fn formatter_is_injected() {
        assert_eq!(calculate_tip(10.0, 15.0, false, &Plain), "1.5");
    }

    #[test]
    fn quote_carries_inputs_and_locale() {
        let q = quote(10.0, 15.0, true, &us());
        assert_eq!(q.bill_amount, 10.0);
        assert_eq!(q.tip_percent, 15.0);
        assert!(q.round_up);
        assert_eq!(q.tip, 2.0);
        assert_eq!(q.formatted, "$2.00");
        assert_eq!(q.locale, "en-US");
    }
}
