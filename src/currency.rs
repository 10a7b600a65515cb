//! Locale-aware currency formatting.
//!
//! The calculator only knows the [`CurrencyFormatter`] trait, so the
//! numeric core can be tested without any locale in play. The built-in
//! implementation is a small table of conventions ([`LocaleCurrency`]),
//! resolved from a tag like `de-DE` or from the host environment.

use std::fmt;

use tracing::debug;

use crate::error::{Result, TipError};

/// Locale used when the host gives no usable hint.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Environment variables consulted for the host locale, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Non-breaking space between symbol and digits.
const NBSP: &str = "\u{a0}";

/// Turns a numeric amount into display text.
pub trait CurrencyFormatter: fmt::Debug {
    /// Format `amount` as a currency string. Must not fail.
    fn format(&self, amount: f64) -> String;

    /// Locale tag this formatter represents (e.g. "en-US").
    fn locale(&self) -> &str;
}

// ============================================================================
// LOCALE TABLE
// ============================================================================

/// Where the currency symbol goes relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// "$2.00"
    Prefix,
    /// "R$ 2,00"
    PrefixSpaced,
    /// "2,00 €"
    SuffixSpaced,
}

/// Currency conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCurrency {
    /// BCP 47 style tag, e.g. "en-US".
    pub tag: &'static str,
    /// ISO 4217 code.
    pub code: &'static str,
    pub symbol: &'static str,
    pub placement: SymbolPlacement,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Digits after the decimal separator (0 for yen).
    pub fraction_digits: u8,
}

const fn locale(
    tag: &'static str,
    code: &'static str,
    symbol: &'static str,
    placement: SymbolPlacement,
    decimal_separator: char,
    grouping_separator: char,
    fraction_digits: u8,
) -> LocaleCurrency {
    LocaleCurrency {
        tag,
        code,
        symbol,
        placement,
        decimal_separator,
        grouping_separator,
        fraction_digits,
    }
}

use SymbolPlacement::{Prefix, PrefixSpaced, SuffixSpaced};

static LOCALES: [LocaleCurrency; 13] = [
    locale("en-US", "USD", "$", Prefix, '.', ',', 2),
    locale("en-CA", "CAD", "$", Prefix, '.', ',', 2),
    locale("en-AU", "AUD", "$", Prefix, '.', ',', 2),
    locale("en-GB", "GBP", "£", Prefix, '.', ',', 2),
    locale("en-IN", "INR", "₹", Prefix, '.', ',', 2),
    locale("de-DE", "EUR", "€", SuffixSpaced, ',', '.', 2),
    locale("de-CH", "CHF", "CHF", PrefixSpaced, '.', '’', 2),
    locale("fr-FR", "EUR", "€", SuffixSpaced, ',', '\u{202f}', 2),
    locale("es-ES", "EUR", "€", SuffixSpaced, ',', '.', 2),
    locale("it-IT", "EUR", "€", SuffixSpaced, ',', '.', 2),
    locale("nl-NL", "EUR", "€", PrefixSpaced, ',', '.', 2),
    locale("pt-BR", "BRL", "R$", PrefixSpaced, ',', '.', 2),
    locale("ja-JP", "JPY", "¥", Prefix, '.', ',', 0),
];

/// All built-in locale conventions.
pub fn supported_locales() -> &'static [LocaleCurrency] {
    &LOCALES
}

/// Normalize a locale tag: "en_US.UTF-8" → "en-us".
fn normalize_tag(tag: &str) -> String {
    let base = tag.split(['.', '@']).next().unwrap_or("");
    base.trim().replace('_', "-").to_ascii_lowercase()
}

impl LocaleCurrency {
    /// Look up conventions for a tag. Accepts `en-US`, `en_US`, `en_US.UTF-8`,
    /// case-insensitively.
    pub fn lookup(tag: &str) -> Result<Self> {
        Self::find(tag).ok_or_else(|| TipError::UnknownLocale {
            tag: tag.to_string(),
        })
    }

    fn find(tag: &str) -> Option<Self> {
        let wanted = normalize_tag(tag);
        LOCALES
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&wanted))
            .copied()
    }

    /// Conventions for the running environment's locale.
    pub fn host() -> Self {
        Self::host_with(|var| std::env::var(var).ok())
    }

    /// Resolve the host locale from an injected environment lookup.
    ///
    /// Separated for testability. The first non-empty variable wins, as
    /// in POSIX; `C`, `POSIX` and unknown locales fall back to en-US.
    pub fn host_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let hint = LOCALE_ENV_VARS
            .iter()
            .find_map(|var| lookup(var).filter(|v| !v.trim().is_empty()));

        let resolved = hint.as_deref().and_then(Self::find);
        match resolved {
            Some(found) => {
                debug!(locale = found.tag, "resolved host locale");
                found
            }
            None => {
                debug!(hint = ?hint, fallback = FALLBACK_LOCALE, "no usable host locale");
                Self::fallback()
            }
        }
    }

    /// The en-US conventions.
    pub fn fallback() -> Self {
        LOCALES[0]
    }

    /// Format the digits of `amount` (no sign, no symbol).
    fn format_digits(&self, magnitude: f64) -> String {
        let digits = usize::from(self.fraction_digits);
        let fixed = format!("{:.*}", digits, magnitude);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut out = group_thousands(int_part, self.grouping_separator);
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

/// Insert `separator` every three digits from the right.
fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl CurrencyFormatter for LocaleCurrency {
    fn format(&self, amount: f64) -> String {
        let body = if amount.is_nan() {
            "NaN".to_string()
        } else if amount.is_infinite() {
            "∞".to_string()
        } else {
            self.format_digits(amount.abs())
        };

        // "-0.00" is never shown: a value that rounds to zero is unsigned.
        let rounds_to_zero =
            amount.is_finite() && body.chars().all(|c| !c.is_ascii_digit() || c == '0');
        let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };

        match self.placement {
            SymbolPlacement::Prefix => format!("{sign}{}{body}", self.symbol),
            SymbolPlacement::PrefixSpaced => format!("{sign}{}{NBSP}{body}", self.symbol),
            SymbolPlacement::SuffixSpaced => format!("{sign}{body}{NBSP}{}", self.symbol),
        }
    }

    fn locale(&self) -> &str {
        self.tag
    }
}

impl fmt::Display for LocaleCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Honours width and alignment flags
        f.pad(&format!("{} ({} {})", self.tag, self.code, self.symbol))
    }
}

// ============================================================================
// TESTS
// ============================================================================
