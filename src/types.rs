//! Domain types for tip-time.

use serde::{Deserialize, Serialize};

// ============================================================================
// CALCULATION RECORD
// ============================================================================

/// One complete tip calculation: normalized inputs plus the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipQuote {
    /// Bill total after parsing (defaults already applied).
    pub bill_amount: f64,
    /// Tip percentage after parsing; 20.0 means 20%.
    pub tip_percent: f64,
    /// Whether the tip was rounded up to a whole currency unit.
    pub round_up: bool,
    /// Numeric tip before formatting.
    pub tip: f64,
    /// Tip as a localized currency string.
    pub formatted: String,
    /// Locale tag used for formatting.
    pub locale: String,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for one-shot calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}
