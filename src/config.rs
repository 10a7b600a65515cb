//! Optional settings file.
//!
//! Structure:
//! - Pure functions: path computation, settings resolution
//! - Effect functions: reading the JSON file
//!
//! Precedence for every setting: command-line flag, then this file, then
//! the host locale / built-in defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::currency::LocaleCurrency;
use crate::error::{Result, TipError};
use crate::parse::ParseDefaults;

/// Config filename within the app's config directory.
const CONFIG_FILENAME: &str = "config.json";

/// Contents of `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Locale tag for currency output (e.g. "en-GB"). None = host locale.
    pub locale: Option<String>,
    /// Tip percent assumed when the tip field is empty or invalid.
    pub default_tip_percent: Option<f64>,
    /// Initial state of the round-up toggle.
    pub round_up: bool,
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Returns the default config file location.
///
/// On Linux: ~/.config/tip-time/config.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tip-time")
        .join(CONFIG_FILENAME)
}

impl Config {
    /// Parse defaults implied by this config.
    pub fn parse_defaults(&self) -> ParseDefaults {
        ParseDefaults {
            tip_percent: self.default_tip_percent.unwrap_or(0.0),
            ..ParseDefaults::default()
        }
    }

    /// Pick the currency conventions: explicit tag, then config, then host.
    pub fn resolve_currency(&self, cli_locale: Option<&str>) -> Result<LocaleCurrency> {
        match cli_locale.or(self.locale.as_deref()) {
            Some(tag) => LocaleCurrency::lookup(tag),
            None => Ok(LocaleCurrency::host()),
        }
    }

    /// Round-up setting: an explicit flag, else the config value.
    pub fn resolve_round_up(&self, cli_round_up: Option<bool>) -> bool {
        cli_round_up.unwrap_or(self.round_up)
    }
}

/// Collapse a `--flag` / `--no-flag` pair into "set on", "set off" or "not given".
pub fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Load config from `path`. A missing file yields the default config.
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(TipError::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: Config = serde_json::from_str(&contents).map_err(|source| TipError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("tip-time/config.json"));
    }

    #[test]
    fn missing_file_gives_default_config() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_all_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"{ "locale": "en-GB", "default_tip_percent": 15.0, "round_up": true }"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.locale.as_deref(), Some("en-GB"));
        assert_eq!(config.default_tip_percent, Some(15.0));
        assert!(config.round_up);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{ "round_up": true }"#);
        let config = load_config(&path).unwrap();
        assert_eq!(config.locale, None);
        assert_eq!(config.default_tip_percent, None);
        assert!(config.round_up);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "{ not json");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, TipError::ConfigParse { .. }));
    }

    #[test]
    fn unknown_field_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, r#"{ "currency": "EUR" }"#);
        assert!(matches!(
            load_config(&path).unwrap_err(),
            TipError::ConfigParse { .. }
        ));
    }

    #[test]
    fn directory_instead_of_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, TipError::ConfigRead { .. }));
    }

    #[test]
    fn parse_defaults_follow_config() {
        let config = Config {
            default_tip_percent: Some(15.0),
            ..Default::default()
        };
        assert_eq!(config.parse_defaults(), ParseDefaults::seeded());
        assert_eq!(Config::default().parse_defaults(), ParseDefaults::default());
    }

    #[test]
    fn cli_locale_wins_over_config() {
        let config = Config {
            locale: Some("de-DE".into()),
            ..Default::default()
        };
        assert_eq!(config.resolve_currency(Some("ja-JP")).unwrap().tag, "ja-JP");
        assert_eq!(config.resolve_currency(None).unwrap().tag, "de-DE");
    }

    #[test]
    fn cli_no_round_up_beats_config_round_up() {
        let config = Config {
            round_up: true,
            ..Default::default()
        };
        assert!(!config.resolve_round_up(Some(false)));
        assert!(config.resolve_round_up(None));
    }

    #[test]
    fn cli_round_up_beats_config_default() {
        let config = Config::default();
        assert!(config.resolve_round_up(Some(true)));
        assert!(!config.resolve_round_up(None));
    }

    #[test]
    fn flag_pair_distinguishes_absent_from_off() {
        assert_eq!(flag_pair(false, false), None);
        assert_eq!(flag_pair(true, false), Some(true));
        assert_eq!(flag_pair(false, true), Some(false));
    }

    #[test]
    fn unknown_configured_locale_is_reported() {
        let config = Config {
            locale: Some("tlh-KX".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve_currency(None),
            Err(TipError::UnknownLocale { .. })
        ));
    }
}
