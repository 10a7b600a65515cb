//! Logger setup for the binary.
//!
//! Library code only emits `tracing` events; nothing is printed until the
//! binary installs a subscriber here. Logs go to stderr so stdout stays
//! clean for `calc --format json`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool, interactive: bool) -> &'static str {
    match (verbose, interactive) {
        (true, _) => "tip_time=debug,warn",
        // The alternate screen owns the terminal; stay silent unless asked.
        (false, true) => "off",
        (false, false) => "tip_time=warn",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the defaults.
pub fn init_logger(verbose: bool, interactive: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, interactive)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug_for_the_crate() {
        assert!(default_filter(true, false).contains("tip_time=debug"));
        assert!(default_filter(true, true).contains("tip_time=debug"));
    }

    #[test]
    fn interactive_is_silent_by_default() {
        assert_eq!(default_filter(false, true), "off");
    }

    #[test]
    fn filters_are_valid_directives() {
        for verbose in [false, true] {
            for interactive in [false, true] {
                let directive = default_filter(verbose, interactive);
                assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
            }
        }
    }
}
