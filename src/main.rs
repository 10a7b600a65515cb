//! tip-time CLI
//!
//! Compute a tip from a bill total and a percentage, one-shot or on an
//! interactive terminal screen.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;

use tip_time::calculator::quote;
use tip_time::config::{Config, default_config_path, flag_pair, load_config};
use tip_time::currency::{CurrencyFormatter, supported_locales};
use tip_time::error::Result;
use tip_time::form::TipForm;
use tip_time::logging::init_logger;
use tip_time::parse::{parse_amount, parse_percent};
use tip_time::report::format_quote;
use tip_time::tui;
use tip_time::types::OutputFormat;

#[derive(Parser)]
#[command(name = "tip-time")]
#[command(about = "Calculate a tip from a bill amount and a tip percentage")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Locale for currency output, e.g. en-US or de_DE (default: host locale)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Settings file (default: <config dir>/tip-time/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive tip screen (default)
    Tui,

    /// Calculate one tip and print it
    Calc {
        /// Bill amount; anything unparseable counts as 0
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        amount: String,

        /// Tip percentage; anything unparseable uses the configured default
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        percent: String,

        /// Round the tip up to a whole currency unit
        #[arg(long, overrides_with = "no_round_up")]
        round_up: bool,

        /// Keep the exact tip, even if the config turns rounding on
        #[arg(long, overrides_with = "round_up")]
        no_round_up: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List the built-in currency locales
    Locales,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_logger(cli.verbose, interactive);

    let result = match cli.command {
        None | Some(Commands::Tui) => cmd_tui(cli.config, cli.locale.as_deref()),
        Some(Commands::Calc {
            amount,
            percent,
            round_up,
            no_round_up,
            format,
        }) => cmd_calc(
            cli.config,
            cli.locale.as_deref(),
            &amount,
            &percent,
            flag_pair(round_up, no_round_up),
            format.into(),
        ),
        Some(Commands::Locales) => cmd_locales(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Load the config file: explicit path, or the default location.
fn resolve_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(default_config_path);
    debug!(path = %path.display(), "config path");
    load_config(&path)
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(config_path: Option<PathBuf>, locale: Option<&str>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let currency = config.resolve_currency(locale)?;

    let mut form = TipForm::with_defaults(Box::new(currency), config.parse_defaults());
    form.set_round_up(config.round_up);

    let form = tui::run::run(form)?;

    // Leave the last result on the normal screen
    println!("Tip amount: {}", form.tip());
    Ok(())
}

fn cmd_calc(
    config_path: Option<PathBuf>,
    locale: Option<&str>,
    amount: &str,
    percent: &str,
    round_up: Option<bool>,
    format: OutputFormat,
) -> Result<()> {
    let config = resolve_config(config_path)?;
    let currency = config.resolve_currency(locale)?;
    let defaults = config.parse_defaults();

    let amount = parse_amount(amount, &defaults);
    let percent = parse_percent(percent, &defaults);
    let round_up = config.resolve_round_up(round_up);
    debug!(amount, percent, round_up, locale = currency.locale(), "calculating");

    let quote = quote(amount, percent, round_up, &currency);
    print!("{}", format_quote(&quote, format));
    Ok(())
}

fn cmd_locales() -> Result<()> {
    for locale in supported_locales() {
        println!("  {:<16} {}", locale, locale.format(1234.5));
    }
    Ok(())
}
