//! Output management and formatting.
//!
//! Command results (prices, documents, links, JSON) go through
//! [`OutputManager::data`] / [`OutputManager::json`] and are never
//! suppressed. Status lines (`success`, `info`, ...) respect `--quiet`.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = resolve_format(
            args.output_format,
            &config.output.format,
            io::stdout().is_terminal(),
        );

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Results ───────────────────────────────────────────────────────────

    /// Command result; written even in quiet mode.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    /// Pretty JSON result; written even in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::Internal {
            message: format!("Failed to serialise output: {e}"),
        })?;
        self.data(&text)?;
        Ok(())
    }

    /// `true` when results should be printed as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    // ── Status lines ──────────────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }
}

/// Flag first, then the config file, then terminal detection.
fn resolve_format(flag: OutputFormat, configured: &str, stdout_is_tty: bool) -> OutputFormat {
    let chosen = match flag {
        OutputFormat::Auto => OutputFormat::from_str(configured, true).unwrap_or_default(),
        explicit => explicit,
    };
    match chosen {
        OutputFormat::Auto if stdout_is_tty => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        resolved => resolved,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Plain, // avoid TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(make_manager(false, false).no_color);
    }

    #[test]
    fn flag_beats_config_file() {
        assert_eq!(
            resolve_format(OutputFormat::Plain, "json", true),
            OutputFormat::Plain
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "json", true),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "HUMAN", false),
            OutputFormat::Human
        );
    }

    #[test]
    fn auto_falls_back_to_terminal_detection() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "auto", true),
            OutputFormat::Human
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "auto", false),
            OutputFormat::Plain
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "fancy", false),
            OutputFormat::Plain
        );
    }

    #[test]
    fn json_output_is_detected() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Json,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.is_json());
        assert!(out.json(&serde_json::json!({ "price": 7320 })).is_ok());
    }
}
