//! CLI errors and their exit codes.
//!
//! Everything a command can fail with ends up as a [`CliError`]. `main`
//! logs it, prints [`CliError::report`] to stderr and exits with
//! [`CliError::exit_code`].

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use coopkit_core::error::CoopError;

pub use coopkit_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The config file or environment could not be read, parsed or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// `config get` on a key that does not exist.
    #[error("Unknown config key: '{key}'")]
    ConfigKeyNotFound { key: String },

    /// Raised by `coopkit-core` or one of the adapters.
    #[error(transparent)]
    Core(#[from] CoopError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A bug in the CLI itself.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Config loading reports through `anyhow`; its whole context chain
/// becomes the message.
impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::ConfigError {
            message: format!("{err:#}"),
            source: None,
        }
    }
}

/// How an error is classified for exit codes and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad option, existing artifact.
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Check the file printed by: coopkit config path".into(),
                "Recreate it with: coopkit init --force".into(),
                "Environment overrides look like COOPKIT_DEFAULTS__WOOD=pine".into(),
            ],
            Self::ConfigKeyNotFound { .. } => vec![
                "List the available keys: coopkit config list".into(),
                "Keys are dotted paths such as defaults.wood or pricing.base_fee".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that the path is writable".into()],
            Self::Internal { .. } => vec!["Re-run with -vvv and report the output".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::ConfigKeyNotFound { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// The message block printed on stderr.
    ///
    /// With `verbose` the source chain is listed; otherwise a hint to pass
    /// `-v` closes the block.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let mut out = format!(
            "\n{} {}\n",
            paint(color, "\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(color, &self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("Caused by: {err}");
                out.push_str(&format!("  {}\n", paint(color, &line, dimmed)));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint(color, "Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for hint in &suggestions {
                out.push_str(&format!("  {hint}\n"));
            }
        }

        if !verbose {
            let hint = "Use -v / --verbose for more details.";
            out.push_str(&format!("\n{}\n", paint(color, hint, dimmed)));
        }

        out
    }

    /// Emit one event at a severity matching the category.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(code, error = %self, "command rejected")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(code, error = %self, "command failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

fn paint(color: bool, text: &str, style: fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_owned() }
}

fn dimmed(text: &str) -> String {
    text.dimmed().to_string()
}

/// Attach a message while converting a foreign error into [`CliError`].
///
/// Implemented per error type; a blanket impl would overlap.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}
