//! Structured logging setup for the `arterial` binary.
//!
//! Installs a global `tracing` subscriber that writes to stderr, keeping
//! stdout free for command output. `RUST_LOG` selects the level (default
//! `info`) and `ARTERIAL_LOG_FORMAT` switches between `human` and `json`
//! output. Events from crates using the `log` facade are bridged in.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::{subscriber::SetGlobalDefaultError, warn};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt};

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "ARTERIAL_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format of the stderr log stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `ARTERIAL_LOG_FORMAT` held bytes that are not valid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `ARTERIAL_LOG_FORMAT` named a format other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised when another subscriber owns the global slot.
        #[source]
        source: SetGlobalDefaultError,
    },
}

/// Installs the global subscriber unless an earlier call already did.
///
/// When another subscriber already owns the global slot, that subscriber is
/// kept and a warning is sent through it. The `log` facade is bridged once a
/// subscriber is in place.
///
/// # Errors
/// Returns [`LoggingError`] when `ARTERIAL_LOG_FORMAT` is not valid UTF-8 or
/// names an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let format = format_from_env()?;
    if let Err(LoggingError::InstallFailed { source }) = install_subscriber(format) {
        warn!(error = %source, "structured logging already configured elsewhere");
    }
    bridge_log_facade();
    INITIALISED.get_or_init(|| ());
    Ok(())
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::InstallFailed { source })
}

/// Routes `log` records into `tracing`.
///
/// Returns `false` and warns through the current subscriber when another
/// logger already owns the `log` slot.
fn bridge_log_facade() -> bool {
    let bridged = LogTracer::init().is_ok();
    if !bridged {
        warn!("`log` facade already bridged; keeping existing logger");
    }
    bridged
}
