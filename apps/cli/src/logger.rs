//! Logging for devlink command-line tools.
//!
//! Colored output on stderr (stdout is reserved for command output), plus an
//! optional plain-text log file. Initialization is thread-safe and idempotent.

use crate::error::CliError;

use common::ErrorLocation;

use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, debug, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Map `-v` occurrences to a level. Quiet by default so command output stays clean.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the logger.
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if:
/// - Log file cannot be created
/// - Logger dispatch configuration fails
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level, log_file);
        if result.is_ok() {
            debug!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

fn initialize_internal(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                target = record.target(),
            ))
        })
        .chain(stderr());

    let mut dispatch = Dispatch::new().level(level).chain(stderr_dispatch);

    if let Some(log_file_path) = log_file {
        dispatch = dispatch.chain(file_dispatch(log_file_path)?);
    }

    dispatch.apply().map_err(|e| CliError::Logger {
        message: format!("Failed to initialize logger: {e}"),
        location: ErrorLocation::caller(),
    })?;

    Ok(())
}

/// Plain-text dispatch into `log_file_path`, no colors.
pub(crate) fn file_dispatch(log_file_path: &Path) -> Result<Dispatch, CliError> {
    let file = fern::log_file(log_file_path).map_err(|e| CliError::Logger {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location: ErrorLocation::caller(),
    })?;

    Ok(Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(file))
}
