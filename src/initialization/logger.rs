//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::*;
use log::{Level, LevelFilter};

/// Value of the `service` field in JSON log lines
const SERVICE: &str = env!("CARGO_PKG_NAME");

/// One JSON log object: `ts` (RFC 3339, UTC, milliseconds), `level`, `service`,
/// `target`, `msg`.
fn json_line(ts: DateTime<Utc>, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts.to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": level.as_str(),
        "service": SERVICE,
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn plain_line(ts: DateTime<Utc>, level: Level, target: &str, msg: &str) -> String {
    let level = match level {
        Level::Error => level.as_str().red().bold(),
        Level::Warn => level.as_str().yellow(),
        Level::Info => level.as_str().green(),
        Level::Debug => level.as_str().blue(),
        Level::Trace => level.as_str().dimmed(),
    };
    format!(
        "{} {} {} {}",
        ts.format("%H:%M:%S%.3f").to_string().dimmed(),
        level,
        target.cyan(),
        msg
    )
}

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with either colored plain text or one JSON object
/// per line. `RUST_LOG` is read first and `level` overrides it.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Returns
///
/// `Ok(())` if initialization succeeds, or an error if logger setup fails.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Quick debugging without CLI args
/// RUST_LOG=debug aws_ip_ranges
///
/// # CLI level takes precedence
/// RUST_LOG=debug aws_ip_ranges --log-level warn
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("tower_http", LevelFilter::Info);
    builder.filter_module("aws_ip_ranges", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    Utc::now(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let line = plain_line(
                    Utc::now(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
    }

    // try_init: tests may initialize more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_formats() {
        // env_logger can only be installed once per process, so a second call errors
        let _ = env_logger::try_init();

        for format in [LogFormat::Plain, LogFormat::Json] {
            let result = init_logger_with(LevelFilter::Info, format);
            assert!(matches!(
                result,
                Err(InitializationError::LoggerError(_)) | Ok(())
            ));
        }
    }

    fn at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:30:45.123Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_json_line_fields() {
        let line = json_line(
            at(),
            Level::Info,
            "aws_ip_ranges::ranges::refresher",
            "Fetched 3 AWS IP ranges.",
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ts": "2024-05-01T12:30:45.123Z",
                "level": "INFO",
                "service": "aws_ip_ranges",
                "target": "aws_ip_ranges::ranges::refresher",
                "msg": "Fetched 3 AWS IP ranges.",
            })
        );
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_json_line_escapes_message() {
        let line = json_line(at(), Level::Error, "t", "bad \"quote\"\nnext");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["msg"], "bad \"quote\"\nnext");
        assert_eq!(value["level"], "ERROR");
    }

    #[test]
    fn test_plain_line_contents() {
        let line = plain_line(
            at(),
            Level::Warn,
            "aws_ip_ranges::server",
            "Server running on port 3000",
        );
        assert!(line.contains("12:30:45.123"));
        assert!(line.contains("WARN"));
        assert!(line.contains("aws_ip_ranges::server"));
        assert!(line.ends_with("Server running on port 3000"));
    }

    #[test]
    fn test_second_init_reports_logger_error() {
        let _ = env_logger::try_init();
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Plain);
        assert!(result.is_err());
    }
}
