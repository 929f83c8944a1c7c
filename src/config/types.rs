//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    AWS_IP_RANGES_URL, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_PUBLIC_DIR, DEFAULT_REFRESH_INTERVAL_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Every option can come from a CLI flag or an environment variable, and
/// `Config::default()` gives the same values for library use.
///
/// # Examples
///
/// ```no_run
/// use aws_ip_ranges::Config;
///
/// let config = Config {
///     port: 8080,
///     refresh_interval_secs: 600,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "aws_ip_ranges", version, about)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind the listener to
    #[arg(long, env = "LISTEN_HOST", default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    /// URL of the published IP ranges document
    #[arg(long, env = "AWS_IP_RANGES_URL", default_value = AWS_IP_RANGES_URL)]
    pub upstream_url: String,

    /// Seconds between two refreshes of the cached ranges
    #[arg(
        long,
        env = "REFRESH_INTERVAL_SECS",
        default_value_t = DEFAULT_REFRESH_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub refresh_interval_secs: u64,

    /// Timeout for one upstream fetch, in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_secs: u64,

    /// Directory of static assets served for non-API paths
    #[arg(long, env = "PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Socket address the HTTP server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            upstream_url: AWS_IP_RANGES_URL.to_string(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
