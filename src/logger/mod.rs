// Figure SDK - A client library for the Figure upload hosting service
// Copyright (C) 2025 Figure SDK Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Logging setup for applications using the SDK
//!
//! The SDK itself only emits `tracing` events. Applications that have no
//! subscriber of their own can install one here: console output, and
//! optionally a rotated JSON log file.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Logger configuration
pub struct LoggerConfig {
    /// Log directory path
    pub log_dir: PathBuf,
    /// Log file prefix
    pub file_prefix: String,
    /// Maximum log level
    pub level: Level,
    /// Whether to log to console
    pub console_output: bool,
    /// Whether to log to file
    pub file_output: bool,
    /// Log rotation strategy
    pub rotation: Rotation,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let log_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("figure-sdk")
            .join("logs");

        Self {
            log_dir,
            file_prefix: "figure".to_string(),
            level: Level::INFO,
            console_output: true,
            file_output: false,
            rotation: Rotation::DAILY,
        }
    }
}

/// Main logger struct
pub struct Logger;

impl Logger {
    /// Initialize the logging system with default configuration
    pub fn init() -> Result<()> {
        Self::init_with_config(LoggerConfig::default())
    }

    /// Initialize the logging system with custom configuration.
    ///
    /// `RUST_LOG` overrides the configured level when set.
    pub fn init_with_config(config: LoggerConfig) -> Result<()> {
        if config.file_output {
            std::fs::create_dir_all(&config.log_dir).with_context(|| {
                format!("Failed to create log directory {}", config.log_dir.display())
            })?;
        }

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => default_filter(config.level)?,
        };

        let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

        if config.console_output {
            layers.push(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .boxed(),
            );
        }

        if config.file_output {
            let file_appender =
                RollingFileAppender::new(config.rotation, &config.log_dir, &config.file_prefix);

            layers.push(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .json()
                    .boxed(),
            );
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(env_filter)
            .try_init()
            .context("A global tracing subscriber is already installed")?;

        Ok(())
    }
}

/// Filter enabling the SDK and the CLI at `level`
fn default_filter(level: Level) -> Result<EnvFilter> {
    let filter = EnvFilter::new(format!("figure_sdk={}", level))
        .add_directive(format!("figure={}", level).parse()?)
        .add_directive(format!("api={}", level).parse()?);

    Ok(filter)
}

/// Macro for logging API calls with timing
#[macro_export]
macro_rules! log_api_call {
    ($method:expr, $path:expr) => {
        tracing::debug!(
            target: "api",
            method = $method,
            path = $path,
            "API call started"
        )
    };
    ($method:expr, $path:expr, $duration:expr) => {
        tracing::info!(
            target: "api",
            method = $method,
            path = $path,
            duration_ms = $duration,
            "API call completed"
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(config.console_output);
        assert!(!config.file_output);
        assert_eq!(config.file_prefix, "figure");
        assert!(config.log_dir.ends_with("figure-sdk/logs"));
    }

    #[test]
    fn test_default_filter_levels() {
        let filter = default_filter(Level::DEBUG).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("figure_sdk=debug"));
        assert!(rendered.contains("api=debug"));
    }
}
