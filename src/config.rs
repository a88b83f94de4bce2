//! Run configuration
//!
//! Every option has a default and can be overridden by a command line flag
//! or a `MIXTRACK_*` environment variable.

use crate::error::{MixError, MixResult};
use crate::processor::DEFAULT_WINDOW_SECONDS;
use crate::recognize::DEFAULT_SAMPLE_RATE;
use crate::recognize::http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Default directory for per-run temporary files
pub const DEFAULT_TEMP_OUTPUT_DIR: &str = "temp";

/// Default directory the listing is written to
pub const DEFAULT_FINAL_OUTPUT_DIR: &str = "../";

/// Default number of windows recognized at the same time
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Logging verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Everything, including per-window details
    Debug,
    /// Stage progress
    #[default]
    Info,
    /// Recognition misses and recoverable problems
    Warning,
    /// Failures only
    Error,
    /// Same as error
    Critical,
}

impl LogLevel {
    /// Matching `log` level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        }
    }
}

/// Options for one identification run
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Directory for temporary files
    #[arg(long, env = "MIXTRACK_TEMP_OUTPUT_DIR", default_value = DEFAULT_TEMP_OUTPUT_DIR)]
    pub temp_output_dir: PathBuf,

    /// Directory the track listing is written to
    #[arg(long, env = "MIXTRACK_FINAL_OUTPUT_DIR", default_value = DEFAULT_FINAL_OUTPUT_DIR)]
    pub final_output_dir: PathBuf,

    /// Logging verbosity
    #[arg(long = "log-level", env = "MIXTRACK_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub logging_level: LogLevel,

    /// Window length in seconds
    #[arg(long, env = "MIXTRACK_WINDOW_SECONDS", default_value_t = DEFAULT_WINDOW_SECONDS)]
    pub window_seconds: u32,

    /// Windows recognized at the same time
    #[arg(long, env = "MIXTRACK_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Sample rate of the audio sent for recognition
    #[arg(long, env = "MIXTRACK_SAMPLE_RATE", default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Recognition service endpoint
    #[arg(long, env = "MIXTRACK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Bearer token for the recognition service
    #[arg(long, env = "MIXTRACK_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Recognition request timeout in seconds
    #[arg(long, env = "MIXTRACK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Path of the yt-dlp program
    #[arg(long = "yt-dlp", env = "MIXTRACK_YT_DLP", default_value = "yt-dlp")]
    pub yt_dlp: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            temp_output_dir: PathBuf::from(DEFAULT_TEMP_OUTPUT_DIR),
            final_output_dir: PathBuf::from(DEFAULT_FINAL_OUTPUT_DIR),
            logging_level: LogLevel::default(),
            window_seconds: DEFAULT_WINDOW_SECONDS,
            concurrency: DEFAULT_CONCURRENCY,
            sample_rate: DEFAULT_SAMPLE_RATE,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            yt_dlp: PathBuf::from("yt-dlp"),
        }
    }
}

impl Settings {
    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> MixResult<()> {
        if self.window_seconds == 0 {
            return Err(MixError::ConfigError(
                "window_seconds must be greater than 0".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(MixError::ConfigError(
                "concurrency must be greater than 0".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(MixError::ConfigError(
                "sample_rate must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(MixError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Per-request timeout for the recognition service
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        settings: Settings,
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.temp_output_dir, PathBuf::from("temp"));
        assert_eq!(settings.final_output_dir, PathBuf::from("../"));
        assert_eq!(settings.logging_level, LogLevel::Info);
        assert_eq!(settings.window_seconds, 20);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "mixtrack",
            "--temp-output-dir",
            "/tmp/work",
            "--log-level",
            "warning",
            "--window-seconds",
            "30",
            "--concurrency",
            "8",
        ]);

        assert_eq!(cli.settings.temp_output_dir, PathBuf::from("/tmp/work"));
        assert_eq!(cli.settings.logging_level, LogLevel::Warning);
        assert_eq!(cli.settings.window_seconds, 30);
        assert_eq!(cli.settings.concurrency, 8);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let settings = Settings {
            window_seconds: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(MixError::ConfigError(_))));

        let settings = Settings {
            concurrency: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            sample_rate: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Warning.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Critical.to_level_filter(), log::LevelFilter::Error);
    }
}
