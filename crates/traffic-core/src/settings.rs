use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Result, TrafficError};

/// Default input path, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data.txt";

/// Default report path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "client_traffic_report.xlsx";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Build an xlsx traffic report from a per-client traffic log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "traffic-report",
    about = "Build an xlsx traffic report from a per-client traffic log",
    version
)]
pub struct Settings {
    /// Traffic log to read
    #[arg(short, long, env = "TRAFFIC_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Spreadsheet to write (overwritten on every run)
    #[arg(short, long, env = "TRAFFIC_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also reject empty client ids and periods that end before they start
    #[arg(long, env = "TRAFFIC_STRICT")]
    pub strict: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path (appended to, in addition to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments, apply overrides and validate.
    pub fn load() -> Result<Self> {
        Self::load_from(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but with an explicit argument list, so it
    /// can be unit-tested without spawning a process.
    pub fn load_from(args: Vec<OsString>) -> Result<Self> {
        let settings = Self::resolve(Settings::parse_from(args));
        settings.validate()?;
        Ok(settings)
    }

    /// Apply the `--debug` override.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Reject path combinations that can only end in a broken run.
    pub fn validate(&self) -> Result<()> {
        if self.input == self.output {
            return Err(TrafficError::Config(format!(
                "input and output are the same file: {}",
                self.input.display()
            )));
        }

        let is_xlsx = self
            .output
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
            .unwrap_or(false);
        if !is_xlsx {
            return Err(TrafficError::Config(format!(
                "output must have an .xlsx extension: {}",
                self.output.display()
            )));
        }

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
