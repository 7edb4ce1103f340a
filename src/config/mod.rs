pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::core::PublishPolicy;
#[cfg(feature = "cli")]
use crate::presentation::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::{HolidayError, Result};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bankwala")]
#[command(about = "Bank holidays in India, one month at a time")]
pub struct CliConfig {
    /// Year to show (defaults to the current year)
    #[arg(long)]
    pub year: Option<String>,

    /// Month as 01-12, 1-12 or an English month name
    #[arg(long)]
    pub month: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override source.base_url from config
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override source.timeout_seconds from config
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Serve the bundled 2025 holidays instead of calling the API
    #[arg(long)]
    pub offline: bool,

    /// Override publish.policy from config
    #[arg(long, value_enum)]
    pub policy: Option<PublishPolicy>,

    /// Read `year`/`month` commands from stdin and redraw on every update
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides on top.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = Some(timeout);
        }
        if let Some(policy) = self.policy {
            config.publish.policy = policy;
        }
        if self.offline {
            config.source.offline = true;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if let Some(year) = &self.year {
            config.selection.default_year = Some(year.clone());
        }
        if let Some(month) = &self.month {
            let key = crate::presentation::parse_month(month).ok_or_else(|| {
                HolidayError::InvalidConfigValueError {
                    field: "month".to_string(),
                    value: month.clone(),
                    reason: "Expected 01-12 or a month name".to_string(),
                }
            })?;
            config.selection.default_month = Some(key.to_string());
        }

        Ok(config)
    }
}
