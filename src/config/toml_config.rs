use crate::core::fetcher::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::{ConfigProvider, PublishPolicy, Selection};
use crate::presentation::YEARS;
use crate::utils::error::{HolidayError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub publish: PublishConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    /// Serve the bundled holidays instead of calling the API.
    #[serde(default)]
    pub offline: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            offline: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub years: Option<Vec<String>>,
    pub default_year: Option<String>,
    pub default_month: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default)]
    pub policy: PublishPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HolidayError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HolidayError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| HolidayError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn years(&self) -> Vec<String> {
        match &self.selection.years {
            Some(years) => years.clone(),
            None => YEARS.iter().map(|y| y.to_string()).collect(),
        }
    }

    /// Configured defaults, falling back to the current year and January.
    pub fn initial_selection(&self) -> Selection {
        let mut selection = Selection::current();
        if let Some(year) = &self.selection.default_year {
            selection.year = year.clone();
        }
        if let Some(month) = &self.selection.default_month {
            selection.month = month.clone();
        }
        selection
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn publish_policy(&self) -> PublishPolicy {
        self.publish.policy
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        if let Some(years) = &self.selection.years {
            if years.is_empty() {
                return Err(HolidayError::ConfigValidationError {
                    field: "selection.years".to_string(),
                    message: "at least one year is required".to_string(),
                });
            }
            for year in years {
                validation::validate_year("selection.years", year)?;
            }
        }

        if let Some(year) = &self.selection.default_year {
            validation::validate_year("selection.default_year", year)?;
        }

        if let Some(month) = &self.selection.default_month {
            validation::validate_month("selection.default_month", month)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}
