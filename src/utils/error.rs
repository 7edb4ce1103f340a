use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    HttpStatus { status: u16 },

    #[error("API response body was empty")]
    EmptyBody,

    #[error("Decoding error: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HolidayError {
    /// The request never produced a usable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            HolidayError::ApiError(_) | HolidayError::HttpStatus { .. } | HolidayError::EmptyBody
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, HolidayError::DecodeError(_))
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HolidayError::ApiError(_) | HolidayError::HttpStatus { .. } | HolidayError::EmptyBody => {
                "Could not reach the holiday service".to_string()
            }
            HolidayError::DecodeError(_) => {
                "The holiday service returned data in an unexpected format".to_string()
            }
            HolidayError::CsvError(_) | HolidayError::SerializationError(_) => {
                "Could not render the holiday list".to_string()
            }
            HolidayError::IoError(e) => format!("File system error: {}", e),
            HolidayError::ConfigError { message } => format!("Configuration problem: {}", message),
            HolidayError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            HolidayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HolidayError::ApiError(_) | HolidayError::HttpStatus { .. } | HolidayError::EmptyBody => {
                "Check the network connection and the configured base URL"
            }
            HolidayError::DecodeError(_) => "Check that the base URL points at the Nager.Date v2 API",
            HolidayError::CsvError(_) | HolidayError::SerializationError(_) => {
                "Try a different output format"
            }
            HolidayError::IoError(_) => "Check that the file exists and is readable",
            HolidayError::ConfigError { .. }
            | HolidayError::ConfigValidationError { .. }
            | HolidayError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HolidayError>;
