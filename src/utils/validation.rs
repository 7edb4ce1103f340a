use crate::utils::error::{HolidayError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HolidayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Four ASCII digits.
pub fn validate_year(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Year must be a 4-digit number".to_string(),
        });
    }
    Ok(())
}

/// Two ASCII digits between "01" and "12".
pub fn validate_month(field_name: &str, value: &str) -> Result<()> {
    let numeric = value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit());
    let in_range = numeric
        && value
            .parse::<u32>()
            .map(|m| (1..=12).contains(&m))
            .unwrap_or(false);

    if !in_range {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Month must be a two-digit number between 01 and 12".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.base_url", "https://date.nager.at/Api/v2").is_ok());
        assert!(validate_url("source.base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("source.base_url", "").is_err());
        assert!(validate_url("source.base_url", "invalid-url").is_err());
        assert!(validate_url("source.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("source.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("source.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_year_and_month() {
        assert!(validate_year("selection.years", "2024").is_ok());
        assert!(validate_year("selection.years", "24").is_err());
        assert!(validate_year("selection.years", "20x4").is_err());

        assert!(validate_month("selection.default_month", "01").is_ok());
        assert!(validate_month("selection.default_month", "12").is_ok());
        assert!(validate_month("selection.default_month", "00").is_err());
        assert!(validate_month("selection.default_month", "13").is_err());
        assert!(validate_month("selection.default_month", "1").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("logging.level", "info").is_ok());
        assert!(validate_non_empty_string("logging.level", "   ").is_err());
    }
}
