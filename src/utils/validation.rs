use crate::utils::error::{Result, VerseError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(VerseError::ConfigValidationError {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(VerseError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(VerseError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(VerseError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

/// 空字串視同未設定
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
