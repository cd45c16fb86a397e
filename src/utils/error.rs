use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerseError {
    #[error("ESV_TOKEN environment variable is not set")]
    MissingCredential,

    #[error("creating request: {message}")]
    RequestConstructionError { message: String },

    #[error("making request: {0}")]
    NetworkError(#[source] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("parsing response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Bundled reference list is invalid: {message}")]
    ReferenceDataError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

/// 錯誤分類，用於日誌與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Service,
    Data,
}

impl VerseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VerseError::MissingCredential
            | VerseError::ReferenceDataError { .. }
            | VerseError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            VerseError::RequestConstructionError { .. } | VerseError::NetworkError(_) => {
                ErrorCategory::Network
            }
            VerseError::ApiError { .. } => ErrorCategory::Service,
            VerseError::ParseError(_) => ErrorCategory::Data,
        }
    }

    /// 是否為請求逾時
    pub fn is_timeout(&self) -> bool {
        matches!(self, VerseError::NetworkError(e) if e.is_timeout())
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VerseError::NetworkError(_) if self.is_timeout() => {
                "The ESV API did not respond in time".to_string()
            }
            VerseError::ApiError { status: 401, .. } | VerseError::ApiError { status: 403, .. } => {
                "The ESV API rejected the token".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VerseError::MissingCredential => "Export ESV_TOKEN with your ESV API key",
            VerseError::RequestConstructionError { .. } => {
                "Check the endpoint URL and that the token has no control characters"
            }
            VerseError::NetworkError(_) => "Check your network connection and try again",
            VerseError::ApiError { status: 401, .. } | VerseError::ApiError { status: 403, .. } => {
                "Verify ESV_TOKEN at https://api.esv.org/"
            }
            VerseError::ApiError { .. } => "Check the reference and try again later",
            VerseError::ParseError(_) => "The service returned an unexpected response format",
            VerseError::ReferenceDataError { .. } => "Rebuild the binary with a valid data/verses.json",
            VerseError::ConfigValidationError { .. } => "Run with --help to see valid options",
        }
    }

    /// 請求相關錯誤退出碼為 1，啟動時配置錯誤為 2
    pub fn exit_code(&self) -> i32 {
        match self {
            VerseError::ReferenceDataError { .. } | VerseError::ConfigValidationError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_keeps_status_and_body() {
        let err = VerseError::ApiError {
            status: 404,
            body: "{\"detail\":\"Not found.\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (status 404): {\"detail\":\"Not found.\"}"
        );
        assert_eq!(err.category(), ErrorCategory::Service);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_startup_errors_are_distinguishable() {
        let data = VerseError::ReferenceDataError {
            message: "empty".to_string(),
        };
        let config = VerseError::ConfigValidationError {
            field: "endpoint".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(data.category(), ErrorCategory::Configuration);
        assert_eq!(data.exit_code(), 2);
        assert_eq!(config.exit_code(), 2);
        assert_eq!(VerseError::MissingCredential.exit_code(), 1);
    }

    #[test]
    fn test_unauthorized_has_friendly_message() {
        let err = VerseError::ApiError {
            status: 401,
            body: String::new(),
        };
        assert_eq!(err.user_friendly_message(), "The ESV API rejected the token");
        assert!(err.recovery_suggestion().contains("ESV_TOKEN"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: VerseError = serde_err.into();
        assert!(err.to_string().starts_with("parsing response:"));
        assert_eq!(err.category(), ErrorCategory::Data);
    }
}
