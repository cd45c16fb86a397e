use crate::domain::model::PassageResult;
use crate::domain::ports::PassageSource;
use crate::utils::error::{Result, VerseError};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.esv.org/v3/passage/text/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 固定的排版參數，與 ESV API 的輸出格式綁定
const FORMAT_PARAMS: [(&str, &str); 7] = [
    ("include-headings", "false"),
    ("include-footnotes", "false"),
    ("include-verse-numbers", "false"),
    ("include-short-copyright", "false"),
    ("include-passage-references", "false"),
    ("include-selahs", "false"),
    ("include-poetry-lines", "false"),
];

pub struct EsvClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl EsvClient {
    pub fn with_endpoint(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, token, REQUEST_TIMEOUT)
    }

    fn with_timeout(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            VerseError::RequestConstructionError {
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    /// 組出完整請求 URL（不含憑證）
    pub fn request_url(&self, reference: &str) -> Result<Url> {
        let params = std::iter::once(("q", reference)).chain(FORMAT_PARAMS.iter().copied());
        Url::parse_with_params(&self.endpoint, params).map_err(|e| {
            VerseError::RequestConstructionError {
                message: format!("invalid endpoint '{}': {}", self.endpoint, e),
            }
        })
    }

    fn auth_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Token {}", self.token)).map_err(|e| {
            VerseError::RequestConstructionError {
                message: format!("invalid authorization header: {}", e),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }

    pub async fn fetch(&self, reference: &str) -> Result<PassageResult> {
        let url = self.request_url(reference)?;
        let auth = self.auth_header()?;

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(VerseError::NetworkError)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await.map_err(VerseError::NetworkError)?;

        if !status.is_success() {
            return Err(VerseError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let result: PassageResult = serde_json::from_str(&body)?;
        tracing::debug!(
            "Received '{}' with {} passage(s)",
            result.canonical,
            result.passages.len()
        );
        Ok(result)
    }
}

#[async_trait]
impl PassageSource for EsvClient {
    async fn fetch(&self, reference: &str) -> Result<PassageResult> {
        EsvClient::fetch(self, reference).await
    }
}
