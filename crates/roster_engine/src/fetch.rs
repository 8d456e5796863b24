use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use roster_logging::roster_debug;

use crate::wire::decode_page;
use crate::{FailureKind, FetchError, FetchedPage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 2 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

/// Retrieves one page for a cursor. Every failure is reported as `FetchError`;
/// no partial page is ever returned.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, cursor: &str) -> Result<FetchedPage, FetchError>;
}

/// Treats the cursor as the absolute url of the page.
#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    settings: FetchSettings,
}

impl ReqwestPageFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch_page(&self, cursor: &str) -> Result<FetchedPage, FetchError> {
        let parsed = reqwest::Url::parse(cursor)
            .map_err(|err| FetchError::new(FailureKind::InvalidCursor, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .get(parsed)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        roster_debug!("fetched {} bytes from {final_url}", bytes.len());

        decode_page(&bytes, &final_url)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
