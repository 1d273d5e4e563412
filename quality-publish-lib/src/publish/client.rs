//! Dashboard API client
//!
//! Minimal client for the two endpoints this tool needs: build registration
//! and code quality submission.

use super::{BuildRequest, CodeQualityRequest};
use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

const LOG_TARGET: &str = "   publish";

const BUILD_PATH: &str = "build";
const QUALITY_PATH: &str = "quality/static-analysis";

/// Status and body of a dashboard response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    pub status: StatusCode,
    pub body: String,
}

impl DashboardResponse {
    /// The dashboard signals a stored record with `201 Created`.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.status == StatusCode::CREATED
    }

    /// The identifier echoed back by build registration, without quotes or whitespace.
    #[must_use]
    pub fn correlation_id(&self) -> &str {
        self.body.trim().trim_matches('"')
    }
}

impl core::fmt::Display for DashboardResponse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.trim())
    }
}

#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    /// Create a client for the dashboard API rooted at `base_url`.
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self> {
        use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

        let url = Url::parse(base_url).into_app_err_with(|| format!("invalid dashboard URL '{base_url}'"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("dashboard URL '{base_url}' must use http or https"));
        }

        let mut client_builder = reqwest::Client::builder()
            .user_agent(concat!("quality-publish/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout);

        if let Some(t) = token.filter(|t| !t.is_empty()) {
            let mut auth_val = HeaderValue::from_str(&format!("apiToken {t}")).into_app_err("invalid dashboard token")?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            client_builder = client_builder.default_headers(headers);
        }

        Ok(Self {
            client: client_builder.build().into_app_err("creating HTTP client")?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register the build and obtain the correlation id for later submissions.
    pub async fn register_build(&self, request: &BuildRequest) -> Result<DashboardResponse> {
        self.post(BUILD_PATH, request).await
    }

    /// Submit the aggregated code quality metrics.
    pub async fn publish_quality(&self, request: &CodeQualityRequest) -> Result<DashboardResponse> {
        self.post(QUALITY_PATH, request).await
    }

    async fn post<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<DashboardResponse> {
        let url = format!("{}/{path}", self.base_url);
        log::info!(target: LOG_TARGET, "POST {url}");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .into_app_err_with(|| format!("sending HTTP request to {url}"))?;

        let status = response.status();
        let body = response.text().await.into_app_err_with(|| format!("reading response body from {url}"))?;

        log::debug!(target: LOG_TARGET, "{url} answered {status}");

        Ok(DashboardResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = DashboardClient::new("http://localhost:8080/api/", None, TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(DashboardClient::new("not a url", None, TIMEOUT).is_err());
    }

    #[test]
    fn test_new_rejects_non_http_scheme() {
        assert!(DashboardClient::new("ftp://example.com/api", None, TIMEOUT).is_err());
    }

    #[test]
    fn test_new_with_token() {
        assert!(DashboardClient::new("https://dashboard.example.com/api", Some("secret"), TIMEOUT).is_ok());
    }

    #[test]
    fn test_response_created() {
        let created = DashboardResponse {
            status: StatusCode::CREATED,
            body: "\"5c1d\"\n".to_string(),
        };
        assert!(created.is_created());
        assert_eq!(created.correlation_id(), "5c1d");

        let ok = DashboardResponse {
            status: StatusCode::OK,
            body: String::new(),
        };
        assert!(!ok.is_created());
    }

    #[test]
    fn test_response_display() {
        let response = DashboardResponse {
            status: StatusCode::BAD_REQUEST,
            body: " missing field \n".to_string(),
        };
        assert_eq!(response.to_string(), "400 Bad Request: missing field");
    }
}
