//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup. The
//! helpers never store tokens; callers pass them per request.

use super::{config::AppConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info_span, Instrument};

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

const APPLICATION_JSON: &str = "application/json";

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the configured timeout and the crate user agent.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.to_string(),
        })
    }

    /// Fetches JSON with a bearer token.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, timeout, non-2xx status, or an
    /// undecodable body.
    pub async fn get_json_with_bearer<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &SecretString,
    ) -> Result<T, AppError> {
        let url = build_url(&self.base_url, path);
        let span = info_span!("api.request", http.method = "GET", url = %url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .bearer_auth(token.expose_secret())
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Posts a JSON body and parses a JSON response.
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if the body cannot be encoded, otherwise
    /// the same errors as [`ApiClient::get_json_with_bearer`].
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = build_url(&self.base_url, path);
        let payload = serde_json::to_vec(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let span = info_span!("api.request", http.method = "POST", url = %url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(payload)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
}

/// Builds a URL from a base URL and a path, joined by exactly one slash.
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    debug!(status = status.as_u16(), "response received");

    if status.is_success() {
        let body = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice::<T>(&body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

/// Trims and truncates HTTP error bodies before they reach callers.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
