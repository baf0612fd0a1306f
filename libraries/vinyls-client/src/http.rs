//! Configured HTTP client shared by every service adapter.

use crate::config::ClientConfig;
use crate::error::{ConfigError, HttpError, ServiceError, ServiceResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

/// Raw outcome of one HTTP call.
///
/// Success bodies are decoded; anything else keeps the error body as text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    /// Canonical reason phrase for `status`
    pub reason: String,
    /// Decoded body, `None` for 204 or a blank/`null` success body
    pub body: Option<T>,
    pub error_body: Option<String>,
}

/// Error payload the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Message text the server attached to a failure.
    ///
    /// Prefers the `message` field of a JSON error body, falling back to the
    /// reason phrase.
    pub fn server_message(&self) -> String {
        let parsed = self
            .error_body
            .as_deref()
            .and_then(|body| serde_json::from_str::<ApiErrorBody>(body).ok())
            .and_then(|body| body.message);

        match parsed {
            Some(serde_json::Value::String(message)) if !message.is_empty() => message,
            Some(serde_json::Value::Array(messages)) if !messages.is_empty() => messages
                .iter()
                .map(|m| m.as_str().map_or_else(|| m.to_string(), str::to_string))
                .collect::<Vec<_>>()
                .join("; "),
            _ => self.reason.clone(),
        }
    }

    /// Body of a successful read.
    pub fn into_body(self) -> ServiceResult<T> {
        self.into_result(false)
    }

    /// Body of a successful write; failures also carry the raw error body.
    pub fn into_written(self) -> ServiceResult<T> {
        self.into_result(true)
    }

    /// Success regardless of body, for calls like DELETE that answer empty.
    pub fn into_status(self) -> ServiceResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.failure(true))
        }
    }

    fn into_result(self, keep_error_body: bool) -> ServiceResult<T> {
        if !self.is_success() {
            return Err(self.failure(keep_error_body));
        }

        match self.body {
            Some(body) => Ok(body),
            None => {
                warn!(status = self.status, "Server returned an empty body");
                Err(ServiceError::EmptyResponse)
            }
        }
    }

    fn failure(&self, keep_error_body: bool) -> ServiceError {
        warn!(
            status = self.status,
            error = ?self.error_body,
            "Server returned an error status"
        );
        ServiceError::Http {
            status: self.status,
            message: self.server_message(),
            body: if keep_error_body {
                self.error_body.clone()
            } else {
                None
            },
        }
    }
}

/// HTTP client with a fixed base URL and timeouts.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
    log_bodies: bool,
}

impl HttpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = config.normalized_base_url()?;

        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(format!("Vinyls/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(base_url = %base_url, "Created HTTP client");

        Ok(Self {
            http,
            base_url,
            log_bodies: config.log_bodies,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, HttpError> {
        let url = self.url(path);
        self.execute(self.http.get(&url), "GET", &url).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, HttpError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.execute(self.http.post(&url).json(body), "POST", &url)
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, HttpError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.execute(self.http.put(&url).json(body), "PUT", &url)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse<serde_json::Value>, HttpError> {
        let url = self.url(path);
        self.execute(self.http.delete(&url), "DELETE", &url).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<ApiResponse<T>, HttpError> {
        debug!(method = %method, url = %url, "Sending request");

        let response = request.send().await.map_err(|e| {
            warn!(method = %method, url = %url, error = %e, "Request failed");
            HttpError::Transport(e)
        })?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let text = response.text().await?;

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            bytes = text.len(),
            "Received response"
        );
        if self.log_bodies {
            trace!(body = %text, "Response body");
        }

        if status.is_success() {
            let trimmed = text.trim();
            let body = if status == StatusCode::NO_CONTENT || trimmed.is_empty() || trimmed == "null"
            {
                None
            } else {
                Some(serde_json::from_str(trimmed)?)
            };

            Ok(ApiResponse {
                status: status.as_u16(),
                reason,
                body,
                error_body: None,
            })
        } else {
            Ok(ApiResponse {
                status: status.as_u16(),
                reason,
                body: None,
                error_body: (!text.is_empty()).then_some(text),
            })
        }
    }
}
