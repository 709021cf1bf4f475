//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{SendText, SendTextResponse};
use crate::transport::SendTextOutcome;

const DEFAULT_ENDPOINT: &str = "https://textbelt.com/text";

/// Timeout applied to every request unless overridden on the builder.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextBeltClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (`success` is not truthy),
/// - parse failures.
pub enum TextBeltError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}{}", body_suffix(.body))]
    HttpStatus { status: u16, body: Option<String> },

    /// TextBelt rejected the message.
    #[error("API error: {error}")]
    Api { error: String },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref().map(|b| format!(": {b}")).unwrap_or_default()
}

#[derive(Debug, Clone)]
/// Builder for [`TextBeltClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct TextBeltClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for TextBeltClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBeltClientBuilder {
    /// Create a builder with the default endpoint and the 10 second timeout.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the TextBelt `text` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextBeltClient`].
    pub fn build(self) -> Result<TextBeltClient, TextBeltError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TextBeltError::Transport(Box::new(err)))?;

        Ok(TextBeltClient {
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Low-level TextBelt client: one form POST per [`SendText`].
///
/// Sends to `https://textbelt.com/text` by default and expects a JSON reply
/// of the shape `{"success": bool, "error"?: string}`.
pub struct TextBeltClient {
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for TextBeltClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBeltClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl TextBeltClient {
    /// Create a client with the default endpoint and timeout.
    ///
    /// For more customization, use [`TextBeltClient::builder`].
    pub fn new() -> Result<Self, TextBeltError> {
        TextBeltClientBuilder::new().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> TextBeltClientBuilder {
        TextBeltClientBuilder::new()
    }

    #[cfg(test)]
    pub(crate) fn with_transport(endpoint: impl Into<String>, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Endpoint the client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one SMS through TextBelt.
    ///
    /// Errors:
    /// - [`TextBeltError::Transport`] when the request could not be completed,
    /// - [`TextBeltError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`TextBeltError::Parse`] when the body is not the expected JSON,
    /// - [`TextBeltError::Api`] when TextBelt reports `success: false`.
    pub async fn send_text(&self, request: &SendText) -> Result<SendTextResponse, TextBeltError> {
        let params = crate::transport::encode_send_text_form(request);

        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(TextBeltError::Transport)?;

        tracing::debug!(
            phone = %request.target(),
            status = response.status,
            body = %response.body,
            "textbelt response"
        );

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(TextBeltError::HttpStatus {
                status: response.status,
                body,
            });
        }

        match crate::transport::decode_send_text_json_response(&response.body)
            .map_err(|err| TextBeltError::Parse(Box::new(err)))?
        {
            SendTextOutcome::Accepted(parsed) => Ok(parsed),
            SendTextOutcome::Rejected { error } => Err(TextBeltError::Api { error }),
        }
    }
}
