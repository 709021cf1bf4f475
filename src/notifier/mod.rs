//! Notifier layer: the plugin contract and the TextBelt adapter behind it.

mod connection;

use async_trait::async_trait;

use crate::client::{TextBeltClient, TextBeltError};
use crate::domain::{ApiKey, ConfigurationError, MessageText, NotifyType, SendText, Target, Targets};

pub use connection::{ParsedUrl, parse_url, render_url};

/// Human-readable service name.
pub const SERVICE_NAME: &str = "TextBelt";

/// Service homepage.
pub const SERVICE_URL: &str = "https://textbelt.com/";

/// URL scheme handled by this notifier.
pub const SCHEME: &str = "textbelt";

/// Accepted connection URL shapes.
pub const TEMPLATES: [&str; 2] = ["{schema}://{apikey}@{targets}", "{schema}://{apikey}:{targets}"];

/// Contract between a notification host and one delivery service.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Deliver `body` (with an optional `title`) to every configured recipient.
    ///
    /// Returns `true` only when every recipient accepted the message. Failures
    /// are logged, never returned.
    async fn send(&self, body: &str, title: &str, notify_type: NotifyType) -> bool;

    /// Connection URL describing this notifier. With `privacy`, secrets are masked.
    fn url(&self, privacy: bool) -> String;

    fn service_name(&self) -> &'static str;

    fn scheme(&self) -> &'static str;
}

/// Immutable API key + recipient list.
///
/// Invariant: at least one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBeltConfig {
    api_key: ApiKey,
    targets: Vec<Target>,
}

impl TextBeltConfig {
    /// Normalize `targets` and pair them with `api_key`.
    ///
    /// Fails with [`ConfigurationError::NoTargets`] when no target remains.
    pub fn new(
        api_key: impl Into<String>,
        targets: impl Into<Targets>,
    ) -> Result<Self, ConfigurationError> {
        let targets = targets.into().normalize();
        if targets.is_empty() {
            let err = ConfigurationError::NoTargets;
            tracing::warn!(error = %err, "textbelt configuration rejected");
            return Err(err);
        }
        Ok(Self {
            api_key: ApiKey::new(api_key),
            targets,
        })
    }

    /// Parse a connection URL; `None` when the URL is not a TextBelt URL.
    pub fn from_url(url: &str) -> Option<Result<Self, ConfigurationError>> {
        parse_url(url).map(ParsedUrl::into_config)
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// First recipient; always present.
    pub fn first_target(&self) -> &Target {
        &self.targets[0]
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors raised while constructing a [`TextBeltNotifier`].
pub enum NotifierError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("could not create HTTP client: {0}")]
    Client(#[from] TextBeltError),
}

/// TextBelt SMS notifier.
///
/// Sends one request per target, strictly in order, and folds the outcomes
/// into a single boolean.
#[derive(Debug, Clone)]
pub struct TextBeltNotifier {
    config: TextBeltConfig,
    client: TextBeltClient,
}

impl TextBeltNotifier {
    /// Create a notifier using the default endpoint and 10 second timeout.
    pub fn new(
        api_key: impl Into<String>,
        targets: impl Into<Targets>,
    ) -> Result<Self, NotifierError> {
        let config = TextBeltConfig::new(api_key, targets)?;
        let client = TextBeltClient::new()?;
        Ok(Self { config, client })
    }

    /// Create a notifier from an existing configuration and client.
    pub fn with_client(config: TextBeltConfig, client: TextBeltClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &TextBeltConfig {
        &self.config
    }

    async fn send_one(&self, target: &Target, message: &MessageText) -> bool {
        tracing::info!(phone = %target, "sending textbelt sms");
        let request = SendText::new(target.clone(), message.clone(), self.config.api_key.clone());

        match self.client.send_text(&request).await {
            Ok(response) => {
                tracing::info!(
                    phone = %target,
                    text_id = ?response.text_id,
                    quota_remaining = ?response.quota_remaining,
                    "sms sent"
                );
                true
            }
            Err(TextBeltError::Api { error }) => {
                tracing::warn!(phone = %target, error = %error, "textbelt rejected sms");
                false
            }
            Err(err) => {
                tracing::warn!(phone = %target, error = %err, "error sending sms");
                false
            }
        }
    }
}

#[async_trait]
impl Notify for TextBeltNotifier {
    async fn send(&self, body: &str, title: &str, notify_type: NotifyType) -> bool {
        tracing::info!(
            title,
            body_len = body.chars().count(),
            notify_type = %notify_type,
            "textbelt notification received"
        );

        let message = MessageText::compose(title, body);
        if message.is_truncated() {
            tracing::info!(chars = message.char_len(), "message truncated");
        }

        let mut success = true;
        for target in &self.config.targets {
            // Every target gets its attempt, even after a failure.
            if !self.send_one(target, &message).await {
                success = false;
            }
        }
        success
    }

    fn url(&self, privacy: bool) -> String {
        render_url(&self.config, privacy)
    }

    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    fn scheme(&self) -> &'static str {
        SCHEME
    }
}
