use std::fmt;

use crate::domain::value::{ApiKey, MessageText, Target};

/// Severity hint passed by the notification host.
///
/// TextBelt has no notion of severity, so the value is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyType {
    #[default]
    Info,
    Success,
    Warning,
    Failure,
}

impl fmt::Display for NotifyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// Target specification accepted at construction time.
///
/// Both variants are normalized the same way; see [`Targets::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Targets {
    Single(String),
    Many(Vec<String>),
}

impl Targets {
    /// Coerce any displayable value into a single target.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Single(value.to_string())
    }

    /// Normalize every entry into a [`Target`], preserving order.
    pub fn normalize(&self) -> Vec<Target> {
        match self {
            Self::Single(value) => vec![Target::normalize(value)],
            Self::Many(values) => values.iter().map(Target::normalize).collect(),
        }
    }
}

impl From<&str> for Targets {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for Targets {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for Targets {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for Targets {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Targets {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|value| (*value).to_owned()).collect())
    }
}

/// One `text` call: a single destination, the message, and the key.
#[derive(Debug, Clone)]
pub struct SendText {
    target: Target,
    message: MessageText,
    api_key: ApiKey,
}

impl SendText {
    pub fn new(target: Target, message: MessageText, api_key: ApiKey) -> Self {
        Self {
            target,
            message,
            api_key,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}
