use std::fmt;

/// Maximum length of a single outbound SMS, in characters.
pub const MAX_MESSAGE_CHARS: usize = 160;

const TRUNCATION_MARKER: &str = "...";

#[derive(Clone, PartialEq, Eq, Hash)]
/// TextBelt API key (`key`).
///
/// Stored as provided. An empty key is allowed; it only changes how the
/// connection URL is rendered.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by TextBelt (`key`).
    pub const FIELD: &'static str = "key";

    /// Wrap an API key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Masked form for logs and privacy-preserving URLs: first and last
    /// character around `...`.
    pub fn masked(&self) -> String {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) => format!("{first}...{last}"),
            (Some(_), None) => "...".to_owned(),
            _ => String::new(),
        }
    }

    /// Short prefix used in debug logs.
    pub(crate) fn log_prefix(&self) -> String {
        self.0.chars().take(10).collect()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number as sent to TextBelt (`phone`).
///
/// Invariant: starts with `+`. Surrounding whitespace is removed before the
/// prefix is applied; no other validation is performed.
pub struct Target(String);

impl Target {
    /// Form field name used by TextBelt (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Normalize a raw phone string into international form.
    pub fn normalize(value: impl AsRef<str>) -> Self {
        let trimmed = value.as_ref().trim();
        if trimmed.starts_with('+') {
            Self(trimmed.to_owned())
        } else {
            Self(format!("+{trimmed}"))
        }
    }

    /// Normalized value as sent to TextBelt.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: at most [`MAX_MESSAGE_CHARS`] characters.
pub struct MessageText {
    text: String,
    truncated: bool,
}

impl MessageText {
    /// Form field name used by TextBelt (`message`).
    pub const FIELD: &'static str = "message";

    /// Build message text, truncating to [`MAX_MESSAGE_CHARS`] with a `...` marker.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.chars().count() <= MAX_MESSAGE_CHARS {
            return Self {
                text: value,
                truncated: false,
            };
        }

        let keep = MAX_MESSAGE_CHARS - TRUNCATION_MARKER.len();
        let mut truncated: String = value.chars().take(keep).collect();
        truncated.push_str(TRUNCATION_MARKER);
        Self {
            text: truncated,
            truncated: true,
        }
    }

    /// Join title and body as `"{title}: {body}"` (or just the body when the
    /// title is empty), then apply the length limit.
    pub fn compose(title: &str, body: &str) -> Self {
        if title.is_empty() {
            Self::new(body)
        } else {
            Self::new(format!("{title}: {body}"))
        }
    }

    /// Borrow the final message text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the input had to be cut down to fit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}
