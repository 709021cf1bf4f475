//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{NotifyType, SendText, Targets};
pub use response::SendTextResponse;
pub use validation::ConfigurationError;
pub use value::{ApiKey, MAX_MESSAGE_CHARS, MessageText, Target};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_without_plus_is_trimmed_and_prefixed() {
        assert_eq!(Target::normalize("  15551234567 ").as_str(), "+15551234567");
        assert_eq!(Target::normalize("\t4477\n").as_str(), "+4477");
    }

    #[test]
    fn target_normalization_is_idempotent() {
        let once = Target::normalize("15551234567");
        let twice = Target::normalize(once.as_str());
        assert_eq!(once, twice);
        assert_eq!(Target::normalize(" +15551234567").as_str(), "+15551234567");
    }

    #[test]
    fn empty_target_normalizes_to_bare_plus() {
        assert_eq!(Target::normalize("   ").as_str(), "+");
    }

    #[test]
    fn targets_variants_normalize_identically() {
        let single = Targets::from("15551234567").normalize();
        let many = Targets::from(vec!["15551234567"]).normalize();
        let shown = Targets::display(15551234567_u64).normalize();
        assert_eq!(single, many);
        assert_eq!(single, shown);
    }

    #[test]
    fn targets_many_preserves_order() {
        let targets = Targets::from(vec!["2".to_owned(), "+1".to_owned()]).normalize();
        let raw = targets.iter().map(Target::as_str).collect::<Vec<_>>();
        assert_eq!(raw, vec!["+2", "+1"]);
    }

    #[test]
    fn message_joins_title_and_body() {
        assert_eq!(MessageText::compose("Alert", "disk full").as_str(), "Alert: disk full");
        assert_eq!(MessageText::compose("", "disk full").as_str(), "disk full");
    }

    #[test]
    fn message_at_limit_is_untouched() {
        let body = "a".repeat(MAX_MESSAGE_CHARS);
        let msg = MessageText::compose("", &body);
        assert_eq!(msg.as_str(), body);
        assert!(!msg.is_truncated());
    }

    #[test]
    fn message_over_limit_is_truncated_to_exactly_160_chars() {
        let body = "b".repeat(200);
        let msg = MessageText::compose("Title", &body);
        assert_eq!(msg.char_len(), MAX_MESSAGE_CHARS);
        assert!(msg.is_truncated());
        assert!(msg.as_str().starts_with("Title: bbb"));
        assert!(msg.as_str().ends_with("..."));
        assert_eq!(&msg.as_str()[..157], &format!("Title: {body}")[..157]);
    }

    #[test]
    fn message_truncation_counts_characters_not_bytes() {
        let body = "é".repeat(170);
        let msg = MessageText::new(body);
        assert_eq!(msg.char_len(), MAX_MESSAGE_CHARS);
        assert_eq!(msg.as_str().chars().filter(|c| *c == 'é').count(), 157);
    }

    #[test]
    fn api_key_debug_is_masked() {
        let key = ApiKey::new("abcdef123456");
        assert_eq!(key.masked(), "a...6");
        assert!(!format!("{key:?}").contains("abcdef123456"));
        assert_eq!(key.log_prefix(), "abcdef1234");
    }

    #[test]
    fn notify_type_defaults_to_info() {
        assert_eq!(NotifyType::default(), NotifyType::Info);
        assert_eq!(NotifyType::Failure.to_string(), "failure");
    }
}
