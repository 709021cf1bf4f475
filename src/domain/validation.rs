use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    NoTargets,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => write!(f, "no valid phone numbers were specified"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::ConfigurationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ConfigurationError::NoTargets;
        assert_eq!(err.to_string(), "no valid phone numbers were specified");
    }
}
