// The Serialize and Deserialize traits are derived to ensure that Errors can be
// carried through Resources, which is how deferred page loads reach the ErrorBoundary.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to load page '{page}': {message}")]
    Load { page: String, message: String },
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }

    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    pub fn load(page: impl Into<String>, message: impl ToString) -> Self {
        Error::Load {
            page: page.into(),
            message: message.to_string(),
        }
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::from("boom").to_string(), "boom");
        assert_eq!(
            Error::invalid_pattern("/a/*/b", "splat must be last").to_string(),
            "Invalid route pattern '/a/*/b': splat must be last"
        );
        assert_eq!(
            Error::load("Vote", "network").to_string(),
            "Failed to load page 'Vote': network"
        );
    }

    #[test]
    fn survives_serialization() {
        let error = Error::load("Pool", "timed out");
        let json = serde_json::to_string(&error).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }
}
