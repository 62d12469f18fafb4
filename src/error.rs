//! Load Errors
//!
//! Every way the catalog fetch can fail. The UI shows a single message
//! per failure; the variant is kept for the log.

/// Shown for any non-2xx response
pub const STATUS_FAILURE_MESSAGE: &str = "Failed to fetch Pokémon data. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Upstream answered with a non-success status code
    Status(u16),
    /// The request did not complete (connectivity, CORS, DNS, ...)
    Transport(String),
    /// The body could not be read or is not the expected JSON
    Body(String),
}

impl LoadError {
    /// Message displayed to the user
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Status(_) => STATUS_FAILURE_MESSAGE.to_string(),
            LoadError::Transport(msg) | LoadError::Body(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Status(code) => write!(f, "Unexpected status: {}", code),
            LoadError::Transport(msg) => write!(f, "Request failed: {}", msg),
            LoadError::Body(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Body(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_fixed_message() {
        assert_eq!(LoadError::Status(500).user_message(), STATUS_FAILURE_MESSAGE);
        assert_eq!(LoadError::Status(404).user_message(), STATUS_FAILURE_MESSAGE);
    }

    #[test]
    fn test_other_causes_pass_message_through() {
        assert_eq!(LoadError::Transport("Failed to fetch".into()).user_message(), "Failed to fetch");
        assert_eq!(LoadError::Body("expected value".into()).user_message(), "expected value");
    }

    #[test]
    fn test_display_names_cause() {
        assert_eq!(LoadError::Status(503).to_string(), "Unexpected status: 503");
    }
}
