//! Error types for Namesmith
//!
//! Centralized error handling using thiserror. Malformed model output and
//! failed compliance checks are not errors; they are recovered or reported
//! as data.

use thiserror::Error;

/// All error types that can occur in Namesmith
#[derive(Debug, Error)]
pub enum NamesmithError {
    /// Model service failure (transport, protocol, or scripted failure)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Model endpoint answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Fragment stream closed before the model signalled completion
    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),

    /// API key environment variable not set
    #[error("Missing API key: environment variable {env_var} not set")]
    MissingApiKey { env_var: String },

    /// Prompt template could not be rendered
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Candidate status string outside pass/fail/unknown
    #[error("Invalid candidate status: {0}")]
    InvalidStatus(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NamesmithError {
    /// Whether this error came from the model service boundary
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            NamesmithError::Llm(_)
                | NamesmithError::Api { .. }
                | NamesmithError::StreamInterrupted(_)
                | NamesmithError::MissingApiKey { .. }
        )
    }
}

/// Result type alias for Namesmith operations
pub type Result<T> = std::result::Result<T, NamesmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error() {
        let err = NamesmithError::Llm("connection refused".to_string());
        assert_eq!(err.to_string(), "LLM error: connection refused");
        assert!(err.is_upstream());
    }

    #[test]
    fn test_api_error() {
        let err = NamesmithError::Api {
            status: 401,
            message: "invalid token".to_string(),
        };
        assert_eq!(err.to_string(), "API error 401: invalid token");
        assert!(err.is_upstream());
    }

    #[test]
    fn test_missing_api_key_error() {
        let err = NamesmithError::MissingApiKey {
            env_var: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing API key: environment variable OPENAI_API_KEY not set"
        );
    }

    #[test]
    fn test_invalid_status_is_not_upstream() {
        let err = NamesmithError::InvalidStatus("maybe".to_string());
        assert_eq!(err.to_string(), "Invalid candidate status: maybe");
        assert!(!err.is_upstream());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NamesmithError = io_err.into();
        assert!(matches!(err, NamesmithError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: NamesmithError = json_err.into();
        assert!(matches!(err, NamesmithError::Json(_)));
    }
}
