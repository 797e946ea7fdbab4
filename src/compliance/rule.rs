//! Pass/fail predicates applied to a single name

/// Reserved brand token rejected by default
pub const DEFAULT_FORBIDDEN_TOKEN: &str = "阿里";

/// Decides whether one name is unusable
pub trait ComplianceRule: Send + Sync {
    /// True when the name must be rejected
    fn violates(&self, name: &str) -> bool;

    /// Short description for logs
    fn description(&self) -> &str {
        "compliance rule"
    }
}

/// Rejects names containing a forbidden substring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenToken {
    token: String,
}

impl ForbiddenToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Default for ForbiddenToken {
    fn default() -> Self {
        Self::new(DEFAULT_FORBIDDEN_TOKEN)
    }
}

impl ComplianceRule for ForbiddenToken {
    fn violates(&self, name: &str) -> bool {
        // An empty token would match every name
        !self.token.is_empty() && name.contains(&self.token)
    }

    fn description(&self) -> &str {
        "forbidden token"
    }
}
