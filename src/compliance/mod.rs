//! Compliance screening of generated names
//!
//! A real deployment would query a trademark registry here; the bundled rule
//! rejects names containing a reserved token.

pub mod checker;
pub mod rule;

pub use checker::{COMPLIANCE_ERROR_PREFIX, ComplianceChecker, ComplianceReport};
pub use rule::{ComplianceRule, DEFAULT_FORBIDDEN_TOKEN, ForbiddenToken};
