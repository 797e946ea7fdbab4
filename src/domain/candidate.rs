//! Generation request and candidate records
//!
//! A Candidate is created by the extractor with status `Unknown` and is moved
//! to `Pass` or `Fail` by the compliance checker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamesmithError;

/// What the caller asked for: an industry and a free-form keyword description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub industry: String,
    pub keywords: String,
}

impl GenerationRequest {
    pub fn new(industry: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            keywords: keywords.into(),
        }
    }
}

/// Compliance status of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Pass,
    Fail,
    /// Not yet screened
    #[default]
    Unknown,
}

impl CandidateStatus {
    /// Returns true once the checker has decided
    pub fn is_checked(&self) -> bool {
        !matches!(self, CandidateStatus::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Pass => "pass",
            CandidateStatus::Fail => "fail",
            CandidateStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = NamesmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(CandidateStatus::Pass),
            "fail" => Ok(CandidateStatus::Fail),
            "unknown" => Ok(CandidateStatus::Unknown),
            other => Err(NamesmithError::InvalidStatus(other.to_string())),
        }
    }
}

/// One generated name proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: CandidateStatus,
}

impl Candidate {
    /// Create an unscreened candidate
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            status: CandidateStatus::Unknown,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CandidateStatus::Pass
    }

    pub fn failed(&self) -> bool {
        self.status == CandidateStatus::Fail
    }
}
