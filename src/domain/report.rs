//! Caller-facing result shapes
//!
//! Both the synchronous report and the streamed result event hand candidates
//! out annotated with their trademark search URL.

use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, CandidateStatus};
use super::loop_state::LoopState;
use crate::error::Result;
use crate::lookup::build_lookup_url;

/// A screened candidate plus its lookup URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedCandidate {
    pub name: String,
    pub reason: String,
    pub status: CandidateStatus,
    pub query_url: String,
}

impl ReportedCandidate {
    pub fn from_candidate(candidate: &Candidate) -> Result<Self> {
        Ok(Self {
            name: candidate.name.clone(),
            reason: candidate.reason.clone(),
            status: candidate.status,
            query_url: build_lookup_url(&candidate.name)?,
        })
    }
}

/// Annotate every candidate, preserving order
pub fn annotate(candidates: &[Candidate]) -> Result<Vec<ReportedCandidate>> {
    candidates.iter().map(ReportedCandidate::from_candidate).collect()
}

/// Final answer of a synchronous generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub candidates: Vec<ReportedCandidate>,
    pub retry_count: u32,
    pub error_msg: String,
}

impl GenerationReport {
    pub fn from_state(state: &LoopState) -> Result<Self> {
        Ok(Self {
            candidates: annotate(&state.candidates)?,
            retry_count: state.retry_count,
            error_msg: state.error_message.clone(),
        })
    }

    /// No candidates at all, as opposed to all of them failing
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
