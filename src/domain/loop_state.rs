//! State owned by one run of the generation loop

use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, GenerationRequest};

/// Fixed maximum number of generation rounds
pub const MAX_ROUNDS: u32 = 3;

/// Everything one invocation of the generation loop knows.
///
/// Created fresh per request and never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopState {
    pub request: GenerationRequest,
    /// Candidates of the most recent round only
    pub candidates: Vec<Candidate>,
    /// Completed generation rounds
    pub retry_count: u32,
    /// Empty when no candidate of the current round failed
    pub error_message: String,
}

impl LoopState {
    pub fn new(request: GenerationRequest) -> Self {
        Self {
            request,
            candidates: Vec::new(),
            retry_count: 0,
            error_message: String::new(),
        }
    }

    /// At least one candidate of the current round passed
    pub fn has_pass(&self) -> bool {
        self.candidates.iter().any(Candidate::passed)
    }

    pub fn pass_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.passed()).count()
    }

    pub fn retries_exhausted(&self) -> bool {
        self.retry_count >= MAX_ROUNDS
    }
}
