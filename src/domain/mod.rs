//! Domain types for Namesmith
//!
//! This module contains the core domain types:
//! - GenerationRequest / Candidate: what is asked for and what comes back
//! - LoopState: the state one generation run owns
//! - GenerationReport / ReportedCandidate: caller-facing results with lookup URLs
//! - StreamEvent: what the stream relay emits

pub mod candidate;
pub mod event;
pub mod loop_state;
pub mod report;

pub use candidate::{Candidate, CandidateStatus, GenerationRequest};
pub use event::StreamEvent;
pub use loop_state::{LoopState, MAX_ROUNDS};
pub use report::{GenerationReport, ReportedCandidate, annotate};
