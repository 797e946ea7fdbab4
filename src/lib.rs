//! Namesmith - LLM-assisted trademark name generation
//!
//! Asks a language model for candidate brand names, screens each against a
//! forbidden-token rule, and regenerates whole rounds until one passes or the
//! round ceiling is hit. A streaming variant relays the model's live output
//! and ends with the screened candidates of a single attempt.

pub mod compliance;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod llm;
pub mod lookup;
pub mod prompt;
pub mod runner;

pub use error::{NamesmithError, Result};
