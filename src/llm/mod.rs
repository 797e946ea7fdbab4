//! LLM Client Layer - model service boundary and OpenAI-compatible streaming
//!
//! This module provides:
//! - ModelService trait for the text-completion boundary
//! - Fragment types for incremental output
//! - OpenAiCompatibleClient implementation
//! - Chat-completion chunk parsing
//! - ScriptedModelService for tests

pub mod client;
pub mod openai;
pub mod streaming;

pub use client::{
    Fragment, FragmentKind, FragmentStream, ModelService, ScriptedModelService, ScriptedStep, collect_answer,
};
pub use openai::OpenAiCompatibleClient;
pub use streaming::{DONE_MARKER, StreamParser};
