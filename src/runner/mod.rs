//! Runner module - drives the model, extractor and checker.
//!
//! This module provides:
//! - GenerationLoop: retries whole rounds until a name passes or the ceiling is hit
//! - LoopPhase: the loop's explicit state machine
//! - StreamRelay: a single attempt that forwards model output as it arrives

mod generation_loop;
mod stream_relay;

pub use generation_loop::{GenerationLoop, LoopPhase};
pub use stream_relay::{EventStream, StreamRelay};
