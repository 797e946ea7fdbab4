//! Prompt System - fixed templates rendered with Handlebars
//!
//! Two prompts exist: one for the retrying generation loop, which wants a
//! bare JSON list, and one for the stream relay, which asks the model to
//! narrate before emitting a fenced list.

mod render;
mod templates;

pub use render::{PromptKind, PromptRenderer};
pub use templates::{GENERATE_TEMPLATE, STREAM_TEMPLATE};
