//! Chat-completion stream chunk parsing.
//!
//! OpenAI-compatible endpoints stream server-sent events whose `data` is a
//! chunk object; thinking models put their reasoning in
//! `delta.reasoning_content` next to the usual `delta.content`:
//! ```text
//! data: {"choices":[{"index":0,"delta":{"reasoning_content":"..."},"finish_reason":null}]}
//! data: {"choices":[{"index":0,"delta":{"content":"..."},"finish_reason":null}]}
//! data: [DONE]
//! ```

use serde::Deserialize;

use crate::error::{NamesmithError, Result};
use crate::llm::client::Fragment;

/// Terminal `data` payload
pub const DONE_MARKER: &str = "[DONE]";

#[derive(Debug, Deserialize)]
struct ChatChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
    error: Option<ChunkError>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
    reasoning_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChunkError {
    message: String,
}

/// State tracker for one streamed completion
#[derive(Debug, Default)]
pub struct StreamParser {
    /// A choice reported a finish reason
    finish_reason: Option<String>,
    /// `[DONE]` was received
    done: bool,
}

impl StreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one `data` payload into fragments, reasoning before answer
    pub fn process_data(&mut self, data: &str) -> Result<Vec<Fragment>> {
        let data = data.trim();
        if data.is_empty() {
            return Ok(Vec::new());
        }
        if data == DONE_MARKER {
            self.done = true;
            return Ok(Vec::new());
        }

        let chunk: ChatChunk = serde_json::from_str(data)
            .map_err(|e| NamesmithError::Llm(format!("Malformed stream chunk: {}", e)))?;

        if let Some(error) = chunk.error {
            return Err(NamesmithError::Llm(error.message));
        }

        let mut fragments = Vec::new();
        for choice in chunk.choices {
            if let Some(reasoning) = choice.delta.reasoning_content
                && !reasoning.is_empty()
            {
                fragments.push(Fragment::reasoning(reasoning));
            }
            if let Some(content) = choice.delta.content
                && !content.is_empty()
            {
                fragments.push(Fragment::answer(content));
            }
            if choice.finish_reason.is_some() {
                self.finish_reason = choice.finish_reason;
            }
        }
        Ok(fragments)
    }

    /// `[DONE]` seen; nothing more will arrive
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The model signalled completion one way or the other
    pub fn is_complete(&self) -> bool {
        self.done || self.finish_reason.is_some()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.finish_reason.as_deref()
    }
}
