//! Model service boundary and a scripted test double

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

use crate::error::{NamesmithError, Result};

/// Which part of the model output a fragment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Thinking text, shown live but never parsed
    Reasoning,
    /// Final answer text, accumulated and parsed
    Answer,
}

/// One incremental piece of model output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub kind: FragmentKind,
}

impl Fragment {
    pub fn reasoning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FragmentKind::Reasoning,
        }
    }

    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FragmentKind::Answer,
        }
    }

    pub fn is_reasoning(&self) -> bool {
        self.kind == FragmentKind::Reasoning
    }
}

/// Incremental model output; an `Err` item ends the stream
pub type FragmentStream = BoxStream<'static, Result<Fragment>>;

/// Stateless text-completion service - each call is independent
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Complete a prompt and return the final answer text
    async fn invoke(&self, prompt: &str) -> Result<String>;

    /// Open an incremental response for a prompt
    async fn open_stream(&self, prompt: &str) -> Result<FragmentStream>;

    /// Model identifier, for logs
    fn model(&self) -> &str;
}

/// Drain a fragment stream, keeping only answer text
pub async fn collect_answer(mut stream: FragmentStream) -> Result<String> {
    let mut answer = String::new();
    while let Some(fragment) = stream.next().await {
        let fragment = fragment?;
        if fragment.is_reasoning() {
            log::debug!("reasoning: {}", fragment.text);
        } else {
            answer.push_str(&fragment.text);
        }
    }
    Ok(answer)
}

/// One scripted item of a fragment stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedStep {
    Fragment(Fragment),
    /// Yield an upstream error at this point
    Fail(String),
}

/// Model service returning queued responses, for tests and dry runs.
///
/// Every prompt it receives is recorded.
#[derive(Debug, Default)]
pub struct ScriptedModelService {
    responses: Mutex<VecDeque<std::result::Result<String, String>>>,
    streams: Mutex<VecDeque<std::result::Result<Vec<ScriptedStep>, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModelService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful `invoke` response
    pub fn with_response(self, text: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Ok(text.into()));
        self
    }

    /// Queue a failing `invoke`
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Err(message.into()));
        self
    }

    /// Queue a fragment stream for `open_stream`
    pub fn with_stream(self, steps: Vec<ScriptedStep>) -> Self {
        lock(&self.streams).push_back(Ok(steps));
        self
    }

    /// Queue an `open_stream` that fails before any fragment
    pub fn with_stream_failure(self, message: impl Into<String>) -> Self {
        lock(&self.streams).push_back(Err(message.into()));
        self
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    fn record(&self, prompt: &str) {
        lock(&self.prompts).push(prompt.to_string());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl ModelService for ScriptedModelService {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        self.record(prompt);
        match lock(&self.responses).pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(NamesmithError::Llm(message)),
            None => Err(NamesmithError::Llm("no scripted response left".to_string())),
        }
    }

    async fn open_stream(&self, prompt: &str) -> Result<FragmentStream> {
        self.record(prompt);
        let steps = match lock(&self.streams).pop_front() {
            Some(Ok(steps)) => steps,
            Some(Err(message)) => return Err(NamesmithError::Llm(message)),
            None => return Err(NamesmithError::Llm("no scripted stream left".to_string())),
        };

        let items = steps.into_iter().map(|step| match step {
            ScriptedStep::Fragment(fragment) => Ok(fragment),
            ScriptedStep::Fail(message) => Err(NamesmithError::Llm(message)),
        });
        Ok(stream::iter(items).boxed())
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
