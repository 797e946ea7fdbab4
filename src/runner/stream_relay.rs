//! Stream relay - one generation attempt, surfaced incrementally.
//!
//! Every model fragment is forwarded as a `Reasoning` event as soon as it
//! arrives. Answer fragments are also kept and, once the model finishes,
//! parsed and screened into a single terminal `Result` event. Any failure
//! ends the sequence with a single `Error` event instead. There is no retry.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream::BoxStream;

use crate::compliance::ComplianceChecker;
use crate::domain::{GenerationRequest, StreamEvent, annotate};
use crate::extract::extract_candidates;
use crate::llm::ModelService;
use crate::prompt::{PromptKind, PromptRenderer};

/// Ordered events of one attempt; the last one is always terminal
pub type EventStream = BoxStream<'static, StreamEvent>;

pub struct StreamRelay<M>
where
    M: ModelService + ?Sized + 'static,
{
    model: Arc<M>,
    checker: Arc<ComplianceChecker>,
    prompt_renderer: Arc<PromptRenderer>,
}

impl<M> StreamRelay<M>
where
    M: ModelService + ?Sized + 'static,
{
    pub fn new(model: Arc<M>) -> Self {
        Self::with_checker(model, ComplianceChecker::default())
    }

    pub fn with_checker(model: Arc<M>, checker: ComplianceChecker) -> Self {
        Self {
            model,
            checker: Arc::new(checker),
            prompt_renderer: Arc::new(PromptRenderer::new()),
        }
    }

    /// Start one attempt for a request.
    ///
    /// Nothing happens until the returned stream is polled. Dropping it
    /// early drops the upstream model stream with it.
    pub fn stream(&self, request: GenerationRequest) -> EventStream {
        let model = Arc::clone(&self.model);
        let checker = Arc::clone(&self.checker);
        let prompt_renderer = Arc::clone(&self.prompt_renderer);

        Box::pin(async_stream::stream! {
            let prompt = match prompt_renderer.render(PromptKind::Stream, &request) {
                Ok(prompt) => prompt,
                Err(e) => {
                    yield StreamEvent::error(e.to_string());
                    return;
                }
            };

            log::debug!("Opening stream on {}", model.model());
            let mut fragments = match model.open_stream(&prompt).await {
                Ok(fragments) => fragments,
                Err(e) => {
                    log::warn!("Model stream could not be opened: {}", e);
                    yield StreamEvent::error(e.to_string());
                    return;
                }
            };

            let mut answer = String::new();
            while let Some(fragment) = fragments.next().await {
                match fragment {
                    Ok(fragment) => {
                        if !fragment.is_reasoning() {
                            answer.push_str(&fragment.text);
                        }
                        yield StreamEvent::reasoning(fragment.text);
                    }
                    Err(e) => {
                        log::warn!("Model stream failed mid-answer: {}", e);
                        yield StreamEvent::error(e.to_string());
                        return;
                    }
                }
            }

            let mut candidates = extract_candidates(&answer);
            let error_message = checker.check(&mut candidates);
            log::info!("Stream attempt produced {} candidate(s)", candidates.len());

            match annotate(&candidates) {
                Ok(candidates) => {
                    yield StreamEvent::Result { candidates, error_message };
                }
                Err(e) => {
                    yield StreamEvent::error(e.to_string());
                }
            }
        })
    }
}
