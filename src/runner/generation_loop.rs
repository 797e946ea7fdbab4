//! Generation loop - generate, screen, and regenerate whole rounds.
//!
//! The loop stops as soon as one candidate of the current round passes, or
//! after `MAX_ROUNDS` rounds. Failing candidates of the final round stay in
//! the result tagged `fail`; there is no per-candidate regeneration.

use std::sync::Arc;

use crate::compliance::ComplianceChecker;
use crate::domain::{GenerationRequest, LoopState};
use crate::error::Result;
use crate::extract::extract_candidates;
use crate::llm::ModelService;
use crate::prompt::{PromptKind, PromptRenderer};

/// States of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Ask the model for a fresh round of candidates
    Generating,
    /// Screen the current round
    Checking,
    /// Nothing passed and rounds remain
    Retrying,
    /// Terminal
    Done,
}

impl LoopPhase {
    /// Transition function; pure, so it can be tested without a model
    pub fn next(self, state: &LoopState) -> LoopPhase {
        match self {
            LoopPhase::Generating => LoopPhase::Checking,
            LoopPhase::Checking => {
                if state.has_pass() || state.retries_exhausted() {
                    LoopPhase::Done
                } else {
                    LoopPhase::Retrying
                }
            }
            LoopPhase::Retrying => LoopPhase::Generating,
            LoopPhase::Done => LoopPhase::Done,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoopPhase::Done)
    }
}

/// GenerationLoop runs the generate/check/retry state machine for one request.
///
/// Each round:
/// 1. Renders the prompt and calls the model
/// 2. Extracts candidates, replacing the previous round's
/// 3. Screens them for compliance
/// 4. Stops on any pass or at the retry ceiling, otherwise regenerates
///
/// Model errors are not caught here; they end the run and reach the caller.
pub struct GenerationLoop<M>
where
    M: ModelService + ?Sized,
{
    /// Model service for completions
    model: Arc<M>,
    /// Compliance screening for each round
    checker: ComplianceChecker,
    /// Prompt renderer for building prompts
    prompt_renderer: PromptRenderer,
}

impl<M> GenerationLoop<M>
where
    M: ModelService + ?Sized,
{
    /// Create a loop with the default compliance rule
    pub fn new(model: Arc<M>) -> Self {
        Self::with_checker(model, ComplianceChecker::default())
    }

    /// Create a loop with a custom compliance checker
    pub fn with_checker(model: Arc<M>, checker: ComplianceChecker) -> Self {
        Self {
            model,
            checker,
            prompt_renderer: PromptRenderer::new(),
        }
    }

    /// Run until a candidate passes or the retry ceiling is reached.
    pub async fn run(&self, request: GenerationRequest) -> Result<LoopState> {
        let mut state = LoopState::new(request);
        let mut phase = LoopPhase::Generating;

        while !phase.is_terminal() {
            match phase {
                LoopPhase::Generating => self.generate(&mut state).await?,
                LoopPhase::Checking => self.check(&mut state),
                LoopPhase::Retrying => {
                    log::info!(
                        "Round {} produced no passing name, regenerating",
                        state.retry_count
                    );
                }
                LoopPhase::Done => break,
            }
            phase = phase.next(&state);
        }

        log::info!(
            "Generation finished after {} round(s): {} candidate(s), {} passing",
            state.retry_count,
            state.candidates.len(),
            state.pass_count()
        );
        Ok(state)
    }

    /// One round: prompt the model and replace the candidates
    async fn generate(&self, state: &mut LoopState) -> Result<()> {
        let prompt = self.prompt_renderer.render(PromptKind::Generate, &state.request)?;
        log::debug!("Prompting {} (round {})", self.model.model(), state.retry_count + 1);

        let raw = self.model.invoke(&prompt).await?;

        state.candidates = extract_candidates(&raw);
        state.retry_count += 1;
        log::info!(
            "Round {} produced {} candidate(s)",
            state.retry_count,
            state.candidates.len()
        );
        Ok(())
    }

    fn check(&self, state: &mut LoopState) {
        state.error_message = self.checker.check(&mut state.candidates);
    }
}
