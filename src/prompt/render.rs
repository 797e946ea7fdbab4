//! Prompt Renderer - Render the fixed templates for a generation request

use handlebars::Handlebars;

use super::templates::{GENERATE_TEMPLATE, STREAM_TEMPLATE};
use crate::domain::GenerationRequest;
use crate::error::{NamesmithError, Result};

/// Which fixed template to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Retrying loop: JSON list only
    Generate,
    /// Stream relay: prose reasoning, then a fenced JSON list
    Stream,
}

impl PromptKind {
    pub fn template(&self) -> &'static str {
        match self {
            PromptKind::Generate => GENERATE_TEMPLATE,
            PromptKind::Stream => STREAM_TEMPLATE,
        }
    }
}

/// Renders prompt templates using Handlebars templating
pub struct PromptRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRenderer {
    /// Create a new PromptRenderer with default settings
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        // Every template variable must be supplied
        handlebars.set_strict_mode(true);
        // Keywords are plain text, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Render the prompt of the given kind for a request
    pub fn render(&self, kind: PromptKind, request: &GenerationRequest) -> Result<String> {
        self.handlebars
            .render_template(kind.template(), request)
            .map_err(|e| NamesmithError::Prompt(format!("Failed to render template: {}", e)))
    }
}

impl std::fmt::Debug for PromptRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptRenderer").finish()
    }
}
