//! OpenAI-compatible chat completion client
//!
//! Always requests a streamed completion: thinking models only expose their
//! reasoning on the stream, and `invoke` just drains it.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use reqwest_eventsource::{Event, EventSource, retry};
use serde_json::{Value, json};

use crate::config::LlmConfig;
use crate::error::{NamesmithError, Result};
use crate::llm::client::{FragmentStream, ModelService, collect_answer};
use crate::llm::streaming::StreamParser;

/// Client for any endpoint speaking the `/chat/completions` protocol
pub struct OpenAiCompatibleClient {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl OpenAiCompatibleClient {
    /// Create a client, reading the API key from `config.api_key_env`
    pub fn new(config: LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| NamesmithError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: String, config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| NamesmithError::Llm(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the request body for one prompt
    fn build_request(&self, prompt: &str) -> Value {
        json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": true,
            "enable_thinking": self.config.enable_thinking
        })
    }
}

/// Map an event source failure onto the crate error
async fn upstream_error(err: reqwest_eventsource::Error) -> NamesmithError {
    match err {
        reqwest_eventsource::Error::InvalidStatusCode(status, response) => {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            NamesmithError::Api {
                status: status.as_u16(),
                message,
            }
        }
        other => NamesmithError::Llm(other.to_string()),
    }
}

/// Turn raw server-sent events into fragments.
///
/// Ends with `StreamInterrupted` if the connection closes before the model
/// signalled completion.
fn fragment_stream(mut source: EventSource) -> FragmentStream {
    Box::pin(async_stream::stream! {
        let mut parser = StreamParser::new();

        while let Some(event) = source.next().await {
            match event {
                Ok(Event::Open) => log::debug!("Model stream opened"),
                Ok(Event::Message(message)) => {
                    match parser.process_data(&message.data) {
                        Ok(fragments) => {
                            for fragment in fragments {
                                yield Ok(fragment);
                            }
                        }
                        Err(e) => {
                            source.close();
                            yield Err(e);
                            return;
                        }
                    }
                    if parser.is_done() {
                        break;
                    }
                }
                Err(reqwest_eventsource::Error::StreamEnded) => break,
                Err(e) => {
                    source.close();
                    log::warn!("Model stream failed: {}", e);
                    yield Err(upstream_error(e).await);
                    return;
                }
            }
        }
        source.close();
        log::debug!("Model stream finished: {:?}", parser.finish_reason());

        if !parser.is_complete() {
            yield Err(NamesmithError::StreamInterrupted(
                "model stream closed before completion".to_string(),
            ));
        }
    })
}

#[async_trait]
impl ModelService for OpenAiCompatibleClient {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let stream = self.open_stream(prompt).await?;
        collect_answer(stream).await
    }

    async fn open_stream(&self, prompt: &str) -> Result<FragmentStream> {
        let builder = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.build_request(prompt));

        let mut source = EventSource::new(builder)
            .map_err(|e| NamesmithError::Llm(format!("Failed to open model stream: {}", e)))?;
        source.set_retry_policy(Box::new(retry::Never));

        Ok(fragment_stream(source))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

impl std::fmt::Debug for OpenAiCompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish()
    }
}
