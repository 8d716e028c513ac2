//! Text generation — external model capability behind a trait.
//!
//! The capability is optional: `from_env` returns `None` when no API key is
//! configured, and the synthesis factory then routes straight to the
//! heuristic producer. Callers own retry/backoff policy; this module makes a
//! single attempt per call.

use crate::constants::{
    GENERATION_MAX_TOKENS, GENERATION_MODEL, GENERATION_TEMPERATURE, GENERATION_TIMEOUT,
};
use crate::error::{PersonaError, PersonaResult};

/// Black-box text generation. Implementations may fail; the synthesis layer
/// absorbs every failure.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, system_instructions: &str) -> PersonaResult<String>;
}

/// Chat-completions generator against the OpenAI API.
pub struct OpenAiGenerator {
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: GENERATION_MODEL.to_string(),
        }
    }

    /// Build from `OPENAI_API_KEY`. `None` when the key is absent — persona
    /// generation then runs heuristically.
    pub fn from_env() -> Option<Box<dyn TextGenerator>> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                tracing::info!("OpenAI API initialized");
                Some(Box::new(Self::new(key)))
            }
            _ => {
                tracing::warn!("OpenAI API key not found, using heuristic generation");
                None
            }
        }
    }
}

impl TextGenerator for OpenAiGenerator {
    fn generate(&self, prompt: &str, system_instructions: &str) -> PersonaResult<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_instructions},
                {"role": "user", "content": prompt}
            ],
            "max_tokens": GENERATION_MAX_TOKENS,
            "temperature": GENERATION_TEMPERATURE,
        });

        let mut response = ureq::post("https://api.openai.com/v1/chat/completions")
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .config()
            .timeout_global(Some(GENERATION_TIMEOUT))
            .build()
            .send(serde_json::to_vec(&body)?.as_slice())
            .map_err(|e| PersonaError::Generation(e.to_string()))?;

        let payload: serde_json::Value = response
            .body_mut()
            .read_json()
            .map_err(|e| PersonaError::Generation(e.to_string()))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| PersonaError::Generation("malformed completion response".to_string()))
    }
}
