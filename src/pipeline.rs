use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    gemini::{CompletionBackend, GeminiError},
    models::{GenerationRequest, GenerationResult},
    normalize::normalize,
    prompt::PromptSpec,
};

/// Description in, three code strings out.
#[derive(Clone)]
pub struct CodeGenerator {
    backend: Arc<dyn CompletionBackend>,
    spec: Arc<PromptSpec>,
}

impl CodeGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>, spec: Arc<PromptSpec>) -> Self {
        Self { backend, spec }
    }

    pub async fn generate_code(&self, request: &GenerationRequest) -> Result<GenerationResult, GeminiError> {
        let enhanced = normalize(&request.description);
        debug!("Normalized description ({} -> {} chars)", request.description.len(), enhanced.len());

        let prompt = self.spec.render(&enhanced);
        let structured = invoke(self.backend.as_ref(), &self.spec, &prompt).await?;
        let result = assemble(structured);
        if result.is_empty() {
            warn!("⚠️ Model produced no structured output, returning empty result");
        }
        info!(
            "✅ Generated code: html={} css={} javascript={} chars",
            result.html.len(),
            result.css.len(),
            result.javascript.len()
        );
        Ok(result)
    }
}

/// Sends the prompt and validates the reply against the three-field schema.
///
/// Transport failures are returned as errors. A reply that is not an object
/// with string `html`, `css` and `javascript` fields yields `Ok(None)`.
pub async fn invoke(
    backend: &dyn CompletionBackend,
    spec: &PromptSpec,
    prompt: &str,
) -> Result<Option<GenerationResult>, GeminiError> {
    let reply = backend.complete(prompt, spec.response_schema()).await?;
    Ok(reply.as_deref().and_then(parse_structured))
}

/// Deserializes a raw reply, tolerating a surrounding ```json fence.
pub fn parse_structured(raw: &str) -> Option<GenerationResult> {
    match serde_json::from_str::<GenerationResult>(strip_code_fence(raw)) {
        Ok(result) => Some(result),
        Err(e) => {
            warn!("⚠️ Model reply does not match the response schema: {}", e);
            None
        }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (```json, ```JSON, ...) up to the first newline.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Turns a missing structured reply into the all-empty result.
pub fn assemble(response: Option<GenerationResult>) -> GenerationResult {
    match response {
        Some(result) => result,
        None => GenerationResult {
            html: String::new(),
            css: String::new(),
            javascript: String::new(),
        },
    }
}
