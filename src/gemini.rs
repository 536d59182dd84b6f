use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("status={status} body={body}")]
    Status { status: u16, body: String },
    #[error("malformed response envelope: {0}")]
    Decode(String),
}

/// The model endpoint, seen from the pipeline.
///
/// `Ok(None)` means the endpoint answered but returned no text. Errors are
/// transport failures and must reach the caller.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str, response_schema: &Value) -> Result<Option<String>, GeminiError>;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(transport_error)?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_base.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// reqwest errors print the request URL; keep it out of anything we log.
fn transport_error(e: reqwest::Error) -> GeminiError {
    GeminiError::Http(e.without_url().to_string())
}

pub fn request_body(prompt: &str, response_schema: &Value, temperature: f32) -> Value {
    json!({
        "contents": [{
            "parts": [{"text": prompt}]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema,
            "temperature": temperature,
            "candidateCount": 1
        }
    })
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, prompt: &str, response_schema: &Value) -> Result<Option<String>, GeminiError> {
        let url = self.endpoint();
        info!("🔗 Making request to: {}", url);

        let body = request_body(prompt, response_schema, self.temperature);
        debug!("📤 Request body: {}", serde_json::to_string_pretty(&body).unwrap_or_default());

        let response = self.client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        let response_text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            error!("❌ API Error response: {}", response_text);
            return Err(GeminiError::Status { status: status.as_u16(), body: response_text });
        }
        debug!("📥 Raw Gemini API response: {}", response_text);

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::Decode(e.to_string()))?;
        let text = first_text(&parsed);
        if text.is_none() {
            info!("⚠️ No text content found in response");
        }
        Ok(text)
    }
}

/// Serves a fixed reply without touching the network, for running without a key.
pub struct OfflineBackend;

pub const OFFLINE_REPLY: &str = r#"{"html":"<main class=\"demo\"><h1>WebCrafter demo</h1><p>Set GEMINI_API_KEY to generate real components.</p></main>","css":"body{margin:0;font-family:system-ui,-apple-system,'Segoe UI',Roboto,sans-serif;background:#cbd5e1;color:#334155}.demo{max-width:40rem;margin:4rem auto;padding:2rem;background:#fff;border-top:4px solid #2dd4bf}","javascript":""}"#;

#[async_trait]
impl CompletionBackend for OfflineBackend {
    async fn complete(&self, prompt: &str, _response_schema: &Value) -> Result<Option<String>, GeminiError> {
        info!("Using demo mode - returning canned component for a {} char prompt", prompt.len());
        Ok(Some(OFFLINE_REPLY.to_string()))
    }
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate { #[serde(default)] content: Content }

#[derive(Debug, Deserialize, Default)]
struct Content { #[serde(default)] parts: Vec<Part> }

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    #[allow(dead_code)]
    Other(Value),
}

fn first_text(resp: &GeminiResponse) -> Option<String> {
    resp.candidates
        .iter()
        .flat_map(|c| c.content.parts.iter())
        .find_map(|p| match p {
            Part::Text { text } => Some(text.clone()),
            Part::Other(_) => None,
        })
}
