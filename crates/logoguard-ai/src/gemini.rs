//! Gemini `generateContent` backend for the vision-model seam.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::model::{ModelError, VisionModel, VisionRequest, VisionResponse};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model for visual defect reasoning.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Thinking budget in tokens: enough for geometric reasoning without the
/// latency of an unbounded budget.
const THINKING_BUDGET: u32 = 1024;

/// Vision backend over the Gemini REST API.
pub struct GeminiModel {
    client: reqwest::Client,
    model: String,
}

impl Default for GeminiModel {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl GeminiModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            model: model.into(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl VisionModel for GeminiModel {
    async fn generate(
        &self,
        credential: &str,
        request: &VisionRequest,
    ) -> Result<VisionResponse, ModelError> {
        let url = format!("{API_BASE}/{}:generateContent?key={credential}", self.model);
        let body = request_body(request);

        debug!(model = %self.model, images = request.images.len(), "dispatching generateContent");
        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ModelError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let response: Value = resp.json().await?;
        Ok(VisionResponse {
            text: extract_text(&response),
        })
    }
}

/// Build the `generateContent` request body: prompt text followed by the two
/// inline images, the system instruction, and the structured-output config.
fn request_body(request: &VisionRequest) -> Value {
    let mut parts = vec![json!({ "text": request.prompt })];
    for image in &request.images {
        parts.push(json!({
            "inlineData": { "mimeType": image.mime_type, "data": image.data }
        }));
    }

    json!({
        "contents": [{ "parts": parts }],
        "systemInstruction": { "parts": [{ "text": request.system_instruction }] },
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.response_schema,
            "thinkingConfig": { "thinkingBudget": THINKING_BUDGET },
        },
    })
}

/// Pull the first candidate's text part, if any.
fn extract_text(response: &Value) -> Option<String> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
}
