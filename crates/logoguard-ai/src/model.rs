//! Abstract seam over the remote visual-comparison capability.
//!
//! The analysis client only sees this trait, so tests substitute a
//! deterministic double and the Gemini backend stays swappable.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// One inline image part: base64 body with its media type, prefix already
/// stripped by the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// A single visual-comparison request: instructions, two encoded images, and
/// the structured-output contract the model must honor.
#[derive(Debug, Clone)]
pub struct VisionRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub images: Vec<InlineImage>,
    pub response_schema: Value,
}

/// Raw model response; `text` is expected to be a serialized object
/// conforming to the response schema.
#[derive(Debug, Clone)]
pub struct VisionResponse {
    pub text: Option<String>,
}

/// Failures raised by the remote-call collaborator itself. Propagated
/// unchanged — no retry at this layer.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model endpoint returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// The remote visual-comparison capability.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Issue one generation call. The credential is passed per call so the
    /// client can verify its presence before any network activity happens.
    async fn generate(
        &self,
        credential: &str,
        request: &VisionRequest,
    ) -> Result<VisionResponse, ModelError>;
}
