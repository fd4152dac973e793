//! Analysis client: composes one visual-comparison request, invokes the
//! remote model, and validates its structured response.

use thiserror::Error;
use tracing::info;

use logoguard_core::schema::{self, SchemaError};
use logoguard_core::{AnalysisResult, ImageAsset, codec};

use crate::model::{InlineImage, ModelError, VisionModel, VisionRequest, VisionResponse};
use crate::prompt;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Missing credential: detected before any network activity.
    #[error("no API credential configured; check the environment settings")]
    MissingCredential,

    /// An asset yielded an empty encoded payload.
    #[error("the {0} image has no usable payload")]
    UnusablePayload(&'static str),

    /// Transport succeeded but the model returned no textual payload.
    #[error("the model returned an empty response")]
    EmptyResponse,

    /// Textual payload present but not parseable as the expected structure.
    #[error("malformed analysis response: {0}")]
    Malformed(#[from] SchemaError),

    /// Failure raised by the remote-call collaborator, propagated unchanged.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// One-shot analysis client over a [`VisionModel`].
///
/// The credential is injected at construction rather than read from a
/// process-wide lookup, so tests can substitute presence/absence freely.
pub struct AnalysisClient<M> {
    model: M,
    credential: Option<String>,
    output_language: String,
}

impl<M: VisionModel> AnalysisClient<M> {
    pub fn new(model: M, credential: Option<String>) -> Self {
        Self {
            model,
            credential,
            output_language: prompt::DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Set the language for all natural-language model output.
    pub fn with_output_language(mut self, language: impl Into<String>) -> Self {
        self.output_language = language.into();
        self
    }

    /// Compare the reference master against the inspection photo.
    ///
    /// Issues exactly one call to the remote model; failures propagate to the
    /// caller without retry.
    pub async fn analyze(
        &self,
        reference: &ImageAsset,
        inspection: &ImageAsset,
    ) -> Result<AnalysisResult, AnalysisError> {
        let credential = self
            .credential
            .as_deref()
            .ok_or(AnalysisError::MissingCredential)?;

        let reference_body = codec::encoded_body(reference);
        if reference_body.is_empty() {
            return Err(AnalysisError::UnusablePayload("reference"));
        }
        let inspection_body = codec::encoded_body(inspection);
        if inspection_body.is_empty() {
            return Err(AnalysisError::UnusablePayload("inspection"));
        }

        let request = VisionRequest {
            system_instruction: prompt::system_instruction(&self.output_language),
            prompt: prompt::task_prompt(&self.output_language),
            images: vec![
                InlineImage {
                    mime_type: reference.mime_type.clone(),
                    data: reference_body.to_string(),
                },
                InlineImage {
                    mime_type: inspection.mime_type.clone(),
                    data: inspection_body.to_string(),
                },
            ],
            response_schema: schema::response_schema(),
        };

        info!(language = %self.output_language, "requesting visual comparison");
        let VisionResponse { text } = self.model.generate(credential, &request).await?;

        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AnalysisError::EmptyResponse),
        };

        let result = schema::parse_result(&text)?;
        info!(
            verdict = result.verdict.as_str(),
            confidence = result.confidence,
            defects = result.defects.len(),
            "analysis complete"
        );
        Ok(result)
    }
}
