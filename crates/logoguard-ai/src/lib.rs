//! Remote visual-comparison layer: the vision-model abstraction, the Gemini
//! backend, and the analysis client that drives one inspection call.

pub mod client;
pub mod gemini;
pub mod model;
pub mod prompt;

pub use client::{AnalysisClient, AnalysisError};
pub use gemini::GeminiModel;
pub use model::{InlineImage, ModelError, VisionModel, VisionRequest, VisionResponse};
