//! Inspection workflow: the state machine that sequences image acquisition,
//! triggers analysis, and exposes the current phase to the presentation layer.
//!
//! At most one analysis call is outstanding per workflow instance. That is
//! enforced structurally: `trigger` takes `&mut self` and is only armed in
//! `Idle`, so a second trigger is unreachable while a call is in flight — no
//! lock needed. There is no cancellation and no timeout at this layer; the
//! workflow stays in `Analyzing` until the single call completes or fails.

use tracing::{info, warn};

use logoguard_ai::{AnalysisClient, VisionModel};
use logoguard_core::{AnalysisResult, ImageAsset};

/// Current phase of one inspection. Exactly one variant is active; the state's
/// payload lives on the variant, so "success with no result" is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Analyzing,
    Success(AnalysisResult),
    Error(String),
}

/// Drives one reference image against a stream of inspection photos.
///
/// The two image assets live outside the state enum: they are captured by the
/// operator, survive a partial reset, and are immutable values once set.
pub struct InspectionWorkflow<M> {
    client: AnalysisClient<M>,
    reference: Option<ImageAsset>,
    inspection: Option<ImageAsset>,
    state: WorkflowState,
}

impl<M: VisionModel> InspectionWorkflow<M> {
    pub fn new(client: AnalysisClient<M>) -> Self {
        Self {
            client,
            reference: None,
            inspection: None,
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn reference_asset(&self) -> Option<&ImageAsset> {
        self.reference.as_ref()
    }

    pub fn inspection_asset(&self) -> Option<&ImageAsset> {
        self.inspection.as_ref()
    }

    /// Set or clear the reference master image.
    pub fn set_reference_asset(&mut self, asset: Option<ImageAsset>) {
        self.reference = asset;
    }

    /// Set or clear the inspection photo.
    pub fn set_inspection_asset(&mut self, asset: Option<ImageAsset>) {
        self.inspection = asset;
    }

    /// Run one analysis if the workflow is armed.
    ///
    /// Only reachable from `Idle` with both assets present; anything else is a
    /// guarded no-op, not a transition. Ends in `Success(result)` or
    /// `Error(message)`.
    pub async fn trigger(&mut self) {
        if self.state != WorkflowState::Idle {
            warn!("trigger ignored: workflow not idle");
            return;
        }
        let (Some(reference), Some(inspection)) = (&self.reference, &self.inspection) else {
            warn!("trigger ignored: missing image asset");
            return;
        };

        self.state = WorkflowState::Analyzing;
        info!("inspection started");
        match self.client.analyze(reference, inspection).await {
            Ok(result) => {
                info!(verdict = result.verdict.as_str(), "inspection finished");
                self.state = WorkflowState::Success(result);
            }
            Err(err) => {
                warn!(error = %err, "inspection failed");
                self.state = WorkflowState::Error(err.to_string());
            }
        }
    }

    /// Return to `Idle` for the next photo: clears the inspection asset and
    /// any result or error, but keeps the reference — one master is commonly
    /// checked against many parts.
    pub fn reset(&mut self) {
        self.inspection = None;
        self.state = WorkflowState::Idle;
    }

    /// [`reset`](Self::reset) plus clearing the reference asset.
    pub fn full_reset(&mut self) {
        self.reference = None;
        self.reset();
    }
}
