//! Defect box → overlay region mapping.
//!
//! The remote model reports bounding boxes on a fixed 0–1000 grid, so the
//! mapping to display percentages never needs the inspection photo's pixel
//! dimensions. Each coordinate divides by 10; no clamping is applied —
//! inverted or out-of-range boxes yield out-of-range percentages that the
//! rendering surface must tolerate.

use serde::{Deserialize, Serialize};

/// Proportional overlay rectangle, in percent of the rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRegion {
    pub top_pct: f64,
    pub left_pct: f64,
    pub height_pct: f64,
    pub width_pct: f64,
}

/// Map a `(top, left, bottom, right)` box on the 0–1000 grid to percentages.
///
/// Returns `None` if the box is absent or not exactly 4 elements — the defect
/// is then rendered description-only, never an error.
pub fn to_region(box_2d: Option<&[i64]>) -> Option<OverlayRegion> {
    let b = box_2d?;
    if b.len() != 4 {
        return None;
    }
    // Subtract in f64: the coordinates come verbatim from the model's
    // response, and extreme values must map to extreme percentages, not an
    // integer overflow.
    let (top, left, bottom, right) = (b[0] as f64, b[1] as f64, b[2] as f64, b[3] as f64);
    Some(OverlayRegion {
        top_pct: top / 10.0,
        left_pct: left / 10.0,
        height_pct: (bottom - top) / 10.0,
        width_pct: (right - left) / 10.0,
    })
}
