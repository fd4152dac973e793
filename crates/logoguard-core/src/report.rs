//! Inspection result types shared across the pipeline.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, OverlayRegion};

/// Coarse outcome of one inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
    Uncertain,
}

impl Verdict {
    /// Map a wire literal to a verdict, case-sensitively.
    ///
    /// Any unrecognized literal degrades to [`Verdict::Uncertain`] rather than
    /// failing — an unexpected-but-present verdict is not a contract breach.
    pub fn from_literal(s: &str) -> Self {
        match s {
            "PASS" => Self::Pass,
            "FAIL" => Self::Fail,
            _ => Self::Uncertain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Uncertain => "UNCERTAIN",
        }
    }
}

/// A single reported physical discrepancy.
///
/// `box_2d` is `(top, left, bottom, right)` on the 0–1000 normalized grid.
/// A defect with an absent or malformed box is still valid; it simply has no
/// spatial region and is rendered description-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defect {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_2d: Option<Vec<i64>>,
}

impl Defect {
    /// Proportional overlay region for this defect, if it carries a usable box.
    pub fn region(&self) -> Option<OverlayRegion> {
        geometry::to_region(self.box_2d.as_deref())
    }
}

/// Terminal output of one successful analysis. Immutable once created.
///
/// `confidence` is expected in 0–100 but deliberately not clamped here;
/// a PASS verdict implies an empty defect list (producer invariant, assumed
/// rather than enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub confidence: f64,
    pub reasoning: String,
    pub defects: Vec<Defect>,
}
