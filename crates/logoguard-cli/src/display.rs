//! Terminal rendering of an inspection report.
//!
//! The overlay percentages printed here are the same proportional regions a
//! graphical surface would use to draw bounding boxes over the photo.

use chrono::Utc;
use logoguard_core::AnalysisResult;
use serde_json::{Value, json};

/// Print a human-readable inspection report.
pub fn print_report(result: &AnalysisResult) {
    println!("=== {} ===", result.verdict.as_str());
    println!("Confidence: {}%", result.confidence.round());
    println!();
    println!("Reasoning:");
    println!("  {}", result.reasoning);
    println!();

    if result.defects.is_empty() {
        println!("No visual defects were found.");
        return;
    }

    println!("Detected defects:");
    for (idx, defect) in result.defects.iter().enumerate() {
        match defect.region() {
            Some(r) => println!(
                "  {}. {}  [top {:.1}%  left {:.1}%  height {:.1}%  width {:.1}%]",
                idx + 1,
                defect.description,
                r.top_pct,
                r.left_pct,
                r.height_pct,
                r.width_pct,
            ),
            None => println!("  {}. {}  (not localized)", idx + 1, defect.description),
        }
    }
}

/// Build the machine-readable report emitted by `--json`.
pub fn json_report(result: &AnalysisResult, model: &str) -> Value {
    let defects: Vec<Value> = result
        .defects
        .iter()
        .map(|d| {
            json!({
                "description": d.description,
                "box_2d": d.box_2d,
                "region": d.region(),
            })
        })
        .collect();

    json!({
        "verdict": result.verdict.as_str(),
        "confidence": result.confidence,
        "reasoning": result.reasoning,
        "defects": defects,
        "model": model,
        "inspected_at": Utc::now().to_rfc3339(),
    })
}
