//! Structured-output contract for the remote visual-comparison model.
//!
//! The schema is supplied to the model as an output-shape constraint when the
//! request is issued, and independently used here to validate the parsed
//! response before it is trusted. Parsing goes through an untyped
//! `serde_json::Value` intermediate, then field-by-field validation — never
//! blind deserialization.

use serde_json::{Value, json};
use thiserror::Error;

use crate::report::{AnalysisResult, Defect, Verdict};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` has the wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// The response schema sent to the model, in the Gemini structured-output
/// dialect (uppercase type tags).
///
/// `verdict`, `confidence`, `reasoning`, and `defects` are required; a defect
/// requires only `description` — `box_2d` is optional so that the model can
/// report a discrepancy it cannot localize.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "verdict": {
                "type": "STRING",
                "enum": ["PASS", "FAIL", "UNCERTAIN"],
                "description": "Final verdict. PASS only if the print is physically intact.",
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence score between 0 and 100.",
            },
            "reasoning": {
                "type": "STRING",
                "description": "Detailed explanation of the verdict, including how environmental factors were ruled out.",
            },
            "defects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "description": {
                            "type": "STRING",
                            "description": "Specific description of the physical defect.",
                        },
                        "box_2d": {
                            "type": "ARRAY",
                            "items": { "type": "INTEGER" },
                            "description": "Bounding box [ymin, xmin, ymax, xmax] on a 0-1000 scale, relative to the inspection photo.",
                        },
                    },
                    "required": ["description"],
                },
                "description": "All confirmed physical defects. Empty on PASS.",
            },
        },
        "required": ["verdict", "confidence", "reasoning", "defects"],
    })
}

/// Parse and validate a raw response payload into an [`AnalysisResult`].
///
/// - an unrecognized `verdict` literal degrades to `UNCERTAIN`, not an error
/// - a missing `defects` field is an empty list, not an error
/// - a malformed `box_2d` drops only that defect's box, never the result
pub fn parse_result(text: &str) -> Result<AnalysisResult, SchemaError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
    validate(&value)
}

/// Validate an already-parsed response value against the contract.
pub fn validate(value: &Value) -> Result<AnalysisResult, SchemaError> {
    let obj = value.as_object().ok_or(SchemaError::NotAnObject)?;

    let verdict = obj
        .get("verdict")
        .ok_or(SchemaError::MissingField("verdict"))?
        .as_str()
        .ok_or(SchemaError::WrongType {
            field: "verdict",
            expected: "string",
        })?;
    let verdict = Verdict::from_literal(verdict);

    let confidence = obj
        .get("confidence")
        .ok_or(SchemaError::MissingField("confidence"))?
        .as_f64()
        .ok_or(SchemaError::WrongType {
            field: "confidence",
            expected: "number",
        })?;

    let reasoning = obj
        .get("reasoning")
        .ok_or(SchemaError::MissingField("reasoning"))?
        .as_str()
        .ok_or(SchemaError::WrongType {
            field: "reasoning",
            expected: "string",
        })?
        .to_string();

    let defects = match obj.get("defects") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut defects = Vec::with_capacity(items.len());
            for item in items {
                defects.push(validate_defect(item)?);
            }
            defects
        }
        Some(_) => {
            return Err(SchemaError::WrongType {
                field: "defects",
                expected: "array",
            });
        }
    };

    Ok(AnalysisResult {
        verdict,
        confidence,
        reasoning,
        defects,
    })
}

fn validate_defect(item: &Value) -> Result<Defect, SchemaError> {
    let obj = item.as_object().ok_or(SchemaError::WrongType {
        field: "defects",
        expected: "array of objects",
    })?;

    let description = obj
        .get("description")
        .ok_or(SchemaError::MissingField("description"))?
        .as_str()
        .ok_or(SchemaError::WrongType {
            field: "description",
            expected: "string",
        })?
        .to_string();

    // A box that is absent, not an array, or contains non-integers is simply
    // dropped; the defect survives description-only.
    let box_2d = obj.get("box_2d").and_then(|v| v.as_array()).and_then(|arr| {
        arr.iter()
            .map(|v| v.as_i64())
            .collect::<Option<Vec<i64>>>()
    });

    Ok(Defect {
        description,
        box_2d,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_schema_requires_contract_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["verdict", "confidence", "reasoning", "defects"]);

        // box_2d stays optional per defect.
        let defect_required = &schema["properties"]["defects"]["items"]["required"];
        assert_eq!(defect_required, &json!(["description"]));
    }

    #[test]
    fn parses_full_response() {
        let result = parse_result(
            r#"{"verdict":"FAIL","confidence":92,"reasoning":"ink missing","defects":[{"description":"missing stroke","box_2d":[10,10,50,60]}]}"#,
        )
        .unwrap();
        assert_eq!(result.verdict, Verdict::Fail);
        assert_eq!(result.confidence, 92.0);
        assert_eq!(result.reasoning, "ink missing");
        assert_eq!(result.defects.len(), 1);
        assert_eq!(result.defects[0].box_2d.as_deref(), Some(&[10, 10, 50, 60][..]));
    }

    #[test]
    fn unknown_verdict_is_uncertain_not_error() {
        let result = parse_result(
            r#"{"verdict":"MAYBE","confidence":50,"reasoning":"unclear","defects":[]}"#,
        )
        .unwrap();
        assert_eq!(result.verdict, Verdict::Uncertain);
    }

    #[test]
    fn omitted_defects_default_to_empty() {
        let result =
            parse_result(r#"{"verdict":"PASS","confidence":99,"reasoning":"clean"}"#).unwrap();
        assert!(result.defects.is_empty());
    }

    #[test]
    fn null_defects_default_to_empty() {
        let result = parse_result(
            r#"{"verdict":"PASS","confidence":99,"reasoning":"clean","defects":null}"#,
        )
        .unwrap();
        assert!(result.defects.is_empty());
    }

    #[test]
    fn missing_verdict_is_an_error() {
        let err = parse_result(r#"{"confidence":10,"reasoning":"x","defects":[]}"#).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("verdict")));
    }

    #[test]
    fn non_numeric_confidence_is_an_error() {
        let err = parse_result(
            r#"{"verdict":"PASS","confidence":"high","reasoning":"x","defects":[]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::WrongType { field: "confidence", .. }
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            parse_result("not json at all").unwrap_err(),
            SchemaError::InvalidJson(_)
        ));
    }

    #[test]
    fn non_array_defects_is_an_error() {
        let err = parse_result(
            r#"{"verdict":"FAIL","confidence":80,"reasoning":"x","defects":"many"}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::WrongType { field: "defects", .. }
        ));
    }

    #[test]
    fn malformed_box_keeps_the_defect() {
        let result = parse_result(
            r#"{"verdict":"FAIL","confidence":80,"reasoning":"x","defects":[{"description":"smudge","box_2d":"10,10,50,60"}]}"#,
        )
        .unwrap();
        assert_eq!(result.defects[0].description, "smudge");
        assert!(result.defects[0].box_2d.is_none());
    }

    #[test]
    fn non_integer_box_entries_drop_the_box() {
        let result = parse_result(
            r#"{"verdict":"FAIL","confidence":80,"reasoning":"x","defects":[{"description":"smudge","box_2d":[10,"a",50,60]}]}"#,
        )
        .unwrap();
        assert!(result.defects[0].box_2d.is_none());
    }

    #[test]
    fn confidence_is_not_clamped() {
        let result = parse_result(
            r#"{"verdict":"PASS","confidence":150,"reasoning":"x","defects":[]}"#,
        )
        .unwrap();
        assert_eq!(result.confidence, 150.0);
    }
}
