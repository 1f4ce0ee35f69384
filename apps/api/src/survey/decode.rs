//! Best-effort decoding of model output into a validated survey.
//!
//! The upstream producer is an external model with no formatting guarantee,
//! so field-level validation is fail-soft: every violation across all ten
//! elements is collected before returning, and every error variant carries
//! the original raw text unmodified for diagnostics and manual recovery.
//! No retries, no repair heuristics, no silent coercion.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::question::{GeneratedQuestion, QuestionBucket, QuestionType, SurveyResult};
use crate::models::startup::BURNING_PROBLEM_COUNT;
use crate::survey::policy::QuestionDistributionPolicy;

/// One field-level contract violation, located by a JSON-path-style string
/// such as `[3].type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
}

/// Typed decode failure. The raw model text is never discarded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("model output is not a JSON array: {message}")]
    MalformedJson { message: String, raw: String },

    #[error("expected {expected} questions, got {actual}")]
    WrongCount {
        expected: usize,
        actual: usize,
        raw: String,
    },

    #[error("{} field-level contract violations in model output", .violations.len())]
    SchemaViolation {
        violations: Vec<FieldViolation>,
        raw: String,
    },

    #[error(
        "expected {expected} burning-problem references, observed {observed} (histogram {histogram:?})"
    )]
    DistributionMismatch {
        expected: usize,
        observed: usize,
        /// Reference counts for burning problems 1, 2, 3.
        histogram: [usize; BURNING_PROBLEM_COUNT],
        raw: String,
    },
}

impl DecodeError {
    /// The model's original output, unmodified.
    pub fn raw(&self) -> &str {
        match self {
            DecodeError::MalformedJson { raw, .. }
            | DecodeError::WrongCount { raw, .. }
            | DecodeError::SchemaViolation { raw, .. }
            | DecodeError::DistributionMismatch { raw, .. } => raw,
        }
    }
}

/// Parses and validates raw model text against the active policy.
///
/// Check order: JSON parse → element count → field-level schema
/// (aggregated) → burning-problem distribution.
pub fn decode(
    raw_text: &str,
    policy: &QuestionDistributionPolicy,
) -> Result<SurveyResult, DecodeError> {
    let parsed: Value = match serde_json::from_str(raw_text) {
        Ok(value) => value,
        Err(e) => {
            return Err(DecodeError::MalformedJson {
                message: e.to_string(),
                raw: raw_text.to_string(),
            });
        }
    };

    let items = match parsed.as_array() {
        Some(items) => items,
        None => {
            return Err(DecodeError::MalformedJson {
                message: "top-level value is not an array".to_string(),
                raw: raw_text.to_string(),
            });
        }
    };

    if items.len() != policy.total_questions {
        return Err(DecodeError::WrongCount {
            expected: policy.total_questions,
            actual: items.len(),
            raw: raw_text.to_string(),
        });
    }

    let mut violations = Vec::new();
    let mut questions = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if let Some(question) = validate_item(index, item, policy, &mut violations) {
            questions.push(question);
        }
    }

    if !violations.is_empty() {
        return Err(DecodeError::SchemaViolation {
            violations,
            raw: raw_text.to_string(),
        });
    }

    let mut histogram = [0usize; BURNING_PROBLEM_COUNT];
    for question in &questions {
        if let Some(reference) = question.burning_problem_reference {
            histogram[(reference - 1) as usize] += 1;
        }
    }
    let observed: usize = histogram.iter().sum();

    if observed != policy.burning_problem_questions || histogram.iter().any(|&count| count == 0) {
        return Err(DecodeError::DistributionMismatch {
            expected: policy.burning_problem_questions,
            observed,
            histogram,
            raw: raw_text.to_string(),
        });
    }

    Ok(SurveyResult { questions })
}

/// Validates a single array element, pushing every violation found.
/// Returns the decoded question only when all fields were usable.
fn validate_item(
    index: usize,
    value: &Value,
    policy: &QuestionDistributionPolicy,
    violations: &mut Vec<FieldViolation>,
) -> Option<GeneratedQuestion> {
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            violations.push(FieldViolation {
                path: format!("[{index}]"),
                message: "expected a JSON object".to_string(),
            });
            return None;
        }
    };

    let text = match object.get("text").and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Some(text.to_string()),
        Some(_) => {
            violations.push(FieldViolation {
                path: format!("[{index}].text"),
                message: "text is empty".to_string(),
            });
            None
        }
        None => {
            violations.push(FieldViolation {
                path: format!("[{index}].text"),
                message: "missing or not a string".to_string(),
            });
            None
        }
    };

    let question_type = match object.get("type") {
        None => {
            violations.push(FieldViolation {
                path: format!("[{index}].type"),
                message: "missing".to_string(),
            });
            None
        }
        Some(value) => match serde_json::from_value::<QuestionType>(value.clone()) {
            Ok(question_type) if policy.allows(question_type) => Some(question_type),
            Ok(question_type) => {
                violations.push(FieldViolation {
                    path: format!("[{index}].type"),
                    message: format!(
                        "type '{}' is not allowed by the {} policy",
                        question_type.wire_name(),
                        policy.name
                    ),
                });
                None
            }
            Err(_) => {
                violations.push(FieldViolation {
                    path: format!("[{index}].type"),
                    message: format!("unrecognized question type {value}"),
                });
                None
            }
        },
    };

    let bucket = match object.get("bucket").and_then(Value::as_str) {
        None => {
            violations.push(FieldViolation {
                path: format!("[{index}].bucket"),
                message: "missing or not a string".to_string(),
            });
            None
        }
        Some(raw_bucket) => match raw_bucket.parse::<QuestionBucket>() {
            Ok(bucket) => Some(bucket),
            Err(e) => {
                violations.push(FieldViolation {
                    path: format!("[{index}].bucket"),
                    message: e.to_string(),
                });
                None
            }
        },
    };

    let reference = match object.get("burning_problem_reference") {
        None | Some(Value::Null) => Some(None),
        Some(value) => match value.as_u64() {
            Some(n @ 1..=3) => Some(Some(n as u8)),
            _ => {
                violations.push(FieldViolation {
                    path: format!("[{index}].burning_problem_reference"),
                    message: "must be 1, 2, 3, or null".to_string(),
                });
                None
            }
        },
    };

    // Cross-field: a burning-problem bucket must carry its own reference,
    // and nothing else may carry one.
    if let (Some(bucket), Some(reference)) = (&bucket, &reference) {
        match (bucket, reference) {
            (QuestionBucket::BurningProblem(n), Some(r)) if n == r => {}
            (QuestionBucket::BurningProblem(n), _) => {
                violations.push(FieldViolation {
                    path: format!("[{index}].burning_problem_reference"),
                    message: format!("bucket 'burning_problem_{n}' requires reference {n}"),
                });
            }
            (_, Some(_)) => {
                violations.push(FieldViolation {
                    path: format!("[{index}].burning_problem_reference"),
                    message: "non-burning-problem bucket must carry a null reference".to_string(),
                });
            }
            (_, None) => {}
        }
    }

    match (text, bucket, question_type, reference) {
        (Some(text), Some(bucket), Some(question_type), Some(reference)) => {
            Some(GeneratedQuestion {
                text,
                bucket,
                question_type,
                burning_problem_reference: reference,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn balanced() -> QuestionDistributionPolicy {
        QuestionDistributionPolicy::balanced_mix()
    }

    fn make_question(n: usize, bucket: &str, reference: Option<u8>) -> Value {
        json!({
            "text": format!("Question {n}"),
            "bucket": bucket,
            "type": "text",
            "burning_problem_reference": reference
        })
    }

    /// 3 burning-problem questions plus 7 guardrail questions.
    fn well_formed_items() -> Vec<Value> {
        let mut items: Vec<Value> = (1u8..=3)
            .map(|n| make_question(n as usize, &format!("burning_problem_{n}"), Some(n)))
            .collect();
        for i in 4..=10 {
            items.push(make_question(i, "guardrail:CURRENT SOLUTIONS", None));
        }
        items
    }

    #[test]
    fn test_decode_accepts_well_formed_three_seven_split() {
        let raw = serde_json::to_string(&well_formed_items()).unwrap();
        let result = decode(&raw, &balanced()).unwrap();
        assert_eq!(result.questions.len(), 10);
        assert_eq!(result.burning_problem_question_count(), 3);
        assert_eq!(
            result.questions[0].bucket,
            QuestionBucket::BurningProblem(1)
        );
    }

    #[test]
    fn test_decode_rejects_nine_and_eleven_element_arrays() {
        for count in [9usize, 11] {
            let mut items = well_formed_items();
            if count == 9 {
                items.pop();
            } else {
                items.push(make_question(11, "guardrail:EXTRA", None));
            }
            let raw = serde_json::to_string(&items).unwrap();
            match decode(&raw, &balanced()).unwrap_err() {
                DecodeError::WrongCount {
                    expected, actual, ..
                } => {
                    assert_eq!(expected, 10);
                    assert_eq!(actual, count);
                }
                other => panic!("expected WrongCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decode_preserves_raw_text_on_malformed_json() {
        let raw = "not json";
        match decode(raw, &balanced()).unwrap_err() {
            DecodeError::MalformedJson { raw: carried, .. } => assert_eq!(carried, "not json"),
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_treats_non_array_json_as_malformed() {
        let raw = r#"{"questions": []}"#;
        match decode(raw, &balanced()).unwrap_err() {
            DecodeError::MalformedJson { message, raw: carried } => {
                assert!(message.contains("not an array"));
                assert_eq!(carried, raw);
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_reports_distribution_mismatch_with_histogram() {
        // Only problems 1 and 2 referenced; problem 3 dropped to a guardrail.
        let mut items: Vec<Value> = vec![
            make_question(1, "burning_problem_1", Some(1)),
            make_question(2, "burning_problem_2", Some(2)),
        ];
        for i in 3..=10 {
            items.push(make_question(i, "guardrail:TARGET USER FIT", None));
        }
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &balanced()).unwrap_err() {
            DecodeError::DistributionMismatch {
                expected,
                observed,
                histogram,
                ..
            } => {
                assert_eq!(expected, 3);
                assert_eq!(observed, 2);
                assert_eq!(histogram, [1, 1, 0]);
            }
            other => panic!("expected DistributionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_catches_duplicate_references_leaving_a_problem_uncovered() {
        // Three references present, but problem 2 is never covered.
        let mut items: Vec<Value> = vec![
            make_question(1, "burning_problem_1", Some(1)),
            make_question(2, "burning_problem_1", Some(1)),
            make_question(3, "burning_problem_3", Some(3)),
        ];
        for i in 4..=10 {
            items.push(make_question(i, "guardrail:OUTCOME EXPECTATION", None));
        }
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &balanced()).unwrap_err() {
            DecodeError::DistributionMismatch { histogram, .. } => {
                assert_eq!(histogram, [2, 0, 1]);
            }
            other => panic!("expected DistributionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_aggregates_all_schema_violations() {
        let mut items = well_formed_items();
        items[0]["text"] = json!("");
        items[4]["type"] = json!("ranking");
        items[7]["bucket"] = json!("freeform");
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &balanced()).unwrap_err() {
            DecodeError::SchemaViolation { violations, .. } => {
                assert_eq!(violations.len(), 3);
                let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
                assert!(paths.contains(&"[0].text"));
                assert!(paths.contains(&"[4].type"));
                assert!(paths.contains(&"[7].bucket"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_flags_type_disallowed_by_the_active_policy() {
        let policy = QuestionDistributionPolicy::burning_problem_focus();
        let mut items: Vec<Value> = Vec::new();
        for n in 1u8..=3 {
            items.push(make_question(n as usize, &format!("burning_problem_{n}"), Some(n)));
            items.push(make_question(n as usize + 3, &format!("burning_problem_{n}"), Some(n)));
        }
        items.push(make_question(7, "stage_validation", None));
        items.push(make_question(8, "stage_validation", None));
        items.push(make_question(9, "user_behavior", None));
        items.push(make_question(10, "future_priorities", None));
        items[9]["type"] = json!("mcq");
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &policy).unwrap_err() {
            DecodeError::SchemaViolation { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].message.contains("mcq"));
                assert!(violations[0].message.contains("burning-problem-focus"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_accepts_focused_six_two_one_one_split() {
        let policy = QuestionDistributionPolicy::burning_problem_focus();
        let mut items: Vec<Value> = Vec::new();
        for n in 1u8..=3 {
            items.push(make_question(n as usize, &format!("burning_problem_{n}"), Some(n)));
            items.push(make_question(n as usize + 3, &format!("burning_problem_{n}"), Some(n)));
        }
        items.push(make_question(7, "stage_validation", None));
        items.push(make_question(8, "stage_validation", None));
        items.push(make_question(9, "user_behavior", None));
        items.push(make_question(10, "future_priorities", None));
        let raw = serde_json::to_string(&items).unwrap();

        let result = decode(&raw, &policy).unwrap();
        assert_eq!(result.burning_problem_question_count(), 6);
    }

    #[test]
    fn test_decode_flags_bucket_reference_disagreement() {
        let mut items = well_formed_items();
        // burning_problem_1 bucket pointing at problem 2
        items[0]["burning_problem_reference"] = json!(2);
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &balanced()).unwrap_err() {
            DecodeError::SchemaViolation { violations, .. } => {
                assert!(violations[0].message.contains("burning_problem_1"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_flags_guardrail_question_carrying_a_reference() {
        let mut items = well_formed_items();
        items[5]["burning_problem_reference"] = json!(1);
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &balanced()).unwrap_err() {
            DecodeError::SchemaViolation { violations, .. } => {
                assert_eq!(violations[0].path, "[5].burning_problem_reference");
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_flags_out_of_range_reference() {
        let mut items = well_formed_items();
        items[0]["burning_problem_reference"] = json!(7);
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &balanced()).unwrap_err() {
            DecodeError::SchemaViolation { violations, .. } => {
                assert!(violations
                    .iter()
                    .any(|v| v.message.contains("1, 2, 3, or null")));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_flags_non_object_elements() {
        let mut items = well_formed_items();
        items[9] = json!("just a string");
        let raw = serde_json::to_string(&items).unwrap();

        match decode(&raw, &balanced()).unwrap_err() {
            DecodeError::SchemaViolation { violations, .. } => {
                assert_eq!(violations[0].path, "[9]");
                assert!(violations[0].message.contains("object"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_every_decode_error_carries_the_raw_text() {
        let cases: Vec<String> = vec![
            "garbage".to_string(),
            "[]".to_string(),
            serde_json::to_string(&vec![json!({"text": ""}); 10]).unwrap(),
        ];
        for raw in cases {
            let err = decode(&raw, &balanced()).unwrap_err();
            assert_eq!(err.raw(), raw);
        }
    }
}
