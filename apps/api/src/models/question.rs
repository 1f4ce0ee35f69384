//! Generated-question types — the decoded half of the survey contract.
//!
//! These are produced by `survey::decode` from model output; the core never
//! hand-constructs them outside tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed survey question forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Scale,
    Mcq,
    YesNo,
    Text,
}

impl QuestionType {
    /// The wire name, used in prompt grammars and violation messages.
    pub fn wire_name(&self) -> &'static str {
        match self {
            QuestionType::Scale => "scale",
            QuestionType::Mcq => "mcq",
            QuestionType::YesNo => "yes_no",
            QuestionType::Text => "text",
        }
    }
}

/// Stage-meta question slots used by the burning-problem-focus split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageMetaKind {
    StageValidation,
    UserBehavior,
    FuturePriorities,
}

impl StageMetaKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            StageMetaKind::StageValidation => "stage_validation",
            StageMetaKind::UserBehavior => "user_behavior",
            StageMetaKind::FuturePriorities => "future_priorities",
        }
    }
}

/// A bucket string that matches none of the recognized tagged forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized question bucket: '{0}'")]
pub struct BucketParseError(pub String);

/// Which anchor a generated question validates.
///
/// Wire grammar: `burning_problem_1..3`, `guardrail:<CATEGORY NAME>`, or a
/// stage-meta slot name (`stage_validation`, `user_behavior`,
/// `future_priorities`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuestionBucket {
    /// 1-based index into the profile's burning problems.
    BurningProblem(u8),
    Guardrail(String),
    StageMeta(StageMetaKind),
}

impl FromStr for QuestionBucket {
    type Err = BucketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("guardrail:") {
            if name.trim().is_empty() {
                return Err(BucketParseError(s.to_string()));
            }
            return Ok(QuestionBucket::Guardrail(name.to_string()));
        }
        match s {
            "burning_problem_1" => Ok(QuestionBucket::BurningProblem(1)),
            "burning_problem_2" => Ok(QuestionBucket::BurningProblem(2)),
            "burning_problem_3" => Ok(QuestionBucket::BurningProblem(3)),
            "stage_validation" => Ok(QuestionBucket::StageMeta(StageMetaKind::StageValidation)),
            "user_behavior" => Ok(QuestionBucket::StageMeta(StageMetaKind::UserBehavior)),
            "future_priorities" => {
                Ok(QuestionBucket::StageMeta(StageMetaKind::FuturePriorities))
            }
            _ => Err(BucketParseError(s.to_string())),
        }
    }
}

impl fmt::Display for QuestionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionBucket::BurningProblem(n) => write!(f, "burning_problem_{n}"),
            QuestionBucket::Guardrail(name) => write!(f, "guardrail:{name}"),
            QuestionBucket::StageMeta(kind) => f.write_str(kind.wire_name()),
        }
    }
}

impl TryFrom<String> for QuestionBucket {
    type Error = BucketParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<QuestionBucket> for String {
    fn from(bucket: QuestionBucket) -> Self {
        bucket.to_string()
    }
}

/// One decoded survey question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub text: String,
    pub bucket: QuestionBucket,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// 1..=3 when the question anchors to a burning problem, null otherwise.
    #[serde(default)]
    pub burning_problem_reference: Option<u8>,
}

/// A fully validated 10-question survey.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyResult {
    pub questions: Vec<GeneratedQuestion>,
}

impl SurveyResult {
    pub fn burning_problem_question_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.burning_problem_reference.is_some())
            .count()
    }
}
