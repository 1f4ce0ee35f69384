//! Startup profile types — the inbound half of the survey contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every profile must name exactly this many burning problems.
pub const BURNING_PROBLEM_COUNT: usize = 3;

/// A raw stage label that does not name one of the five lifecycle stages.
///
/// Unreachable once a stage is typed; surfaces at string boundaries
/// (request bodies, the raw-label catalog endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lifecycle stage: '{0}'")]
pub struct UnknownStage(pub String);

/// Startup lifecycle stage. Wire labels match the product's canonical
/// uppercase form, e.g. "PROTOTYPE DEVELOPMENT".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStage {
    #[serde(rename = "IDEATION & PLANNING")]
    IdeationAndPlanning,
    #[serde(rename = "PROTOTYPE DEVELOPMENT")]
    PrototypeDevelopment,
    #[serde(rename = "VALIDATION & ITERATION")]
    ValidationAndIteration,
    #[serde(rename = "LAUNCH & SCALING")]
    LaunchAndScaling,
    #[serde(rename = "GROWTH & OPTIMIZATION")]
    GrowthAndOptimization,
}

impl LifecycleStage {
    pub const ALL: [LifecycleStage; 5] = [
        LifecycleStage::IdeationAndPlanning,
        LifecycleStage::PrototypeDevelopment,
        LifecycleStage::ValidationAndIteration,
        LifecycleStage::LaunchAndScaling,
        LifecycleStage::GrowthAndOptimization,
    ];

    /// The canonical wire/display label.
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleStage::IdeationAndPlanning => "IDEATION & PLANNING",
            LifecycleStage::PrototypeDevelopment => "PROTOTYPE DEVELOPMENT",
            LifecycleStage::ValidationAndIteration => "VALIDATION & ITERATION",
            LifecycleStage::LaunchAndScaling => "LAUNCH & SCALING",
            LifecycleStage::GrowthAndOptimization => "GROWTH & OPTIMIZATION",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LifecycleStage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleStage::ALL
            .iter()
            .find(|stage| stage.label() == s)
            .copied()
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

/// What the caller knows about the startup under validation.
///
/// The exactly-3-burning-problems invariant is enforced by the engine at
/// render time (and by the handler for the original 400 contract), not by
/// the type — the wire shape is a plain JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupProfile {
    pub title: String,
    pub description: String,
    pub stage: LifecycleStage,
    pub burning_problems: Vec<String>,
}

/// One survey-generation invocation. Not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRequest {
    pub study_id: String,
    pub survey_purpose: String,
    #[serde(rename = "startupAnalysis")]
    pub startup: StartupProfile,
}
