//! Stage strategies — what each lifecycle stage should validate and how.

use serde::Serialize;

use crate::models::startup::LifecycleStage;

/// Per-stage validation focus embedded into prompts and response metadata.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageStrategy {
    pub primary_focus: &'static str,
    pub validation_goal: &'static str,
    /// Question angles the model is nudged toward for this stage.
    pub question_type_hints: &'static [&'static str],
}

/// Returns the strategy for a stage.
pub fn strategy_for(stage: LifecycleStage) -> &'static StageStrategy {
    match stage {
        LifecycleStage::IdeationAndPlanning => &IDEATION_STRATEGY,
        LifecycleStage::PrototypeDevelopment => &PROTOTYPE_STRATEGY,
        LifecycleStage::ValidationAndIteration => &VALIDATION_STRATEGY,
        LifecycleStage::LaunchAndScaling => &LAUNCH_STRATEGY,
        LifecycleStage::GrowthAndOptimization => &GROWTH_STRATEGY,
    }
}

const IDEATION_STRATEGY: StageStrategy = StageStrategy {
    primary_focus: "Problem validation and market need confirmation",
    validation_goal: "Confirm the problems are real and worth solving",
    question_type_hints: &[
        "Problem severity and frequency validation",
        "Current solution gaps and pain points",
        "Market size and willingness to pay",
        "Competitive landscape awareness",
    ],
};

const PROTOTYPE_STRATEGY: StageStrategy = StageStrategy {
    primary_focus: "Solution fit and technical feasibility validation",
    validation_goal: "Validate the proposed solution addresses the core problems effectively",
    question_type_hints: &[
        "Solution approach validation",
        "Feature priority and core functionality",
        "Technical constraints and requirements",
        "User workflow and interaction patterns",
    ],
};

const VALIDATION_STRATEGY: StageStrategy = StageStrategy {
    primary_focus: "Product-market fit and user experience optimization",
    validation_goal: "Optimize product-market fit and identify iteration priorities",
    question_type_hints: &[
        "Product satisfaction and recommendation likelihood",
        "Usage patterns and adoption barriers",
        "Feature gaps and improvement priorities",
        "Pricing sensitivity and value perception",
    ],
};

const LAUNCH_STRATEGY: StageStrategy = StageStrategy {
    primary_focus: "Go-to-market validation and scaling readiness",
    validation_goal: "Validate go-to-market strategy and identify scaling challenges",
    question_type_hints: &[
        "Market positioning and messaging effectiveness",
        "Distribution channel preferences",
        "Scaling bottlenecks and operational challenges",
        "Customer acquisition and retention factors",
    ],
};

const GROWTH_STRATEGY: StageStrategy = StageStrategy {
    primary_focus: "Growth levers and market expansion opportunities",
    validation_goal: "Identify growth opportunities and optimize market position",
    question_type_hints: &[
        "Growth constraint identification",
        "Market expansion and new use case validation",
        "Customer lifetime value optimization",
        "Competitive differentiation and moat building",
    ],
};
