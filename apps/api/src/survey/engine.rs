//! Survey engine — renders the model prompt and orchestrates generation.
//!
//! `render` is a pure function of the request, the active distribution
//! policy, and the constant catalog: identical inputs yield byte-identical
//! prompts. `generate_survey` is the one async seam, wiring render →
//! injected generator → decode.

use thiserror::Error;
use tracing::info;

use crate::catalog::{categories_for, strategy_for, GuardrailCategory, StageStrategy};
use crate::llm_client::{LlmError, SurveyGenerator, MAX_OUTPUT_TOKENS};
use crate::models::question::{GeneratedQuestion, QuestionType};
use crate::models::startup::{LifecycleStage, StartupProfile, SurveyRequest, BURNING_PROBLEM_COUNT};
use crate::survey::decode::{decode, DecodeError};
use crate::survey::policy::QuestionDistributionPolicy;
use crate::survey::prompts::{
    GUARDRAIL_INSPIRATION_NOTE, GUARDRAIL_SECTION_HEADER, SURVEY_PROMPT_TEMPLATE,
};

/// Structurally invalid input to `render`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("exactly {expected} burning problems are required, received {received}")]
    WrongBurningProblemCount { expected: usize, received: usize },

    #[error("burning problem {index} is empty")]
    EmptyBurningProblem { index: usize },
}

/// Any failure along the generate pipeline. HTTP and non-HTTP callers share
/// this seam; response shaping happens above it.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    #[error("survey generation call failed: {0}")]
    Generator(#[from] LlmError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A decoded survey plus the stage metadata callers surface alongside it.
#[derive(Debug, Clone)]
pub struct GeneratedSurvey {
    pub questions: Vec<GeneratedQuestion>,
    pub stage: LifecycleStage,
    pub strategy: &'static StageStrategy,
}

fn validate_profile(startup: &StartupProfile) -> Result<(), InvalidRequest> {
    if startup.burning_problems.len() != BURNING_PROBLEM_COUNT {
        return Err(InvalidRequest::WrongBurningProblemCount {
            expected: BURNING_PROBLEM_COUNT,
            received: startup.burning_problems.len(),
        });
    }
    for (i, problem) in startup.burning_problems.iter().enumerate() {
        if problem.trim().is_empty() {
            return Err(InvalidRequest::EmptyBurningProblem { index: i + 1 });
        }
    }
    Ok(())
}

/// Renders the complete survey prompt for a request under a policy.
pub fn render(
    request: &SurveyRequest,
    policy: &QuestionDistributionPolicy,
) -> Result<String, InvalidRequest> {
    validate_profile(&request.startup)?;

    let startup = &request.startup;
    let strategy = strategy_for(startup.stage);

    let burning_problems = startup
        .burning_problems
        .iter()
        .enumerate()
        .map(|(i, problem)| format!("{}. {}", i + 1, problem))
        .collect::<Vec<_>>()
        .join("\n");

    let guardrail_section = if policy.uses_guardrails() {
        render_guardrail_section(categories_for(startup.stage))
    } else {
        String::new()
    };

    let prompt = SURVEY_PROMPT_TEMPLATE
        .replace("{total_questions}", &policy.total_questions.to_string())
        .replace("{stage}", startup.stage.label())
        .replace("{title}", &startup.title)
        .replace("{description}", &startup.description)
        .replace("{survey_purpose}", &request.survey_purpose)
        .replace("{burning_problems}", &burning_problems)
        .replace("{primary_focus}", strategy.primary_focus)
        .replace("{validation_goal}", strategy.validation_goal)
        .replace("{guardrail_section}", &guardrail_section)
        .replace("{structure_requirements}", &structure_requirements(policy))
        .replace("{question_guidelines}", &question_guidelines(policy))
        .replace("{bucket_grammar}", &bucket_grammar(policy))
        .replace("{type_grammar}", &policy.type_grammar())
        .replace("{closing_requirements}", &closing_requirements(policy));

    Ok(prompt)
}

fn render_guardrail_section(categories: &[GuardrailCategory]) -> String {
    let mut section = String::new();
    section.push('\n');
    section.push_str(GUARDRAIL_SECTION_HEADER);
    section.push('\n');
    for category in categories {
        section.push('\n');
        section.push_str(&format!("{}: {}\n", category.name, category.description));
        section.push_str(&format!("  {GUARDRAIL_INSPIRATION_NOTE}\n"));
        for question in category.example_questions {
            section.push_str(&format!("    - {question}\n"));
        }
    }
    section
}

fn structure_requirements(policy: &QuestionDistributionPolicy) -> String {
    let mut lines = vec![format!(
        "- Generate **exactly {} questions**",
        policy.total_questions
    )];

    let per_problem = policy.burning_problem_questions / BURNING_PROBLEM_COUNT;
    if per_problem * BURNING_PROBLEM_COUNT == policy.burning_problem_questions {
        lines.push(format!(
            "- **{} questions** must reference burning problems ({} question{} per burning problem)",
            policy.burning_problem_questions,
            per_problem,
            if per_problem == 1 { "" } else { "s" }
        ));
    } else {
        lines.push(format!(
            "- **{} questions** must reference burning problems, and each of the 3 problems must be covered",
            policy.burning_problem_questions
        ));
    }

    if policy.guardrail_questions > 0 {
        lines.push(format!(
            "- **{} questions** must be based on guardrails from the list above",
            policy.guardrail_questions
        ));
    }
    if policy.stage_meta.stage_validation > 0 {
        lines.push(format!(
            "- **{} question{}** about stage-specific validation needs (bucket \"stage_validation\")",
            policy.stage_meta.stage_validation,
            if policy.stage_meta.stage_validation == 1 { "" } else { "s" }
        ));
    }
    if policy.stage_meta.user_behavior > 0 {
        lines.push(format!(
            "- **{} question{}** about user behavior/workflow (bucket \"user_behavior\")",
            policy.stage_meta.user_behavior,
            if policy.stage_meta.user_behavior == 1 { "" } else { "s" }
        ));
    }
    if policy.stage_meta.future_priorities > 0 {
        lines.push(format!(
            "- **{} question{}** about future priorities/concerns (bucket \"future_priorities\")",
            policy.stage_meta.future_priorities,
            if policy.stage_meta.future_priorities == 1 { "" } else { "s" }
        ));
    }

    if policy.allowed_types.len() > 2 {
        lines.push("- Use a **diverse mix of question types**:".to_string());
        for question_type in policy.allowed_types {
            lines.push(format!("  * {}", type_blurb(*question_type)));
        }
    } else {
        lines.push(format!(
            "- Use only these question types: {}",
            policy
                .allowed_types
                .iter()
                .map(|t| t.wire_name())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    lines.join("\n")
}

fn type_blurb(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::Scale => "**scale** questions (1-5 or 1-10 rating scales)",
        QuestionType::Mcq => "**mcq** questions (multiple choice with options)",
        QuestionType::YesNo => "**yes_no** questions (simple Yes/No)",
        QuestionType::Text => "**text** questions (open-ended text responses)",
    }
}

fn question_guidelines(policy: &QuestionDistributionPolicy) -> String {
    let mut lines = vec![
        "- Each question must test a real-world assumption that a user (not the founder) can answer".to_string(),
        "- Questions should be customer-facing and user-friendly".to_string(),
    ];

    if policy.uses_guardrails() {
        lines.push(
            "- Use the example questions as REFERENCE ONLY - do not copy them exactly".to_string(),
        );
        lines.push("- Create original questions inspired by the guardrail concepts".to_string());
        lines.push(
            "- Ensure questions are actionable and provide meaningful insights".to_string(),
        );
    } else {
        lines.push("- Make questions specific to the burning problems, not generic".to_string());
        lines.push(
            "- Use \"scale\" for quantitative validation, \"text\" for qualitative insights"
                .to_string(),
        );
    }

    if policy.allows(QuestionType::Mcq) {
        lines.push(
            "- For MCQ questions, provide 3-5 relevant options in square brackets".to_string(),
        );
    } else {
        lines.push("- Avoid multiple choice questions".to_string());
    }

    lines.join("\n")
}

fn bucket_grammar(policy: &QuestionDistributionPolicy) -> String {
    let mut forms = vec![
        "\"burning_problem_1\"".to_string(),
        "\"burning_problem_2\"".to_string(),
        "\"burning_problem_3\"".to_string(),
    ];
    if policy.uses_guardrails() {
        forms.push("\"guardrail:<GUARDRAIL_NAME>\"".to_string());
    }
    if policy.stage_meta.stage_validation > 0 {
        forms.push("\"stage_validation\"".to_string());
    }
    if policy.stage_meta.user_behavior > 0 {
        forms.push("\"user_behavior\"".to_string());
    }
    if policy.stage_meta.future_priorities > 0 {
        forms.push("\"future_priorities\"".to_string());
    }
    forms.join(" | ")
}

fn closing_requirements(policy: &QuestionDistributionPolicy) -> String {
    let mut lines = Vec::new();
    if policy.allows(QuestionType::Mcq) {
        lines.push(
            "- For MCQ questions, include options within the question text using square brackets"
                .to_string(),
        );
    }
    lines.push(
        "- For scale questions, specify the scale range in the question text".to_string(),
    );
    lines.push(format!(
        "- Ensure exactly {} questions have burning_problem_reference values, covering each of 1, 2, 3",
        policy.burning_problem_questions
    ));
    if policy.guardrail_questions > 0 {
        lines.push(format!(
            "- Ensure exactly {} questions have guardrail buckets",
            policy.guardrail_questions
        ));
        lines.push(format!(
            "- Use diverse question types across all {} questions",
            policy.total_questions
        ));
    }
    if policy.stage_meta.total() > 0 {
        lines.push(format!(
            "- Ensure exactly {} stage_validation, {} user_behavior, and {} future_priorities questions",
            policy.stage_meta.stage_validation,
            policy.stage_meta.user_behavior,
            policy.stage_meta.future_priorities
        ));
    }
    lines.join("\n")
}

/// Runs the full pipeline: render → injected generator → decode.
///
/// Retry, timeout, and backoff policy belong to the generator and its
/// callers; a failed decode is returned as-is with the raw model text.
pub async fn generate_survey(
    generator: &dyn SurveyGenerator,
    request: &SurveyRequest,
    policy: &QuestionDistributionPolicy,
) -> Result<GeneratedSurvey, SurveyError> {
    let prompt = render(request, policy)?;
    info!(
        "Rendered {} prompt for study {} ({} chars)",
        policy.name,
        request.study_id,
        prompt.len()
    );

    let raw = generator.generate(&prompt, MAX_OUTPUT_TOKENS).await?;
    let result = decode(&raw, policy)?;

    info!(
        "Decoded {} questions for study {} ({} burning-problem-anchored)",
        result.questions.len(),
        request.study_id,
        result.burning_problem_question_count()
    );

    Ok(GeneratedSurvey {
        questions: result.questions,
        stage: request.startup.stage,
        strategy: strategy_for(request.startup.stage),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    fn make_request(stage: LifecycleStage, problems: Vec<&str>) -> SurveyRequest {
        SurveyRequest {
            study_id: "sample_study_vapi".to_string(),
            survey_purpose: "Understand user need, pain intensity, and feature expectation"
                .to_string(),
            startup: StartupProfile {
                title: "Vapi".to_string(),
                description: "Vapi is a developer-first platform that simplifies the creation, \
                              testing, and deployment of voice AI agents."
                    .to_string(),
                stage,
                burning_problems: problems.into_iter().map(String::from).collect(),
            },
        }
    }

    fn vapi_problems() -> Vec<&'static str> {
        vec![
            "Developers spend too much time building voice AI agents from scratch",
            "Existing tools lack real-time orchestration and integration flexibility",
            "There's no seamless way to combine voice analytics with function-calling",
        ]
    }

    struct StaticGenerator(String);

    #[async_trait]
    impl SurveyGenerator for StaticGenerator {
        async fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    fn well_formed_survey_json() -> String {
        let mut items = Vec::new();
        for n in 1..=3 {
            items.push(json!({
                "text": format!("How painful is problem {n} for you? (1-5)"),
                "bucket": format!("burning_problem_{n}"),
                "type": "scale",
                "burning_problem_reference": n
            }));
        }
        for i in 0..7 {
            items.push(json!({
                "text": format!("Guardrail question {i}"),
                "bucket": "guardrail:WILLINGNESS TO PAY",
                "type": "text",
                "burning_problem_reference": null
            }));
        }
        serde_json::to_string(&items).unwrap()
    }

    #[test]
    fn test_render_embeds_profile_fields_and_problems_verbatim() {
        let request = make_request(LifecycleStage::PrototypeDevelopment, vapi_problems());
        let policy = QuestionDistributionPolicy::balanced_mix();
        let prompt = render(&request, &policy).unwrap();

        assert!(prompt.contains("Title: Vapi"));
        assert!(prompt.contains("voice AI agents"));
        assert!(prompt.contains("PROTOTYPE DEVELOPMENT"));
        assert!(prompt.contains(
            "Survey Purpose: Understand user need, pain intensity, and feature expectation"
        ));
        for (i, problem) in vapi_problems().iter().enumerate() {
            assert!(prompt.contains(&format!("{}. {}", i + 1, problem)));
        }
    }

    #[test]
    fn test_render_names_every_guardrail_category_for_the_stage() {
        let request = make_request(LifecycleStage::PrototypeDevelopment, vapi_problems());
        let prompt = render(&request, &QuestionDistributionPolicy::balanced_mix()).unwrap();

        for category in categories_for(LifecycleStage::PrototypeDevelopment) {
            assert!(
                prompt.contains(category.name),
                "prompt is missing category '{}'",
                category.name
            );
        }
        assert!(prompt.contains("WILLINGNESS TO PAY"));
        assert!(prompt.contains("FEATURE PRIORITY"));
        assert!(prompt.contains("DO NOT copy exactly"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = make_request(LifecycleStage::IdeationAndPlanning, vapi_problems());
        let policy = QuestionDistributionPolicy::balanced_mix();
        let first = render(&request, &policy).unwrap();
        let second = render(&request, &policy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_states_the_balanced_contract() {
        let request = make_request(LifecycleStage::IdeationAndPlanning, vapi_problems());
        let prompt = render(&request, &QuestionDistributionPolicy::balanced_mix()).unwrap();

        assert!(prompt.contains("Generate **exactly 10 questions**"));
        assert!(prompt.contains("**3 questions** must reference burning problems"));
        assert!(prompt.contains("**7 questions** must be based on guardrails"));
        assert!(prompt.contains(r#""scale" | "mcq" | "yes_no" | "text""#));
        assert!(prompt.contains("\"burning_problem_reference\": 1 | 2 | 3 | null"));
    }

    #[test]
    fn test_focused_render_drops_guardrails_and_restricts_types() {
        let request = make_request(LifecycleStage::ValidationAndIteration, vapi_problems());
        let prompt =
            render(&request, &QuestionDistributionPolicy::burning_problem_focus()).unwrap();

        assert!(!prompt.contains(GUARDRAIL_SECTION_HEADER));
        assert!(prompt.contains("**6 questions** must reference burning problems"));
        assert!(prompt.contains("stage_validation"));
        assert!(prompt.contains("user_behavior"));
        assert!(prompt.contains("future_priorities"));
        assert!(prompt.contains(r#""scale" | "text""#));
        assert!(prompt.contains("Avoid multiple choice questions"));
        assert!(!prompt.contains("yes_no"));
    }

    #[test]
    fn test_render_embeds_stage_strategy() {
        let request = make_request(LifecycleStage::LaunchAndScaling, vapi_problems());
        let prompt = render(&request, &QuestionDistributionPolicy::balanced_mix()).unwrap();
        let strategy = strategy_for(LifecycleStage::LaunchAndScaling);
        assert!(prompt.contains(strategy.primary_focus));
        assert!(prompt.contains(strategy.validation_goal));
    }

    #[test]
    fn test_render_rejects_wrong_burning_problem_count() {
        let request = make_request(LifecycleStage::IdeationAndPlanning, vec!["A", "B"]);
        let err = render(&request, &QuestionDistributionPolicy::balanced_mix()).unwrap_err();
        assert_eq!(
            err,
            InvalidRequest::WrongBurningProblemCount {
                expected: 3,
                received: 2
            }
        );
    }

    #[test]
    fn test_render_rejects_blank_burning_problem_with_index() {
        let request = make_request(LifecycleStage::IdeationAndPlanning, vec!["A", "  ", "C"]);
        let err = render(&request, &QuestionDistributionPolicy::balanced_mix()).unwrap_err();
        assert_eq!(err, InvalidRequest::EmptyBurningProblem { index: 2 });
    }

    #[tokio::test]
    async fn test_generate_survey_round_trips_through_stub_generator() {
        let generator = StaticGenerator(well_formed_survey_json());
        let request = make_request(LifecycleStage::PrototypeDevelopment, vapi_problems());
        let policy = QuestionDistributionPolicy::balanced_mix();

        let survey = generate_survey(&generator, &request, &policy).await.unwrap();
        assert_eq!(survey.questions.len(), 10);
        assert_eq!(survey.stage, LifecycleStage::PrototypeDevelopment);
        assert_eq!(
            survey
                .questions
                .iter()
                .filter(|q| q.burning_problem_reference.is_some())
                .count(),
            3
        );
        assert!(survey.strategy.primary_focus.contains("Solution fit"));
    }

    #[tokio::test]
    async fn test_generate_survey_surfaces_decode_failure_with_raw_text() {
        let generator = StaticGenerator("I am sorry, I cannot do that.".to_string());
        let request = make_request(LifecycleStage::IdeationAndPlanning, vapi_problems());
        let policy = QuestionDistributionPolicy::balanced_mix();

        let err = generate_survey(&generator, &request, &policy)
            .await
            .unwrap_err();
        match err {
            SurveyError::Decode(decode_err) => {
                assert_eq!(decode_err.raw(), "I am sorry, I cannot do that.");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_survey_rejects_invalid_request_before_calling_generator() {
        let generator = StaticGenerator(well_formed_survey_json());
        let request = make_request(LifecycleStage::IdeationAndPlanning, vec!["only one"]);
        let policy = QuestionDistributionPolicy::balanced_mix();

        let err = generate_survey(&generator, &request, &policy)
            .await
            .unwrap_err();
        assert!(matches!(err, SurveyError::InvalidRequest(_)));
    }
}
