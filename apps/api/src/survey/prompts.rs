// Prompt constants for the survey module. The cross-cutting JSON-only
// system prompt lives in llm_client::prompts; the policy-dependent sections
// are generated by engine::render and spliced into the skeleton below.

/// Survey prompt skeleton. Replace: {total_questions}, {stage}, {title},
/// {description}, {survey_purpose}, {burning_problems}, {primary_focus},
/// {validation_goal}, {guardrail_section}, {structure_requirements},
/// {question_guidelines}, {bucket_grammar}, {type_grammar},
/// {closing_requirements}.
pub const SURVEY_PROMPT_TEMPLATE: &str = r#"You are a user researcher creating a {total_questions}-question survey designed to validate assumptions for a startup in the **{stage}** stage.

--- Startup Overview ---
Title: {title}
Description: {description}
Stage: {stage}
Survey Purpose: {survey_purpose}

--- Burning Problems to Validate ---
{burning_problems}

--- Stage-Specific Focus ---
Primary Focus: {primary_focus}
Validation Goal: {validation_goal}
{guardrail_section}
SURVEY STRUCTURE REQUIREMENTS:
{structure_requirements}

QUESTION REQUIREMENTS:
{question_guidelines}

Return only valid JSON in this EXACT format:
[
  {
    "text": "Your question text here",
    "bucket": {bucket_grammar},
    "type": {type_grammar},
    "burning_problem_reference": 1 | 2 | 3 | null
  },
  ...
]

IMPORTANT:
{closing_requirements}"#;

/// Header above the rendered guardrail catalog (guardrail splits only).
pub const GUARDRAIL_SECTION_HEADER: &str =
    "--- Guardrail Categories with Example Questions ---";

/// Disclaimer rendered under every guardrail category's examples.
pub const GUARDRAIL_INSPIRATION_NOTE: &str =
    "Example questions you can reference (DO NOT copy exactly, but use as inspiration):";
