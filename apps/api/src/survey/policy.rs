//! Question distribution policies — how the 10 survey questions split
//! across burning problems, guardrails, and stage-meta slots.

use serde::Serialize;

use crate::models::question::QuestionType;

/// How many questions go to each stage-meta slot (focused split only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageMetaSlots {
    pub stage_validation: usize,
    pub user_behavior: usize,
    pub future_priorities: usize,
}

impl StageMetaSlots {
    pub const NONE: StageMetaSlots = StageMetaSlots {
        stage_validation: 0,
        user_behavior: 0,
        future_priorities: 0,
    };

    pub fn total(&self) -> usize {
        self.stage_validation + self.user_behavior + self.future_priorities
    }
}

/// The rule governing the survey's shape. Chosen once at startup and shared
/// by render and decode so the prompt contract and the validator agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionDistributionPolicy {
    pub name: &'static str,
    pub total_questions: usize,
    /// Questions that must carry a non-null burning_problem_reference.
    pub burning_problem_questions: usize,
    pub guardrail_questions: usize,
    pub stage_meta: StageMetaSlots,
    pub allowed_types: &'static [QuestionType],
}

impl QuestionDistributionPolicy {
    /// 3 burning-problem questions (one per problem) plus 7 guardrail
    /// questions, drawing on all four question types.
    pub const fn balanced_mix() -> Self {
        QuestionDistributionPolicy {
            name: "balanced-mix",
            total_questions: 10,
            burning_problem_questions: 3,
            guardrail_questions: 7,
            stage_meta: StageMetaSlots::NONE,
            allowed_types: &[
                QuestionType::Scale,
                QuestionType::Mcq,
                QuestionType::YesNo,
                QuestionType::Text,
            ],
        }
    }

    /// 6 burning-problem questions (two per problem), 2 stage-validation,
    /// 1 user-behavior, 1 future-priorities; scale and text only.
    pub const fn burning_problem_focus() -> Self {
        QuestionDistributionPolicy {
            name: "burning-problem-focus",
            total_questions: 10,
            burning_problem_questions: 6,
            guardrail_questions: 0,
            stage_meta: StageMetaSlots {
                stage_validation: 2,
                user_behavior: 1,
                future_priorities: 1,
            },
            allowed_types: &[QuestionType::Scale, QuestionType::Text],
        }
    }

    pub const PRESETS: [QuestionDistributionPolicy; 2] = [
        QuestionDistributionPolicy::balanced_mix(),
        QuestionDistributionPolicy::burning_problem_focus(),
    ];

    /// Looks up a preset by its configured name.
    pub fn by_name(name: &str) -> Option<QuestionDistributionPolicy> {
        QuestionDistributionPolicy::PRESETS
            .iter()
            .find(|p| p.name == name)
            .copied()
    }

    pub fn allows(&self, question_type: QuestionType) -> bool {
        self.allowed_types.contains(&question_type)
    }

    pub fn uses_guardrails(&self) -> bool {
        self.guardrail_questions > 0
    }

    /// The `type` grammar line rendered into the prompt's JSON schema.
    pub fn type_grammar(&self) -> String {
        self.allowed_types
            .iter()
            .map(|t| format!("\"{}\"", t.wire_name()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_internally_consistent() {
        for policy in QuestionDistributionPolicy::PRESETS {
            assert_eq!(
                policy.burning_problem_questions
                    + policy.guardrail_questions
                    + policy.stage_meta.total(),
                policy.total_questions,
                "policy '{}' slots do not sum to its total",
                policy.name
            );
            assert!(!policy.allowed_types.is_empty());
        }
    }

    #[test]
    fn test_balanced_mix_is_three_seven() {
        let policy = QuestionDistributionPolicy::balanced_mix();
        assert_eq!(policy.total_questions, 10);
        assert_eq!(policy.burning_problem_questions, 3);
        assert_eq!(policy.guardrail_questions, 7);
        assert_eq!(policy.stage_meta.total(), 0);
        assert!(policy.allows(QuestionType::Mcq));
    }

    #[test]
    fn test_focus_preset_restricts_types_to_scale_and_text() {
        let policy = QuestionDistributionPolicy::burning_problem_focus();
        assert_eq!(policy.burning_problem_questions, 6);
        assert_eq!(policy.stage_meta.stage_validation, 2);
        assert!(policy.allows(QuestionType::Scale));
        assert!(policy.allows(QuestionType::Text));
        assert!(!policy.allows(QuestionType::Mcq));
        assert!(!policy.allows(QuestionType::YesNo));
    }

    #[test]
    fn test_by_name_resolves_presets() {
        assert_eq!(
            QuestionDistributionPolicy::by_name("balanced-mix").map(|p| p.name),
            Some("balanced-mix")
        );
        assert_eq!(
            QuestionDistributionPolicy::by_name("burning-problem-focus")
                .map(|p| p.burning_problem_questions),
            Some(6)
        );
        assert!(QuestionDistributionPolicy::by_name("bespoke").is_none());
    }

    #[test]
    fn test_type_grammar_lists_wire_names() {
        let grammar = QuestionDistributionPolicy::burning_problem_focus().type_grammar();
        assert_eq!(grammar, r#""scale" | "text""#);
    }
}
