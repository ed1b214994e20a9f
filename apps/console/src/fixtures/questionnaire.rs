//! Demo answers behind the "Load Example" action, so a reviewer can walk the
//! whole flow without typing.

use crate::models::AnswerValue;
use crate::questionnaire::{
    QuestionKind, QuestionnaireState, SubSystem, DATE_RANGE, DELAY_FACTORS, PROJECT_TYPE, PURPOSE,
    REGION, REQUEST_OWNER,
};

pub const EXAMPLE_SUB_SYSTEM: SubSystem = SubSystem::ThirdPartyAi;

pub const EXAMPLE_GENERAL_ANSWERS: [(&str, &str); 6] = [
    (REQUEST_OWNER, "Priya Singh, India"),
    (PROJECT_TYPE, "thirdparty"),
    (REGION, "India, United States, European Union"),
    (
        PURPOSE,
        "To automate document screening and risk analysis using artificial intelligence, aiming to improve operational efficiency, compliance, and data-driven insights.",
    ),
    (DATE_RANGE, "September 1, 2025 - December 31, 2025"),
    (
        DELAY_FACTORS,
        "Integration complexity, data partner delays, regulatory approval timelines.",
    ),
];

const EXAMPLE_TEMPLATE_ANSWERS: [&str; 27] = [
    "Yes", "Yes", "Yes", "Yes", "Yes",
    "Yes. We perform annual security audits of all critical third-party partners; evidence can be provided upon request.",
    "Yes", "Yes", "Annually", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes",
    "Quarterly", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes", "Yes",
];

pub fn example_template_answer(index: usize) -> &'static str {
    EXAMPLE_TEMPLATE_ANSWERS.get(index).copied().unwrap_or("Yes")
}

/// Fills every stage of the form: general answers first (which resets the
/// classification tail), then the sub-selection, then whatever template
/// questions that selection derives.
pub fn apply_example(state: &mut QuestionnaireState) {
    for (id, answer) in EXAMPLE_GENERAL_ANSWERS {
        state.set_answer(id, answer.into());
    }
    state.select_sub_system(EXAMPLE_SUB_SYSTEM);

    let fills: Vec<(String, AnswerValue)> = state
        .template_questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let value = match question.kind {
                QuestionKind::Checkbox => AnswerValue::Multi(
                    question
                        .options
                        .first()
                        .map(|choice| vec![choice.value.clone()])
                        .unwrap_or_default(),
                ),
                QuestionKind::Radio => question
                    .options
                    .first()
                    .map(|choice| AnswerValue::from(choice.value.clone()))
                    .unwrap_or_else(|| example_template_answer(index).into()),
                _ => example_template_answer(index).into(),
            };
            (question.id.clone(), value)
        })
        .collect();
    for (id, value) in fills {
        state.set_answer(&id, value);
    }

    state.submit_attempted = false;
    state.error = None;
    state.success = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Template, TemplateQuestionSpec};

    #[test]
    fn example_completes_the_gate_for_a_matching_catalog() {
        let mut state = QuestionnaireState::default();
        state.set_catalog(vec![Template {
            template_type: "Third-party AI System".to_string(),
            questions: vec![
                TemplateQuestionSpec {
                    question: "Does the vendor publish a security whitepaper?".to_string(),
                    required: true,
                },
                TemplateQuestionSpec {
                    question: "How often is the vendor audited?".to_string(),
                    required: true,
                },
            ],
        }]);

        apply_example(&mut state);

        assert_eq!(state.sub_selection, Some(SubSystem::ThirdPartyAi));
        assert!(state.is_complete());
        assert!(!state.submit_attempted);
    }

    #[test]
    fn example_tolerates_an_empty_catalog() {
        let mut state = QuestionnaireState::default();
        apply_example(&mut state);
        assert!(state.template_questions.is_empty());
        assert!(state.is_complete());
    }
}
