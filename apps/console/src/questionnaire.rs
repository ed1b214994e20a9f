use dioxus::prelude::*;

use crate::models::{
    AnswerValue, ProcessOutcome, QuestionnaireSubmission, ResponseSet, Template,
};

pub const REQUEST_OWNER: &str = "requestOwner";
pub const PROJECT_TYPE: &str = "projectType";
pub const REGION: &str = "region";
pub const PURPOSE: &str = "purpose";
pub const DATE_RANGE: &str = "dateRange";
pub const DELAY_FACTORS: &str = "delayFactors";
pub const SUB_SYSTEM_TYPE: &str = "subSystemType";

pub const SUB_QUESTION_LABEL: &str = "Please select the system type:";

const MISSING_REQUIRED_MESSAGE: &str =
    "Please answer all required questions before submitting.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    Textarea,
    Radio,
    Checkbox,
}

impl QuestionKind {
    pub const fn value(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "text" => Some(Self::Text),
            "textarea" => Some(Self::Textarea),
            "radio" => Some(Self::Radio),
            "checkbox" => Some(Self::Checkbox),
            _ => None,
        }
    }

    pub const fn has_options(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

/// First stage of the classification chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    Internal,
    ThirdParty,
}

impl ProjectType {
    pub const ALL: [Self; 2] = [Self::Internal, Self::ThirdParty];

    pub const fn value(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::ThirdParty => "thirdparty",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Internal => "Developing a product in-house",
            Self::ThirdParty => "Adopting/integrating third party AI system",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == raw)
    }
}

/// Second stage of the classification chain. Each leaf resolves to exactly
/// one canonical template type; adding a branch is a change here only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubSystem {
    AiSystem,
    Cybersecurity,
    ThirdPartyAi,
    ThirdPartyCyber,
}

impl SubSystem {
    pub const ALL: [Self; 4] = [
        Self::AiSystem,
        Self::Cybersecurity,
        Self::ThirdPartyAi,
        Self::ThirdPartyCyber,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            Self::AiSystem => "ai-system",
            Self::Cybersecurity => "cybersecurity",
            Self::ThirdPartyAi => "thirdparty-ai",
            Self::ThirdPartyCyber => "thirdparty-cyber",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AiSystem => "AI-System",
            Self::Cybersecurity => "Cybersecurity Management system",
            Self::ThirdPartyAi => "Third-party AI-System",
            Self::ThirdPartyCyber => "Third-party Cybersecurity",
        }
    }

    pub const fn template_type(self) -> &'static str {
        match self {
            Self::AiSystem => "AI System",
            Self::Cybersecurity => "Cybersecurity Management System",
            Self::ThirdPartyAi => "Third-party AI System",
            Self::ThirdPartyCyber => "Third-party Cybersecurity System",
        }
    }

    pub const fn options_for(project: ProjectType) -> [Self; 2] {
        match project {
            ProjectType::Internal => [Self::AiSystem, Self::Cybersecurity],
            ProjectType::ThirdParty => [Self::ThirdPartyAi, Self::ThirdPartyCyber],
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceDef {
    pub value: &'static str,
    pub label: &'static str,
}

/// Compile-time definition of one of the six general questions.
#[derive(Clone, Copy, Debug)]
pub struct QuestionDef {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: QuestionKind,
    pub required: bool,
    pub options: &'static [ChoiceDef],
    pub placeholder: &'static str,
}

pub const GENERAL_QUESTIONS: [QuestionDef; 6] = [
    QuestionDef {
        id: REQUEST_OWNER,
        label: "1. Please enter your name or the name of the person for whom you are submitting this request and the country in which the request owner is located?",
        kind: QuestionKind::Text,
        required: true,
        options: &[],
        placeholder: "Name, country...",
    },
    QuestionDef {
        id: PROJECT_TYPE,
        label: "2. Is this project internal to our organization or does it involve any third parties?",
        kind: QuestionKind::Radio,
        required: true,
        options: &[
            ChoiceDef {
                value: ProjectType::Internal.value(),
                label: ProjectType::Internal.label(),
            },
            ChoiceDef {
                value: ProjectType::ThirdParty.value(),
                label: ProjectType::ThirdParty.label(),
            },
        ],
        placeholder: "",
    },
    QuestionDef {
        id: REGION,
        label: "3. From which regions do you need data for your use-case?",
        kind: QuestionKind::Text,
        required: true,
        options: &[],
        placeholder: "List regions...",
    },
    QuestionDef {
        id: PURPOSE,
        label: "4. What is the intended purpose of your system?",
        kind: QuestionKind::Textarea,
        required: true,
        options: &[],
        placeholder: "Describe the purpose...",
    },
    QuestionDef {
        id: DATE_RANGE,
        label: "5. What is the date range for when you would like to start and complete the project?",
        kind: QuestionKind::Text,
        required: true,
        options: &[],
        placeholder: "e.g., September 2025 - December 31, 2025",
    },
    QuestionDef {
        id: DELAY_FACTORS,
        label: "6. Are there any factors that might extend your project timeline?",
        kind: QuestionKind::Textarea,
        required: false,
        options: &[],
        placeholder: "Describe any potential delays...",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A follow-up question in the active list. Server-sourced entries carry a
/// branch-scoped ordinal id; admin-authored ones a generated id. Validation
/// and rendering never distinguish the two origins.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateQuestion {
    pub id: String,
    pub label: String,
    pub kind: QuestionKind,
    pub required: bool,
    pub options: Vec<Choice>,
    pub placeholder: String,
}

/// Pure derivation: the active template questions are fully determined by
/// the catalog and the sub-selection. No catalog match means no questions.
pub fn derive_template_questions(catalog: &[Template], sub: SubSystem) -> Vec<TemplateQuestion> {
    let Some(template) = catalog
        .iter()
        .find(|template| template.template_type == sub.template_type())
    else {
        return Vec::new();
    };

    template
        .questions
        .iter()
        .enumerate()
        .map(|(index, spec)| TemplateQuestion {
            id: format!("{}-q{}", sub.value(), index + 1),
            label: spec.question.clone(),
            kind: QuestionKind::Text,
            required: spec.required,
            options: Vec::new(),
            placeholder: "Enter your answer...".to_string(),
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct QuestionnaireState {
    pub catalog: Vec<Template>,
    pub catalog_loading: bool,
    pub responses: ResponseSet,
    pub sub_selection: Option<SubSystem>,
    pub template_questions: Vec<TemplateQuestion>,
    pub submit_attempted: bool,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub last_outcome: Option<ProcessOutcome>,
}

impl QuestionnaireState {
    pub fn answer(&self, id: &str) -> Option<&AnswerValue> {
        self.responses.get(id)
    }

    pub fn is_answered(&self, id: &str) -> bool {
        self.answer(id).map(|value| !value.is_empty()).unwrap_or(false)
    }

    pub fn text_answer(&self, id: &str) -> String {
        self.answer(id)
            .and_then(AnswerValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    pub fn multi_answer(&self, id: &str) -> Vec<String> {
        match self.answer(id) {
            Some(AnswerValue::Multi(values)) => values.clone(),
            _ => Vec::new(),
        }
    }

    pub fn project_type(&self) -> Option<ProjectType> {
        self.answer(PROJECT_TYPE)
            .and_then(AnswerValue::as_text)
            .and_then(ProjectType::parse)
    }

    pub fn set_answer(&mut self, id: &str, value: AnswerValue) {
        if id == PROJECT_TYPE {
            let changed = self
                .answer(PROJECT_TYPE)
                .map(|existing| existing != &value)
                .unwrap_or(true);
            self.responses.insert(id.to_string(), value);
            if changed {
                self.reset_classification_tail();
            }
            return;
        }
        self.responses.insert(id.to_string(), value);
    }

    pub fn toggle_multi(&mut self, id: &str, option_value: &str) {
        let mut values = self.multi_answer(id);
        if let Some(index) = values.iter().position(|value| value == option_value) {
            values.remove(index);
        } else {
            values.push(option_value.to_string());
        }
        self.responses
            .insert(id.to_string(), AnswerValue::Multi(values));
    }

    pub fn select_sub_system(&mut self, sub: SubSystem) {
        self.sub_selection = Some(sub);
        self.responses
            .insert(SUB_SYSTEM_TYPE.to_string(), sub.value().into());
        self.rederive_template_questions();
    }

    pub fn set_catalog(&mut self, catalog: Vec<Template>) {
        self.catalog = catalog;
        self.catalog_loading = false;
        self.rederive_template_questions();
    }

    /// Replaces the active template-question list from (catalog,
    /// sub-selection) and drops answers that no longer have a question.
    pub fn rederive_template_questions(&mut self) {
        let next = match self.sub_selection {
            Some(sub) => derive_template_questions(&self.catalog, sub),
            None => Vec::new(),
        };

        let outgoing: Vec<String> = self
            .template_questions
            .iter()
            .filter(|question| !next.iter().any(|kept| kept.id == question.id))
            .map(|question| question.id.clone())
            .collect();
        for id in outgoing {
            self.responses.remove(&id);
        }

        self.template_questions = next;
    }

    fn reset_classification_tail(&mut self) {
        self.sub_selection = None;
        self.responses.remove(SUB_SYSTEM_TYPE);
        self.rederive_template_questions();
    }

    /// The required-field gate. Recomputed on every change; submission is
    /// permitted only when this is empty.
    pub fn missing_required(&self) -> Vec<String> {
        let mut missing = Vec::new();

        for question in GENERAL_QUESTIONS.iter() {
            if question.required && !self.is_answered(question.id) {
                missing.push(question.id.to_string());
            }
        }

        if self.project_type().is_some() && self.sub_selection.is_none() {
            missing.push(SUB_SYSTEM_TYPE.to_string());
        }

        for question in &self.template_questions {
            if question.required && !self.is_answered(&question.id) {
                missing.push(question.id.clone());
            }
        }

        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Inline warning predicate for one field; only active after a submit
    /// attempt.
    pub fn field_warning(&self, id: &str, required: bool) -> bool {
        self.submit_attempted && required && !self.is_answered(id)
    }

    pub fn sub_selection_warning(&self) -> bool {
        self.submit_attempted && self.project_type().is_some() && self.sub_selection.is_none()
    }

    /// Collects only the currently visible questions: answered general
    /// questions, the sub-selection, and answers to the active template
    /// list. Answers to questions from a previously selected branch never
    /// reach the payload.
    pub fn build_submission(&self, project_id: &str) -> Option<QuestionnaireSubmission> {
        if !self.is_complete() {
            return None;
        }
        let sub = self.sub_selection?;

        let mut responses = ResponseSet::new();
        for question in GENERAL_QUESTIONS.iter() {
            if let Some(answer) = self.answer(question.id) {
                if !answer.is_empty() {
                    responses.insert(question.id.to_string(), answer.clone());
                }
            }
        }
        responses.insert(SUB_SYSTEM_TYPE.to_string(), sub.value().into());
        for question in &self.template_questions {
            if let Some(answer) = self.answer(&question.id) {
                if !answer.is_empty() {
                    responses.insert(question.id.clone(), answer.clone());
                }
            }
        }

        Some(QuestionnaireSubmission {
            questionnaire_responses: responses,
            project_id: project_id.to_string(),
            use_case_type: sub.template_type().to_string(),
        })
    }

    /// Submit attempt entry point: marks the attempt (driving the per-field
    /// warnings) and yields the payload only when the gate passes.
    pub fn begin_submit(&mut self, project_id: &str) -> Option<QuestionnaireSubmission> {
        self.submit_attempted = true;
        match self.build_submission(project_id) {
            Some(submission) => {
                self.error = None;
                self.success = None;
                Some(submission)
            }
            None => {
                self.error = Some(MISSING_REQUIRED_MESSAGE.to_string());
                None
            }
        }
    }

    /// Admin authoring: append an ad hoc question to the active list. It is
    /// gated exactly like a server-sourced one.
    pub fn append_question(
        &mut self,
        label: &str,
        kind: QuestionKind,
        options: Vec<Choice>,
        required: bool,
    ) -> Option<String> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        let id = format!("custom-{}", uuid::Uuid::new_v4());
        self.template_questions.push(TemplateQuestion {
            id: id.clone(),
            label: label.to_string(),
            kind,
            required,
            options,
            placeholder: "Enter your answer...".to_string(),
        });
        Some(id)
    }

    /// Admin authoring: local-only edit of a question's label and options.
    /// Nothing is written back to the template catalog.
    pub fn update_question(&mut self, id: &str, label: String, options: Vec<Choice>) {
        if let Some(question) = self
            .template_questions
            .iter_mut()
            .find(|question| question.id == id)
        {
            if !label.trim().is_empty() {
                question.label = label;
            }
            question.options = options;
        }
    }

    pub fn record_outcome(&mut self, outcome: ProcessOutcome) {
        self.last_outcome = Some(outcome);
    }
}

/// Mutation surface over the shared questionnaire signal.
#[derive(Clone, Copy)]
pub struct QuestionnaireActions {
    state: Signal<QuestionnaireState>,
}

impl QuestionnaireActions {
    pub fn new(state: Signal<QuestionnaireState>) -> Self {
        Self { state }
    }

    pub fn set_catalog_loading(&self, loading: bool) {
        let mut state = self.state;
        state.write().catalog_loading = loading;
    }

    pub fn set_catalog(&self, catalog: Vec<Template>) {
        let mut state = self.state;
        state.write().set_catalog(catalog);
    }

    pub fn set_answer(&self, id: &str, value: AnswerValue) {
        let mut state = self.state;
        state.write().set_answer(id, value);
    }

    pub fn toggle_multi(&self, id: &str, option_value: &str) {
        let mut state = self.state;
        state.write().toggle_multi(id, option_value);
    }

    pub fn select_sub_system(&self, sub: SubSystem) {
        let mut state = self.state;
        state.write().select_sub_system(sub);
    }

    pub fn set_submitting(&self, submitting: bool) {
        let mut state = self.state;
        state.write().submitting = submitting;
    }

    pub fn set_error(&self, message: Option<String>) {
        let mut state = self.state;
        state.write().error = message;
    }

    pub fn set_success(&self, message: Option<String>) {
        let mut state = self.state;
        state.write().success = message;
    }

    pub fn record_outcome(&self, outcome: ProcessOutcome) {
        let mut state = self.state;
        state.write().record_outcome(outcome);
    }

    pub fn append_question(
        &self,
        label: &str,
        kind: QuestionKind,
        options: Vec<Choice>,
        required: bool,
    ) -> Option<String> {
        let mut state = self.state;
        let id = state.write().append_question(label, kind, options, required);
        id
    }

    pub fn update_question(&self, id: &str, label: String, options: Vec<Choice>) {
        let mut state = self.state;
        state.write().update_question(id, label, options);
    }

    pub fn load_example(&self) {
        let mut state = self.state;
        crate::fixtures::questionnaire::apply_example(&mut state.write());
    }
}

pub fn use_questionnaire() -> Signal<QuestionnaireState> {
    use_context::<Signal<QuestionnaireState>>()
}

pub fn use_questionnaire_actions() -> QuestionnaireActions {
    QuestionnaireActions::new(use_questionnaire())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemplateQuestionSpec;

    fn ai_system_template(questions: &[(&str, bool)]) -> Template {
        Template {
            template_type: "AI System".to_string(),
            questions: questions
                .iter()
                .map(|(question, required)| TemplateQuestionSpec {
                    question: question.to_string(),
                    required: *required,
                })
                .collect(),
        }
    }

    fn cyber_template() -> Template {
        Template {
            template_type: "Cybersecurity Management System".to_string(),
            questions: vec![TemplateQuestionSpec {
                question: "Do you run periodic penetration tests?".to_string(),
                required: true,
            }],
        }
    }

    fn answer_general(state: &mut QuestionnaireState) {
        state.set_answer(REQUEST_OWNER, "Jane Doe, US".into());
        state.set_answer(PROJECT_TYPE, ProjectType::Internal.value().into());
        state.set_answer(REGION, "US".into());
        state.set_answer(PURPOSE, "Automate triage".into());
        state.set_answer(DATE_RANGE, "Jan-Mar 2025".into());
    }

    #[test]
    fn required_general_questions_block_until_answered() {
        let mut state = QuestionnaireState::default();
        let missing = state.missing_required();
        assert!(missing.contains(&REQUEST_OWNER.to_string()));
        assert!(missing.contains(&PROJECT_TYPE.to_string()));
        assert!(!missing.contains(&DELAY_FACTORS.to_string()));

        answer_general(&mut state);
        // projectType was answered, so the sub-selection now gates.
        assert_eq!(state.missing_required(), vec![SUB_SYSTEM_TYPE.to_string()]);

        state.select_sub_system(SubSystem::AiSystem);
        assert!(state.is_complete());
    }

    #[test]
    fn whitespace_answers_do_not_satisfy_the_gate() {
        let mut state = QuestionnaireState::default();
        answer_general(&mut state);
        state.select_sub_system(SubSystem::AiSystem);
        state.set_answer(REGION, "   ".into());
        assert!(!state.is_complete());
        assert!(state
            .missing_required()
            .contains(&REGION.to_string()));
    }

    #[test]
    fn classification_chain_maps_exactly() {
        assert_eq!(
            SubSystem::options_for(ProjectType::Internal),
            [SubSystem::AiSystem, SubSystem::Cybersecurity]
        );
        assert_eq!(
            SubSystem::options_for(ProjectType::ThirdParty),
            [SubSystem::ThirdPartyAi, SubSystem::ThirdPartyCyber]
        );

        let state = QuestionnaireState::default();
        assert_eq!(state.project_type(), None);

        assert_eq!(SubSystem::AiSystem.template_type(), "AI System");
        assert_eq!(
            SubSystem::Cybersecurity.template_type(),
            "Cybersecurity Management System"
        );
        assert_eq!(
            SubSystem::ThirdPartyAi.template_type(),
            "Third-party AI System"
        );
        assert_eq!(
            SubSystem::ThirdPartyCyber.template_type(),
            "Third-party Cybersecurity System"
        );
    }

    #[test]
    fn derivation_matches_catalog_entry() {
        let catalog = vec![ai_system_template(&[
            ("Is the model documented?", true),
            ("Any human oversight?", false),
        ])];

        let questions = derive_template_questions(&catalog, SubSystem::AiSystem);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "ai-system-q1");
        assert_eq!(questions[0].label, "Is the model documented?");
        assert!(questions[0].required);
        assert_eq!(questions[0].kind, QuestionKind::Text);
        assert!(!questions[1].required);

        assert!(derive_template_questions(&catalog, SubSystem::Cybersecurity).is_empty());
    }

    #[test]
    fn switching_sub_selection_replaces_the_list_and_drops_old_answers() {
        let mut state = QuestionnaireState::default();
        answer_general(&mut state);
        state.set_catalog(vec![
            ai_system_template(&[("Is the model documented?", true)]),
            cyber_template(),
        ]);

        state.select_sub_system(SubSystem::AiSystem);
        assert_eq!(state.template_questions.len(), 1);
        state.set_answer("ai-system-q1", "Yes".into());
        assert!(state.is_complete());

        state.select_sub_system(SubSystem::Cybersecurity);
        assert_eq!(state.template_questions.len(), 1);
        assert_eq!(state.template_questions[0].id, "cybersecurity-q1");
        assert!(!state.is_complete());

        state.set_answer("cybersecurity-q1", "Quarterly".into());
        let submission = state.build_submission("proj-1").expect("complete");
        assert!(submission
            .questionnaire_responses
            .contains_key("cybersecurity-q1"));
        assert!(!submission
            .questionnaire_responses
            .contains_key("ai-system-q1"));
        assert_eq!(
            submission.use_case_type,
            "Cybersecurity Management System"
        );
    }

    #[test]
    fn changing_project_type_resets_the_chain() {
        let mut state = QuestionnaireState::default();
        answer_general(&mut state);
        state.set_catalog(vec![ai_system_template(&[("Q?", true)])]);
        state.select_sub_system(SubSystem::AiSystem);
        assert!(state.answer(SUB_SYSTEM_TYPE).is_some());

        state.set_answer(PROJECT_TYPE, ProjectType::ThirdParty.value().into());
        assert_eq!(state.sub_selection, None);
        assert!(state.answer(SUB_SYSTEM_TYPE).is_none());
        assert!(state.template_questions.is_empty());
    }

    #[test]
    fn ad_hoc_required_question_gates_like_a_fetched_one() {
        let mut state = QuestionnaireState::default();
        answer_general(&mut state);
        state.select_sub_system(SubSystem::AiSystem);
        assert!(state.is_complete());

        let id = state
            .append_question("Vendor security review done?", QuestionKind::Text, Vec::new(), true)
            .expect("question added");
        assert!(!state.is_complete());
        assert!(state.missing_required().contains(&id));

        state.set_answer(&id, "Yes".into());
        assert!(state.is_complete());
    }

    #[test]
    fn blank_labels_are_not_appended() {
        let mut state = QuestionnaireState::default();
        assert_eq!(
            state.append_question("   ", QuestionKind::Text, Vec::new(), true),
            None
        );
        assert!(state.template_questions.is_empty());
    }

    #[test]
    fn local_edits_touch_only_the_active_list() {
        let mut state = QuestionnaireState::default();
        state.set_catalog(vec![ai_system_template(&[("Old wording?", true)])]);
        state.select_sub_system(SubSystem::AiSystem);

        state.update_question(
            "ai-system-q1",
            "New wording?".to_string(),
            vec![Choice::new("yes", "Yes")],
        );
        assert_eq!(state.template_questions[0].label, "New wording?");
        assert_eq!(state.template_questions[0].options.len(), 1);
        // The catalog itself is untouched.
        assert_eq!(state.catalog[0].questions[0].question, "Old wording?");
    }

    #[test]
    fn end_to_end_submission_payload() {
        let mut state = QuestionnaireState::default();
        state.set_catalog(vec![ai_system_template(&[
            ("Is the model documented?", true),
            ("Any human oversight?", true),
        ])]);

        state.set_answer(REQUEST_OWNER, "Jane Doe, US".into());
        state.set_answer(PROJECT_TYPE, ProjectType::Internal.value().into());
        state.set_answer(REGION, "US".into());
        state.set_answer(PURPOSE, "Automate triage".into());
        state.set_answer(DATE_RANGE, "Jan-Mar 2025".into());
        state.set_answer(DELAY_FACTORS, "".into());
        state.select_sub_system(SubSystem::AiSystem);
        state.set_answer("ai-system-q1", "Yes".into());
        state.set_answer("ai-system-q2", "Yes".into());

        let submission = state
            .begin_submit("proj-1")
            .expect("gate passes");
        assert_eq!(submission.questionnaire_responses.len(), 8);
        assert_eq!(submission.use_case_type, "AI System");
        assert_eq!(submission.project_id, "proj-1");
        assert!(!submission
            .questionnaire_responses
            .contains_key(DELAY_FACTORS));
        assert_eq!(
            submission
                .questionnaire_responses
                .get(SUB_SYSTEM_TYPE)
                .and_then(AnswerValue::as_text),
            Some("ai-system")
        );
    }

    #[test]
    fn failed_submit_marks_fields_and_keeps_answers() {
        let mut state = QuestionnaireState::default();
        state.set_catalog(vec![ai_system_template(&[
            ("Is the model documented?", true),
            ("Any human oversight?", true),
        ])]);
        answer_general(&mut state);
        state.select_sub_system(SubSystem::AiSystem);
        state.set_answer("ai-system-q1", "Yes".into());

        assert_eq!(state.begin_submit("proj-1"), None);
        assert!(state.submit_attempted);
        assert!(state.field_warning("ai-system-q2", true));
        assert!(!state.field_warning("ai-system-q1", true));
        assert_eq!(state.error.as_deref(), Some(MISSING_REQUIRED_MESSAGE));
        assert_eq!(state.text_answer("ai-system-q1"), "Yes");
        assert_eq!(state.text_answer(REQUEST_OWNER), "Jane Doe, US");
    }

    #[test]
    fn multi_answers_toggle_and_gate() {
        let mut state = QuestionnaireState::default();
        answer_general(&mut state);
        state.select_sub_system(SubSystem::AiSystem);

        let id = state
            .append_question(
                "Which controls are in place?",
                QuestionKind::Checkbox,
                vec![Choice::new("mfa", "MFA"), Choice::new("sso", "SSO")],
                true,
            )
            .expect("question added");

        assert!(!state.is_complete());
        state.toggle_multi(&id, "mfa");
        assert!(state.is_complete());
        state.toggle_multi(&id, "mfa");
        assert!(!state.is_complete());
    }
}
