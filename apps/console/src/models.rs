use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Account role as reported by the backend. Unknown values degrade to
/// `Member` so a newly introduced server-side role never locks the UI out.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Member,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "userId")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// One server-defined follow-up question inside a template. `required`
/// defaults to true: only an explicit `required: false` makes it optional.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TemplateQuestionSpec {
    pub question: String,
    #[serde(default = "default_true")]
    pub required: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub template_type: String,
    #[serde(default)]
    pub questions: Vec<TemplateQuestionSpec>,
}

/// A single answer. Free-text questions store `Text`; multi-select
/// (checkbox) questions store `Multi`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Multi(values) => values.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Multi(_) => None,
        }
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Question id → answer, ordered for deterministic payloads.
pub type ResponseSet = BTreeMap<String, AnswerValue>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSubmission {
    pub questionnaire_responses: ResponseSet,
    pub project_id: String,
    pub use_case_type: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SubmissionStatus {
    #[serde(default)]
    pub status: String,
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_role_degrades_to_member() {
        let user: User = serde_json::from_value(json!({
            "userId": "u-1",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "role": "auditor"
        }))
        .expect("user decodes");
        assert_eq!(user.role, Role::Member);
        assert_eq!(user.id, "u-1");
    }

    #[test]
    fn template_question_required_defaults_true() {
        let spec: TemplateQuestionSpec =
            serde_json::from_value(json!({ "question": "Is data encrypted at rest?" }))
                .expect("spec decodes");
        assert!(spec.required);

        let optional: TemplateQuestionSpec = serde_json::from_value(
            json!({ "question": "Additional notes?", "required": false }),
        )
        .expect("spec decodes");
        assert!(!optional.required);
    }

    #[test]
    fn answer_emptiness_ignores_whitespace() {
        assert!(AnswerValue::Text("   ".to_string()).is_empty());
        assert!(AnswerValue::Multi(Vec::new()).is_empty());
        assert!(!AnswerValue::Text("Yes".to_string()).is_empty());
        assert!(!AnswerValue::Multi(vec!["a".to_string()]).is_empty());
    }

    #[test]
    fn answers_serialize_untagged() {
        let mut responses = ResponseSet::new();
        responses.insert("purpose".to_string(), "Automate triage".into());
        responses.insert(
            "controls".to_string(),
            AnswerValue::Multi(vec!["mfa".to_string(), "sso".to_string()]),
        );

        let value = serde_json::to_value(&responses).expect("encodes");
        assert_eq!(value["purpose"], json!("Automate triage"));
        assert_eq!(value["controls"], json!(["mfa", "sso"]));
    }

    #[test]
    fn submission_uses_camel_case_wire_names() {
        let submission = QuestionnaireSubmission {
            questionnaire_responses: ResponseSet::new(),
            project_id: "proj-1".to_string(),
            use_case_type: "AI System".to_string(),
        };
        let value = serde_json::to_value(&submission).expect("encodes");
        assert!(value.get("questionnaireResponses").is_some());
        assert_eq!(value["projectId"], json!("proj-1"));
        assert_eq!(value["useCaseType"], json!("AI System"));
    }
}
