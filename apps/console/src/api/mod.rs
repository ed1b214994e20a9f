use anyhow::Context;
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{
    LoginRequest, LoginResponse, ProcessOutcome, ProfileResponse, QuestionnaireSubmission,
    SubmissionStatus, Template,
};
use crate::session::storage;

pub type ClientResult<T> = Result<T, ClientError>;

/// Thin HTTP client over the governance backend. Every request picks up the
/// bearer token from durable storage at call time, so a login in one part of
/// the UI is immediately visible to every other caller.
#[derive(Clone)]
pub struct BackendClient {
    inner: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let base_url = normalize_base_url(&config.backend_url);

        let builder = reqwest::Client::builder();
        // reqwest's wasm builder has no timeout knob; the browser's fetch
        // defaults apply there.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);

        let client = builder.build().context("failed to build reqwest client")?;

        Ok(Self {
            inner: client,
            base_url,
        })
    }

    pub async fn post_login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        let builder = self.request(Method::POST, "auth/login").json(credentials);
        self.send(builder).await
    }

    pub async fn get_profile(&self) -> ClientResult<ProfileResponse> {
        let builder = self.request(Method::GET, "auth/profile");
        self.send(builder).await
    }

    pub async fn get_templates(&self) -> ClientResult<Vec<Template>> {
        let builder = self.request(Method::GET, "templates");
        self.send(builder).await
    }

    pub async fn process_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
    ) -> ClientResult<ProcessOutcome> {
        let builder = self
            .request(Method::POST, "questionnaire/process")
            .json(submission);
        self.send(builder).await
    }

    pub async fn get_questionnaire_status(
        &self,
        session_id: &str,
    ) -> ClientResult<SubmissionStatus> {
        let path = format!("questionnaire/status/{session_id}");
        let builder = self.request(Method::GET, &path);
        self.send(builder).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.join_path(path);
        let mut builder = self.inner.request(method, url);

        if let Some(token) = storage::stored_token() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token.trim()));
        }

        builder
    }

    fn join_path(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T>(&self, builder: reqwest::RequestBuilder) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await.map_err(ClientError::from)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::from)?;

        if status == StatusCode::UNAUTHORIZED {
            // Token expired or revoked. Clear the stored session and force a
            // full reload so no stale authenticated UI survives.
            storage::clear();
            force_reload();
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .as_ref()
                .and_then(extract_error_message);
            return Err(ClientError::Api { status, message });
        }

        if bytes.is_empty() {
            return Err(ClientError::EmptyResponse(status));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(ClientError::from)?;
        decode_payload(value, status)
    }
}

/// Accepts both payload conventions the backend uses: the payload directly,
/// or wrapped in a `{ success, data }` envelope.
fn decode_payload<T>(value: Value, status: StatusCode) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    if let Value::Object(map) = &value {
        if map.get("success").and_then(Value::as_bool) == Some(false) {
            let message = extract_error_message(&value);
            return Err(ClientError::Api { status, message });
        }
        if let Some(data) = map.get("data") {
            if !data.is_null() {
                return serde_json::from_value(data.clone()).map_err(ClientError::from);
            }
        }
    }
    serde_json::from_value(value).map_err(ClientError::from)
}

/// Failure bodies carry `error` or `message`; prefer `error`.
fn extract_error_message(value: &Value) -> Option<String> {
    value
        .get("error")
        .and_then(Value::as_str)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .map(|text| text.to_string())
        .filter(|text| !text.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn force_reload() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            tracing::error!(?err, "failed to reload after session expiry");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn force_reload() {
    tracing::warn!("session expired; reload skipped outside the browser");
}

fn normalize_base_url(input: &str) -> String {
    input.trim_end_matches('/').to_string()
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("session expired")]
    Unauthorized,
    #[error("api error ({status}): {}", message.as_deref().unwrap_or("no detail"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("empty response body: {0}")]
    EmptyResponse(StatusCode),
    #[error("backend client not initialized")]
    NotConfigured,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Api { status, .. } => Some(*status),
            Self::EmptyResponse(status) => Some(*status),
            _ => None,
        }
    }

    /// The message shown to the user: the server's own wording when it sent
    /// one, the caller's fallback otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use serde_json::json;

    #[test]
    fn decodes_direct_payload() {
        let templates: Vec<Template> = decode_payload(
            json!([{ "templateType": "AI System", "questions": [] }]),
            StatusCode::OK,
        )
        .expect("direct payload decodes");
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].template_type, "AI System");
    }

    #[test]
    fn decodes_enveloped_payload() {
        let profile: ProfileResponse = decode_payload(
            json!({
                "success": true,
                "data": {
                    "user": {
                        "id": "u-1",
                        "name": "Jane Doe",
                        "email": "jane@example.com",
                        "role": "admin"
                    }
                }
            }),
            StatusCode::OK,
        )
        .expect("enveloped payload decodes");
        assert_eq!(profile.user.name, "Jane Doe");
    }

    #[test]
    fn enveloped_failure_surfaces_server_message() {
        let result: ClientResult<Vec<Template>> = decode_payload(
            json!({ "success": false, "error": "template store offline" }),
            StatusCode::OK,
        );
        match result {
            Err(ClientError::Api { message, .. }) => {
                assert_eq!(message.as_deref(), Some("template store offline"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn error_extraction_prefers_error_over_message() {
        let body = json!({ "error": "bad credentials", "message": "ignored" });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("bad credentials")
        );

        let message_only = json!({ "message": "server busy" });
        assert_eq!(
            extract_error_message(&message_only).as_deref(),
            Some("server busy")
        );

        assert_eq!(extract_error_message(&json!({ "code": 500 })), None);
        assert_eq!(extract_error_message(&json!({ "error": "  " })), None);
    }

    #[test]
    fn user_message_falls_back_when_server_says_nothing() {
        let err = ClientError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.user_message("Login failed"), "Login failed");

        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            message: Some("email already registered".to_string()),
        };
        assert_eq!(err.user_message("Login failed"), "email already registered");

        let user: Result<User, _> = serde_json::from_value(json!({ "bogus": true }));
        let err = ClientError::from(user.expect_err("must fail"));
        assert_eq!(err.user_message("Failed to get profile"), "Failed to get profile");
    }

    #[test]
    fn base_url_normalization_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:3001/"),
            "http://localhost:3001"
        );
        assert_eq!(
            normalize_base_url("http://localhost:3001"),
            "http://localhost:3001"
        );
    }
}
