use dioxus::prelude::*;

const STATUS_FALLBACK_MESSAGE: &str = "Failed to get questionnaire status";

/// On-demand poll of a submission's processing status.
#[derive(Clone, Copy)]
pub struct SubmissionStatusHandle {
    pub status: Signal<Option<String>>,
    pub error: Signal<Option<String>>,
    pub is_loading: Signal<bool>,
}

pub fn use_submission_status() -> SubmissionStatusHandle {
    SubmissionStatusHandle {
        status: use_signal(|| None),
        error: use_signal(|| None),
        is_loading: use_signal(|| false),
    }
}

impl SubmissionStatusHandle {
    pub fn refresh(&self, session_id: String) {
        let mut status = self.status;
        let mut error = self.error;
        let mut is_loading = self.is_loading;

        spawn(async move {
            is_loading.set(true);
            error.set(None);

            let Some(client) = crate::API_CLIENT.get() else {
                error.set(Some("Backend client not initialized".to_string()));
                is_loading.set(false);
                return;
            };

            match client.get_questionnaire_status(&session_id).await {
                Ok(payload) => status.set(Some(payload.status)),
                Err(err) => {
                    tracing::warn!("questionnaire status poll failed: {err}");
                    error.set(Some(err.user_message(STATUS_FALLBACK_MESSAGE)));
                }
            }

            is_loading.set(false);
        });
    }
}
