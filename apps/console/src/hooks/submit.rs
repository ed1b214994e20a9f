use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::questionnaire::{use_questionnaire, QuestionnaireActions, QuestionnaireState};
use crate::Route;

const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to submit questionnaire. Please try again.";
const SUCCESS_MESSAGE: &str =
    "Questionnaire submitted successfully! Risk analysis is being generated.";
/// Long enough to read the confirmation before the redirect.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Clone)]
pub struct QuestionnaireSubmitter {
    state: Signal<QuestionnaireState>,
    nav: Navigator,
}

pub fn use_questionnaire_submitter() -> QuestionnaireSubmitter {
    QuestionnaireSubmitter {
        state: use_questionnaire(),
        nav: navigator(),
    }
}

impl QuestionnaireSubmitter {
    /// Re-validates the full gate, then posts the consolidated payload. A
    /// failed gate only marks the attempt; a failed request keeps every
    /// entered answer and surfaces the server's message.
    pub fn submit(&self) {
        let mut state = self.state;
        let actions = QuestionnaireActions::new(state);
        let nav = self.nav.clone();

        if state.peek().submitting {
            return;
        }

        let project_id = crate::APP_CONFIG
            .get()
            .map(|config| config.default_project_id.clone())
            .unwrap_or_default();

        let submission = state.write().begin_submit(&project_id);
        let Some(submission) = submission else {
            return;
        };

        spawn(async move {
            actions.set_submitting(true);

            let Some(client) = crate::API_CLIENT.get() else {
                actions.set_error(Some("Backend client not initialized".to_string()));
                actions.set_submitting(false);
                return;
            };

            match client.process_questionnaire(&submission).await {
                Ok(outcome) => {
                    actions.record_outcome(outcome);
                    actions.set_success(Some(SUCCESS_MESSAGE.to_string()));
                    actions.set_submitting(false);
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    nav.push(Route::RiskAssessment {});
                }
                Err(err) => {
                    tracing::error!("questionnaire submission failed: {err}");
                    actions.set_error(Some(err.user_message(SUBMIT_FALLBACK_MESSAGE)));
                    actions.set_submitting(false);
                }
            }
        });
    }
}
