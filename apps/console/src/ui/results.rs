use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::hooks::status::use_submission_status;
use crate::questionnaire::use_questionnaire;
use crate::ui::feedback::{Alert, AlertKind};
use crate::Route;

/// Landing page after a successful submission: shows the processing outcome
/// and lets the user poll the analysis status on demand.
#[component]
pub fn RiskAssessment() -> Element {
    let state = use_questionnaire();
    let poller = use_submission_status();

    let snapshot = state.read().clone();
    let outcome = snapshot.last_outcome.clone();

    let polled_status = poller.status.read().clone();
    let poll_error = poller.error.read().clone();
    let polling = *poller.is_loading.read();

    let Some(outcome) = outcome else {
        return rsx! {
            section { class: "space-y-4",
                h1 { class: "text-xl font-semibold text-slate-900", "AI Risk Assessment" }
                div { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                    p { class: "text-sm text-slate-600",
                        "No questionnaire submission yet. Complete the AI use case questionnaire to generate a risk analysis."
                    }
                    Link {
                        class: "inline-block rounded bg-indigo-600 px-4 py-2 text-sm font-medium text-white transition hover:bg-indigo-700",
                        to: Route::Questionnaire {},
                        "Go to questionnaire"
                    }
                }
            }
        };
    };

    let status_display = polled_status.unwrap_or_else(|| {
        if outcome.status.is_empty() {
            "processing".to_string()
        } else {
            outcome.status.clone()
        }
    });
    let session_id = outcome.session_id.clone();

    let on_refresh = {
        let session_id = session_id.clone();
        move |_| {
            if let Some(id) = session_id.clone() {
                poller.refresh(id);
            }
        }
    };

    rsx! {
        section { class: "space-y-4",
            h1 { class: "text-xl font-semibold text-slate-900", "AI Risk Assessment" }
            div { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                p { class: "text-sm text-slate-700",
                    "Your questionnaire was received and the risk analysis is being generated."
                }
                div { class: "flex items-center gap-2 text-sm text-slate-600",
                    span { class: "font-medium", "Status:" }
                    span { class: "font-mono", "{status_display}" }
                }
                if let Some(id) = session_id {
                    p { class: "text-xs text-slate-500", "Processing session: {id}" }
                    button {
                        class: "rounded border border-slate-300 px-3 py-1.5 text-xs font-medium text-slate-700 transition hover:bg-slate-50 disabled:opacity-60",
                        disabled: polling,
                        onclick: on_refresh,
                        if polling { "Checking…" } else { "Refresh status" }
                    }
                }
                if let Some(message) = poll_error {
                    Alert { kind: AlertKind::Error, message }
                }
            }
        }
    }
}
