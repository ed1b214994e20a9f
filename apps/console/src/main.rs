#![allow(non_snake_case)]

mod api;
mod config;
mod fixtures;
mod hooks;
mod models;
mod questionnaire;
mod session;
mod ui;

use api::{BackendClient, ClientError};
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use hooks::session::use_session_bootstrap;
use once_cell::sync::OnceCell;
use questionnaire::QuestionnaireState;
use session::SessionState;
use tracing::{error, info};
use ui::layout::Shell;
use ui::login::Login;
use ui::oauth::OAuthCallback;
use ui::questionnaire::Questionnaire;
use ui::results::RiskAssessment;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static API_CLIENT: OnceCell<BackendClient> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap_infrastructure();
    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap_infrastructure() {
    let config = AppConfig::from_env();
    let _ = APP_CONFIG.set(config.clone());

    match BackendClient::new(config) {
        Ok(client) => {
            let _ = API_CLIENT.set(client);
            info!("backend client initialized");
        }
        Err(err) => {
            report_client_error("failed to initialize backend client", &err);
        }
    }
}

fn report_client_error(context: &str, err: &ClientError) {
    error!(%context, ?err, status = ?err.status(), "api bootstrap error");
}

#[component]
fn App() -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    let questionnaire_state = use_signal(QuestionnaireState::default);
    use_context_provider(|| questionnaire_state);

    use_session_bootstrap(session);

    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/login?:error")]
    Login { error: String },
    #[route("/oauth/callback?:token&:error")]
    OAuthCallback { token: String, error: String },
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/questionnaire")]
        Questionnaire {},
        #[route("/risk-assessment")]
        RiskAssessment {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Home() -> Element {
    let session = session::use_session();
    let user_name = session
        .read()
        .user()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let api_endpoint = APP_CONFIG
        .get()
        .map(|config| config.backend_url.clone())
        .unwrap_or_else(|| "backend not configured".to_string());

    rsx! {
        section { class: "space-y-4",
            div { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                h1 { class: "text-xl font-semibold text-slate-900", "Welcome, {user_name}" }
                p { class: "text-sm text-slate-600", "Backend API: {api_endpoint}" }
                p { class: "text-xs text-slate-500",
                    "Start a new AI use case assessment from the questionnaire."
                }
            }
            Link {
                class: "inline-block rounded bg-indigo-600 px-4 py-2 text-sm font-medium text-white transition hover:bg-indigo-700",
                to: Route::Questionnaire {},
                "Start questionnaire"
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center gap-3 bg-slate-100",
            h1 { class: "text-xl font-semibold text-slate-900", "Page not found" }
            p { class: "text-sm text-slate-600", "/{path}" }
            Link { class: "text-sm text-indigo-600 hover:underline", to: Route::Home {}, "Back to dashboard" }
        }
    }
}
