use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::models::LoginRequest;
use crate::session::{use_session, use_session_actions};
use crate::ui::feedback::{Alert, AlertKind};
use crate::Route;

const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";

#[component]
pub fn Login(error: String) -> Element {
    let session = use_session();
    let actions = use_session_actions();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    {
        let nav = nav.clone();
        use_effect(move || {
            if session.read().is_authenticated() {
                nav.replace(Route::Home {});
            }
        });
    }

    let oauth_failed = error == "oauth_failed";

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if *submitting.read() {
            return;
        }

        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        if email_value.is_empty() || password_value.is_empty() {
            form_error.set(Some("Please enter your email and password.".to_string()));
            return;
        }

        let nav = nav.clone();
        spawn(async move {
            submitting.set(true);
            form_error.set(None);

            let request = LoginRequest {
                email: email_value,
                password: password_value,
            };
            match actions.login(&request).await {
                Ok(()) => {
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    form_error.set(Some(err.user_message(LOGIN_FALLBACK_MESSAGE)));
                }
            }

            submitting.set(false);
        });
    };

    let is_submitting = *submitting.read();
    let error_message = form_error.read().clone();

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-100 p-4",
            form {
                class: "w-full max-w-sm space-y-4 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                onsubmit: on_submit,
                div { class: "space-y-1",
                    h1 { class: "text-lg font-semibold text-slate-900", "AI Governance" }
                    p { class: "text-xs text-slate-500", "Sign in to continue." }
                }
                if oauth_failed {
                    Alert {
                        kind: AlertKind::Warning,
                        message: "Single sign-on failed. Sign in with your email instead.".to_string(),
                    }
                }
                if let Some(message) = error_message {
                    Alert { kind: AlertKind::Error, message }
                }
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { class: "font-medium", "Email" }
                    input {
                        class: "w-full rounded border border-slate-300 p-2 text-sm",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { class: "font-medium", "Password" }
                    input {
                        class: "w-full rounded border border-slate-300 p-2 text-sm",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "w-full rounded bg-indigo-600 px-4 py-2 text-sm font-medium text-white transition hover:bg-indigo-700 disabled:opacity-60",
                    r#type: "submit",
                    disabled: is_submitting,
                    if is_submitting { "Signing in…" } else { "Sign in" }
                }
            }
        }
    }
}
