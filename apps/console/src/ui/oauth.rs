use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::session::use_session_actions;
use crate::Route;

/// Handles the redirect back from the OAuth provider. Navigation strictly
/// follows session population: the dashboard is entered only after
/// `login_with_token` has resolved successfully.
#[component]
pub fn OAuthCallback(token: String, error: String) -> Element {
    let actions = use_session_actions();
    let nav = navigator();

    use_future(move || {
        let token = token.clone();
        let error = error.clone();
        let nav = nav.clone();
        async move {
            if !error.is_empty() {
                tracing::warn!("oauth provider returned an error: {error}");
                nav.replace(Route::Login {
                    error: "oauth_failed".to_string(),
                });
                return;
            }

            if token.is_empty() {
                nav.replace(Route::Login {
                    error: String::new(),
                });
                return;
            }

            match actions.login_with_token(&token).await {
                Ok(()) => {
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("token login failed: {err}");
                    nav.replace(Route::Login {
                        error: "oauth_failed".to_string(),
                    });
                }
            }
        }
    });

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-100",
            p { class: "text-sm text-slate-500", "Please wait, authenticating…" }
        }
    }
}
