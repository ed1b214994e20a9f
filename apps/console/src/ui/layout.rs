use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::session::{use_session, use_session_actions, AuthStatus};
use crate::Route;

/// Shell around every authenticated route. Nothing protected renders until
/// the session status has resolved at least once; anonymous visitors are
/// replaced onto the login screen.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let nav = navigator();

    {
        let nav = nav.clone();
        use_effect(move || {
            if matches!(session.read().status, AuthStatus::Anonymous) {
                nav.replace(Route::Login {
                    error: String::new(),
                });
            }
        });
    }

    let snapshot = session.read().clone();
    match snapshot.status {
        AuthStatus::Authenticated(_) => rsx! {
            div { class: "min-h-screen bg-slate-100",
                Navbar {}
                main { class: "app-shell mx-auto max-w-5xl space-y-4 p-4",
                    Outlet::<Route> {}
                }
            }
        },
        _ => rsx! {
            div { class: "flex min-h-screen items-center justify-center bg-slate-100",
                p { class: "text-sm text-slate-500", "Loading…" }
            }
        },
    }
}

#[component]
fn Navbar() -> Element {
    let session = use_session();
    let actions = use_session_actions();
    let nav = navigator();

    let snapshot = session.read().clone();
    let user = snapshot.user().cloned();
    let is_admin = snapshot.is_admin();

    let on_logout = move |_| {
        actions.logout();
        nav.replace(Route::Login {
            error: String::new(),
        });
    };

    rsx! {
        header { class: "border-b border-slate-200 bg-white shadow-sm",
            div { class: "mx-auto flex max-w-5xl items-center justify-between gap-4 px-4 py-3",
                div { class: "flex items-center gap-4",
                    span { class: "text-base font-semibold text-slate-900", "AI Governance" }
                    nav { class: "flex items-center gap-3 text-sm text-slate-600",
                        Link { class: "hover:text-slate-900", to: Route::Home {}, "Dashboard" }
                        Link {
                            class: "hover:text-slate-900",
                            to: Route::Questionnaire {},
                            "Questionnaire"
                        }
                        Link {
                            class: "hover:text-slate-900",
                            to: Route::RiskAssessment {},
                            "Risk Assessment"
                        }
                    }
                }
                div { class: "flex items-center gap-3",
                    if is_admin {
                        span { class: "rounded bg-indigo-100 px-2 py-0.5 text-[11px] font-medium text-indigo-700",
                            "admin"
                        }
                    }
                    if let Some(user) = user {
                        span { class: "text-sm text-slate-700", "{user.name}" }
                    }
                    button {
                        class: "rounded bg-slate-200 px-3 py-1 text-xs text-slate-700 transition hover:bg-slate-300",
                        onclick: on_logout,
                        "Sign out"
                    }
                }
            }
        }
    }
}
