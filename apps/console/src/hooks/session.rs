use dioxus::prelude::*;

use crate::session::{SessionActions, SessionState};

/// Runs session restoration once at startup. Until it resolves the session
/// status stays `Unknown` and guarded routes render their loading shell.
pub fn use_session_bootstrap(state: Signal<SessionState>) {
    use_future(move || async move {
        SessionActions::new(state).initialize().await;
    });
}
