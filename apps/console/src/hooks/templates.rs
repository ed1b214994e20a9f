use dioxus::prelude::*;

use crate::questionnaire::{use_questionnaire, use_questionnaire_actions};

/// One-shot template catalog fetch on mount. A failed fetch degrades to an
/// empty catalog: the general questions stay usable and no retry is
/// scheduled.
pub fn use_template_catalog() {
    let state = use_questionnaire();
    let actions = use_questionnaire_actions();

    use_future(move || async move {
        if !state.peek().catalog.is_empty() {
            return;
        }

        actions.set_catalog_loading(true);

        let Some(client) = crate::API_CLIENT.get() else {
            tracing::warn!("backend client missing; template catalog unavailable");
            actions.set_catalog(Vec::new());
            return;
        };

        match client.get_templates().await {
            Ok(templates) => actions.set_catalog(templates),
            Err(err) => {
                tracing::warn!("template catalog fetch failed: {err}");
                actions.set_catalog(Vec::new());
            }
        }
    });
}
