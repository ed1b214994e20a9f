use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
            Self::Warning => ("border-amber-500 bg-amber-50", "text-amber-700"),
            Self::Info => ("border-slate-500 bg-slate-50", "text-slate-700"),
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    let (container_class, accent_text) = kind.accent_classes();

    rsx! {
        div { class: format!("rounded-lg border-l-4 p-3 {}", container_class),
            p { class: format!("text-sm {}", accent_text), "{message}" }
        }
    }
}

/// Inline per-field validation message.
#[component]
pub fn FieldHint(message: String) -> Element {
    rsx! {
        p { class: "mt-1 text-xs text-red-600", "{message}" }
    }
}
