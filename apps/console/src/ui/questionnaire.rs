use dioxus::prelude::*;

use crate::hooks::submit::use_questionnaire_submitter;
use crate::hooks::templates::use_template_catalog;
use crate::questionnaire::{
    use_questionnaire, use_questionnaire_actions, Choice, QuestionDef, QuestionKind,
    QuestionnaireActions, QuestionnaireState, SubSystem, TemplateQuestion, GENERAL_QUESTIONS,
    SUB_QUESTION_LABEL, SUB_SYSTEM_TYPE,
};
use crate::session::use_session_actions;
use crate::ui::feedback::{Alert, AlertKind, FieldHint};

const KIND_CHOICES: [QuestionKind; 4] = [
    QuestionKind::Text,
    QuestionKind::Textarea,
    QuestionKind::Radio,
    QuestionKind::Checkbox,
];

#[component]
pub fn Questionnaire() -> Element {
    let state = use_questionnaire();
    let actions = use_questionnaire_actions();
    let session_actions = use_session_actions();
    use_template_catalog();
    let submitter = use_questionnaire_submitter();

    let edit_index = use_signal(|| Option::<usize>::None);
    let edit_label = use_signal(String::new);
    let edit_options = use_signal(String::new);
    let mut add_open = use_signal(|| false);
    let mut new_label = use_signal(String::new);
    let mut new_kind = use_signal(|| QuestionKind::Text);
    let mut new_options = use_signal(String::new);
    let mut new_required = use_signal(|| true);

    let snapshot = state.read().clone();
    let is_admin = session_actions.is_admin();

    let project_type = snapshot.project_type();
    let complete = snapshot.is_complete();
    let submitting = snapshot.submitting;
    let sub_warning = snapshot.sub_selection_warning();

    let general_blocks: Vec<Element> = GENERAL_QUESTIONS
        .iter()
        .map(|question| general_question_block(question, &snapshot, actions))
        .collect();

    let sub_options: Option<Vec<(SubSystem, &'static str, &'static str, bool)>> =
        project_type.map(|project| {
            SubSystem::options_for(project)
                .into_iter()
                .map(|sub| {
                    (
                        sub,
                        sub.value(),
                        sub.label(),
                        snapshot.sub_selection == Some(sub),
                    )
                })
                .collect()
        });

    let template_blocks: Vec<Element> = snapshot
        .template_questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            template_question_block(
                index,
                question,
                &snapshot,
                actions,
                is_admin,
                edit_index,
                edit_label,
                edit_options,
            )
        })
        .collect();

    let add_panel = if *add_open.read() {
        add_question_panel(
            actions,
            add_open,
            new_label,
            new_kind,
            new_options,
            new_required,
        )
    } else {
        rsx! {
            Fragment {}
        }
    };

    let edit_panel = edit_question_panel(actions, &snapshot, edit_index, edit_label, edit_options);

    let on_load_example = move |_| actions.load_example();

    let on_open_add = move |_| {
        new_label.set(String::new());
        new_kind.set(QuestionKind::Text);
        new_options.set(String::new());
        new_required.set(true);
        add_open.set(true);
    };

    let on_submit = move |_| submitter.submit();

    rsx! {
        section { class: "space-y-4",
            header { class: "flex items-center justify-between gap-4",
                h1 { class: "text-xl font-semibold text-slate-900", "AI Use Case Questionnaire" }
                div { class: "flex items-center gap-2",
                    button {
                        class: "rounded border border-slate-300 px-3 py-1.5 text-xs font-medium text-slate-700 transition hover:bg-slate-50",
                        onclick: on_load_example,
                        "Load Example"
                    }
                    if is_admin {
                        button {
                            class: "rounded bg-indigo-600 px-3 py-1.5 text-xs font-medium text-white transition hover:bg-indigo-700",
                            onclick: on_open_add,
                            "Add Question"
                        }
                    }
                }
            }

            div { class: "space-y-4 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                if let Some(message) = snapshot.error.clone() {
                    Alert { kind: AlertKind::Error, message }
                }
                if let Some(message) = snapshot.success.clone() {
                    Alert { kind: AlertKind::Success, message }
                }

                h2 { class: "text-base font-semibold text-slate-800", "General Information" }
                hr { class: "border-slate-200" }

                for block in general_blocks {
                    {block}
                }

                if let Some(options) = sub_options {
                    div { class: "space-y-1",
                        p { class: "text-sm font-medium text-slate-800", "{SUB_QUESTION_LABEL}" }
                        for (sub, value, label, selected) in options {
                            label {
                                key: "{value}",
                                class: "flex items-center gap-2 text-sm text-slate-700",
                                input {
                                    r#type: "radio",
                                    name: "{SUB_SYSTEM_TYPE}",
                                    value: "{value}",
                                    checked: selected,
                                    onchange: move |_| actions.select_sub_system(sub),
                                }
                                "{label}"
                            }
                        }
                        if sub_warning {
                            FieldHint { message: "Please select the system type.".to_string() }
                        }
                    }
                }

                if snapshot.catalog_loading {
                    p { class: "text-xs text-slate-400", "Loading system templates…" }
                }

                if !template_blocks.is_empty() {
                    h2 { class: "mt-4 text-base font-semibold text-slate-800",
                        "System Specific Questions"
                    }
                    hr { class: "border-slate-200" }
                    for block in template_blocks {
                        {block}
                    }
                }

                div { class: "mt-4 flex justify-center",
                    button {
                        class: "rounded-full bg-indigo-600 px-8 py-2 text-sm font-semibold text-white transition hover:bg-indigo-700 disabled:opacity-60",
                        disabled: submitting || !complete,
                        onclick: on_submit,
                        if submitting { "Processing…" } else { "Submit" }
                    }
                }
            }

            {add_panel}
            {edit_panel}
        }
    }
}

fn general_question_block(
    question: &'static QuestionDef,
    snapshot: &QuestionnaireState,
    actions: QuestionnaireActions,
) -> Element {
    let warning = snapshot.field_warning(question.id, question.required);
    let value = snapshot.text_answer(question.id);

    match question.kind {
        QuestionKind::Radio => rsx! {
            div { key: "{question.id}", class: "space-y-1",
                p { class: "text-sm font-medium text-slate-800", "{question.label}" }
                for option in question.options.iter() {
                    label {
                        key: "{option.value}",
                        class: "flex items-center gap-2 text-sm text-slate-700",
                        input {
                            r#type: "radio",
                            name: "{question.id}",
                            value: "{option.value}",
                            checked: value == option.value,
                            onchange: move |_| actions.set_answer(question.id, option.value.into()),
                        }
                        "{option.label}"
                    }
                }
                if warning {
                    FieldHint { message: "This question is required.".to_string() }
                }
            }
        },
        QuestionKind::Textarea => rsx! {
            div { key: "{question.id}", class: "space-y-1",
                p { class: "text-sm font-medium text-slate-800", "{question.label}" }
                textarea {
                    class: "w-full rounded border border-slate-300 p-2 text-sm",
                    rows: "3",
                    placeholder: "{question.placeholder}",
                    value: "{value}",
                    oninput: move |evt| actions.set_answer(question.id, evt.value().into()),
                }
                if warning {
                    FieldHint { message: "This field is required.".to_string() }
                }
            }
        },
        _ => rsx! {
            div { key: "{question.id}", class: "space-y-1",
                p { class: "text-sm font-medium text-slate-800", "{question.label}" }
                input {
                    class: "w-full rounded border border-slate-300 p-2 text-sm",
                    r#type: "text",
                    placeholder: "{question.placeholder}",
                    value: "{value}",
                    oninput: move |evt| actions.set_answer(question.id, evt.value().into()),
                }
                if warning {
                    FieldHint { message: "This field is required.".to_string() }
                }
            }
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn template_question_block(
    index: usize,
    question: &TemplateQuestion,
    snapshot: &QuestionnaireState,
    actions: QuestionnaireActions,
    is_admin: bool,
    mut edit_index: Signal<Option<usize>>,
    mut edit_label: Signal<String>,
    mut edit_options: Signal<String>,
) -> Element {
    let warning = snapshot.field_warning(&question.id, question.required);
    let value = snapshot.text_answer(&question.id);
    let selected = snapshot.multi_answer(&question.id);
    let ordinal = index + 1;
    let required_marker = if question.required { " *" } else { "" };

    let edit_button = if is_admin {
        let question_label = question.label.clone();
        let question_options = options_to_text(&question.options);
        rsx! {
            button {
                class: "rounded bg-slate-200 px-2 py-0.5 text-[11px] text-slate-600 transition hover:bg-slate-300",
                onclick: move |_| {
                    edit_label.set(question_label.clone());
                    edit_options.set(question_options.clone());
                    edit_index.set(Some(index));
                },
                "Edit"
            }
        }
    } else {
        rsx! {
            Fragment {}
        }
    };

    let control = match question.kind {
        QuestionKind::Radio => rsx! {
            div { class: "space-y-1",
                for choice in question.options.clone() {
                    label {
                        key: "{choice.value}",
                        class: "flex items-center gap-2 text-sm text-slate-700",
                        input {
                            r#type: "radio",
                            name: "{question.id}",
                            value: "{choice.value}",
                            checked: value == choice.value,
                            onchange: {
                                let id = question.id.clone();
                                let choice_value = choice.value.clone();
                                move |_| actions.set_answer(&id, choice_value.clone().into())
                            },
                        }
                        "{choice.label}"
                    }
                }
            }
        },
        QuestionKind::Checkbox => rsx! {
            div { class: "space-y-1",
                for choice in question.options.clone() {
                    label {
                        key: "{choice.value}",
                        class: "flex items-center gap-2 text-sm text-slate-700",
                        input {
                            r#type: "checkbox",
                            value: "{choice.value}",
                            checked: selected.contains(&choice.value),
                            onchange: {
                                let id = question.id.clone();
                                let choice_value = choice.value.clone();
                                move |_| actions.toggle_multi(&id, &choice_value)
                            },
                        }
                        "{choice.label}"
                    }
                }
            }
        },
        QuestionKind::Textarea => rsx! {
            textarea {
                class: "w-full rounded border border-slate-300 p-2 text-sm",
                rows: "3",
                placeholder: "{question.placeholder}",
                value: "{value}",
                oninput: {
                    let id = question.id.clone();
                    move |evt: FormEvent| actions.set_answer(&id, evt.value().into())
                },
            }
        },
        QuestionKind::Text => rsx! {
            input {
                class: "w-full rounded border border-slate-300 p-2 text-sm",
                r#type: "text",
                placeholder: "{question.placeholder}",
                value: "{value}",
                oninput: {
                    let id = question.id.clone();
                    move |evt: FormEvent| actions.set_answer(&id, evt.value().into())
                },
            }
        },
    };

    rsx! {
        div { key: "{question.id}", class: "space-y-1",
            div { class: "flex items-start justify-between gap-2",
                p { class: "text-sm font-medium text-slate-800",
                    "{ordinal}. {question.label}{required_marker}"
                }
                {edit_button}
            }
            {control}
            if warning {
                FieldHint { message: "This question is required.".to_string() }
            }
        }
    }
}

fn add_question_panel(
    actions: QuestionnaireActions,
    mut add_open: Signal<bool>,
    mut new_label: Signal<String>,
    mut new_kind: Signal<QuestionKind>,
    mut new_options: Signal<String>,
    mut new_required: Signal<bool>,
) -> Element {
    let current_kind = *new_kind.read();
    let kind_choices: Vec<(&'static str, bool)> = KIND_CHOICES
        .iter()
        .map(|kind| (kind.value(), *kind == current_kind))
        .collect();
    let show_options = current_kind.has_options();
    let required_checked = *new_required.read();
    let label_value = new_label.read().clone();
    let options_value = new_options.read().clone();
    let kind_value = current_kind.value();

    let on_save = move |_| {
        let label = new_label.read().clone();
        let kind = *new_kind.read();
        let options = if kind.has_options() {
            parse_options(&new_options.read())
        } else {
            Vec::new()
        };
        if actions
            .append_question(&label, kind, options, *new_required.read())
            .is_some()
        {
            add_open.set(false);
        }
    };

    rsx! {
        div { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "text-sm font-semibold text-slate-800", "Add New Question" }
            label { class: "block space-y-1 text-xs text-slate-600",
                span { class: "font-medium", "Question" }
                input {
                    class: "w-full rounded border border-slate-300 p-2 text-sm",
                    value: "{label_value}",
                    oninput: move |evt| new_label.set(evt.value()),
                }
            }
            label { class: "block space-y-1 text-xs text-slate-600",
                span { class: "font-medium", "Type" }
                select {
                    class: "w-full rounded border border-slate-300 bg-white p-2 text-sm",
                    value: "{kind_value}",
                    onchange: move |evt| {
                        if let Some(kind) = QuestionKind::parse(evt.value().as_str()) {
                            new_kind.set(kind);
                            new_options.set(String::new());
                        }
                    },
                    for (value, selected) in kind_choices {
                        option { key: "{value}", value: "{value}", selected, "{value}" }
                    }
                }
            }
            if show_options {
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { class: "font-medium", "Options (one per line)" }
                    textarea {
                        class: "w-full rounded border border-slate-300 p-2 text-sm",
                        rows: "3",
                        value: "{options_value}",
                        oninput: move |evt| new_options.set(evt.value()),
                    }
                }
            }
            label { class: "flex items-center gap-2 text-xs text-slate-600",
                input {
                    r#type: "checkbox",
                    checked: required_checked,
                    onchange: move |evt| new_required.set(evt.checked()),
                }
                "Required"
            }
            div { class: "flex justify-end gap-2",
                button {
                    class: "rounded px-3 py-1.5 text-xs text-slate-600 transition hover:bg-slate-100",
                    onclick: move |_| add_open.set(false),
                    "Cancel"
                }
                button {
                    class: "rounded bg-indigo-600 px-3 py-1.5 text-xs font-medium text-white transition hover:bg-indigo-700",
                    onclick: on_save,
                    "Add"
                }
            }
        }
    }
}

fn edit_question_panel(
    actions: QuestionnaireActions,
    snapshot: &QuestionnaireState,
    mut edit_index: Signal<Option<usize>>,
    mut edit_label: Signal<String>,
    mut edit_options: Signal<String>,
) -> Element {
    let Some(index) = *edit_index.read() else {
        return rsx! {
            Fragment {}
        };
    };
    let Some(question) = snapshot.template_questions.get(index) else {
        return rsx! {
            Fragment {}
        };
    };

    let question_id = question.id.clone();
    let show_options = question.kind.has_options();
    let label_value = edit_label.read().clone();
    let options_value = edit_options.read().clone();

    let on_save = move |_| {
        let options = if show_options {
            parse_options(&edit_options.read())
        } else {
            Vec::new()
        };
        actions.update_question(&question_id, edit_label.read().clone(), options);
        edit_index.set(None);
    };

    rsx! {
        div { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "text-sm font-semibold text-slate-800", "Edit Question" }
            label { class: "block space-y-1 text-xs text-slate-600",
                span { class: "font-medium", "Question" }
                input {
                    class: "w-full rounded border border-slate-300 p-2 text-sm",
                    value: "{label_value}",
                    oninput: move |evt| edit_label.set(evt.value()),
                }
            }
            if show_options {
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { class: "font-medium", "Options (one per line)" }
                    textarea {
                        class: "w-full rounded border border-slate-300 p-2 text-sm",
                        rows: "3",
                        value: "{options_value}",
                        oninput: move |evt| edit_options.set(evt.value()),
                    }
                }
            }
            div { class: "flex justify-end gap-2",
                button {
                    class: "rounded px-3 py-1.5 text-xs text-slate-600 transition hover:bg-slate-100",
                    onclick: move |_| edit_index.set(None),
                    "Cancel"
                }
                button {
                    class: "rounded bg-indigo-600 px-3 py-1.5 text-xs font-medium text-white transition hover:bg-indigo-700",
                    onclick: on_save,
                    "Save"
                }
            }
        }
    }
}

fn parse_options(raw: &str) -> Vec<Choice> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Choice::new(line, line))
        .collect()
}

fn options_to_text(options: &[Choice]) -> String {
    options
        .iter()
        .map(|choice| choice.label.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lines_round_trip() {
        let options = parse_options("Yes\n\n  No  \n");
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "Yes");
        assert_eq!(options[1].label, "No");
        assert_eq!(options_to_text(&options), "Yes\nNo");
    }
}
