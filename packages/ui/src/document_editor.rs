use dioxus::prelude::*;

use crate::form::DocumentForm;

/// Create/edit form. The parent owns the [`DocumentForm`] and performs the submit.
#[component]
pub fn DocumentEditor(
    form: Signal<DocumentForm>,
    #[props(default)] busy: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = form;
    let state = form();
    let heading = state.heading();
    let submit_label = state.submit_label();

    rsx! {
        section {
            class: "card editor",
            h2 { class: "card-title", "{heading}" }

            input {
                class: "field",
                r#type: "text",
                placeholder: "Title",
                value: "{state.title}",
                oninput: move |evt: FormEvent| {
                    form.write().title = evt.value();
                },
            }

            textarea {
                class: "field field-content",
                placeholder: "Content",
                value: "{state.content}",
                oninput: move |evt: FormEvent| {
                    form.write().content = evt.value();
                },
            }

            div {
                class: "editor-actions",
                button {
                    class: "btn btn-primary",
                    disabled: busy,
                    onclick: move |_| on_submit.call(()),
                    "{submit_label}"
                }
                if state.is_editing() {
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
