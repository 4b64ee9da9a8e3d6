use api::Document;
use dioxus::prelude::*;

use crate::icons::FaPenToSquare;
use crate::Icon;

/// The signed-in user's documents, in the order the backend returned them.
#[component]
pub fn DocumentList(
    documents: Vec<Document>,
    editing_id: Option<i64>,
    on_edit: EventHandler<Document>,
) -> Element {
    if documents.is_empty() {
        return rsx! {
            div { class: "empty-state", "No documents yet." }
        };
    }

    rsx! {
        div {
            class: "document-list",
            for document in documents {
                DocumentCard {
                    key: "{document.id}",
                    active: editing_id == Some(document.id),
                    document: document.clone(),
                    on_edit: on_edit,
                }
            }
        }
    }
}

#[component]
fn DocumentCard(document: Document, active: bool, on_edit: EventHandler<Document>) -> Element {
    let class = if active {
        "card document document--active"
    } else {
        "card document"
    };
    let updated = document.updated_at.format("%Y-%m-%d %H:%M UTC").to_string();
    let selected = document.clone();

    rsx! {
        article {
            class: "{class}",
            div {
                class: "document-header",
                h3 { class: "document-title", "{document.title}" }
                button {
                    class: "link-button",
                    title: "Edit document",
                    onclick: move |_| on_edit.call(selected.clone()),
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    " Edit"
                }
            }
            p { class: "document-content", "{document.content}" }
            p { class: "document-meta", "Updated {updated}" }
        }
    }
}
