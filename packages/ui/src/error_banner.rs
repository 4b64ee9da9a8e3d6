use dioxus::prelude::*;

/// The single flat error message shown above a form.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "error-banner", "{message}" }
        },
        None => rsx! {},
    }
}
