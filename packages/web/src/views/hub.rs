//! The single page of the web client.

use dioxus::prelude::*;
use ui::SessionGate;

use crate::Route;

/// Login card or workspace, depending on the session.
#[component]
pub fn Hub() -> Element {
    rsx! {
        SessionGate {}
    }
}

/// Unknown paths redirect to `/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("Redirecting unknown path /{}", segments.join("/"));
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Hub {});
    });
    rsx! {}
}
