use api::UserInfo;
use dioxus::prelude::*;

use crate::auth::LogoutButton;
use crate::online_indicator::OnlineIndicator;

/// Sticky top bar of the signed-in screen.
#[component]
pub fn Navbar(user: UserInfo) -> Element {
    let name = user.display_name().to_string();

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                h1 { class: "brand", "Knowledge Hub" }
                div {
                    class: "navbar-user",
                    OnlineIndicator {}
                    span { class: "navbar-email", "{name}" }
                    LogoutButton { class: "btn btn-secondary btn-small" }
                }
            }
        }
    }
}
