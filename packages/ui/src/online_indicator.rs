//! Backend connectivity indicator for the top bar.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaCloud, FaTriangleExclamation};
use crate::Icon;

/// A small icon that shows whether the backend answered its last health check.
///
/// - **Online**: cloud icon ("Connected")
/// - **Offline**: warning icon ("Server unreachable")
#[component]
pub fn OnlineIndicator() -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! {};
    }

    if state.online {
        rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Connected",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        }
    } else {
        rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Server unreachable",
                Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            }
        }
    }
}
