//! Authentication context and hooks for the UI.

use std::time::Duration;

use api::UserInfo;
use dioxus::prelude::*;

use crate::session::{hub_config, make_client, make_session};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the persisted token has been re-validated (or found absent).
    pub loading: bool,
    /// Whether the backend is reachable (last health check succeeded).
    pub online: bool,
    /// Message to show on the sign-in screen, e.g. after the session expired.
    pub notice: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            online: false,
            notice: None,
        }
    }
}

impl AuthState {
    pub fn signed_in(&self, user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
            online: true,
            notice: None,
        }
    }

    pub fn signed_out(&self) -> Self {
        Self {
            user: None,
            loading: false,
            online: self.online,
            notice: None,
        }
    }

    /// Signed out with a message for the sign-in screen.
    pub fn expired(&self, notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..self.signed_out()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Silent re-authentication with the persisted token
    let _ = use_resource(move || async move {
        let user = make_session().restore().await;
        let current = auth_state.peek().clone();
        auth_state.set(match user {
            Some(user) => current.signed_in(user),
            None => current.signed_out(),
        });
    });

    // Periodic connectivity check
    use_effect(move || {
        let interval = hub_config().session.health_check_interval_secs;
        spawn(async move {
            let client = make_client();
            loop {
                let online = match client.health().await {
                    Ok(online) => online,
                    Err(e) => {
                        tracing::debug!("Health check failed: {}", e);
                        false
                    }
                };
                if auth_state.peek().online != online {
                    auth_state.write().online = online;
                }
                if interval == 0 {
                    break;
                }
                sleep(Duration::from_secs(interval.into())).await;
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        make_session().logout();
        let current = auth_state();
        auth_state.set(current.signed_out());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
