//! Sign-in card shown by the session gate when nobody is signed in.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::error_banner::ErrorBanner;
use crate::online_indicator::OnlineIndicator;
use crate::session::make_session;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    SignIn,
    Register,
}

impl Mode {
    fn toggled(self) -> Self {
        match self {
            Mode::SignIn => Mode::Register,
            Mode::Register => Mode::SignIn,
        }
    }
}

/// Email/password form that signs in, or creates an account and signs in.
#[component]
pub fn LoginPanel() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut mode = use_signal(|| Mode::SignIn);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            auth.write().notice = None;

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            let session = make_session();
            let result = match mode() {
                Mode::SignIn => session.login(&e, &p).await,
                Mode::Register => session.register(&e, &p).await,
            };
            loading.set(false);

            match result {
                Ok(user) => {
                    password.set(String::new());
                    let current = auth();
                    auth.set(current.signed_in(user));
                }
                Err(e) => {
                    tracing::error!("Sign-in failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let (subtitle, submit_label, busy_label, switch_prompt, switch_label) = match mode() {
        Mode::SignIn => (
            "Sign in to continue",
            "Login",
            "Signing in...",
            "No account yet? ",
            "Create one",
        ),
        Mode::Register => (
            "Create an account",
            "Sign up",
            "Creating account...",
            "Already have an account? ",
            "Sign in",
        ),
    };
    let message = error().or_else(|| auth().notice);

    rsx! {
        div {
            class: "login-screen",
            div {
                class: "card login-card",
                div {
                    class: "login-heading",
                    h1 { class: "brand", "Knowledge Hub" }
                    OnlineIndicator {}
                }
                p { class: "muted", "{subtitle}" }

                ErrorBanner { message: message }

                form {
                    class: "login-form",
                    onsubmit: handle_submit,
                    input {
                        class: "field",
                        r#type: "email",
                        placeholder: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        class: "field",
                        r#type: "password",
                        placeholder: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "{busy_label}" } else { "{submit_label}" }
                    }
                }

                p {
                    class: "login-switch muted",
                    "{switch_prompt}"
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| {
                            mode.set(mode().toggled());
                            error.set(None);
                        },
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
