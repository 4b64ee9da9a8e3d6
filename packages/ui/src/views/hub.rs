//! The session gate and the signed-in workspace.

use api::{ApiError, Document};
use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::document_editor::DocumentEditor;
use crate::document_list::DocumentList;
use crate::error_banner::ErrorBanner;
use crate::form::{DocumentForm, Submission};
use crate::login_panel::LoginPanel;
use crate::navbar::Navbar;
use crate::session::make_session;

const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

/// Shows the sign-in card or the workspace depending on the auth state.
#[component]
pub fn SessionGate() -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    match state.user {
        Some(user) => rsx! {
            Workspace { user: user }
        },
        None => rsx! {
            LoginPanel {}
        },
    }
}

/// Fetch the document list into `documents`.
async fn load_documents(mut documents: Signal<Vec<Document>>) -> Result<(), ApiError> {
    let docs = make_session().documents().await?;
    documents.set(docs);
    Ok(())
}

/// Surface a failed request. A rejected token ends the session.
fn report(err: ApiError, mut error: Signal<Option<String>>, mut auth: Signal<AuthState>) {
    if err.is_unauthorized() {
        tracing::warn!("Session rejected by server: {}", err);
        make_session().logout();
        let current = auth.peek().clone();
        auth.set(current.expired(SESSION_EXPIRED));
    } else {
        tracing::error!("Request failed: {}", err);
        error.set(Some(err.to_string()));
    }
}

/// Editor and document list for the signed-in user.
#[component]
pub fn Workspace(user: api::UserInfo) -> Element {
    let auth = use_auth();
    let documents = use_signal(Vec::<Document>::new);
    let mut form = use_signal(DocumentForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Load documents once the workspace is shown (after sign-in or restore)
    let _loader = use_resource(move || async move {
        if let Err(e) = load_documents(documents).await {
            report(e, error, auth);
        }
    });

    let handle_submit = move |_: ()| {
        spawn(async move {
            error.set(None);
            let submission = match form.peek().submission() {
                Ok(submission) => submission,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            busy.set(true);
            let submitted = submission.document_id();
            let session = make_session();
            let saved = match submission {
                Submission::Create(create) => session.create_document(&create).await,
                Submission::Update(id, update) => session.update_document(id, &update).await,
            };
            let result = match saved {
                Ok(_) => {
                    form.write().finish(submitted);
                    load_documents(documents).await
                }
                Err(e) => Err(e),
            };
            busy.set(false);

            if let Err(e) = result {
                report(e, error, auth);
            }
        });
    };

    rsx! {
        Navbar { user: user }

        main {
            class: "workspace",

            ErrorBanner { message: error() }

            DocumentEditor {
                form: form,
                busy: busy(),
                on_submit: handle_submit,
                on_cancel: move |_| form.write().cancel(),
            }

            DocumentList {
                documents: documents(),
                editing_id: form().editing_id(),
                on_edit: move |doc: Document| form.write().begin_edit(doc),
            }
        }
    }
}
