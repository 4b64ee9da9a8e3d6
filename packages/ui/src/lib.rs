//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{hub_config, make_client, make_session};

pub mod views;
pub use views::{SessionGate, Workspace};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod form;
pub use form::{DocumentForm, Submission};

mod navbar;
pub use navbar::Navbar;

mod online_indicator;
pub use online_indicator::OnlineIndicator;

mod error_banner;
pub use error_banner::ErrorBanner;

mod login_panel;
pub use login_panel::LoginPanel;

mod document_editor;
pub use document_editor::DocumentEditor;

mod document_list;
pub use document_list::DocumentList;
