//! Wire models exchanged with the Knowledge Hub backend.

mod document;
mod token;
mod user;

pub use document::{parse_timestamp, Document, DocumentCreate, DocumentUpdate, TITLE_MAX_CHARS};
pub use token::TokenResponse;
pub use user::{RegisterRequest, UserInfo};
