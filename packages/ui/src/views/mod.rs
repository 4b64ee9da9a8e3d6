mod hub;
pub use hub::{SessionGate, Workspace};
