//! HTTP handlers.

pub mod health;
pub mod notes;

pub use health::health_check;
pub use notes::{delete_note, get_notes, persist_notes};
