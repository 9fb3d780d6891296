//! speedio-api - HTTP API for storing and retrieving token-grouped notes.
//!
//! The binary in `main.rs` wires configuration, logging and the database
//! together; everything a request touches lives here so it can be driven
//! directly from tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use config::ApiConfig;
pub use error::ApiError;
pub use router::{build_router, AppState};
