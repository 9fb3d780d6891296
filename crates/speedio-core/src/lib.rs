//! # speedio-core
//!
//! Core types, traits, and abstractions for the speedio notes service.
//!
//! This crate provides the data structures and the repository trait that the
//! database layer implements and the HTTP layer depends on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod token;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use token::AccessToken;
pub use traits::*;
