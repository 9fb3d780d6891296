//! Core traits for speedio abstractions.
//!
//! The HTTP layer only sees these traits, so handlers can be exercised against
//! any backend, including in-memory ones in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, NoteFields};
use crate::token::AccessToken;

/// How the inserts of one batch relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    /// Each note is committed on its own. A failure leaves earlier notes of
    /// the batch stored.
    #[default]
    Independent,
    /// All notes of the batch commit together or not at all.
    Atomic,
}

/// Repository for note persistence.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Store every note of `notes` under `token`, one row per note, in order.
    ///
    /// Inserts are issued sequentially; each completes before the next
    /// starts. Returns the number of rows written.
    async fn insert_batch(
        &self,
        token: &AccessToken,
        notes: Vec<NoteFields>,
        mode: BatchMode,
    ) -> Result<usize>;

    /// Delete the note whose primary key is `id`.
    ///
    /// Returns the number of rows removed, which is zero for an unknown id.
    async fn delete(&self, id: &str) -> Result<u64>;

    /// All notes stored under `token`, in insertion order.
    async fn list_by_token(&self, token: &str) -> Result<Vec<Note>>;
}
