//! Note handlers: create a token-grouped batch, delete by id, list by token.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use speedio_core::token::log_prefix;
use speedio_core::{AccessToken, Note, NoteFields, PersistNotesResponse};

use crate::error::ApiError;
use crate::router::AppState;

pub const PERSIST_OK: &str = "Notas salvas com sucesso";
pub const DELETE_OK: &str = "Anotação excluída com sucesso";

/// Store every submitted note under one freshly issued token.
///
/// An empty array still yields a token. If an insert fails midway, notes
/// written before it stay stored unless atomic batches are enabled.
pub async fn persist_notes(
    State(state): State<AppState>,
    Json(notes): Json<Vec<NoteFields>>,
) -> Result<Json<PersistNotesResponse>, ApiError> {
    let token = AccessToken::generate();
    let count = state
        .notes
        .insert_batch(&token, notes, state.batch_mode)
        .await
        .map_err(ApiError::Persist)?;

    debug!(
        subsystem = "api",
        op = "persist_notes",
        token_prefix = token.log_prefix(),
        note_count = count,
        "Notes persisted"
    );
    Ok(Json(PersistNotesResponse {
        message: PERSIST_OK.to_string(),
        token,
    }))
}

/// Delete one note. Unknown ids succeed the same way as existing ones.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let removed = state.notes.delete(&id).await.map_err(ApiError::Delete)?;

    debug!(
        subsystem = "api",
        op = "delete_note",
        note_id = %id,
        rows_affected = removed,
        "Note deleted"
    );
    Ok(DELETE_OK)
}

pub async fn get_notes(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .notes
        .list_by_token(&token)
        .await
        .map_err(ApiError::Fetch)?;

    debug!(
        subsystem = "api",
        op = "get_notes",
        token_prefix = log_prefix(&token),
        result_count = notes.len(),
        "Notes fetched"
    );
    if notes.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(notes))
}
