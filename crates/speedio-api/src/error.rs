//! Mapping of handler failures to HTTP responses.
//!
//! Clients only ever see a fixed plain-text message per operation; the
//! underlying error is written to the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

pub const PERSIST_FAILED: &str = "Erro ao salvar anotações no banco de dados";
pub const DELETE_FAILED: &str = "Erro ao excluir anotação do banco de dados";
pub const FETCH_FAILED: &str = "Erro ao recuperar anotações do banco de dados";
pub const NOTES_NOT_FOUND: &str = "Nenhuma anotação encontrada para este token";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("persisting notes failed: {0}")]
    Persist(#[source] speedio_core::Error),

    #[error("deleting note failed: {0}")]
    Delete(#[source] speedio_core::Error),

    #[error("fetching notes failed: {0}")]
    Fetch(#[source] speedio_core::Error),

    /// No rows carry the requested token.
    #[error("no notes for token")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Persist(_) | ApiError::Delete(_) | ApiError::Fetch(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Persist(_) => PERSIST_FAILED,
            ApiError::Delete(_) => DELETE_FAILED,
            ApiError::Fetch(_) => FETCH_FAILED,
            ApiError::NotFound => NOTES_NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(subsystem = "api", error = %self, "Request failed");
        }

        (status, self.public_message()).into_response()
    }
}
