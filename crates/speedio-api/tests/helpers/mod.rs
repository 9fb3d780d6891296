//! Shared helpers for API tests: an in-memory repository and request plumbing.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use speedio_api::{build_router, AppState};
use speedio_core::defaults::DEFAULT_MAX_BODY_BYTES;
use speedio_core::{
    tag_with_token, AccessToken, BatchMode, Error, Note, NoteFields, NoteRepository, Result,
};

/// Note storage held in memory, with ids assigned like a serial column.
#[derive(Default)]
pub struct MemoryNoteRepository {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    rows: Vec<Note>,
    next_id: i64,
    /// Number of inserts that succeed before every further call fails.
    fail_after: Option<usize>,
    fail_reads: bool,
    /// Mode passed to the most recent `insert_batch` call.
    last_mode: Option<BatchMode>,
}

impl MemoryNoteRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A repository whose inserts start failing after `n` rows.
    pub fn failing_after(n: usize) -> Arc<Self> {
        let repo = Self::default();
        repo.state.lock().unwrap().fail_after = Some(n);
        Arc::new(repo)
    }

    /// A repository whose deletes and reads always fail.
    pub fn broken_reads() -> Arc<Self> {
        let repo = Self::default();
        repo.state.lock().unwrap().fail_reads = true;
        Arc::new(repo)
    }

    pub fn row_count(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn last_mode(&self) -> Option<BatchMode> {
        self.state.lock().unwrap().last_mode
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn insert_batch(
        &self,
        token: &AccessToken,
        notes: Vec<NoteFields>,
        mode: BatchMode,
    ) -> Result<usize> {
        let mut state = self.state.lock().unwrap();
        state.last_mode = Some(mode);
        let count = notes.len();

        for fields in notes {
            if let Some(limit) = state.fail_after {
                if limit == 0 {
                    return Err(Error::Internal("simulated insert failure".into()));
                }
                state.fail_after = Some(limit - 1);
            }
            state.next_id += 1;
            let mut row = tag_with_token(fields, token);
            row.insert("id".into(), json!(state.next_id));
            state.rows.push(Note(row));
        }
        Ok(count)
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(Error::Internal("simulated delete failure".into()));
        }
        let id: i64 = id
            .parse()
            .map_err(|_| Error::InvalidInput(format!("invalid id {id}")))?;

        let before = state.rows.len();
        state.rows.retain(|n| n.id() != Some(id));
        Ok((before - state.rows.len()) as u64)
    }

    async fn list_by_token(&self, token: &str) -> Result<Vec<Note>> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(Error::Internal("simulated read failure".into()));
        }
        Ok(state
            .rows
            .iter()
            .filter(|n| n.token() == Some(token))
            .cloned()
            .collect())
    }
}

pub fn app(repo: Arc<MemoryNoteRepository>) -> Router {
    app_with_mode(repo, BatchMode::Independent)
}

pub fn app_with_mode(repo: Arc<MemoryNoteRepository>, mode: BatchMode) -> Router {
    build_router(AppState::new(repo, mode), DEFAULT_MAX_BODY_BYTES)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    let body = body.to_string();
    Request::post(uri)
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .unwrap()
}

/// POST a batch and return the issued token.
pub async fn persist(app: &Router, notes: Value) -> String {
    let response = send(app, post_json("/persistnotes", notes)).await;
    assert_eq!(response.status(), 200);
    body_json(response).await["token"]
        .as_str()
        .expect("token in response")
        .to_string()
}
