//! Data models for notes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::defaults::{ID_COLUMN, TOKEN_COLUMN};
use crate::token::AccessToken;

/// Free-form fields of a note as submitted by a client.
///
/// Keys are expected to name columns of the notes table, but nothing checks
/// that before the database does.
pub type NoteFields = Map<String, JsonValue>;

/// A stored note row, rendered as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(pub NoteFields);

impl Note {
    /// All columns of the row.
    pub fn fields(&self) -> &NoteFields {
        &self.0
    }

    /// Value of a single column.
    pub fn get(&self, column: &str) -> Option<&JsonValue> {
        self.0.get(column)
    }

    /// Database-assigned identifier, when the row exposes an integer `id`.
    pub fn id(&self) -> Option<i64> {
        self.get(ID_COLUMN).and_then(JsonValue::as_i64)
    }

    /// Token the note was created under.
    pub fn token(&self) -> Option<&str> {
        self.get(TOKEN_COLUMN).and_then(JsonValue::as_str)
    }
}

impl From<NoteFields> for Note {
    fn from(fields: NoteFields) -> Self {
        Self(fields)
    }
}

/// Attach `token` to a client-supplied note.
///
/// A `token` key sent by the client is replaced, so every stored row carries
/// the token issued for its batch.
pub fn tag_with_token(mut fields: NoteFields, token: &AccessToken) -> NoteFields {
    fields.insert(
        TOKEN_COLUMN.to_string(),
        JsonValue::String(token.as_str().to_string()),
    );
    fields
}

/// Body returned after a batch of notes is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistNotesResponse {
    pub message: String,
    pub token: AccessToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: JsonValue) -> NoteFields {
        match value {
            JsonValue::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_tag_with_token_adds_token() {
        let token = AccessToken::generate();
        let tagged = tag_with_token(fields(json!({"text": "a"})), &token);

        assert_eq!(tagged["text"], json!("a"));
        assert_eq!(tagged["token"], json!(token.as_str()));
    }

    #[test]
    fn test_tag_with_token_overrides_client_token() {
        let token = AccessToken::generate();
        let tagged = tag_with_token(fields(json!({"token": "forged"})), &token);

        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged["token"], json!(token.as_str()));
    }

    #[test]
    fn test_note_accessors() {
        let note = Note::from(fields(json!({"id": 7, "text": "a", "token": "abc"})));

        assert_eq!(note.id(), Some(7));
        assert_eq!(note.token(), Some("abc"));
        assert_eq!(note.get("text"), Some(&json!("a")));
        assert_eq!(note.get("missing"), None);
    }

    #[test]
    fn test_note_serializes_as_plain_object() {
        let note = Note::from(fields(json!({"text": "a"})));
        assert_eq!(serde_json::to_value(&note).unwrap(), json!({"text": "a"}));
    }

    #[test]
    fn test_persist_response_shape() {
        let token = AccessToken::generate();
        let resp = PersistNotesResponse {
            message: "ok".to_string(),
            token: token.clone(),
        };

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"message": "ok", "token": token.as_str()})
        );
    }
}
