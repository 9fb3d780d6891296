//! Structured logging field names for speedio.
//!
//! All crates use these names for structured `tracing` fields so logs can be
//! queried uniformly.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | A request failed against the database |
//! | WARN  | Recoverable issue, fallback applied (e.g. bad config value) |
//! | INFO  | Lifecycle events (startup, shutdown, pool established) |
//! | DEBUG | Per-operation completions |

/// Correlation ID set on every HTTP request (`x-request-id`, UUIDv7).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event. Values: "api", "database"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem. Examples: "notes", "pool", "server"
pub const COMPONENT: &str = "component";

/// Logical operation name. Examples: "insert_batch", "delete", "list_by_token"
pub const OPERATION: &str = "op";

/// First characters of an access token. Full tokens are never logged.
pub const TOKEN_PREFIX: &str = "token_prefix";

/// Number of notes submitted in one create request.
pub const NOTE_COUNT: &str = "note_count";

/// Rows removed by a delete.
pub const ROWS_AFFECTED: &str = "rows_affected";

/// Rows returned by a query.
pub const RESULT_COUNT: &str = "result_count";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
