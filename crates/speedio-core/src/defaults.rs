//! Default values shared across speedio crates.
//!
//! Anything tunable at runtime is read by `speedio-api`'s configuration layer;
//! the constants here are its fallbacks.

/// Port the HTTP server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Host the HTTP server binds to when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Database URL used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/speedio";

/// Largest accepted request body, in bytes.
///
/// Matches the 100 KiB default of common JSON body parsers.
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// Name of the table holding notes.
pub const NOTES_TABLE: &str = "notes";

/// Column holding the access token of a note.
pub const TOKEN_COLUMN: &str = "token";

/// Primary key column of the notes table.
pub const ID_COLUMN: &str = "id";

/// Number of random bytes behind an access token.
pub const TOKEN_BYTES: usize = 16;

/// Length of a rendered access token (two hex digits per byte).
pub const TOKEN_LEN: usize = TOKEN_BYTES * 2;
