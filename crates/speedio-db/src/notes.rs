//! Note repository implementation.
//!
//! Notes have no fixed Rust schema: each insert names the columns the client
//! sent, and rows are read back as JSON objects.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Pool, Postgres};
use tracing::debug;

use speedio_core::defaults::{ID_COLUMN, NOTES_TABLE, TOKEN_COLUMN};
use speedio_core::token::log_prefix;
use speedio_core::{
    tag_with_token, AccessToken, BatchMode, Note, NoteFields, NoteRepository, Result,
};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
    table: String,
}

impl PgNoteRepository {
    /// Create a repository over the `notes` table.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            table: NOTES_TABLE.to_string(),
        }
    }

    async fn insert_one<'e, E>(&self, executor: E, fields: &NoteFields) -> Result<()>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = build_insert_sql(&self.table, fields);
        sqlx::query(&sql)
            .bind(Json(fields))
            .execute(executor)
            .await?;
        Ok(())
    }
}

/// Quote `name` as a PostgreSQL identifier.
///
/// Embedded double quotes are doubled, so the result is always a single
/// identifier whatever the input.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build an INSERT naming exactly the keys of `fields`.
///
/// Values travel as one JSONB parameter and are coerced to the column types
/// by `jsonb_populate_record`; a key that is not a column fails in the
/// database.
pub(crate) fn build_insert_sql(table: &str, fields: &NoteFields) -> String {
    let columns = fields
        .keys()
        .map(|k| quote_ident(k))
        .collect::<Vec<_>>()
        .join(", ");
    let table = quote_ident(table);

    format!(
        "INSERT INTO {table} ({columns}) SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1)"
    )
}

fn build_select_sql(table: &str) -> String {
    format!(
        "SELECT to_jsonb(n) FROM {} n WHERE n.{} = $1 ORDER BY n.{}",
        quote_ident(table),
        quote_ident(TOKEN_COLUMN),
        quote_ident(ID_COLUMN)
    )
}

fn build_delete_sql(table: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {} = CAST($1 AS BIGINT)",
        quote_ident(table),
        quote_ident(ID_COLUMN)
    )
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert_batch(
        &self,
        token: &AccessToken,
        notes: Vec<NoteFields>,
        mode: BatchMode,
    ) -> Result<usize> {
        let start = Instant::now();
        let count = notes.len();
        let rows = notes
            .into_iter()
            .map(|fields| tag_with_token(fields, token));

        match mode {
            BatchMode::Independent => {
                for fields in rows {
                    self.insert_one(&self.pool, &fields).await?;
                }
            }
            BatchMode::Atomic if count > 0 => {
                let mut tx = self.pool.begin().await?;
                for fields in rows {
                    self.insert_one(&mut *tx, &fields).await?;
                }
                tx.commit().await?;
            }
            BatchMode::Atomic => {}
        }

        debug!(
            subsystem = "database",
            component = "notes",
            op = "insert_batch",
            token_prefix = token.log_prefix(),
            note_count = count,
            atomic = (mode == BatchMode::Atomic),
            duration_ms = start.elapsed().as_millis() as u64,
            "Notes inserted"
        );
        Ok(count)
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        let start = Instant::now();
        let result = sqlx::query(&build_delete_sql(&self.table))
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "delete",
            note_id = id,
            rows_affected = result.rows_affected(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Note delete executed"
        );
        Ok(result.rows_affected())
    }

    async fn list_by_token(&self, token: &str) -> Result<Vec<Note>> {
        let start = Instant::now();
        let rows: Vec<Json<NoteFields>> = sqlx::query_scalar(&build_select_sql(&self.table))
            .bind(token)
            .fetch_all(&self.pool)
            .await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "list_by_token",
            token_prefix = log_prefix(token),
            result_count = rows.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Notes fetched"
        );
        Ok(rows.into_iter().map(|Json(fields)| Note(fields)).collect())
    }
}
