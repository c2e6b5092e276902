//! Datastores that accept generated batches.

use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use tracing::info;

use crate::errors::GenerationError;
use crate::model::Batch;
use crate::output::sql::quote_identifier;
use crate::value::GeneratedValue;

/// SQLite caps bound parameters per statement; stay well under the limit.
const MAX_BIND_PARAMS: usize = 999;

/// Sink that persists batches, returning the number of rows inserted.
#[async_trait]
pub trait Store: Send + Sync {
    /// Backend identifier (e.g. `sqlite`).
    fn backend(&self) -> &'static str;

    async fn insert_batch(&self, batch: &Batch) -> Result<u64, GenerationError>;
}

/// Store backed by an SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect with a single pooled connection, so `sqlite::memory:` keeps
    /// one database for the lifetime of the store.
    pub async fn connect(url: &str) -> Result<Self, GenerationError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// `CREATE TABLE IF NOT EXISTS` with column affinities taken from the
    /// first non-null value of each column.
    pub async fn ensure_table(&self, batch: &Batch) -> Result<(), GenerationError> {
        validate_identifiers(batch)?;
        let columns = batch
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let affinity = batch
                    .rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .find(|value| !value.is_null())
                    .map_or("TEXT", sqlite_affinity);
                format!("{} {affinity}", quote_identifier(column))
            })
            .collect::<Vec<_>>()
            .join(", ");
        let statement = format!(
            "CREATE TABLE IF NOT EXISTS {} ({columns})",
            quote_identifier(&batch.table)
        );
        sqlx::query(&statement).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn insert_batch(&self, batch: &Batch) -> Result<u64, GenerationError> {
        validate_identifiers(batch)?;
        if batch.is_empty() {
            return Ok(0);
        }
        let rows_per_statement = (MAX_BIND_PARAMS / batch.columns.len().max(1)).max(1);
        let prefix = format!(
            "INSERT INTO {} ({}) ",
            quote_identifier(&batch.table),
            batch
                .columns
                .iter()
                .map(|column| quote_identifier(column))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0_u64;
        for chunk in batch.rows.chunks(rows_per_statement) {
            let mut builder = QueryBuilder::<Sqlite>::new(&prefix);
            builder.push_values(chunk, |mut values, row| {
                for value in row {
                    match value {
                        GeneratedValue::Null => values.push_bind(None::<String>),
                        GeneratedValue::Bool(flag) => values.push_bind(*flag),
                        GeneratedValue::Int(number) => values.push_bind(*number),
                        GeneratedValue::Float(number) => values.push_bind(*number),
                        other => values.push_bind(other.to_csv()),
                    };
                }
            });
            let result = builder.build().execute(&mut *tx).await?;
            inserted += result.rows_affected();
        }
        tx.commit().await?;

        info!(
            backend = self.backend(),
            table = %batch.table,
            rows = inserted,
            "batch inserted"
        );
        Ok(inserted)
    }
}

/// Keeps batches in memory; used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    batches: Mutex<Vec<Batch>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> Vec<Batch> {
        self.batches
            .lock()
            .map(|batches| batches.clone())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.batches
            .lock()
            .map(|batches| batches.iter().map(Batch::len).sum())
            .unwrap_or(0)
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert_batch(&self, batch: &Batch) -> Result<u64, GenerationError> {
        let mut batches = self.batches.lock().map_err(|_| {
            GenerationError::InvalidRequest("memory store lock poisoned".to_string())
        })?;
        batches.push(batch.clone());
        Ok(batch.len() as u64)
    }
}

/// Identifiers must match `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn validate_identifiers(batch: &Batch) -> Result<(), GenerationError> {
    if batch.columns.is_empty() {
        return Err(GenerationError::InvalidRequest(format!(
            "table '{}' has no columns",
            batch.table
        )));
    }
    let invalid = std::iter::once(&batch.table)
        .chain(&batch.columns)
        .find(|name| !is_valid_identifier(name));
    match invalid {
        Some(name) => Err(GenerationError::InvalidRequest(format!(
            "invalid identifier '{name}'"
        ))),
        None => Ok(()),
    }
}

fn sqlite_affinity(value: &GeneratedValue) -> &'static str {
    match value {
        GeneratedValue::Bool(_) | GeneratedValue::Int(_) => "INTEGER",
        GeneratedValue::Float(_) => "REAL",
        _ => "TEXT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_rules() {
        assert!(is_valid_identifier("users"));
        assert!(is_valid_identifier("_tmp_2"));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("drop table"));
        assert!(!is_valid_identifier("a\"b"));
        assert!(!is_valid_identifier(""));
    }

    #[tokio::test]
    async fn memory_store_keeps_batches() {
        let store = MemoryStore::new();
        let mut batch = Batch::new("t", vec!["id".to_string()]);
        batch.rows.push(vec![GeneratedValue::Int(1)]);
        batch.rows.push(vec![GeneratedValue::Int(2)]);
        assert_eq!(store.insert_batch(&batch).await.expect("insert"), 2);
        assert_eq!(store.row_count(), 2);
        assert_eq!(store.batches()[0], batch);
    }
}
