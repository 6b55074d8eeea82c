use rusqlite::Connection;
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

pub const DEFAULT_BUCKET: &str = "questions_and_answers";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.invalid_bucket_name")]
    InvalidBucketName,
    #[error("database.bucket_error")]
    BucketError,
    #[error("database.locked")]
    Locked,
}

/// Configuration for the local store file
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub bucket: String,
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new store configuration with default values
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            bucket: DEFAULT_BUCKET.to_string(),
            busy_timeout: Duration::from_secs(1),
        }
    }
}

/// Opens the store file, creating it and its parent directories if absent,
/// and ensures the configured bucket exists.
///
/// The exclusive lock is taken here, before returning, and held until the
/// connection is dropped. A second process opening the same file, new or
/// existing, fails with `Locked` after `busy_timeout`.
pub fn open_database(config: &DatabaseConfig) -> Result<Connection, DatabaseError> {
    if let Some(parent) = config.path.parent() {
        std::fs::create_dir_all(parent).map_err(|_| DatabaseError::ConnectionError)?;
    }

    let conn = Connection::open(&config.path).map_err(|_| DatabaseError::ConnectionError)?;
    conn.busy_timeout(config.busy_timeout)
        .map_err(|_| DatabaseError::ConnectionError)?;
    conn.pragma_update_and_check(None, "locking_mode", "EXCLUSIVE", |row| {
        row.get::<_, String>(0)
    })
    .map_err(|_| DatabaseError::ConnectionError)?;

    if !is_valid_bucket_name(&config.bucket) {
        return Err(DatabaseError::InvalidBucketName);
    }

    // Exclusive locking mode keeps the lock after COMMIT
    conn.execute_batch("BEGIN EXCLUSIVE")
        .map_err(|_| DatabaseError::Locked)?;
    create_bucket_if_not_exists(&conn, &config.bucket)?;
    conn.execute_batch("COMMIT")
        .map_err(|_| DatabaseError::BucketError)?;
    tracing::debug!(path = %config.path.display(), bucket = %config.bucket, "store opened");

    Ok(conn)
}

/// Creates the key/value table backing a bucket.
pub fn create_bucket_if_not_exists(conn: &Connection, bucket: &str) -> Result<(), DatabaseError> {
    // Bucket names are interpolated into SQL
    if !is_valid_bucket_name(bucket) {
        return Err(DatabaseError::InvalidBucketName);
    }

    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {} (key TEXT PRIMARY KEY NOT NULL, value BLOB NOT NULL)",
            bucket
        ),
        [],
    )
    .map_err(|_| DatabaseError::BucketError)?;

    Ok(())
}

fn is_valid_bucket_name(bucket: &str) -> bool {
    let mut chars = bucket.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
