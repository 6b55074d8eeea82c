use persistence::db::{DatabaseConfig, open_database};
use rusqlite::Connection;

use super::app_config::AppConfig;

/// Open the local question/answer store inside the config directory
///
/// # Errors
/// Returns error if the file cannot be opened, is locked by another process,
/// or the bucket cannot be created
pub fn init_database(config: &AppConfig) -> anyhow::Result<Connection> {
    let conn = open_database(&DatabaseConfig::new(config.db_file()))?;
    Ok(conn)
}
