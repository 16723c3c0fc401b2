use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Answers, PollResponse, PollType};
use crate::source::{ResponseSink, ResponseSource};

/// Create the parent directory of a file-backed SQLite URL
fn ensure_db_dir(db_url: &str) -> Result<(), AppError> {
    let path = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating database directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub async fn init_db(config: &AppConfig) -> Result<SqlitePool, AppError> {
    info!("Initializing database at: {}", config.database_url);

    ensure_db_dir(&config.database_url)?;

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// Create the response table if it does not exist yet
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS poll_responses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            poll_type TEXT NOT NULL,
            answers TEXT NOT NULL,
            timestamp INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_poll_responses_poll_type
            ON poll_responses(poll_type);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// --- Poll responses ---

pub async fn create_poll_response(
    pool: &SqlitePool,
    poll_type: PollType,
    answers: Answers,
) -> Result<PollResponse, sqlx::Error> {
    let timestamp = Utc::now().timestamp();

    sqlx::query_as::<_, PollResponse>(
        r#"
        INSERT INTO poll_responses (poll_type, answers, timestamp)
        VALUES (?, ?, ?)
        RETURNING id, poll_type, answers, timestamp
        "#,
    )
    .bind(poll_type.as_str())
    .bind(Json(answers))
    .bind(timestamp)
    .fetch_one(pool)
    .await
}

pub async fn get_responses_by_type(
    pool: &SqlitePool,
    poll_type: PollType,
) -> Result<Vec<PollResponse>, sqlx::Error> {
    sqlx::query_as::<_, PollResponse>(
        r#"
        SELECT id, poll_type, answers, timestamp
        FROM poll_responses
        WHERE poll_type = ?
        ORDER BY id ASC
        "#,
    )
    .bind(poll_type.as_str())
    .fetch_all(pool)
    .await
}

pub async fn count_by_type(pool: &SqlitePool, poll_type: PollType) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM poll_responses
        WHERE poll_type = ?
        "#,
    )
    .bind(poll_type.as_str())
    .fetch_one(pool)
    .await
}

/// SQLite-backed response store
#[derive(Debug, Clone)]
pub struct SqliteResponseStore {
    pool: SqlitePool,
}

impl SqliteResponseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ResponseSource for SqliteResponseStore {
    async fn fetch_answers(&self, poll_type: PollType) -> Result<Vec<Answers>, AppError> {
        let rows = get_responses_by_type(&self.pool, poll_type).await?;
        Ok(rows.into_iter().map(|row| row.answers.0).collect())
    }
}

#[async_trait]
impl ResponseSink for SqliteResponseStore {
    async fn store(&self, poll_type: PollType, answers: Answers) -> Result<PollResponse, AppError> {
        Ok(create_poll_response(&self.pool, poll_type, answers).await?)
    }
}
