//! Bootstrap DDL for the catalogue tables and out-of-band token seeding.
//! Idempotent: every statement is IF NOT EXISTS / ON CONFLICT DO NOTHING.

use crate::error::AppError;
use crate::sql::queries;
use sqlx::PgPool;
use uuid::Uuid;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS token (
        id UUID PRIMARY KEY,
        value TEXT NOT NULL,
        CONSTRAINT _token_uc UNIQUE (value)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS movie (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        genre TEXT NOT NULL,
        year INTEGER NOT NULL,
        trailer TEXT NOT NULL,
        poster TEXT NOT NULL,
        CONSTRAINT title_valid_length CHECK (length(title) <= 50),
        CONSTRAINT description_valid_length CHECK (length(description) <= 500),
        CONSTRAINT title_unique UNIQUE (title)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS actor (
        id UUID PRIMARY KEY,
        full_name TEXT NOT NULL,
        birth_date TEXT NOT NULL,
        movie_id UUID NOT NULL REFERENCES movie (id),
        CONSTRAINT full_name_valid_length CHECK (length(full_name) <= 30)
    )
    "#,
];

pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("schema ready");
    Ok(())
}

/// Insert `value` as a token unless it already exists. True when a row was added.
pub async fn seed_token(pool: &PgPool, value: &str) -> Result<bool, AppError> {
    let done = sqlx::query(queries::INSERT_TOKEN)
        .bind(Uuid::new_v4())
        .bind(value)
        .execute(pool)
        .await?;
    let added = done.rows_affected() > 0;
    if added {
        tracing::info!("seeded auth token");
    }
    Ok(added)
}
