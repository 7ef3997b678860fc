//! PostgreSQL storage over a connection pool. Each write is its own transaction.

use super::MovieStore;
use crate::error::{AppError, AppResult};
use crate::model::{Actor, FieldValue, Movie, MovieChanges, NewMovie};
use crate::sql::{self, queries};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    async fn execute_and_commit(&self, query: Query<'_, Postgres, PgArguments>) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        match query.execute(&mut *tx).await {
            Ok(done) => {
                tx.commit().await?;
                Ok(done.rows_affected() > 0)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl MovieStore for PgStore {
    async fn movies(&self) -> AppResult<Vec<Movie>> {
        tracing::debug!(sql = %queries::GET_MOVIES, "query");
        Ok(sqlx::query_as::<_, Movie>(queries::GET_MOVIES).fetch_all(&self.pool).await?)
    }

    async fn actors(&self) -> AppResult<Vec<Actor>> {
        tracing::debug!(sql = %queries::GET_ACTORS, "query");
        Ok(sqlx::query_as::<_, Actor>(queries::GET_ACTORS).fetch_all(&self.pool).await?)
    }

    async fn movie_ids(&self) -> AppResult<Vec<Uuid>> {
        tracing::debug!(sql = %queries::GET_MOVIE_IDS, "query");
        Ok(sqlx::query_scalar::<_, Uuid>(queries::GET_MOVIE_IDS).fetch_all(&self.pool).await?)
    }

    async fn movie_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        tracing::debug!(sql = %queries::GET_MOVIE_BY_TITLE, title = %title, "query");
        Ok(sqlx::query_as::<_, Movie>(queries::GET_MOVIE_BY_TITLE)
            .bind(title)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_movie(&self, movie: &NewMovie) -> AppResult<Option<Uuid>> {
        let id = Uuid::new_v4();
        tracing::debug!(sql = %queries::INSERT_MOVIE, id = %id, "query");
        let query = sqlx::query(queries::INSERT_MOVIE)
            .bind(id)
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(&movie.genre)
            .bind(movie.year)
            .bind(&movie.trailer)
            .bind(&movie.poster);
        match self.execute_and_commit(query).await {
            Ok(true) => Ok(Some(id)),
            Ok(false) => Ok(None),
            Err(AppError::Db(sqlx::Error::Database(db))) if db.is_unique_violation() => {
                Err(AppError::Conflict(movie.title.clone()))
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_movie(&self, id: Uuid) -> AppResult<bool> {
        tracing::debug!(sql = %queries::DELETE_MOVIE, id = %id, "query");
        self.execute_and_commit(sqlx::query(queries::DELETE_MOVIE).bind(id)).await
    }

    async fn update_movie(&self, id: Uuid, changes: &MovieChanges) -> AppResult<bool> {
        let Some(q) = sql::update_movie(changes) else {
            return Ok(false);
        };
        tracing::debug!(sql = %q.sql, id = %id, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params {
            query = match p {
                FieldValue::Text(s) => query.bind(s),
                FieldValue::Int(n) => query.bind(n),
            };
        }
        self.execute_and_commit(query.bind(id)).await
    }

    async fn token_exists(&self, token: &str) -> AppResult<bool> {
        tracing::debug!(sql = %queries::CHECK_TOKEN, "query");
        let n: i64 = sqlx::query_scalar(queries::CHECK_TOKEN)
            .bind(token)
            .fetch_one(&self.pool)
            .await?;
        Ok(n > 0)
    }

    async fn movie_exists(&self, id: Uuid) -> AppResult<bool> {
        tracing::debug!(sql = %queries::CHECK_MOVIE, id = %id, "query");
        let n: i64 = sqlx::query_scalar(queries::CHECK_MOVIE)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(n > 0)
    }
}
