//! Storage access for movies, actors and tokens.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppResult;
use crate::model::{Actor, Movie, MovieChanges, NewMovie};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn movies(&self) -> AppResult<Vec<Movie>>;

    async fn actors(&self) -> AppResult<Vec<Actor>>;

    async fn movie_ids(&self) -> AppResult<Vec<Uuid>>;

    async fn movie_by_title(&self, title: &str) -> AppResult<Option<Movie>>;

    /// Insert under a freshly generated id. `Ok(None)` when no row was written;
    /// a taken title is `AppError::Conflict` and leaves the store unchanged.
    async fn insert_movie(&self, movie: &NewMovie) -> AppResult<Option<Uuid>>;

    /// True when a row was removed.
    async fn delete_movie(&self, id: Uuid) -> AppResult<bool>;

    /// Writes only the supplied attributes. True when a row was changed.
    async fn update_movie(&self, id: Uuid, changes: &MovieChanges) -> AppResult<bool>;

    async fn token_exists(&self, token: &str) -> AppResult<bool>;

    async fn movie_exists(&self, id: Uuid) -> AppResult<bool>;
}
