//! In-memory storage with the same invariants as the database schema.

use super::MovieStore;
use crate::error::{AppError, AppResult};
use crate::model::{Actor, Movie, MovieChanges, NewMovie, FULL_NAME_MAX_CHARS};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    movies: Vec<Movie>,
    actors: Vec<Actor>,
    tokens: HashSet<String>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, token: impl Into<String>) -> Self {
        if let Ok(mut t) = self.tables.write() {
            t.tokens.insert(token.into());
        }
        self
    }

    /// Attach an actor to an existing movie. Mirrors the foreign key and the name length check.
    pub fn add_actor(&self, full_name: &str, birth_date: &str, movie_id: Uuid) -> AppResult<Uuid> {
        if full_name.chars().count() > FULL_NAME_MAX_CHARS {
            return Err(AppError::BadRequest(format!(
                "full_name must be at most {} characters",
                FULL_NAME_MAX_CHARS
            )));
        }
        let mut t = self.write()?;
        if !t.movies.iter().any(|m| m.id == movie_id) {
            return Err(AppError::Internal(format!("movie {} does not exist", movie_id)));
        }
        let id = Uuid::new_v4();
        t.actors.push(Actor {
            id,
            full_name: full_name.to_string(),
            birth_date: birth_date.to_string(),
            movie_id,
        });
        Ok(id)
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| AppError::Internal("store lock poisoned".into()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| AppError::Internal("store lock poisoned".into()))
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn movies(&self) -> AppResult<Vec<Movie>> {
        let mut movies = self.read()?.movies.clone();
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(movies)
    }

    async fn actors(&self) -> AppResult<Vec<Actor>> {
        let mut actors = self.read()?.actors.clone();
        actors.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(actors)
    }

    async fn movie_ids(&self) -> AppResult<Vec<Uuid>> {
        Ok(self.read()?.movies.iter().map(|m| m.id).collect())
    }

    async fn movie_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        Ok(self.read()?.movies.iter().find(|m| m.title == title).cloned())
    }

    async fn insert_movie(&self, movie: &NewMovie) -> AppResult<Option<Uuid>> {
        let mut t = self.write()?;
        if t.movies.iter().any(|m| m.title == movie.title) {
            return Err(AppError::Conflict(movie.title.clone()));
        }
        let id = Uuid::new_v4();
        t.movies.push(Movie {
            id,
            title: movie.title.clone(),
            description: movie.description.clone(),
            genre: movie.genre.clone(),
            year: movie.year,
            trailer: movie.trailer.clone(),
            poster: movie.poster.clone(),
        });
        Ok(Some(id))
    }

    async fn delete_movie(&self, id: Uuid) -> AppResult<bool> {
        let mut t = self.write()?;
        let before = t.movies.len();
        t.movies.retain(|m| m.id != id);
        Ok(t.movies.len() < before)
    }

    async fn update_movie(&self, id: Uuid, changes: &MovieChanges) -> AppResult<bool> {
        let mut t = self.write()?;
        if let Some(title) = &changes.title {
            if t.movies.iter().any(|m| m.id != id && &m.title == title) {
                return Err(AppError::Internal(format!("title {} is already taken", title)));
            }
        }
        match t.movies.iter_mut().find(|m| m.id == id) {
            Some(movie) if !changes.fields().is_empty() => {
                changes.apply(movie);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn token_exists(&self, token: &str) -> AppResult<bool> {
        Ok(self.read()?.tokens.contains(token))
    }

    async fn movie_exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.read()?.movies.iter().any(|m| m.id == id))
    }
}
