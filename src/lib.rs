//! Movie catalogue service: CRUD over movies with token-guarded writes,
//! server-rendered pages and an external rating lookup.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod rating;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;
pub mod views;

pub use config::Settings;
pub use error::{AppError, AppResult, ConfigError};
pub use migration::{ensure_schema, seed_token};
pub use rating::{OmdbClient, RatingError, RatingSource};
pub use routes::movie_routes;
pub use state::AppState;
pub use store::{MemoryStore, MovieStore, PgStore};
pub use views::Views;
