//! Static service constants and environment-driven settings.

mod settings;

pub use settings::*;

use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Header carrying the bearer token required by POST, PUT and DELETE.
pub const AUTH_HEADER: &str = "OMDB_API_KEY";
pub const CONTENT_TYPE: &str = "text/html";
/// Value of the `Allow` header sent with 405 responses.
pub const ALLOWED_METHODS: &str = "[GET, HEAD]";

pub const TEMPLATE_DIR: &str = "templates";
pub const TEMPLATE_MAIN: &str = "index.html";
pub const TEMPLATE_MOVIES: &str = "movies.html";
pub const TEMPLATE_ACTORS: &str = "actors.html";

pub const RATING_API_URL: &str = "http://www.omdbapi.com/";
pub const RATING_API_NAME: &str = "OMDB.Ratings";
pub const RATING_TIMEOUT: Duration = Duration::from_secs(8);

pub const DEFAULT_PG_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Upper bound on request bodies accepted by the router.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Path prefix under which mutating requests are accepted.
pub const MOVIES_PREFIX: &str = "/movies";
