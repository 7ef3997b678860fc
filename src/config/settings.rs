//! Runtime settings read from the process environment (and `.env` when present).

use crate::config::{DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PG_PORT, DEFAULT_PORT, RATING_API_URL, TEMPLATE_DIR};
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub database_url: String,
    pub max_connections: u32,
    /// Key for the upstream rating API. Empty when unset; upstream then answers non-200.
    pub api_key: String,
    pub rating_url: String,
    pub template_dir: PathBuf,
    /// Token inserted at startup so a fresh database has a usable credential.
    pub seed_token: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = env_or("HOST", DEFAULT_HOST);
        let port: u16 = match std::env::var("PORT") {
            Ok(p) => p.parse().map_err(|_| ConfigError::Invalid { name: "PORT", value: p })?,
            Err(_) => DEFAULT_PORT,
        };
        let addr_str = format!("{}:{}", host, port);
        let addr = addr_str
            .parse()
            .map_err(|_| ConfigError::Invalid { name: "HOST", value: addr_str })?;

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Settings {
            addr,
            database_url: database_url_from_env(),
            max_connections,
            api_key: env_or("API_KEY", ""),
            rating_url: env_or("RATING_API_URL", RATING_API_URL),
            template_dir: PathBuf::from(env_or("TEMPLATE_DIR", TEMPLATE_DIR)),
            seed_token: std::env::var("SEED_TOKEN").ok().filter(|s| !s.trim().is_empty()),
        })
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the `PG_*` parts.
fn database_url_from_env() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }
    let port = pg_port(std::env::var("PG_PORT").ok().as_deref());
    database_url(
        &env_or("PG_HOST", "127.0.0.1"),
        port,
        &env_or("PG_DBNAME", "test"),
        &env_or("PG_USER", "test"),
        std::env::var("PG_PASSWORD").ok().as_deref(),
    )
}

/// Non-numeric or missing ports fall back to the default.
fn pg_port(raw: Option<&str>) -> u16 {
    raw.filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PG_PORT)
}

fn database_url(host: &str, port: u16, dbname: &str, user: &str, password: Option<&str>) -> String {
    match password {
        Some(pw) => format!("postgres://{}:{}@{}:{}/{}", user, pw, host, port, dbname),
        None => format!("postgres://{}@{}:{}/{}", user, host, port, dbname),
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pg_port_falls_back_on_garbage() {
        assert_eq!(pg_port(Some("6543")), 6543);
        assert_eq!(pg_port(Some("")), DEFAULT_PG_PORT);
        assert_eq!(pg_port(Some("54x")), DEFAULT_PG_PORT);
        assert_eq!(pg_port(None), DEFAULT_PG_PORT);
    }

    #[test]
    fn database_url_with_and_without_password() {
        assert_eq!(
            database_url("db", 5432, "movies", "app", Some("pw")),
            "postgres://app:pw@db:5432/movies"
        );
        assert_eq!(database_url("db", 5432, "movies", "app", None), "postgres://app@db:5432/movies");
    }
}
