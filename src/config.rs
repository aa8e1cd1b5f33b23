//! Configuration for the gallery API server.
//!
//! All settings come from environment variables with documented defaults,
//! so the binary runs out of the box against a local MySQL and degrades
//! to demo mode when none is reachable.
//!
//! | Variable       | Default            |
//! |----------------|--------------------|
//! | `PORT`         | `3000`             |
//! | `DB_HOST`      | `localhost`        |
//! | `DB_PORT`      | `3306`             |
//! | `DB_USER`      | `root`             |
//! | `DB_PASSWORD`  | (empty)            |
//! | `DB_NAME`      | `heavy_gallery_db` |
//! | `DB_POOL_SIZE` | `10`               |

use anyhow::{Context, Result};

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default size of the MySQL connection pool.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Root configuration, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port.
    pub port: u16,
    pub database: DatabaseConfig,
}

/// Connection settings for the persistent store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Maximum pooled connections; excess demand waits for a free one.
    pub pool_size: u32,
}

impl Config {
    /// Loads configuration from the environment, falling back to the
    /// documented defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparseable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env_parsed("PORT", DEFAULT_PORT)?,
            database: DatabaseConfig {
                host: env_or("DB_HOST", "localhost"),
                port: env_parsed("DB_PORT", 3306)?,
                user: env_or("DB_USER", "root"),
                password: env_or("DB_PASSWORD", ""),
                database: env_or("DB_NAME", "heavy_gallery_db"),
                pool_size: env_parsed("DB_POOL_SIZE", DEFAULT_POOL_SIZE)?,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Env vars are unset in the test environment.
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.database, "heavy_gallery_db");
        assert_eq!(config.database.pool_size, DEFAULT_POOL_SIZE);
    }
}
