/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | store.db | SQLite database file |
/// | HTTP_PORT | 8000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | fallback filter when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | enables daily rolling file logs |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (ms) |
/// | DB_MAX_CONNECTIONS | 5 | SQLite pool size |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/store.db HTTP_PORT=8080 cargo run -p store-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    pub db_max_connections: u32,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "store.db".into()),
            http_port: env_or("HTTP_PORT", 8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30_000),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5),
        }
    }

    /// Same as `from_env` with a different database file. Used by tests.
    pub fn with_database_path(path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.database_path = path.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_database_path() {
        let config = Config::with_database_path("/tmp/other.db");
        assert_eq!(config.database_path, "/tmp/other.db");
        assert!(config.db_max_connections >= 1);
    }

    #[test]
    fn test_env_or_default_when_unset() {
        assert_eq!(env_or("STORE_SERVER_TEST_UNSET_VARIABLE", 42u16), 42);
    }
}
