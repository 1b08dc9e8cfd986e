use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DATABASE_URL | sqlite:{WORK_DIR}/menu.db | SQLite location |
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Rolling log file directory |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout (ms) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown window (ms) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/menu HTTP_PORT=8080 cargo run -p menu-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database file and logs
    pub work_dir: String,
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | production
    pub environment: String,
    /// tracing level filter
    pub log_level: String,
    /// Optional directory for daily rolling log files
    pub log_dir: Option<String>,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
    /// Shutdown timeout (ms)
    pub shutdown_timeout_ms: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults
    pub fn from_env() -> Self {
        let work_dir = env_or("WORK_DIR", "./data");
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| format!("sqlite:{}/menu.db", work_dir.trim_end_matches('/')));

        Self {
            database_url,
            work_dir,
            http_port: env_parse("HTTP_PORT", 5000),
            environment: env_or("ENVIRONMENT", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
        }
    }

    /// Override the working directory, database and port
    ///
    /// Mostly used by tests
    pub fn with_overrides(
        work_dir: impl Into<String>,
        database_url: impl Into<String>,
        http_port: u16,
    ) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    /// Create the working directory if it does not exist yet
    pub fn ensure_work_dir(&self) -> std::io::Result<PathBuf> {
        let dir = PathBuf::from(&self.work_dir);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }

    /// Whether this is the production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is the development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
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
    fn test_with_overrides() {
        let config = Config::with_overrides("/tmp/menu", "sqlite::memory:", 0);
        assert_eq!(config.work_dir, "/tmp/menu");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.http_port, 0);
    }

    #[test]
    fn test_durations() {
        let mut config = Config::with_overrides("/tmp/menu", "sqlite::memory:", 0);
        config.request_timeout_ms = 1500;
        config.shutdown_timeout_ms = 250;
        assert_eq!(config.request_timeout(), Duration::from_millis(1500));
        assert_eq!(config.shutdown_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_ensure_work_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let config = Config::with_overrides(dir.to_string_lossy(), "sqlite::memory:", 0);
        let created = config.ensure_work_dir().unwrap();
        assert!(created.is_dir());
    }
}
