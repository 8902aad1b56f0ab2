/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:fitness_center.db | sqlx connection URL |
/// | HTTP_HOST | 0.0.0.0 | listen address |
/// | HTTP_PORT | 5000 | listen port |
/// | DB_MAX_CONNECTIONS | 5 | pool size |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | info | default filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily rolling log files when set |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/fitness.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection URL
    pub database_url: String,
    /// Listen address
    pub http_host: String,
    /// Listen port
    pub http_port: u16,
    /// Connection pool size
    pub db_max_connections: u32,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default log level
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:fitness_center.db".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Production switches logging to JSON lines
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
