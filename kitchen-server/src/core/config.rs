use std::time::Duration;

/// Kitchen server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8084 | HTTP listen port |
/// | DATABASE_PATH | kitchen.db | SQLite database file |
/// | INVENTORY_SERVICE_URL | (unset) | Inventory service base URL; unset disables deductions |
/// | INVENTORY_TIMEOUT_MS | 2000 | Timeout for every inventory call |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Default log level when RUST_LOG is unset |
/// | LOG_JSON | false | Emit JSON log lines |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
///
/// # Example
///
/// ```ignore
/// INVENTORY_SERVICE_URL=http://localhost:8083 HTTP_PORT=9000 cargo run -p kitchen-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    pub inventory_service_url: Option<String>,
    pub inventory_timeout_ms: u64,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8084),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "kitchen.db".into()),
            inventory_service_url: std::env::var("INVENTORY_SERVICE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            inventory_timeout_ms: std::env::var("INVENTORY_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the values tests care about
    pub fn with_overrides(
        database_path: impl Into<String>,
        http_port: u16,
        inventory_service_url: Option<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config.inventory_service_url = inventory_service_url;
        config
    }

    pub fn inventory_timeout(&self) -> Duration {
        Duration::from_millis(self.inventory_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Production always logs JSON
    pub fn json_logs(&self) -> bool {
        self.log_json || self.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
