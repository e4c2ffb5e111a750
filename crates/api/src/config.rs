/// Deployment profile selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

/// Fallback secret for local development only.
const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production
/// (`APP_ENV=production`) a real `SECRET_KEY` is mandatory and the server
/// refuses to start without one.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Deployment profile (default: development).
    pub env: AppEnv,
    /// Debug flag; off in production.
    pub debug: bool,
    /// Key used to HMAC-sign session cookies.
    pub secret_key: String,
    /// SQLite database URL (default: `sqlite://classtrack.db`).
    pub database_url: String,
    /// Session lifetime in hours (default: `24`).
    pub session_ttl_hours: i64,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `5000`                        |
    /// | `APP_ENV`              | `development`                 |
    /// | `SECRET_KEY`           | dev fallback (dev only)       |
    /// | `DATABASE_URL`         | `sqlite://classtrack.db`      |
    /// | `SESSION_TTL_HOURS`    | `24`                          |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                          |
    ///
    /// # Panics
    ///
    /// Panics on unparseable values, and in production when `SECRET_KEY`
    /// is missing or empty -- misconfiguration should fail fast.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let env = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => AppEnv::Production,
            _ => AppEnv::Development,
        };

        let secret_key = match env {
            AppEnv::Production => {
                let key = std::env::var("SECRET_KEY")
                    .expect("SECRET_KEY must be set when APP_ENV=production");
                assert!(!key.is_empty(), "SECRET_KEY must not be empty");
                key
            }
            AppEnv::Development => {
                std::env::var("SECRET_KEY").unwrap_or_else(|_| DEV_SECRET_KEY.into())
            }
        };

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://classtrack.db".into());

        let session_ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".into())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            env,
            debug: env == AppEnv::Development,
            secret_key,
            database_url,
            session_ttl_hours,
            cors_origins,
            request_timeout_secs,
        }
    }
}
