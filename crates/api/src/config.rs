/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Target number of distinct annotators per item before the selector
    /// stops preferring it (default: `3`).
    pub goal_coverage: i64,
    /// Probability of turning an all-human presentation into an attention
    /// check for a crowd-worker (default: `0.5`).
    pub attention_check_rate: f64,
    /// Leaderboard cache staleness threshold in seconds (default: `900`).
    pub leaderboard_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `GOAL_COVERAGE`         | `3`                     |
    /// | `ATTENTION_CHECK_RATE`  | `0.5`                   |
    /// | `LEADERBOARD_TTL_SECS`  | `900`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

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

        let goal_coverage: i64 = std::env::var("GOAL_COVERAGE")
            .unwrap_or_else(|_| "3".into())
            .parse()
            .expect("GOAL_COVERAGE must be a valid i64");

        let attention_check_rate: f64 = std::env::var("ATTENTION_CHECK_RATE")
            .unwrap_or_else(|_| "0.5".into())
            .parse()
            .expect("ATTENTION_CHECK_RATE must be a valid f64");

        let leaderboard_ttl_secs: u64 = std::env::var("LEADERBOARD_TTL_SECS")
            .unwrap_or_else(|_| "900".into())
            .parse()
            .expect("LEADERBOARD_TTL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            goal_coverage,
            attention_check_rate,
            leaderboard_ttl_secs,
        }
    }
}
