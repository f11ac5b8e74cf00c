use std::env;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:`.
    pub path: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database: DatabaseConfig,
    /// Shown next to the booking table; stored timestamps are not converted.
    pub timezone: String,
    /// Reject empty required fields and malformed dates/times instead of storing them as-is.
    pub strict_validation: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database: DatabaseConfig {
                path: env::var("DATABASE_URL").unwrap_or_else(|_| "studiobook.db".to_string()),
            },
            timezone: env::var("DISPLAY_TIMEZONE").unwrap_or_else(|_| "Asia/Jakarta".to_string()),
            strict_validation: env::var("STRICT_VALIDATION")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
