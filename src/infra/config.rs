//! Centralized configuration (environment variables + fixed constants).

use anyhow::anyhow;

/// Address the HTTP server binds to.
pub const LISTEN_ADDR: &str = "0.0.0.0:3001";

/// Upper bound on pooled database connections.
pub const MAX_DB_CONNECTIONS: u32 = 5;

/// Primary connection string variable.
pub const DATABASE_URI_VAR: &str = "MONGODB_URI";

/// Accepted when `MONGODB_URI` is not set.
pub const DATABASE_URI_FALLBACK_VAR: &str = "DATABASE_URL";

/// Loads `.env` into the process environment if present.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Database connection string (required, no default), with the variable it was read from.
pub fn database_uri() -> anyhow::Result<(&'static str, String)> {
    database_uri_from(|var| std::env::var(var).ok())
}

fn database_uri_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<(&'static str, String)> {
    [DATABASE_URI_VAR, DATABASE_URI_FALLBACK_VAR]
        .into_iter()
        .find_map(|var| lookup(var).filter(|v| !v.trim().is_empty()).map(|v| (var, v)))
        .ok_or_else(|| anyhow!("{} must be set", DATABASE_URI_VAR))
}
