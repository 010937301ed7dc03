use std::path::PathBuf;

use crate::auth::session::SessionConfig;

/// Value of `APP_ENV` that enables production behaviour.
const PRODUCTION_ENV: &str = "production";

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// Production mode: secure cookies and a `/tmp` data root.
    pub production: bool,
    /// Directory holding `projects.json`, `messages.json` and `users.json`.
    pub data_dir: PathBuf,
    /// Session token configuration (secret, lifetime, cookie flags).
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `development`              |
    /// | `VERCEL`               | unset                      |
    /// | `DATA_DIR`             | see below                  |
    ///
    /// Collections live under `$DATA_DIR/data`. Without `DATA_DIR` the root
    /// is `/tmp` in production (or when `VERCEL` is set) and the working
    /// directory otherwise.
    ///
    /// # Panics
    ///
    /// Panics on an unparsable `PORT` or `REQUEST_TIMEOUT_SECS`, and when
    /// `JWT_SECRET` is missing.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let production = std::env::var("APP_ENV").is_ok_and(|v| v == PRODUCTION_ENV);
        let hosted = std::env::var("VERCEL").is_ok();
        let data_dir = folio_db::resolve_data_dir(
            std::env::var("DATA_DIR").ok().as_deref(),
            production || hosted,
        );

        let session = SessionConfig::from_env(production);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            production,
            data_dir,
            session,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" https://a.dev ,, http://localhost:3000 "),
            vec!["https://a.dev", "http://localhost:3000"]
        );
    }
}
