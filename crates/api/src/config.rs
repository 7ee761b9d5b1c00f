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
    /// Session lifetime and sweep settings.
    pub session: SessionConfig,
}

/// Session store settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Lifetime of a session token in days (default: `7`).
    pub ttl_days: i64,
    /// Interval of the background expiry sweep. `None` leaves expiry purely
    /// lazy (entries are dropped when a request presents them).
    pub sweep_interval_secs: Option<u64>,
}

/// Default session lifetime in days.
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

/// Longest accepted session lifetime in days (roughly a century).
const MAX_SESSION_TTL_DAYS: i64 = 36_500;

/// Reject session lifetimes outside `1..=MAX_SESSION_TTL_DAYS`.
fn check_ttl_days(ttl_days: i64) -> Result<i64, String> {
    if (1..=MAX_SESSION_TTL_DAYS).contains(&ttl_days) {
        Ok(ttl_days)
    } else {
        Err(format!(
            "SESSION_TTL_DAYS must be between 1 and {MAX_SESSION_TTL_DAYS}, got {ttl_days}"
        ))
    }
}

impl SessionConfig {
    /// Session TTL as a chrono duration.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.ttl_days)
    }

    /// Load session settings from the environment.
    ///
    /// | Env Var                       | Default |
    /// |-------------------------------|---------|
    /// | `SESSION_TTL_DAYS`            | `7`     |
    /// | `SESSION_SWEEP_INTERVAL_SECS` | unset   |
    pub fn from_env() -> Self {
        let ttl_days: i64 = std::env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_DAYS.to_string())
            .parse()
            .expect("SESSION_TTL_DAYS must be a valid i64");
        let ttl_days = check_ttl_days(ttl_days).unwrap_or_else(|msg| panic!("{msg}"));

        let sweep_interval_secs = std::env::var("SESSION_SWEEP_INTERVAL_SECS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.trim()
                    .parse::<u64>()
                    .expect("SESSION_SWEEP_INTERVAL_SECS must be a valid u64")
            })
            .filter(|secs| *secs > 0);

        Self {
            ttl_days,
            sweep_interval_secs,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_days: DEFAULT_SESSION_TTL_DAYS,
            sweep_interval_secs: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Session settings are read by [`SessionConfig::from_env`].
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

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session: SessionConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_days_must_be_positive() {
        assert!(check_ttl_days(0).is_err());
        assert!(check_ttl_days(-3).is_err());
        assert_eq!(check_ttl_days(1), Ok(1));
    }

    #[test]
    fn ttl_days_are_capped() {
        assert_eq!(check_ttl_days(MAX_SESSION_TTL_DAYS), Ok(MAX_SESSION_TTL_DAYS));
        assert!(check_ttl_days(MAX_SESSION_TTL_DAYS + 1).is_err());
        assert!(check_ttl_days(100_000_000).is_err());
    }

    #[test]
    fn largest_accepted_ttl_does_not_overflow_expiry() {
        let ttl = SessionConfig {
            ttl_days: MAX_SESSION_TTL_DAYS,
            sweep_interval_secs: None,
        }
        .ttl();
        assert!(chrono::Utc::now().checked_add_signed(ttl).is_some());
    }
}
