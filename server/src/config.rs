use std::env;

pub const DEFAULT_PORT: u16 = 8000;

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Postgres connection string. `None` runs the board without storage.
    pub database_url: Option<String>,
    pub port: u16,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests never touch the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| normalize_database_url(url.trim()));

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                tracing::warn!("Invalid PORT value {raw:?} ({e}), using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            database_url,
            port,
            debug: parse_bool(lookup("DEBUG").as_deref(), false),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Whether DEBUG is set, read before logging is configured.
pub fn debug_from_env() -> bool {
    parse_bool(env::var("DEBUG").ok().as_deref(), false)
}

/// Interpret a flag value. Only `1`, `true`, `yes` and `on` (any case) are true.
pub fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
    }
}

/// Rewrite hosting-provider and SQLAlchemy URL schemes into the `postgresql://`
/// form libpq expects. Only the leading scheme is touched.
pub fn normalize_database_url(url: &str) -> String {
    const PG_SCHEME: &str = "postgresql://";
    const ALIASES: [&str; 2] = ["postgres://", "postgresql+psycopg2://"];

    for alias in ALIASES {
        if let Some(rest) = url.strip_prefix(alias) {
            return format!("{PG_SCHEME}{rest}");
        }
    }
    url.to_string()
}
