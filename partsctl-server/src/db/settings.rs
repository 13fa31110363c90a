//! Store connection settings read from the environment
//!
//! `DATABASE_URL` (read by the CLI) wins when present. Otherwise the URL is
//! assembled from the individual `DB_*` variables, each with a default.

/// Default host for the catalog database
const DEFAULT_HOST: &str = "localhost";

/// Default PostgreSQL port
const DEFAULT_PORT: u16 = 5432;

/// Default database name
const DEFAULT_NAME: &str = "FornitoriPezziDB";

/// Default database user
const DEFAULT_USER: &str = "postgres";

/// Individual connection settings (`DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASS`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            name: DEFAULT_NAME.to_string(),
            user: DEFAULT_USER.to_string(),
            password: String::new(),
        }
    }
}

impl DbSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "DB_PORT is not a valid port, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            name: lookup("DB_NAME").unwrap_or(defaults.name),
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASS").unwrap_or(defaults.password),
        }
    }

    /// PostgreSQL connection URL with percent-encoded credentials.
    pub fn url(&self) -> String {
        let user = urlencoding::encode(&self.user);
        let credentials = if self.password.is_empty() {
            user.into_owned()
        } else {
            format!("{}:{}", user, urlencoding::encode(&self.password))
        };

        format!(
            "postgres://{}@{}:{}/{}",
            credentials,
            self.host,
            self.port,
            urlencoding::encode(&self.name)
        )
    }

    /// Host, port and database name, without credentials (safe to log).
    pub fn describe(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.name)
    }
}
