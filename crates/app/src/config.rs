/// Application configuration loaded from environment variables.
///
/// Only `DATABASE_URL` is required; everything else has a development
/// default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string.
    pub database_url: String,
    /// Pool size (default: `5`).
    pub max_connections: u32,
    /// Drop and recreate the schema on startup (default: `false`).
    pub drop_first: bool,
    /// Insert the demo articles on startup (default: `false`).
    pub seed_demo: bool,
}

/// Error raised when an environment variable is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}: expected {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var              | Default  |
    /// |----------------------|----------|
    /// | `DATABASE_URL`       | required |
    /// | `DB_MAX_CONNECTIONS` | `5`      |
    /// | `DB_DROP_FIRST`      | `false`  |
    /// | `SEED_DEMO_DATA`     | `false`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DB_MAX_CONNECTIONS",
                        value: raw,
                        expected: "a positive integer",
                    })
                }
            },
            None => 5,
        };

        let drop_first = parse_flag("DB_DROP_FIRST", lookup("DB_DROP_FIRST"))?;
        let seed_demo = parse_flag("SEED_DEMO_DATA", lookup("SEED_DEMO_DATA"))?;

        Ok(Self {
            database_url,
            max_connections,
            drop_first,
            seed_demo,
        })
    }
}

fn parse_flag(name: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw,
            expected: "a boolean",
        }),
    }
}
