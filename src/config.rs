use crate::error::config::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_sql_logging: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable holds an unparsable value
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(max) if max > 0 => max,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: "must be greater than 0".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        let database_sql_logging = match lookup("DATABASE_SQL_LOGGING") {
            None => false,
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "DATABASE_SQL_LOGGING".to_string(),
                    reason: e.to_string(),
                })?,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            database_sql_logging,
        })
    }
}
