use std::str::FromStr;

use url::Url;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub log_queries: bool,
}

impl DatabaseConfig {
    /// Connection URL with user, password and database name percent-encoded.
    pub fn url(&self) -> Result<String, ConfigError> {
        let invalid_host = || ConfigError::Invalid {
            key: "DB_HOST",
            value: self.host.clone(),
        };

        let mut url = Url::parse(&format!("postgres://{}:{}/", self.host, self.port))
            .map_err(|_| invalid_host())?;

        url.set_username(&self.user).map_err(|_| invalid_host())?;
        url.set_password(Some(&self.password))
            .map_err(|_| invalid_host())?;
        url.path_segments_mut()
            .map_err(|_| invalid_host())?
            .pop_if_empty()
            .push(&self.name);

        Ok(url.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads `.env.{ENV}` (falling back to `.env`) and reads the process
    /// environment.
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            host: required(&lookup, "DB_HOST")?,
            port: required_parsed(&lookup, "DB_PORT")?,
            name: required(&lookup, "DB_NAME")?,
            user: required(&lookup, "DB_USER")?,
            password: required(&lookup, "DB_PASSWORD")?,
            max_connections: optional_parsed(&lookup, "DB_MAX_CONNECTIONS", 50)?,
            min_connections: optional_parsed(&lookup, "DB_MIN_CONNECTIONS", 10)?,
            log_queries: optional_parsed(&lookup, "DB_LOG_QUERIES", false)?,
        };

        Ok(Self {
            env: lookup("ENV").unwrap_or_else(|| "development".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: optional_parsed(&lookup, "PORT", 8080)?,
            database,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Err(ConfigError::Missing(key)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
        Some(value) => Ok(value),
    }
}

fn required_parsed<F, T>(lookup: &F, key: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = required(lookup, key)?;
    parse(key, raw)
}

fn optional_parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => parse(key, raw),
        _ => Ok(default),
    }
}

fn parse<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}
