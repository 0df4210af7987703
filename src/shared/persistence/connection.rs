use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use url::Url;

use crate::config::{ConfigError, DatabaseConfig};

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Connect(String),

    #[error("Database ping failed: {0}")]
    Ping(String),

    #[error("Database ping timed out after {0:?}")]
    PingTimeout(Duration),
}

pub fn connect_options(config: &DatabaseConfig) -> Result<ConnectOptions, ConnectError> {
    let mut opt = ConnectOptions::new(config.url()?);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(config.log_queries);
    Ok(opt)
}

/// Masks the password, raw or percent-encoded, in driver messages that
/// echo the connection string.
fn redact(message: &str, config: &DatabaseConfig) -> String {
    let mut redacted = message.to_string();

    let encoded = config
        .url()
        .ok()
        .and_then(|url| Url::parse(&url).ok())
        .and_then(|url| url.password().map(str::to_string));

    for secret in encoded.iter().chain(std::iter::once(&config.password)) {
        if !secret.is_empty() {
            redacted = redacted.replace(secret.as_str(), "***");
        }
    }

    redacted
}

/// Opens the pool and verifies the server answers within five seconds.
#[cfg(not(tarpaulin_include))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, ConnectError> {
    let conn = Database::connect(connect_options(config)?)
        .await
        .map_err(|e| ConnectError::Connect(redact(&e.to_string(), config)))?;

    match tokio::time::timeout(PING_TIMEOUT, conn.ping()).await {
        Ok(Ok(())) => Ok(conn),
        Ok(Err(e)) => Err(ConnectError::Ping(e.to_string())),
        Err(_) => Err(ConnectError::PingTimeout(PING_TIMEOUT)),
    }
}
