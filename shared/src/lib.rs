pub mod registry;

use crate::error::{ConfigError, InitializationError};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub const ENV_VAR_PREFIX: &str = "CONCRETE_REGISTRY__";
pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub http: HttpConfig,
    pub postgres: PostgresConfig,
    pub object_storage: ObjectStorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostgresConfig {
    pub connection_string: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObjectStorageConfig {
    pub bucket: String,
    pub region: String,
    /// Set for S3-compatible stores (e.g. MinIO); unset means real AWS.
    pub endpoint: Option<String>,
    pub key_prefix: String,
    #[serde(default = "default_upload_expiry_seconds")]
    pub upload_expiry_seconds: u64,
    #[serde(default)]
    pub force_path_style: bool,
}

fn default_upload_expiry_seconds() -> u64 {
    900
}

pub fn load_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file(SETTINGS_FILE))
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        .extract::<Config>()?)
}

pub mod error {
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error(transparent)]
        Migration(#[from] sqlx::migrate::MigrateError),
        #[error(transparent)]
        Db(#[from] sqlx::Error),
    }
}

pub async fn initialize_db(
    pg_config: &PostgresConfig,
    migrate: bool,
) -> Result<Pool<Postgres>, InitializationError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&pg_config.connection_string)
        .await?;

    info!(name: "db.connected", "db pool created and connected");

    // Run any new migrations
    if migrate {
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    Ok(pool)
}

pub async fn shutdown_listener(token: Option<CancellationToken>) {
    let ctrl_c = signal::ctrl_c();
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(name: "signal.ctrlc.received", "received Ctrl+C signal, shutting down"),
        _ = terminate => info!(name: "signal.sigterm.received", "received SIGTERM signal, shutting down"),
    }

    if let Some(token) = token {
        token.cancel();
    }
}
