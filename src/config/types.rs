//! Runtime configuration types.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;

/// Connection parameters for the products database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            name: "products".into(),
        }
    }
}

impl DbConfig {
    /// Options for a connection to the configured database.
    pub fn connect_options(&self) -> PgConnectOptions {
        self.connect_options_for(&self.name)
    }

    /// Options for a connection to the maintenance database, used to create `name` when missing.
    pub fn admin_connect_options(&self) -> PgConnectOptions {
        self.connect_options_for("postgres")
    }

    fn connect_options_for(&self, database: &str) -> PgConnectOptions {
        let opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(database);
        if self.password.is_empty() {
            opts
        } else {
            opts.password(&self.password)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".into(),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue { name: "DB_NAME", value: self.db.name.clone() });
        }
        if self.db.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue { name: "DB_HOST", value: self.db.host.clone() });
        }
        Ok(())
    }
}
