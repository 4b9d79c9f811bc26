//! Load configuration from environment variables.

use crate::config::types::{AppConfig, DbConfig, ServerConfig};
use crate::error::ConfigError;

impl AppConfig {
    /// Read `DB_*`, `BIND_ADDR` and `CORS_ORIGINS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with a custom lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_defaults = DbConfig::default();
        let server_defaults = ServerConfig::default();

        let port = match lookup("DB_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { name: "DB_PORT", value: v.clone() })?,
            None => db_defaults.port,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let config = AppConfig {
            db: DbConfig {
                host: lookup("DB_HOST").unwrap_or(db_defaults.host),
                port,
                user: lookup("DB_USER").unwrap_or(db_defaults.user),
                password: lookup("DB_PASSWORD").unwrap_or(db_defaults.password),
                name: lookup("DB_NAME").unwrap_or(db_defaults.name),
            },
            server: ServerConfig {
                bind_addr: lookup("BIND_ADDR").unwrap_or(server_defaults.bind_addr),
                cors_origins,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.db.port, 5432);
    }

    #[test]
    fn reads_database_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "shop"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "catalog"),
        ]))
        .unwrap();
        assert_eq!(config.db.host, "db.internal");
        assert_eq!(config.db.port, 6543);
        assert_eq!(config.db.user, "shop");
        assert_eq!(config.db.password, "secret");
        assert_eq!(config.db.name, "catalog");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("DB_PORT", "five")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "DB_PORT", .. }));
    }

    #[test]
    fn rejects_blank_database_name() {
        let err = AppConfig::from_lookup(lookup_from(&[("DB_NAME", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "DB_NAME", .. }));
    }

    #[test]
    fn splits_cors_origins() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "CORS_ORIGINS",
            "http://localhost:3000, https://shop.example.com,",
        )]))
        .unwrap();
        assert_eq!(
            config.server.cors_origins,
            vec!["http://localhost:3000".to_string(), "https://shop.example.com".to_string()]
        );
    }
}
