//! Build [`AppConfig`] from environment variables.

use crate::config::types::{AppConfig, DbConfig, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_PASSWORD: &str = "";
pub const DEFAULT_DB_NAME: &str = "stock_market";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

impl AppConfig {
    /// Read the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve every setting through `lookup`, falling back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db = DbConfig {
            host: text("MYSQLHOST", DEFAULT_DB_HOST),
            user: text("MYSQLUSER", DEFAULT_DB_USER),
            password: text("MYSQLPASSWORD", DEFAULT_DB_PASSWORD),
            database: text("MYSQLDATABASE", DEFAULT_DB_NAME),
            port: parsed(&lookup, "MYSQLPORT", DEFAULT_DB_PORT)?,
            max_connections: parsed(&lookup, "MYSQL_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        };
        let server = ServerConfig {
            host: text("HOST", DEFAULT_HOST),
            port: parsed(&lookup, "PORT", DEFAULT_PORT)?,
        };
        Ok(AppConfig { db, server })
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.user, "root");
        assert_eq!(config.db.password, "");
        assert_eq!(config.db.database, "stock_market");
        assert_eq!(config.db.port, 3306);
        assert_eq!(config.db.max_connections, 5);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn variables_override_defaults() {
        let config = from_pairs(&[
            ("MYSQLHOST", "mysql.internal"),
            ("MYSQLUSER", "loader"),
            ("MYSQLPASSWORD", "s3cret"),
            ("MYSQLDATABASE", "prices"),
            ("MYSQLPORT", "33060"),
            ("PORT", "5000"),
        ])
        .unwrap();
        assert_eq!(config.db.host, "mysql.internal");
        assert_eq!(config.db.user, "loader");
        assert_eq!(config.db.password, "s3cret");
        assert_eq!(config.db.database, "prices");
        assert_eq!(config.db.port, 33060);
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = from_pairs(&[("MYSQLPORT", "three")]).unwrap_err();
        let ConfigError::InvalidValue { key, value } = err;
        assert_eq!(key, "MYSQLPORT");
        assert_eq!(value, "three");
    }
}
