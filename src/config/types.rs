//! Resolved configuration types.

use sqlx::mysql::MySqlConnectOptions;
use std::fmt;

/// MySQL connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    /// Upper bound on pooled connections, i.e. on concurrent in-flight statements.
    pub max_connections: u32,
}

impl DbConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// HTTP listener settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Host and port for `TcpListener::bind`; hostnames are resolved there.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DbConfig {
        DbConfig {
            host: "db".into(),
            user: "app".into(),
            password: "hunter2".into(),
            database: "stock_market".into(),
            port: 3307,
            max_connections: 5,
        }
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn connect_options_carry_host_and_port() {
        let opts = sample().connect_options();
        assert_eq!(opts.get_host(), "db");
        assert_eq!(opts.get_port(), 3307);
        assert_eq!(opts.get_username(), "app");
        assert_eq!(opts.get_database(), Some("stock_market"));
    }

    #[test]
    fn bind_target_keeps_host_verbatim() {
        let v6 = ServerConfig { host: "::".into(), port: 8000 };
        assert_eq!(v6.bind_target(), ("::", 8000));
    }

    #[tokio::test]
    async fn binds_by_hostname() {
        let config = ServerConfig { host: "localhost".into(), port: 0 };
        let listener = tokio::net::TcpListener::bind(config.bind_target())
            .await
            .expect("localhost should resolve");
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
