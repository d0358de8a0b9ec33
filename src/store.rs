//! MySQL connection pool.

use crate::config::DbConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// Build the pool without connecting. Connections are opened on first use,
/// so an unreachable server shows up per request rather than at startup.
pub fn connect_pool(config: &DbConfig) -> MySqlPool {
    connect_pool_with_options(config, MySqlPoolOptions::new())
}

/// Like [`connect_pool`] with caller-supplied pool options. `max_connections`
/// always comes from the config.
pub fn connect_pool_with_options(config: &DbConfig, options: MySqlPoolOptions) -> MySqlPool {
    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = config.max_connections,
        "creating pool"
    );
    options
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

/// Round-trip a trivial statement.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable() -> DbConfig {
        DbConfig {
            host: "127.0.0.1".into(),
            user: "root".into(),
            password: String::new(),
            database: "stock_market".into(),
            port: 1,
            max_connections: 2,
        }
    }

    #[tokio::test]
    async fn lazy_pool_opens_nothing_up_front() {
        let pool = connect_pool(&unreachable());
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.options().get_max_connections(), 2);
    }

    #[tokio::test]
    async fn ping_fails_when_server_is_down() {
        let options = MySqlPoolOptions::new().acquire_timeout(Duration::from_millis(500));
        let pool = connect_pool_with_options(&unreachable(), options);
        assert!(ping(&pool).await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_reaches_configured_server() {
        let config = crate::config::AppConfig::from_env().expect("config");
        let pool = connect_pool(&config.db);
        ping(&pool).await.expect("ping failed");
    }
}
