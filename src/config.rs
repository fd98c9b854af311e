//! Environment-driven configuration.
//!
//! Values are read as-is with defaults; nothing is validated here. A wrong or
//! missing database setting surfaces as a connection failure on first use.

use sqlx::postgres::PgConnectOptions;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_LISTEN_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub listen_port: u16,
}

impl ServerConfig {
    /// Read `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_PORT`, and
    /// `PORT` from the environment, falling back to defaults when unset.
    pub fn from_env() -> Self {
        ServerConfig {
            db_host: env_or("DB_HOST", DEFAULT_DB_HOST),
            db_user: env_or("DB_USER", DEFAULT_DB_USER),
            db_password: env_or("DB_PASSWORD", ""),
            db_name: env_or("DB_NAME", "medoffice"),
            db_port: env_port("DB_PORT", DEFAULT_DB_PORT),
            listen_port: env_port("PORT", DEFAULT_LISTEN_PORT),
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }

    pub fn listen_addr(&self) -> (&'static str, u16) {
        ("0.0.0.0", self.listen_port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_port(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
