//! Configuration for the mentors service

use serde::Deserialize;

/// Mentors service configuration, read once at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite connection string
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_url: default_database_url(),
        }
    }
}

impl Config {
    /// Build a config from the process environment, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());

        Self { port, database_url }
    }
}

fn default_port() -> u16 {
    3001
}

fn default_database_url() -> String {
    "sqlite://./mentors.db?mode=rwc".to_string()
}
