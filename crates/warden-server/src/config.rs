use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_address: SocketAddr,

    /// Path to the RocksDB database
    pub database_path: PathBuf,

    /// Deployment-wide password salt; empty selects the weaker unsalted
    /// mode rather than failing
    pub password_salt: String,

    /// Credentials for the initial administrative user, when configured
    pub bootstrap: Option<(String, String)>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "./data/warden.db".to_string())
            .into();

        let password_salt = std::env::var("PASSWORD_SALT").unwrap_or_default();

        let bootstrap = match (
            std::env::var("BOOTSTRAP_USERNAME"),
            std::env::var("BOOTSTRAP_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some((username, password)),
            _ => None,
        };

        Ok(Config {
            bind_address,
            database_path,
            password_salt,
            bootstrap,
        })
    }
}
