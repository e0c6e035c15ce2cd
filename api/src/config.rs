//! Application configuration

use anyhow::{Context, Result};
use user_crud_core::schema::SchemaMode;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database host
    pub db_host: String,
    /// Database port
    pub db_port: u16,
    /// Database user
    pub db_user: String,
    /// Database password, `None` when empty
    pub db_password: Option<String>,
    /// Database name
    pub db_name: String,
    /// libpq-style sslmode appended to the connection URL
    pub db_sslmode: String,
    /// Drop and recreate the users table on startup
    pub db_reset_on_boot: bool,
    /// Server bind host
    pub server_host: String,
    /// Server port
    pub server_port: u16,
    /// Emit JSON log lines instead of text
    pub log_json: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            db_host: var("DB_HOST", "localhost"),
            db_port: var("DB_PORT", "5432")
                .parse()
                .context("Invalid DB_PORT")?,
            db_user: var("DB_USER", "postgres"),
            db_password: lookup("DB_PASSWORD").filter(|p| !p.is_empty()),
            db_name: var("DB_NAME", "crud_demo"),
            db_sslmode: var("DB_SSLMODE", "disable"),
            db_reset_on_boot: parse_flag(&var("DB_RESET_ON_BOOT", "false")),
            server_host: var("SERVER_HOST", "0.0.0.0"),
            server_port: var("SERVER_PORT", "8080")
                .parse()
                .context("Invalid SERVER_PORT")?,
            log_json: var("LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
        })
    }

    /// Build the database connection URL
    pub fn database_url(&self) -> String {
        if let Some(ref password) = self.db_password {
            format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                self.db_user, password, self.db_host, self.db_port, self.db_name, self.db_sslmode
            )
        } else {
            format!(
                "postgres://{}@{}:{}/{}?sslmode={}",
                self.db_user, self.db_host, self.db_port, self.db_name, self.db_sslmode
            )
        }
    }

    pub fn schema_mode(&self) -> SchemaMode {
        SchemaMode::from_reset_flag(self.db_reset_on_boot)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
