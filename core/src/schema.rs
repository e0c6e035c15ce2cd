//! Users table management

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Drop statement used by [`SchemaMode::Reset`]
pub const DROP_USERS_TABLE: &str = "DROP TABLE IF EXISTS users";

/// Table definition for the user entity
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// How the users table is prepared at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaMode {
    /// Keep existing data, create the table only when missing
    #[default]
    CreateIfAbsent,
    /// Drop and recreate the table, discarding all rows
    Reset,
}

impl SchemaMode {
    pub fn from_reset_flag(reset: bool) -> Self {
        if reset {
            SchemaMode::Reset
        } else {
            SchemaMode::CreateIfAbsent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaMode::CreateIfAbsent => "create-if-absent",
            SchemaMode::Reset => "reset",
        }
    }
}

/// Statements executed for the given mode, in order
pub fn statements(mode: SchemaMode) -> Vec<&'static str> {
    match mode {
        SchemaMode::CreateIfAbsent => vec![CREATE_USERS_TABLE],
        SchemaMode::Reset => vec![DROP_USERS_TABLE, CREATE_USERS_TABLE],
    }
}

/// Make sure the users table exists
pub async fn ensure_users_table(pool: &PgPool, mode: SchemaMode) -> Result<(), sqlx::Error> {
    if mode == SchemaMode::Reset {
        warn!("Schema mode is reset: dropping table 'users' and all of its rows");
    }

    for statement in statements(mode) {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Table 'users' ready ({})", mode.as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_keeps_data() {
        assert_eq!(SchemaMode::default(), SchemaMode::CreateIfAbsent);
        assert_eq!(statements(SchemaMode::default()), vec![CREATE_USERS_TABLE]);
    }

    #[test]
    fn test_reset_drops_before_create() {
        let stmts = statements(SchemaMode::Reset);
        assert_eq!(stmts, vec![DROP_USERS_TABLE, CREATE_USERS_TABLE]);
    }

    #[test]
    fn test_from_reset_flag() {
        assert_eq!(SchemaMode::from_reset_flag(true), SchemaMode::Reset);
        assert_eq!(SchemaMode::from_reset_flag(false), SchemaMode::CreateIfAbsent);
    }

    #[test]
    fn test_create_statement_enforces_unique_email() {
        assert!(CREATE_USERS_TABLE.contains("email VARCHAR(100) UNIQUE NOT NULL"));
        assert!(CREATE_USERS_TABLE.contains("IF NOT EXISTS"));
    }

    #[test]
    fn test_timestamps_are_not_null() {
        assert!(CREATE_USERS_TABLE.contains("created_at TIMESTAMP WITH TIME ZONE NOT NULL"));
        assert!(CREATE_USERS_TABLE.contains("updated_at TIMESTAMP WITH TIME ZONE NOT NULL"));
    }
}
