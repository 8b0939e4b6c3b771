//! Database Config

use clap::{ArgAction, Args};

use catalog_app::{context::DatabaseOptions, database::DEFAULT_MAX_CONNECTIONS};

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub database_max_connections: u32,

    /// Apply pending migrations on startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = true, action = ArgAction::Set)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn options(&self) -> DatabaseOptions {
        DatabaseOptions {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            run_migrations: self.run_migrations,
        }
    }
}
