//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Database options used when building an [`AppContext`].
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from database options.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_options(options: &DatabaseOptions) -> Result<Self, AppInitError> {
        let pool = database::connect_with(&options.url, options.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if options.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db)),
        }
    }
}
