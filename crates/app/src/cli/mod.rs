use catalog_app::{
    database::{self, Db},
    domain::products::PgProductsService,
};
use clap::{Args, Parser, Subcommand};

mod db;
mod products;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Products(products::ProductsCommand),
}

/// Connection settings shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<sqlx::PgPool, String> {
        database::connect(&self.database_url)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }

    pub(crate) async fn products_service(&self) -> Result<PgProductsService, String> {
        Ok(PgProductsService::new(Db::new(self.connect().await?)))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Products(command) => products::run(command).await,
        }
    }
}
