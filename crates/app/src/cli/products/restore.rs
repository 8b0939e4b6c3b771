use catalog_app::domain::products::{ProductsService, records::ProductUuid};
use clap::Args;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RestoreArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product UUIDs to restore
    #[arg(required = true)]
    products: Vec<Uuid>,
}

pub(crate) async fn run(args: RestoreArgs) -> Result<(), String> {
    let service = args.database.products_service().await?;

    let count = service
        .restore_products(args.products.into_iter().map(ProductUuid::from).collect())
        .await
        .map_err(|error| format!("failed to restore products: {error}"))?;

    println!("{count} product(s) were restored.");

    Ok(())
}
