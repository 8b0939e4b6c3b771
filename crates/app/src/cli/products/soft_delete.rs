use catalog_app::domain::products::{ProductsService, records::ProductUuid};
use clap::Args;
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SoftDeleteArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product UUIDs to soft delete
    #[arg(required = true)]
    products: Vec<Uuid>,
}

pub(crate) async fn run(args: SoftDeleteArgs) -> Result<(), String> {
    let service = args.database.products_service().await?;

    let count = service
        .delete_products(args.products.into_iter().map(ProductUuid::from).collect())
        .await
        .map_err(|error| format!("failed to soft delete products: {error}"))?;

    println!("{count} product(s) were successfully soft deleted.");

    Ok(())
}
