use catalog_app::domain::products::{ProductsService, data::ProductFilter};
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Case-insensitive name substring
    #[arg(long)]
    name: Option<String>,

    /// Case-insensitive location substring
    #[arg(long)]
    location: Option<String>,

    /// Include soft deleted products
    #[arg(long)]
    include_deleted: bool,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let service = args.database.products_service().await?;

    let mut filter = ProductFilter::new(args.name, args.location);

    if args.include_deleted {
        filter = filter.including_deleted();
    }

    let products = service
        .list_products(filter)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            product.uuid,
            product.sku,
            product.name,
            product.location,
            product.price,
            product.stock,
            if product.is_delete { "deleted" } else { "active" },
        );
    }

    Ok(())
}
