use clap::{Args, Subcommand};

mod list;
mod restore;
mod soft_delete;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, newest first
    List(list::ListProductsArgs),

    /// Soft delete the given products
    SoftDelete(soft_delete::SoftDeleteArgs),

    /// Restore soft deleted products
    Restore(restore::RestoreArgs),
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(args).await,
        ProductsSubcommand::SoftDelete(args) => soft_delete::run(args).await,
        ProductsSubcommand::Restore(args) => restore::run(args).await,
    }
}
