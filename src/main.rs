//! # Catalog CLI
//!
//! A thin command-line front end over the catalog repositories.
//!
//! Every subcommand performs one repository call and prints the result as
//! pretty JSON on stdout. Logs go to stderr (`RUST_LOG` controls the level).
//! The API root comes from `--api-url`, `CATALOG_API_URL` or a `.env` file.

use clap::{Parser, Subcommand};
use product_catalog::clients::ResourceRepository;
use product_catalog::model::{ProductCreate, ProductQuery, ProductUpdate};
use product_catalog::runtime::{setup_tracing, CatalogConfig, CatalogSystem};
use serde::Serialize;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse and edit the product catalog through its REST API",
    long_about = "Browse and edit the product catalog through its REST API.\n\nEnvironment:\n  CATALOG_API_URL   API root (default https://api.escuelajs.co/api/v1)\n  RUST_LOG          Log filter (default info)\n"
)]
struct Cli {
    #[arg(
        long,
        value_name = "URL",
        help = "API root every resource path is built on; overrides CATALOG_API_URL"
    )]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products, optionally filtered
    List {
        #[arg(long, value_name = "ID", help = "Only products of this category")]
        category_id: Option<u64>,
        #[arg(long, value_name = "SLUG", conflicts_with = "category_id", help = "Only products of the category with this slug")]
        category: Option<String>,
        #[arg(long, help = "Only products whose title matches")]
        title: Option<String>,
    },
    /// Show one product
    Get { id: u64 },
    /// Create a product
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, value_name = "ID")]
        category_id: u64,
        #[arg(long = "image-url", value_name = "URL", required = true, help = "Image URL; repeat for several images")]
        images: Vec<String>,
    },
    /// Change fields of a product
    Update {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_name = "ID")]
        category_id: Option<u64>,
        #[arg(long = "image-url", value_name = "URL", help = "Replacement image URL; repeat for several images")]
        images: Vec<String>,
    },
    /// Delete a product
    Delete { id: u64 },
    /// List the categories
    Categories,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}

async fn run(system: &CatalogSystem, command: Command) -> Result<(), String> {
    match command {
        Command::List {
            category_id,
            category,
            title,
        } => {
            let category_id = match category {
                Some(slug) => Some(
                    system
                        .categories
                        .find_by_slug(&slug)
                        .await
                        .map_err(|e| e.to_string())?
                        .id,
                ),
                None => category_id,
            };
            let products = system
                .products
                .search_products(ProductQuery { category_id, title })
                .await
                .map_err(|e| e.to_string())?;
            info!(count = products.len(), "Products fetched");
            print_json(&products)
        }
        Command::Get { id } => {
            let product = system.products.get(id).await.map_err(|e| e.to_string())?;
            print_json(&product)
        }
        Command::Create {
            title,
            price,
            description,
            category_id,
            images,
        } => {
            let params = ProductCreate {
                title,
                price,
                description,
                category_id,
                images,
            };
            let product = system
                .products
                .create_product(&params)
                .await
                .map_err(|e| e.to_string())?;
            info!(id = product.id, "Product created");
            print_json(&product)
        }
        Command::Update {
            id,
            title,
            price,
            description,
            category_id,
            images,
        } => {
            let update = ProductUpdate {
                title,
                price,
                description,
                category_id,
                images: (!images.is_empty()).then_some(images),
            };
            if update.is_empty() {
                return Err("Nothing to update: pass at least one field".to_string());
            }
            let product = system
                .products
                .update_product(id, &update)
                .await
                .map_err(|e| e.to_string())?;
            info!(id = product.id, "Product updated");
            print_json(&product)
        }
        Command::Delete { id } => {
            let deleted = system
                .products
                .delete_product(id)
                .await
                .map_err(|e| e.to_string())?;
            info!(id, deleted, "Delete finished");
            print_json(&serde_json::json!({ "id": id, "deleted": deleted }))
        }
        Command::Categories => {
            let categories = system
                .categories
                .list_categories()
                .await
                .map_err(|e| e.to_string())?;
            print_json(&categories)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    // Loads `.env` before the log filter is read.
    let config = CatalogConfig::from_env().with_api_url(cli.api_url);

    // Setup tracing once for the entire application
    setup_tracing();

    let system = CatalogSystem::new(&config).map_err(|e| e.to_string())?;

    let result = run(&system, cli.command).await;
    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
