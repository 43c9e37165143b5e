use clap::{Args, Subcommand};

use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{product_fields as fields, Product};
use crate::store::{CollectionStore, DisplayWindow, StoreOptions};

use super::{run_add, run_delete, run_list, run_update, OutputFormat, SortArg};

/// Products run the bounded window: the server is asked for `WINDOW`
/// records, the trailing slice is shown newest-first, and a create trims
/// the snapshot back down to the window.
const WINDOW: usize = 10;

#[derive(Args)]
pub struct ProductCommand {
    #[command(subcommand)]
    pub command: ProductSubcommand,
}

#[derive(Subcommand)]
pub enum ProductSubcommand {
    /// List products
    List {
        /// Case-insensitive name filter
        #[arg(long, short)]
        search: Option<String>,

        /// Sort direction for the product name
        #[arg(long, value_enum, default_value = "asc")]
        sort: SortArg,

        /// Max records requested from the server
        #[arg(long, default_value_t = WINDOW)]
        limit: usize,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Register a new product
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product category (shown in the table, optional on creation)
        #[arg(long)]
        category: Option<String>,

        /// Price
        #[arg(long)]
        price: String,
    },

    /// Edit fields of an existing product
    Update {
        /// Product id
        id: String,

        /// New product name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New price
        #[arg(long)]
        price: Option<String>,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

impl ProductCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let options = StoreOptions {
            window: Some(WINDOW),
            tail_window: true,
        };
        let mut store = CollectionStore::<Product>::with_options(
            ApiClient::new(config.api_url.clone()),
            options,
        );

        match &self.command {
            ProductSubcommand::List {
                search,
                sort,
                limit,
                format,
            } => {
                run_list(
                    &mut store,
                    search.as_deref(),
                    *sort,
                    Some(*limit),
                    *format,
                    DisplayWindow::All,
                )
                .await
            }
            ProductSubcommand::Add {
                name,
                category,
                price,
            } => {
                let mut draft = vec![(fields::NAME, name.clone()), (fields::PRICE, price.clone())];
                if let Some(category) = category {
                    draft.push((fields::CATEGORY, category.clone()));
                }
                run_add(&mut store, draft).await
            }
            ProductSubcommand::Update {
                id,
                name,
                category,
                price,
            } => {
                let mut patch = Vec::new();
                if let Some(name) = name {
                    patch.push((fields::NAME, name.clone()));
                }
                if let Some(category) = category {
                    patch.push((fields::CATEGORY, category.clone()));
                }
                if let Some(price) = price {
                    patch.push((fields::PRICE, price.clone()));
                }
                run_update(&mut store, id, patch).await
            }
            ProductSubcommand::Delete { id } => run_delete(&mut store, id).await,
        }
    }
}
