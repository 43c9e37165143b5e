use clap::{Args, Subcommand};

use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{category_fields as fields, Category};
use crate::store::{CollectionStore, DisplayWindow};

use super::{run_add, run_delete, run_list, run_update, OutputFormat, SortArg};

/// The category table shows at most this many rows.
const DISPLAY_LIMIT: usize = 10;

#[derive(Args)]
pub struct CategoryCommand {
    #[command(subcommand)]
    pub command: CategorySubcommand,
}

#[derive(Subcommand)]
pub enum CategorySubcommand {
    /// List categories
    List {
        /// Case-insensitive name filter
        #[arg(long, short)]
        search: Option<String>,

        /// Sort direction for the category name
        #[arg(long, value_enum, default_value = "asc")]
        sort: SortArg,

        /// Max records requested from the server
        #[arg(long)]
        limit: Option<usize>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Register a new category
    Add {
        /// Category name
        #[arg(long)]
        name: String,

        /// Category description
        #[arg(long)]
        description: String,
    },

    /// Edit fields of an existing category
    Update {
        /// Category id
        id: String,

        /// New category name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category id
        id: String,
    },
}

impl CategoryCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = CollectionStore::<Category>::new(ApiClient::new(config.api_url.clone()));

        match &self.command {
            CategorySubcommand::List {
                search,
                sort,
                limit,
                format,
            } => {
                run_list(
                    &mut store,
                    search.as_deref(),
                    *sort,
                    *limit,
                    *format,
                    DisplayWindow::First(DISPLAY_LIMIT),
                )
                .await
            }
            CategorySubcommand::Add { name, description } => {
                let draft = vec![
                    (fields::NAME, name.clone()),
                    (fields::DESCRIPTION, description.clone()),
                ];
                run_add(&mut store, draft).await
            }
            CategorySubcommand::Update {
                id,
                name,
                description,
            } => {
                let mut patch = Vec::new();
                if let Some(name) = name {
                    patch.push((fields::NAME, name.clone()));
                }
                if let Some(description) = description {
                    patch.push((fields::DESCRIPTION, description.clone()));
                }
                run_update(&mut store, id, patch).await
            }
            CategorySubcommand::Delete { id } => run_delete(&mut store, id).await,
        }
    }
}
