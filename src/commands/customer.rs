use clap::{Args, Subcommand};

use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{customer_fields as fields, Customer};
use crate::store::{CollectionStore, DisplayWindow};

use super::{run_add, run_delete, run_list, run_update, OutputFormat, SortArg};

/// The customer table shows at most this many rows.
const DISPLAY_LIMIT: usize = 10;

#[derive(Args)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub command: CustomerSubcommand,
}

#[derive(Subcommand)]
pub enum CustomerSubcommand {
    /// List customers
    List {
        /// Case-insensitive name filter
        #[arg(long, short)]
        search: Option<String>,

        /// Sort direction for the customer name
        #[arg(long, value_enum, default_value = "asc")]
        sort: SortArg,

        /// Max records requested from the server
        #[arg(long)]
        limit: Option<usize>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Register a new customer
    Add {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// Postal code
        #[arg(long)]
        postal_code: String,

        /// Country
        #[arg(long)]
        country: String,
    },

    /// Edit fields of an existing customer
    Update {
        /// Customer id
        id: String,

        /// New customer name
        #[arg(long)]
        name: Option<String>,

        /// New street address
        #[arg(long)]
        address: Option<String>,

        /// New postal code
        #[arg(long)]
        postal_code: Option<String>,

        /// New country
        #[arg(long)]
        country: Option<String>,
    },

    /// Delete a customer
    Delete {
        /// Customer id
        id: String,
    },
}

impl CustomerCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let mut store = CollectionStore::<Customer>::new(ApiClient::new(config.api_url.clone()));

        match &self.command {
            CustomerSubcommand::List {
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
            CustomerSubcommand::Add {
                name,
                address,
                postal_code,
                country,
            } => {
                let draft = vec![
                    (fields::NAME, name.clone()),
                    (fields::ADDRESS, address.clone()),
                    (fields::POSTAL_CODE, postal_code.clone()),
                    (fields::COUNTRY, country.clone()),
                ];
                run_add(&mut store, draft).await
            }
            CustomerSubcommand::Update {
                id,
                name,
                address,
                postal_code,
                country,
            } => {
                let mut patch = Vec::new();
                if let Some(name) = name {
                    patch.push((fields::NAME, name.clone()));
                }
                if let Some(address) = address {
                    patch.push((fields::ADDRESS, address.clone()));
                }
                if let Some(postal_code) = postal_code {
                    patch.push((fields::POSTAL_CODE, postal_code.clone()));
                }
                if let Some(country) = country {
                    patch.push((fields::COUNTRY, country.clone()));
                }
                run_update(&mut store, id, patch).await
            }
            CustomerSubcommand::Delete { id } => run_delete(&mut store, id).await,
        }
    }
}
