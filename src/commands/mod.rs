//! CLI command definitions.
//!
//! Each resource gets its own clap command mapping flags to wire field
//! names; the actual list/add/update/delete flows are the generic runners
//! below, shared by all three resources.

mod category;
mod config_cmd;
mod customer;
mod product;

pub use category::CategoryCommand;
pub use config_cmd::ConfigCommand;
pub use customer::CustomerCommand;
pub use product::ProductCommand;

use clap::ValueEnum;

use crate::api::CollectionQuery;
use crate::models::{RecordId, Resource};
use crate::store::{CollectionStore, DisplayWindow, SortOrder, ViewState};

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum SortArg {
    #[default]
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

fn print_status<R: Resource>(store: &CollectionStore<R>) {
    if let Some(status) = store.status() {
        println!("{}", status);
    }
}

/// Loads the collection and prints the projected rows.
pub(crate) async fn run_list<R: Resource>(
    store: &mut CollectionStore<R>,
    search: Option<&str>,
    sort: SortArg,
    limit: Option<usize>,
    format: OutputFormat,
    window: DisplayWindow,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = SortOrder::from(sort);
    let query = CollectionQuery {
        limit,
        sort: Some(order),
    };
    store.load(&query).await;

    let view = ViewState {
        search: search.unwrap_or_default().to_string(),
        order,
    };
    let rows = window.apply(store.rows(&view));

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("No {} found", R::PATH);
                return Ok(());
            }
            for row in &rows {
                let values: Vec<String> = R::field_names()
                    .iter()
                    .map(|name| row.field(name).unwrap_or_default())
                    .collect();
                println!("{}: {}", row.id(), values.join(" | "));
            }
        }
    }

    Ok(())
}

/// Stages the draft fields and registers a new record.
pub(crate) async fn run_add<R: Resource>(
    store: &mut CollectionStore<R>,
    draft: Vec<(&'static str, String)>,
) -> Result<(), Box<dyn std::error::Error>> {
    store.load(&CollectionQuery::default()).await;
    for (field, value) in draft {
        store.set_draft_field(field, value);
    }

    let result = store.register().await;
    print_status(store);
    result?;
    Ok(())
}

/// Puts the record in edit mode, stages the given fields and saves.
pub(crate) async fn run_update<R: Resource>(
    store: &mut CollectionStore<R>,
    id: &str,
    patch: Vec<(&'static str, String)>,
) -> Result<(), Box<dyn std::error::Error>> {
    if patch.is_empty() {
        return Err("Nothing to update: pass at least one field flag".into());
    }

    store.load(&CollectionQuery::default()).await;
    let id = RecordId::from(id);
    store.begin_edit(&id)?;
    for (field, value) in patch {
        store.stage(field, value)?;
    }

    let result = store.save(&id).await;
    print_status(store);
    result?;
    Ok(())
}

pub(crate) async fn run_delete<R: Resource>(
    store: &mut CollectionStore<R>,
    id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    store.load(&CollectionQuery::default()).await;

    let result = store.delete(&RecordId::from(id)).await;
    print_status(store);
    result?;
    Ok(())
}
