//! Treepick Demo - Domain Picker Driver
//!
//! Runs the hierarchical domain picker headlessly against a JSON catalog:
//! shows the tree, optionally types a search query, applies a selection and
//! submits it. Everything is driven by environment variables (see `config`).

mod config;
mod handlers;
mod render;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use treepick_catalog::JsonCatalog;
use treepick_domain::{CheckEvent, DomainPicker};

use crate::config::DemoConfig;
use crate::handlers::{LogNotifier, StdoutSubmitHandler};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting treepick demo");

    let config = DemoConfig::from_env()?;
    info!(
        catalog = %config.catalog_path.display(),
        multiple = config.props.is_multiple,
        page_limit = config.picker.page_limit,
        "Loading catalog"
    );

    let catalog = JsonCatalog::from_path(&config.catalog_path)
        .with_context(|| format!("failed to load catalog {}", config.catalog_path.display()))?;

    let picker = DomainPicker::new(
        catalog,
        StdoutSubmitHandler,
        LogNotifier,
        config.props.clone(),
        config.picker.clone(),
    );

    picker.set_visible(true).await;
    print!("{}", render::render(&picker.view(), &picker.selected_keys()));

    if let Some(query) = &config.query {
        info!(query = %query, "Typing search query");
        picker.on_search_input(query.clone());
        while picker.has_pending_search() || picker.is_loading() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        println!("--- search: {query}");
        print!("{}", render::render(&picker.view(), &picker.selected_keys()));
    }

    if !config.select.is_empty() {
        let applied = if config.props.is_multiple {
            picker.on_check(CheckEvent::Keys(config.select.clone()))
        } else {
            picker.on_select(config.select.clone())
        };
        info!(applied, keys = ?picker.selected_keys(), "Selection applied");
    }

    let selection = picker.save().await?;
    info!(count = selection.len(), "Done");

    Ok(())
}
