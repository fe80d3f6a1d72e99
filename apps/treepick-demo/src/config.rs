//! Environment-driven configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use treepick_domain::{PickerConfig, PickerProps};

/// Everything the demo reads from the environment
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub catalog_path: PathBuf,
    pub props: PickerProps,
    pub picker: PickerConfig,
    /// Query typed before picking, if any
    pub query: Option<String>,
    /// Keys selected (single mode) or checked (multiple mode)
    pub select: Vec<String>,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        let catalog_path = std::env::var("TREEPICK_CATALOG")
            .context("TREEPICK_CATALOG must point to a JSON catalog file")?
            .into();

        let is_multiple = match std::env::var("TREEPICK_MULTIPLE") {
            Ok(raw) => parse_bool(&raw)
                .with_context(|| format!("TREEPICK_MULTIPLE is not a boolean: {raw}"))?,
            Err(_) => false,
        };

        let defaults = PickerConfig::default();
        let page_limit = match std::env::var("TREEPICK_PAGE_LIMIT") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("TREEPICK_PAGE_LIMIT is not a number: {raw}"))?,
            Err(_) => {
                info!(default = defaults.page_limit, "TREEPICK_PAGE_LIMIT not set, using default");
                defaults.page_limit
            }
        };
        let search_debounce = match std::env::var("TREEPICK_DEBOUNCE_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .with_context(|| format!("TREEPICK_DEBOUNCE_MS is not a number: {raw}"))?,
            ),
            Err(_) => defaults.search_debounce,
        };

        Ok(Self {
            catalog_path,
            props: PickerProps {
                value: list_var("TREEPICK_VALUE"),
                is_multiple,
            },
            picker: PickerConfig {
                page_limit,
                search_debounce,
            },
            query: std::env::var("TREEPICK_QUERY")
                .ok()
                .filter(|query| !query.is_empty()),
            select: list_var("TREEPICK_SELECT"),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Comma-separated list; blank entries are dropped
fn list_var(name: &str) -> Vec<String> {
    std::env::var(name)
        .map(|raw| split_list(&raw))
        .unwrap_or_default()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
