//! `pdfpick list|select|clear|refresh|show`: drive the picker from a terminal.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use pdfpick_client::proxy::HttpProxyClient;
use pdfpick_client::selector::FileSelector;
use pdfpick_client::store::FileStore;
use pdfpick_core::record::NormalizedFile;

use crate::config::{cache_dir_for, load_config, save_config};
use crate::host::CliHost;

/// Picker wired to the HTTP proxy, the on-disk cache, and the config file.
pub type CliSelector = FileSelector<HttpProxyClient, FileStore, CliHost>;

/// Build a selector from the config at `path`.
///
/// # Errors
///
/// Returns an error if the config file cannot be read.
pub fn open_selector(path: &Path) -> Result<CliSelector> {
    let cfg = load_config(path)
        .context("not configured; run `pdfpick config --token <token>` first")?;
    debug!("using proxy {} with config {}", cfg.proxy, path.display());
    Ok(FileSelector::new(
        HttpProxyClient::new(cfg.proxy.clone()),
        FileStore::new(cache_dir_for(path)),
        CliHost::new(cfg),
    ))
}

/// Render one file as a table row, flagging the selected one.
#[must_use]
pub fn format_row(file: &NormalizedFile, selected: bool) -> String {
    let marker = if selected { '*' } else { ' ' };
    format!("{marker} {:<12} {:<40} {}", file.id, file.name, file.url)
}

fn print_files(selector: &CliSelector) {
    println!("{}", selector.status_line());
    let selected_id = selector.selected().map(|f| f.id.as_str());
    for file in selector.filtered_files() {
        println!("{}", format_row(file, selected_id == Some(file.id.as_str())));
    }
}

/// List loaded PDFs, optionally filtered by `query`.
///
/// # Errors
///
/// Returns an error if the config is missing or the load fails.
pub async fn run_list(path: &Path, query: Option<&str>) -> Result<()> {
    let mut selector = open_selector(path)?;
    selector.activate().await?;
    selector.set_query(query.unwrap_or_default());
    print_files(&selector);
    Ok(())
}

/// Select the PDF with `id` and persist its URL.
///
/// # Errors
///
/// Returns an error if the load fails, the id is unknown, or the config
/// cannot be saved.
pub async fn run_select(path: &Path, id: &str) -> Result<()> {
    let mut selector = open_selector(path)?;
    selector.activate().await?;
    selector.select(id)?;
    save_config(&selector.host().config, path)?;
    Ok(())
}

/// Clear the stored URL.
///
/// # Errors
///
/// Returns an error if the config cannot be read or saved.
pub fn run_clear(path: &Path) -> Result<()> {
    let mut selector = open_selector(path)?;
    selector.clear_selection();
    save_config(&selector.host().config, path)?;
    Ok(())
}

/// Drop the cache and reload from the proxy.
///
/// # Errors
///
/// Returns an error if the config is missing or the fetch fails.
pub async fn run_refresh(path: &Path) -> Result<()> {
    let mut selector = open_selector(path)?;
    selector.refresh().await?;
    println!("{}", selector.status_line());
    Ok(())
}

/// Show the stored URL and the file it resolves to.
///
/// # Errors
///
/// Returns an error if the config is missing or the load fails.
pub async fn run_show(path: &Path) -> Result<()> {
    let mut selector = open_selector(path)?;
    let value = selector.host().config.field_value.clone();
    if value.is_empty() {
        println!("No PDF selected");
        return Ok(());
    }
    selector.activate().await?;
    match selector.selected() {
        Some(file) => println!("Selected: {} ({} bytes)\n{}", file.name, file.size, value),
        None => println!("Field holds {value}, which matches no loaded PDF"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_marks_selection() {
        let file = NormalizedFile {
            id: "42".to_owned(),
            name: "Deck.pdf".to_owned(),
            url: "https://x/Deck.pdf".to_owned(),
            size: 1,
            path: String::new(),
            created_at: String::new(),
        };
        assert!(format_row(&file, true).starts_with("* 42"));
        assert!(format_row(&file, false).starts_with("  42"));
        assert!(format_row(&file, false).ends_with("https://x/Deck.pdf"));
    }

    #[test]
    fn open_selector_requires_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_selector(&dir.path().join("config.toml")).is_err());
    }
}
