//! `pdfpick config`: store the HubSpot token and proxy URL.

use std::path::Path;

use anyhow::{bail, Result};

use crate::config::{load_or_default, save_config};

/// Update the saved token and/or proxy URL in the config at `path`.
///
/// # Errors
///
/// Returns an error if the token is blank or the config cannot be written.
pub fn run_configure(path: &Path, token: Option<&str>, proxy: Option<&str>) -> Result<()> {
    let mut cfg = load_or_default(path)?;

    if let Some(token) = token {
        let token = token.trim();
        if token.is_empty() {
            bail!("access token must not be empty");
        }
        cfg.access_token = Some(token.to_owned());
    }
    if let Some(proxy) = proxy {
        cfg.proxy = proxy.trim_end_matches('/').to_owned();
    }

    save_config(&cfg, path)?;
    println!("Settings saved to {}", path.display());
    Ok(())
}
