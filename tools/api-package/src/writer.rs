//! Manifest writer
//!
//! Renders [`PackageManifest::api`] as indented JSON and writes it to a single
//! destination. The parent directory is never created and any existing file is
//! replaced outright.

use crate::error::{Error, Result};
use crate::manifest::PackageManifest;
use std::fs;
use std::path::Path;

/// Destination of the API app manifest in the Flow checkout
pub const DEFAULT_OUTPUT_PATH: &str = r"D:\Scripts\Factory\Flow\apps\api\package.json";

/// Render a manifest as 2-space indented JSON without a trailing newline
pub fn render(manifest: &PackageManifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Write the API app manifest to `path`
pub fn write(path: &Path) -> Result<()> {
    let contents = render(&PackageManifest::api())?;

    tracing::debug!("Rendered manifest ({} bytes)", contents.len());

    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote manifest to {:?}", path);
    Ok(())
}
