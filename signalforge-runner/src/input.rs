//! Input parsing — JSON arrays of enriched assets.
//!
//! The enrichment stage upstream hands over a JSON array in the camelCase
//! contract (`ticker`, `assetType`, `source`, `catalyst`, `macroScore?`,
//! `sentimentScore?`, `prices[]`). Parsing is strict on shape but series
//! content is validated later, per asset, inside the pipeline — a malformed
//! series fails that asset, not the whole file.

use std::path::Path;

use thiserror::Error;

use signalforge_core::domain::EnrichedAsset;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse asset JSON")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of enriched assets.
pub fn parse_assets(json: &str) -> Result<Vec<EnrichedAsset>, InputError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an asset file.
pub fn load_assets(path: &Path) -> Result<Vec<EnrichedAsset>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_assets(&text)
}
