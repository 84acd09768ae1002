use std::path::Path;

use super::engine::SwahiliParams;
use super::error::SwahiliError;

/// Load engine parameters from a JSON file.
///
/// Every field is optional and falls back to [`SwahiliParams::default`]:
///
/// ```json
/// { "rate": 0.9, "locales": ["id-ID"] }
/// ```
pub fn load_params(path: &Path) -> Result<SwahiliParams, SwahiliError> {
    let content = std::fs::read_to_string(path)?;
    let params: SwahiliParams = serde_json::from_str(&content)
        .map_err(|e| SwahiliError::Config(format!("Failed to parse JSON: {e}")))?;
    log::debug!("Loaded parameters from {}: {params:?}", path.display());
    params.validated()
}
