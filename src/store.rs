//! Settings documents on disk
//!
//! The web editor keeps settings under localStorage keys; the CLI
//! equivalent is a JSON document per overlay. A missing file loads as
//! defaults so a fresh workspace behaves like a fresh browser profile.

use std::path::Path;

use thiserror::Error;

use crate::settings::OverlaySettings;

/// Errors that can occur when reading or writing settings documents
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write settings as a pretty-printed JSON document
pub fn save_settings(path: &Path, settings: &OverlaySettings) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read settings from a JSON document.
///
/// A missing file yields defaults; a present but malformed file is an
/// error (silently resetting user edits would lose work).
pub fn load_settings(path: &Path) -> Result<OverlaySettings, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(OverlaySettings::default())
        }
        Err(err) => Err(err.into()),
    }
}
