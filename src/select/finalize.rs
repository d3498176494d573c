use std::fs;
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::error::SlicerError;
use crate::output::ensure_dir;

/// Copy the chosen candidate byte-for-byte to `final_path`, replacing any
/// previous back. The other candidates stay where they are.
pub fn finalize_back(backs_dir: &Path, candidate: &str, final_path: &Path) -> Result<()> {
    let source = backs_dir.join(candidate);

    if let Some(parent) = final_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    fs::copy(&source, final_path).map_err(|e| SlicerError::BackCopy {
        from: source.clone(),
        to: final_path.to_path_buf(),
        source: e,
    })?;

    info!("Copied '{}' to {}", candidate, final_path.display());
    Ok(())
}
