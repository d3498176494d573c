use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use super::save_png;
use crate::cli::CompressionLevel;
use crate::error::SlicerError;
use crate::sheet::SlicedCell;

/// Create a directory (and parents) if it doesn't exist yet
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| SlicerError::OutputWrite {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Remove every file directly inside `dir`, returning how many were removed.
///
/// Subdirectories are left alone. A missing directory counts as empty.
pub fn clear_dir(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        fs::remove_file(&path).map_err(|e| SlicerError::OutputWrite {
            path: path.clone(),
            source: e,
        })?;
        debug!("Removed stale {}", path.display());
        removed += 1;
    }

    Ok(removed)
}

/// Save each cell as `<name>.png` in `dir`, returning the written paths
pub fn write_cells(
    cells: &[SlicedCell],
    dir: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(cells.len());

    for cell in cells {
        let path = dir.join(cell.file_name());
        save_png(&cell.image, &path, compress)?;
        debug!("Saved {} (region {})", path.display(), cell.rect);
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CropRect;
    use image::RgbaImage;

    fn cell(name: &str) -> SlicedCell {
        SlicedCell {
            name: name.to_string(),
            row: 0,
            col: 0,
            rect: CropRect::new(0, 0, 2, 2),
            image: RgbaImage::new(2, 2),
        }
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_clear_dir_removes_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("back_option_0.png"), b"old").unwrap();
        fs::write(dir.path().join("notes.txt"), b"old").unwrap();
        fs::create_dir(dir.path().join("keep")).unwrap();

        assert_eq!(clear_dir(dir.path()).unwrap(), 2);

        let left: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(left, ["keep"]);
    }

    #[test]
    fn test_clear_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(clear_dir(&dir.path().join("nope")).unwrap(), 0);
    }

    #[test]
    fn test_write_cells() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_cells(&[cell("joker_1"), cell("joker_2")], dir.path(), None).unwrap();

        assert_eq!(
            written,
            [dir.path().join("joker_1.png"), dir.path().join("joker_2.png")]
        );
        assert!(written.iter().all(|p| p.is_file()));
    }
}
