use std::path::Path;

use image::{ImageReader, RgbaImage};
use log::info;

use crate::error::SlicerError;

/// Load and decode the sprite sheet as RGBA.
///
/// The format is sniffed from the file contents, so a mislabelled extension
/// still decodes.
pub fn load_sheet(path: &Path) -> Result<RgbaImage, SlicerError> {
    if !path.is_file() {
        return Err(SlicerError::InputNotFound(path.to_path_buf()));
    }

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    info!(
        "Opened sprite sheet {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );

    Ok(img)
}
