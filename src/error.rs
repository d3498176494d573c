use std::path::PathBuf;
use thiserror::Error;

use crate::grid::CropRect;

#[derive(Error, Debug)]
pub enum SlicerError {
    #[error("Sprite sheet not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Invalid sheet layout: {0}")]
    InvalidLayout(String),

    #[error("Cell '{name}' at {rect} lies outside the {width}x{height} sprite sheet")]
    CropOutOfBounds {
        name: String,
        rect: CropRect,
        width: u32,
        height: u32,
    },

    #[error("Conflicting output paths: {0}")]
    PathConflict(String),

    #[error("No card back candidates were cropped; check the back row layout")]
    NoBackCandidates,

    #[error("Back choice {choice} is out of range (1-{count})")]
    SelectionOutOfRange { choice: usize, count: usize },

    #[error("Input closed before a card back was chosen")]
    SelectionAborted,

    #[error("Failed to read back selection: {source}")]
    Prompt { source: std::io::Error },

    #[error("Failed to copy '{from}' to '{to}': {source}")]
    BackCopy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}
