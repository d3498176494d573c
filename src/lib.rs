pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod pipeline;
pub mod select;
pub mod sheet;

#[cfg(test)]
mod test_support;

pub use cli::{BoundsPolicy, CliArgs, CompressionLevel};
pub use config::{LoadedConfig, ProjectPaths, SheetLayout, SlicerConfig};
pub use error::SlicerError;
pub use grid::{CropRect, GridGeometry};
pub use pipeline::{SliceOptions, SliceReport, choose_back, slice_sheet};
pub use select::{BackSelector, FixedSelector, PromptSelector};
