mod cell;
mod loader;
mod slicer;

pub use cell::{SlicedCell, back_name, face_name};
pub use loader::load_sheet;
pub use slicer::{GridSlicer, SlicedSheet, back_columns};
