mod format;
mod writer;

pub use format::save_png;
pub use writer::{clear_dir, ensure_dir, write_cells};
