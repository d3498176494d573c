mod conflicts;
mod load;
mod paths;
mod save;
mod types;
mod validate;

pub use load::{LoadedConfig, project_root};
pub use paths::ProjectPaths;
pub use save::save_config;
pub use types::{
    PathConfig, STANDARD_RANKS, STANDARD_SUITS, SheetLayout, SlicerConfig, SpecialSlot,
};
