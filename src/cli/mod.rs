mod args;

pub use args::{BoundsPolicy, CliArgs, CompressionLevel};
