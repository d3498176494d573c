use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "card-slicer")]
#[command(
    version,
    about = "Slice a playing-card sprite sheet into face and back images",
    long_about = None
)]
pub struct CliArgs {
    /// Project root that configured paths are relative to
    /// [default: config file directory, or .]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Load layout and paths from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub write_config: Option<PathBuf>,

    /// Pick card back N (1-based) without prompting
    #[arg(long, value_name = "N", conflicts_with = "yes")]
    pub choice: Option<usize>,

    /// Pick the first card back without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// What to do with cells that fall outside the sheet [default: strict]
    #[arg(long, value_enum)]
    pub bounds: Option<BoundsPolicy>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Handling of crop rectangles that extend past the sheet edges
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Fail before writing anything
    #[default]
    Strict,
    /// Crop to the part inside the sheet, skipping cells that are fully outside
    Clamp,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}
