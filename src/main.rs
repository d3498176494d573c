use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use card_slicer::cli::{BoundsPolicy, CliArgs};
use card_slicer::config::{
    LoadedConfig, ProjectPaths, SlicerConfig, project_root, save_config,
};
use card_slicer::pipeline::{SliceOptions, choose_back, slice_sheet};
use card_slicer::select::{BackSelector, FixedSelector, PromptSelector};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(&args)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Some(path) = &args.write_config {
        save_config(&merged.config, path)?;
        info!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    info!("Card slicer v{}", env!("CARGO_PKG_VERSION"));

    let paths = ProjectPaths::resolve(&merged.root, &merged.config.paths);
    let options = SliceOptions {
        bounds: args.bounds.unwrap_or(BoundsPolicy::Strict),
        compress: args.compress,
    };

    let report = slice_sheet(&merged.config.layout, &paths, &options)?;
    info!("Saved {} faces to {}", report.faces.len(), paths.faces_dir.display());

    let mut selector: Box<dyn BackSelector> = match (args.choice, args.yes) {
        (Some(choice), _) => Box::new(FixedSelector::nth(choice)),
        (None, true) => Box::new(FixedSelector::first()),
        (None, false) => Box::new(PromptSelector::new(io::stdin().lock(), io::stdout())),
    };
    let chosen = choose_back(&report, selector.as_mut(), &paths)?;

    info!("Card back '{}' saved as {}", chosen, paths.final_back.display());
    info!(
        "Back candidates remain in {} and can be deleted",
        report.backs_dir.display()
    );
    info!("Done!");

    Ok(())
}

/// Effective configuration and the root its paths are relative to.
struct MergedConfig {
    config: SlicerConfig,
    root: PathBuf,
}

/// Merge config file values with CLI arguments.
/// The project root is CLI > config file directory > current directory.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    let root = project_root(args.root.as_deref(), loaded_config.as_ref());

    let config = loaded_config.map(|lc| lc.config).unwrap_or_default();

    Ok(MergedConfig { config, root })
}
