use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::cli::{BoundsPolicy, CompressionLevel};
use crate::config::{ProjectPaths, SheetLayout};
use crate::output::{clear_dir, ensure_dir, write_cells};
use crate::select::{BackSelector, finalize_back};
use crate::sheet::{GridSlicer, load_sheet};

/// Knobs that don't change where cells are, only how they are produced
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceOptions {
    pub bounds: BoundsPolicy,
    pub compress: Option<CompressionLevel>,
}

/// Files produced by [`slice_sheet`]
#[derive(Debug, Clone)]
pub struct SliceReport {
    pub faces: Vec<PathBuf>,
    pub specials: Vec<PathBuf>,
    /// Directory holding the back candidates
    pub backs_dir: PathBuf,
    /// Candidate file names inside `backs_dir`, in enumeration order
    pub back_candidates: Vec<String>,
}

/// Load the sheet, cut it up and write faces, specials and back candidates.
///
/// The sheet is decoded and fully sliced before anything touches the disk, so
/// a missing sheet, bad layout, conflicting output paths or out-of-bounds cell
/// leaves no output behind.
pub fn slice_sheet(
    layout: &SheetLayout,
    paths: &ProjectPaths,
    options: &SliceOptions,
) -> Result<SliceReport> {
    let slicer = GridSlicer::new(layout)?.bounds(options.bounds);
    paths.check_outputs(layout)?;
    let sheet = load_sheet(&paths.sheet)?;
    let sliced = slicer.slice(&sheet)?;

    ensure_dir(&paths.faces_dir)?;
    ensure_dir(&paths.specials_dir)?;
    ensure_dir(&paths.backs_dir)?;
    let stale = clear_dir(&paths.backs_dir)
        .with_context(|| format!("failed to clear {}", paths.backs_dir.display()))?;
    if stale > 0 {
        info!("Removed {} old back candidates", stale);
    }

    info!("Writing faces to {}", paths.faces_dir.display());
    let faces = write_cells(&sliced.faces, &paths.faces_dir, options.compress)?;

    info!("Writing specials to {}", paths.specials_dir.display());
    let specials = write_cells(&sliced.specials, &paths.specials_dir, options.compress)?;

    info!("Writing back candidates to {}", paths.backs_dir.display());
    write_cells(&sliced.backs, &paths.backs_dir, options.compress)?;
    let back_candidates = sliced.backs.iter().map(|c| c.file_name()).collect();

    Ok(SliceReport {
        faces,
        specials,
        backs_dir: paths.backs_dir.clone(),
        back_candidates,
    })
}

/// Ask `selector` for a back and copy it to the final location.
///
/// Returns the chosen candidate's file name.
pub fn choose_back(
    report: &SliceReport,
    selector: &mut dyn BackSelector,
    paths: &ProjectPaths,
) -> Result<String> {
    let index = selector.select(&report.back_candidates)?;
    let chosen = report
        .back_candidates
        .get(index)
        .with_context(|| format!("selector returned invalid index {}", index))?;

    finalize_back(&report.backs_dir, chosen, &paths.final_back)?;
    Ok(chosen.clone())
}
