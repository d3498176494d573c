use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use super::paths::ProjectPaths;
use super::types::SheetLayout;
use crate::error::SlicerError;
use crate::sheet::{back_name, face_name};

impl ProjectPaths {
    /// Make sure a run cannot destroy its own input or outputs.
    ///
    /// The backs directory is cleared on every run, so it must not hold the
    /// sheet, the final back, faces or specials. Every file the run writes
    /// must be distinct and must not be the sheet.
    pub fn check_outputs(&self, layout: &SheetLayout) -> Result<(), SlicerError> {
        let sheet = normalize(&self.sheet);
        let backs_dir = normalize(&self.backs_dir);

        let kept_files = [
            ("sprite sheet", &self.sheet),
            ("final card back", &self.final_back),
        ];
        for (what, file) in kept_files {
            if let Some(dir) = file.parent() {
                if normalize(dir).starts_with(&backs_dir) {
                    return Err(conflict(format!(
                        "backs directory {} is cleared on every run and would remove the {} {}",
                        self.backs_dir.display(),
                        what,
                        file.display()
                    )));
                }
            }
        }
        for (what, dir) in [("faces", &self.faces_dir), ("specials", &self.specials_dir)] {
            if normalize(dir) == backs_dir {
                return Err(conflict(format!(
                    "backs directory {} is also the {} directory",
                    self.backs_dir.display(),
                    what
                )));
            }
        }

        let mut owners: HashMap<PathBuf, String> = HashMap::new();
        let mut claim = |path: PathBuf, owner: String| -> Result<(), SlicerError> {
            let path = normalize(&path);
            if path == sheet {
                return Err(conflict(format!(
                    "{} would overwrite the sprite sheet {}",
                    owner,
                    path.display()
                )));
            }
            if let Some(previous) = owners.insert(path.clone(), owner.clone()) {
                return Err(conflict(format!(
                    "{} and {} both write {}",
                    previous,
                    owner,
                    path.display()
                )));
            }
            Ok(())
        };

        for suit in &layout.suits {
            for rank in &layout.ranks {
                let name = face_name(rank, suit);
                claim(
                    self.faces_dir.join(format!("{}.png", name)),
                    format!("face '{}'", name),
                )?;
            }
        }
        for slot in &layout.specials {
            claim(
                self.specials_dir.join(format!("{}.png", slot.name)),
                format!("special '{}'", slot.name),
            )?;
        }
        for index in 0..max_back_candidates(layout) {
            let name = back_name(index);
            claim(
                self.backs_dir.join(format!("{}.png", name)),
                format!("back candidate '{}'", name),
            )?;
        }
        claim(self.final_back.clone(), "the final card back".to_string())?;

        Ok(())
    }
}

fn conflict(message: String) -> SlicerError {
    SlicerError::PathConflict(message)
}

/// Upper bound on back candidates: they stop at the last column
fn max_back_candidates(layout: &SheetLayout) -> u32 {
    let specials = u32::try_from(layout.specials.len()).unwrap_or(u32::MAX);
    layout
        .back_count
        .min(layout.grid.columns.saturating_sub(specials))
}

/// Absolute path with `.` and `..` folded away, without touching the
/// filesystem (outputs may not exist yet)
fn normalize(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_e| path.to_path_buf());
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
