use std::collections::HashSet;

use super::types::SheetLayout;
use crate::error::SlicerError;

impl SheetLayout {
    /// Check that the layout describes a usable, non-overlapping grid.
    ///
    /// This does not look at the sheet image; crop bounds are checked by the
    /// slicer once the image size is known.
    pub fn validate(&self) -> Result<(), SlicerError> {
        let grid = &self.grid;

        if grid.columns == 0 || grid.face_rows == 0 {
            return Err(invalid(format!(
                "grid must have at least one column and one face row, got {}x{}",
                grid.columns, grid.face_rows
            )));
        }
        if grid.cell_width == 0 || grid.cell_height == 0 {
            return Err(invalid(format!(
                "cell size must be non-zero, got {}x{}",
                grid.cell_width, grid.cell_height
            )));
        }
        if grid.checked_extent().is_none() {
            return Err(invalid("grid extends past the maximum image size".to_string()));
        }

        if usize::try_from(grid.columns).ok() != Some(self.ranks.len()) {
            return Err(invalid(format!(
                "{} ranks given for {} columns",
                self.ranks.len(),
                grid.columns
            )));
        }
        if usize::try_from(grid.face_rows).ok() != Some(self.suits.len()) {
            return Err(invalid(format!(
                "{} suits given for {} face rows",
                self.suits.len(),
                grid.face_rows
            )));
        }

        check_names("rank", self.ranks.iter().map(String::as_str))?;
        check_names("suit", self.suits.iter().map(String::as_str))?;
        check_names("special", self.specials.iter().map(|s| s.name.as_str()))?;

        if let Some(slot) = self.specials.iter().find(|s| s.column >= grid.columns) {
            return Err(invalid(format!(
                "special '{}' uses column {} but the sheet has {} columns",
                slot.name, slot.column, grid.columns
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> SlicerError {
    SlicerError::InvalidLayout(message)
}

/// Names become file stems, so they must be non-empty, unique and free of
/// path separators.
fn check_names<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> Result<(), SlicerError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(invalid(format!("empty {kind} name")));
        }
        if name.contains(['/', '\\']) {
            return Err(invalid(format!(
                "{kind} name '{name}' must not contain path separators"
            )));
        }
        if !seen.insert(name) {
            return Err(invalid(format!("duplicate {kind} name '{name}'")));
        }
    }
    Ok(())
}
