use serde::{Deserialize, Serialize};

use super::CropRect;

/// Fixed grid of equally sized cells laid over the sprite sheet.
///
/// Cells are separated by `x_spacing`/`y_spacing` pixels of divider, and the
/// first cell's content starts at (`x_offset`, `y_offset`). Spacing sits only
/// between neighbouring cells, never after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridGeometry {
    /// Number of columns across the sheet
    pub columns: u32,
    /// Number of rows holding card faces (the back row sits below them)
    pub face_rows: u32,
    /// Content width of a single cell, excluding dividers
    pub cell_width: u32,
    /// Content height of a single cell, excluding dividers
    pub cell_height: u32,
    /// Horizontal divider width between cells
    pub x_spacing: u32,
    /// Vertical divider height between cells
    pub y_spacing: u32,
    /// Distance from the left image edge to the first cell
    pub x_offset: u32,
    /// Distance from the top image edge to the first cell
    pub y_offset: u32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            columns: 13,
            face_rows: 4,
            cell_width: 158,
            cell_height: 161,
            x_spacing: 2,
            y_spacing: 2,
            x_offset: 1,
            y_offset: 1,
        }
    }
}

impl GridGeometry {
    /// Crop rectangle of the cell at (`row`, `col`)
    pub fn cell_rect(&self, row: u32, col: u32) -> CropRect {
        let left = self.x_offset + col * (self.cell_width + self.x_spacing);
        let top = self.y_offset + row * (self.cell_height + self.y_spacing);
        CropRect::new(left, top, left + self.cell_width, top + self.cell_height)
    }

    /// Row index of the specials/backs row, directly below the faces
    pub fn back_row(&self) -> u32 {
        self.face_rows
    }

    /// Bottom-right corner of the grid including the back row.
    ///
    /// Returns `None` when the grid does not fit in `u32` pixel coordinates.
    pub fn checked_extent(&self) -> Option<(u32, u32)> {
        let last_col = self.columns.checked_sub(1)?;
        let right = self
            .cell_width
            .checked_add(self.x_spacing)?
            .checked_mul(last_col)?
            .checked_add(self.x_offset)?
            .checked_add(self.cell_width)?;
        let bottom = self
            .cell_height
            .checked_add(self.y_spacing)?
            .checked_mul(self.back_row())?
            .checked_add(self.y_offset)?
            .checked_add(self.cell_height)?;
        Some((right, bottom))
    }
}
