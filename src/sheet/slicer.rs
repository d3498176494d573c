use image::{RgbaImage, imageops};
use log::{debug, info, warn};

use super::{SlicedCell, back_name, face_name};
use crate::cli::BoundsPolicy;
use crate::config::SheetLayout;
use crate::error::SlicerError;

/// Every cell cut from one sheet, grouped by destination
#[derive(Debug)]
pub struct SlicedSheet {
    pub faces: Vec<SlicedCell>,
    pub specials: Vec<SlicedCell>,
    /// Back candidates in enumeration order
    pub backs: Vec<SlicedCell>,
}

/// Cuts a sprite sheet into cells according to a [`SheetLayout`]
pub struct GridSlicer<'a> {
    layout: &'a SheetLayout,
    bounds: BoundsPolicy,
}

impl<'a> GridSlicer<'a> {
    /// Create a slicer for a layout, validating it first
    pub fn new(layout: &'a SheetLayout) -> Result<Self, SlicerError> {
        layout.validate()?;
        Ok(Self {
            layout,
            bounds: BoundsPolicy::Strict,
        })
    }

    pub fn bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    /// Cut faces, specials and back candidates.
    ///
    /// Nothing is written here, so a bounds failure leaves no partial output.
    pub fn slice(&self, sheet: &RgbaImage) -> Result<SlicedSheet, SlicerError> {
        let faces = self.faces(sheet)?;
        let specials = self.specials(sheet)?;
        let backs = self.backs(sheet)?;

        if backs.is_empty() {
            return Err(SlicerError::NoBackCandidates);
        }

        info!(
            "Sliced {} faces, {} specials and {} back candidates",
            faces.len(),
            specials.len(),
            backs.len()
        );

        Ok(SlicedSheet {
            faces,
            specials,
            backs,
        })
    }

    /// Card faces in row-major order
    pub fn faces(&self, sheet: &RgbaImage) -> Result<Vec<SlicedCell>, SlicerError> {
        let mut cells = Vec::with_capacity(self.layout.ranks.len() * self.layout.suits.len());

        for (row, suit) in (0u32..).zip(&self.layout.suits) {
            for (col, rank) in (0u32..).zip(&self.layout.ranks) {
                let name = face_name(rank, suit);
                if let Some(cell) = self.crop(sheet, name, row, col)? {
                    cells.push(cell);
                }
            }
        }

        Ok(cells)
    }

    /// Special cells, each at its own configured column in the back row
    pub fn specials(&self, sheet: &RgbaImage) -> Result<Vec<SlicedCell>, SlicerError> {
        let row = self.layout.grid.back_row();
        let mut cells = Vec::with_capacity(self.layout.specials.len());

        for slot in &self.layout.specials {
            if let Some(cell) = self.crop(sheet, slot.name.clone(), row, slot.column)? {
                cells.push(cell);
            }
        }

        Ok(cells)
    }

    /// Numbered back candidates following the special columns
    pub fn backs(&self, sheet: &RgbaImage) -> Result<Vec<SlicedCell>, SlicerError> {
        let row = self.layout.grid.back_row();
        let mut cells = Vec::new();

        for (index, col) in (0u32..).zip(back_columns(self.layout)) {
            if let Some(cell) = self.crop(sheet, back_name(index), row, col)? {
                cells.push(cell);
            }
        }

        Ok(cells)
    }

    fn crop(
        &self,
        sheet: &RgbaImage,
        name: String,
        row: u32,
        col: u32,
    ) -> Result<Option<SlicedCell>, SlicerError> {
        let (width, height) = sheet.dimensions();
        let mut rect = self.layout.grid.cell_rect(row, col);

        if !rect.fits_within(width, height) {
            match self.bounds {
                BoundsPolicy::Strict => {
                    return Err(SlicerError::CropOutOfBounds {
                        name,
                        rect,
                        width,
                        height,
                    });
                }
                BoundsPolicy::Clamp => {
                    let clamped = rect.clamp_to(width, height);
                    if clamped.is_empty() {
                        warn!(
                            "Skipping '{}': {} lies outside the {}x{} sheet",
                            name, rect, width, height
                        );
                        return Ok(None);
                    }
                    warn!("Clamping '{}' from {} to {}", name, rect, clamped);
                    rect = clamped;
                }
            }
        }

        let image =
            imageops::crop_imm(sheet, rect.left, rect.top, rect.width(), rect.height()).to_image();
        debug!("Cropped '{}' from {}", name, rect);

        Ok(Some(SlicedCell {
            name,
            row,
            col,
            rect,
            image,
        }))
    }
}

/// Sheet columns holding back candidates, in candidate order.
///
/// Candidates start right after the special slots. Enumeration stops early,
/// with a warning, once it would run past the last column.
pub fn back_columns(layout: &SheetLayout) -> Vec<u32> {
    let start = u32::try_from(layout.specials.len()).unwrap_or(u32::MAX);
    let columns = layout.grid.columns;
    let mut result = Vec::new();

    for i in 0..layout.back_count {
        let col = start.saturating_add(i);
        if col >= columns {
            warn!(
                "Back column {} is past the sheet's {} columns; stopping after {} of {} backs",
                col,
                columns,
                result.len(),
                layout.back_count
            );
            break;
        }
        result.push(col);
    }

    result
}
