//! Synthetic sprite sheets for unit tests.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::config::{SheetLayout, SpecialSlot};
use crate::grid::GridGeometry;

/// Fill colour of the cell at (`row`, `col`); dividers stay transparent
pub fn cell_color(row: u32, col: u32) -> Rgba<u8> {
    let r = u8::try_from(10 + row * 40).unwrap_or(u8::MAX);
    let g = u8::try_from(10 + col * 15).unwrap_or(u8::MAX);
    Rgba([r, g, 200, 255])
}

/// Sheet exactly covering `grid` (faces plus back row), one colour per cell
pub fn paint_sheet(grid: &GridGeometry) -> RgbaImage {
    let (width, height) = grid.checked_extent().unwrap();
    let mut img = RgbaImage::new(width, height);

    for row in 0..=grid.back_row() {
        for col in 0..grid.columns {
            let rect = grid.cell_rect(row, col);
            let color = cell_color(row, col);
            for y in rect.top..rect.bottom {
                for x in rect.left..rect.right {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }

    img
}

/// Paint a sheet for `grid` and save it as PNG
pub fn write_sheet(grid: &GridGeometry, path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    paint_sheet(grid).save(path).unwrap();
}

/// 4 columns, 2 face rows, one joker and three backs
pub fn small_layout() -> SheetLayout {
    SheetLayout {
        grid: GridGeometry {
            columns: 4,
            face_rows: 2,
            cell_width: 5,
            cell_height: 6,
            x_spacing: 1,
            y_spacing: 2,
            x_offset: 2,
            y_offset: 1,
        },
        ranks: ["ace", "2", "3", "4"].map(String::from).to_vec(),
        suits: ["hearts", "spades"].map(String::from).to_vec(),
        specials: vec![SpecialSlot::new("joker", 0)],
        back_count: 3,
    }
}
