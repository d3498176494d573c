use image::RgbaImage;

use crate::grid::CropRect;

/// A cell cropped out of the sprite sheet
#[derive(Debug, Clone)]
pub struct SlicedCell {
    /// Output file stem
    pub name: String,
    pub row: u32,
    pub col: u32,
    /// Region that was actually cropped (after any clamping)
    pub rect: CropRect,
    pub image: RgbaImage,
}

impl SlicedCell {
    /// PNG file name for this cell
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// Output stem for a card face, e.g. `queen_of_hearts`
pub fn face_name(rank: &str, suit: &str) -> String {
    format!("{}_of_{}", rank, suit)
}

/// Output stem for the `index`-th back candidate
pub fn back_name(index: u32) -> String {
    format!("back_option_{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(face_name("10", "spades"), "10_of_spades");
        assert_eq!(back_name(0), "back_option_0");

        let cell = SlicedCell {
            name: back_name(3),
            row: 4,
            col: 5,
            rect: CropRect::new(0, 0, 1, 1),
            image: RgbaImage::new(1, 1),
        };
        assert_eq!(cell.file_name(), "back_option_3.png");
    }
}
