use serde::{Deserialize, Serialize};

use crate::grid::GridGeometry;

/// Ranks in sheet column order
pub const STANDARD_RANKS: [&str; 13] = [
    "ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "jack", "queen", "king",
];

/// Suits in sheet row order
pub const STANDARD_SUITS: [&str; 4] = ["hearts", "diamonds", "spades", "clubs"];

/// A named cell in the back row that is not a back candidate (e.g. a joker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSlot {
    /// Output file stem
    pub name: String,
    /// Column within the back row
    pub column: u32,
}

impl SpecialSlot {
    pub fn new(name: impl Into<String>, column: u32) -> Self {
        Self {
            name: name.into(),
            column,
        }
    }
}

/// What lives where on the sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Cell geometry
    pub grid: GridGeometry,
    /// Rank name for each column, left to right
    pub ranks: Vec<String>,
    /// Suit name for each face row, top to bottom
    pub suits: Vec<String>,
    /// Special cells in the back row; back candidates start after them
    pub specials: Vec<SpecialSlot>,
    /// Number of back candidates to crop
    pub back_count: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            grid: GridGeometry::default(),
            ranks: STANDARD_RANKS.iter().map(ToString::to_string).collect(),
            suits: STANDARD_SUITS.iter().map(ToString::to_string).collect(),
            specials: vec![SpecialSlot::new("joker_1", 0), SpecialSlot::new("joker_2", 1)],
            // 13 columns - 2 jokers - 1 grey back
            back_count: 10,
        }
    }
}

/// Input and output locations, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Sprite sheet to slice
    pub sheet: String,
    /// Directory for `<rank>_of_<suit>.png` faces
    pub faces_dir: String,
    /// Directory for special cells such as jokers
    pub specials_dir: String,
    /// Scratch directory for back candidates, cleared on every run
    pub backs_dir: String,
    /// Where the chosen back is copied to
    pub final_back: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            sheet: "public/images/cards_spritesheet.png".to_string(),
            faces_dir: "public/images/cards".to_string(),
            specials_dir: "public/images".to_string(),
            backs_dir: "public/images/card_backs_temp".to_string(),
            final_back: "public/images/card-back.png".to_string(),
        }
    }
}

/// Slicer configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Config file version (currently 1)
    pub version: u32,
    pub paths: PathConfig,
    pub layout: SheetLayout,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            paths: PathConfig::default(),
            layout: SheetLayout::default(),
        }
    }
}
