mod geometry;
mod rect;

pub use geometry::GridGeometry;
pub use rect::CropRect;
