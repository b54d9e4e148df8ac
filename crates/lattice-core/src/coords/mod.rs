//! Coordinate and color primitives shared across the boundary.
//!
//! All geometry is in logical pixels with a top-left origin.

mod color;
mod rect;
mod vec2;

pub use color::Color;
pub use rect::Rect;
pub use vec2::Vec2;
