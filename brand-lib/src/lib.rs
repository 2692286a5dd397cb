pub mod color;
pub mod geometry;

pub use color::sRGB;
