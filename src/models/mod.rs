pub mod display;
pub mod image;

pub use display::*;
pub use image::*;
