//! CPU raster canvas and the pixel frame it produces.

pub mod canvas;
pub mod frame;

pub use canvas::Canvas;
pub use frame::FrameRgb8;
