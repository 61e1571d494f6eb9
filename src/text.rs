//! Font acquisition, the built-in fallback font and text measurement.

pub mod builtin;
pub mod font;
pub mod layout;

pub use font::{FontChain, FontHandle, FontSource};
pub use layout::{ShapedText, TextBox, TextLayoutEngine, centered_x};
