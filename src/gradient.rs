//! Vertical two-color background gradient.

use crate::{foundation::core::Rgb8, render::canvas::Canvas};

/// Color of row `y` in a gradient of `height` rows.
///
/// The interpolation ratio is `y / height`, so row 0 is `top` exactly and the last row stops one
/// step short of `bottom`.
pub fn row_color(top: Rgb8, bottom: Rgb8, y: u32, height: u32) -> Rgb8 {
    if height == 0 {
        return top;
    }
    top.lerp(bottom, f64::from(y) / f64::from(height))
}

/// Paint every canvas row with its gradient color.
pub fn paint_vertical(canvas: &mut Canvas, top: Rgb8, bottom: Rgb8) {
    let height = canvas.height();
    for y in 0..height {
        canvas.fill_row(y, row_color(top, bottom, y, height));
    }
}

#[cfg(test)]
#[path = "../tests/unit/gradient.rs"]
mod tests;
