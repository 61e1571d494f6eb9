use vello_cpu::kurbo::{Affine, Circle, Rect, Shape as _};

use crate::{
    foundation::{
        core::{Rgb8, Size},
        error::{GraphicError, GraphicResult},
    },
    render::frame::FrameRgb8,
    text::{ShapedText, builtin},
};

/// Curve flattening tolerance for circles, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Fixed-size CPU raster canvas backed by `vello_cpu`.
///
/// Drawing calls are recorded in order and rasterized once by [`Canvas::into_frame`].
pub struct Canvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl Canvas {
    /// Allocate a canvas filled with `fill`.
    pub fn new(size: Size, fill: Rgb8) -> GraphicResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| GraphicError::render("canvas width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| GraphicError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(GraphicError::render("canvas must be at least 1x1"));
        }

        let mut canvas = Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        };
        canvas.fill_rect(
            Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            fill,
        );
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Fill the full-width one-pixel row at `y`.
    pub fn fill_row(&mut self, y: u32, color: Rgb8) {
        let y = f64::from(y);
        self.fill_rect(Rect::new(0.0, y, f64::from(self.width), y + 1.0), color);
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb8) {
        let path = Circle::new((cx, cy), radius).to_path(CIRCLE_TOLERANCE);
        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&path);
    }

    /// Draw shaped text with its top-left corner at `(x, y)`.
    pub fn draw_text(&mut self, text: &ShapedText, x: f32, y: f32) {
        match text {
            ShapedText::Scalable { layout, font, .. } => {
                self.ctx
                    .set_transform(Affine::translate((f64::from(x), f64::from(y))));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        self.ctx.set_paint(paint(run.style().brush));
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        self.ctx
                            .glyph_run(font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                self.ctx.set_transform(Affine::IDENTITY);
            }
            ShapedText::Builtin { text, scale, color } => {
                let s = f64::from(*scale);
                let (x, y) = (f64::from(x), f64::from(y));
                self.ctx.set_transform(Affine::IDENTITY);
                self.ctx.set_paint(paint(*color));
                for (col, row) in builtin::lit_cells(text) {
                    let x0 = x + f64::from(col) * s;
                    let y0 = y + f64::from(row) * s;
                    self.ctx.fill_rect(&Rect::new(x0, y0, x0 + s, y0 + s));
                }
            }
        }
    }

    /// Rasterize everything drawn so far.
    pub fn into_frame(mut self) -> FrameRgb8 {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRgb8::from_premul_rgba(self.size(), pixmap.data_as_u8_slice())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb8) {
        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&rect);
    }
}

fn paint(color: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
