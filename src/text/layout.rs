use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use skrifa::{
    GlyphId, MetadataProvider as _,
    instance::{LocationRef, Size},
};

use crate::{
    foundation::{
        core::Rgb8,
        error::{GraphicError, GraphicResult},
    },
    text::{builtin, font::FontHandle},
};

/// Scalable font face registered with the layout engine.
#[derive(Clone)]
pub struct ScalableFace {
    /// Family name reported by the font file.
    pub family: String,
    /// File the face was read from.
    pub origin: PathBuf,
    /// Font bytes in the form the rasterizer consumes.
    pub data: vello_cpu::peniko::FontData,
}

impl fmt::Debug for ScalableFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalableFace")
            .field("family", &self.family)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// Rendered extent of a piece of text, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBox {
    pub width: f32,
    pub height: f32,
}

/// Text shaped with a specific font, ready to be measured and drawn.
pub enum ShapedText {
    Scalable {
        layout: parley::Layout<Rgb8>,
        font: vello_cpu::peniko::FontData,
        /// Advance width of the line and height of its inked glyphs.
        bounds: TextBox,
    },
    Builtin {
        text: String,
        scale: u32,
        color: Rgb8,
    },
}

impl ShapedText {
    /// Bounding box of the shaped text: advance width and inked height.
    pub fn bounds(&self) -> TextBox {
        match self {
            Self::Scalable { bounds, .. } => *bounds,
            Self::Builtin { text, scale, .. } => {
                let (w, h) = builtin::measure(text, *scale);
                TextBox {
                    width: w as f32,
                    height: h as f32,
                }
            }
        }
    }
}

/// Horizontal offset that centers a run of `text_width` pixels on a canvas of `canvas_width`.
///
/// Floored, so odd leftovers put the extra pixel on the right.
pub fn centered_x(canvas_width: u32, text_width: f32) -> f32 {
    ((canvas_width as f32 - text_width) / 2.0).floor()
}

/// Shapes text with Parley from raw font files.
///
/// The font collection holds only faces registered through [`TextLayoutEngine::load_face`]; system
/// fonts are never consulted, so characters missing from the chosen face render as its
/// missing-glyph box.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgb8>,
    faces: HashMap<PathBuf, ScalableFace>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        let collection = parley::fontique::Collection::new(parley::fontique::CollectionOptions {
            shared: false,
            system_fonts: false,
            ..Default::default()
        });
        Self {
            font_ctx: parley::FontContext {
                collection,
                source_cache: parley::fontique::SourceCache::default(),
            },
            layout_ctx: parley::LayoutContext::new(),
            faces: HashMap::new(),
        }
    }

    /// Read and register a font file. Repeated loads of the same path reuse the first result.
    pub fn load_face(&mut self, path: &Path) -> GraphicResult<ScalableFace> {
        if let Some(face) = self.faces.get(path) {
            return Ok(face.clone());
        }

        let bytes = std::fs::read(path).map_err(|e| GraphicError::io(path, e))?;
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            GraphicError::validation(format!(
                "no font families found in '{}'",
                path.display()
            ))
        })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GraphicError::validation("registered font family has no name"))?
            .to_string();

        let face = ScalableFace {
            family,
            origin: path.to_path_buf(),
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        };
        self.faces.insert(path.to_path_buf(), face.clone());
        Ok(face)
    }

    /// Shape a single line of `text` with `font`.
    pub fn shape(
        &mut self,
        text: &str,
        font: &FontHandle,
        color: Rgb8,
    ) -> GraphicResult<ShapedText> {
        match font {
            FontHandle::Builtin { scale } => Ok(ShapedText::Builtin {
                text: text.to_owned(),
                scale: (*scale).max(1),
                color,
            }),
            FontHandle::Scalable { face, size_px } => {
                if !size_px.is_finite() || *size_px <= 0.0 {
                    return Err(GraphicError::validation(
                        "font size must be finite and > 0",
                    ));
                }

                let mut builder = self
                    .layout_ctx
                    .ranged_builder(&mut self.font_ctx, text, 1.0, true);
                builder.push_default(parley::style::StyleProperty::FontStack(
                    parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family.clone())),
                ));
                builder.push_default(parley::style::StyleProperty::FontSize(*size_px));
                builder.push_default(parley::style::StyleProperty::Brush(color));

                let mut layout: parley::Layout<Rgb8> = builder.build(text);
                layout.break_all_lines(None);

                let bounds = TextBox {
                    width: layout.width(),
                    height: ink_height(&layout, &face.data)?,
                };
                Ok(ShapedText::Scalable {
                    layout,
                    font: face.data.clone(),
                    bounds,
                })
            }
        }
    }
}

/// Distance from the highest to the lowest inked pixel row across all glyphs of `layout`.
///
/// Outline-less glyphs such as spaces do not count; text without ink measures 0.
fn ink_height(
    layout: &parley::Layout<Rgb8>,
    font: &vello_cpu::peniko::FontData,
) -> GraphicResult<f32> {
    let face = skrifa::FontRef::from_index(font.data.data(), font.index)
        .map_err(|e| GraphicError::render(format!("font outlines unreadable: {e}")))?;

    let mut extent: Option<(f32, f32)> = None;
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let metrics =
                face.glyph_metrics(Size::new(run.run().font_size()), LocationRef::default());
            for g in run.positioned_glyphs() {
                let Some(b) = metrics.bounds(GlyphId::new(g.id)) else {
                    continue;
                };
                if b.y_max <= b.y_min {
                    continue;
                }
                // Font units point up; the layout's y points down from the line top.
                let (top, bottom) = (g.y - b.y_max, g.y - b.y_min);
                extent = Some(match extent {
                    Some((t, bt)) => (t.min(top), bt.max(bottom)),
                    None => (top, bottom),
                });
            }
        }
    }
    Ok(extent.map_or(0.0, |(top, bottom)| bottom - top))
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
