//! The graphic composer: a layout pass that places every element, a drawing pass that paints
//! them, and [`generate`] which adds the PNG write.

use std::path::PathBuf;

use crate::{
    config::GraphicConfig,
    encode::png,
    foundation::error::{GraphicError, GraphicResult},
    gradient,
    render::{Canvas, FrameRgb8},
    text::{FontChain, FontHandle, ShapedText, TextBox, TextLayoutEngine, centered_x},
};

/// Fonts for each text category.
#[derive(Clone, Debug)]
pub struct Fonts {
    pub title: FontHandle,
    pub subtitle: FontHandle,
    pub label: FontHandle,
}

impl Fonts {
    /// Acquire every category from `chain` at its configured size.
    pub fn acquire(
        config: &GraphicConfig,
        chain: &FontChain,
        engine: &mut TextLayoutEngine,
    ) -> Self {
        Self {
            title: chain.acquire(engine, config.title.size_pt),
            subtitle: chain.acquire(engine, config.subtitle.size_pt),
            label: chain.acquire(engine, config.labels.size_pt),
        }
    }
}

/// Shaped text and where its top-left corner goes.
pub struct TextPlacement {
    pub x: f32,
    pub y: f32,
    pub bounds: TextBox,
    pub shaped: ShapedText,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub cx: f32,
    pub cy: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

/// Every element position, computed before anything is drawn.
pub struct LayoutPlan {
    pub title: TextPlacement,
    pub subtitle: TextPlacement,
    pub labels: Vec<TextPlacement>,
    pub markers: Vec<Marker>,
}

/// Place title, subtitle, labels and markers.
///
/// Title and subtitle are centered on their measured width; the subtitle sits `gap` below the
/// title's measured height and the label row `offset` below the subtitle's top. Labels keep
/// their configured x and are not checked for overlap.
pub fn plan_layout(
    config: &GraphicConfig,
    fonts: &Fonts,
    engine: &mut TextLayoutEngine,
) -> GraphicResult<LayoutPlan> {
    let width = config.canvas.width;
    let ink = config.palette.white;

    let title_text = engine.shape(&config.title.text, &fonts.title, ink)?;
    let title_box = title_text.bounds();
    let title = TextPlacement {
        x: centered_x(width, title_box.width),
        y: config.title.y,
        bounds: title_box,
        shaped: title_text,
    };

    let subtitle_text = engine.shape(&config.subtitle.text, &fonts.subtitle, ink)?;
    let subtitle_box = subtitle_text.bounds();
    let subtitle = TextPlacement {
        x: centered_x(width, subtitle_box.width),
        y: title.y + title_box.height + config.subtitle.gap,
        bounds: subtitle_box,
        shaped: subtitle_text,
    };

    let label_y = subtitle.y + config.labels.offset;
    let labels = config
        .labels
        .items
        .iter()
        .map(|item| {
            let shaped = engine.shape(&item.text, &fonts.label, ink)?;
            Ok(TextPlacement {
                x: item.x,
                y: label_y,
                bounds: shaped.bounds(),
                shaped,
            })
        })
        .collect::<GraphicResult<Vec<_>>>()?;

    let markers = config
        .marker_centers()
        .into_iter()
        .map(|(cx, cy)| Marker {
            cx,
            cy,
            outer_radius: config.markers.outer_radius,
            inner_radius: config.markers.inner_radius,
        })
        .collect();

    Ok(LayoutPlan {
        title,
        subtitle,
        labels,
        markers,
    })
}

/// Paint background, gradient, text and markers, in that order.
pub fn render(config: &GraphicConfig, plan: &LayoutPlan) -> GraphicResult<FrameRgb8> {
    let palette = &config.palette;
    let mut canvas = Canvas::new(config.canvas, palette.primary)?;
    gradient::paint_vertical(&mut canvas, palette.primary, palette.secondary);

    for text in [&plan.title, &plan.subtitle].into_iter().chain(&plan.labels) {
        canvas.draw_text(&text.shaped, text.x, text.y);
    }

    for m in &plan.markers {
        let (cx, cy) = (f64::from(m.cx), f64::from(m.cy));
        canvas.fill_circle(cx, cy, f64::from(m.outer_radius), palette.white);
        canvas.fill_circle(cx, cy, f64::from(m.inner_radius), palette.primary);
    }

    Ok(canvas.into_frame())
}

/// Compose the graphic in memory using the configured font candidates.
pub fn compose(config: &GraphicConfig) -> GraphicResult<FrameRgb8> {
    config.validate()?;
    let mut engine = TextLayoutEngine::new();
    let chain = FontChain::from_candidates(&config.fonts.candidates);
    let fonts = Fonts::acquire(config, &chain, &mut engine);
    tracing::debug!(
        strategies = chain.sources().len(),
        title = %fonts.title.describe(),
        subtitle = %fonts.subtitle.describe(),
        label = %fonts.label.describe(),
        "fonts acquired"
    );

    let plan = plan_layout(config, &fonts, &mut engine)?;
    render(config, &plan)
}

/// What [`generate`] wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphicReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Size of the written file in bytes.
    pub bytes: u64,
}

impl GraphicReport {
    pub fn size_kb(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Compose the graphic and write it as PNG to `config.output`.
///
/// Nothing is drawn or written when the configuration is invalid or PNG encoding is not
/// available; the output file is replaced atomically otherwise.
#[tracing::instrument(skip(config), fields(output = %config.output.display()))]
pub fn generate(config: &GraphicConfig) -> GraphicResult<GraphicReport> {
    config.validate()?;
    png::ensure_available()?;

    let frame = compose(config)?;
    let bytes = png::encode_rgb(&frame)?;
    png::write_atomic(&config.output, &bytes)?;

    let written = std::fs::metadata(&config.output)
        .map_err(|e| GraphicError::io(&config.output, e))?
        .len();
    tracing::debug!(bytes = written, "feature graphic written");

    Ok(GraphicReport {
        path: config.output.clone(),
        width: frame.width,
        height: frame.height,
        bytes: written,
    })
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
