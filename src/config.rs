//! Immutable description of everything the composer draws.
//!
//! [`GraphicConfig::default`] reproduces the store-listing banner; a JSON document can override
//! any subset of fields.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        core::{Rgb8, Size},
        error::{GraphicError, GraphicResult},
    },
    text::font::default_candidates,
};

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "assets/images/feature-graphic.png";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphicConfig {
    pub canvas: Size,
    pub palette: Palette,
    pub title: TitleSpec,
    pub subtitle: SubtitleSpec,
    pub labels: LabelRow,
    pub markers: MarkerRow,
    pub fonts: FontConfig,
    pub output: PathBuf,
}

impl Default for GraphicConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(1024, 500),
            palette: Palette::default(),
            title: TitleSpec::default(),
            subtitle: SubtitleSpec::default(),
            labels: LabelRow::default(),
            markers: MarkerRow::default(),
            fonts: FontConfig::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Gradient top, inner marker fill.
    pub primary: Rgb8,
    /// Gradient bottom.
    pub secondary: Rgb8,
    /// Text and outer marker fill.
    pub white: Rgb8,
    pub dark_gray: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgb8::new(0xFF, 0x6B, 0x35),
            secondary: Rgb8::new(0xF7, 0xB8, 0x01),
            white: Rgb8::WHITE,
            dark_gray: Rgb8::new(0x1F, 0x29, 0x37),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleSpec {
    pub text: String,
    pub size_pt: f32,
    /// Top edge of the title.
    pub y: f32,
}

impl Default for TitleSpec {
    fn default() -> Self {
        Self {
            text: "ZWANGA".to_owned(),
            size_pt: 80.0,
            y: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubtitleSpec {
    pub text: String,
    pub size_pt: f32,
    /// Vertical space between the title's measured bottom and the subtitle.
    pub gap: f32,
}

impl Default for SubtitleSpec {
    fn default() -> Self {
        Self {
            text: "Ride-Sharing in Kinshasa".to_owned(),
            size_pt: 40.0,
            gap: 20.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureLabel {
    pub text: String,
    /// Left edge of the label.
    pub x: f32,
}

impl FeatureLabel {
    pub fn new(text: impl Into<String>, x: f32) -> Self {
        Self {
            text: text.into(),
            x,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelRow {
    pub size_pt: f32,
    /// Distance from the subtitle's top edge to the label row.
    pub offset: f32,
    pub items: Vec<FeatureLabel>,
}

impl Default for LabelRow {
    fn default() -> Self {
        Self {
            size_pt: 24.0,
            offset: 80.0,
            items: vec![
                FeatureLabel::new("🚗 Find Rides", 150.0),
                FeatureLabel::new("🚙 Share Trips", 350.0),
                FeatureLabel::new("⭐ Verified", 550.0),
                FeatureLabel::new("💬 Chat", 750.0),
            ],
        }
    }
}

/// Evenly spaced pairs of concentric circles along the bottom band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerRow {
    pub count: u32,
    /// Center x of the first marker.
    pub first_x: f32,
    pub spacing: f32,
    /// Distance from the canvas bottom edge to the marker centers.
    pub bottom_offset: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

impl Default for MarkerRow {
    fn default() -> Self {
        Self {
            count: 3,
            first_x: 200.0,
            spacing: 250.0,
            bottom_offset: 100.0,
            outer_radius: 30.0,
            inner_radius: 20.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Font files tried in order before the built-in font.
    pub candidates: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
        }
    }
}

impl GraphicConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_reader<R: Read>(reader: R) -> GraphicResult<Self> {
        let config: Self = serde_json::from_reader(reader)
            .map_err(|e| GraphicError::validation(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> GraphicResult<Self> {
        let f = File::open(path).map_err(|e| GraphicError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> GraphicResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphicError::Other(anyhow::Error::new(e).context("serialize config")))
    }

    /// Center points of the decorative markers, left to right.
    pub fn marker_centers(&self) -> Vec<(f32, f32)> {
        let cy = self.canvas.height as f32 - self.markers.bottom_offset;
        (0..self.markers.count)
            .map(|i| (self.markers.first_x + i as f32 * self.markers.spacing, cy))
            .collect()
    }

    /// Reject configurations the composer cannot draw.
    ///
    /// Positions outside the canvas are allowed; they are simply clipped.
    pub fn validate(&self) -> GraphicResult<()> {
        let Size { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(GraphicError::validation("canvas must be at least 1x1"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(GraphicError::validation(format!(
                "canvas {width}x{height} exceeds {}x{}",
                u16::MAX,
                u16::MAX
            )));
        }

        for (what, size) in [
            ("title", self.title.size_pt),
            ("subtitle", self.subtitle.size_pt),
            ("labels", self.labels.size_pt),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(GraphicError::validation(format!(
                    "{what} size_pt must be finite and > 0"
                )));
            }
        }

        let mut positions = [
            self.title.y,
            self.subtitle.gap,
            self.labels.offset,
            self.markers.first_x,
            self.markers.spacing,
            self.markers.bottom_offset,
        ]
        .into_iter()
        .chain(self.labels.items.iter().map(|l| l.x));
        if positions.any(|v| !v.is_finite()) {
            return Err(GraphicError::validation("positions must be finite"));
        }

        let m = &self.markers;
        if !m.outer_radius.is_finite() || !m.inner_radius.is_finite() || m.inner_radius < 0.0 {
            return Err(GraphicError::validation(
                "marker radii must be finite and >= 0",
            ));
        }
        if m.inner_radius > m.outer_radius {
            return Err(GraphicError::validation(
                "marker inner_radius must not exceed outer_radius",
            ));
        }

        if self.output.as_os_str().is_empty() {
            return Err(GraphicError::validation("output path must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
