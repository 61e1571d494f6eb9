use std::path::{Path, PathBuf};

use crate::text::layout::{ScalableFace, TextLayoutEngine};

/// Built-in font pixels per requested point of size.
const BUILTIN_POINTS_PER_PIXEL: f32 = 10.0;

/// One way of acquiring a font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// A scalable font file (TTF/OTF/TTC). Fails when missing or unparsable.
    File(PathBuf),
    /// The built-in bitmap font. Never fails.
    Builtin,
}

/// A usable font at a concrete size.
#[derive(Clone, Debug)]
pub enum FontHandle {
    /// Scalable font loaded from a file.
    Scalable {
        face: ScalableFace,
        size_px: f32,
    },
    /// Built-in bitmap font magnified by an integer factor.
    Builtin { scale: u32 },
}

impl FontHandle {
    pub fn builtin_for_size(size_pt: f32) -> Self {
        let scale = if size_pt.is_finite() {
            (size_pt / BUILTIN_POINTS_PER_PIXEL).round().max(1.0) as u32
        } else {
            1
        };
        Self::Builtin { scale }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin { .. })
    }

    /// Short description used in logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Scalable { face, size_px } => {
                format!("{} ({}) @ {size_px}px", face.family, face.origin.display())
            }
            Self::Builtin { scale } => format!("builtin 5x7 x{scale}"),
        }
    }
}

/// Ordered font acquisition strategies; the first that succeeds wins.
///
/// The chain always ends with [`FontSource::Builtin`], so [`FontChain::acquire`] cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontChain {
    sources: Vec<FontSource>,
}

impl FontChain {
    pub fn new(mut sources: Vec<FontSource>) -> Self {
        if sources.last() != Some(&FontSource::Builtin) {
            sources.push(FontSource::Builtin);
        }
        Self { sources }
    }

    /// File candidates in order, followed by the built-in font.
    pub fn from_candidates<P: AsRef<Path>>(candidates: &[P]) -> Self {
        Self::new(
            candidates
                .iter()
                .map(|p| FontSource::File(p.as_ref().to_path_buf()))
                .collect(),
        )
    }

    pub fn sources(&self) -> &[FontSource] {
        &self.sources
    }

    /// Acquire a font at `size_pt` from the first strategy that works.
    pub fn acquire(&self, engine: &mut TextLayoutEngine, size_pt: f32) -> FontHandle {
        for source in &self.sources {
            match source {
                FontSource::File(path) => match engine.load_face(path) {
                    Ok(face) => {
                        tracing::debug!(
                            path = %path.display(),
                            family = %face.family,
                            "font loaded"
                        );
                        return FontHandle::Scalable {
                            face,
                            size_px: size_pt,
                        };
                    }
                    Err(err) => {
                        tracing::debug!(
                            path = %path.display(),
                            error = %err,
                            "font candidate rejected"
                        );
                    }
                },
                FontSource::Builtin => break,
            }
        }

        let handle = FontHandle::builtin_for_size(size_pt);
        tracing::warn!(
            size_pt,
            font = %handle.describe(),
            "no scalable font available, using built-in font"
        );
        handle
    }
}

/// Platform default font candidates: the platform system font, the named alternate, then common
/// Linux locations.
pub fn default_candidates() -> Vec<PathBuf> {
    let primary = if cfg!(windows) {
        "arial.ttf"
    } else {
        "/System/Library/Fonts/Helvetica.ttc"
    };
    let mut out = vec![PathBuf::from(primary)];
    if cfg!(windows) {
        out.push(PathBuf::from(r"C:\Windows\Fonts\arial.ttf"));
    } else {
        out.push(PathBuf::from("arial.ttf"));
    }
    out.push(PathBuf::from(
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ));
    out.push(PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
