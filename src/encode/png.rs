use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{GraphicError, GraphicResult},
    render::frame::FrameRgb8,
};

/// Fail early when this build cannot encode PNG.
pub fn ensure_available() -> GraphicResult<()> {
    if cfg!(feature = "png") {
        Ok(())
    } else {
        Err(GraphicError::dependency_missing(
            "PNG encoder is not compiled in (enable the `png` feature)",
        ))
    }
}

/// Encode an RGB8 frame as PNG with the strongest compression and adaptive row filters.
#[cfg(feature = "png")]
pub fn encode_rgb(frame: &FrameRgb8) -> GraphicResult<Vec<u8>> {
    use anyhow::Context as _;
    use image::ImageEncoder as _;
    use image::codecs::png::{CompressionType, FilterType, PngEncoder};

    let expected = (frame.width as usize) * (frame.height as usize) * 3;
    if frame.data.len() != expected {
        return Err(GraphicError::render(format!(
            "frame buffer holds {} bytes, expected {expected}",
            frame.data.len()
        )));
    }

    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Best, FilterType::Adaptive)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .context("encode png")?;
    Ok(out)
}

#[cfg(not(feature = "png"))]
pub fn encode_rgb(_frame: &FrameRgb8) -> GraphicResult<Vec<u8>> {
    ensure_available().map(|()| Vec::new())
}

/// Write `bytes` to `path`, creating parent directories.
///
/// The bytes go to a hidden sibling first and are renamed over `path`, so readers never see a
/// truncated file and a failed write leaves any previous file untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> GraphicResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GraphicError::io(parent, e))?;
    }

    let tmp = staging_path(path)?;
    if let Err(e) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(GraphicError::io(&tmp, e));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(GraphicError::io(path, e));
    }
    Ok(())
}

fn staging_path(path: &Path) -> GraphicResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        GraphicError::validation(format!("output path '{}' has no file name", path.display()))
    })?;
    let mut staged = std::ffi::OsString::from(".");
    staged.push(name);
    staged.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(staged))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
