use crate::foundation::core::{Rgb8, Size};

/// A finished canvas as straight (non-premultiplied) RGB8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRgb8 {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRgb8 {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        let px = self.data.get(idx..idx + 3)?;
        Some(Rgb8::new(px[0], px[1], px[2]))
    }

    /// Convert a premultiplied RGBA8 buffer, dropping alpha after unpremultiplying.
    pub(crate) fn from_premul_rgba(size: Size, rgba: &[u8]) -> Self {
        let Size { width, height } = size;
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for px in rgba.chunks_exact(4) {
            let a = px[3] as u16;
            if a == 0 {
                data.extend_from_slice(&[0, 0, 0]);
                continue;
            }
            let unpremul = |c: u8| -> u8 { ((c as u16 * 255 + a / 2) / a).min(255) as u8 };
            data.extend_from_slice(&[unpremul(px[0]), unpremul(px[1]), unpremul(px[2])]);
        }
        Self {
            width,
            height,
            data,
        }
    }
}
