use crate::foundation::{core::Rgb8, math::Fnv1a64};

pub(crate) mod cpu;
pub(crate) mod png;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Rasterized poster: tightly packed row-major RGB8.
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// Drop the alpha channel of an RGBA8 buffer. The background fill makes every pixel
    /// opaque, so premultiplied and straight values coincide.
    pub(crate) fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for px in rgba.chunks_exact(4) {
            data.extend_from_slice(&px[..3]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        let px = self.data.get(i..i + 3)?;
        Some(Rgb8::new(px[0], px[1], px[2]))
    }

    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
    }

    /// FNV-1a 64 over dimensions and pixel bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }
}
