use crate::error::{RoundifyError, RoundifyResult};

/// RGBA8 pixel buffer, row-major, 4 bytes per pixel.
///
/// `premultiplied` records the alpha representation of `data`; every stage in
/// the pipeline preserves it, so a buffer never silently changes convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl PixelBuffer {
    /// Fully transparent buffer of the given size.
    pub fn new(width: u32, height: u32) -> RoundifyResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
            premultiplied: false,
        })
    }

    /// Wrap straight-alpha RGBA8 bytes; `data` must be exactly `width * height * 4` long.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> RoundifyResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(RoundifyError::invalid_dimension(format!(
                "rgba8 byte length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied: false,
        })
    }

    pub fn validate(&self) -> RoundifyResult<()> {
        let expected = byte_len(self.width, self.height)?;
        if self.data.len() != expected {
            return Err(RoundifyError::invalid_dimension(format!(
                "rgba8 byte length {} does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    pub fn premultiply(&mut self) {
        if self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            px[0] = mul_div255(u16::from(px[0]), a);
            px[1] = mul_div255(u16::from(px[1]), a);
            px[2] = mul_div255(u16::from(px[2]), a);
        }
        self.premultiplied = true;
    }

    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            for c in 0..3 {
                let v = (u32::from(px[c]) * 255 + a / 2) / a;
                px[c] = v.min(255) as u8;
            }
        }
        self.premultiplied = false;
    }

    pub(crate) fn to_rgba_image(&self) -> RoundifyResult<image::RgbaImage> {
        self.validate()?;
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            RoundifyError::invalid_dimension("rgba8 byte length does not match dimensions")
        })
    }
}

fn byte_len(width: u32, height: u32) -> RoundifyResult<usize> {
    if width == 0 || height == 0 {
        return Err(RoundifyError::invalid_dimension(format!(
            "buffer dimensions must be positive, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| RoundifyError::invalid_dimension("buffer size overflow"))
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
