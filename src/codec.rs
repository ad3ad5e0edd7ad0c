use std::io::Cursor;

use anyhow::Context;

use crate::{
    buffer::PixelBuffer,
    error::{RoundifyError, RoundifyResult},
};

/// Decode raw image bytes (any format the `image` crate reads) into a
/// straight-alpha RGBA8 buffer.
pub fn decode_image(bytes: &[u8]) -> RoundifyResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| RoundifyError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_rgba8(width, height, rgba.into_raw())
}

/// Encode a buffer as PNG. PNG carries an alpha channel, so rounded corners
/// survive; premultiplied buffers are converted back to straight alpha first.
pub fn encode_png(frame: &PixelBuffer) -> RoundifyResult<Vec<u8>> {
    let straight = if frame.premultiplied {
        let mut copy = frame.clone();
        copy.unpremultiply();
        copy
    } else {
        frame.clone()
    };

    let img = straight.to_rgba_image()?;
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(bytes)
}
