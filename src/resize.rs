use image::imageops::FilterType;

use crate::{
    buffer::PixelBuffer,
    error::{RoundifyError, RoundifyResult},
};

/// Crop-to-fill resize: uniformly scale `source` so it covers the whole
/// target, then center-crop the overflow. The output is always exactly
/// `target_width` x `target_height`, with no letterboxing and no distortion.
///
/// Lanczos3 resampling keeps typical avatar-sized downscales free of visible
/// aliasing; the filter choice is not part of the contract.
pub fn resize_crop(
    source: &PixelBuffer,
    target_width: u32,
    target_height: u32,
) -> RoundifyResult<PixelBuffer> {
    if target_width == 0 || target_height == 0 {
        return Err(RoundifyError::invalid_dimension(format!(
            "target dimensions must be positive, got {target_width}x{target_height}"
        )));
    }

    let img = source.to_rgba_image()?;
    let resized = image::DynamicImage::ImageRgba8(img)
        .resize_to_fill(target_width, target_height, FilterType::Lanczos3)
        .into_rgba8();

    Ok(PixelBuffer {
        width: target_width,
        height: target_height,
        data: resized.into_raw(),
        premultiplied: source.premultiplied,
    })
}
