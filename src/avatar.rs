use crate::{
    buffer::PixelBuffer, error::RoundifyResult, mask::apply_rounded_corners, resize::resize_crop,
};

/// Produce a rounded-corner avatar: crop-to-fill `source` to `size`, then
/// punch transparent corners with `radius`. Preconditions from the stages
/// propagate unchanged; on any error the source is untouched and no partial
/// result escapes.
#[tracing::instrument(skip(source))]
pub fn make_avatar(
    source: &PixelBuffer,
    size: (u32, u32),
    radius: f64,
) -> RoundifyResult<PixelBuffer> {
    let mut avatar = resize_crop(source, size.0, size.1)?;
    apply_rounded_corners(&mut avatar, radius)?;
    Ok(avatar)
}
