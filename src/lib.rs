#![forbid(unsafe_code)]

//! Square rounded-corner avatar generation.
//!
//! The pipeline is explicitly staged: [`resize_crop`] turns an arbitrary
//! source into a crop-to-fill square, then [`apply_rounded_corners`] punches
//! transparent corners into it using the clip paths from [`corner_paths`].
//! [`make_avatar`] runs both stages in sequence. Decoding and encoding live
//! in [`codec`]; everything else is pure, deterministic pixel and geometry
//! computation with no IO.

pub mod avatar;
pub mod buffer;
pub mod codec;
pub mod corners;
pub mod error;
pub mod mask;
pub mod resize;

pub use avatar::make_avatar;
pub use buffer::PixelBuffer;
pub use codec::{decode_image, encode_png};
pub use corners::corner_paths;
pub use error::{RoundifyError, RoundifyResult};
pub use mask::apply_rounded_corners;
pub use resize::resize_crop;
