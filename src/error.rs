//! Errors

use thiserror::Error;

/// Errors from constructing bitmaps or reading and writing image files
///
/// Drawing itself never fails; degenerate geometry is simply not drawn.
#[derive(Debug,Error)]
pub enum Error {
    /// Width or height is zero
    #[error("invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride shorter than the row width
    #[error("row stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Pixel storage cannot hold stride * height pixels
    #[error("buffer holds {len} pixels, {needed} required")]
    BufferTooSmall { len: usize, needed: usize },
    /// Image decoding or encoding failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result with the crate [Error]
///
/// [Error]: enum.Error.html
pub type Result<T> = std::result::Result<T, Error>;
