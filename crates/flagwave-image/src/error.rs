/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size mismatch: ({0}x{1}) vs ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates fall outside the image.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when an operation needs at least one pixel.
    #[error("Image data is not initialized")]
    ImageDataNotInitialized,

    /// Error when the pixel layout is not supported by the operation.
    #[error("Incompatible pixel types")]
    IncompatiblePixelTypes,

    /// Error when a filter or structuring element has an unusable size.
    #[error("Invalid kernel length: {0}")]
    InvalidKernelLength(usize),
}
