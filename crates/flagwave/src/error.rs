use flagwave_image::ImageError;

/// An error type for the flag waving pipeline.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FlagWaveError {
    /// One of the input images cannot be processed.
    #[error("Invalid {name} image: {reason}")]
    InvalidImage {
        /// Which input was rejected, e.g. `flag` or `pattern`.
        name: &'static str,
        /// Why the input was rejected.
        reason: String,
    },

    /// A stage parameter cannot be used.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// The rejected parameter.
        name: &'static str,
        /// Why the parameter was rejected.
        reason: String,
    },

    /// Error raised by an image operation.
    #[error(transparent)]
    Image(#[from] ImageError),
}
