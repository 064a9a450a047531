use flagwave_image::Image;
use flagwave_imgproc::{interpolation::InterpolationMode, resize};

use crate::{error::FlagWaveError, pipeline::validate_input};

/// The resampling implementation used to scale the pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeBackend {
    /// Pixel-center aligned bilinear sampling, the conventional linear resize.
    #[default]
    Native,
    /// The SIMD convolution resizer of `fast_image_resize`.
    ///
    /// Its bilinear filter also low-pass filters when shrinking, so results
    /// differ slightly from [`ResizeBackend::Native`].
    Fast,
}

/// Resample `pattern` onto the raster of `flag`.
///
/// The result always has the dimensions of `flag`, whatever the size of
/// `pattern`. Same-size patterns are returned as a copy.
///
/// # Arguments
///
/// * `flag` - The image whose dimensions are matched.
/// * `pattern` - The image to resample.
/// * `backend` - The resampling implementation.
///
/// # Errors
///
/// Returns [`FlagWaveError::InvalidImage`] if either image has no pixels.
///
/// # Example
///
/// ```
/// use flagwave::image::Image;
/// use flagwave::resizer::{resize_pattern, ResizeBackend};
///
/// let flag = Image::<u8, 3>::from_size_val([40, 30].into(), 255).unwrap();
/// let pattern = Image::<u8, 3>::from_size_val([7, 5].into(), 0).unwrap();
///
/// let resized = resize_pattern(&flag, &pattern, ResizeBackend::Native).unwrap();
/// assert_eq!(resized.size(), flag.size());
/// ```
pub fn resize_pattern(
    flag: &Image<u8, 3>,
    pattern: &Image<u8, 3>,
    backend: ResizeBackend,
) -> Result<Image<u8, 3>, FlagWaveError> {
    validate_input("flag", flag)?;
    validate_input("pattern", pattern)?;

    if pattern.size() == flag.size() {
        return Ok(pattern.clone());
    }

    let mut resized = Image::<u8, 3>::from_size_val(flag.size(), 0)?;

    match backend {
        ResizeBackend::Native => {
            resize::resize_native(pattern, &mut resized, InterpolationMode::Bilinear)?
        }
        ResizeBackend::Fast => {
            resize::resize_fast(pattern, &mut resized, InterpolationMode::Bilinear)?
        }
    }

    log::debug!(
        "resized pattern {} -> {} ({:?})",
        pattern.size(),
        resized.size(),
        backend
    );

    Ok(resized)
}
