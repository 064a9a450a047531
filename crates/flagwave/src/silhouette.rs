use flagwave_image::Image;
use flagwave_imgproc::{
    color, filter,
    morphology::{self, Kernel, KernelShape},
    normalize, threshold,
};

use crate::{error::FlagWaveError, pipeline::validate_input};

/// Parameters of the silhouette extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilhouetteParams {
    /// Gray levels above this value are background.
    pub threshold: u8,
    /// Side of the square closing element.
    pub closing_kernel: usize,
    /// Side of the gaussian kernel that softens the edges. Must be odd.
    pub blur_kernel: usize,
}

impl Default for SilhouetteParams {
    fn default() -> Self {
        Self {
            threshold: 250,
            closing_kernel: 5,
            blur_kernel: 5,
        }
    }
}

/// Extract the silhouette mask of a flag drawn on a near white background.
///
/// The flag is converted to gray and every pixel not brighter than
/// `params.threshold` is selected. The binary selection is closed to fill
/// small holes, blurred to soften its edges and stretched back to `0..=255`.
///
/// A flag without background or without any drawing yields a constant mask
/// (all 255 or all 0). This is reported through a warning, not an error.
///
/// # Arguments
///
/// * `flag` - The flag image.
/// * `params` - The extraction parameters.
///
/// # Returns
///
/// A single channel mask with 255 inside the silhouette and 0 outside.
///
/// # Example
///
/// ```
/// use flagwave::image::Image;
/// use flagwave::silhouette::{extract_silhouette, SilhouetteParams};
///
/// let flag = Image::<u8, 3>::from_size_val([8, 8].into(), 255).unwrap();
/// let mask = extract_silhouette(&flag, &SilhouetteParams::default()).unwrap();
///
/// assert!(mask.as_slice().iter().all(|&v| v == 0));
/// ```
pub fn extract_silhouette(
    flag: &Image<u8, 3>,
    params: &SilhouetteParams,
) -> Result<Image<u8, 1>, FlagWaveError> {
    validate_input("flag", flag)?;

    let mut gray = Image::<u8, 1>::from_size_val(flag.size(), 0)?;
    color::gray_from_rgb_u8(flag, &mut gray)?;

    // the background is near white, so everything else is the flag
    let mut selected = Image::<u8, 1>::from_size_val(flag.size(), 0)?;
    threshold::threshold_binary_inverse(&gray, &mut selected, params.threshold, 255)?;

    let kernel = Kernel::new(KernelShape::Box {
        size: params.closing_kernel,
    })?;
    let mut closed = Image::<u8, 1>::from_size_val(flag.size(), 0)?;
    morphology::close(&selected, &mut closed, &kernel)?;

    let mut blurred = Image::<u8, 1>::from_size_val(flag.size(), 0)?;
    filter::gaussian_blur(
        &closed,
        &mut blurred,
        (params.blur_kernel, params.blur_kernel),
        (0.0, 0.0),
    )?;

    let (min, max) = normalize::find_min_max(&blurred)?;
    if min == max {
        log::warn!(
            "flag {} yields a constant silhouette mask ({min})",
            flag.size()
        );
    }

    let mut mask = Image::<u8, 1>::from_size_val(flag.size(), 0)?;
    normalize::normalize_min_max(&blurred, &mut mask, 0, 255)?;

    log::debug!(
        "extracted silhouette of {} with raw range [{min}, {max}]",
        flag.size()
    );

    Ok(mask)
}
