use flagwave_image::{Image, ImageError};

use super::{kernels, separable_filter};
use crate::core::FloatConversion;
use crate::padding::PaddingMode;

/// Blur an image using a gaussian blur filter
///
/// Borders are handled with [`PaddingMode::Reflect101`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The size of the kernel (kernel_x, kernel_y).
/// * `sigma` - The sigma of the gaussian kernel; non-positive values derive it from the size.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Example
///
/// ```
/// use flagwave_image::Image;
/// use flagwave_imgproc::filter::gaussian_blur;
///
/// let mut image = Image::<u8, 1>::from_size_val([5, 5].into(), 0).unwrap();
/// image.set_pixel(2, 2, 0, 255).unwrap();
///
/// let mut blurred = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
/// gaussian_blur(&image, &mut blurred, (5, 5), (0.0, 0.0)).unwrap();
///
/// // 255 * 0.375 * 0.375
/// assert_eq!(blurred.get_pixel(2, 2, 0).unwrap(), &36);
/// ```
pub fn gaussian_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: (usize, usize),
    sigma: (f32, f32),
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    let kernel_x = kernels::gaussian_kernel_1d(kernel_size.0, sigma.0)?;
    let kernel_y = kernels::gaussian_kernel_1d(kernel_size.1, sigma.1)?;
    separable_filter(src, dst, &kernel_x, &kernel_y, PaddingMode::Reflect101)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_blur_soft_edge() -> Result<(), ImageError> {
        // left half 0, right half 255
        let data = (0..8u8)
            .map(|x| if x < 4 { 0 } else { 255 })
            .collect::<Vec<_>>();
        let img = Image::<u8, 1>::new([8, 1].into(), data)?;
        let mut dst = Image::<u8, 1>::from_size_val(img.size(), 0)?;

        gaussian_blur(&img, &mut dst, (5, 5), (0.0, 0.0))?;

        // edge band: 255 * 1/16, 255 * 5/16, 255 * 11/16, 255 * 15/16
        assert_eq!(dst.as_slice(), &[0, 0, 16, 80, 175, 239, 255, 255]);
        Ok(())
    }

    #[test]
    fn test_gaussian_blur_invalid_kernel() -> Result<(), ImageError> {
        let img = Image::<u8, 1>::from_size_val([4, 4].into(), 0)?;
        let mut dst = img.clone();
        assert_eq!(
            gaussian_blur(&img, &mut dst, (4, 5), (0.0, 0.0)),
            Err(ImageError::InvalidKernelLength(4))
        );
        Ok(())
    }
}
