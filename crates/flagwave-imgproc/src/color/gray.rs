use crate::parallel;
use flagwave_image::{Image, ImageError};

/// Fixed point weights with 14 fractional bits, summing to `1 << 14`.
const RW_Q14: u32 = 4899;
const GW_Q14: u32 = 9617;
const BW_Q14: u32 = 1868;
const Q14_SHIFT: u32 = 14;

/// Convert an RGB8 image to grayscale using fixed point arithmetic:
///
/// Y = (4899 * R + 9617 * G + 1868 * B + 8192) >> 14
///
/// which is the 0.299 / 0.587 / 0.114 weighting rounded to the nearest integer.
/// Pure white stays at 255 and any gray level `v` maps to `v`.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
pub fn gray_from_rgb_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0] as u32;
        let g = src_pixel[1] as u32;
        let b = src_pixel[2] as u32;
        let y = r * RW_Q14 + g * GW_Q14 + b * BW_Q14 + (1 << (Q14_SHIFT - 1));
        dst_pixel[0] = (y >> Q14_SHIFT) as u8;
    });

    Ok(())
}

/// Convert a grayscale image to an RGB image by replicating the grayscale value across all three channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use flagwave_image::{Image, ImageSize};
/// use flagwave_imgproc::color::rgb_from_gray;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![7, 255],
/// )
/// .unwrap();
///
/// let mut rgb = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// rgb_from_gray(&image, &mut rgb).unwrap();
/// assert_eq!(rgb.as_slice(), &[7, 7, 7, 255, 255, 255]);
/// ```
pub fn rgb_from_gray<T>(src: &Image<T, 1>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[0];
        dst_pixel[2] = src_pixel[0];
    });

    Ok(())
}
