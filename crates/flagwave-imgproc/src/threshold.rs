use num_traits::Zero;
use std::cmp::PartialOrd;

use flagwave_image::{Image, ImageError};

use crate::parallel;

/// Apply an inverse binary threshold to an image.
///
/// Values strictly greater than `threshold` become zero, the rest `max_value`.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The maximum value to use when the input value is less than or equal to the threshold.
///
/// # Examples
///
/// ```
/// use flagwave_image::{Image, ImageSize};
/// use flagwave_imgproc::threshold::threshold_binary_inverse;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary_inverse(&image, &mut thresholded, 100, 255).unwrap();
/// assert_eq!(thresholded.as_slice(), &[255, 0, 255, 0, 0, 0]);
/// ```
pub fn threshold_binary_inverse<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // run the thresholding operation in parallel
    parallel::par_iter_rows_val(src, dst, |src_pixel, dst_pixel| {
        *dst_pixel = if *src_pixel > threshold {
            T::zero()
        } else {
            max_value
        };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use flagwave_image::{Image, ImageError};

    #[test]
    fn threshold_binary_inverse_boundary() -> Result<(), ImageError> {
        // the threshold value itself is not above the threshold
        let image = Image::<u8, 1>::new([4, 1].into(), vec![249, 250, 251, 255])?;
        let mut thresholded = Image::<u8, 1>::from_size_val(image.size(), 7)?;

        super::threshold_binary_inverse(&image, &mut thresholded, 250, 255)?;

        assert_eq!(thresholded.as_slice(), &[255, 255, 0, 0]);

        Ok(())
    }
}
