use flagwave_image::{Image, ImageError};

use crate::{core::FloatConversion, parallel};

/// Find the minimum and maximum values in an image.
///
/// # Arguments
///
/// * `image` - The input image of shape (height, width, channels).
///
/// # Returns
///
/// A tuple containing the minimum and maximum values over all channels.
///
/// # Errors
///
/// Returns [`ImageError::ImageDataNotInitialized`] for an image without pixels.
///
/// # Example
///
/// ```
/// use flagwave_image::{Image, ImageSize};
/// use flagwave_imgproc::normalize::find_min_max;
///
/// let image_data = vec![0u8, 1, 0, 1, 2, 3, 0, 1, 0, 1, 2, 3];
/// let image = Image::<u8, 3>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   image_data,
/// )
/// .unwrap();
///
/// let (min, max) = find_min_max(&image).unwrap();
/// assert_eq!(min, 0);
/// assert_eq!(max, 3);
/// ```
pub fn find_min_max<T, const C: usize>(image: &Image<T, C>) -> Result<(T, T), ImageError>
where
    T: Copy + PartialOrd,
{
    // get the first element in the image
    let first_element = match image.as_slice().iter().next() {
        Some(x) => x,
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    let mut min = first_element;
    let mut max = first_element;

    for x in image.as_slice().iter() {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((*min, *max))
}

/// Normalize an image using the minimum and maximum values.
///
/// The formula for normalizing an image is:
///
/// (image - min_val) * (max - min) / (max_val - min_val) + min
///
/// where `min_val` and `max_val` are the extrema of `src` over all channels.
/// Integer outputs are rounded and saturated. When the image is constant
/// (`min_val == max_val`) there is no range to stretch and `dst` receives a
/// copy of `src`.
///
/// # Arguments
///
/// * `src` - The input image of shape (height, width, channels).
/// * `dst` - The output image of shape (height, width, channels).
/// * `min` - The lower bound of the output range.
/// * `max` - The upper bound of the output range.
///
/// # Example
///
/// ```
/// use flagwave_image::{Image, ImageSize};
/// use flagwave_imgproc::normalize::normalize_min_max;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 3, height: 1 }, vec![10, 20, 30]).unwrap();
/// let mut image_normalized = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// normalize_min_max(&image, &mut image_normalized, 0, 255).unwrap();
///
/// assert_eq!(image_normalized.as_slice(), &[0, 128, 255]);
/// ```
pub fn normalize_min_max<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    min: T,
    max: T,
) -> Result<(), ImageError>
where
    T: FloatConversion + PartialOrd + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (min_val, max_val) = find_min_max(src)?;

    if min_val == max_val {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let (min_val, max_val) = (min_val.to_f32(), max_val.to_f32());
    let (min, max) = (min.to_f32(), max.to_f32());
    let scale = (max - min) / (max_val - min_val);

    parallel::par_iter_rows_val(src, dst, |&src_val, dst_val| {
        *dst_val = T::from_f32((src_val.to_f32() - min_val) * scale + min);
    });

    Ok(())
}
