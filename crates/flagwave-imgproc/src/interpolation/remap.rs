use crate::core::FloatConversion;
use crate::padding::PaddingMode;
use crate::parallel;

use super::interpolate::interpolate_pixel;
use super::InterpolationMode;
use flagwave_image::{Image, ImageError};

/// Apply generic geometric transformation to an image.
///
/// Every destination pixel `(x, y)` is sampled from the source at
/// `(map_x[y][x], map_y[y][x])`.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - How samples falling outside `src` are resolved.
///
/// # Errors
///
/// * The mapx and mapy must have the same size.
/// * The output image must have the same size as the mapx and mapy.
pub fn remap<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    map_x: &Image<f32, 1>,
    map_y: &Image<f32, 1>,
    interpolation: InterpolationMode,
    border: PaddingMode,
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    if map_x.size() != map_y.size() {
        return Err(ImageError::InvalidImageSize(
            map_x.width(),
            map_x.height(),
            map_y.width(),
            map_y.height(),
        ));
    }

    if dst.size() != map_x.size() {
        return Err(ImageError::InvalidImageSize(
            map_x.width(),
            map_x.height(),
            dst.width(),
            dst.height(),
        ));
    }

    if src.is_empty() {
        return Err(ImageError::ImageDataNotInitialized);
    }

    // parallelize the remap operation by rows
    parallel::par_iter_rows_resample(dst, map_x, map_y, |&x, &y, dst_pixel| {
        let pixel = interpolate_pixel(src, x, y, interpolation, border);
        dst_pixel
            .iter_mut()
            .zip(pixel.iter())
            .for_each(|(out, &val)| *out = T::from_f32(val));
    });

    Ok(())
}
