use crate::core::FloatConversion;
use crate::padding::PaddingMode;
use flagwave_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - How an out-of-range tap is brought back into the image.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: FloatConversion, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    border: PaddingMode,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let mut pixel = [0.0; C];

    let iu = border.map_index_checked(u.round() as isize, cols);
    let iv = border.map_index_checked(v.round() as isize, rows);

    if let (Some(iu), Some(iv)) = (iu, iv) {
        let base = (iv * cols + iu) * C;
        image.as_slice()[base..base + C]
            .iter()
            .zip(pixel.iter_mut())
            .for_each(|(src, dst)| *dst = src.to_f32());
    }

    pixel
}
