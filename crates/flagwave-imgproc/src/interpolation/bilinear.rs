use crate::core::FloatConversion;
use crate::padding::PaddingMode;
use flagwave_image::Image;

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - How the four taps are brought back into the image.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation<T: FloatConversion, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    border: PaddingMode,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    // the casts saturate for coordinates far outside the image
    let (iu, iv) = (u0 as isize, v0 as isize);

    let iu0 = border.map_index_checked(iu, cols);
    let iu1 = border.map_index_checked(iu.saturating_add(1), cols);
    let iv0 = border.map_index_checked(iv, rows);
    let iv1 = border.map_index_checked(iv.saturating_add(1), rows);

    let data = image.as_slice();
    let mut pixel = [0.0; C];

    let taps = [
        (iv0, iu0, frac_uu * frac_vv),
        (iv0, iu1, frac_u * frac_vv),
        (iv1, iu0, frac_uu * frac_v),
        (iv1, iu1, frac_u * frac_v),
    ];

    for (row, col, w) in taps {
        let (Some(row), Some(col)) = (row, col) else {
            continue;
        };
        let base = (row * cols + col) * C;
        for (k, p) in pixel.iter_mut().enumerate() {
            *p += data[base + k].to_f32() * w;
        }
    }

    pixel
}
