use flagwave_image::{Image, ImageError, ImageSize};

/// Create a meshgrid of x and y coordinates
///
/// # Arguments
///
/// * `size` - The size of the grid; `map_x[y][x] = x` and `map_y[y][x] = y`.
///
/// # Returns
///
/// A tuple of single channel images containing the x and y coordinates.
pub fn meshgrid(size: ImageSize) -> Result<(Image<f32, 1>, Image<f32, 1>), ImageError> {
    let mut map_x = Vec::with_capacity(size.area());
    let mut map_y = Vec::with_capacity(size.area());

    for r in 0..size.height {
        for c in 0..size.width {
            map_x.push(c as f32);
            map_y.push(r as f32);
        }
    }

    Ok((Image::new(size, map_x)?, Image::new(size, map_y)?))
}

/// Create the sampling grid that maps a `dst_size` raster onto a `src_size` raster.
///
/// Pixel centers are aligned, i.e. `src = (dst + 0.5) * scale - 0.5` with
/// `scale = src_len / dst_len`, so both rasters cover the same extent.
pub fn meshgrid_scaled(
    src_size: ImageSize,
    dst_size: ImageSize,
) -> Result<(Image<f32, 1>, Image<f32, 1>), ImageError> {
    let scale_x = src_size.width as f64 / dst_size.width as f64;
    let scale_y = src_size.height as f64 / dst_size.height as f64;

    let xs = (0..dst_size.width)
        .map(|c| ((c as f64 + 0.5) * scale_x - 0.5) as f32)
        .collect::<Vec<_>>();

    let mut map_x = Vec::with_capacity(dst_size.area());
    let mut map_y = Vec::with_capacity(dst_size.area());

    for r in 0..dst_size.height {
        let y = ((r as f64 + 0.5) * scale_y - 0.5) as f32;
        map_x.extend_from_slice(&xs);
        map_y.extend(std::iter::repeat(y).take(dst_size.width));
    }

    Ok((Image::new(dst_size, map_x)?, Image::new(dst_size, map_y)?))
}
