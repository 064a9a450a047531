use flagwave_image::{Image, ImageError};

use crate::{core::FloatConversion, parallel};

/// Blend two images with a per-pixel mask.
///
/// The mask is read as an alpha in `[0, 1]` after dividing by 255. The
/// formula used is:
///
/// dst(x,y,c) = src1(x,y,c) * m(x,y) + src2(x,y,c) * (1 - m(x,y))
///
/// so `src1` shows where the mask is 255 and `src2` where it is 0. Integer
/// outputs are rounded to the nearest value.
///
/// # Arguments
///
/// * `src1` - The image selected by the bright part of the mask.
/// * `src2` - The image selected by the dark part of the mask.
/// * `mask` - The single channel blending mask.
/// * `dst` - The output image.
///
/// # Errors
///
/// Returns an error if `src2`, `mask` or `dst` differ in size from `src1`.
///
/// # Example
///
/// ```
/// use flagwave_image::Image;
/// use flagwave_imgproc::blend::blend_with_mask;
///
/// let src1 = Image::<u8, 1>::from_size_val([3, 1].into(), 200).unwrap();
/// let src2 = Image::<u8, 1>::from_size_val([3, 1].into(), 100).unwrap();
/// let mask = Image::<u8, 1>::new([3, 1].into(), vec![0, 255, 51]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val([3, 1].into(), 0).unwrap();
///
/// blend_with_mask(&src1, &src2, &mask, &mut dst).unwrap();
///
/// assert_eq!(dst.as_slice(), &[100, 200, 120]);
/// ```
pub fn blend_with_mask<T, const C: usize>(
    src1: &Image<T, C>,
    src2: &Image<T, C>,
    mask: &Image<u8, 1>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != mask.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            mask.cols(),
            mask.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.width(),
            src1.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_weighted(src1, src2, mask, dst, |p1, p2, &m, out| {
        let alpha = m as f32 / 255.0;
        out.iter_mut()
            .zip(p1.iter().zip(p2.iter()))
            .for_each(|(o, (a, b))| {
                *o = T::from_f32(a.to_f32() * alpha + b.to_f32() * (1.0 - alpha));
            });
    });

    Ok(())
}
