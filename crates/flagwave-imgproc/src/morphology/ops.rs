use super::Kernel;
use flagwave_image::{Image, ImageError};
use rayon::prelude::*;

/// Which extremum a morphological pass keeps.
#[derive(Clone, Copy)]
enum Extremum {
    Max,
    Min,
}

/// Run a min/max filter over the neighborhood described by `kernel`.
///
/// Kernel elements that land outside the image do not take part, so the
/// border never drags values towards an arbitrary padding constant.
fn morph_pass<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
    extremum: Extremum,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + Ord,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let (width, height) = (src.width() as isize, src.height() as isize);
    if width == 0 || height == 0 {
        return Ok(());
    }

    let offsets = kernel.offsets();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(width as usize * C)
        .enumerate()
        .for_each(|(h, row_chunk)| {
            let h = h as isize;
            for (w, out_pixel) in row_chunk.chunks_exact_mut(C).enumerate() {
                let w = w as isize;
                for (c, out) in out_pixel.iter_mut().enumerate() {
                    let mut acc: Option<T> = None;

                    for &(dy, dx) in offsets.iter() {
                        let (py, px) = (h + dy, w + dx);
                        if py < 0 || py >= height || px < 0 || px >= width {
                            continue;
                        }
                        let val = src_data[(py * width + px) as usize * C + c];
                        acc = Some(match (acc, extremum) {
                            (None, _) => val,
                            (Some(a), Extremum::Max) => a.max(val),
                            (Some(a), Extremum::Min) => a.min(val),
                        });
                    }

                    // box kernels always sample the anchor itself
                    *out = acc.unwrap_or(src_data[(h * width + w) as usize * C + c]);
                }
            }
        });

    Ok(())
}

/// Dilate an image using a [`Kernel`].
///
/// Dilation expands bright regions in the image. Each pixel is replaced
/// by the maximum value in the neighborhood defined by the kernel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Returns
///
/// Ok(()) on success, or [`ImageError`] if shapes don't match.
pub fn dilate<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + Ord,
{
    morph_pass(src, dst, kernel, Extremum::Max)
}

/// Erode an image using a [`Kernel`].
///
/// Erosion shrinks bright regions in the image. Each pixel is replaced
/// by the minimum value in the neighborhood defined by the kernel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `kernel` - The morphological structuring element ([`Kernel`]).
///
/// # Returns
///
/// Ok(()) on success, or [`ImageError`] if shapes don't match.
pub fn erode<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + Ord,
{
    morph_pass(src, dst, kernel, Extremum::Min)
}

/// Closing: dilation followed by erosion.
///
/// Fills small holes and gaps narrower than the kernel and smooths object boundaries.
///
/// # Example
///
/// ```
/// use flagwave_image::Image;
/// use flagwave_imgproc::morphology::{close, Kernel, KernelShape};
///
/// // a one pixel hole in a bright row
/// let image = Image::<u8, 1>::new([5, 1].into(), vec![255, 255, 0, 255, 255]).unwrap();
/// let mut closed = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// let kernel = Kernel::new(KernelShape::Box { size: 3 }).unwrap();
/// close(&image, &mut closed, &kernel).unwrap();
///
/// assert_eq!(closed.as_slice(), &[255; 5]);
/// ```
pub fn close<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + Ord,
{
    let mut temp_img = src.clone();
    dilate(src, &mut temp_img, kernel)?;
    erode(&temp_img, dst, kernel)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::KernelShape;

    fn square_image() -> Result<Image<u8, 1>, ImageError> {
        // 7x7 with a 3x3 bright square in the middle
        let mut image = Image::<u8, 1>::from_size_val([7, 7].into(), 0)?;
        for y in 2..5 {
            for x in 2..5 {
                image.set_pixel(x, y, 0, 255)?;
            }
        }
        Ok(image)
    }

    #[test]
    fn test_dilate_grows_square() -> Result<(), ImageError> {
        let image = square_image()?;
        let mut dst = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;

        dilate(&image, &mut dst, &kernel)?;

        let bright = dst.as_slice().iter().filter(|&&v| v == 255).count();
        assert_eq!(bright, 25);
        assert_eq!(dst.get_pixel(0, 0, 0)?, &0);
        assert_eq!(dst.get_pixel(1, 1, 0)?, &255);
        Ok(())
    }

    #[test]
    fn test_erode_shrinks_square() -> Result<(), ImageError> {
        let image = square_image()?;
        let mut dst = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;

        erode(&image, &mut dst, &kernel)?;

        let bright = dst.as_slice().iter().filter(|&&v| v == 255).count();
        assert_eq!(bright, 1);
        assert_eq!(dst.get_pixel(3, 3, 0)?, &255);
        Ok(())
    }

    #[test]
    fn test_erode_ignores_border() -> Result<(), ImageError> {
        // a fully bright image stays bright at the border
        let image = Image::<u8, 1>::from_size_val([4, 3].into(), 255)?;
        let mut dst = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        let kernel = Kernel::new(KernelShape::Box { size: 5 })?;

        erode(&image, &mut dst, &kernel)?;

        assert!(dst.as_slice().iter().all(|&v| v == 255));
        Ok(())
    }

    #[test]
    fn test_close_fills_hole() -> Result<(), ImageError> {
        let mut image = Image::<u8, 1>::from_size_val([9, 9].into(), 255)?;
        image.set_pixel(4, 4, 0, 0)?;
        image.set_pixel(5, 4, 0, 0)?;

        let mut dst = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        let kernel = Kernel::new(KernelShape::Box { size: 5 })?;

        close(&image, &mut dst, &kernel)?;

        assert!(dst.as_slice().iter().all(|&v| v == 255));
        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;
        let mut dst = Image::<u8, 1>::from_size_val([3, 2].into(), 0)?;
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;
        assert_eq!(
            dilate(&image, &mut dst, &kernel),
            Err(ImageError::InvalidImageSize(2, 2, 3, 2))
        );
        Ok(())
    }
}
