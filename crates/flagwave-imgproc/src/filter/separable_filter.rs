use crate::core::FloatConversion;
use crate::padding::PaddingMode;
use flagwave_image::{Image, ImageError};
use rayon::prelude::*;

/// A separable 2D filter that applies horizontal and vertical 1D convolutions sequentially.
///
/// The kernel data and the tap offsets relative to the anchor are cached.
struct SeparableFilter<'a> {
    kernel_x: &'a [f32],
    kernel_y: &'a [f32],
    offsets_x: Vec<isize>,
    offsets_y: Vec<isize>,
    border: PaddingMode,
}

impl<'a> SeparableFilter<'a> {
    fn new(kernel_x: &'a [f32], kernel_y: &'a [f32], border: PaddingMode) -> Self {
        let offsets = |kernel: &[f32]| {
            let half = kernel.len() as isize / 2;
            (0..kernel.len() as isize).map(|i| i - half).collect::<Vec<_>>()
        };

        Self {
            kernel_x,
            kernel_y,
            offsets_x: offsets(kernel_x),
            offsets_y: offsets(kernel_y),
            border,
        }
    }

    /// Performs horizontal filtering followed by vertical filtering using a
    /// temporary `f32` buffer so that intermediate values are not quantized.
    fn apply<T, const C: usize>(&self, src: &Image<T, C>, dst: &mut Image<T, C>)
    where
        T: FloatConversion + Send + Sync,
    {
        let (rows, cols) = (src.rows(), src.cols());
        let src_data = src.as_slice();
        let mut temp = vec![0.0f32; src_data.len()];

        // horizontal pass
        temp.par_chunks_exact_mut(cols * C)
            .zip(src_data.par_chunks_exact(cols * C))
            .for_each(|(row_temp, row_src)| {
                for (c, out_pixel) in row_temp.chunks_exact_mut(C).enumerate() {
                    for (&k, &off) in self.kernel_x.iter().zip(self.offsets_x.iter()) {
                        let Some(x) = self.border.map_index_checked(c as isize + off, cols)
                        else {
                            continue;
                        };
                        for (ch, acc) in out_pixel.iter_mut().enumerate() {
                            *acc += row_src[x * C + ch].to_f32() * k;
                        }
                    }
                }
            });

        // vertical pass
        let temp = &temp;
        dst.as_slice_mut()
            .par_chunks_exact_mut(cols * C)
            .enumerate()
            .for_each(|(r, row_dst)| {
                for (c, out_pixel) in row_dst.chunks_exact_mut(C).enumerate() {
                    let mut acc = [0.0f32; C];
                    for (&k, &off) in self.kernel_y.iter().zip(self.offsets_y.iter()) {
                        let Some(y) = self.border.map_index_checked(r as isize + off, rows)
                        else {
                            continue;
                        };
                        let idx = (y * cols + c) * C;
                        for (ch, acc_val) in acc.iter_mut().enumerate() {
                            *acc_val += temp[idx + ch] * k;
                        }
                    }
                    for (out, &val) in out_pixel.iter_mut().zip(acc.iter()) {
                        *out = T::from_f32(val);
                    }
                }
            });
    }
}

/// Apply a separable filter to an image.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `border` - How taps outside the image are resolved.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn separable_filter<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_x: &[f32],
    kernel_y: &[f32],
    border: PaddingMode,
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if kernel_x.is_empty() || kernel_y.is_empty() {
        return Err(ImageError::InvalidKernelLength(0));
    }

    if src.is_empty() {
        return Ok(());
    }

    SeparableFilter::new(kernel_x, kernel_y, border).apply(src, dst);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagwave_image::ImageSize;

    #[test]
    fn test_separable_filter() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 5,
            height: 5,
        };

        let mut data = vec![0.0f32; size.area()];
        data[12] = 9.0;
        let img = Image::<f32, 1>::new(size, data)?;

        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;
        let kernel_x = vec![1.0, 1.0, 1.0];
        let kernel_y = vec![1.0, 1.0, 1.0];

        separable_filter(&img, &mut dst, &kernel_x, &kernel_y, PaddingMode::Replicate)?;

        #[rustfmt::skip]
        assert_eq!(
            dst.as_slice(),
            &[
                0.0, 0.0, 0.0, 0.0, 0.0,
                0.0, 9.0, 9.0, 9.0, 0.0,
                0.0, 9.0, 9.0, 9.0, 0.0,
                0.0, 9.0, 9.0, 9.0, 0.0,
                0.0, 0.0, 0.0, 0.0, 0.0,
            ]
        );

        Ok(())
    }

    #[test]
    fn test_separable_filter_reflect101_border() -> Result<(), ImageError> {
        // [a b c] under reflect101 with a 3-tap box sees b|a b c|b
        let img = Image::<f32, 1>::new([3, 1].into(), vec![3.0, 6.0, 9.0])?;
        let mut dst = Image::<f32, 1>::from_size_val(img.size(), 0.0)?;

        let third = 1.0 / 3.0;
        separable_filter(
            &img,
            &mut dst,
            &[third, third, third],
            &[1.0],
            PaddingMode::Reflect101,
        )?;

        let expected = [5.0, 6.0, 7.0];
        for (a, b) in dst.as_slice().iter().zip(expected.iter()) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
        }

        Ok(())
    }

    #[test]
    fn test_separable_filter_u8_constant_image() -> Result<(), ImageError> {
        let img = Image::<u8, 3>::from_size_pixel([6, 4].into(), [255, 0, 128])?;
        let mut dst = Image::<u8, 3>::from_size_val(img.size(), 0)?;

        let kernel = [0.0625, 0.25, 0.375, 0.25, 0.0625];
        separable_filter(&img, &mut dst, &kernel, &kernel, PaddingMode::Reflect101)?;

        assert_eq!(img, dst);
        Ok(())
    }
}
