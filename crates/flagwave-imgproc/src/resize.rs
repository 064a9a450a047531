use crate::core::FloatConversion;
use crate::interpolation::{grid::meshgrid_scaled, remap, InterpolationMode};
use crate::padding::PaddingMode;
use fast_image_resize as fr;
use flagwave_image::{Image, ImageError};

/// Resize an image to a new size.
///
/// The function resizes an image to the size of `dst` using the specified
/// interpolation mode. Pixel centers of both rasters are aligned and samples
/// beyond the last row or column repeat the edge, which makes the bilinear
/// mode match the conventional linear resize.
/// It supports any number of channels and data types.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use flagwave_image::{Image, ImageSize};
/// use flagwave_imgproc::resize::resize_native;
/// use flagwave_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(
///     &image,
///     &mut image_resized,
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError>
where
    T: FloatConversion + Send + Sync,
{
    if src.is_empty() || dst.is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    // create the sampling grid of the output image in source coordinates
    let (map_x, map_y) = meshgrid_scaled(src.size(), dst.size())?;

    remap(
        src,
        dst,
        &map_x,
        &map_y,
        interpolation,
        PaddingMode::Replicate,
    )
}

/// Resize an image to a new size using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// It supports only 3-channel images and u8 data type. The bilinear mode is a
/// convolution filter, which also low-pass filters when shrinking.
///
/// # Arguments
///
/// * `src` - The input image container with 3 channels.
/// * `dst` - The output image container with 3 channels.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use flagwave_image::{Image, ImageSize};
/// use flagwave_imgproc::resize::resize_fast;
/// use flagwave_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(
///     &image,
///     &mut image_resized,
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// The function returns an error if the image cannot be resized.
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.is_empty() || dst.is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    // prepare the input image for the fast_image_resize crate
    let src_data_len = src.as_slice().len();
    let src_image = fr::images::ImageRef::new(
        src.width() as u32,
        src.height() as u32,
        src.as_slice(),
        fr::PixelType::U8x3,
    )
    .map_err(|_| ImageError::InvalidChannelShape(src_data_len, src.size().area() * 3))?;

    // prepare the output image for the fast_image_resize crate
    let (dst_width, dst_height) = (dst.width() as u32, dst.height() as u32);
    let dst_data_len = dst.as_slice().len();
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x3,
    )
    .map_err(|_| ImageError::InvalidChannelShape(dst_data_len, dst_data_len))?;

    let options = fr::ResizeOptions::new().resize_alg(match interpolation {
        InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
    });

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|_| ImageError::IncompatiblePixelTypes)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interpolation::InterpolationMode;
    use flagwave_image::{Image, ImageError, ImageSize};

    #[test]
    fn resize_smoke_ch3() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0f32; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0)?;

        super::resize_native(&image, &mut image_resized, InterpolationMode::Bilinear)?;

        assert_eq!(image_resized.num_channels(), 3);
        assert_eq!(image_resized.size().width, 2);
        assert_eq!(image_resized.size().height, 3);
        Ok(())
    }

    #[test]
    fn resize_native_bilinear_upsample() -> Result<(), ImageError> {
        // [0, 100] upsampled to 4 columns samples at -0.25, 0.25, 0.75, 1.25
        let image = Image::<u8, 1>::new([2, 1].into(), vec![0, 100])?;
        let mut resized = Image::<u8, 1>::from_size_val([4, 1].into(), 0)?;

        super::resize_native(&image, &mut resized, InterpolationMode::Bilinear)?;

        assert_eq!(resized.as_slice(), &[0, 25, 75, 100]);
        Ok(())
    }

    #[test]
    fn resize_native_downsample_halves() -> Result<(), ImageError> {
        // 4 -> 2 columns samples at 0.5 and 2.5
        let image = Image::<u8, 1>::new([4, 1].into(), vec![0, 10, 20, 30])?;
        let mut resized = Image::<u8, 1>::from_size_val([2, 1].into(), 0)?;

        super::resize_native(&image, &mut resized, InterpolationMode::Bilinear)?;

        assert_eq!(resized.as_slice(), &[5, 25]);
        Ok(())
    }

    #[test]
    fn resize_native_constant_is_preserved() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_pixel([7, 3].into(), [200, 10, 30])?;
        let mut resized = Image::<u8, 3>::from_size_val([5, 11].into(), 0)?;

        super::resize_native(&image, &mut resized, InterpolationMode::Bilinear)?;

        assert!(resized
            .as_slice()
            .chunks_exact(3)
            .all(|p| p == [200, 10, 30]));
        Ok(())
    }

    #[test]
    fn resize_native_rejects_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([0, 0].into(), vec![])?;
        let mut resized = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;
        let res = super::resize_native(&image, &mut resized, InterpolationMode::Bilinear);
        assert_eq!(res, Err(ImageError::InvalidImageSize(0, 0, 2, 2)));
        Ok(())
    }

    #[test]
    fn resize_fast() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0u8; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0)?;

        super::resize_fast(&image, &mut image_resized, InterpolationMode::Nearest)?;

        assert_eq!(image_resized.num_channels(), 3);
        assert_eq!(image_resized.size().width, 2);
        assert_eq!(image_resized.size().height, 3);
        Ok(())
    }
}
