use flagwave_image::Image;
use flagwave_imgproc::blend;

use crate::error::FlagWaveError;

/// Composite the warped pattern over the flag using the silhouette mask.
///
/// Per pixel and channel, with `m = mask / 255`:
///
/// ```text
/// output = round(warped * m + flag * (1 - m))
/// ```
///
/// Pixels where the mask is 0 keep the flag exactly and pixels where it is
/// 255 take the warped pattern exactly.
///
/// # Errors
///
/// Returns an error if the three images do not share the same size.
pub fn composite(
    flag: &Image<u8, 3>,
    warped: &Image<u8, 3>,
    mask: &Image<u8, 1>,
) -> Result<Image<u8, 3>, FlagWaveError> {
    let mut output = Image::<u8, 3>::from_size_val(flag.size(), 0)?;
    blend::blend_with_mask(warped, flag, mask, &mut output)?;

    log::debug!("composited {}", output.size());

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagwave_image::ImageError;

    #[test]
    fn composite_respects_mask() -> Result<(), FlagWaveError> {
        let flag = Image::<u8, 3>::from_size_pixel([3, 1].into(), [255, 255, 255])?;
        let warped = Image::<u8, 3>::from_size_pixel([3, 1].into(), [200, 0, 0])?;
        let mask = Image::<u8, 1>::new([3, 1].into(), vec![0, 255, 102])?;

        let output = composite(&flag, &warped, &mask)?;

        assert_eq!(
            output.as_slice(),
            &[255, 255, 255, 200, 0, 0, 233, 153, 153]
        );
        Ok(())
    }

    #[test]
    fn composite_size_mismatch() -> Result<(), FlagWaveError> {
        let flag = Image::<u8, 3>::from_size_val([3, 3].into(), 0)?;
        let warped = Image::<u8, 3>::from_size_val([3, 2].into(), 0)?;
        let mask = Image::<u8, 1>::from_size_val([3, 3].into(), 0)?;

        assert_eq!(
            composite(&flag, &warped, &mask),
            Err(FlagWaveError::Image(ImageError::InvalidImageSize(
                3, 2, 3, 3
            )))
        );
        Ok(())
    }
}
