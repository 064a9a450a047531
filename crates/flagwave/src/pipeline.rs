use std::time::Instant;

use flagwave_image::Image;

use crate::{
    compositor,
    error::FlagWaveError,
    resizer::{self, ResizeBackend},
    silhouette::{self, SilhouetteParams},
    wave::{self, WaveParams},
};

/// The parameters of every stage of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PipelineConfig {
    /// How the pattern is resampled onto the flag.
    pub resize_backend: ResizeBackend,
    /// How the flag silhouette is extracted.
    pub silhouette: SilhouetteParams,
    /// The waving displacement field.
    pub wave: WaveParams,
}

/// The intermediate and final images of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// The silhouette mask of the flag.
    pub mask: Image<u8, 1>,
    /// The resized pattern after waving.
    pub warped: Image<u8, 3>,
    /// The composited result.
    pub output: Image<u8, 3>,
}

/// Check that an input image can enter the pipeline.
///
/// # Arguments
///
/// * `name` - The role of the image, reported in the error.
/// * `image` - The image to check.
///
/// # Errors
///
/// Returns [`FlagWaveError::InvalidImage`] when the image has a zero
/// dimension.
pub fn validate_input(name: &'static str, image: &Image<u8, 3>) -> Result<(), FlagWaveError> {
    if image.is_empty() {
        return Err(FlagWaveError::InvalidImage {
            name,
            reason: format!("image has no pixels ({})", image.size()),
        });
    }
    Ok(())
}

/// Run every stage and keep the intermediate images.
///
/// # Arguments
///
/// * `flag` - The flag image, drawn on a near white background.
/// * `pattern` - The pattern to wave into the flag, of any size.
/// * `config` - The stage parameters.
pub fn run_stages(
    flag: &Image<u8, 3>,
    pattern: &Image<u8, 3>,
    config: &PipelineConfig,
) -> Result<PipelineOutput, FlagWaveError> {
    validate_input("flag", flag)?;
    validate_input("pattern", pattern)?;
    config.wave.validate()?;

    let start = Instant::now();

    let resized = resizer::resize_pattern(flag, pattern, config.resize_backend)?;
    let mask = silhouette::extract_silhouette(flag, &config.silhouette)?;
    let warped = wave::warp_pattern(&resized, &config.wave)?;
    let output = compositor::composite(flag, &warped, &mask)?;

    log::debug!(
        "pipeline finished for {} in {:?}",
        flag.size(),
        start.elapsed()
    );

    Ok(PipelineOutput {
        mask,
        warped,
        output,
    })
}

/// Wave `pattern` into the silhouette of `flag` with the given parameters.
///
/// The output has the size of `flag`. Pixels outside the silhouette keep
/// the flag unchanged.
pub fn warp_and_composite_with(
    flag: &Image<u8, 3>,
    pattern: &Image<u8, 3>,
    config: &PipelineConfig,
) -> Result<Image<u8, 3>, FlagWaveError> {
    Ok(run_stages(flag, pattern, config)?.output)
}

/// Wave `pattern` into the silhouette of `flag` with the default parameters.
///
/// # Errors
///
/// Returns [`FlagWaveError::InvalidImage`] if either image has no pixels.
/// Returns [`FlagWaveError::InvalidParameter`] if the wave parameters are
/// not finite or push coordinates past the `f32` range.
///
/// # Example
///
/// ```
/// use flagwave::image::Image;
/// use flagwave::warp_and_composite;
///
/// let flag = Image::<u8, 3>::from_size_val([64, 48].into(), 255).unwrap();
/// let pattern = Image::<u8, 3>::from_size_pixel([10, 10].into(), [255, 0, 0]).unwrap();
///
/// let output = warp_and_composite(&flag, &pattern).unwrap();
///
/// // a flag without silhouette is returned untouched
/// assert_eq!(output, flag);
/// ```
pub fn warp_and_composite(
    flag: &Image<u8, 3>,
    pattern: &Image<u8, 3>,
) -> Result<Image<u8, 3>, FlagWaveError> {
    warp_and_composite_with(flag, pattern, &PipelineConfig::default())
}
