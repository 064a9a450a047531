use argh::FromArgs;
use std::path::PathBuf;

use flagwave::io::functional as F;
use flagwave::{
    image::Image,
    imgproc,
    pipeline::{run_stages, PipelineConfig},
    resizer::ResizeBackend,
};

#[derive(FromArgs)]
/// Wave a pattern into the silhouette of a flag drawn on a white background
struct Args {
    /// path to the flag image
    #[argh(option, short = 'f')]
    flag: PathBuf,

    /// path to the pattern image
    #[argh(option, short = 'p')]
    pattern: PathBuf,

    /// path to the output image (jpg, jpeg or png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"output_flag.jpg\")")]
    output: PathBuf,

    /// optional path to also save the silhouette mask
    #[argh(option)]
    mask_output: Option<PathBuf>,

    /// peak horizontal displacement in pixels
    #[argh(option, default = "15.0")]
    amplitude: f64,

    /// number of wave cycles across the flag
    #[argh(option, default = "2.0")]
    frequency: f64,

    /// wave phase in radians
    #[argh(option, default = "std::f64::consts::FRAC_PI_3")]
    phase: f64,

    /// gray levels above this value are background
    #[argh(option, default = "250")]
    threshold: u8,

    /// resize the pattern with fast_image_resize
    #[argh(switch)]
    fast_resize: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the images
    let flag = F::read_image_any_rgb8(&args.flag)?;
    let pattern = F::read_image_any_rgb8(&args.pattern)?;

    log::info!(
        "flag {} {}, pattern {} {}",
        args.flag.display(),
        flag.size(),
        args.pattern.display(),
        pattern.size()
    );

    let mut config = PipelineConfig::default();
    config.wave.amplitude = args.amplitude;
    config.wave.frequency = args.frequency;
    config.wave.phase = args.phase;
    config.silhouette.threshold = args.threshold;
    if args.fast_resize {
        config.resize_backend = ResizeBackend::Fast;
    }

    let stages = run_stages(&flag, &pattern, &config)?;

    F::write_image_any(&args.output, &stages.output)?;
    println!("Output saved to {}", args.output.display());

    if let Some(mask_output) = args.mask_output {
        let mut mask_rgb = Image::<u8, 3>::from_size_val(stages.mask.size(), 0)?;
        imgproc::color::rgb_from_gray(&stages.mask, &mut mask_rgb)?;
        F::write_image_any(&mask_output, &mask_rgb)?;
        println!("Mask saved to {}", mask_output.display());
    }

    Ok(())
}
