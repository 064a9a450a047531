#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use flagwave_image as image;

#[doc(inline)]
pub use flagwave_imgproc as imgproc;

#[doc(inline)]
pub use flagwave_io as io;

/// Blends the warped pattern over the flag through the silhouette mask.
pub mod compositor;

/// Error types for the pipeline.
pub mod error;

/// The end to end flag waving pipeline.
pub mod pipeline;

/// Scales the pattern onto the flag raster.
pub mod resizer;

/// Flag silhouette extraction.
pub mod silhouette;

/// Sinusoidal displacement field and pattern warping.
pub mod wave;

pub use crate::error::FlagWaveError;
pub use crate::pipeline::{warp_and_composite, warp_and_composite_with, PipelineConfig};
