#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// mask weighted alpha blending.
pub mod blend;

/// color transformations module.
pub mod color;

/// pixel type conversions shared by the kernels.
pub mod core;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// morphological operations module.
pub mod morphology;

/// operations to normalize images.
pub mod normalize;

/// border handling modes.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// operations to threshold images.
pub mod threshold;
