use flagwave_image::ImageError;

/// Shapes of morphological `Kernels`.
///
/// All kernels are centered at their geometric center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelShape {
    /// A rectangular box structuring element of `size x size` pixels.
    Box {
        /// The side length of the square kernel.
        size: usize,
    },
}

/// A morphological structuring element.
///
/// Stores a binary mask where `true` marks the pixels included in the
/// neighborhood of the operation.
///
/// # Example
///
/// ```rust
/// use flagwave_imgproc::morphology::{Kernel, KernelShape};
///
/// let kernel = Kernel::new(KernelShape::Box { size: 5 }).unwrap();
/// assert_eq!(kernel.width(), 5);
/// assert_eq!(kernel.height(), 5);
/// assert_eq!(kernel.pad(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    data: Vec<bool>,
    width: usize,
    height: usize,
}

impl Kernel {
    /// Create a morphological kernel from a shape.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelLength`] for a zero sized shape.
    pub fn new(shape: KernelShape) -> Result<Self, ImageError> {
        let (width, height, data) = match shape {
            KernelShape::Box { size } => (size, size, vec![true; size * size]),
        };

        if width == 0 || height == 0 {
            return Err(ImageError::InvalidKernelLength(width.min(height)));
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Get a reference to the kernel mask, row-major.
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Get the width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the padding for the kernel (offset from center) as `(rows, cols)`.
    pub fn pad(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Offsets `(dy, dx)` relative to the anchor of every active element.
    pub(crate) fn offsets(&self) -> Vec<(isize, isize)> {
        let (pad_h, pad_w) = self.pad();
        self.data
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| {
                let (kh, kw) = (i / self.width, i % self.width);
                (kh as isize - pad_h as isize, kw as isize - pad_w as isize)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_kernel() -> Result<(), ImageError> {
        let kernel = Kernel::new(KernelShape::Box { size: 3 })?;
        assert_eq!(kernel.width(), 3);
        assert_eq!(kernel.height(), 3);
        assert!(kernel.data().iter().all(|&x| x));
        assert_eq!(kernel.offsets().len(), 9);
        assert_eq!(kernel.offsets()[0], (-1, -1));

        let even = Kernel::new(KernelShape::Box { size: 4 })?;
        assert_eq!(even.pad(), (2, 2));
        assert!(even.offsets().contains(&(0, 0)));
        Ok(())
    }

    #[test]
    fn test_zero_sized_kernel() {
        assert_eq!(
            Kernel::new(KernelShape::Box { size: 0 }),
            Err(ImageError::InvalidKernelLength(0))
        );
    }
}
