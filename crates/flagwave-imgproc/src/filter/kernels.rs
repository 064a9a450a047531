use flagwave_image::ImageError;

/// Precomputed gaussian kernels used when no sigma is given.
const SMALL_GAUSSIAN_1: [f32; 1] = [1.0];
const SMALL_GAUSSIAN_3: [f32; 3] = [0.25, 0.5, 0.25];
const SMALL_GAUSSIAN_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const SMALL_GAUSSIAN_7: [f32; 7] = [0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125];

/// Derive the sigma of a gaussian kernel from its size.
///
/// `sigma = 0.3 * ((kernel_size - 1) * 0.5 - 1) + 0.8`
pub fn sigma_from_kernel_size(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Create a gaussian blur kernel.
///
/// With `sigma <= 0` the sigma is derived from the kernel size; for sizes
/// 1, 3, 5 and 7 the usual binomial approximations are returned, e.g.
/// `[1, 4, 6, 4, 1] / 16` for size 5.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel, odd and positive.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelLength`] for even or zero sizes.
///
/// # Example
///
/// ```
/// use flagwave_imgproc::filter::kernels::gaussian_kernel_1d;
///
/// let kernel = gaussian_kernel_1d(5, 0.0).unwrap();
/// assert_eq!(kernel, vec![0.0625, 0.25, 0.375, 0.25, 0.0625]);
/// ```
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Result<Vec<f32>, ImageError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelLength(kernel_size));
    }

    if sigma <= 0.0 {
        let table: Option<&[f32]> = match kernel_size {
            1 => Some(&SMALL_GAUSSIAN_1),
            3 => Some(&SMALL_GAUSSIAN_3),
            5 => Some(&SMALL_GAUSSIAN_5),
            7 => Some(&SMALL_GAUSSIAN_7),
            _ => None,
        };
        if let Some(table) = table {
            return Ok(table.to_vec());
        }
    }

    let sigma = if sigma > 0.0 {
        sigma
    } else {
        sigma_from_kernel_size(kernel_size)
    };

    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    Ok(kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_kernel_1d() -> Result<(), ImageError> {
        let kernel = gaussian_kernel_1d(5, 0.5)?;

        let expected = [
            0.00026386508,
            0.10645077,
            0.78657067,
            0.10645077,
            0.00026386508,
        ];

        for (&k, &e) in kernel.iter().zip(expected.iter()) {
            approx::assert_relative_eq!(k, e, max_relative = 1e-5);
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_default_sigma() -> Result<(), ImageError> {
        assert_eq!(gaussian_kernel_1d(5, 0.0)?, SMALL_GAUSSIAN_5.to_vec());

        let kernel = gaussian_kernel_1d(9, 0.0)?;
        approx::assert_abs_diff_eq!(kernel.iter().sum::<f32>(), 1.0, epsilon = 1e-6);
        assert!(kernel[4] > kernel[3] && kernel[3] > kernel[0]);
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_even_size() {
        assert_eq!(
            gaussian_kernel_1d(4, 1.0),
            Err(ImageError::InvalidKernelLength(4))
        );
    }
}
