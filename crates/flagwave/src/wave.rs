use std::f64::consts::PI;

use flagwave_image::{Image, ImageSize};
use flagwave_imgproc::{
    interpolation::{remap, InterpolationMode},
    padding::PaddingMode,
};

use crate::{error::FlagWaveError, pipeline::validate_input};

/// Parameters of the sinusoidal waving field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Peak horizontal displacement in pixels.
    pub amplitude: f64,
    /// Number of cycles across the full height (or width).
    pub frequency: f64,
    /// Phase offset in radians.
    pub phase: f64,
    /// Scale of the vertical displacement relative to `amplitude`.
    pub vertical_damping: f64,
}

impl WaveParams {
    /// Check that every parameter is a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`FlagWaveError::InvalidParameter`] naming the first
    /// non-finite field.
    pub fn validate(&self) -> Result<(), FlagWaveError> {
        let fields = [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("phase", self.phase),
            ("vertical_damping", self.vertical_damping),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(FlagWaveError::InvalidParameter {
                    name,
                    reason: format!("{value} is not finite"),
                });
            }
        }
        Ok(())
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 15.0,
            frequency: 2.0,
            phase: PI / 3.0,
            vertical_damping: 0.2,
        }
    }
}

/// A displacement field simulating a cloth waving from top to bottom.
///
/// For a destination pixel `(x, y)` of an `H x W` raster:
///
/// ```text
/// offset_x = A * sin(2π * y / H * f + φ)
/// offset_y = d * A * sin(2π * x / W * f + φ)
/// ```
///
/// The horizontal offset only depends on the row and the vertical offset only
/// on the column, so the field is stored as one value per row and one value
/// per column.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementField {
    size: ImageSize,
    row_offsets: Vec<f64>,
    col_offsets: Vec<f64>,
}

impl DisplacementField {
    /// Compute the field for a raster of the given size.
    ///
    /// # Example
    ///
    /// ```
    /// use flagwave::wave::{DisplacementField, WaveParams};
    ///
    /// let field = DisplacementField::new([100, 100].into(), &WaveParams::default());
    ///
    /// // 15 * sin(π / 3) on the first row
    /// let offset = field.offset_x(0, 0).unwrap();
    /// assert!((offset - 12.990381).abs() < 1e-6);
    /// ```
    pub fn new(size: ImageSize, params: &WaveParams) -> Self {
        let wave = |i: usize, len: usize, amplitude: f64| {
            amplitude * (2.0 * PI * i as f64 / len as f64 * params.frequency + params.phase).sin()
        };

        let row_offsets = (0..size.height)
            .map(|y| wave(y, size.height, params.amplitude))
            .collect();

        let col_offsets = (0..size.width)
            .map(|x| wave(x, size.width, params.vertical_damping * params.amplitude))
            .collect();

        Self {
            size,
            row_offsets,
            col_offsets,
        }
    }

    /// The size of the raster the field covers.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The horizontal displacement at `(x, y)`, or `None` outside the field.
    pub fn offset_x(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.size.width {
            return None;
        }
        self.row_offsets.get(y).copied()
    }

    /// The vertical displacement at `(x, y)`, or `None` outside the field.
    pub fn offset_y(&self, x: usize, y: usize) -> Option<f64> {
        if y >= self.size.height {
            return None;
        }
        self.col_offsets.get(x).copied()
    }

    /// The horizontal displacement of every row.
    pub fn row_offsets(&self) -> &[f64] {
        &self.row_offsets
    }

    /// The vertical displacement of every column.
    pub fn col_offsets(&self) -> &[f64] {
        &self.col_offsets
    }

    /// Materialize the source coordinates `(x + offset_x, y + offset_y)`.
    ///
    /// The sums are taken in double precision and stored as `f32` maps
    /// ready for [`remap`].
    ///
    /// # Errors
    ///
    /// Returns [`FlagWaveError::InvalidParameter`] if a coordinate does not
    /// fit in an `f32`.
    pub fn source_grid(&self) -> Result<(Image<f32, 1>, Image<f32, 1>), FlagWaveError> {
        let to_f32 = |coord: f64| {
            let coord = coord as f32;
            if coord.is_finite() {
                Ok(coord)
            } else {
                Err(FlagWaveError::InvalidParameter {
                    name: "amplitude",
                    reason: format!("displaced coordinate {coord} overflows f32"),
                })
            }
        };

        let mut map_x = Vec::with_capacity(self.size.area());
        let mut map_y = Vec::with_capacity(self.size.area());

        for (y, dx) in self.row_offsets.iter().enumerate() {
            for (x, dy) in self.col_offsets.iter().enumerate() {
                map_x.push(to_f32(x as f64 + dx)?);
                map_y.push(to_f32(y as f64 + dy)?);
            }
        }

        Ok((Image::new(self.size, map_x)?, Image::new(self.size, map_y)?))
    }
}

/// Warp an image through the waving displacement field.
///
/// Every output pixel is a bilinear sample of `src` at its displaced
/// coordinate. Coordinates past the border are mirrored back into the image
/// with the edge pixel repeated (`fedcba|abcdef|fedcba`).
///
/// # Arguments
///
/// * `src` - The pattern, already resized to the flag.
/// * `params` - The wave parameters.
///
/// # Returns
///
/// The warped pattern, with the size of `src`.
pub fn warp_pattern(
    src: &Image<u8, 3>,
    params: &WaveParams,
) -> Result<Image<u8, 3>, FlagWaveError> {
    validate_input("pattern", src)?;
    params.validate()?;

    let field = DisplacementField::new(src.size(), params);
    let (map_x, map_y) = field.source_grid()?;

    let mut warped = Image::<u8, 3>::from_size_val(src.size(), 0)?;
    remap(
        src,
        &mut warped,
        &map_x,
        &map_y,
        InterpolationMode::Bilinear,
        PaddingMode::Reflect,
    )?;

    log::debug!("warped pattern {} with {:?}", src.size(), params);

    Ok(warped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn field_matches_closed_form() {
        let params = WaveParams::default();
        let field = DisplacementField::new([100, 50].into(), &params);

        assert_eq!(field.row_offsets().len(), 50);
        assert_eq!(field.col_offsets().len(), 100);

        let sqrt3_2 = 3f64.sqrt() / 2.0;

        let at = |offset: Option<f64>| offset.unwrap_or(f64::NAN);

        // y = 0: 15 * sin(π/3)
        assert_abs_diff_eq!(at(field.offset_x(7, 0)), 15.0 * sqrt3_2, epsilon = 1e-9);
        // y = H/4: 15 * sin(π + π/3)
        assert_abs_diff_eq!(at(field.offset_x(7, 25)) / 15.0, -sqrt3_2, epsilon = 1e-9);
        // x = 0: 3 * sin(π/3)
        assert_abs_diff_eq!(at(field.offset_y(0, 3)), 3.0 * sqrt3_2, epsilon = 1e-9);
        // horizontal offset does not depend on the column
        assert_eq!(field.offset_x(0, 11), field.offset_x(99, 11));
        assert_eq!(field.offset_y(42, 0), field.offset_y(42, 49));
    }

    #[test]
    fn offsets_outside_the_field_are_none() {
        let field = DisplacementField::new([100, 50].into(), &WaveParams::default());

        assert!(field.offset_x(99, 49).is_some());
        assert!(field.offset_y(99, 49).is_some());
        assert_eq!(field.offset_x(0, 50), None);
        assert_eq!(field.offset_x(100, 0), None);
        assert_eq!(field.offset_y(100, 0), None);
        assert_eq!(field.offset_y(0, 50), None);
        assert_eq!(field.offset_x(usize::MAX, usize::MAX), None);

        let empty = DisplacementField::new([0, 0].into(), &WaveParams::default());
        assert_eq!(empty.offset_x(0, 0), None);
        assert_eq!(empty.offset_y(0, 0), None);
    }

    #[test]
    fn field_amplitude_bounds() {
        let params = WaveParams::default();
        let field = DisplacementField::new([64, 64].into(), &params);

        assert!(field.row_offsets().iter().all(|v| v.abs() <= 15.0));
        assert!(field.col_offsets().iter().all(|v| v.abs() <= 3.0));
    }

    #[test]
    fn zero_amplitude_grid_is_identity() -> Result<(), FlagWaveError> {
        let params = WaveParams {
            amplitude: 0.0,
            ..Default::default()
        };
        let field = DisplacementField::new([4, 3].into(), &params);
        let (map_x, map_y) = field.source_grid()?;

        assert_eq!(
            map_x.as_slice(),
            &[0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0]
        );
        assert_eq!(
            map_y.as_slice(),
            &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]
        );
        Ok(())
    }

    #[test]
    fn warp_without_amplitude_is_identity() -> Result<(), FlagWaveError> {
        let params = WaveParams {
            amplitude: 0.0,
            ..Default::default()
        };
        let src = Image::<u8, 3>::new([5, 4].into(), (0..60).collect())?;

        let warped = warp_pattern(&src, &params)?;
        assert_eq!(warped, src);
        Ok(())
    }

    #[test]
    fn warp_solid_color_is_invariant() -> Result<(), FlagWaveError> {
        let src = Image::<u8, 3>::from_size_pixel([37, 23].into(), [10, 120, 250])?;

        let warped = warp_pattern(&src, &WaveParams::default())?;
        assert_eq!(warped, src);
        Ok(())
    }

    #[test]
    fn warp_shifts_rows_horizontally() -> Result<(), FlagWaveError> {
        // a pure horizontal shift of one pixel on every row
        let params = WaveParams {
            amplitude: 1.0,
            frequency: 0.0,
            phase: PI / 2.0,
            vertical_damping: 0.0,
        };
        let data = (0..3).flat_map(|_| [10u8, 20, 30, 40]).collect::<Vec<_>>();
        let src = Image::<u8, 1>::new([4, 3].into(), data)?;
        let rgb = Image::<u8, 3>::new(
            src.size(),
            src.as_slice().iter().flat_map(|&v| [v, v, v]).collect(),
        )?;

        let warped = warp_pattern(&rgb, &params)?;

        // the last column reflects back onto itself
        for row in warped.as_slice().chunks_exact(12) {
            assert_eq!(row, &[20, 20, 20, 30, 30, 30, 40, 40, 40, 40, 40, 40]);
        }
        Ok(())
    }

    #[test]
    fn huge_amplitude_keeps_solid_color() -> Result<(), FlagWaveError> {
        let src = Image::<u8, 3>::from_size_pixel([17, 11].into(), [10, 120, 250])?;

        for amplitude in [1e12, -1e12, 1e30] {
            let params = WaveParams {
                amplitude,
                ..Default::default()
            };
            let warped = warp_pattern(&src, &params)?;
            assert_eq!(warped, src, "amplitude {amplitude}");
        }
        Ok(())
    }

    #[test]
    fn non_finite_parameters_are_rejected() -> Result<(), FlagWaveError> {
        let src = Image::<u8, 3>::from_size_val([8, 8].into(), 3)?;
        let base = WaveParams::default();

        let cases = [
            ("amplitude", WaveParams { amplitude: f64::NAN, ..base }),
            ("amplitude", WaveParams { amplitude: f64::INFINITY, ..base }),
            ("frequency", WaveParams { frequency: f64::NEG_INFINITY, ..base }),
            ("phase", WaveParams { phase: f64::NAN, ..base }),
            ("vertical_damping", WaveParams { vertical_damping: f64::INFINITY, ..base }),
        ];

        for (field, params) in cases {
            assert!(matches!(
                warp_pattern(&src, &params),
                Err(FlagWaveError::InvalidParameter { name, .. }) if name == field
            ));
        }
        Ok(())
    }

    #[test]
    fn amplitude_past_f32_range_is_rejected() -> Result<(), FlagWaveError> {
        let src = Image::<u8, 3>::from_size_val([8, 8].into(), 3)?;
        let params = WaveParams {
            amplitude: 1e40,
            ..Default::default()
        };

        assert!(params.validate().is_ok());
        assert!(matches!(
            warp_pattern(&src, &params),
            Err(FlagWaveError::InvalidParameter {
                name: "amplitude",
                ..
            })
        ));
        Ok(())
    }
}
