/// Conversion of pixel values to and from the `f32` working type.
///
/// Kernels accumulate in `f32` and write back through [`FloatConversion::from_f32`],
/// which for integer types rounds to the nearest value and saturates.
pub trait FloatConversion: Copy {
    /// Convert the value to f32
    fn to_f32(&self) -> f32;
    /// Convert a f32 value back into the pixel type
    fn from_f32(val: f32) -> Self;
}

impl FloatConversion for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(val: f32) -> Self {
        val
    }
}

impl FloatConversion for u8 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(val: f32) -> Self {
        val.round().clamp(0.0, 255.0) as u8
    }
}
