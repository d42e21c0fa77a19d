/// An extension trait for floating point numbers.
///
/// The trait pre-computes the rounding factor for equality comparisons, which
/// depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. The factor is a power of ten and hence directly translates into
    /// significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}
