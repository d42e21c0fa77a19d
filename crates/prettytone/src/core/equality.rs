use super::ColorSpace;
use crate::core::{convert, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, clamping lightness and chroma of
/// the Oklab variations, scaling the hue of Oklch/Oklrch, reducing resolution,
/// and dropping the sign of negative zeros before comparing the resulting bit
/// strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

/// Test macro for asserting that two coordinate arrays are within the given
/// tolerance of each other, coordinate by coordinate.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance.
#[cfg(test)]
macro_rules! assert_within {
    ($cs1:expr , $cs2:expr , $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance) = ($cs1, $cs2, $tolerance);
        for index in 0..3 {
            assert!(
                (cs1[index] - cs2[index]).abs() <= tolerance,
                "coordinate {} differs by more than {}:\n{:?}\n{:?}",
                index,
                tolerance,
                cs1,
                cs2
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_within;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function ensures that coordinates are well-formed. In particular, it
/// replaces not-a-number coordinates with zero. For the Oklab variations, it
/// also ensures that (revised) lightness is in `0..=1` and chroma is in `0..`.
/// For semantic consistency, if the hue in Oklch/Oklrch is not-a-number, it
/// also replaces chroma with zero.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [mut c1, mut c2, mut c3] = *coordinates;

    if c1.is_nan() {
        c1 = 0.0;
    }
    if c2.is_nan() {
        c2 = 0.0;
    }
    if c3.is_nan() {
        c3 = 0.0;
        if space.is_polar() {
            c2 = 0.0;
        }
    }

    if space.is_ok() {
        c1 = c1.clamp(0.0, 1.0);
        if space.is_polar() {
            c2 = c2.max(0.0);
        }
    }

    [c1, c2, c3]
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let [mut c1, mut c2, mut c3] = normalize(space, coordinates);

    // Normalize rotation and scale to unit range.
    if space.is_polar() {
        c3 = c3.rem_euclid(360.0) / 360.0
    }

    let factor = <Float as FloatExt>::ROUNDING_FACTOR;
    c1 = (c1 * factor).round();
    c2 = (c2 * factor).round();
    c3 = (c3 * factor).round();

    if c1 == -0.0 {
        c1 = 0.0;
    }
    if c2 == -0.0 {
        c2 = 0.0
    }
    if c3 == -0.0 {
        c3 = 0.0
    }

    [c1.to_bits(), c2.to_bits(), c3.to_bits()]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    let mut f = if f.is_nan() { 0.0 } else { f };

    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the color is achromatic or gray-ish.
///
/// This function determines whether hue is not-a-number or chroma is smaller
/// than or equal to the given threshold in Oklch/Oklrch, converting the
/// coordinates if necessary.
pub(crate) fn is_achromatic(space: ColorSpace, coordinates: &[Float; 3], threshold: Float) -> bool {
    let [_, chroma, hue] = match space {
        ColorSpace::Oklch | ColorSpace::Oklrch => *coordinates,
        ColorSpace::Oklrab => convert(space, ColorSpace::Oklrch, coordinates),
        _ => convert(space, ColorSpace::Oklch, coordinates),
    };

    hue.is_nan() || chroma <= threshold
}
