use super::{normalize, ColorSpace};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function converts the coordinates to sRGB first. It assumes that the
/// resulting color is in gamut, i.e., that its coordinates range `0..=1`. Even
/// if that is not the case, the conversion clamps coordinates to the range
/// `0x00..=0xff`. Coordinates are rounded, not truncated, since truncation
/// would systematically darken colors.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = convert(space, ColorSpace::Srgb, coordinates);
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

/// Convert the given packed ARGB color to floating point sRGB coordinates.
///
/// The alpha channel in the most significant byte is ignored.
#[inline]
pub(crate) fn from_packed(argb: u32) -> [Float; 3] {
    from_24bit((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
}

/// Convert the color coordinates to a packed, fully opaque ARGB color.
pub(crate) fn to_packed(space: ColorSpace, coordinates: &[Float; 3]) -> u32 {
    let [r, g, b] = to_24bit(space, coordinates);
    0xff00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/#converting-from-linear-srgb-to-oklab

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: [[Float; 3]; 3] = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const OKLAB_TO_LMS: [[Float; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

/// Convert coordinates for linear sRGB to Oklab. This is a one-hop, direct
/// conversion.
pub(crate) fn linear_srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_LMS, value);
    multiply(&LMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert coordinates for Oklab to linear sRGB. This is a one-hop, direct
/// conversion.
pub(crate) fn oklab_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_LMS, value);
    multiply(&LMS_TO_LINEAR_SRGB, &[l * l * l, m * m * m, s * s * s])
}

// --------------------------------------------------------------------------------------------------------------------

mod oklab {
    use crate::Float;

    /// Convert coordinates for Oklch to Oklab or for Oklrch to Oklrab. This is a
    /// one-hop, direct conversion.
    #[allow(non_snake_case)]
    pub(crate) fn okxch_to_okxab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;

        if h.is_nan() {
            [L, 0.0, 0.0]
        } else {
            let (sin, cos) = h.to_radians().sin_cos();
            [L, C * cos, C * sin]
        }
    }

    /// The magnitude below which both a and b count as zero.
    ///
    /// It is small enough to preserve round-trips through the polar form and
    /// large enough to absorb the residue of converting an exact gray.
    pub(crate) const EPSILON: Float = 1e-7;

    /// Convert coordinates for Oklab to Oklch or for Oklrab to Oklrch. This is a
    /// one-hop, direct conversion.
    ///
    /// Hues are normalized into `0..360`. Achromatic colors have zero chroma
    /// and a not-a-number hue.
    #[allow(non_snake_case)]
    pub(crate) fn okxab_to_okxch(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let a_m = a.abs();
        if a_m < EPSILON && b.abs() < EPSILON {
            return [L, 0.0, Float::NAN];
        }

        let C = a.hypot(b);

        let h = b.atan2(a).to_degrees();
        let h = if h.is_sign_negative() { h + 360.0 } else { h };

        // -0.0 and tiny negative angles round up to a full rotation
        let h = if 360.0 <= h { 0.0 } else { h };

        [L, C, h]
    }

    const K1: Float = 0.206;
    const K2: Float = 0.03;
    const K3: Float = (1.0 + K1) / (1.0 + K2);

    /// Convert coordinates for Oklab to Oklrab or for Oklch to Oklrch. This
    /// function replaces the lightness L with the [improved lightness
    /// Lr](https://bottosson.github.io/posts/colorpicker/#intermission---a-new-lightness-estimate-for-oklab).
    /// This is a one-hop, direct conversion.
    pub(crate) fn oklxx_to_oklrxx(value: &[Float; 3]) -> [Float; 3] {
        let [l, a, b] = *value;
        let k3lk1 = K3.mul_add(l, -K1);
        [
            0.5 * (k3lk1 + k3lk1.mul_add(k3lk1, 4.0 * K2 * K3 * l).sqrt()),
            a,
            b,
        ]
    }

    /// Convert coordinates for Oklrab to Oklab or for Oklrch to Oklch. This
    /// function replaces the revised lightness Lr with the original lightness
    /// L. This is a one-hop, direct conversion.
    pub(crate) fn oklrxx_to_oklxx(value: &[Float; 3]) -> [Float; 3] {
        let [lr, a, b] = *value;
        [(lr * (lr + K1)) / (K3 * (lr + K2)), a, b]
    }
}

pub(crate) use oklab::{okxab_to_okxch, okxch_to_okxab, EPSILON as ACHROMATIC_EPSILON};
use oklab::{oklrxx_to_oklxx, oklxx_to_oklrxx};

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from the color space to Oklab, the root of the
/// conversion tree.
fn to_oklab(from_space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match from_space {
        Srgb => linear_srgb_to_oklab(&rgb_to_linear_rgb(coordinates)),
        LinearSrgb => linear_srgb_to_oklab(coordinates),
        Oklab => *coordinates,
        Oklch => okxch_to_okxab(coordinates),
        Oklrab => oklrxx_to_oklxx(coordinates),
        Oklrch => oklrxx_to_oklxx(&okxch_to_okxab(coordinates)),
    }
}

/// Convert the Oklab coordinates to the color space.
fn from_oklab(to_space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    match to_space {
        Srgb => linear_rgb_to_rgb(&oklab_to_linear_srgb(coordinates)),
        LinearSrgb => oklab_to_linear_srgb(coordinates),
        Oklab => *coordinates,
        Oklch => okxab_to_okxch(coordinates),
        Oklrab => oklxx_to_oklrxx(coordinates),
        Oklrch => okxab_to_okxch(&oklxx_to_oklrxx(coordinates)),
    }
}

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to to the targeted color space, which may be the same as the original
/// color space. This function does not check whether the result is in gamut for
/// the targeted color space.
///
/// Single-hop conversions form a tree rooted in Oklab, with sRGB behind linear
/// sRGB on one branch and the polar and revised variations on the others.
/// Conversions within a branch are handled directly; all others go through
/// the root.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root Oklab
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return rgb_to_linear_rgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_rgb_to_rgb(&coordinates),
        (Oklrch, Oklrab) => return okxch_to_okxab(&coordinates),
        (Oklrab, Oklrch) => return okxab_to_okxch(&coordinates),
        (Oklch, Oklrch) => return oklxx_to_oklrxx(&coordinates),
        (Oklrch, Oklch) => return oklrxx_to_oklxx(&coordinates),
        _ => (),
    };

    // 3. Go through root Oklab
    from_oklab(to_space, &to_oklab(from_space, &coordinates))
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_within, ColorSpace::*};
    use crate::Float;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    struct Representations {
        srgb: [Float; 3],
        linear_srgb: [Float; 3],
        oklab: [Float; 3],
        oklch: [Float; 3],
    }

    const BLACK: Representations = Representations {
        // #000000
        srgb: [0.0, 0.0, 0.0],
        linear_srgb: [0.0, 0.0, 0.0],
        oklab: [0.0, 0.0, 0.0],
        oklch: [0.0, 0.0, Float::NAN],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        srgb: [1.0, 1.0, 1.0],
        linear_srgb: [1.0, 1.0, 1.0],
        oklab: [0.9999999934735462, 8.095285553011422e-11, 3.727390762708893e-8],
        oklch: [0.9999999934735462, 0.0, Float::NAN],
    };

    const INDIGO: Representations = Representations {
        // #3f51b5
        srgb: [0.24705882352941178, 0.3176470588235294, 0.7098039215686275],
        linear_srgb: [0.04970656598412723, 0.0822827071298148, 0.4620769996544071],
        oklab: [0.4782015742568181, 0.0038901194591769994, -0.1588766228280411],
        oklch: [0.4782015742568181, 0.15892424078991316, 271.40261604767477],
    };

    #[test]
    fn test_conversions() {
        for &color in [&BLACK, &WHITE, &INDIGO].iter() {
            let linear_srgb = rgb_to_linear_rgb(&color.srgb);
            assert_within!(&linear_srgb, &color.linear_srgb, 1e-12);

            let srgb = linear_rgb_to_rgb(&linear_srgb);
            assert_within!(&srgb, &color.srgb, 1e-12);

            let oklab = linear_srgb_to_oklab(&linear_srgb);
            assert_within!(&oklab, &color.oklab, 1e-9);

            let oklch = okxab_to_okxch(&oklab);
            assert_eq!(oklch[2].is_nan(), color.oklch[2].is_nan());
            assert_within!(
                &normalize(Oklch, &oklch),
                &normalize(Oklch, &color.oklch),
                1e-9
            );

            let also_oklab = okxch_to_okxab(&oklch);
            assert_within!(&also_oklab, &oklab, 1e-7);

            let also_linear_srgb = oklab_to_linear_srgb(&oklab);
            assert_within!(&also_linear_srgb, &linear_srgb, 1e-6);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x3f51b5);

        for _ in 0..1000 {
            let linear = [
                rng.random::<Float>(),
                rng.random::<Float>(),
                rng.random::<Float>(),
            ];

            let oklab = linear_srgb_to_oklab(&linear);
            assert_within!(&oklab_to_linear_srgb(&oklab), &linear, 1e-6);

            let oklch = convert(LinearSrgb, Oklch, &linear);
            assert_within!(&convert(Oklch, LinearSrgb, &oklch), &linear, 1e-6);

            let srgb = convert(LinearSrgb, Srgb, &linear);
            assert_within!(&convert(Srgb, LinearSrgb, &srgb), &linear, 1e-9);
        }
    }

    #[test]
    fn test_hue_normalization() {
        // atan2 yields (-180, 0) for negative b
        for (a, b) in [(0.1, -0.1), (-0.1, -0.1), (0.0, -0.2), (-0.3, -1e-6)] {
            let [_, c, h] = okxab_to_okxch(&[0.5, a, b]);
            assert!(0.0 < c, "chroma of ({}, {}) should be positive", a, b);
            assert!(
                (0.0..360.0).contains(&h),
                "hue {} of ({}, {}) should be in 0..360",
                h,
                a,
                b
            );
        }

        let [_, _, h] = okxab_to_okxch(&[0.5, 0.1, -0.1]);
        assert!((h - 315.0).abs() < 1e-12, "hue should be 315 but is {}", h);
    }

    #[test]
    fn test_achromatic() {
        for level in [0.0, 0.1, 0.5, 0.73, 1.0] {
            let [l, c, h] = convert(Srgb, Oklch, &[level, level, level]);
            assert!(h.is_nan(), "hue of gray {} should be not-a-number", level);
            assert_eq!(c, 0.0);
            assert!((0.0..=1.0).contains(&l));
        }
    }

    #[test]
    fn test_oklrxx() {
        let oklab = [0.6, 0.1, -0.05];
        let oklrab = convert(Oklab, Oklrab, &oklab);
        assert!(oklrab[0] < oklab[0], "revised lightness should be smaller");
        assert_within!(&convert(Oklrab, Oklab, &oklrab), &oklab, 1e-12);

        let oklrch = convert(Srgb, Oklrch, &INDIGO.srgb);
        assert_within!(&convert(Oklrch, Srgb, &oklrch), &INDIGO.srgb, 1e-6);
        assert_within!(
            &convert(Oklrch, Oklch, &oklrch),
            &convert(Srgb, Oklch, &INDIGO.srgb),
            1e-9
        );
    }

    #[test]
    fn test_packed() {
        assert_eq!(to_packed(Srgb, &from_packed(0xff3f51b5)), 0xff3f51b5);
        assert_eq!(from_packed(0x00ffffff), [1.0, 1.0, 1.0]);
        assert_eq!(to_packed(Srgb, &[1.2, -0.1, 0.5]), 0xffff0080);
        // 0.5 * 255 = 127.5 rounds up
        assert_eq!(to_24bit(Srgb, &[0.5, 0.5, 0.5]), [128, 128, 128]);
        assert_eq!(to_24bit(LinearSrgb, &[1.0, 0.0, 0.0]), [255, 0, 0]);
    }
}
