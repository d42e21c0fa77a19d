#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::conversion::{oklab_to_linear_srgb, LMS_TO_LINEAR_SRGB};
use crate::{ColorSpace, Float};

/// Determine whether the coordinates are in gamut for their color space.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    if space.is_rgb() {
        coordinates.iter().all(|c| 0.0 <= *c && *c <= 1.0)
    } else {
        true
    }
}

/// Clip the coordinates to the gamut of their color space.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    if space.is_rgb() {
        let [r, g, b] = coordinates;
        [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
    } else {
        *coordinates
    }
}

// ====================================================================================================================

/// The choice of gamut-mapping strategy.
///
/// All strategies keep the hue and move an out-of-gamut color along a straight
/// line in Oklab towards some gray anchor point with lightness L₀ until it
/// enters the sRGB gamut. They differ in how they pick L₀, following [Björn
/// Ottosson's gamut clipping](https://bottosson.github.io/posts/gamutclipping/):
///
///   * `PreserveLightness` projects towards the gray with the same lightness,
///     giving up chroma only.
///   * `ProjectToMid` projects towards L₀ = 0.5.
///   * `ProjectToLcusp` projects towards the lightness of the hue's cusp, i.e.,
///     the most chromatic in-gamut color of that hue.
///   * `AdaptiveTowardsMid` and `AdaptiveTowardsLcusp` blend between the
///     former and the latter two, with the blend controlled by the parameter
///     alpha. Larger alphas favor preserving chroma over lightness.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettytone.color")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipMethod {
    #[default]
    PreserveLightness,
    ProjectToMid,
    ProjectToLcusp,
    AdaptiveTowardsMid,
    AdaptiveTowardsLcusp,
}

/// The default alpha for the adaptive clip methods.
pub const DEFAULT_CLIP_ALPHA: Float = 5.0;

/// The tolerance for the projection parameter, which ranges `0..=1`.
const SEARCH_TOLERANCE: Float = 1e-9;

/// The maximum number of bisection steps.
const SEARCH_BUDGET: usize = 64;

/// Chroma below which a color is treated as gray.
const CHROMA_EPSILON: Float = 1e-10;

/// Compute the maximum saturation S = C/L for the hue with normalized a, b.
///
/// The maximum is reached when one of the linear sRGB channels drops to zero.
/// A polynomial approximates the saturation, with one step of Halley's method
/// refining the result.
#[allow(clippy::excessive_precision)]
fn compute_max_saturation(a: Float, b: Float) -> Float {
    // Pick coefficients for whichever channel goes below zero first.
    let ([k0, k1, k2, k3, k4], [wl, wm, ws]) = if (-1.88170328 as Float).mul_add(a, -0.80936493 * b)
        > 1.0
    {
        (
            [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
            LMS_TO_LINEAR_SRGB[0],
        )
    } else if (1.81444104 as Float).mul_add(a, -1.19445276 * b) > 1.0 {
        (
            [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
            LMS_TO_LINEAR_SRGB[1],
        )
    } else {
        (
            [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
            LMS_TO_LINEAR_SRGB[2],
        )
    };

    let mut saturation = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    let k_l = 0.3963377774 * a + 0.2158037573 * b;
    let k_m = -0.1055613458 * a - 0.0638541728 * b;
    let k_s = -0.0894841775 * a - 1.2914855480 * b;

    let l_ = saturation.mul_add(k_l, 1.0);
    let m_ = saturation.mul_add(k_m, 1.0);
    let s_ = saturation.mul_add(k_s, 1.0);

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let l_ds = 3.0 * k_l * l_ * l_;
    let m_ds = 3.0 * k_m * m_ * m_;
    let s_ds = 3.0 * k_s * s_ * s_;

    let l_ds2 = 6.0 * k_l * k_l * l_;
    let m_ds2 = 6.0 * k_m * k_m * m_;
    let s_ds2 = 6.0 * k_s * k_s * s_;

    let f = wl * l + wm * m + ws * s;
    let f1 = wl * l_ds + wm * m_ds + ws * s_ds;
    let f2 = wl * l_ds2 + wm * m_ds2 + ws * s_ds2;

    saturation -= f * f1 / (f1 * f1 - 0.5 * f * f2);
    saturation
}

/// Find the lightness and chroma of the cusp for the hue with normalized a, b.
fn find_cusp(a: Float, b: Float) -> (Float, Float) {
    let saturation = compute_max_saturation(a, b);

    // Scale up until one channel reaches one.
    let [r, g, b] = oklab_to_linear_srgb(&[1.0, saturation * a, saturation * b]);
    let lightness = (1.0 / r.max(g).max(b)).cbrt();
    (lightness, lightness * saturation)
}

/// Determine the lightness of the gray that anchors the projection.
#[allow(non_snake_case)]
fn anchor_lightness(
    method: ClipMethod,
    lightness: Float,
    chroma: Float,
    hue: (Float, Float),
    alpha: Float,
) -> Float {
    use ClipMethod::*;

    let L0 = match method {
        PreserveLightness => lightness,
        ProjectToMid => 0.5,
        ProjectToLcusp => find_cusp(hue.0, hue.1).0,
        AdaptiveTowardsMid => {
            let Ld = lightness - 0.5;
            let e1 = 0.5 + Ld.abs() + alpha * chroma;
            0.5 * (1.0 + Ld.signum() * (e1 - e1.mul_add(e1, -2.0 * Ld.abs()).max(0.0).sqrt()))
        }
        AdaptiveTowardsLcusp => {
            let (cusp_L, _) = find_cusp(hue.0, hue.1);
            let Ld = lightness - cusp_L;
            let k = 2.0 * if 0.0 < Ld { 1.0 - cusp_L } else { cusp_L };
            if k <= 0.0 {
                cusp_L
            } else {
                let e1 = 0.5 * k + Ld.abs() + alpha * chroma / k;
                cusp_L
                    + 0.5
                        * Ld.signum()
                        * (e1 - e1.mul_add(e1, -2.0 * k * Ld.abs()).max(0.0).sqrt())
            }
        }
    };

    L0.clamp(0.0, 1.0)
}

/// Map the Oklab coordinates into the linear sRGB gamut.
///
/// This function returns linear sRGB coordinates. Colors that already are in
/// gamut are converted without further adjustment. Otherwise, this function
/// bisects the line between the method's gray anchor (L₀, 0, 0) and the
/// original color for the in-gamut point closest to the original. The search
/// stops once the step is within a tolerance of 1e-9 or after 64 steps, and
/// the lower bound of the search always is in gamut. Hence this function
/// never fails, though it clamps the final coordinates to absorb any residual
/// floating point error.
#[allow(non_snake_case)]
pub(crate) fn clip_to_linear_srgb(
    coordinates: &[Float; 3],
    method: ClipMethod,
    alpha: Float,
) -> [Float; 3] {
    let [L, a, b] = *coordinates;

    let chroma = a.hypot(b);
    if chroma < CHROMA_EPSILON {
        let gray = L.clamp(0.0, 1.0);
        let gray = gray * gray * gray;
        return [gray, gray, gray];
    }

    let linear = oklab_to_linear_srgb(coordinates);
    if in_gamut(ColorSpace::LinearSrgb, &linear) {
        return linear;
    }

    let L0 = anchor_lightness(method, L, chroma, (a / chroma, b / chroma), alpha);
    let at = |t: Float| oklab_to_linear_srgb(&[t.mul_add(L - L0, L0), t * a, t * b]);

    let mut low = 0.0;
    let mut high = 1.0;
    let mut steps = 0;
    while SEARCH_TOLERANCE < high - low && steps < SEARCH_BUDGET {
        let t = (low + high) / 2.0;
        if in_gamut(ColorSpace::LinearSrgb, &at(t)) {
            low = t;
        } else {
            high = t;
        }
        steps += 1;
    }

    #[cfg(feature = "tracing")]
    {
        if SEARCH_TOLERANCE < high - low {
            tracing::debug!(steps, low, high, "gamut search exhausted its budget");
        }
    }

    if low == 0.0 {
        let gray = L0 * L0 * L0;
        return [gray, gray, gray];
    }

    clip(ColorSpace::LinearSrgb, &at(low))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::convert;
    use crate::ColorSpace::*;

    const METHODS: [ClipMethod; 5] = [
        ClipMethod::PreserveLightness,
        ClipMethod::ProjectToMid,
        ClipMethod::ProjectToLcusp,
        ClipMethod::AdaptiveTowardsMid,
        ClipMethod::AdaptiveTowardsLcusp,
    ];

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(Srgb, &[0.0, 0.5, 1.0]));
        assert!(!in_gamut(LinearSrgb, &[0.0, 0.5, 1.0001]));
        assert!(in_gamut(Oklab, &[2.0, 1.0, -1.0]));
        assert_eq!(clip(Srgb, &[-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_cusp() {
        // The cusp of pure blue is blue itself.
        let blue = convert(LinearSrgb, Oklch, &[0.0, 0.0, 1.0]);
        let (sin, cos) = blue[2].to_radians().sin_cos();
        let (lightness, chroma) = find_cusp(cos, sin);
        assert!(
            (lightness - blue[0]).abs() < 1e-3,
            "cusp lightness {} should match blue's {}",
            lightness,
            blue[0]
        );
        assert!(
            (chroma - blue[1]).abs() < 1e-3,
            "cusp chroma {} should match blue's {}",
            chroma,
            blue[1]
        );
    }

    #[test]
    fn test_in_gamut_unchanged() {
        let oklab = convert(Srgb, Oklab, &[0.3, 0.6, 0.2]);
        let expected = convert(Oklab, LinearSrgb, &oklab);
        for method in METHODS {
            assert_eq!(clip_to_linear_srgb(&oklab, method, DEFAULT_CLIP_ALPHA), expected);
        }
    }

    #[test]
    fn test_gray() {
        assert_eq!(
            clip_to_linear_srgb(&[0.5, 0.0, 0.0], ClipMethod::AdaptiveTowardsLcusp, 5.0),
            [0.125, 0.125, 0.125]
        );
        assert_eq!(
            clip_to_linear_srgb(&[1.3, 0.0, 0.0], ClipMethod::PreserveLightness, 5.0),
            [1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_out_of_gamut() {
        let colors: [[Float; 3]; 6] = [
            [0.9, 0.3, 0.0],
            [0.2, -0.2, 0.3],
            [0.5, 0.0, -0.4],
            [0.98, 0.13, 0.0],
            [0.05, 0.1, 0.1],
            [0.7, -0.3, -0.3],
        ];

        for oklab in colors.iter() {
            let [l, a, b] = *oklab;
            let chroma = a.hypot(b);
            let hue = b.atan2(a);

            for method in METHODS {
                let linear = clip_to_linear_srgb(oklab, method, DEFAULT_CLIP_ALPHA);
                assert!(
                    in_gamut(LinearSrgb, &linear),
                    "{:?} for {:?} should be in gamut but is {:?}",
                    method,
                    oklab,
                    linear
                );

                let [l2, a2, b2] = convert(LinearSrgb, Oklab, &linear);
                let chroma2 = a2.hypot(b2);
                assert!(
                    chroma2 <= chroma + 1e-6,
                    "{:?} for {:?} should not increase chroma",
                    method,
                    oklab
                );
                if 1e-3 < chroma2 {
                    let delta = (b2.atan2(a2) - hue).abs();
                    assert!(
                        delta < 1e-3,
                        "{:?} for {:?} should preserve hue",
                        method,
                        oklab
                    );
                }
                if method == ClipMethod::PreserveLightness {
                    assert!(
                        (l2 - l).abs() < 1e-6,
                        "{:?} for {:?} should preserve lightness",
                        method,
                        oklab
                    );
                }
            }
        }
    }
}
