#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of supported color spaces.
///
/// # sRGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) is the display color space for
/// all generated color schemes. It comes in a gamma-corrected and a linear
/// form. For both, in-gamut coordinates range from 0 to 1, inclusive. Only
/// the gamma-corrected form is suitable for quantization to 8-bit channels.
///
/// # The Oklab Variations
///
/// This crate supports the
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) and
/// [Oklrab/Oklrch](https://bottosson.github.io/posts/colorpicker/#intermission---a-new-lightness-estimate-for-oklab)
/// color spaces. All four are variations of the same perceptually uniform color
/// space, which uses one coordinate for lightness and two coordinates for
/// "colorness." Oklrab and Oklrch feature a revised lightness Lr that corrects
/// the original lightness' bias towards dark tones.
///
/// | Color space | Lightness | Colorness 1 | Colorness 2 |
/// | ----------- | :-------: | :---------: | :---------: |
/// | Oklab       | L         | a           | b           |
/// | Oklch       | L         | C           | hº          |
/// | Oklrab      | Lr        | a           | b           |
/// | Oklrch      | Lr        | C           | hº          |
///
/// Valid coordinates observe the following invariants:
///
///   * The (revised) lightness for all four color spaces is limited to `0..=1`.
///   * The a/b coordinates for Oklab/Oklrab have no set limits, but in practice
///     can be bounded `-0.4..=0.4`.
///   * The chroma for Oklch/Oklrch must be non-negative and in practice can be
///     bounded `0..=0.4`.
///   * The hue for Oklch/Oklrch may be not-a-number, which indicates a
///     powerless component, i.e., gray tone. In that case, the chroma must
///     necessarily be zero.
///
/// Color schemes are derived in the polar spaces, since they keep lightness,
/// chroma, and hue apart. Gamut mapping happens in Oklab.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettytone.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Oklab,
    Oklch,
    Oklrab,
    Oklrch,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// Oklch and Oklrch currently are the only polar color spaces.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Oklch | Self::Oklrch)
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is one of the Oklab variations.
    pub const fn is_ok(&self) -> bool {
        use ColorSpace::*;
        matches!(*self, Oklab | Oklch | Oklrab | Oklrch)
    }

    /// Determine whether this color space uses the revised lightness Lr.
    pub const fn is_revised(&self) -> bool {
        matches!(*self, Self::Oklrab | Self::Oklrch)
    }

    /// Determine whether this color space is bounded.
    ///
    /// The Oklab variations are *unbounded* and hence can model any color. By
    /// contrast, RGB color spaces are *bounded*, with coordinates of in-gamut
    /// colors ranging `0..=1`.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb()
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Oklab => "Oklab",
            Oklrab => "Oklrab",
            Oklch => "Oklch",
            Oklrch => "Oklrch",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::ColorSpace::*;

    #[test]
    fn test_classification() {
        assert!(Oklch.is_polar() && Oklrch.is_polar());
        assert!(!Oklab.is_polar() && !Srgb.is_polar());
        assert!(Srgb.is_bounded() && LinearSrgb.is_bounded());
        assert!(!Oklab.is_bounded());
        assert!(Oklrab.is_revised() && !Oklch.is_revised());
        assert_eq!(LinearSrgb.to_string(), "linear sRGB");
    }
}
