use super::{ColorScheme, Role, Swatch, Tone};
use crate::{ClipMethod, Color, Float, OkVersion};

/// A perceptual model for generating color schemes.
///
/// A palette model supplies the target colors, whose lightness and chroma
/// become the generated scheme's lightness and chroma, and the reference
/// colors, whose chroma normalizes the seed's chroma. It also determines the
/// polar color space those colors are expressed in and how colors are mapped
/// onto the display.
///
/// The dynamic transform only ever talks to this trait. Hence, alternative
/// lightness models plug in without changing how schemes are generated.
pub trait PaletteModel {
    /// Get the target colors in the model's polar color space.
    fn targets(&self) -> &ColorScheme;

    /// Get the reference colors in the model's polar color space.
    ///
    /// By default, the reference colors are the target colors.
    fn reference(&self) -> &ColorScheme {
        self.targets()
    }

    /// Convert the color to the model's polar color space.
    fn to_lch(&self, color: &Color) -> Color;

    /// Map the color in the model's polar color space to a displayable sRGB
    /// color.
    fn to_display(&self, lch: &Color, method: ClipMethod, alpha: Float) -> Color {
        lch.clip_to_srgb(method, alpha)
    }
}

/// The lightness ladder of the default Material You swatches, from light to
/// dark.
const LIGHTNESS: [Float; Tone::COUNT] = [
    1.0,
    0.9880873963836093,
    0.9551400440214246,
    0.9127904082618294,
    0.8265622041716898,
    0.7412252673769428,
    0.653350946076347,
    0.5624050605208273,
    0.48193149058901036,
    0.39417829080418526,
    0.3091856317280812,
    0.22212874192541768,
    0.0,
];

const ACCENT1_CHROMA: Float = 0.1328123146401862;
const ACCENT2_CHROMA: Float = ACCENT1_CHROMA / 3.0;
const ACCENT3_CHROMA: Float = ACCENT2_CHROMA * 2.0;
const NEUTRAL1_CHROMA: Float = ACCENT1_CHROMA / 12.0;
const NEUTRAL2_CHROMA: Float = NEUTRAL1_CHROMA * 2.0;

/// Get the chroma of the default Material You swatch for the role.
const fn chroma(role: Role) -> Float {
    match role {
        Role::Accent1 => ACCENT1_CHROMA,
        Role::Accent2 => ACCENT2_CHROMA,
        Role::Accent3 => ACCENT3_CHROMA,
        Role::Neutral1 => NEUTRAL1_CHROMA,
        Role::Neutral2 => NEUTRAL2_CHROMA,
    }
}

/// The default Material You targets.
///
/// Each role has constant chroma across all tonal stops, while all roles share
/// the same lightness ladder. Target hues are zero and irrelevant, since
/// generated colors always take the seed's hue. The reference colors are the
/// targets.
///
/// With [`OkVersion::Original`], targets are Oklch colors. With
/// [`OkVersion::Revised`], they are Oklrch colors, i.e., the lightness ladder
/// is interpreted as revised lightness Lr.
///
/// ```
/// # use prettytone::scheme::{MaterialYouTargets, PaletteModel, Role, Tone};
/// # use prettytone::{ColorSpace, OkVersion};
/// let model = MaterialYouTargets::new(OkVersion::Original, 1.0);
/// let target = &model.targets()[Role::Accent1][Tone::T700];
/// assert_eq!(target.space(), ColorSpace::Oklch);
/// assert!((target[0] - 0.39417829080418526).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialYouTargets {
    version: OkVersion,
    targets: ColorScheme,
}

impl MaterialYouTargets {
    /// Create new targets with the given Oklab version and chroma factor.
    pub fn new(version: OkVersion, chroma_factor: Float) -> Self {
        let space = version.polar_space();
        let targets = ColorScheme::from_fn(|role| {
            let chroma = chroma(role) * chroma_factor;
            Swatch::from_fn(|tone| Color::new(space, [LIGHTNESS[tone.index()], chroma, 0.0]))
        });

        Self { version, targets }
    }

    /// Get the Oklab version.
    pub fn version(&self) -> OkVersion {
        self.version
    }
}

impl PaletteModel for MaterialYouTargets {
    fn targets(&self) -> &ColorScheme {
        &self.targets
    }

    fn to_lch(&self, color: &Color) -> Color {
        color.to(self.version.polar_space())
    }
}

#[cfg(test)]
mod test {
    use super::{MaterialYouTargets, PaletteModel};
    use crate::assert_close_enough;
    use crate::scheme::{Role, Tone};
    use crate::{ColorSpace, OkVersion};

    #[test]
    fn test_targets() {
        let model = MaterialYouTargets::new(OkVersion::Original, 1.0);
        assert_eq!(model.targets(), model.reference());

        let accent1 = &model.targets()[Role::Accent1];
        let neutral1 = &model.targets()[Role::Neutral1];
        assert_eq!(accent1[Tone::T0][0], 1.0);
        assert_eq!(accent1[Tone::T1000][0], 0.0);
        assert_eq!(neutral1[Tone::T500][0], accent1[Tone::T500][0]);
        assert_close_enough!(accent1[Tone::T50][1], 0.1328123146401862);
        assert!((neutral1[Tone::T50][1] * 12.0 - accent1[Tone::T50][1]).abs() < 1e-15);

        let accent3 = &model.targets()[Role::Accent3];
        let accent2 = &model.targets()[Role::Accent2];
        assert!((accent3[Tone::T300][1] - 2.0 * accent2[Tone::T300][1]).abs() < 1e-15);

        let mut previous = 2.0;
        for (_, color) in accent1.iter() {
            assert!(color[0] < previous, "lightness should decrease");
            previous = color[0];
        }
    }

    #[test]
    fn test_versions() {
        let model = MaterialYouTargets::new(OkVersion::Revised, 0.5);
        assert_eq!(model.version(), OkVersion::Revised);

        let target = &model.targets()[Role::Neutral2][Tone::T900];
        assert_eq!(target.space(), ColorSpace::Oklrch);
        assert!((target[1] - 0.1328123146401862 / 12.0).abs() < 1e-15);

        let seed = crate::rgb!(0x3f, 0x51, 0xb5);
        assert_eq!(model.to_lch(&seed).space(), ColorSpace::Oklrch);

        let faded = MaterialYouTargets::new(OkVersion::Original, 0.0);
        for (_, swatch) in faded.targets().iter() {
            assert!(swatch.iter().all(|(_, color)| color[1] == 0.0));
        }
    }
}
