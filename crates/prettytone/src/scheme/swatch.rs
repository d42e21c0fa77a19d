#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{Role, Tone};
use crate::error::ToneError;
use crate::{Color, Float, OkVersion};

/// A swatch.
///
/// A swatch is a container with [`Tone::COUNT`] colors, one for each tonal
/// stop from light to dark. Like a color scheme, its public interface is a
/// compromise between struct and array. Rust code indexes a swatch with
/// [`Tone`], which cannot fail. Numeric tonal stops, which may be invalid, go
/// through [`Swatch::get`]. The underlying storage is available through
/// [`AsRef<[Color]> for
/// Swatch`](struct.Swatch.html#impl-AsRef%3C%5BColor%5D%3E-for-Swatch).
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettytone.color.scheme")
)]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Swatch {
    inner: [Color; Tone::COUNT],
}

impl Swatch {
    /// Create a new swatch with the given colors ordered from light to dark.
    pub const fn with_array(colors: [Color; Tone::COUNT]) -> Self {
        Self { inner: colors }
    }

    /// Create a new swatch by invoking the function for each tonal stop.
    pub fn from_fn(mut f: impl FnMut(Tone) -> Color) -> Self {
        let mut tones = Tone::all();
        Self {
            // The iterator has exactly Tone::COUNT items.
            inner: std::array::from_fn(|_| f(tones.next().unwrap_or(Tone::T1000))),
        }
    }

    /// Get an iterator over the tonal stops and their colors.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Tone, &Color)> {
        Tone::all().zip(self.inner.iter())
    }

    /// Get the color for the numeric tonal stop.
    ///
    /// ```
    /// # use prettytone::scheme::Swatch;
    /// # use prettytone::Color;
    /// let grays = Swatch::from_fn(|tone| {
    ///     let level = 1.0 - tone.value() as f64 / 1000.0;
    ///     Color::srgb(level, level, level)
    /// });
    /// assert_eq!(grays.get(500).map(|c| c.to_hex_format()), Ok("#808080".to_string()));
    /// assert!(grays.get(550).is_err());
    /// ```
    pub fn get(&self, value: u16) -> Result<&Color, ToneError> {
        Tone::try_from(value).map(|tone| &self[tone])
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Swatch {
    /// Convert the swatch's colors to packed ARGB values.
    pub fn to_packed(&self) -> [u32; Tone::COUNT] {
        std::array::from_fn(|index| self.inner[index].to_packed())
    }

    /// Compute the largest distance between corresponding colors.
    pub fn distance(&self, other: &Self, version: OkVersion) -> Float {
        self.inner
            .iter()
            .zip(other.inner.iter())
            .map(|(c1, c2)| c1.distance(c2, version))
            .fold(0.0, Float::max)
    }

    /// Get the color for the numeric tonal stop. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, value: u16) -> Result<Color, ToneError> {
        self.get(value).cloned()
    }

    /// Get the number of colors. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        Tone::COUNT
    }

    /// Render a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl AsRef<[Color]> for Swatch {
    fn as_ref(&self) -> &[Color] {
        &self.inner
    }
}

impl std::ops::Index<Tone> for Swatch {
    type Output = Color;

    fn index(&self, index: Tone) -> &Self::Output {
        &self.inner[index.index()]
    }
}

impl std::fmt::Debug for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debugger = f.debug_map();
        for (tone, color) in self.iter() {
            debugger.entry(&tone.value(), &color.to_hex_format());
        }
        debugger.finish()
    }
}

// ====================================================================================================================

/// The light or dark appearance of a user interface.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettytone.color.scheme")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// A color scheme.
///
/// A color scheme is a container with [`Role::COUNT`] swatches, three accents
/// followed by two neutrals. Rust code indexes a color scheme with [`Role`]
/// and the resulting swatch with [`Tone`].
///
/// Two color schemes are equal if all their colors are equal, with the same
/// normalization and rounding as for [`Color`]. [`ColorScheme::is_same_as`]
/// instead compares the 8-bit sRGB colors actually displayed and hence detects
/// perceptible changes.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "prettytone.color.scheme")
)]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    inner: [Swatch; Role::COUNT],
}

impl ColorScheme {
    /// Create a new color scheme with the given swatches.
    pub const fn with_array(swatches: [Swatch; Role::COUNT]) -> Self {
        Self { inner: swatches }
    }

    /// Create a new color scheme by invoking the function for each role.
    pub fn from_fn(mut f: impl FnMut(Role) -> Swatch) -> Self {
        let mut roles = Role::all();
        Self {
            // The iterator has exactly Role::COUNT items.
            inner: std::array::from_fn(|_| f(roles.next().unwrap_or(Role::Neutral2))),
        }
    }

    /// Get an iterator over the roles and their swatches.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Role, &Swatch)> {
        Role::all().zip(self.inner.iter())
    }

    /// Get the three accent swatches.
    pub fn accent_swatches(&self) -> &[Swatch] {
        &self.inner[..3]
    }

    /// Get the two neutral swatches.
    pub fn neutral_swatches(&self) -> &[Swatch] {
        &self.inner[3..]
    }

    /// Get the color for the role and numeric tonal stop.
    pub fn get(&self, role: Role, value: u16) -> Result<&Color, ToneError> {
        self[role].get(value)
    }

    /// Get the background color.
    pub fn background(&self, appearance: Appearance) -> &Color {
        self.pick(appearance, Role::Neutral1, Tone::T50, Tone::T900)
    }

    /// Get the secondary background color.
    pub fn secondary_background(&self, appearance: Appearance) -> &Color {
        self.pick(appearance, Role::Neutral1, Tone::T100, Tone::T700)
    }

    /// Get the accent color.
    pub fn accent(&self, appearance: Appearance) -> &Color {
        self.pick(appearance, Role::Accent1, Tone::T700, Tone::T100)
    }

    /// Get the primary color.
    pub fn primary(&self, appearance: Appearance) -> &Color {
        self.pick(appearance, Role::Accent2, Tone::T100, Tone::T600)
    }

    /// Get the secondary color.
    pub fn secondary(&self, appearance: Appearance) -> &Color {
        self.pick(appearance, Role::Accent2, Tone::T300, Tone::T400)
    }

    fn pick(&self, appearance: Appearance, role: Role, light: Tone, dark: Tone) -> &Color {
        match appearance {
            Appearance::Light => &self[role][light],
            Appearance::Dark => &self[role][dark],
        }
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorScheme {
    /// Determine whether the two color schemes display the same.
    ///
    /// This method compares the packed 8-bit colors. Hence it ignores
    /// differences that do not survive quantization.
    pub fn is_same_as(&self, other: &Self) -> bool {
        self.to_packed() == other.to_packed()
    }

    /// Compute the largest Delta E OK between corresponding colors.
    pub fn distance(&self, other: &Self, version: OkVersion) -> Float {
        self.inner
            .iter()
            .zip(other.inner.iter())
            .map(|(s1, s2)| s1.distance(s2, version))
            .fold(0.0, Float::max)
    }

    /// Convert the color scheme to a table of packed ARGB values.
    pub fn to_packed(&self) -> [[u32; Tone::COUNT]; Role::COUNT] {
        std::array::from_fn(|index| self.inner[index].to_packed())
    }

    /// Get the swatch for the role. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, role: Role) -> Swatch {
        self[role].clone()
    }

    /// Get the number of swatches. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        Role::COUNT
    }

    /// Get the color for the role and numeric tonal stop. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "get")]
    pub fn py_get(&self, role: Role, value: u16) -> Result<Color, ToneError> {
        self.get(role, value).cloned()
    }

    /// Get the background color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "background")]
    pub fn py_background(&self, appearance: Appearance) -> Color {
        self.background(appearance).clone()
    }

    /// Get the secondary background color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "secondary_background")]
    pub fn py_secondary_background(&self, appearance: Appearance) -> Color {
        self.secondary_background(appearance).clone()
    }

    /// Get the accent color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "accent")]
    pub fn py_accent(&self, appearance: Appearance) -> Color {
        self.accent(appearance).clone()
    }

    /// Get the primary color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "primary")]
    pub fn py_primary(&self, appearance: Appearance) -> Color {
        self.primary(appearance).clone()
    }

    /// Get the secondary color. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "secondary")]
    pub fn py_secondary(&self, appearance: Appearance) -> Color {
        self.secondary(appearance).clone()
    }

    /// Render a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl AsRef<[Swatch]> for ColorScheme {
    fn as_ref(&self) -> &[Swatch] {
        &self.inner
    }
}

impl std::ops::Index<Role> for ColorScheme {
    type Output = Swatch;

    fn index(&self, index: Role) -> &Self::Output {
        &self.inner[index as usize]
    }
}

impl std::fmt::Debug for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debugger = f.debug_struct("ColorScheme");
        for (role, swatch) in self.iter() {
            debugger.field(role.name(), swatch);
        }
        debugger.finish()
    }
}

#[cfg(test)]
mod test {
    use super::{Appearance, ColorScheme, Swatch};
    use crate::scheme::{Role, Tone};
    use crate::{Color, OkVersion};

    fn gray_swatch(offset: u8) -> Swatch {
        Swatch::from_fn(|tone| {
            let level = 255 - (tone.index() as u8) * 19 - offset;
            Color::from_24bit(level, level, level)
        })
    }

    fn gray_scheme() -> ColorScheme {
        ColorScheme::from_fn(|role| gray_swatch(role as u8))
    }

    #[test]
    fn test_swatch() {
        let swatch = gray_swatch(0);
        assert_eq!(swatch.iter().len(), Tone::COUNT);
        assert_eq!(swatch[Tone::T0].to_hex_format(), "#ffffff");
        assert_eq!(swatch.get(1000), Ok(&swatch[Tone::T1000]));
        assert_eq!(swatch.get(1000).map(|c| c.to_24bit()), Ok([27, 27, 27]));
        assert!(swatch.get(5).is_err());
        assert_eq!(swatch.to_packed()[2], 0xff_d9d9d9);
        assert_eq!(swatch.distance(&swatch, OkVersion::Original), 0.0);

        for (tone, color) in swatch.iter() {
            assert_eq!(&swatch[tone], color);
        }
    }

    #[test]
    fn test_scheme() {
        let scheme = gray_scheme();
        assert_eq!(scheme, gray_scheme());
        assert!(scheme.is_same_as(&gray_scheme()));
        assert_eq!(scheme.accent_swatches().len(), 3);
        assert_eq!(scheme.neutral_swatches().len(), 2);
        assert_eq!(&scheme.neutral_swatches()[0], &scheme[Role::Neutral1]);
        assert_eq!(scheme.get(Role::Accent2, 0), Ok(&scheme[Role::Accent2][Tone::T0]));

        assert_eq!(
            scheme.background(Appearance::Light),
            &scheme[Role::Neutral1][Tone::T50]
        );
        assert_eq!(
            scheme.background(Appearance::Dark),
            &scheme[Role::Neutral1][Tone::T900]
        );
        assert_eq!(
            scheme.accent(Appearance::Dark),
            &scheme[Role::Accent1][Tone::T100]
        );
        assert_eq!(
            scheme.secondary(Appearance::Light),
            &scheme[Role::Accent2][Tone::T300]
        );

        let other = ColorScheme::from_fn(|role| gray_swatch(4 - role as u8));
        assert_ne!(scheme, other);
        assert!(!scheme.is_same_as(&other));
        assert!(scheme.distance(&other, OkVersion::Original) > 0.0);
    }
}
