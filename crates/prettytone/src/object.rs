use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clip, clip_to_linear_srgb, convert, delta_e_ok, format, from_24bit, from_packed, in_gamut,
    is_achromatic, normalize, parse, to_24bit, to_eq_coordinates, to_packed, ClipMethod,
    ColorSpace,
};
use crate::error::{ColorFormatError, SchemeError};
use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
///
/// Rust currently does not allow floating point operations in const functions.
/// However, it does allow them in const expressions, notably as arguments to a
/// const constructor. Hence, a macro can convert and normalize the integer
/// coordinates before passing them to [`Color::new`]. That's just what this
/// macro does.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A high-resolution color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
///
/// # Color Coordinates
///
/// For sRGB and linear sRGB, the coordinates of in-gamut colors have unit
/// range. The Oklab variations have no gamut bounds. However, their (revised)
/// lightness must be `0.0..=1.0` and chroma must be `0.0..` for a color to be
/// well-formed.
///
/// A coordinate may be not-a-number because it is a [powerless
/// component](https://www.w3.org/TR/css-color-4/#powerless). In particular,
/// converting a gray to Oklch or Oklrch yields a zero chroma and a
/// not-a-number hue. Many methods automatically [normalize](Color::normalize)
/// such coordinates.
///
/// # Equality Testing and Hashing
///
/// Equal colors must have equal hashes. Hence both operations first replace
/// not-a-numbers with zero, remove full rotations from hues, round to 12
/// digits past the decimal (4 digits for `f32`), and replace negative zeros
/// with positive zeros. They then compare or hash the resulting bit strings.
///
/// # Coordinate Access
///
/// Both Rust and Python code can access individual coordinates by indexing a
/// color object with integers `0..2`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "prettytone.color")
)]
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // Constructors come in pairs, once for pyffi and once without pyffi, since
    // #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let violet = Color::new(ColorSpace::Oklch, [0.6, 0.18, 300.0]);
    /// assert_eq!(violet.as_ref(), &[0.6_f64, 0.18_f64, 300.0_f64]);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let violet = Color::new(ColorSpace::Oklch, [0.6, 0.18, 300.0]);
    /// assert_eq!(violet.as_ref(), &[0.6_f64, 0.18_f64, 300.0_f64]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, ColorFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b])
    }

    /// Instantiate a new linear sRGB color with the given red, green, and blue
    /// coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn linear_srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::LinearSrgb, [r, g, b])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b
    /// coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Oklab, [l, a, b])
    }

    /// Instantiate a new Oklrab color with the given revised lightness Lr, a,
    /// and b coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklrab(lr: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Oklrab, [lr, a, b])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C, and
    /// hue h coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklch(l: Float, c: Float, h: Float) -> Self {
        Self::new(ColorSpace::Oklch, [l, c, h])
    }

    /// Instantiate a new Oklrch color with the given revised lightness Lr,
    /// chroma C, and hue h coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn oklrch(lr: Float, c: Float, h: Float) -> Self {
        Self::new(ColorSpace::Oklrch, [lr, c, h])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let indigo = Color::from_24bit(0x3f, 0x51, 0xb5);
    /// assert_eq!(indigo, Color::srgb(
    ///     0.24705882352941178, 0.3176470588235294, 0.7098039215686275
    /// ));
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let indigo = Color::from_24bit(0x3f, 0x51, 0xb5);
    /// assert_eq!(indigo, Color::srgb(
    ///     0.24705882352941178, 0.3176470588235294, 0.7098039215686275
    /// ));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    /// Instantiate a new sRGB color from a packed ARGB value, ignoring the
    /// alpha channel.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn from_packed(argb: u32) -> Self {
        Self::new(ColorSpace::Srgb, from_packed(argb))
    }

    /// Instantiate a new sRGB color from a packed ARGB value, ignoring the
    /// alpha channel.
    ///
    /// ```
    /// # use prettytone::Color;
    /// assert_eq!(Color::from_packed(0xff3f51b5), Color::from_24bit(0x3f, 0x51, 0xb5));
    /// assert_eq!(Color::from_packed(0x003f51b5), Color::from_24bit(0x3f, 0x51, 0xb5));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn from_packed(argb: u32) -> Self {
        Self::new(ColorSpace::Srgb, from_packed(argb))
    }

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Read coordinates by index. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -3..=-1 => Ok(self.coordinates[(3 + index) as usize]),
            0..=2 => Ok(self.coordinates[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// The chroma threshold used by [`is_achromatic`](Color::is_achromatic).
    #[cfg(feature = "pyffi")]
    #[classattr]
    pub const ACHROMATIC_THRESHOLD: Float = crate::core::ACHROMATIC_EPSILON;

    /// The chroma threshold used by [`is_achromatic`](Color::is_achromatic).
    #[cfg(not(feature = "pyffi"))]
    pub const ACHROMATIC_THRESHOLD: Float = crate::core::ACHROMATIC_EPSILON;

    /// Determine whether this color is achromatic.
    ///
    /// This method tests whether the hue is not-a-number or the chroma is
    /// less than or equal to
    /// [`ACHROMATIC_THRESHOLD`](Color::ACHROMATIC_THRESHOLD) in Oklch or
    /// Oklrch, converting this color if necessary. Grays, including black and
    /// white, are achromatic.
    ///
    /// ```
    /// # use prettytone::Color;
    /// assert!(Color::from_24bit(0x80, 0x80, 0x80).is_achromatic());
    /// assert!(Color::from_24bit(0xff, 0xff, 0xff).is_achromatic());
    /// assert!(!Color::from_24bit(0x3f, 0x51, 0xb5).is_achromatic());
    /// ```
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        is_achromatic(self.space, &self.coordinates, Color::ACHROMATIC_THRESHOLD)
    }

    /// Normalize this color.
    ///
    /// This method replaces not-a-number coordinates with zero. If the hue in
    /// Oklch/Oklrch is not-a-number, it also zeros out the chroma. For the
    /// Oklab variations, it clamps (revised) lightness to `0..=1` and chroma
    /// to `0..`.
    #[inline]
    pub fn normalize(&self) -> Self {
        Self::new(self.space, normalize(self.space, &self.coordinates))
    }

    /// Convert this color to the target color space.
    ///
    /// Single-hop conversions form a tree rooted in Oklab. This method goes
    /// through that root unless both color spaces are on the same branch. It
    /// normalizes this color before converting.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let indigo = Color::from_24bit(0x3f, 0x51, 0xb5).to(ColorSpace::Oklch);
    /// assert!((indigo[0] - 0.4782015742568181).abs() < 1e-9);
    /// assert!((indigo[1] - 0.15892424078991316).abs() < 1e-9);
    /// assert!((indigo[2] - 271.40261604767477).abs() < 1e-9);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in-gamut for its color space.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// assert!(Color::srgb(1.0, 0.0, 0.0).in_gamut());
    /// assert!(!Color::oklch(0.9, 0.3, 140.0).to(ColorSpace::Srgb).in_gamut());
    /// ```
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates)
    }

    /// Clip this color to the gamut of its color space by clamping each
    /// coordinate.
    ///
    /// ```
    /// # use prettytone::Color;
    /// assert_eq!(Color::srgb(1.2, -0.1, 0.5).clip(), Color::srgb(1.0, 0.0, 0.5));
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self::new(self.space, clip(self.space, &self.coordinates))
    }

    /// Map this color into the sRGB gamut.
    ///
    /// If this color is an in-gamut sRGB color, this method returns it
    /// unchanged. Otherwise, it converts the color to Oklab, maps it into
    /// gamut with the given [`ClipMethod`], and returns the result as an sRGB
    /// color. `alpha` only matters for the adaptive methods, with
    /// [`DEFAULT_CLIP_ALPHA`](crate::DEFAULT_CLIP_ALPHA) a good default.
    /// Grays map to grays with exactly equal channels.
    ///
    /// ```
    /// # use prettytone::{ClipMethod, Color, ColorSpace};
    /// let vivid = Color::oklch(0.7, 0.35, 145.0);
    /// let green = vivid.clip_to_srgb(ClipMethod::PreserveLightness, 5.0);
    /// assert_eq!(green.space(), ColorSpace::Srgb);
    /// assert!(green.in_gamut());
    /// assert!((green.to(ColorSpace::Oklch)[0] - 0.7).abs() < 1e-6);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip_to_srgb(&self, method: ClipMethod, alpha: Float) -> Self {
        if self.space == ColorSpace::Srgb && self.in_gamut() {
            return self.clone();
        }

        let oklab = convert(self.space, ColorSpace::Oklab, &self.coordinates);
        let linear = clip_to_linear_srgb(&oklab, method, alpha);
        let srgb = convert(ColorSpace::LinearSrgb, ColorSpace::Srgb, &linear);
        Self::new(ColorSpace::Srgb, clip(ColorSpace::Srgb, &srgb))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the Euclidian distance between the two colors in Oklab.
    ///
    /// This method computes the color difference *Delta E OK*, which is the
    /// Euclidian distance in the Oklab color space, using either original or
    /// revised version.
    ///
    /// ```
    /// # use prettytone::{Color, OkVersion};
    /// let indigo = Color::from_24bit(0x3f, 0x51, 0xb5);
    /// assert_eq!(indigo.distance(&indigo, OkVersion::Original), 0.0);
    ///
    /// let black = Color::srgb(0.0, 0.0, 0.0);
    /// let white = Color::srgb(1.0, 1.0, 1.0);
    /// assert!((black.distance(&white, OkVersion::Original) - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self, version: OkVersion) -> Float {
        delta_e_ok(
            &self.to(version.cartesian_space()).coordinates,
            &other.to(version.cartesian_space()).coordinates,
        )
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to sRGB and clamps each coordinate
    /// before scaling and rounding it to a `u8`. Colors that may be out of
    /// gamut should be mapped with [`Color::clip_to_srgb`] first.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(self.space, &self.coordinates)
    }

    /// Convert this color to a packed, fully opaque ARGB value.
    ///
    /// ```
    /// # use prettytone::Color;
    /// assert_eq!(Color::from_24bit(0x3f, 0x51, 0xb5).to_packed(), 0xff3f51b5);
    /// assert_eq!(Color::srgb(0.5, 0.0, 1.0).to_packed(), 0xff8000ff);
    /// ```
    pub fn to_packed(&self) -> u32 {
        to_packed(self.space, &self.coordinates)
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal representation.
    ///
    /// Like [`Color::to_24bit`], this method converts the color to sRGB and
    /// clamps its coordinates before formatting them.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let indigo = Color::from_24bit(0x3f, 0x51, 0xb5).to(ColorSpace::Oklch);
    /// assert_eq!(indigo.to_hex_format(), "#3f51b5");
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its (CSS-based) string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
// Use cfg(), so that methods are not documented again.
#[cfg(not(feature = "pyffi"))]
impl Color {
    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let indigo = Color::srgb(63.0/255.0, 81.0/255.0, 181.0/255.0);
    /// assert_eq!(indigo.space(), ColorSpace::Srgb);
    /// ```
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new linear sRGB color with the given red, green, and blue
    /// coordinates.
    pub fn linear_srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::LinearSrgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b
    /// coordinates.
    pub fn oklab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklab, [l.into(), a.into(), b.into()])
    }

    /// Instantiate a new Oklrab color with the given revised lightness Lr, a,
    /// and b coordinates.
    pub fn oklrab(lr: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklrab, [lr.into(), a.into(), b.into()])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C, and
    /// hue h coordinates.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// let teal = Color::oklch(0.6, 0.1, 190.0);
    /// assert_eq!(teal.space(), ColorSpace::Oklch);
    /// ```
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklch, [l.into(), c.into(), h.into()])
    }

    /// Instantiate a new Oklrch color with the given revised lightness Lr,
    /// chroma C, and hue h coordinates.
    pub fn oklrch(lr: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklrch, [lr.into(), c.into(), h.into()])
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// The *hashed notation* has three or six hexadecimal digits, e.g., `#123`
    /// or `#3f51b5`. The three digit version repeats every digit, so the red
    /// coordinate in `#123` is 0x11/0xff.
    ///
    /// This method also recognizes the CSS functions `oklab()`, `oklch()`, and
    /// `color()`. For `color()`, the color space may be `srgb`, `srgb-linear`,
    /// `--oklrab`, or `--oklrch`. Coordinates must be space-separated and
    /// unitless, with `none` standing for a powerless hue.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace};
    /// # use prettytone::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let indigo = Color::from_str("#3F51B5")?;
    /// assert_eq!(indigo, Color::from_24bit(0x3f, 0x51, 0xb5));
    ///
    /// let rose: Color = str::parse("oklch(0.8 0.08 10)")?;
    /// assert_eq!(rose, Color::new(ColorSpace::Oklch, [0.8, 0.08, 10.0]));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates)| Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl From<u32> for Color {
    /// Convert a packed ARGB value to an sRGB color.
    fn from(value: u32) -> Self {
        Self::new(ColorSpace::Srgb, from_packed(value))
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Colors in different color spaces are never equal. Otherwise, this
    /// method compares normalized and rounded coordinates, just like
    /// [`Self::hash`](struct.Color.html#method.hash).
    ///
    /// ```
    /// # use prettytone::{Color, Float};
    /// assert_eq!(
    ///     Color::srgb(Float::NAN, 0.5, 0.12 + 1e-15),
    ///     Color::srgb(0,          0.5, 0.12        )
    /// );
    /// assert_eq!(Color::oklch(0.5, 0.1, 665), Color::oklch(0.5, 0.1, 305));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in CSS format using either a `color()`,
    /// `oklab()`, or `oklch()` CSS function and three space-separated
    /// coordinates. It respects the formatter's precision, defaulting to 5
    /// digits past the decimal, with 2 digits fewer for hues.
    ///
    /// ```
    /// # use prettytone::{Color, ColorSpace::*};
    /// # use prettytone::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let indigo = Color::from_str("#3f51b5")?;
    /// assert_eq!(format!("{}", indigo), "color(srgb 0.24706 0.31765 0.7098)");
    /// assert_eq!(format!("{:.3}", indigo), "color(srgb 0.247 0.318 0.71)");
    /// assert_eq!(format!("{}", indigo.to(Oklch)), "oklch(0.4782 0.15892 271.403)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================

/// A choice of Oklab versions.
///
/// Besides selecting color spaces, the version also selects the lightness
/// model for generating color schemes. With the revised version, the target
/// lightness ladder is interpreted as revised lightness Lr.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettytone.color")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OkVersion {
    /// The original Oklab/Oklch color spaces.
    #[default]
    Original,
    /// The revised Oklrab/Oklrch color spaces.
    Revised,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl OkVersion {
    /// Determine the Cartesion color space corresponding to this version of the
    /// Oklab color spaces.
    pub const fn cartesian_space(&self) -> ColorSpace {
        match *self {
            Self::Original => ColorSpace::Oklab,
            Self::Revised => ColorSpace::Oklrab,
        }
    }

    /// Determine the polar color space corresponding to this version of the
    /// Oklab color space.
    pub const fn polar_space(&self) -> ColorSpace {
        match *self {
            Self::Original => ColorSpace::Oklch,
            Self::Revised => ColorSpace::Oklrch,
        }
    }
}

impl FromStr for OkVersion {
    type Err = SchemeError;

    /// Parse `original` or `revised`, ignoring case and surrounding white
    /// space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "revised" => Ok(Self::Revised),
            _ => Err(SchemeError::UnknownVersion),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, OkVersion};
    use crate::error::SchemeError;
    use crate::{ClipMethod, ColorSpace, Float};
    use std::collections::HashSet;
    use std::str::FromStr;

    const INDIGO: Color = rgb!(0x3f, 0x51, 0xb5);

    #[test]
    fn test_eq_hash() {
        let mut set = HashSet::new();
        set.insert(INDIGO.clone());
        assert!(set.contains(&Color::from_packed(0xff3f51b5)));
        assert!(!set.contains(&INDIGO.to(ColorSpace::Oklab)));

        assert_eq!(
            Color::oklch(0.5, 0.0, Float::NAN),
            Color::oklch(0.5, 0.0, 0.0)
        );
    }

    #[test]
    fn test_packed() {
        assert_eq!(INDIGO.to_packed(), 0xff3f51b5);
        assert_eq!(Color::from(0x123456_u32).to_24bit(), [0x12, 0x34, 0x56]);
        assert_eq!(INDIGO.to(ColorSpace::Oklrch).to_packed(), 0xff3f51b5);
        assert_eq!(Color::srgb(1.5, -0.5, 0.5).to_hex_format(), "#ff0080");
    }

    #[test]
    fn test_clip_to_srgb() {
        assert_eq!(
            INDIGO.clip_to_srgb(ClipMethod::AdaptiveTowardsLcusp, 5.0),
            INDIGO
        );

        let gray = Color::oklch(0.6, 0.0, Float::NAN).clip_to_srgb(ClipMethod::PreserveLightness, 5.0);
        assert_eq!(gray[0], gray[1]);
        assert_eq!(gray[1], gray[2]);

        for method in [
            ClipMethod::PreserveLightness,
            ClipMethod::ProjectToMid,
            ClipMethod::ProjectToLcusp,
            ClipMethod::AdaptiveTowardsMid,
            ClipMethod::AdaptiveTowardsLcusp,
        ] {
            let color = Color::oklch(0.8, 0.4, 30.0).clip_to_srgb(method, 5.0);
            assert!(color.in_gamut(), "{:?} should produce in-gamut color", method);
        }
    }

    #[test]
    fn test_parse_and_version() {
        assert_eq!(Color::from_str("#3f51b5"), Ok(INDIGO.clone()));
        assert_eq!(Color::try_from("#3f51b5".to_string()), Ok(INDIGO.clone()));
        assert_eq!(OkVersion::from_str(" Revised "), Ok(OkVersion::Revised));
        assert_eq!(
            OkVersion::from_str("newest"),
            Err(SchemeError::UnknownVersion)
        );
        assert_eq!(OkVersion::Revised.polar_space(), ColorSpace::Oklrch);
    }
}
