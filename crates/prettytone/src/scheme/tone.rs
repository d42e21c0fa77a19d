#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ToneError;

/// A tonal stop.
///
/// Every swatch of a color scheme has 13 colors, one per tonal stop. Stops run
/// from 0 for the lightest color, which always is white, to 1000 for the
/// darkest color, which always is black. In between are stops 10 and 50
/// followed by every hundred from 100 to 900. The stops are ordered from light
/// to dark.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prettytone.color.scheme")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    T0,
    T10,
    T50,
    T100,
    T200,
    T300,
    T400,
    T500,
    T600,
    T700,
    T800,
    T900,
    T1000,
}

impl Tone {
    /// The number of tonal stops.
    pub const COUNT: usize = 13;

    const ALL: [Tone; Tone::COUNT] = [
        Tone::T0,
        Tone::T10,
        Tone::T50,
        Tone::T100,
        Tone::T200,
        Tone::T300,
        Tone::T400,
        Tone::T500,
        Tone::T600,
        Tone::T700,
        Tone::T800,
        Tone::T900,
        Tone::T1000,
    ];

    /// Get an iterator over all tonal stops from light to dark.
    #[cfg(not(feature = "pyffi"))]
    pub fn all() -> ToneIterator {
        ToneIterator::new()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Tone {
    /// Get an iterator over all tonal stops from light to dark.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn all() -> ToneIterator {
        ToneIterator::new()
    }

    /// Try to get the tonal stop with the given numeric value. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method offers the same functionality as [`Tone as
    /// TryFrom<u16>`](enum.Tone.html#impl-TryFrom%3Cu16%3E-for-Tone).
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn try_from_value(value: u16) -> Result<Self, ToneError> {
        Self::try_from(value)
    }

    /// Get this tonal stop's numeric value.
    ///
    /// ```
    /// # use prettytone::scheme::Tone;
    /// assert_eq!(Tone::T0.value(), 0);
    /// assert_eq!(Tone::T50.value(), 50);
    /// assert_eq!(Tone::T1000.value(), 1000);
    /// ```
    pub const fn value(&self) -> u16 {
        match *self {
            Self::T0 => 0,
            Self::T10 => 10,
            Self::T50 => 50,
            Self::T100 => 100,
            Self::T200 => 200,
            Self::T300 => 300,
            Self::T400 => 400,
            Self::T500 => 500,
            Self::T600 => 600,
            Self::T700 => 700,
            Self::T800 => 800,
            Self::T900 => 900,
            Self::T1000 => 1000,
        }
    }

    /// Get this tonal stop's index `0..13`.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Render a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl TryFrom<u16> for Tone {
    type Error = ToneError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let tone = match value {
            0 => Self::T0,
            10 => Self::T10,
            50 => Self::T50,
            100 => Self::T100,
            200 => Self::T200,
            300 => Self::T300,
            400 => Self::T400,
            500 => Self::T500,
            600 => Self::T600,
            700 => Self::T700,
            800 => Self::T800,
            900 => Self::T900,
            1000 => Self::T1000,
            _ => return Err(ToneError::new(value)),
        };

        Ok(tone)
    }
}

impl From<Tone> for u16 {
    fn from(value: Tone) -> Self {
        value.value()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.value()))
    }
}

/// An iterator over tonal stops.
///
/// [`Tone::all`] returns this iterator, which produces all tonal stops from
/// light to dark. It is fused and exact.
#[cfg_attr(feature = "pyffi", pyclass(module = "prettytone.color.scheme"))]
#[derive(Debug)]
pub struct ToneIterator {
    index: usize,
}

impl ToneIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for ToneIterator {
    type Item = Tone;

    fn next(&mut self) -> Option<Self::Item> {
        let item = Tone::ALL.get(self.index).copied();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Tone::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for ToneIterator {
    fn len(&self) -> usize {
        Tone::COUNT - self.index
    }
}

impl std::iter::FusedIterator for ToneIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl ToneIterator {
    /// Get the number of remaining tonal stops. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next tonal stop. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<Tone> {
        slf.next()
    }
}

// ====================================================================================================================

/// A semantic role in a color scheme.
///
/// The three accent roles derive from the seed's hue, with the third accent
/// rotated by 60º. The two neutral roles are only faintly tinted with the
/// seed's hue and serve as backgrounds.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prettytone.color.scheme")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Accent1,
    Accent2,
    Accent3,
    Neutral1,
    Neutral2,
}

impl Role {
    /// The number of roles.
    pub const COUNT: usize = 5;

    const ALL: [Role; Role::COUNT] = [
        Role::Accent1,
        Role::Accent2,
        Role::Accent3,
        Role::Neutral1,
        Role::Neutral2,
    ];

    /// Get an iterator over all roles, accents first.
    #[cfg(not(feature = "pyffi"))]
    pub fn all() -> RoleIterator {
        RoleIterator::new()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Role {
    /// Get an iterator over all roles, accents first.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn all() -> RoleIterator {
        RoleIterator::new()
    }

    /// Determine whether this role is an accent.
    pub const fn is_accent(&self) -> bool {
        matches!(*self, Self::Accent1 | Self::Accent2 | Self::Accent3)
    }

    /// Get the role whose chroma normalizes this role's chroma.
    ///
    /// All accents share the first accent's reference and both neutrals share
    /// the first neutral's reference.
    ///
    /// ```
    /// # use prettytone::scheme::Role;
    /// assert_eq!(Role::Accent3.reference(), Role::Accent1);
    /// assert_eq!(Role::Neutral2.reference(), Role::Neutral1);
    /// ```
    pub const fn reference(&self) -> Role {
        if self.is_accent() {
            Self::Accent1
        } else {
            Self::Neutral1
        }
    }

    /// Get this role's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Accent1 => "accent1",
            Self::Accent2 => "accent2",
            Self::Accent3 => "accent3",
            Self::Neutral1 => "neutral1",
            Self::Neutral2 => "neutral2",
        }
    }

    /// Render a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Render this role's name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An iterator over roles.
///
/// [`Role::all`] returns this iterator, which produces the three accents
/// followed by the two neutrals. It is fused and exact.
#[cfg_attr(feature = "pyffi", pyclass(module = "prettytone.color.scheme"))]
#[derive(Debug)]
pub struct RoleIterator {
    index: usize,
}

impl RoleIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for RoleIterator {
    type Item = Role;

    fn next(&mut self) -> Option<Self::Item> {
        let item = Role::ALL.get(self.index).copied();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Role::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for RoleIterator {
    fn len(&self) -> usize {
        Role::COUNT - self.index
    }
}

impl std::iter::FusedIterator for RoleIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl RoleIterator {
    /// Get the number of remaining roles. <i class=python-only>Python only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next role. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<Role> {
        slf.next()
    }
}

#[cfg(test)]
mod test {
    use super::{Role, Tone};
    use crate::error::ToneError;

    #[test]
    fn test_tone() {
        let values: Vec<u16> = Tone::all().map(|t| t.value()).collect();
        assert_eq!(
            values,
            vec![0, 10, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]
        );

        for (index, tone) in Tone::all().enumerate() {
            assert_eq!(tone.index(), index);
            assert_eq!(Tone::try_from(tone.value()), Ok(tone));
        }

        assert_eq!(Tone::try_from(250), Err(ToneError::new(250)));
        assert_eq!(Tone::try_from(1001), Err(ToneError::new(1001)));
        assert_eq!(Tone::T700.to_string(), "700");
    }

    #[test]
    fn test_iterators() {
        let mut tones = Tone::all();
        assert_eq!(tones.len(), 13);
        assert_eq!(tones.nth(12), Some(Tone::T1000));
        assert_eq!(tones.len(), 0);
        assert_eq!(tones.next(), None);
        assert_eq!(tones.next(), None);

        let roles: Vec<Role> = Role::all().collect();
        assert_eq!(roles.len(), Role::COUNT);
        assert!(roles.iter().take(3).all(Role::is_accent));
        assert!(!roles[3].is_accent() && !roles[4].is_accent());
        assert_eq!(Role::Accent2.reference(), Role::Accent1);
        assert_eq!(Role::Neutral1.reference(), Role::Neutral1);
    }
}
