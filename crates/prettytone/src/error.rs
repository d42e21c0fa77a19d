//! Utility module with prettytone's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that neither starts with `#` nor names a supported CSS
    /// function.
    UnknownFormat,

    /// A hashed color with other than three or six ASCII characters after the
    /// `#`. For example, `#00` is missing a digit, whereas `#💩00` has a
    /// character that does not fit.
    UnexpectedCharacters,

    /// A hashed color with a character that is not a hexadecimal digit. For
    /// example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A CSS function without the opening parenthesis, e.g., `color srgb 0 0
    /// 0)`.
    NoOpeningParenthesis,

    /// A CSS function without the closing parenthesis, e.g., `oklab(1 0 0`.
    NoClosingParenthesis,

    /// A `color()` function with an unsupported color space, e.g.,
    /// `color(display-p3 1 1 1)`.
    UnknownColorSpace,

    /// A CSS coordinate that is neither a unitless number nor `none`. For
    /// example, `color(srgb 1.0 0..1 0.0)` has a malformed second coordinate.
    MalformedFloat,

    /// A CSS function with other than three coordinates.
    WrongCoordinateCount,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        let message = match self {
            UnknownFormat => {
                "color format should start with `#`, `color(`, `oklab(`, or `oklch(`"
            }
            UnexpectedCharacters => "hashed color should have 3 or 6 ASCII characters",
            MalformedHex => "hashed color should have hexadecimal digits only",
            NoOpeningParenthesis => "color function should have an opening parenthesis",
            NoClosingParenthesis => "color function should end with a closing parenthesis",
            UnknownColorSpace => {
                "color function should use srgb, srgb-linear, --oklrab, or --oklrch"
            }
            MalformedFloat => "color coordinates should be unitless numbers or none",
            WrongCoordinateCount => "color function should have exactly 3 coordinates",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A tonal stop that is not one of the 13 canonical stops.
///
/// The canonical stops are 0, 10, 50, 100, 200, 300, 400, 500, 600, 700, 800,
/// 900, and 1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneError {
    pub value: u16,
}

impl ToneError {
    /// Create a new tone error.
    pub fn new(value: u16) -> Self {
        Self { value }
    }
}

impl std::fmt::Display for ToneError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} is not a tonal stop, which must be 0, 10, 50, 100, 200, ..., 900, or 1000",
            self.value
        ))
    }
}

impl std::error::Error for ToneError {}

#[cfg(feature = "pyffi")]
impl From<ToneError> for PyErr {
    fn from(value: ToneError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while configuring or generating a color scheme.
///
/// Numeric edge cases during generation, such as a seed without chroma, are
/// not errors. They always produce well-defined schemes. Instead, this error
/// covers invalid inputs at the API boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemeError {
    /// A chroma factor that is not-a-number, infinite, or negative.
    InvalidChromaFactor,

    /// A clip alpha that is not-a-number, infinite, or not positive.
    InvalidClipAlpha,

    /// A seed color with an infinite or not-a-number coordinate or, in Oklch
    /// and Oklrch, a negative chroma. A not-a-number hue is accepted for
    /// zero chroma, since it is powerless.
    InvalidSeed,

    /// An Oklab version other than `original` or `revised`.
    UnknownVersion,

    /// An environment variable with an unparseable value.
    MalformedVariable(&'static str),

    /// A lookup with an invalid tonal stop.
    UnknownTone(ToneError),
}

impl std::fmt::Display for SchemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use SchemeError::*;

        match self {
            InvalidChromaFactor => {
                f.write_str("chroma factor should be a finite, non-negative number but is not")
            }
            InvalidClipAlpha => {
                f.write_str("clip alpha should be a finite, positive number but is not")
            }
            InvalidSeed => f.write_str(
                "seed color should have finite coordinates and non-negative chroma but does not",
            ),
            UnknownVersion => f.write_str("Oklab version should be `original` or `revised`"),
            MalformedVariable(name) => f.write_fmt(format_args!(
                "environment variable {} has malformed value",
                name
            )),
            UnknownTone(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for SchemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownTone(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ToneError> for SchemeError {
    fn from(value: ToneError) -> Self {
        Self::UnknownTone(value)
    }
}

#[cfg(feature = "pyffi")]
impl From<SchemeError> for PyErr {
    fn from(value: SchemeError) -> Self {
        match value {
            SchemeError::UnknownTone(error) => error.into(),
            _ => PyValueError::new_err(value.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{SchemeError, ToneError};
    use std::error::Error;

    #[test]
    fn test_messages() {
        let error = SchemeError::from(ToneError::new(250));
        assert!(error.to_string().starts_with("250 is not a tonal stop"));
        assert!(error.source().is_some());
        assert!(SchemeError::InvalidChromaFactor.source().is_none());
        assert_eq!(
            SchemeError::MalformedVariable("PRETTYTONE_CHROMA_FACTOR").to_string(),
            "environment variable PRETTYTONE_CHROMA_FACTOR has malformed value"
        );
    }
}
