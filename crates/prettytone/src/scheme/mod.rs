//! Generation of dynamic color schemes.
//!
//! This module derives a complete color scheme from a single seed color. A
//! [`ColorScheme`] has five [`Swatch`]es, one per [`Role`], and each swatch has
//! thirteen colors, one per [`Tone`]. Generated colors take their lightness
//! from the targets of a [`PaletteModel`], their hue from the seed, and their
//! chroma from the targets scaled by the seed's chroma relative to the model's
//! reference. The third accent rotates the seed's hue by
//! [`ACCENT3_HUE_SHIFT`]. Finally, every color is mapped into the sRGB gamut.
//!
//! [`generate_scheme`] is the one-call entry point, [`SchemeFactory`] reuses a
//! model across several seeds, and [`SchemeTracker`] detects whether a new seed
//! perceptibly changes the scheme.
//!
//! ```
//! # use prettytone::opt::Options;
//! # use prettytone::scheme::{generate_scheme, Role, Tone};
//! # use prettytone::error::SchemeError;
//! # use prettytone::Color;
//! let seed = Color::from_24bit(0x3f, 0x51, 0xb5);
//! let scheme = generate_scheme(&seed, &Options::default())?;
//!
//! assert_eq!(scheme[Role::Accent1][Tone::T0].to_hex_format(), "#ffffff");
//! assert_eq!(scheme[Role::Accent1][Tone::T500].to_hex_format(), "#5a6ec3");
//! assert_eq!(scheme[Role::Neutral1][Tone::T500].to_hex_format(), "#73757c");
//! assert_eq!(scheme[Role::Accent1][Tone::T1000].to_hex_format(), "#000000");
//! # Ok::<(), SchemeError>(())
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

mod dynamic;
mod model;
mod swatch;
mod tone;
mod tracker;

pub(crate) use dynamic::check_seed;
pub use dynamic::{DynamicColorScheme, SchemeFactory, ACCENT3_HUE_SHIFT};
pub use model::{MaterialYouTargets, PaletteModel};
pub use swatch::{Appearance, ColorScheme, Swatch};
pub use tone::{Role, RoleIterator, Tone, ToneIterator};
pub use tracker::SchemeTracker;

use crate::error::SchemeError;
use crate::opt::Options;
use crate::Color;

/// Generate a color scheme from the seed color.
///
/// This function uses the default Material You targets with the Oklab version
/// and chroma factor from the options. It fails if the seed color has
/// infinite coordinates.
pub fn generate_scheme(seed: &Color, options: &Options) -> Result<ColorScheme, SchemeError> {
    SchemeFactory::new(options)
        .create(seed)
        .map(DynamicColorScheme::into_scheme)
}

/// Generate a color scheme from the seed color or, if there is none, from the
/// options' fallback seed.
pub fn generate_scheme_or_default(
    seed: Option<&Color>,
    options: &Options,
) -> Result<ColorScheme, SchemeError> {
    generate_scheme(seed.unwrap_or_else(|| options.fallback_seed()), options)
}

/// Generate a color scheme from the seed color. <i class=python-only>Python
/// only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "generate_scheme", signature = (seed, chroma_factor=1.0, accurate_shades=true))]
pub fn py_generate_scheme(
    seed: &Color,
    chroma_factor: crate::Float,
    accurate_shades: bool,
) -> Result<ColorScheme, SchemeError> {
    let options = Options::builder()
        .chroma_factor(chroma_factor)
        .accurate_shades(accurate_shades)
        .build()?;
    generate_scheme(seed, &options)
}
