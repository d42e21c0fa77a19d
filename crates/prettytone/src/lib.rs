//! # Pretty 🌸 Tone
//!
//! Prettytone derives complete, Material You style color schemes from a single
//! seed color.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. A version that also covers Python integration requires the `pyffi`
feature. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. A version without Python integration requires disabling the
`pyffi` feature. "
)]
//!
//!
//! ## 1. Overview
//!
//! Prettytone's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. Its methods convert
//!     between sRGB, linear sRGB, Oklab, Oklch, and their revised versions
//!     Oklrab and Oklrch, test and map gamut with a choice of [`ClipMethod`]s,
//!     compute color differences, and quantize colors to 24-bit and packed
//!     ARGB representations.
//!   * The [`scheme`] module implements **dynamic color schemes**. A
//!     [`ColorScheme`](scheme::ColorScheme) has five
//!     [`Swatch`](scheme::Swatch)es, one per [`Role`](scheme::Role), with 13
//!     colors each, one per [`Tone`](scheme::Tone). Generated colors keep the
//!     lightness of a [`PaletteModel`](scheme::PaletteModel)'s targets while
//!     taking hue and relative chroma from the seed.
//!   * The [`opt`] module defines the [`Options`](opt::Options) controlling
//!     generation, which may also be read from the environment.
//!
//!
//! ## 2. One Seed, Many Colors
//!
//! Generating a color scheme takes one function call:
//!
//! ```
//! # use prettytone::Color;
//! # use prettytone::error::SchemeError;
//! # use prettytone::opt::Options;
//! # use prettytone::scheme::{generate_scheme, Appearance, Role, Tone};
//! let seed = Color::from_24bit(0x3f, 0x51, 0xb5);
//! let scheme = generate_scheme(&seed, &Options::default())?;
//!
//! assert_eq!(scheme[Role::Accent1][Tone::T700].to_hex_format(), "#2e3c8c");
//! assert_eq!(scheme.background(Appearance::Dark).to_hex_format(), "#191b20");
//! # Ok::<(), SchemeError>(())
//! ```
//!
//! Generation is a pure function of seed and options. The same inputs always
//! produce bit-identical schemes, which makes
//! [`ColorScheme::is_same_as`](scheme::ColorScheme::is_same_as) and
//! [`SchemeTracker`](scheme::SchemeTracker) useful for suppressing redundant
//! updates.
//!
//!
//! ## 3. Optional Features
//!
//! Prettytone supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`tracing`** instruments scheme generation and gamut mapping with the
//!     [tracing](https://crates.io/crates/tracing) crate. This feature is
//!     disabled by default.
//!   - **`pyffi`** controls prettytone's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Acknowledgements
//!
//! Prettytone builds on [Björn Ottosson](https://bottosson.github.io)'s Oklab
//! color space, its revised lightness, and his gamut mapping algorithms. The
//! target swatches follow the published Material You defaults.
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
pub mod opt;
pub mod scheme;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ClipMethod, ColorSpace, DEFAULT_CLIP_ALPHA};
pub use object::{Color, OkVersion};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modcolor_name = m.name()?;
    let modcolor_name = modcolor_name.to_str()?;
    let modscheme_name = format!("{}.scheme", modcolor_name);

    // -------------------------------------------------------------------------- color
    m.add_class::<ClipMethod>()?;
    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<OkVersion>()?;
    m.add("DEFAULT_CLIP_ALPHA", DEFAULT_CLIP_ALPHA)?;

    // ------------------------------------------------------------------- color.scheme
    let modscheme = PyModule::new(m.py(), "scheme")?;
    modscheme.add("__package__", modcolor_name)?;
    modscheme.add_function(wrap_pyfunction!(scheme::py_generate_scheme, m)?)?;
    modscheme.add_class::<scheme::Appearance>()?;
    modscheme.add_class::<scheme::ColorScheme>()?;
    modscheme.add_class::<scheme::Role>()?;
    modscheme.add_class::<scheme::RoleIterator>()?;
    modscheme.add_class::<scheme::Swatch>()?;
    modscheme.add_class::<scheme::Tone>()?;
    modscheme.add_class::<scheme::ToneIterator>()?;
    m.add_submodule(&modscheme)?;

    // Only change __name__ attribute after submodule has been added.
    modscheme.setattr("__name__", &modscheme_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modscheme_name, modscheme)?;

    Ok(())
}
