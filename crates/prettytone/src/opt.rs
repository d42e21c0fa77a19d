//! Helper module with the options for generating color schemes.
//!
//! This module provides the options for scheme generation and the
//! corresponding builder. Options may also be read from the environment.
//!
//!
//! # Example
//!
//! ```
//! # use prettytone::opt::Options;
//! # use prettytone::error::SchemeError;
//! let options = Options::builder()
//!     .chroma_factor(0.8)
//!     .accurate_shades(false)
//!     .build()?;
//!
//! assert_eq!(options.chroma_factor(), 0.8);
//! assert!(!options.accurate_shades());
//! # Ok::<(), SchemeError>(())
//! ```

use crate::error::SchemeError;
use crate::scheme::check_seed;
use crate::util::{Env, Environment};
use crate::{rgb, Color, Float, OkVersion, DEFAULT_CLIP_ALPHA};

/// The environment variable for the chroma factor.
pub const CHROMA_FACTOR_VAR: &str = "PRETTYTONE_CHROMA_FACTOR";
/// The environment variable for accurate shades.
pub const ACCURATE_SHADES_VAR: &str = "PRETTYTONE_ACCURATE_SHADES";
/// The environment variable for the Oklab version.
pub const OK_VERSION_VAR: &str = "PRETTYTONE_OK_VERSION";

#[derive(Clone, Debug, PartialEq)]
struct OptionData {
    chroma_factor: Float,
    accurate_shades: bool,
    clip_alpha: Float,
    version: OkVersion,
    fallback_seed: Color,
}

impl OptionData {
    fn new() -> Self {
        Self {
            chroma_factor: 1.0,
            accurate_shades: true,
            clip_alpha: DEFAULT_CLIP_ALPHA,
            version: OkVersion::Original,
            fallback_seed: rgb!(0x3f, 0x51, 0xb5),
        }
    }

    fn validate(&self) -> Result<(), SchemeError> {
        if !self.chroma_factor.is_finite() || self.chroma_factor < 0.0 {
            return Err(SchemeError::InvalidChromaFactor);
        } else if !self.clip_alpha.is_finite() || self.clip_alpha <= 0.0 {
            return Err(SchemeError::InvalidClipAlpha);
        }
        check_seed(&self.fallback_seed)
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the factor applied to the seed's and the targets' chroma.
    pub fn chroma_factor(&mut self, factor: Float) -> &mut Self {
        self.0.chroma_factor = factor;
        self
    }

    /// Set whether to preserve lightness when mapping colors into gamut.
    ///
    /// Accurate shades preserve the targets' lightness ladder exactly. Without
    /// accurate shades, gamut mapping adaptively trades lightness for chroma.
    pub fn accurate_shades(&mut self, accurate: bool) -> &mut Self {
        self.0.accurate_shades = accurate;
        self
    }

    /// Set the alpha for adaptive gamut mapping.
    pub fn clip_alpha(&mut self, alpha: Float) -> &mut Self {
        self.0.clip_alpha = alpha;
        self
    }

    /// Set the Oklab version and hence the lightness model.
    pub fn version(&mut self, version: OkVersion) -> &mut Self {
        self.0.version = version;
        self
    }

    /// Set the seed used when no seed color is available.
    pub fn fallback_seed(&mut self, seed: Color) -> &mut Self {
        self.0.fallback_seed = seed;
        self
    }

    /// Instantiate the options.
    ///
    /// This method fails if the chroma factor is negative or not finite, the
    /// clip alpha is not positive or not finite, or the fallback seed is not a
    /// valid seed, as checked by [`SchemeFactory::create`](crate::scheme::SchemeFactory::create).
    pub fn build(&self) -> Result<Options, SchemeError> {
        self.0.validate()?;
        Ok(Options(self.0.clone()))
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Create a new builder with option values from the process environment.
    ///
    /// Unset environment variables keep their defaults. Set variables must be
    /// well-formed: [`CHROMA_FACTOR_VAR`] holds a floating point number,
    /// [`ACCURATE_SHADES_VAR`] holds `0`, `1`, `false`, or `true`, and
    /// [`OK_VERSION_VAR`] holds `original` or `revised`.
    pub fn from_environment() -> Result<OptionBuilder, SchemeError> {
        Self::from_env(&Env::default())
    }

    pub(crate) fn from_env(env: &impl Environment) -> Result<OptionBuilder, SchemeError> {
        let mut builder = Self::builder();

        if let Some(value) = read_var(env, CHROMA_FACTOR_VAR)? {
            let factor = value
                .trim()
                .parse::<Float>()
                .map_err(|_| SchemeError::MalformedVariable(CHROMA_FACTOR_VAR))?;
            builder.chroma_factor(factor);
        }

        if let Some(value) = read_var(env, ACCURATE_SHADES_VAR)? {
            let accurate = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => return Err(SchemeError::MalformedVariable(ACCURATE_SHADES_VAR)),
            };
            builder.accurate_shades(accurate);
        }

        if let Some(value) = read_var(env, OK_VERSION_VAR)? {
            builder.version(value.parse()?);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(options = ?builder.0, "read options from environment");

        Ok(builder)
    }

    /// Get the chroma factor.
    pub fn chroma_factor(&self) -> Float {
        self.0.chroma_factor
    }

    /// Determine whether to preserve lightness during gamut mapping.
    pub fn accurate_shades(&self) -> bool {
        self.0.accurate_shades
    }

    /// Get the alpha for adaptive gamut mapping.
    pub fn clip_alpha(&self) -> Float {
        self.0.clip_alpha
    }

    /// Get the Oklab version.
    pub fn version(&self) -> OkVersion {
        self.0.version
    }

    /// Get the fallback seed.
    pub fn fallback_seed(&self) -> &Color {
        &self.0.fallback_seed
    }
}

/// Read an optional variable, treating empty values as unset.
fn read_var(env: &impl Environment, key: &'static str) -> Result<Option<String>, SchemeError> {
    if !env.is_non_empty(key) {
        return Ok(None);
    }
    env.read(key)
        .map(Some)
        .map_err(|_| SchemeError::MalformedVariable(key))
}
