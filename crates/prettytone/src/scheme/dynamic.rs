use super::{ColorScheme, MaterialYouTargets, PaletteModel, Role, Swatch};
use crate::error::SchemeError;
use crate::opt::Options;
use crate::{ClipMethod, Color, Float};

/// The hue rotation of the third accent relative to the seed, in degrees.
pub const ACCENT3_HUE_SHIFT: Float = 60.0;

/// Determine the factor for scaling a target's chroma.
///
/// The factor is the seed's chroma, clamped to the reference's chroma, divided
/// by the reference's chroma. It is zero if the reference has no chroma.
#[inline]
fn chroma_scale(seed_chroma: Float, reference_chroma: Float) -> Float {
    if reference_chroma == 0.0 {
        0.0
    } else {
        seed_chroma.clamp(0.0, reference_chroma) / reference_chroma
    }
}

/// Check that the color is a valid seed.
///
/// All coordinates must be finite, with one exception: a polar color without
/// chroma may have a not-a-number hue. Polar colors must not have negative
/// chroma.
pub(crate) fn check_seed(seed: &Color) -> Result<(), SchemeError> {
    let [c1, c2, c3] = *seed.as_ref();
    let valid = if seed.space().is_polar() {
        let powerless = c3.is_nan() && c2 == 0.0;
        c1.is_finite() && c2.is_finite() && 0.0 <= c2 && (c3.is_finite() || powerless)
    } else {
        c1.is_finite() && c2.is_finite() && c3.is_finite()
    };

    if valid {
        Ok(())
    } else {
        Err(SchemeError::InvalidSeed)
    }
}

/// A factory for dynamic color schemes.
///
/// A factory binds a [`PaletteModel`] to the options controlling generation.
/// It is cheap to reuse and generates any number of schemes. Generation is a
/// pure function of the seed color, model, and options. Hence the same inputs
/// always produce bit-identical schemes.
#[derive(Clone, Debug)]
pub struct SchemeFactory<M: PaletteModel = MaterialYouTargets> {
    model: M,
    options: Options,
}

impl SchemeFactory<MaterialYouTargets> {
    /// Create a new factory for Material You targets with the given options.
    pub fn new(options: &Options) -> Self {
        let model = MaterialYouTargets::new(options.version(), options.chroma_factor());
        Self::with_model(model, options)
    }
}

impl<M: PaletteModel> SchemeFactory<M> {
    /// Create a new factory with the given palette model and options.
    pub fn with_model(model: M, options: &Options) -> Self {
        Self {
            model,
            options: options.clone(),
        }
    }

    /// Get the palette model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get the clip method used for mapping colors into gamut.
    pub fn clip_method(&self) -> ClipMethod {
        if self.options.accurate_shades() {
            ClipMethod::PreserveLightness
        } else {
            ClipMethod::AdaptiveTowardsLcusp
        }
    }

    /// Generate a dynamic color scheme from the seed color.
    ///
    /// This method fails with [`SchemeError::InvalidSeed`] if the seed has an
    /// infinite or not-a-number coordinate or a negative chroma. The one
    /// exception is the powerless hue of an Oklch or Oklrch gray, which may be
    /// not-a-number.
    pub fn create(&self, seed: &Color) -> Result<DynamicColorScheme, SchemeError> {
        check_seed(seed)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "generate_scheme",
            seed = %seed,
            chroma_factor = self.options.chroma_factor(),
            accurate_shades = self.options.accurate_shades(),
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let scheme = self.transform(seed);
        Ok(DynamicColorScheme {
            seed: seed.clone(),
            chroma_factor: self.options.chroma_factor(),
            accurate_shades: self.options.accurate_shades(),
            scheme,
        })
    }

    fn transform(&self, seed: &Color) -> ColorScheme {
        let [_, chroma, hue] = *self.model.to_lch(seed).as_ref();
        let chroma = chroma * self.options.chroma_factor();
        let method = self.clip_method();
        let alpha = self.options.clip_alpha();

        ColorScheme::from_fn(|role| {
            // A powerless hue stays powerless after rotation.
            let hue = if role == Role::Accent3 {
                (hue + ACCENT3_HUE_SHIFT).rem_euclid(360.0)
            } else {
                hue
            };

            #[cfg(feature = "tracing")]
            tracing::trace!(role = role.name(), chroma, hue, "transforming swatch");

            let targets = &self.model.targets()[role];
            let reference = &self.model.reference()[role.reference()];

            Swatch::from_fn(|tone| {
                let target = &targets[tone];
                let scale = chroma_scale(chroma, reference[tone][1]);
                let color = Color::new(target.space(), [target[0], target[1] * scale, hue]);
                self.model.to_display(&color, method, alpha)
            })
        })
    }
}

/// A dynamic color scheme.
///
/// A dynamic color scheme combines a generated [`ColorScheme`] with the seed
/// color and the options it was generated with. It dereferences to the color
/// scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicColorScheme {
    seed: Color,
    chroma_factor: Float,
    accurate_shades: bool,
    scheme: ColorScheme,
}

impl DynamicColorScheme {
    /// Get the seed color.
    pub fn seed(&self) -> &Color {
        &self.seed
    }

    /// Get the chroma factor.
    pub fn chroma_factor(&self) -> Float {
        self.chroma_factor
    }

    /// Determine whether the scheme preserves the targets' lightness.
    pub fn accurate_shades(&self) -> bool {
        self.accurate_shades
    }

    /// Get the color scheme.
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Convert into the color scheme.
    pub fn into_scheme(self) -> ColorScheme {
        self.scheme
    }
}

impl std::ops::Deref for DynamicColorScheme {
    type Target = ColorScheme;

    fn deref(&self) -> &Self::Target {
        &self.scheme
    }
}

impl From<DynamicColorScheme> for ColorScheme {
    fn from(value: DynamicColorScheme) -> Self {
        value.scheme
    }
}

#[cfg(test)]
mod test {
    use super::{chroma_scale, SchemeFactory};
    use crate::error::SchemeError;
    use crate::opt::Options;
    use crate::scheme::{ColorScheme, MaterialYouTargets, PaletteModel, Role, Swatch, Tone};
    use crate::{rgb, Color, ColorSpace, Float, OkVersion};

    #[test]
    fn test_chroma_scale() {
        assert_eq!(chroma_scale(0.05, 0.1), 0.5);
        assert_eq!(chroma_scale(0.3, 0.1), 1.0);
        assert_eq!(chroma_scale(-0.3, 0.1), 0.0);
        assert_eq!(chroma_scale(0.3, 0.0), 0.0);
        assert_eq!(chroma_scale(0.0, 0.0), 0.0);
    }

    /// A model whose reference has no chroma at the darker half of the stops.
    struct FadingReference {
        inner: MaterialYouTargets,
        reference: ColorScheme,
    }

    impl FadingReference {
        fn new() -> Self {
            let inner = MaterialYouTargets::new(OkVersion::Original, 1.0);
            let reference = ColorScheme::from_fn(|role| {
                Swatch::from_fn(|tone| {
                    let target = &inner.targets()[role][tone];
                    let chroma = if Tone::T500 <= tone { 0.0 } else { target[1] };
                    Color::oklch(target[0], chroma, 0.0)
                })
            });
            Self { inner, reference }
        }
    }

    impl PaletteModel for FadingReference {
        fn targets(&self) -> &ColorScheme {
            self.inner.targets()
        }

        fn reference(&self) -> &ColorScheme {
            &self.reference
        }

        fn to_lch(&self, color: &Color) -> Color {
            self.inner.to_lch(color)
        }
    }

    #[test]
    fn test_zero_reference_chroma() -> Result<(), SchemeError> {
        let factory = SchemeFactory::with_model(FadingReference::new(), &Options::default());
        let scheme = factory.create(&rgb!(0x3f, 0x51, 0xb5))?;

        for role in Role::all() {
            for (tone, color) in scheme[role].iter() {
                let [r, g, b] = *color.as_ref();
                if Tone::T500 <= tone {
                    assert!(r == g && g == b, "{} {} should be gray", role, tone);
                }
            }
        }

        assert!(scheme[Role::Accent1][Tone::T300].to(ColorSpace::Oklch)[1] > 0.05);
        Ok(())
    }

    #[test]
    fn test_factory() -> Result<(), SchemeError> {
        let options = Options::builder().accurate_shades(false).build()?;
        let factory = SchemeFactory::new(&options);
        assert_eq!(factory.options(), &options);
        assert_eq!(factory.model().version(), OkVersion::Original);

        let seed = rgb!(0x3f, 0x51, 0xb5);
        let scheme = factory.create(&seed)?;
        assert_eq!(scheme.seed(), &seed);
        assert_eq!(scheme.chroma_factor(), 1.0);
        assert!(!scheme.accurate_shades());
        assert_eq!(scheme[Role::Accent1][Tone::T0].to_hex_format(), "#bbcbff");
        assert_eq!(scheme.scheme(), &factory.create(&seed)?.into_scheme());

        assert_eq!(
            factory.create(&Color::srgb(0.5, Float::INFINITY, 0.5)),
            Err(SchemeError::InvalidSeed)
        );
        Ok(())
    }

    #[test]
    fn test_invalid_seeds() -> Result<(), SchemeError> {
        let factory = SchemeFactory::new(&Options::default());

        for seed in [
            Color::srgb(Float::NAN, 0.3, 0.7),
            Color::linear_srgb(0.2, 0.3, Float::INFINITY),
            Color::oklab(0.5, Float::NAN, 0.0),
            Color::oklch(0.5, -0.2, 30.0),
            Color::oklch(0.5, Float::NAN, 30.0),
            Color::oklch(0.5, 0.1, Float::NAN),
            Color::oklrch(Float::NAN, 0.1, 30.0),
            Color::oklrch(0.5, -1e-9, 30.0),
        ] {
            assert_eq!(
                factory.create(&seed),
                Err(SchemeError::InvalidSeed),
                "{:?} should be rejected",
                seed
            );
        }

        // The hue of a gray is powerless.
        let gray = factory.create(&Color::oklch(0.6, 0.0, Float::NAN))?;
        assert_eq!(gray.scheme(), factory.create(&Color::oklch(0.6, 0.0, 0.0))?.scheme());
        assert!(factory.create(&Color::oklab(0.5, -0.1, -0.1)).is_ok());
        Ok(())
    }
}
