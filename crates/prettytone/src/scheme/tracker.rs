use super::{ColorScheme, MaterialYouTargets, PaletteModel, SchemeFactory};
use crate::error::SchemeError;
use crate::opt::Options;
use crate::Color;

/// A tracker of the current color scheme.
///
/// Seed colors typically arrive whenever the environment changes, e.g., when
/// the wallpaper changes, yet many such changes do not perceptibly change the
/// generated color scheme. A tracker keeps the most recent scheme and tells
/// whether a new seed produced a scheme that displays differently.
///
/// ```
/// # use prettytone::opt::Options;
/// # use prettytone::scheme::SchemeTracker;
/// # use prettytone::error::SchemeError;
/// # use prettytone::Color;
/// let mut tracker = SchemeTracker::new(&Options::default());
/// assert!(tracker.current().is_none());
///
/// let indigo = Color::from_24bit(0x3f, 0x51, 0xb5);
/// assert!(tracker.update(Some(&indigo))?);
/// assert!(!tracker.update(Some(&indigo))?);
/// # Ok::<(), SchemeError>(())
/// ```
#[derive(Debug)]
pub struct SchemeTracker<M: PaletteModel = MaterialYouTargets> {
    factory: SchemeFactory<M>,
    current: Option<ColorScheme>,
    stale: bool,
}

impl SchemeTracker<MaterialYouTargets> {
    /// Create a new tracker for Material You targets with the given options.
    pub fn new(options: &Options) -> Self {
        Self::with_factory(SchemeFactory::new(options))
    }
}

impl<M: PaletteModel> SchemeTracker<M> {
    /// Create a new tracker with the given factory.
    pub fn with_factory(factory: SchemeFactory<M>) -> Self {
        Self {
            factory,
            current: None,
            stale: false,
        }
    }

    /// Get the current color scheme.
    pub fn current(&self) -> Option<&ColorScheme> {
        self.current.as_ref()
    }

    /// Update the color scheme with the seed color.
    ///
    /// A missing seed falls back on the options' fallback seed. This method
    /// returns `true` if there was no scheme before, the tracker was
    /// [invalidated](SchemeTracker::invalidate), or the new scheme displays
    /// differently from the previous one. On error, the tracker remains
    /// unchanged.
    pub fn update(&mut self, seed: Option<&Color>) -> Result<bool, SchemeError> {
        let seed = seed.unwrap_or_else(|| self.factory.options().fallback_seed());
        let scheme = self.factory.create(seed)?.into_scheme();

        let changed = self.stale
            || self
                .current
                .as_ref()
                .map_or(true, |current| !current.is_same_as(&scheme));

        #[cfg(feature = "tracing")]
        tracing::debug!(seed = %seed, changed, "updated color scheme");

        self.current = Some(scheme);
        self.stale = false;
        Ok(changed)
    }

    /// Force the next successful update to report a change.
    ///
    /// Unlike [`reset`](SchemeTracker::reset), this method keeps the current
    /// scheme. It serves changes that affect how a scheme is presented, such as
    /// switching between light and dark appearance, but not the scheme itself.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Forget the current color scheme.
    pub fn reset(&mut self) {
        self.current = None;
        self.stale = false;
    }
}

#[cfg(test)]
mod test {
    use super::SchemeTracker;
    use crate::error::SchemeError;
    use crate::opt::Options;
    use crate::scheme::{Role, Tone};
    use crate::{rgb, Color, Float};

    #[test]
    fn test_tracker() -> Result<(), SchemeError> {
        let mut tracker = SchemeTracker::new(&Options::default());
        assert!(tracker.update(None)?);

        let fallback = tracker.current().cloned();
        assert!(!tracker.update(Some(&rgb!(0x3f, 0x51, 0xb5)))?);
        assert_eq!(tracker.current().cloned(), fallback);

        // A tiny nudge to the seed does not survive quantization.
        let nudged = Color::srgb(63.0 / 255.0 + 1e-9, 81.0 / 255.0, 181.0 / 255.0);
        assert!(!tracker.update(Some(&nudged))?);

        assert!(tracker.update(Some(&rgb!(0xff, 0x98, 0x00)))?);
        assert_ne!(tracker.current().cloned(), fallback);

        let before = tracker.current().cloned();
        assert_eq!(
            tracker.update(Some(&Color::srgb(Float::INFINITY, 0.0, 0.0))),
            Err(SchemeError::InvalidSeed)
        );
        assert_eq!(tracker.current().cloned(), before);

        tracker.invalidate();
        assert_eq!(tracker.current().cloned(), before);
        assert!(tracker
            .update(Some(&Color::srgb(Float::NAN, 0.0, 0.0)))
            .is_err());
        assert!(tracker.update(Some(&rgb!(0xff, 0x98, 0x00)))?);
        assert!(!tracker.update(Some(&rgb!(0xff, 0x98, 0x00)))?);
        assert_eq!(tracker.current().cloned(), before);

        tracker.reset();
        assert!(tracker.current().is_none());
        assert!(tracker.update(Some(&rgb!(0xff, 0xff, 0xff)))?);
        assert_eq!(
            tracker
                .current()
                .map(|scheme| scheme[Role::Accent1][Tone::T500].to_hex_format()),
            Some("#757575".to_string())
        );
        Ok(())
    }
}
