/// A trait to abstract over environment variable access.
///
/// Options read their configuration from the environment through this trait,
/// so that tests can substitute a fake environment for the process
/// environment. Implementations only need to provide one method.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_fake_env() {
        let mut env = FakeEnv::new();
        env.set("PRETTYTONE_OK_VERSION", "revised")
            .set("PRETTYTONE_CHROMA_FACTOR", "");

        assert_eq!(env.read("PRETTYTONE_OK_VERSION").as_deref(), Ok("revised"));
        assert!(env.read("PRETTYTONE_ACCURATE_SHADES").is_err());
        assert!(env.is_non_empty("PRETTYTONE_OK_VERSION"));
        assert!(!env.is_non_empty("PRETTYTONE_CHROMA_FACTOR"));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
