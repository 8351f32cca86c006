//! Configuration access port trait.

use crate::domain::error::RoiError;

/// Number of days in a year used to annualize returns (e.g. 360 or 365).
pub const LENGTH_OF_YEAR: &str = "LENGTH_OF_YEAR";

pub trait ConfigPort {
    fn get_string(&self, key: &str) -> Option<String>;

    /// `Ok(None)` when the key is absent, an error when it is set but not an
    /// integer.
    fn get_int(&self, key: &str) -> Result<Option<i64>, RoiError> {
        match self.get_string(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|e| RoiError::InvalidConfiguration {
                    key: key.to_string(),
                    reason: format!("{raw:?} is not an integer ({e})"),
                }),
        }
    }

    /// Consult `self` first, then `fallback` for keys `self` does not set.
    fn or<F: ConfigPort>(self, fallback: F) -> LayeredConfig<Self, F>
    where
        Self: Sized,
    {
        LayeredConfig {
            primary: self,
            fallback,
        }
    }
}

impl<C: ConfigPort + ?Sized> ConfigPort for &C {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

impl<C: ConfigPort + ?Sized> ConfigPort for Box<C> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

/// Two configuration sources where the first one wins.
#[derive(Debug, Clone)]
pub struct LayeredConfig<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ConfigPort, F: ConfigPort> ConfigPort for LayeredConfig<P, F> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.primary
            .get_string(key)
            .or_else(|| self.fallback.get_string(key))
    }
}
