use crate::types::err;

/// A configurable value, together with the bounds within which the value is valid.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Whether some value is within the bounds of the option.
    pub fn admits(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        match self.admits(&value) {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfBounds { name: self.name }),
        }
    }

    /// Ok if the current value is within bounds.
    pub fn check(&self) -> Result<(), err::ConfigError> {
        match self.admits(&self.value) {
            true => Ok(()),
            false => Err(err::ConfigError::OutOfBounds { name: self.name }),
        }
    }
}
