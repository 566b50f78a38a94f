//! Saved generator settings.

use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::generator::{PasswordGenerator, DEFAULT_LENGTH};
use crate::key_space::DEFAULT_SYMBOLS;
use crate::GeneratorError;

/// Settings for a [`PasswordGenerator`], as stored in a YAML profile.
///
/// Missing fields take their defaults; unknown fields are an error, so a typo in a profile
/// doesn't silently fall back to a default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub length: usize,
    pub use_numeric: bool,
    pub use_lower_alphabet: bool,
    pub use_upper_alphabet: bool,
    pub use_symbols: bool,
    pub custom_symbols: String,
    pub trim_similar_looking: bool,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            length: DEFAULT_LENGTH,
            use_numeric: true,
            use_lower_alphabet: true,
            use_upper_alphabet: true,
            use_symbols: true,
            custom_symbols: DEFAULT_SYMBOLS.to_owned(),
            trim_similar_looking: false,
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<GeneratorConfig, GeneratorError> {
        serde_yaml::from_str(yaml).map_err(GeneratorError::ConfigParse)
    }

    pub fn from_yaml_file(path: &Path) -> Result<GeneratorConfig, GeneratorError> {
        let yaml = fs::read_to_string(path).map_err(GeneratorError::ConfigIo)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded generator profile");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, GeneratorError> {
        serde_yaml::to_string(self).map_err(GeneratorError::ConfigSerialize)
    }

    /// Write this profile to `path`, replacing whatever is there.
    pub fn save_yaml_file(&self, path: &Path) -> Result<(), GeneratorError> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(GeneratorError::ConfigIo)?;
        tracing::debug!(path = %path.display(), "saved generator profile");
        Ok(())
    }

    /// Build a generator drawing from the operating system's CSPRNG.
    pub fn build(&self) -> Result<PasswordGenerator<OsRng>, GeneratorError> {
        PasswordGenerator::from_config(self)
    }

    /// Build a generator drawing from `rng`.
    pub fn build_with_rng<R>(&self, rng: R) -> Result<PasswordGenerator<R>, GeneratorError>
    where
        R: RngCore + CryptoRng,
    {
        let mut generator = PasswordGenerator::with_rng(rng)?;
        generator.apply(self)?;
        Ok(generator)
    }
}
