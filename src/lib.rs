//! Random password generation from a configurable set of character classes.
//!
//! ```no_run
//! let mut generator = passgen::PasswordGenerator::new()?;
//! generator
//!     .set_length(20)?
//!     .use_trim_similar_looking(true)
//!     .set_symbols("!#%&*+-=?@^_");
//! let password = generator.generate()?;
//! println!("{}", password.as_str());
//! # Ok::<(), passgen::GeneratorError>(())
//! ```

use std::io;

use serde::Serialize;

pub mod config;
pub mod generator;
pub mod key_space;
pub mod random;

pub use config::GeneratorConfig;
pub use generator::PasswordGenerator;
pub use random::SecureRandom;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("password length must be between 1 and 128 characters, got {0}")]
    InvalidLength(usize),
    #[error("no cryptographically secure random source is available: {0}")]
    UnsupportedPlatform(#[source] rand::Error),
    #[error(
        "no characters to generate a password from; enable a character class, or supply symbols \
         that survive trimming"
    )]
    EmptyKeySpace,
    #[error("I/O error on generator profile: {0}")]
    ConfigIo(#[source] io::Error),
    #[error("malformed generator profile: {0}")]
    ConfigParse(#[source] serde_yaml::Error),
    #[error("failed to serialize generator profile into YAML: {0}")]
    ConfigSerialize(#[source] serde_yaml::Error),
}

/// A generated password.
///
/// `Debug` output is redacted, so a stray `{:?}` won't leak it.
#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
