//! The configurable password generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::config::GeneratorConfig;
use crate::key_space::{self, Classes};
use crate::random::{self, SecureRandom};
use crate::{GeneratorError, Secret};

pub const DEFAULT_LENGTH: usize = 12;
pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;

/// Generates passwords by sampling a key space built from the enabled character classes.
///
/// Every setter rebuilds the key space straight away, so [`key_space`](Self::key_space) always
/// reflects the current configuration.
///
/// Drawing a password mutates the random source, hence `generate` takes `&mut self`. The
/// generator is `Send`/`Sync` exactly when `R` is; sharing one across threads needs external
/// locking.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
    length: usize,
    classes: Classes,
    symbols: Vec<char>,
    key_space: Vec<char>,
}

impl PasswordGenerator<OsRng> {
    /// Create a generator with the default settings, drawing from the operating system's CSPRNG.
    ///
    /// Fails if the platform has no usable secure random source.
    pub fn new() -> Result<Self, GeneratorError> {
        Ok(Self::from_parts(random::os_rng()?))
    }

    /// Create a generator configured from `config`, drawing from the operating system's CSPRNG.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        let mut generator = Self::new()?;
        generator.apply(config)?;
        Ok(generator)
    }
}

impl<R> PasswordGenerator<R>
where
    R: RngCore + CryptoRng,
{
    /// Create a generator with the default settings, drawing from `rng`.
    pub fn with_rng(mut rng: R) -> Result<Self, GeneratorError> {
        random::probe(&mut rng)?;
        Ok(Self::from_parts(rng))
    }

    fn from_parts(rng: R) -> Self {
        let mut generator = PasswordGenerator {
            rng,
            length: DEFAULT_LENGTH,
            classes: Classes::default(),
            symbols: key_space::sanitize_symbols(key_space::DEFAULT_SYMBOLS),
            key_space: Vec::new(),
        };
        generator.refresh_key_space();
        generator
    }

    /// Generate a password of [`length`](Self::length) characters.
    ///
    /// Returns [`GeneratorError::EmptyKeySpace`] if the configuration leaves nothing to sample
    /// from.
    pub fn generate(&mut self) -> Result<Secret, GeneratorError> {
        sample(&mut self.rng, &self.key_space, self.length)
    }

    /// Generate `count` passwords, stopping at the first failure.
    pub fn generate_many(&mut self, count: usize) -> Result<Vec<Secret>, GeneratorError> {
        (0..count).map(|_| self.generate()).collect()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the password length; it must be within `1..=128`.
    pub fn set_length(&mut self, length: usize) -> Result<&mut Self, GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GeneratorError::InvalidLength(length));
        }
        self.length = length;
        self.refresh_key_space();
        Ok(self)
    }

    pub fn use_numeric(&mut self, enabled: bool) -> &mut Self {
        self.classes.numeric = enabled;
        self.refresh_key_space();
        self
    }

    pub fn use_lower_alphabet(&mut self, enabled: bool) -> &mut Self {
        self.classes.lower_alphabet = enabled;
        self.refresh_key_space();
        self
    }

    pub fn use_upper_alphabet(&mut self, enabled: bool) -> &mut Self {
        self.classes.upper_alphabet = enabled;
        self.refresh_key_space();
        self
    }

    pub fn use_symbols(&mut self, enabled: bool) -> &mut Self {
        self.classes.symbols = enabled;
        self.refresh_key_space();
        self
    }

    /// Leave out characters that are easily confused with others, such as `0` and `O`.
    pub fn use_trim_similar_looking(&mut self, enabled: bool) -> &mut Self {
        self.classes.trim_similar_looking = enabled;
        self.refresh_key_space();
        self
    }

    /// Replace the symbol class.
    ///
    /// Duplicates are dropped (first one wins), as are ASCII digits and letters. Any other
    /// character, multi-byte ones included, becomes a symbol.
    pub fn set_symbols(&mut self, symbols: &str) -> &mut Self {
        self.symbols = key_space::sanitize_symbols(symbols);
        self.refresh_key_space();
        self
    }

    /// Apply every setting in `config`, validating it the same way the setters do.
    pub fn apply(&mut self, config: &GeneratorConfig) -> Result<&mut Self, GeneratorError> {
        self.set_length(config.length)?
            .use_numeric(config.use_numeric)
            .use_lower_alphabet(config.use_lower_alphabet)
            .use_upper_alphabet(config.use_upper_alphabet)
            .use_symbols(config.use_symbols)
            .set_symbols(&config.custom_symbols)
            .use_trim_similar_looking(config.trim_similar_looking);
        Ok(self)
    }

    fn refresh_key_space(&mut self) {
        self.key_space = key_space::derive(&self.classes, &self.symbols);
        tracing::debug!(size = self.key_space.len(), "rebuilt key space");
    }
}

impl<R> PasswordGenerator<R> {
    /// The characters passwords are currently drawn from, in order.
    pub fn key_space(&self) -> &[char] {
        &self.key_space
    }

    /// The symbol class, after sanitizing.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn is_numeric_enabled(&self) -> bool {
        self.classes.numeric
    }

    pub fn is_lower_alphabet_enabled(&self) -> bool {
        self.classes.lower_alphabet
    }

    pub fn is_upper_alphabet_enabled(&self) -> bool {
        self.classes.upper_alphabet
    }

    pub fn is_symbols_enabled(&self) -> bool {
        self.classes.symbols
    }

    pub fn is_trim_similar_looking_enabled(&self) -> bool {
        self.classes.trim_similar_looking
    }

    /// A snapshot of the current settings, in a form that can be saved and re-applied.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.length,
            use_numeric: self.classes.numeric,
            use_lower_alphabet: self.classes.lower_alphabet,
            use_upper_alphabet: self.classes.upper_alphabet,
            use_symbols: self.classes.symbols,
            custom_symbols: self.symbols.iter().collect(),
            trim_similar_looking: self.classes.trim_similar_looking,
        }
    }
}

/// Draw `len` characters from `alphabet`, independently and with replacement.
fn sample<R>(rng: &mut R, alphabet: &[char], len: usize) -> Result<Secret, GeneratorError>
where
    R: SecureRandom + ?Sized,
{
    if alphabet.is_empty() {
        return Err(GeneratorError::EmptyKeySpace);
    }
    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        secret.push(alphabet[rng.index_below(alphabet.len())]);
    }
    Ok(Secret(secret))
}
