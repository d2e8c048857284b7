// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use crate::models::GenerationSettings;

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easy to confuse when a password is copied by hand.
pub const SIMILAR_CHARACTERS: &str = "Il1O0";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {minimum} characters for security (got {length}).")]
    LengthTooShort { length: usize, minimum: usize },

    #[error("No character set selected. Please enable at least one character type.")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// The characters eligible for random selection under a given set of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn build(settings: &GenerationSettings) -> Self {
        let mut chars = Vec::new();

        if settings.include_upper {
            chars.extend(UPPERCASE.chars());
        }
        if settings.include_lower {
            chars.extend(LOWERCASE.chars());
        }
        if settings.include_digits {
            chars.extend(DIGITS.chars());
        }
        if settings.include_symbols {
            chars.extend(SYMBOLS.chars());
        }

        // Applied to the assembled pool, not per class
        if settings.exclude_similar {
            chars.retain(|c| !SIMILAR_CHARACTERS.contains(*c));
        }

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

/// Produces passwords from a cryptographically secure random source.
///
/// The default generator reads from the operating system via [`OsRng`]. Any other
/// source must also be a [`CryptoRng`], so a seeded statistical generator cannot be
/// swapped in by accident.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, settings: &GenerationSettings) -> Result<String> {
        if settings.length < MIN_PASSWORD_LENGTH {
            return Err(GeneratorError::LengthTooShort {
                length: settings.length,
                minimum: MIN_PASSWORD_LENGTH,
            });
        }

        let pool = CharacterPool::build(settings);
        if pool.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }

        log::debug!(
            "Generating password of length {} from a pool of {} characters",
            settings.length,
            pool.len()
        );

        let chars = pool.as_slice();
        let index = Uniform::new(0, chars.len());
        let password = (0..settings.length)
            .map(|_| chars[index.sample(&mut self.rng)])
            .collect();

        Ok(password)
    }
}

/// Generate a single password using the operating system's random source.
pub fn generate_password(settings: &GenerationSettings) -> Result<String> {
    PasswordGenerator::new().generate_password(settings)
}
