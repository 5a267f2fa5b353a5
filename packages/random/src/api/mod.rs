//! Fluent random string API
//!
//! Usage: `Random::string().length(16).hex().uppercase().generate().await`

pub mod string_builder;

pub use string_builder::{RandomStringBuilder, RandomStringBuilderWithHandler};

use crate::charset::{resolve_character_set, Capitalisation, CharacterSetType};

/// Entry point for random generation
pub struct Random;

impl Random {
    /// Build a random string
    #[must_use]
    pub fn string() -> RandomStringBuilder {
        RandomStringBuilder::new()
    }

    /// Raw alphabet for a character set and capitalisation
    #[must_use]
    pub fn charset(char_set_type: CharacterSetType, capitalisation: Capitalisation) -> String {
        resolve_character_set(char_set_type, capitalisation)
    }
}
