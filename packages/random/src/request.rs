//! Generation options with defaults and validation

use crate::charset::{Alphabet, Capitalisation, CharacterSetType};
use crate::{RandomError, Result};
use serde::{Deserialize, Serialize};

/// Default output length
pub const DEFAULT_LENGTH: usize = 32;

/// Longest output a single request may ask for (16 MiB of characters)
pub const MAX_LENGTH: usize = 16 * 1024 * 1024;

/// Options for a single random string generation
///
/// Every field is independently defaulted, so a partial options document such
/// as `{"length": 10}` resolves to a 10-character alphanumeric mixed-case
/// request. The capitalisation field accepts both `capitalisation` and
/// `capitalization`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    /// Number of characters to produce; must be in `1..=MAX_LENGTH`
    pub length: usize,

    /// Character set to sample from
    #[serde(rename = "charSetType", alias = "char_set_type", alias = "charset")]
    pub char_set_type: CharacterSetType,

    /// Letter-case policy
    #[serde(alias = "capitalization")]
    pub capitalisation: Capitalisation,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            char_set_type: CharacterSetType::default(),
            capitalisation: Capitalisation::default(),
        }
    }
}

impl GenerationRequest {
    /// Create a request with the default character set and capitalisation
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Set the output length
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the character set
    #[must_use]
    pub fn with_char_set_type(mut self, char_set_type: CharacterSetType) -> Self {
        self.char_set_type = char_set_type;
        self
    }

    /// Set the capitalisation
    #[must_use]
    pub fn with_capitalisation(mut self, capitalisation: Capitalisation) -> Self {
        self.capitalisation = capitalisation;
        self
    }

    /// US spelling of [`GenerationRequest::with_capitalisation`]
    #[must_use]
    pub fn with_capitalization(self, capitalization: Capitalisation) -> Self {
        self.with_capitalisation(capitalization)
    }

    /// Parse a JSON options document and validate it
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidOption` if the document is malformed, names
    /// an unknown character set or capitalisation, or requests a length outside
    /// `1..=MAX_LENGTH`.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Check the request before any bytes are drawn
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidOption` if `length` is zero or exceeds
    /// [`MAX_LENGTH`].
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(RandomError::invalid_option(
                "length must be greater than zero",
            ));
        }
        if self.length > MAX_LENGTH {
            return Err(RandomError::invalid_option(format!(
                "length {} exceeds the maximum of {MAX_LENGTH}",
                self.length
            )));
        }
        Ok(())
    }

    /// Alphabet this request samples from
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::resolve(self.char_set_type, self.capitalisation)
    }
}
