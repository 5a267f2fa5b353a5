//! Character set definitions and alphabet resolution

use crate::RandomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DIGITS: &str = "0123456789";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const HEX_LETTERS: &str = "abcdef";
const BINARY: &str = "01";
const OCTAL: &str = "01234567";

/// Supported character set families
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSetType {
    /// Digits, lowercase and uppercase letters (62 characters)
    #[default]
    #[serde(alias = "alnum")]
    Alphanumeric,

    /// Lowercase and uppercase letters (52 characters)
    #[serde(alias = "alpha")]
    Alphabetic,

    /// Decimal digits (10 characters)
    #[serde(alias = "digits")]
    Numeric,

    /// Hexadecimal digits (16 characters)
    #[serde(alias = "hexadecimal")]
    Hex,

    /// `0` and `1`
    #[serde(alias = "bin")]
    Binary,

    /// Octal digits (8 characters)
    #[serde(alias = "oct")]
    Octal,
}

impl CharacterSetType {
    /// Canonical lowercase name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Alphabetic => "alphabetic",
            Self::Numeric => "numeric",
            Self::Hex => "hex",
            Self::Binary => "binary",
            Self::Octal => "octal",
        }
    }

    /// Every supported character set
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Alphanumeric,
            Self::Alphabetic,
            Self::Numeric,
            Self::Hex,
            Self::Binary,
            Self::Octal,
        ]
    }

    /// Pool composed for this set before any capitalisation is applied
    fn composed_pool(self) -> String {
        match self {
            Self::Alphanumeric => {
                [DIGITS, LOWERCASE, LOWERCASE.to_ascii_uppercase().as_str()].concat()
            }
            Self::Alphabetic => [LOWERCASE, LOWERCASE.to_ascii_uppercase().as_str()].concat(),
            Self::Numeric => DIGITS.to_string(),
            Self::Hex => [DIGITS, HEX_LETTERS].concat(),
            Self::Binary => BINARY.to_string(),
            Self::Octal => OCTAL.to_string(),
        }
    }
}

impl fmt::Display for CharacterSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterSetType {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphanumeric" | "alnum" => Ok(Self::Alphanumeric),
            "alphabetic" | "alpha" => Ok(Self::Alphabetic),
            "numeric" | "digits" => Ok(Self::Numeric),
            "hex" | "hexadecimal" => Ok(Self::Hex),
            "binary" | "bin" => Ok(Self::Binary),
            "octal" | "oct" => Ok(Self::Octal),
            _ => Err(RandomError::invalid_option(format!(
                "unknown character set type: {s}"
            ))),
        }
    }
}

/// Letter-case policy applied to a composed character pool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capitalisation {
    /// Leave the composed pool untouched
    #[default]
    Mixed,

    /// Force every character to uppercase
    #[serde(alias = "upper")]
    Uppercase,

    /// Force every character to lowercase
    #[serde(alias = "lower")]
    Lowercase,
}

/// US spelling of [`Capitalisation`]; both names refer to the same type.
pub type Capitalization = Capitalisation;

impl Capitalisation {
    /// Canonical lowercase name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
        }
    }

    /// Every supported capitalisation
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Mixed, Self::Uppercase, Self::Lowercase]
    }

    fn apply(self, c: char) -> char {
        match self {
            Self::Mixed => c,
            Self::Uppercase => c.to_ascii_uppercase(),
            Self::Lowercase => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Capitalisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capitalisation {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(Self::Mixed),
            "uppercase" | "upper" => Ok(Self::Uppercase),
            "lowercase" | "lower" => Ok(Self::Lowercase),
            _ => Err(RandomError::invalid_option(format!(
                "unknown capitalisation: {s}"
            ))),
        }
    }
}

/// Ordered sequence of unique ASCII characters eligible for sampling
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: String,
}

impl Alphabet {
    /// Resolve the alphabet for a character set and capitalisation
    #[must_use]
    pub fn resolve(char_set_type: CharacterSetType, capitalisation: Capitalisation) -> Self {
        let mut chars = String::with_capacity(62);
        // Case folding can map two pool entries onto one character; first one wins.
        for c in char_set_type.composed_pool().chars().map(|c| capitalisation.apply(c)) {
            if !chars.contains(c) {
                chars.push(c);
            }
        }
        Self { chars }
    }

    /// Number of characters in the alphabet
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for resolved alphabets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.as_bytes().get(index).map(|&b| char::from(b))
    }

    /// Whether `c` belongs to the alphabet
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }

    /// The alphabet as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.chars.as_bytes()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chars)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.chars
    }
}

impl AsRef<str> for Alphabet {
    fn as_ref(&self) -> &str {
        &self.chars
    }
}

/// Resolve the raw alphabet for a character set and capitalisation
#[must_use]
pub fn resolve_character_set(
    char_set_type: CharacterSetType,
    capitalisation: Capitalisation,
) -> String {
    Alphabet::resolve(char_set_type, capitalisation).into()
}
