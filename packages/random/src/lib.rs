//! # Cryypt Random
//!
//! Cryptographically secure random strings over configurable alphabets.
//!
//! Random bytes are mapped onto the alphabet with rejection sampling: bytes at
//! or above the largest multiple of the alphabet size are discarded, so every
//! character is equally likely regardless of alphabet size.
//!
//! ## Features
//!
//! - **Character sets**: alphanumeric, alphabetic, numeric, hex, binary, octal
//! - **Capitalisation**: mixed, uppercase, lowercase (either spelling accepted)
//! - **Blocking and async**: same algorithm, byte fetch is the only await point
//! - **Pluggable entropy**: any [`ByteSource`], OS CSPRNG by default
//!
//! ## Quick Start
//!
//! ```rust
//! use cryypt_random::{generate_random_string, CharacterSetType, GenerationRequest};
//!
//! # fn main() -> cryypt_random::Result<()> {
//! let request = GenerationRequest::new(10).with_char_set_type(CharacterSetType::Numeric);
//! let pin = generate_random_string(&request)?;
//! assert_eq!(pin.len(), 10);
//! assert!(pin.chars().all(|c| c.is_ascii_digit()));
//! # Ok(())
//! # }
//! ```
//!
//! ```rust,no_run
//! use cryypt_random::Random;
//!
//! # #[tokio::main]
//! # async fn main() -> cryypt_random::Result<()> {
//! let token = Random::string().length(16).hex().uppercase().generate().await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod charset;
pub mod error;
pub mod generator;
pub mod request;
pub mod sampler;
pub mod source;

// Re-export core types
pub use error::{RandomError, Result};

pub use api::{Random, RandomStringBuilder, RandomStringBuilderWithHandler};
pub use async_result::{AsyncRandomResult, AsyncRandomResultWithHandler};
pub use charset::{
    resolve_character_set, Alphabet, Capitalisation, Capitalization, CharacterSetType,
};
pub use generator::{
    generate_random_string, generate_random_string_async, RandomStringGenerator,
};
pub use request::{GenerationRequest, DEFAULT_LENGTH, MAX_LENGTH};
pub use source::{ByteFuture, ByteSource, OsByteSource, ThreadRngSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        generate_random_string, resolve_character_set, Capitalisation, Capitalization,
        CharacterSetType, GenerationRequest, Random, RandomError, RandomStringGenerator, Result,
    };
}
