//! Random string builder

use crate::charset::{Capitalisation, CharacterSetType};
use crate::generator::RandomStringGenerator;
use crate::request::GenerationRequest;
use crate::source::{ByteSource, OsByteSource};
use crate::{AsyncRandomResult, Result};

/// Random string builder
pub struct RandomStringBuilder<S = OsByteSource> {
    generator: RandomStringGenerator<S>,
    request: GenerationRequest,
}

/// Random string builder with result handler
pub struct RandomStringBuilderWithHandler<S, F, T> {
    generator: RandomStringGenerator<S>,
    request: GenerationRequest,
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

impl Default for RandomStringBuilder<OsByteSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStringBuilder<OsByteSource> {
    /// Create new builder using the OS CSPRNG and default options
    #[must_use]
    pub fn new() -> Self {
        Self {
            generator: RandomStringGenerator::new(),
            request: GenerationRequest::default(),
        }
    }
}

impl<S: ByteSource> RandomStringBuilder<S> {
    /// Use a different byte source
    #[must_use]
    pub fn with_source<N: ByteSource>(self, source: N) -> RandomStringBuilder<N> {
        RandomStringBuilder {
            generator: RandomStringGenerator::with_source(source),
            request: self.request,
        }
    }

    /// Use an existing generator and its byte source
    #[must_use]
    pub fn with_generator<N: ByteSource>(
        self,
        generator: RandomStringGenerator<N>,
    ) -> RandomStringBuilder<N> {
        RandomStringBuilder {
            generator,
            request: self.request,
        }
    }

    /// Replace every option at once
    #[must_use]
    pub fn with_request(mut self, request: GenerationRequest) -> Self {
        self.request = request;
        self
    }

    /// Set the output length
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.request.length = length;
        self
    }

    /// Set the character set
    #[must_use]
    pub fn char_set(mut self, char_set_type: CharacterSetType) -> Self {
        self.request.char_set_type = char_set_type;
        self
    }

    /// Digits and letters
    #[must_use]
    pub fn alphanumeric(self) -> Self {
        self.char_set(CharacterSetType::Alphanumeric)
    }

    /// Letters only
    #[must_use]
    pub fn alphabetic(self) -> Self {
        self.char_set(CharacterSetType::Alphabetic)
    }

    /// Decimal digits only
    #[must_use]
    pub fn numeric(self) -> Self {
        self.char_set(CharacterSetType::Numeric)
    }

    /// Hexadecimal digits
    #[must_use]
    pub fn hex(self) -> Self {
        self.char_set(CharacterSetType::Hex)
    }

    /// `0` and `1`
    #[must_use]
    pub fn binary(self) -> Self {
        self.char_set(CharacterSetType::Binary)
    }

    /// Octal digits
    #[must_use]
    pub fn octal(self) -> Self {
        self.char_set(CharacterSetType::Octal)
    }

    /// Set the capitalisation
    #[must_use]
    pub fn capitalisation(mut self, capitalisation: Capitalisation) -> Self {
        self.request.capitalisation = capitalisation;
        self
    }

    /// US spelling of [`RandomStringBuilder::capitalisation`]
    #[must_use]
    pub fn capitalization(self, capitalization: Capitalisation) -> Self {
        self.capitalisation(capitalization)
    }

    /// Force uppercase
    #[must_use]
    pub fn uppercase(self) -> Self {
        self.capitalisation(Capitalisation::Uppercase)
    }

    /// Force lowercase
    #[must_use]
    pub fn lowercase(self) -> Self {
        self.capitalisation(Capitalisation::Lowercase)
    }

    /// Keep the character set's natural case
    #[must_use]
    pub fn mixed(self) -> Self {
        self.capitalisation(Capitalisation::Mixed)
    }

    /// Options collected so far
    #[must_use]
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Add `on_result` handler
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> RandomStringBuilderWithHandler<S, F, T>
    where
        F: FnOnce(Result<String>) -> T + Send + 'static,
        T: Send + 'static,
    {
        RandomStringBuilderWithHandler {
            generator: self.generator,
            request: self.request,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Generate on the current tokio runtime
    #[must_use]
    pub fn generate(self) -> AsyncRandomResult {
        self.generator.generate_future(self.request)
    }

    /// Generate on the calling thread
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidOption` if the options are invalid, or
    /// `RandomError::EntropyUnavailable` if the byte source fails.
    pub fn generate_blocking(self) -> Result<String> {
        self.generator.generate(&self.request)
    }
}

impl<S, F, T> RandomStringBuilderWithHandler<S, F, T>
where
    S: ByteSource,
    F: FnOnce(Result<String>) -> T + Send + 'static,
    T: Send + 'static,
{
    /// Generate and apply the result handler
    pub async fn generate(self) -> T {
        let result = self.generator.generate_with(self.request).await;
        (self.result_handler)(result)
    }
}
