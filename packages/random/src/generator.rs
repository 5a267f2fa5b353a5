//! Random string generation driving the rejection sampler
//!
//! Blocking and suspending entry points share one algorithm: resolve the
//! alphabet, then draw, consume and refill until the requested length is
//! reached. Refill rounds are strictly sequential and the byte request is the
//! only suspension point. A byte source failure aborts the call; partial output
//! is never returned.

use crate::async_result::AsyncRandomResult;
use crate::request::GenerationRequest;
use crate::sampler::GenerationState;
use crate::source::{ByteSource, OsByteSource};
use crate::{RandomError, Result};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::oneshot;

const NO_RUNTIME: &str = "async generation requires a running tokio runtime";

static DEFAULT_GENERATOR: Lazy<RandomStringGenerator> = Lazy::new(RandomStringGenerator::new);

/// Reusable random string generator over a [`ByteSource`]
///
/// Cloning is cheap; clones share the underlying byte source. Each call owns
/// its own generation state, so one generator can serve concurrent calls.
#[derive(Debug)]
pub struct RandomStringGenerator<S = OsByteSource> {
    source: Arc<S>,
}

impl<S> Clone for RandomStringGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl Default for RandomStringGenerator<OsByteSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStringGenerator<OsByteSource> {
    /// Create a generator backed by the operating system CSPRNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(OsByteSource::new())
    }
}

impl<S: ByteSource> RandomStringGenerator<S> {
    /// Create a generator over a custom byte source
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self::from_arc(Arc::new(source))
    }

    /// Create a generator over a shared byte source
    #[must_use]
    pub fn from_arc(source: Arc<S>) -> Self {
        Self { source }
    }

    /// The underlying byte source
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generate a random string, blocking the calling thread
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidOption` if the request is invalid, or
    /// `RandomError::EntropyUnavailable` if the byte source fails.
    #[tracing::instrument(level = "debug", skip_all, fields(length = request.length))]
    pub fn generate(&self, request: &GenerationRequest) -> Result<String> {
        request.validate()?;
        let mut state = start(request);

        while !state.is_complete() {
            let requested = state.next_draw_size();
            let bytes = self.source.bytes(requested)?;
            check_draw(requested, &bytes)?;
            state.consume(&bytes);
        }

        Ok(finish(state))
    }

    /// Generate a random string, suspending only while bytes are fetched
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidOption` if the request is invalid, or
    /// `RandomError::EntropyUnavailable` if the byte source fails.
    #[tracing::instrument(level = "debug", skip_all, fields(length = request.length))]
    pub async fn generate_with(&self, request: GenerationRequest) -> Result<String> {
        request.validate()?;
        let mut state = start(&request);

        while !state.is_complete() {
            let requested = state.next_draw_size();
            let bytes = self.source.bytes_async(requested).await?;
            check_draw(requested, &bytes)?;
            state.consume(&bytes);
        }

        Ok(finish(state))
    }

    /// Generate on the current tokio runtime and hand the result to `continuation`
    ///
    /// The continuation runs exactly once, with either the complete string or
    /// the error that ended generation. If the generation task dies (for
    /// example a panicking byte source) it receives `RandomError::Internal`.
    /// Outside a tokio runtime it runs immediately with `RandomError::Internal`.
    pub fn generate_async<F>(&self, continuation: F, request: GenerationRequest)
    where
        F: FnOnce(Result<String>) + Send + 'static,
    {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            continuation(Err(RandomError::internal(NO_RUNTIME)));
            return;
        };

        // Awaited outside the generation task so a dead task still reports back
        let pending = self.generate_future(request);
        handle.spawn(async move {
            continuation(pending.await);
        });
    }

    /// Generate on the current tokio runtime, returning an awaitable result
    #[must_use]
    pub fn generate_future(&self, request: GenerationRequest) -> AsyncRandomResult {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return AsyncRandomResult::error(RandomError::internal(NO_RUNTIME));
        };

        let (tx, rx) = oneshot::channel();
        let generator = self.clone();
        handle.spawn(async move {
            let _ = tx.send(generator.generate_with(request).await);
        });

        AsyncRandomResult::new(rx)
    }
}

fn start(request: &GenerationRequest) -> GenerationState {
    let alphabet = request.alphabet();
    let state = GenerationState::new(alphabet, request.length);
    tracing::debug!(
        length = request.length,
        char_set = %request.char_set_type,
        capitalisation = %request.capitalisation,
        max_byte = state.max_byte(),
        "starting random string generation"
    );
    state
}

fn check_draw(requested: usize, bytes: &[u8]) -> Result<()> {
    if bytes.len() == requested {
        return Ok(());
    }
    tracing::warn!(requested, received = bytes.len(), "byte source returned a short draw");
    Err(RandomError::entropy_unavailable(format!(
        "byte source returned {} of {requested} requested bytes",
        bytes.len()
    )))
}

fn finish(state: GenerationState) -> String {
    tracing::debug!(
        rounds = state.rounds(),
        rejected = state.rejected(),
        "random string generation complete"
    );
    state.finish()
}

/// Generate a random string with the OS CSPRNG, blocking the calling thread
///
/// # Errors
///
/// Returns `RandomError::InvalidOption` if the request is invalid, or
/// `RandomError::EntropyUnavailable` if the OS cannot supply bytes.
pub fn generate_random_string(request: &GenerationRequest) -> Result<String> {
    DEFAULT_GENERATOR.generate(request)
}

/// Generate a random string with the OS CSPRNG and pass it to `continuation`
///
/// See [`RandomStringGenerator::generate_async`].
pub fn generate_random_string_async<F>(continuation: F, request: GenerationRequest)
where
    F: FnOnce(Result<String>) + Send + 'static,
{
    DEFAULT_GENERATOR.generate_async(continuation, request);
}
