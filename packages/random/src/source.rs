//! Cryptographically secure byte sources
//!
//! A [`ByteSource`] supplies random bytes either by blocking the calling thread
//! or through a boxed future. Failures are reported as
//! [`RandomError::EntropyUnavailable`]; a source never falls back to weaker
//! randomness.

use crate::{RandomError, Result};
use rand::RngCore;
use std::future::Future;
use std::pin::Pin;
use zeroize::Zeroizing;

/// Future returned by [`ByteSource::bytes_async`]
pub type ByteFuture = Pin<Box<dyn Future<Output = Result<Zeroizing<Vec<u8>>>> + Send + 'static>>;

/// Provider of cryptographically secure random bytes (avoiding `async_trait`)
pub trait ByteSource: Send + Sync + 'static {
    /// Fill `dest` with random bytes, blocking the caller
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EntropyUnavailable` if the source cannot supply bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;

    /// Produce `len` random bytes without blocking the async runtime
    fn bytes_async(&self, len: usize) -> ByteFuture;

    /// Produce `len` random bytes, blocking the caller
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EntropyUnavailable` if the source cannot supply bytes.
    fn bytes(&self, len: usize) -> Result<Zeroizing<Vec<u8>>> {
        let mut buf = Zeroizing::new(vec![0u8; len]);
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

/// Operating system CSPRNG via `getrandom`
///
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `ProcessPrng`
#[derive(Clone, Copy, Debug, Default)]
pub struct OsByteSource;

impl OsByteSource {
    /// Create a new OS byte source
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for OsByteSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest).map_err(|e| {
            tracing::warn!(error = %e, "OS entropy source failed");
            RandomError::from(e)
        })
    }

    fn bytes_async(&self, len: usize) -> ByteFuture {
        let source = *self;
        Box::pin(async move {
            // The syscall may block until the kernel pool is seeded
            tokio::task::spawn_blocking(move || source.bytes(len))
                .await
                .map_err(|e| RandomError::internal(format!("entropy task failed: {e}")))?
        })
    }
}

/// Thread-local userspace CSPRNG seeded from the operating system
///
/// Backed by `rand::rng()`, a ChaCha-based generator that reseeds itself from
/// the OS. Faster than [`OsByteSource`] for bulk generation.
///
/// # Panics
///
/// `rand::rng()` panics when the OS cannot provide the initial seed for the
/// calling thread, so this source cannot report that failure as
/// `RandomError::EntropyUnavailable`. Use [`OsByteSource`] where an entropy
/// failure must come back as an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    /// Create a new thread-local byte source
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for ThreadRngSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        rand::rng().fill_bytes(dest);
        Ok(())
    }

    fn bytes_async(&self, len: usize) -> ByteFuture {
        let result = self.bytes(len);
        Box::pin(async move { result })
    }
}
