//! Async random string result type implementing the unwrapping pattern

use crate::{RandomError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

const TASK_DROPPED: &str = "Random generation task dropped";

/// Concrete async random string result
pub struct AsyncRandomResult {
    receiver: oneshot::Receiver<Result<String>>,
}

/// Async random string result with user-defined result handler
pub struct AsyncRandomResultWithHandler<F> {
    inner: AsyncRandomResult,
    handler: Option<F>,
}

impl AsyncRandomResult {
    /// Create a new `AsyncRandomResult` from a oneshot receiver
    pub(crate) fn new(receiver: oneshot::Receiver<Result<String>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncRandomResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<String>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncRandomResult` that yields an error
    #[must_use]
    pub fn error(error: RandomError) -> Self {
        Self::ready(Err(error))
    }

    /// Add a result handler
    pub fn on_result<F, T>(self, handler: F) -> AsyncRandomResultWithHandler<F>
    where
        F: FnOnce(Result<String>) -> T,
    {
        AsyncRandomResultWithHandler {
            inner: self,
            handler: Some(handler),
        }
    }
}

impl Future for AsyncRandomResult {
    type Output = Result<String>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(RandomError::internal(TASK_DROPPED))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for AsyncRandomResultWithHandler<F>
where
    F: FnOnce(Result<String>) -> T + Unpin,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Handler already ran; never complete twice
        if this.handler.is_none() {
            return Poll::Pending;
        }

        match Pin::new(&mut this.inner).poll(cx) {
            Poll::Ready(result) => match this.handler.take() {
                Some(handler) => Poll::Ready(handler(result)),
                None => Poll::Pending,
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
