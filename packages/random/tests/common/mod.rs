//! Byte source test doubles shared by the integration tests

#![allow(dead_code)]

use cryypt_random::{ByteFuture, ByteSource, RandomError, Result};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use zeroize::Zeroizing;

/// Serves bytes from a fixed script and records every request size
pub struct ScriptedSource {
    script: Mutex<VecDeque<u8>>,
    requests: Mutex<Vec<usize>>,
}

impl ScriptedSource {
    pub fn new(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: Mutex::new(bytes.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sizes of every byte request made so far, in order
    pub fn requests(&self) -> Vec<usize> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl ByteSource for ScriptedSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        self.requests.lock().expect("requests lock").push(dest.len());
        let mut script = self.script.lock().expect("script lock");
        if script.len() < dest.len() {
            return Err(RandomError::entropy_unavailable("script exhausted"));
        }
        for slot in dest.iter_mut() {
            *slot = script.pop_front().expect("length checked above");
        }
        Ok(())
    }

    fn bytes_async(&self, len: usize) -> ByteFuture {
        let result = self.bytes(len);
        Box::pin(async move { result })
    }
}

/// Fails every request and counts how often it was asked
#[derive(Default)]
pub struct FailingSource {
    calls: AtomicUsize,
}

impl FailingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ByteSource for FailingSource {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RandomError::entropy_unavailable("simulated entropy failure"))
    }

    fn bytes_async(&self, len: usize) -> ByteFuture {
        let result = self.bytes(len);
        Box::pin(async move {
            tokio::task::yield_now().await;
            result
        })
    }
}

/// Panics on every request, simulating a broken byte source implementation
pub struct PanickingSource;

fn explode() -> Result<Zeroizing<Vec<u8>>> {
    panic!("byte source exploded")
}

impl ByteSource for PanickingSource {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        explode().map(|_| ())
    }

    fn bytes_async(&self, _len: usize) -> ByteFuture {
        Box::pin(async move { explode() })
    }
}

/// Claims success but hands back fewer bytes than requested
#[derive(Default)]
pub struct ShortSource {
    calls: AtomicUsize,
}

impl ShortSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ByteSource for ShortSource {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        Ok(())
    }

    fn bytes(&self, _len: usize) -> Result<Zeroizing<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Zeroizing::new(Vec::new()))
    }

    fn bytes_async(&self, len: usize) -> ByteFuture {
        let result = self.bytes(len);
        Box::pin(async move { result })
    }
}
