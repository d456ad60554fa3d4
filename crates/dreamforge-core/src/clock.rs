//! Injectable delay for simulated generation latency
//!
//! The engine never sleeps directly; it awaits a [`Delay`]. Production code
//! uses [`TokioDelay`], tests use [`InstantDelay`] so a full generation runs
//! without waiting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;

/// Something that can wait for a fixed duration
pub trait Delay: Send + Sync {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Real wall-clock delay backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed()
    }
}

/// Completes immediately, counting how often it was awaited
#[derive(Debug, Clone, Default)]
pub struct InstantDelay {
    calls: Arc<AtomicUsize>,
}

impl InstantDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `sleep` was called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Delay for InstantDelay {
    fn sleep(&self, _duration: Duration) -> BoxFuture<'static, ()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_delay_counts_calls() {
        let delay = InstantDelay::new();
        delay.sleep(Duration::from_secs(3600)).await;
        delay.sleep(Duration::from_secs(3600)).await;
        assert_eq!(delay.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits() {
        let start = tokio::time::Instant::now();
        TokioDelay.sleep(Duration::from_millis(3000)).await;
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }
}
