//! Injectable sources of time and randomness.
//!
//! Everything non-deterministic in the session core goes through these two
//! traits, so tests can pin delays and corpus picks. The production
//! implementations are [`TokioClock`] and [`ThreadRandom`]; under
//! `tokio::time::pause` the tokio clock becomes fully controllable.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

/// Boxed future returned by [`Clock::sleep`].
pub type SleepFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Source of wall-clock timestamps and suspensions.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Timestamp used for created-at fields.
    fn now(&self) -> DateTime<Utc>;
    /// Future that completes after `duration`.
    fn sleep(&self, duration: Duration) -> SleepFuture;
}

/// Clock backed by `chrono::Utc::now` and `tokio::time::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> SleepFuture {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Source of uniform random integers.
pub trait RandomSource: Send + Sync + fmt::Debug {
    /// Uniform value in `[0, upper)`; returns 0 when `upper` is 0.
    fn below(&self, upper: u64) -> u64;
}

/// Random source backed by `rand::thread_rng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, upper: u64) -> u64 {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Random source that always yields the same value (reduced modulo the bound).
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedRandom(pub u64);

impl RandomSource for FixedRandom {
    fn below(&self, upper: u64) -> u64 {
        if upper == 0 { 0 } else { self.0 % upper }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let rng = ThreadRandom;
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.below(1), 0);
        for _ in 0..200 {
            assert!(rng.below(5) < 5);
        }
    }

    #[test]
    fn test_fixed_random_wraps() {
        assert_eq!(FixedRandom(2).below(5), 2);
        assert_eq!(FixedRandom(7).below(5), 2);
        assert_eq!(FixedRandom(7).below(0), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_sleep_follows_paused_time() {
        let clock = TokioClock;
        let started = tokio::time::Instant::now();
        clock.sleep(Duration::from_millis(1500)).await;
        assert_eq!(started.elapsed(), Duration::from_millis(1500));
    }
}
