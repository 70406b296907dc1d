#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

/// Latency and failure injection policy for the simulated API.
///
/// Kept as an explicit trait object on the app state so tests can substitute
/// a deterministic zero-delay / never-fail policy.
#[async_trait]
pub trait ChaosPolicy: Send + Sync {
    /// Samples the artificial latency for one request.
    fn sample_delay(&self) -> Duration;

    /// Rolls the per-endpoint failure probability.
    fn should_fail(&self, rate: f64) -> bool;

    /// Sleeps for one sampled latency window. Once this begins the request
    /// always resolves or rejects; there is no cancellation.
    async fn delay(&self) {
        let d = self.sample_delay();
        if !d.is_zero() {
            tokio::time::sleep(d).await;
        }
    }
}

/// Production policy: uniform latency in [min, max) and uniform failure rolls.
pub struct InjectedChaos {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
}

impl Default for InjectedChaos {
    fn default() -> Self {
        InjectedChaos {
            min_latency_ms: 200,
            max_latency_ms: 1200,
        }
    }
}

#[async_trait]
impl ChaosPolicy for InjectedChaos {
    fn sample_delay(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_latency_ms..self.max_latency_ms);
        Duration::from_millis(ms)
    }

    fn should_fail(&self, rate: f64) -> bool {
        rand::thread_rng().gen::<f64>() < rate
    }
}

/// Zero-delay, never-fail policy for tests.
pub struct NoChaos;

#[async_trait]
impl ChaosPolicy for NoChaos {
    fn sample_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn should_fail(&self, _rate: f64) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injected_delay_within_bounds() {
        let chaos = InjectedChaos::default();
        for _ in 0..100 {
            let d = chaos.sample_delay();
            assert!(d >= Duration::from_millis(200));
            assert!(d < Duration::from_millis(1200));
        }
    }

    #[test]
    fn test_failure_roll_extremes() {
        let chaos = InjectedChaos::default();
        assert!(!chaos.should_fail(0.0));
        assert!(chaos.should_fail(1.0));
    }

    #[test]
    fn test_no_chaos_is_deterministic() {
        assert!(NoChaos.sample_delay().is_zero());
        assert!(!NoChaos.should_fail(1.0));
    }
}
