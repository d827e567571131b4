//! Simulated latency steps.
//!
//! Some flows pretend to do work (the framework hand-off confirmation). The
//! wait is an explicit value so tests can use [`SimulatedLatency::none`].

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Zero-duration latency; `elapse` returns without yielding to a timer.
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Waits out the simulated delay.
    pub async fn elapse(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_elapse_waits_for_duration() {
        let start = tokio::time::Instant::now();
        SimulatedLatency::from_millis(2000).elapse().await;
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_none_is_immediate() {
        let latency = SimulatedLatency::none();
        latency.elapse().await;
        assert_eq!(latency.duration(), Duration::ZERO);
    }
}
