use std::time::Duration;

use rand::Rng;

use crate::app::{NewsdeskError, Result};

/// Simulated network conditions: random latency and random failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultInjector {
    /// Chance that a request is delayed at all
    pub delay_probability: f64,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    /// Chance that a request fails outright
    pub error_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub delay: Option<Duration>,
    pub fail: bool,
}

impl FaultInjector {
    pub fn new(delay_probability: f64, delay_min_ms: u64, delay_max_ms: u64, error_rate: f64) -> Self {
        Self {
            delay_probability,
            delay_min_ms,
            delay_max_ms,
            error_rate,
        }
    }

    /// No delay, no failures.
    pub fn disabled() -> Self {
        Self::new(0.0, 0, 0, 0.0)
    }

    pub fn is_disabled(&self) -> bool {
        is_off(self.delay_probability) && is_off(self.error_rate)
    }

    /// Decide the fate of one request.
    pub fn roll(&self) -> Fault {
        let mut rng = rand::thread_rng();

        let delay = if chance(&mut rng, self.delay_probability) {
            let ms = if self.delay_max_ms > self.delay_min_ms {
                rng.gen_range(self.delay_min_ms..self.delay_max_ms)
            } else {
                self.delay_min_ms
            };
            Some(Duration::from_millis(ms))
        } else {
            None
        };

        Fault {
            delay,
            fail: chance(&mut rng, self.error_rate),
        }
    }

    /// Sleep for the rolled delay, then fail if the roll says so.
    pub async fn apply(&self) -> Result<()> {
        let fault = self.roll();
        if let Some(delay) = fault.delay {
            tokio::time::sleep(delay).await;
        }
        if fault.fail {
            return Err(NewsdeskError::Simulated("Simulated network error".into()));
        }
        Ok(())
    }
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::disabled()
    }
}

fn is_off(probability: f64) -> bool {
    probability.is_nan() || probability <= 0.0
}

fn chance<R: Rng>(rng: &mut R, probability: f64) -> bool {
    if is_off(probability) {
        false
    } else if probability >= 1.0 {
        true
    } else {
        rng.gen_bool(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_never_faults() {
        let faults = FaultInjector::disabled();
        assert!(faults.is_disabled());
        for _ in 0..100 {
            assert_eq!(faults.roll(), Fault { delay: None, fail: false });
        }
    }

    #[test]
    fn test_certain_failure() {
        let faults = FaultInjector::new(0.0, 0, 0, 1.0);
        assert!(faults.roll().fail);
    }

    #[test]
    fn test_delay_within_range() {
        let faults = FaultInjector::new(1.0, 100, 500, 0.0);
        for _ in 0..50 {
            let delay = faults.roll().delay.unwrap();
            assert!(delay >= Duration::from_millis(100));
            assert!(delay < Duration::from_millis(500));
        }
    }

    #[test]
    fn test_degenerate_range_uses_min() {
        let faults = FaultInjector::new(1.0, 30, 30, 0.0);
        assert_eq!(faults.roll().delay, Some(Duration::from_millis(30)));
    }

    #[test]
    fn test_nan_probability_is_off() {
        let faults = FaultInjector::new(f64::NAN, 0, 10, f64::NAN);
        assert!(faults.is_disabled());
        assert_eq!(faults.roll(), Fault { delay: None, fail: false });
    }

    #[tokio::test]
    async fn test_apply_reports_simulated_error() {
        let faults = FaultInjector::new(0.0, 0, 0, 1.0);
        let err = faults.apply().await.unwrap_err();
        assert!(matches!(err, NewsdeskError::Simulated(_)));
        assert!(FaultInjector::disabled().apply().await.is_ok());
    }
}
