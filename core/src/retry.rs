//! Retry policy: configuration, evaluation, and the per-call state machine.
//!
//! # Design
//! The evaluator is generic over endpoints. A `RetryTracker` is created per
//! call and consulted after every failed attempt; the executor owns the
//! loop and the sleeping. Delays use exponential backoff with "equal
//! jitter": the capped exponential delay `d` becomes `d/2 + uniform(0, d/2)`.
//!
//! `max_elapsed` bounds the sum of planned backoff delays, not wall-clock
//! time spent inside the transport.

use std::collections::BTreeSet;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Upper bound on a server-supplied `retry-after` delay.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// A service error code that is retryable only together with its status,
/// e.g. `409 IncorrectState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryableServiceCode {
    pub status: u16,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Backoff {
    None,
    Fixed {
        #[serde(rename = "delayMs", with = "duration_ms")]
        delay: Duration,
    },
    Exponential {
        #[serde(rename = "baseMs", with = "duration_ms")]
        base: Duration,
        multiplier: f64,
        #[serde(rename = "maxMs", with = "duration_ms")]
        max: Duration,
        jitter: bool,
    },
}

impl Backoff {
    /// Delay before the next attempt, after `failed_attempts` failures (>= 1).
    pub fn delay(&self, failed_attempts: u32) -> Duration {
        match self {
            Backoff::None => Duration::ZERO,
            Backoff::Fixed { delay } => *delay,
            Backoff::Exponential {
                base,
                multiplier,
                max,
                jitter,
            } => {
                let exponent = i32::try_from(failed_attempts.saturating_sub(1)).unwrap_or(i32::MAX);
                let multiplier = if multiplier.is_finite() && *multiplier >= 1.0 {
                    *multiplier
                } else {
                    1.0
                };
                let raw = base.as_secs_f64() * multiplier.powi(exponent);
                let capped = if raw.is_finite() {
                    raw.min(max.as_secs_f64()).max(0.0)
                } else {
                    max.as_secs_f64()
                };
                let capped = Duration::from_secs_f64(capped);
                if *jitter {
                    let half = capped / 2;
                    let spread = half.as_millis() as u64;
                    let extra = if spread == 0 {
                        0
                    } else {
                        rand::thread_rng().gen_range(0..=spread)
                    };
                    half + Duration::from_millis(extra)
                } else {
                    capped
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryConfig {
    /// Total attempts including the first one. `1` disables retries.
    pub max_attempts: u32,
    pub backoff: Backoff,
    pub retryable_statuses: BTreeSet<u16>,
    pub retryable_service_codes: Vec<RetryableServiceCode>,
    pub retry_transport_errors: bool,
    #[serde(rename = "maxElapsedMs", with = "option_duration_ms")]
    pub max_elapsed: Option<Duration>,
    /// Use the `retry-after` header of 429/503 responses instead of backoff.
    pub honor_retry_after: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            backoff: Backoff::Exponential {
                base: Duration::from_secs(1),
                multiplier: 2.0,
                max: Duration::from_secs(30),
                jitter: true,
            },
            retryable_statuses: [429, 500, 502, 503, 504].into_iter().collect(),
            retryable_service_codes: vec![RetryableServiceCode {
                status: 409,
                code: "IncorrectState".to_string(),
            }],
            retry_transport_errors: true,
            max_elapsed: Some(Duration::from_secs(600)),
            honor_retry_after: true,
        }
    }
}

impl RetryConfig {
    /// A single attempt, no retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff: Backoff::None,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_max_elapsed(mut self, max_elapsed: Option<Duration>) -> Self {
        self.max_elapsed = max_elapsed;
        self
    }

    /// Whether `error` is transient under this policy.
    pub fn is_retryable(&self, error: &ApiError) -> bool {
        match error {
            ApiError::Transport(_) => self.retry_transport_errors,
            ApiError::Service(e) => {
                self.retryable_statuses.contains(&e.status)
                    || self
                        .retryable_service_codes
                        .iter()
                        .any(|c| c.status == e.status && c.code == e.code)
            }
            _ => false,
        }
    }

    fn delay_for(&self, failed_attempts: u32, error: &ApiError) -> Duration {
        if self.honor_retry_after {
            if let ApiError::Service(e) = error {
                if matches!(e.status, 429 | 503) {
                    if let Some(after) = e.retry_after {
                        return after.min(MAX_RETRY_AFTER);
                    }
                }
            }
        }
        self.backoff.delay(failed_attempts)
    }
}

/// Call-level retry choice. `Disabled` is the explicit "no retries" override
/// and wins over any client default.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetryOverride {
    #[default]
    Inherit,
    Disabled,
    Config(RetryConfig),
}

impl RetryOverride {
    pub fn resolve<'a>(&'a self, default: Option<&'a RetryConfig>) -> Option<&'a RetryConfig> {
        match self {
            RetryOverride::Inherit => default,
            RetryOverride::Disabled => None,
            RetryOverride::Config(config) => Some(config),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    NotStarted,
    Attempting,
    Succeeded,
    /// The attempt or elapsed-time budget ran out on a retryable failure.
    Exhausted,
    /// The last failure is not retryable.
    FailedPermanently,
}

impl RetryState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RetryState::Succeeded | RetryState::Exhausted | RetryState::FailedPermanently
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryDecision {
    pub retry: bool,
    pub delay: Duration,
}

impl RetryDecision {
    const STOP: RetryDecision = RetryDecision {
        retry: false,
        delay: Duration::ZERO,
    };
}

/// Per-call retry state machine.
#[derive(Debug)]
pub struct RetryTracker<'a> {
    config: Option<&'a RetryConfig>,
    attempts: u32,
    planned_delay: Duration,
    state: RetryState,
}

impl<'a> RetryTracker<'a> {
    /// `None` means a single attempt.
    pub fn new(config: Option<&'a RetryConfig>) -> Self {
        Self {
            config,
            attempts: 0,
            planned_delay: Duration::ZERO,
            state: RetryState::NotStarted,
        }
    }

    pub fn state(&self) -> RetryState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.map_or(1, |c| c.max_attempts.max(1))
    }

    /// Returns the 1-based number of the attempt being started.
    pub fn begin_attempt(&mut self) -> u32 {
        debug_assert!(!self.state.is_terminal(), "attempt started after terminal state");
        self.state = RetryState::Attempting;
        self.attempts += 1;
        self.attempts
    }

    pub fn record_success(&mut self) {
        self.state = RetryState::Succeeded;
    }

    pub fn record_failure(&mut self, error: &ApiError) -> RetryDecision {
        let Some(config) = self.config else {
            self.state = if RetryConfig::no_retry().is_retryable(error) {
                RetryState::Exhausted
            } else {
                RetryState::FailedPermanently
            };
            return RetryDecision::STOP;
        };

        if !config.is_retryable(error) {
            self.state = RetryState::FailedPermanently;
            return RetryDecision::STOP;
        }
        if self.attempts >= self.max_attempts() {
            self.state = RetryState::Exhausted;
            return RetryDecision::STOP;
        }

        let delay = config.delay_for(self.attempts, error);
        let planned = self.planned_delay.saturating_add(delay);
        if config.max_elapsed.is_some_and(|max_elapsed| planned > max_elapsed) {
            self.state = RetryState::Exhausted;
            return RetryDecision::STOP;
        }
        self.planned_delay = planned;
        self.state = RetryState::Attempting;
        RetryDecision { retry: true, delay }
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

mod option_duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        value
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Option::<u64>::deserialize(deserializer).map(|ms| ms.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ServiceError, TransportError, TransportErrorKind};

    fn service(status: u16, code: &str) -> ApiError {
        ApiError::Service(ServiceError {
            status,
            code: code.to_string(),
            message: String::new(),
            opc_request_id: None,
            operation: "Op",
            request_endpoint: String::new(),
            retry_after: None,
        })
    }

    fn transport() -> ApiError {
        ApiError::Transport(TransportError::new(
            TransportErrorKind::Connect,
            "https://example",
            "refused",
        ))
    }

    fn fast(max_attempts: u32) -> RetryConfig {
        RetryConfig::default()
            .with_max_attempts(max_attempts)
            .with_backoff(Backoff::None)
    }

    #[test]
    fn default_policy_classification() {
        let config = RetryConfig::default();
        assert!(config.is_retryable(&transport()));
        assert!(config.is_retryable(&service(429, "TooManyRequests")));
        assert!(config.is_retryable(&service(503, "ServiceUnavailable")));
        assert!(config.is_retryable(&service(409, "IncorrectState")));
        assert!(!config.is_retryable(&service(409, "Conflict")));
        assert!(!config.is_retryable(&service(400, "InvalidParameter")));
        assert!(!config.is_retryable(&service(404, "NotAuthorizedOrNotFound")));
        assert!(!config.is_retryable(&ApiError::invalid_argument("x", "blank")));
    }

    #[test]
    fn tracker_exhausts_after_max_attempts() {
        let config = fast(3);
        let mut tracker = RetryTracker::new(Some(&config));
        assert_eq!(tracker.state(), RetryState::NotStarted);

        for attempt in 1..=2 {
            assert_eq!(tracker.begin_attempt(), attempt);
            assert!(tracker.record_failure(&transport()).retry);
            assert_eq!(tracker.state(), RetryState::Attempting);
        }
        tracker.begin_attempt();
        assert!(!tracker.record_failure(&transport()).retry);
        assert_eq!(tracker.state(), RetryState::Exhausted);
        assert_eq!(tracker.attempts(), 3);
    }

    #[test]
    fn non_retryable_failure_is_permanent() {
        let config = fast(5);
        let mut tracker = RetryTracker::new(Some(&config));
        tracker.begin_attempt();
        assert!(!tracker.record_failure(&service(400, "InvalidParameter")).retry);
        assert_eq!(tracker.state(), RetryState::FailedPermanently);
    }

    #[test]
    fn success_is_terminal() {
        let config = fast(5);
        let mut tracker = RetryTracker::new(Some(&config));
        tracker.begin_attempt();
        tracker.record_success();
        assert_eq!(tracker.state(), RetryState::Succeeded);
        assert!(tracker.state().is_terminal());
    }

    #[test]
    fn no_config_means_single_attempt() {
        let mut tracker = RetryTracker::new(None);
        assert_eq!(tracker.max_attempts(), 1);
        tracker.begin_attempt();
        assert!(!tracker.record_failure(&transport()).retry);
        assert_eq!(tracker.state(), RetryState::Exhausted);
    }

    #[test]
    fn no_config_still_distinguishes_permanent_failures() {
        let bad_request = service(400, "InvalidParameter");

        let mut tracker = RetryTracker::new(None);
        tracker.begin_attempt();
        assert!(!tracker.record_failure(&bad_request).retry);
        assert_eq!(tracker.state(), RetryState::FailedPermanently);

        let config = RetryConfig::default();
        let mut tracker = RetryTracker::new(Some(&config));
        tracker.begin_attempt();
        tracker.record_failure(&bad_request);
        assert_eq!(tracker.state(), RetryState::FailedPermanently);

        let mut tracker = RetryTracker::new(None);
        tracker.begin_attempt();
        tracker.record_failure(&service(503, "ServiceUnavailable"));
        assert_eq!(tracker.state(), RetryState::Exhausted);
    }

    #[test]
    fn disabled_override_ignores_client_default() {
        let default = RetryConfig::default();
        assert_eq!(RetryOverride::Disabled.resolve(Some(&default)), None);
        assert_eq!(RetryOverride::Inherit.resolve(Some(&default)), Some(&default));
        let custom = fast(2);
        let custom_override = RetryOverride::Config(custom.clone());
        assert_eq!(custom_override.resolve(Some(&default)), Some(&custom));
        assert_eq!(RetryOverride::Inherit.resolve(None), None);
    }

    #[test]
    fn exponential_backoff_without_jitter_doubles_and_caps() {
        let backoff = Backoff::Exponential {
            base: Duration::from_millis(100),
            multiplier: 2.0,
            max: Duration::from_millis(500),
            jitter: false,
        };
        assert_eq!(backoff.delay(1), Duration::from_millis(100));
        assert_eq!(backoff.delay(2), Duration::from_millis(200));
        assert_eq!(backoff.delay(3), Duration::from_millis(400));
        assert_eq!(backoff.delay(4), Duration::from_millis(500));
        assert_eq!(backoff.delay(60), Duration::from_millis(500));
    }

    #[test]
    fn jitter_stays_within_upper_half() {
        let backoff = Backoff::Exponential {
            base: Duration::from_millis(1000),
            multiplier: 2.0,
            max: Duration::from_secs(30),
            jitter: true,
        };
        for _ in 0..50 {
            let d = backoff.delay(2);
            assert!(d >= Duration::from_millis(1000) && d <= Duration::from_millis(2000), "{d:?}");
        }
    }

    #[test]
    fn retry_after_overrides_backoff_for_throttling() {
        let config = RetryConfig::default();
        let mut tracker = RetryTracker::new(Some(&config));
        tracker.begin_attempt();
        let throttled = ApiError::Service(ServiceError {
            status: 429,
            code: "TooManyRequests".to_string(),
            message: String::new(),
            opc_request_id: None,
            operation: "Op",
            request_endpoint: String::new(),
            retry_after: Some(Duration::from_secs(7)),
        });
        let decision = tracker.record_failure(&throttled);
        assert!(decision.retry);
        assert_eq!(decision.delay, Duration::from_secs(7));
    }

    #[test]
    fn huge_retry_after_is_capped_without_elapsed_budget() {
        let config = RetryConfig::default()
            .with_max_attempts(4)
            .with_max_elapsed(None);
        let mut tracker = RetryTracker::new(Some(&config));
        let throttled = ApiError::Service(ServiceError {
            status: 429,
            code: "TooManyRequests".to_string(),
            message: String::new(),
            opc_request_id: None,
            operation: "Op",
            request_endpoint: String::new(),
            retry_after: Some(Duration::from_secs(u64::MAX)),
        });
        for _ in 0..3 {
            tracker.begin_attempt();
            let decision = tracker.record_failure(&throttled);
            assert!(decision.retry);
            assert_eq!(decision.delay, MAX_RETRY_AFTER);
        }
        tracker.begin_attempt();
        assert!(!tracker.record_failure(&throttled).retry);
        assert_eq!(tracker.state(), RetryState::Exhausted);
    }

    #[test]
    fn elapsed_budget_exhausts_early() {
        let config = RetryConfig::default()
            .with_max_attempts(10)
            .with_backoff(Backoff::Fixed {
                delay: Duration::from_secs(4),
            })
            .with_max_elapsed(Some(Duration::from_secs(10)));
        let mut tracker = RetryTracker::new(Some(&config));
        tracker.begin_attempt();
        assert!(tracker.record_failure(&transport()).retry);
        tracker.begin_attempt();
        assert!(tracker.record_failure(&transport()).retry);
        tracker.begin_attempt();
        assert!(!tracker.record_failure(&transport()).retry);
        assert_eq!(tracker.state(), RetryState::Exhausted);
    }

    #[test]
    fn config_deserializes_from_camel_case_json() {
        let config: RetryConfig = serde_json::from_str(
            r#"{
                "maxAttempts": 4,
                "backoff": {"type": "exponential", "baseMs": 200, "multiplier": 3.0, "maxMs": 5000, "jitter": false},
                "retryableStatuses": [503]
            }"#,
        )
        .unwrap();
        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.retryable_statuses, BTreeSet::from([503]));
        assert_eq!(config.backoff.delay(2), Duration::from_millis(600));
        assert!(config.retry_transport_errors);
    }
}
