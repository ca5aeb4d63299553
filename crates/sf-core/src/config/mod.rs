//! # Engine configuration
//!
//! Data structures for the simulated server behaviour, mapped from TOML.
//! Missing keys fall back to the stock form's timings and odds.
//! Reading files is the infrastructure layer's job (`sf-infra`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ports::{RandomPort, RandomPortExt};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("[{section}] min_latency_ms ({min_ms}) exceeds max_latency_ms ({max_ms})")]
    InvertedLatency {
        section: &'static str,
        min_ms: u64,
        max_ms: u64,
    },
    #[error("[{section}] {key} must be within 0.0..=1.0, got {value}")]
    ProbabilityOutOfRange {
        section: &'static str,
        key: &'static str,
        value: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub availability: AvailabilityConfig,
    pub submission: SubmissionConfig,
    pub random: RandomConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    /// Chance that a checked email is reported as already registered.
    pub taken_probability: f64,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            min_latency_ms: 500,
            max_latency_ms: 2500,
            taken_probability: 0.3,
        }
    }
}

impl AvailabilityConfig {
    pub fn latency(&self) -> LatencyRange {
        LatencyRange::new(self.min_latency_ms, self.max_latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    /// Chance that a submission ends in the error panel.
    pub failure_probability: f64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            min_latency_ms: 1500,
            max_latency_ms: 4500,
            failure_probability: 0.3,
        }
    }
}

impl SubmissionConfig {
    pub fn latency(&self) -> LatencyRange {
        LatencyRange::new(self.min_latency_ms, self.max_latency_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible sessions. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

/// Half-open latency window `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Draw a latency uniformly from the window.
    pub fn sample(&self, random: &dyn RandomPort) -> Duration {
        let span = self.max_ms.saturating_sub(self.min_ms);
        let offset = random.unit_interval() * span as f64;
        Duration::from_millis(self.min_ms + (offset as u64).min(span.saturating_sub(1)))
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_latency(
            "availability",
            self.availability.min_latency_ms,
            self.availability.max_latency_ms,
        )?;
        check_latency(
            "submission",
            self.submission.min_latency_ms,
            self.submission.max_latency_ms,
        )?;
        check_probability(
            "availability",
            "taken_probability",
            self.availability.taken_probability,
        )?;
        check_probability(
            "submission",
            "failure_probability",
            self.submission.failure_probability,
        )?;
        Ok(())
    }
}

fn check_latency(section: &'static str, min_ms: u64, max_ms: u64) -> Result<(), ConfigError> {
    if min_ms > max_ms {
        return Err(ConfigError::InvertedLatency {
            section,
            min_ms,
            max_ms,
        });
    }
    Ok(())
}

fn check_probability(
    section: &'static str,
    key: &'static str,
    value: f64,
) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ProbabilityOutOfRange {
            section,
            key,
            value,
        });
    }
    Ok(())
}
