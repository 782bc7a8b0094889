//! Pacing configuration for the scripted connection.
//!
//! The pauses between status lines exist only to make the walkthrough
//! readable at a console. They are plain data here so callers can scale
//! them down or switch them off entirely.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors building a pacing configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Pace factor must be finite, non-negative and keep pauses in range, got {0}")]
    InvalidPaceFactor(f64),

    #[error("Pace factor is not a number: '{0}'")]
    UnparsablePaceFactor(String),
}

/// Pauses taken at each step of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// After the first handshake line
    pub warmup: Duration,

    /// After the second handshake line
    pub calibration: Duration,

    /// After announcing the component link
    pub link: Duration,

    /// While receiving packets
    pub receive: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            warmup: Duration::from_secs(5),
            calibration: Duration::from_secs(7),
            link: Duration::from_secs(3),
            receive: Duration::from_secs(6),
        }
    }
}

impl PacingConfig {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            warmup: Duration::ZERO,
            calibration: Duration::ZERO,
            link: Duration::ZERO,
            receive: Duration::ZERO,
        }
    }

    /// Default pacing multiplied by `factor`.
    ///
    /// A factor of `1.0` is real time, `0.0` is [`PacingConfig::instant`].
    ///
    /// ```rust
    /// use neural_adapter::config::PacingConfig;
    /// use std::time::Duration;
    ///
    /// let half = PacingConfig::scaled(0.5).unwrap();
    /// assert_eq!(half.receive, Duration::from_secs(3));
    /// assert!(PacingConfig::scaled(-1.0).is_err());
    /// ```
    pub fn scaled(factor: f64) -> Result<Self, ConfigError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ConfigError::InvalidPaceFactor(factor));
        }

        let base = Self::default();
        let scale = |pause: Duration| {
            Duration::try_from_secs_f64(pause.as_secs_f64() * factor)
                .map_err(|_| ConfigError::InvalidPaceFactor(factor))
        };
        Ok(Self {
            warmup: scale(base.warmup)?,
            calibration: scale(base.calibration)?,
            link: scale(base.link)?,
            receive: scale(base.receive)?,
        })
    }

    /// Parse a pace factor as typed on the command line and apply it with
    /// [`PacingConfig::scaled`].
    pub fn from_pace(raw: &str) -> Result<Self, ConfigError> {
        let factor: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnparsablePaceFactor(raw.to_string()))?;
        Self::scaled(factor)
    }

    /// Sum of every pause in one adapted connection.
    pub fn total(&self) -> Duration {
        self.warmup + self.calibration + self.link + self.receive
    }
}
