//! Error types for the navigation core.
//!
//! Only invalid inputs are surfaced to callers. Sensor trouble is absorbed by
//! the pose adapter (failover or stale pose) and by the waypoint controller's
//! stale-tick policy, so it never aborts a movement.

use std::fmt;

/// Errors returned when a movement cannot be started.
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// The target pose, tolerance or resolution scale is unusable.
    InvalidTarget(String),
    /// A gain is non-finite or negative.
    InvalidGains(String),
    /// The controller configuration is unusable.
    InvalidConfig(String),
    /// A route already holds as many waypoints as it can.
    RouteFull(usize),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NavError::InvalidTarget(msg) => write!(f, "Invalid target: {}", msg),
            NavError::InvalidGains(msg) => write!(f, "Invalid gains: {}", msg),
            NavError::InvalidConfig(msg) => write!(f, "Invalid controller config: {}", msg),
            NavError::RouteFull(capacity) => {
                write!(f, "Route is full ({} waypoints)", capacity)
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Errors reported by a pose sensor read.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorError {
    /// No sample could be obtained (unplugged, wrong device, not ready).
    Unavailable(String),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SensorError::Unavailable(msg) => write!(f, "Pose sensor unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SensorError {}

/// Fails with `make(..)` unless `value` is finite.
pub(crate) fn require_finite(
    value: f64,
    name: &str,
    make: fn(String) -> NavError,
) -> Result<(), NavError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(make(format!("{} must be finite, got {}", name, value)))
    }
}

/// Fails with `make(..)` unless `value` is finite and not negative.
pub(crate) fn require_non_negative(
    value: f64,
    name: &str,
    make: fn(String) -> NavError,
) -> Result<(), NavError> {
    require_finite(value, name, make)?;
    if value < 0.0 {
        return Err(make(format!("{} must not be negative, got {}", name, value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_check_names_the_field() {
        let err = require_finite(f64::NAN, "x", NavError::InvalidTarget).unwrap_err();
        assert_eq!(err, NavError::InvalidTarget("x must be finite, got NaN".to_string()));
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(require_non_negative(0.0, "kp", NavError::InvalidGains).is_ok());
        assert!(require_non_negative(-0.1, "kp", NavError::InvalidGains).is_err());
        assert!(require_non_negative(f64::INFINITY, "kp", NavError::InvalidGains).is_err());
    }
}
