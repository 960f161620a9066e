//! Per-axis PID state for the waypoint controller.
//!
//! Each controlled axis (x, y, yaw) owns one [`AxisPid`] that carries its
//! previous error and accumulated error across ticks of a single movement.
//! The controller builds fresh instances for every movement, so no history
//! leaks from one waypoint into the next.
//!
//! The derivative term is the raw per-tick change in error, not a rate.
//! Gains are therefore tuned against the loop's tick period.
//!
//! # Tuning
//!
//! Start with Kp and increase until the robot reaches the target.
//! Add Kd to reduce overshoot. Only add Ki if the robot consistently
//! stops short of the target.

use crate::error::{NavError, require_non_negative};

/// Proportional, integral and derivative gains for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisGains {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain. Zero disables the integral term.
    pub ki: f64,
    /// Derivative gain, applied to the per-tick change in error.
    pub kd: f64,
}

impl AxisGains {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self { Self { kp, ki, kd } }

    /// Proportional-derivative gains with no integral term.
    pub fn pd(kp: f64, kd: f64) -> Self { Self { kp, ki: 0.0, kd } }

    /// Proportional-only gains.
    pub fn p(kp: f64) -> Self { Self { kp, ki: 0.0, kd: 0.0 } }

    fn validate(&self, axis: &str) -> Result<(), NavError> {
        require_non_negative(self.kp, &format!("{} kp", axis), NavError::InvalidGains)?;
        require_non_negative(self.ki, &format!("{} ki", axis), NavError::InvalidGains)?;
        require_non_negative(self.kd, &format!("{} kd", axis), NavError::InvalidGains)
    }
}

/// The gain set for one movement.
///
/// # Example
///
/// ```
/// use xnav::motion::pid::{AxisGains, Gains};
///
/// let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0));
/// assert_eq!(gains.x, gains.y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gains {
    /// Gains for the field x axis (robot strafe after frame rotation).
    pub x:   AxisGains,
    /// Gains for the field y axis (robot forward after frame rotation).
    pub y:   AxisGains,
    /// Gains for heading.
    pub yaw: AxisGains,
}

impl Gains {
    pub fn new(x: AxisGains, y: AxisGains, yaw: AxisGains) -> Self { Self { x, y, yaw } }

    /// Uses `translation` for both x and y and `rotation` for yaw.
    pub fn split(translation: AxisGains, rotation: AxisGains) -> Self {
        Self {
            x:   translation,
            y:   translation,
            yaw: rotation,
        }
    }

    /// Checks that every gain is finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidGains`] naming the first offending gain.
    pub fn validate(&self) -> Result<(), NavError> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.yaw.validate("yaw")
    }
}

/// Running PID state for one axis.
#[derive(Debug, Clone)]
pub struct AxisPid {
    gains:      AxisGains,
    prev_error: f64,
    ierror:     f64,
    i_max:      f64,
}

impl AxisPid {
    /// Creates a PID with zeroed history.
    ///
    /// `output_cap` bounds the integral contribution so that
    /// `|ki * accumulated| <= output_cap` (anti-windup).
    pub fn new(gains: AxisGains, output_cap: f64) -> Self {
        let i_max = if gains.ki != 0.0 { output_cap.abs() / gains.ki.abs() } else { 0.0 };
        Self {
            gains,
            prev_error: 0.0,
            ierror: 0.0,
            i_max,
        }
    }

    /// Advances one tick and returns the raw (unclamped) output.
    ///
    /// The first call after construction sees a previous error of zero, so
    /// its derivative term equals `kd * error`.
    pub fn update(&mut self, error: f64) -> f64 {
        let derror = error - self.prev_error;
        self.prev_error = error;

        let mut u = self.gains.kp * error + self.gains.kd * derror;
        if self.gains.ki != 0.0 {
            self.ierror = (self.ierror + error).clamp(-self.i_max, self.i_max);
            u += self.gains.ki * self.ierror;
        }
        u
    }

    /// The error passed to the most recent [`update`](Self::update).
    pub fn prev_error(&self) -> f64 { self.prev_error }

    pub fn gains(&self) -> AxisGains { self.gains }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_derivative_sees_zero_history() {
        let mut pid = AxisPid::new(AxisGains::pd(1.0, 1.0), 1.0);
        assert_eq!(pid.update(-0.5), -1.0);
        // second tick: kp*e + kd*(e - prev)
        assert!((pid.update(-0.4) - (-0.4 + 0.1)).abs() < 1e-12);
        assert_eq!(pid.prev_error(), -0.4);
    }

    #[test]
    fn integral_is_clamped() {
        let mut pid = AxisPid::new(AxisGains::new(0.0, 0.5, 0.0), 1.0);
        let mut out = 0.0;
        for _ in 0..100 {
            out = pid.update(10.0);
        }
        assert!((out - 1.0).abs() < 1e-12);
    }

    #[test]
    fn proportional_only_has_no_memory() {
        let mut pid = AxisPid::new(AxisGains::p(2.0), 1.0);
        assert_eq!(pid.update(3.0), 6.0);
        assert_eq!(pid.update(3.0), 6.0);
    }

    #[test]
    fn negative_gain_is_rejected() {
        let gains = Gains::split(AxisGains::pd(1.0, -1.0), AxisGains::p(1.0));
        assert!(matches!(gains.validate(), Err(NavError::InvalidGains(_))));
        let gains = Gains::split(AxisGains::p(1.0), AxisGains::p(f64::NAN));
        assert!(matches!(gains.validate(), Err(NavError::InvalidGains(_))));
    }
}
