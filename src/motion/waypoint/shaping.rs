//! Pure per-tick math: axis errors, frame rotation and output clamping.

use crate::motion::pose::{Pose, wrap_degrees};

/// Raw per-axis error between a pose and a target.
///
/// Translation error is `current - target`; heading error is
/// `target - current`, wrapped to `[-180, 180)`. The controller's command
/// directions depend on exactly this asymmetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisErrors {
    /// Field-frame x error in meters.
    pub x:   f64,
    /// Field-frame y error in meters.
    pub y:   f64,
    /// Heading error in degrees.
    pub yaw: f64,
}

impl AxisErrors {
    pub fn between(pose: &Pose, target: &Pose) -> Self {
        Self {
            x:   pose.x - target.x,
            y:   pose.y - target.y,
            yaw: wrap_degrees(target.yaw - pose.yaw),
        }
    }
}

/// Rotates a field-frame translation error into the robot's frame.
///
/// Both outputs are computed from the unrotated components.
pub fn rotate_into_robot_frame(ex: f64, ey: f64, yaw_degrees: f64) -> (f64, f64) {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    (ex * cos - ey * sin, ex * sin + ey * cos)
}

/// Forces a command's magnitude into `[lower, upper]`, keeping its sign.
///
/// Zero stays zero so an axis with nothing to correct is not nudged.
pub fn clamp_with_deadband(power: f64, lower: f64, upper: f64) -> f64 {
    if power == 0.0 {
        return 0.0;
    }
    power.signum() * power.abs().clamp(lower, upper)
}
