//! Autonomous motion control.
//!
//! This module provides everything needed to drive an X-drive to field
//! poses using absolute position feedback:
//!
//! - **Pose**: Field poses and heading wrapping.
//! - **GPS**: Pose feedback from one or two GPS sensors with failover.
//! - **PID**: Per-axis PID state.
//! - **Waypoint**: The closed-loop controller that ties them together.
//! - **Sim**: A kinematic simulation for tuning without a robot.
//!
//! # Architecture
//!
//! The waypoint controller runs an async control loop inside the caller's
//! task. Each movement call borrows the controller mutably, reads the pose
//! once per tick, sends one command to the drivetrain, then sleeps until the
//! next tick. The call resolves once the robot has settled and stopped.
//!
//! # Example
//!
//! ```ignore
//! use xnav::motion::{pid::{AxisGains, Gains}, waypoint::{Target, Tolerance}};
//!
//! let target = Target::from_inches(36.0, 36.0, 45.0, Tolerance::new(0.5, 0.5))?;
//! let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0 / 90.0));
//! nav.drive_to(&target, &gains).await?;
//! ```

/// Pose feedback adapter over GPS sensors.
///
/// Provides the [`FeedbackAdapter`](gps::FeedbackAdapter) with optional
/// primary/secondary failover.
pub mod gps;

/// Per-axis PID controllers and gain sets.
pub mod pid;

/// Field poses and heading arithmetic.
pub mod pose;

/// Kinematic X-drive simulation.
pub mod sim;

/// Closed-loop waypoint controller.
pub mod waypoint;
