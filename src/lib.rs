//! # xnav
//!
//! GPS waypoint navigation for VEX V5 X-drive robots, built on top of
//! [Vexide](https://vexide.dev).
//!
//! - **Pose Feedback**: Reads the field pose from one or two GPS sensors, falls
//!   back to the secondary when the primary's quality degrades, and holds the
//!   last good pose when neither answers.
//! - **Waypoint Control**: A per-axis PID loop that drives the robot to a field
//!   pose and stops once every axis is within tolerance.
//! - **Drivetrain Control**: X-drive wheel mixing for holonomic driving.
//! - **Autonomous Routes**: Fixed-capacity waypoint lists with per-leg time
//!   budgets.
//! - **Operator Control**: Arcade sticks plus a hold-to-drive-home button.
//! - **Logging**: A console and SD card logger.
//!
//! Everything except the device bindings is plain Rust and runs on the host,
//! where [`motion::sim`] stands in for the robot.
//!
//! ## Quick Start
//!
//! ```ignore
//! use xnav::motion::{
//!     gps::{AdapterConfig, FeedbackAdapter},
//!     pid::{AxisGains, Gains},
//!     waypoint::{ControllerConfig, Target, Tolerance, VexPacer, WaypointController},
//! };
//!
//! let adapter = FeedbackAdapter::failover(front_gps, rear_gps, AdapterConfig::default());
//! let mut nav = WaypointController::new(adapter, xdrive, VexPacer, ControllerConfig::default())?;
//!
//! let target = Target::from_inches(36.0, 36.0, 45.0, Tolerance::new(0.4, 0.5))?;
//! let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0 / 90.0));
//! nav.drive_to(&target, &gains).await?;
//! ```
//!
//! ## Modules
//!
//! - [`motion`]: Pose feedback, PID and the waypoint controller.
//! - [`drivetrain`]: The drive seam and X-drive mixing.
//! - [`auton`]: Autonomous routes.
//! - [`opcontrol`]: Driver control.
//! - [`fs`]: Logging.

/// Autonomous route module.
///
/// A [`Route`](auton::Route) runs its waypoints in order through one
/// waypoint controller, giving each an optional time budget.
pub mod auton;

/// Competition lifecycle for the V5.
#[cfg(target_os = "vexos")]
pub mod competition;

/// Holonomic drivetrain module.
///
/// Defines the [`HolonomicDrive`](drivetrain::HolonomicDrive) seam the
/// controller drives through, and the X-drive implementation.
pub mod drivetrain;

/// Error types.
pub mod error;

/// Filesystem utilities module.
///
/// Contains the logger that records telemetry to the console and the
/// V5 Brain's SD card.
pub mod fs;

/// Motion control module.
///
/// - **Pose**: Field pose and heading wrapping.
/// - **GPS**: Sensor frames and the failover pose adapter.
/// - **PID**: Per-axis gains and controllers.
/// - **Waypoint**: The closed-loop waypoint controller.
/// - **Sim**: A kinematic X-drive simulation for off-robot tuning.
pub mod motion;

/// Operator control module.
///
/// Maps controller sticks to X-drive axes during driver control.
pub mod opcontrol;

/// Length unit conversion.
pub mod units;

pub use units::{to_inches, to_meters};
