//! Operator control for the driver-controlled period.
//!
//! Maps controller sticks to X-drive axis commands, and lets the driver
//! hand control to the waypoint controller while a button is held.
//!
//! # Stick Mapping
//!
//! - Left stick Y: forward/backward.
//! - Left stick X: strafe.
//! - Right stick X: turn.
//!
//! # Example
//!
//! ```ignore
//! use xnav::opcontrol;
//!
//! let controller = Controller::new(ControllerId::Primary);
//! loop {
//!     robot.nav.drive_mut().x_arcade(&controller, opcontrol::STICK_DEADBAND);
//!     sleep(Duration::from_millis(10)).await;
//! }
//! ```

use crate::motion::waypoint::AxisCommand;

/// Stick readings smaller than this are treated as zero.
pub const STICK_DEADBAND: f64 = 0.05;

/// Converts raw stick readings into an axis command.
///
/// Each reading is zeroed inside `deadband` and clamped to `[-1.0, 1.0]`.
pub fn stick_axes(left_x: f64, left_y: f64, right_x: f64, deadband: f64) -> AxisCommand {
    AxisCommand {
        strafe:  apply_deadband(left_x, deadband),
        forward: apply_deadband(left_y, deadband),
        turn:    apply_deadband(right_x, deadband),
    }
}

fn apply_deadband(value: f64, deadband: f64) -> f64 {
    if value.abs() < deadband { 0.0 } else { value.clamp(-1.0, 1.0) }
}

/// Driver-control loop for the V5.
#[cfg(target_os = "vexos")]
pub mod driver {
    use std::time::Duration;

    use log::{info, warn};
    use vexide::{controller::ControllerState, prelude::Controller, time::sleep};

    use super::STICK_DEADBAND;
    use crate::{
        drivetrain::XDrive,
        motion::{
            gps::PoseSensor,
            pid::Gains,
            waypoint::{Pacer, Target, WaypointController, cancel::CancelWhen},
        },
    };

    /// Loop rate for driver control in milliseconds.
    const LOOPRATE: u64 = 10;

    /// Runs arcade driving forever.
    ///
    /// While button A is held the waypoint controller drives to `home`;
    /// releasing it cancels the movement and hands the sticks back.
    pub async fn run<P, S, T>(
        nav: &mut WaypointController<P, S, XDrive, T>,
        controller: &Controller,
        home: &Target,
        gains: &Gains,
    ) where
        P: PoseSensor,
        S: PoseSensor,
        T: Pacer,
    {
        info!("Driver control started");
        loop {
            if button_a_held(controller) {
                info!("Driving home");
                let released = CancelWhen(|| !button_a_held(controller));
                if let Err(e) = nav.drive_to_until(home, gains, released).await {
                    warn!("Home movement rejected: {}", e);
                }
                // wait for release so a settled move does not restart at once
                while button_a_held(controller) {
                    sleep(Duration::from_millis(LOOPRATE)).await;
                }
            }
            nav.drive_mut().x_arcade(controller, STICK_DEADBAND);
            sleep(Duration::from_millis(LOOPRATE)).await;
        }
    }

    fn button_a_held(controller: &Controller) -> bool {
        let state = controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });
        state.button_a.is_pressed()
    }
}
