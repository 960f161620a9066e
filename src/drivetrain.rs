//! X-drive drivetrain control.
//!
//! This module provides the [`HolonomicDrive`] trait that the waypoint
//! controller drives through, the wheel mixing for a four-wheel X-drive, and
//! (on the V5 target) the [`XDrive`] struct that applies the mix to motors.
//!
//! # Axes
//!
//! Commands are robot-relative and normalized to `[-1.0, 1.0]`:
//!
//! - **strafe**: sideways, positive to the robot's right.
//! - **forward**: positive toward the robot's front.
//! - **turn**: rotation, positive clockwise.
//!
//! # Example
//!
//! ```ignore
//! use vexide::prelude::*;
//! use xnav::drivetrain::XDrive;
//!
//! let drive = XDrive::new(
//!     Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!     Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse),
//!     Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!     Motor::new(peripherals.port_3, Gearset::Green, Direction::Forward),
//! );
//! ```

#[cfg(target_os = "vexos")]
use log::warn;
#[cfg(target_os = "vexos")]
use vexide::{
    controller::ControllerState,
    prelude::{Controller, Motor},
    smart::motor::BrakeMode,
};

/// Full-scale motor voltage on the V5.
pub const MAX_VOLTAGE: f64 = 12.0;

/// A drivetrain that accepts independent strafe, forward and turn commands.
///
/// Inputs outside `[-1.0, 1.0]` are outside the contract; callers clamp.
pub trait HolonomicDrive {
    /// Drives with robot-relative axis commands.
    fn drive_axes(&mut self, strafe: f64, forward: f64, turn: f64);

    /// Commands zero output on every wheel.
    fn stop(&mut self);
}

impl<T: HolonomicDrive + ?Sized> HolonomicDrive for &mut T {
    fn drive_axes(&mut self, strafe: f64, forward: f64, turn: f64) {
        (**self).drive_axes(strafe, forward, turn)
    }

    fn stop(&mut self) { (**self).stop() }
}

/// Normalized power for each wheel of an X-drive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelPowers {
    pub front_left:  f64,
    pub front_right: f64,
    pub back_right:  f64,
    pub back_left:   f64,
}

impl WheelPowers {
    /// The largest wheel magnitude.
    pub fn peak(&self) -> f64 {
        self.front_left
            .abs()
            .max(self.front_right.abs())
            .max(self.back_right.abs())
            .max(self.back_left.abs())
    }

    fn scaled(self, factor: f64) -> Self {
        Self {
            front_left:  self.front_left * factor,
            front_right: self.front_right * factor,
            back_right:  self.back_right * factor,
            back_left:   self.back_left * factor,
        }
    }
}

/// Resolves axis commands into X-drive wheel powers.
///
/// Wheels are mixed as if every motor spins the robot forward when driven
/// positive; motor direction is configured on the motors themselves. If any
/// wheel would exceed full output, all four are scaled down together so the
/// direction of travel is preserved.
pub fn mix_x_arcade(strafe: f64, forward: f64, turn: f64) -> WheelPowers {
    let wheels = WheelPowers {
        front_left:  forward + strafe + turn,
        front_right: forward - strafe - turn,
        back_right:  forward + strafe - turn,
        back_left:   forward - strafe + turn,
    };
    let peak = wheels.peak();
    if peak > 1.0 { wheels.scaled(1.0 / peak) } else { wheels }
}

/// A four-motor X-drive.
///
/// Motors on the right side usually need [`Direction::Reverse`] so that a
/// positive voltage moves every wheel toward the robot's front.
///
/// [`Direction::Reverse`]: vexide::smart::motor::Direction::Reverse
#[cfg(target_os = "vexos")]
pub struct XDrive {
    pub front_left:  Motor,
    pub front_right: Motor,
    pub back_right:  Motor,
    pub back_left:   Motor,
}

#[cfg(target_os = "vexos")]
impl XDrive {
    /// Creates a new drivetrain from its four wheel motors.
    pub fn new(front_left: Motor, front_right: Motor, back_right: Motor, back_left: Motor) -> Self {
        Self {
            front_left,
            front_right,
            back_right,
            back_left,
        }
    }

    /// Drives the robot from controller sticks.
    ///
    /// Left stick Y drives forward, left stick X strafes, right stick X
    /// turns. If reading the controller fails, zeroed inputs are used and a
    /// warning is logged.
    pub fn x_arcade(&mut self, controller: &Controller, deadband: f64) {
        let state = controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });
        let axes = crate::opcontrol::stick_axes(
            state.left_stick.x(),
            state.left_stick.y(),
            state.right_stick.x(),
            deadband,
        );
        self.drive_axes(axes.strafe, axes.forward, axes.turn);
    }

    /// Sets the brake mode for all four motors.
    pub fn set_brakemode(&mut self, brakemode: BrakeMode) {
        for motor in self.motors() {
            let _ = motor.brake(brakemode);
        }
    }

    fn apply(&mut self, wheels: WheelPowers) {
        let voltages = [
            wheels.front_left,
            wheels.front_right,
            wheels.back_right,
            wheels.back_left,
        ];
        for (motor, power) in self.motors().into_iter().zip(voltages) {
            if let Err(e) = motor.set_voltage(power * MAX_VOLTAGE) {
                warn!("Motor Voltage Error: {}", e);
            }
        }
    }

    fn motors(&mut self) -> [&mut Motor; 4] {
        [
            &mut self.front_left,
            &mut self.front_right,
            &mut self.back_right,
            &mut self.back_left,
        ]
    }
}

#[cfg(target_os = "vexos")]
impl HolonomicDrive for XDrive {
    fn drive_axes(&mut self, strafe: f64, forward: f64, turn: f64) {
        self.apply(mix_x_arcade(strafe, forward, turn));
    }

    fn stop(&mut self) { self.apply(WheelPowers::default()); }
}
