//! Kinematic simulation of a GPS-equipped X-drive.
//!
//! Useful for tuning gains and tolerances off the robot, and used by the
//! crate's own tests. A [`SimRobot`] holds one simulated pose; it hands out a
//! [`SimGps`] and a [`SimDrive`] that share it, so a
//! [`WaypointController`](crate::motion::waypoint::WaypointController) can be
//! built around them exactly as around real hardware.
//!
//! Each drive command advances the simulation by one step: the robot moves
//! at `command * max speed` for `step` seconds with no inertia or slip.
//!
//! # Frame
//!
//! The simulated field matches the controller's sign conventions: at heading
//! 0 a positive strafe moves toward -x and a positive forward toward -y, and
//! a positive turn increases heading. Readings from a `SimGps` created with a
//! mounting offset have that offset subtracted from the heading, as a
//! backward-mounted sensor would report.
//!
//! # Example
//!
//! ```
//! use futures::executor::block_on;
//! use xnav::motion::{
//!     gps::{FeedbackAdapter, SensorFrame},
//!     pid::{AxisGains, Gains},
//!     pose::Pose,
//!     sim::{SimParams, SimRobot},
//!     waypoint::{ControllerConfig, Target, Tolerance, WaypointController},
//! };
//!
//! let robot = SimRobot::new(Pose::origin(), SimParams::default());
//! let adapter = FeedbackAdapter::single(robot.gps(), SensorFrame::identity());
//! let mut nav =
//!     WaypointController::new(adapter, robot.drive(), robot.pacer(), ControllerConfig::default())
//!         .unwrap();
//!
//! let target = Target::new(0.5, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
//! let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::p(1.0));
//! let outcome = block_on(nav.drive_to(&target, &gains)).unwrap();
//! assert!(outcome.is_settled());
//! assert_eq!(robot.stop_count(), 1);
//! ```

use std::{cell::RefCell, future::Future, rc::Rc, time::Duration};

use crate::{
    drivetrain::HolonomicDrive,
    error::SensorError,
    motion::{
        gps::{GpsStatus, PoseSensor},
        pose::{Pose, wrap_degrees},
        waypoint::{AxisCommand, Pacer},
    },
};

/// Physical limits of the simulated robot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Translation speed at full command, meters per second.
    pub max_speed:     f64,
    /// Turn rate at full command, degrees per second.
    pub max_turn_rate: f64,
    /// Simulated time advanced by each drive command, seconds.
    pub step:          f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            max_speed:     1.0,
            max_turn_rate: 180.0,
            step:          0.02,
        }
    }
}

struct SimWorld {
    params:       SimParams,
    pose:         Pose,
    trace:        Vec<Pose>,
    commands:     Vec<AxisCommand>,
    stops:        u32,
    paces:        u32,
    error_metric: f64,
    gps_online:   bool,
}

impl SimWorld {
    fn step(&mut self, command: AxisCommand) {
        let SimParams {
            max_speed,
            max_turn_rate,
            step,
        } = self.params;
        let (sin, cos) = self.pose.yaw.to_radians().sin_cos();
        let dx = -(command.strafe * cos + command.forward * sin) * max_speed * step;
        let dy = (command.strafe * sin - command.forward * cos) * max_speed * step;
        let dyaw = command.turn * max_turn_rate * step;
        self.pose = Pose::new(self.pose.x + dx, self.pose.y + dy, self.pose.yaw + dyaw);
        self.trace.push(self.pose);
    }
}

/// A simulated robot. Cloning shares the same world.
#[derive(Clone)]
pub struct SimRobot {
    world: Rc<RefCell<SimWorld>>,
}

impl SimRobot {
    pub fn new(start: Pose, params: SimParams) -> Self {
        Self {
            world: Rc::new(RefCell::new(SimWorld {
                params,
                pose: start,
                trace: vec![start],
                commands: Vec::new(),
                stops: 0,
                paces: 0,
                error_metric: 0.0,
                gps_online: true,
            })),
        }
    }

    /// A GPS mounted facing the robot's front.
    pub fn gps(&self) -> SimGps { self.mounted_gps(0.0) }

    /// A GPS mounted `heading_offset` degrees from the robot's front.
    pub fn mounted_gps(&self, heading_offset: f64) -> SimGps {
        SimGps {
            world: self.world.clone(),
            heading_offset,
        }
    }

    pub fn drive(&self) -> SimDrive {
        SimDrive {
            world: self.world.clone(),
        }
    }

    pub fn pacer(&self) -> SimPacer {
        SimPacer {
            world: self.world.clone(),
        }
    }

    /// The true simulated pose.
    pub fn pose(&self) -> Pose { self.world.borrow().pose }

    /// Every pose the robot has occupied, starting with the initial one.
    pub fn trace(&self) -> Vec<Pose> { self.world.borrow().trace.clone() }

    /// Every drive command received, in order.
    pub fn commands(&self) -> Vec<AxisCommand> { self.world.borrow().commands.clone() }

    /// Number of stop commands received.
    pub fn stop_count(&self) -> u32 { self.world.borrow().stops }

    /// Number of tick sleeps requested.
    pub fn pace_count(&self) -> u32 { self.world.borrow().paces }

    /// Sets the error metric reported by every `SimGps` of this robot.
    pub fn set_error_metric(&self, error_metric: f64) {
        self.world.borrow_mut().error_metric = error_metric;
    }

    /// Makes every `SimGps` of this robot fail (or recover).
    pub fn set_gps_online(&self, online: bool) { self.world.borrow_mut().gps_online = online; }
}

/// Simulated GPS reading the shared pose.
pub struct SimGps {
    world:          Rc<RefCell<SimWorld>>,
    heading_offset: f64,
}

impl PoseSensor for SimGps {
    fn status(&mut self) -> Result<GpsStatus, SensorError> {
        let world = self.world.borrow();
        if !world.gps_online {
            return Err(SensorError::Unavailable("simulated GPS offline".to_string()));
        }
        Ok(GpsStatus {
            x:            world.pose.x,
            y:            world.pose.y,
            yaw:          wrap_degrees(world.pose.yaw - self.heading_offset),
            error_metric: world.error_metric,
        })
    }
}

/// Simulated drivetrain moving the shared pose.
pub struct SimDrive {
    world: Rc<RefCell<SimWorld>>,
}

impl HolonomicDrive for SimDrive {
    fn drive_axes(&mut self, strafe: f64, forward: f64, turn: f64) {
        let command = AxisCommand {
            strafe,
            forward,
            turn,
        };
        let mut world = self.world.borrow_mut();
        world.commands.push(command);
        world.step(command);
    }

    fn stop(&mut self) { self.world.borrow_mut().stops += 1; }
}

/// Pacer that returns immediately; simulated time advances per command.
pub struct SimPacer {
    world: Rc<RefCell<SimWorld>>,
}

impl Pacer for SimPacer {
    fn pace(&mut self, _period: Duration) -> impl Future<Output = ()> {
        self.world.borrow_mut().paces += 1;
        std::future::ready(())
    }
}
