//! Competition wiring for the V5.
//!
//! [`Robot`] is built once at startup. It owns the GPS sensors, the X-drive
//! and the primary controller, and implements vexide's [`Compete`] so the
//! field controller can switch it between the autonomous route and driver
//! control.
//!
//! # Example
//!
//! ```ignore
//! use vexide::prelude::*;
//! use xnav::{competition::{Robot, RobotConfig}, drivetrain::XDrive, fs::logger};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(log::LevelFilter::Info).ok();
//!     let drive = XDrive::new(
//!         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward),
//!     );
//!     let robot = Robot::new(drive, front_gps, rear_gps, peripherals.primary_controller, route, RobotConfig::default())
//!         .expect("bad robot config");
//!     robot.compete().await;
//! }
//! ```

use std::time::Duration;

use log::{error, info};
use vexide::{
    prelude::{Compete, Controller},
    smart::gps::GpsSensor,
    time::sleep,
};

use crate::{
    auton::Route,
    drivetrain::XDrive,
    error::NavError,
    motion::{
        gps::{AdapterConfig, FeedbackAdapter},
        pid::{AxisGains, Gains},
        waypoint::{ControllerConfig, Target, VexPacer, WaypointController},
    },
    opcontrol,
};

/// Most waypoints an autonomous route can hold.
pub const ROUTE_CAPACITY: usize = 16;

/// Startup settings for [`Robot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotConfig {
    /// Time the GPS sensors get to lock on before the first movement.
    pub warmup:     Duration,
    pub controller: ControllerConfig,
    pub adapter:    AdapterConfig,
    /// Pose driven to while the driver holds button A.
    pub home:       Target,
    pub home_gains: Gains,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            warmup:     Duration::from_millis(500),
            controller: ControllerConfig::default(),
            adapter:    AdapterConfig::default(),
            home:       Target::default(),
            home_gains: Gains::split(AxisGains::p(1.0), AxisGains::p(1.0)),
        }
    }
}

/// Robot context shared by every competition period.
pub struct Robot {
    nav:        WaypointController<GpsSensor, GpsSensor, XDrive, VexPacer>,
    controller: Controller,
    route:      Route<ROUTE_CAPACITY>,
    config:     RobotConfig,
    warmed_up:  bool,
}

impl Robot {
    /// Builds the robot context.
    ///
    /// `primary` is the GPS facing the robot's front; `secondary` backs it up
    /// and is remapped through `config.adapter.secondary_frame`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if `config.controller` is
    /// unusable.
    pub fn new(
        drive: XDrive,
        primary: GpsSensor,
        secondary: GpsSensor,
        controller: Controller,
        route: Route<ROUTE_CAPACITY>,
        config: RobotConfig,
    ) -> Result<Self, NavError> {
        let adapter = FeedbackAdapter::failover(primary, secondary, config.adapter);
        let nav = WaypointController::new(adapter, drive, VexPacer, config.controller)?;
        Ok(Self {
            nav,
            controller,
            route,
            config,
            warmed_up: false,
        })
    }

    /// Waits out the GPS warmup the first time it is called.
    async fn warm_up(&mut self) {
        if !self.warmed_up {
            info!("Waiting {:?} for GPS lock", self.config.warmup);
            sleep(self.config.warmup).await;
            self.warmed_up = true;
        }
    }
}

impl Compete for Robot {
    async fn autonomous(&mut self) {
        self.warm_up().await;
        match self.route.run(&mut self.nav).await {
            Ok(summary) => info!(
                "Route finished: {}/{} waypoints reached",
                summary.settled_count(),
                summary.outcomes().len()
            ),
            Err(e) => error!("Route aborted: {}", e),
        }
    }

    async fn driver(&mut self) {
        self.warm_up().await;
        opcontrol::driver::run(
            &mut self.nav,
            &self.controller,
            &self.config.home,
            &self.config.home_gains,
        )
        .await;
    }
}
