//! Autonomous routes.
//!
//! A [`Route`] is a fixed-capacity list of waypoints run one after another
//! through a single [`WaypointController`]. Each waypoint carries its own
//! gains and an optional time budget; a waypoint that runs out of time is
//! logged and the route moves on to the next one.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use futures::executor::block_on;
//! use xnav::{
//!     auton::{Route, Waypoint},
//!     motion::{
//!         gps::{FeedbackAdapter, SensorFrame},
//!         pid::{AxisGains, Gains},
//!         pose::Pose,
//!         sim::{SimParams, SimRobot},
//!         waypoint::{ControllerConfig, Target, Tolerance, WaypointController},
//!     },
//! };
//!
//! let robot = SimRobot::new(Pose::origin(), SimParams::default());
//! let adapter = FeedbackAdapter::single(robot.gps(), SensorFrame::identity());
//! let mut nav =
//!     WaypointController::new(adapter, robot.drive(), robot.pacer(), ControllerConfig::default())
//!         .unwrap();
//!
//! let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0 / 90.0));
//! let mut route: Route<4> = Route::new();
//! route
//!     .push(Waypoint::new(
//!         Target::new(0.3, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap(),
//!         gains,
//!     ))
//!     .unwrap();
//! route
//!     .push(
//!         Waypoint::new(Target::new(0.3, 0.3, 90.0, Tolerance::new(0.01, 0.5)).unwrap(), gains)
//!             .with_timeout(Duration::from_secs(15)),
//!     )
//!     .unwrap();
//!
//! let summary = block_on(route.run(&mut nav)).unwrap();
//! assert!(summary.all_settled());
//! ```

use std::time::Duration;

use heapless::Vec;
use log::{info, warn};

use crate::{
    drivetrain::HolonomicDrive,
    error::NavError,
    motion::{
        gps::PoseSensor,
        pid::Gains,
        waypoint::{DriveOutcome, Pacer, Target, WaypointController, cancel::TickBudget},
    },
};

/// One leg of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub target:  Target,
    pub gains:   Gains,
    /// Time allowed before the leg is abandoned. `None` waits until settled.
    pub timeout: Option<Duration>,
}

impl Waypoint {
    pub fn new(target: Target, gains: Gains) -> Self {
        Self {
            target,
            gains,
            timeout: None,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }
}

/// Outcomes of a finished route, one per waypoint in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary<const N: usize> {
    outcomes: Vec<DriveOutcome, N>,
}

impl<const N: usize> RouteSummary<N> {
    pub fn outcomes(&self) -> &[DriveOutcome] { &self.outcomes }

    pub fn settled_count(&self) -> usize { self.outcomes.iter().filter(|o| o.is_settled()).count() }

    pub fn all_settled(&self) -> bool { self.settled_count() == self.outcomes.len() }
}

/// A sequence of at most `N` waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<const N: usize> {
    waypoints: Vec<Waypoint, N>,
}

impl<const N: usize> Route<N> {
    pub fn new() -> Self { Self { waypoints: Vec::new() } }

    /// Appends a waypoint.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::RouteFull`] if the route already holds `N`
    /// waypoints.
    pub fn push(&mut self, waypoint: Waypoint) -> Result<(), NavError> {
        self.waypoints.push(waypoint).map_err(|_| NavError::RouteFull(N))
    }

    pub fn waypoints(&self) -> &[Waypoint] { &self.waypoints }

    pub fn len(&self) -> usize { self.waypoints.len() }

    pub fn is_empty(&self) -> bool { self.waypoints.is_empty() }

    /// Runs every waypoint in order.
    ///
    /// Timed-out waypoints are logged and skipped past; the drivetrain is
    /// stopped after each one either way.
    ///
    /// # Errors
    ///
    /// Returns the first validation error from the controller. Waypoints
    /// before it have already been driven.
    pub async fn run<P, S, D, T>(
        &self,
        nav: &mut WaypointController<P, S, D, T>,
    ) -> Result<RouteSummary<N>, NavError>
    where
        P: PoseSensor,
        S: PoseSensor,
        D: HolonomicDrive,
        T: Pacer,
    {
        let mut outcomes = Vec::new();
        for (leg, waypoint) in self.waypoints.iter().enumerate() {
            let outcome = match waypoint.timeout {
                Some(timeout) => {
                    let budget = TickBudget::from_duration(timeout, nav.config().tick_period);
                    nav.drive_to_until(&waypoint.target, &waypoint.gains, budget).await?
                }
                None => nav.drive_to(&waypoint.target, &waypoint.gains).await?,
            };
            if outcome.is_settled() {
                info!("Waypoint {} reached", leg + 1);
            } else {
                warn!("Waypoint {} timed out, moving on", leg + 1);
            }
            // one outcome per waypoint, so this cannot overflow
            let _ = outcomes.push(outcome);
        }
        Ok(RouteSummary { outcomes })
    }
}

impl<const N: usize> Default for Route<N> {
    fn default() -> Self { Self::new() }
}
