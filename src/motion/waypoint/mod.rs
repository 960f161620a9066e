//! Closed-loop waypoint controller for a holonomic drivetrain.
//!
//! The [`WaypointController`] drives the robot to a field pose using absolute
//! pose feedback. It owns the pose adapter and the drivetrain, so only one
//! movement can run at a time (`drive_to` borrows the controller mutably).
//!
//! # Architecture
//!
//! Each tick of the control loop:
//! 1. Reads the pose through the [`FeedbackAdapter`].
//! 2. Computes per-axis error (translation `current - target`, heading
//!    `target - current`).
//! 3. Stops and returns if every axis is within tolerance.
//! 4. Polls the cancel signal; a cancelled movement also stops.
//! 5. Rotates the translation error into the robot frame.
//! 6. Runs one [`AxisPid`] per axis, normalizes to full scale and clamps into
//!    `[lower_limit, upper_limit]` keeping the sign.
//! 7. Issues the three commands and sleeps for one tick period.
//!
//! A tick whose pose is stale (no sensor answered) repeats the previous
//! command, leaves the PID history untouched and skips the settle check.
//!
//! # Example
//!
//! ```ignore
//! use xnav::motion::{
//!     pid::{AxisGains, Gains},
//!     waypoint::{ControllerConfig, Target, Tolerance, VexPacer, WaypointController},
//! };
//!
//! let mut nav = WaypointController::new(adapter, drive, VexPacer, ControllerConfig::default())?;
//! let target = Target::new(0.9144, 0.9144, 45.0, Tolerance::new(0.01, 0.5))?;
//! let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0));
//! nav.drive_to(&target, &gains).await?;
//! ```

use std::{future::Future, time::Duration};

use log::{debug, info, warn};

use crate::{
    drivetrain::HolonomicDrive,
    error::{NavError, require_finite, require_non_negative},
    motion::{
        gps::{FeedbackAdapter, PoseSensor},
        pid::{AxisPid, Gains},
        pose::Pose,
    },
    units::to_meters,
};

pub mod cancel;
pub mod shaping;

use cancel::{CancelSignal, NeverCancel};
use shaping::{AxisErrors, clamp_with_deadband, rotate_into_robot_frame};

/// Default control loop period.
pub const TICK_PERIOD: Duration = Duration::from_millis(20);

/// How close the robot must get before a movement counts as finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Allowed |error| on each of x and y, meters.
    pub distance: f64,
    /// Allowed |error| on heading, degrees.
    pub angle:    f64,
}

impl Tolerance {
    pub fn new(distance: f64, angle: f64) -> Self { Self { distance, angle } }
}

/// Which axes are currently within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettledAxes {
    pub x:   bool,
    pub y:   bool,
    pub yaw: bool,
}

impl SettledAxes {
    pub fn all(&self) -> bool { self.x && self.y && self.yaw }
}

/// A commanded goal pose with its settle tolerance.
///
/// Built through [`Target::new`], which rejects unusable values, and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pose:       Pose,
    tolerance:  Tolerance,
    resolution: f64,
}

impl Target {
    /// Creates a target at (`x`, `y`) meters facing `yaw` degrees.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidTarget`] if a coordinate is not finite or a
    /// tolerance is negative or not finite.
    pub fn new(x: f64, y: f64, yaw: f64, tolerance: Tolerance) -> Result<Self, NavError> {
        require_finite(x, "x", NavError::InvalidTarget)?;
        require_finite(y, "y", NavError::InvalidTarget)?;
        require_finite(yaw, "yaw", NavError::InvalidTarget)?;
        require_non_negative(tolerance.distance, "distance tolerance", NavError::InvalidTarget)?;
        require_non_negative(tolerance.angle, "angle tolerance", NavError::InvalidTarget)?;
        Ok(Self {
            pose: Pose::new(x, y, yaw),
            tolerance,
            resolution: 1.0,
        })
    }

    /// Like [`Target::new`] with the position and distance tolerance given
    /// in inches.
    pub fn from_inches(x: f64, y: f64, yaw: f64, tolerance: Tolerance) -> Result<Self, NavError> {
        let tolerance = Tolerance::new(to_meters(tolerance.distance), tolerance.angle);
        Self::new(to_meters(x), to_meters(y), yaw, tolerance)
    }

    /// Returns this target with both tolerances multiplied by `resolution`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidTarget`] unless `resolution` is finite and
    /// positive.
    pub fn with_resolution(self, resolution: f64) -> Result<Self, NavError> {
        require_finite(resolution, "resolution", NavError::InvalidTarget)?;
        if resolution <= 0.0 {
            return Err(NavError::InvalidTarget(format!(
                "resolution must be positive, got {}",
                resolution
            )));
        }
        Ok(Self { resolution, ..self })
    }

    pub fn pose(&self) -> &Pose { &self.pose }

    pub fn tolerance(&self) -> Tolerance { self.tolerance }

    pub fn resolution(&self) -> f64 { self.resolution }

    /// Distance tolerance after resolution scaling, meters.
    pub fn distance_tolerance(&self) -> f64 { self.tolerance.distance * self.resolution }

    /// Angle tolerance after resolution scaling, degrees.
    pub fn angle_tolerance(&self) -> f64 { self.tolerance.angle * self.resolution }

    /// Per-axis settle flags for the given raw errors.
    pub fn settled_axes(&self, errors: &AxisErrors) -> SettledAxes {
        SettledAxes {
            x:   errors.x.abs() <= self.distance_tolerance(),
            y:   errors.y.abs() <= self.distance_tolerance(),
            yaw: errors.yaw.abs() <= self.angle_tolerance(),
        }
    }

    /// Whether every axis is within tolerance at once.
    pub fn is_settled(&self, errors: &AxisErrors) -> bool { self.settled_axes(errors).all() }
}

/// The field origin facing 0°, settled within 2 cm and 1°.
impl Default for Target {
    fn default() -> Self {
        Self {
            pose:       Pose::origin(),
            tolerance:  Tolerance::new(0.02, 1.0),
            resolution: 1.0,
        }
    }
}

/// Tuning shared by every movement of one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Sleep between ticks.
    pub tick_period:            Duration,
    /// Smallest nonzero command magnitude (static friction floor).
    pub lower_limit:            f64,
    /// Largest command magnitude.
    pub upper_limit:            f64,
    /// Translation error, meters, that maps to full output.
    pub translation_full_scale: f64,
    /// Heading error, degrees, that maps to full output.
    pub rotation_full_scale:    f64,
}

impl ControllerConfig {
    pub fn new(
        tick_period: Duration,
        lower_limit: f64,
        upper_limit: f64,
        translation_full_scale: f64,
        rotation_full_scale: f64,
    ) -> Self {
        Self {
            tick_period,
            lower_limit,
            upper_limit,
            translation_full_scale,
            rotation_full_scale,
        }
    }

    /// Checks that the limits and scales are usable.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] unless
    /// `0 <= lower_limit <= upper_limit <= 1`, both full scales are finite
    /// and positive, and the tick period is nonzero.
    pub fn validate(&self) -> Result<(), NavError> {
        require_non_negative(self.lower_limit, "lower_limit", NavError::InvalidConfig)?;
        require_non_negative(self.upper_limit, "upper_limit", NavError::InvalidConfig)?;
        if self.lower_limit > self.upper_limit || self.upper_limit > 1.0 {
            return Err(NavError::InvalidConfig(format!(
                "limits must satisfy 0 <= lower <= upper <= 1, got [{}, {}]",
                self.lower_limit, self.upper_limit
            )));
        }
        for (name, scale) in [
            ("translation_full_scale", self.translation_full_scale),
            ("rotation_full_scale", self.rotation_full_scale),
        ] {
            require_finite(scale, name, NavError::InvalidConfig)?;
            if scale <= 0.0 {
                return Err(NavError::InvalidConfig(format!("{} must be positive", name)));
            }
        }
        if self.tick_period.is_zero() {
            return Err(NavError::InvalidConfig("tick_period must be nonzero".to_string()));
        }
        Ok(())
    }

    fn shape_translation(&self, power: f64) -> f64 {
        clamp_with_deadband(power / self.translation_full_scale, self.lower_limit, self.upper_limit)
    }

    fn shape_rotation(&self, power: f64) -> f64 {
        clamp_with_deadband(power / self.rotation_full_scale, self.lower_limit, self.upper_limit)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_period:            TICK_PERIOD,
            lower_limit:            0.10,
            upper_limit:            1.0,
            translation_full_scale: 2.0,
            rotation_full_scale:    180.0,
        }
    }
}

/// Paces the control loop between ticks.
pub trait Pacer {
    /// Waits for one tick period.
    fn pace(&mut self, period: Duration) -> impl Future<Output = ()>;
}

impl<T: Pacer + ?Sized> Pacer for &mut T {
    fn pace(&mut self, period: Duration) -> impl Future<Output = ()> { (**self).pace(period) }
}

/// Sleeps on the vexide executor.
#[cfg(target_os = "vexos")]
#[derive(Debug, Clone, Copy, Default)]
pub struct VexPacer;

#[cfg(target_os = "vexos")]
impl Pacer for VexPacer {
    fn pace(&mut self, period: Duration) -> impl Future<Output = ()> { vexide::time::sleep(period) }
}

/// Robot-relative drive command, each axis in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisCommand {
    pub strafe:  f64,
    pub forward: f64,
    pub turn:    f64,
}

/// Summary of a finished movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveReport {
    /// Control ticks run, including the final one.
    pub ticks:  u32,
    /// The last pose read.
    pub pose:   Pose,
    /// Raw errors at that pose.
    pub errors: AxisErrors,
}

/// How a movement ended. The drivetrain is stopped in both cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveOutcome {
    /// Every axis came within tolerance.
    Settled(DriveReport),
    /// The cancel signal fired first.
    Cancelled(DriveReport),
}

impl DriveOutcome {
    pub fn report(&self) -> &DriveReport {
        match self {
            DriveOutcome::Settled(report) | DriveOutcome::Cancelled(report) => report,
        }
    }

    pub fn is_settled(&self) -> bool { matches!(self, DriveOutcome::Settled(_)) }
}

/// Loop-local state for one movement.
struct ControllerState {
    x:       AxisPid,
    y:       AxisPid,
    yaw:     AxisPid,
    command: AxisCommand,
    ticks:   u32,
}

impl ControllerState {
    fn new(gains: &Gains, config: &ControllerConfig) -> Self {
        let translation_cap = config.upper_limit * config.translation_full_scale;
        let rotation_cap = config.upper_limit * config.rotation_full_scale;
        Self {
            x:       AxisPid::new(gains.x, translation_cap),
            y:       AxisPid::new(gains.y, translation_cap),
            yaw:     AxisPid::new(gains.yaw, rotation_cap),
            command: AxisCommand::default(),
            ticks:   0,
        }
    }
}

/// The waypoint controller.
///
/// Owns the pose adapter, the drivetrain and the pacer for its whole life.
pub struct WaypointController<P, S, D, T> {
    adapter: FeedbackAdapter<P, S>,
    drive:   D,
    pacer:   T,
    config:  ControllerConfig,
}

impl<P, S, D, T> WaypointController<P, S, D, T>
where
    P: PoseSensor,
    S: PoseSensor,
    D: HolonomicDrive,
    T: Pacer,
{
    /// Creates a controller.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidConfig`] if `config` fails
    /// [`ControllerConfig::validate`].
    pub fn new(
        adapter: FeedbackAdapter<P, S>,
        drive: D,
        pacer: T,
        config: ControllerConfig,
    ) -> Result<Self, NavError> {
        config.validate()?;
        Ok(Self {
            adapter,
            drive,
            pacer,
            config,
        })
    }

    /// Drives to `target` and resolves once every axis has settled.
    ///
    /// There is no timeout; wrap with [`drive_to_until`](Self::drive_to_until)
    /// and a [`cancel::TickBudget`] or [`cancel::CancelToken`] to bound it.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidGains`] before moving if a gain is unusable.
    pub async fn drive_to(
        &mut self,
        target: &Target,
        gains: &Gains,
    ) -> Result<DriveOutcome, NavError> {
        self.drive_to_until(target, gains, NeverCancel).await
    }

    /// Drives to `target` until it settles or `cancel` fires.
    ///
    /// `cancel` is polled once per tick, after the settle check and before
    /// the drive command. Both outcomes stop the drivetrain before returning.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidGains`] before moving if a gain is unusable.
    pub async fn drive_to_until<C: CancelSignal>(
        &mut self,
        target: &Target,
        gains: &Gains,
        mut cancel: C,
    ) -> Result<DriveOutcome, NavError> {
        gains.validate()?;
        let mut state = ControllerState::new(gains, &self.config);
        let goal = target.pose();
        info!("Driving to ({:.3}, {:.3}, {:.1})", goal.x, goal.y, goal.yaw);

        loop {
            state.ticks += 1;
            let fix = self.adapter.read_fix();
            let errors = AxisErrors::between(&fix.pose, goal);
            let report = DriveReport {
                ticks: state.ticks,
                pose: fix.pose,
                errors,
            };

            if fix.is_fresh() && target.is_settled(&errors) {
                self.drive.stop();
                info!("Settled after {} ticks at {:?}", state.ticks, fix.pose);
                return Ok(DriveOutcome::Settled(report));
            }

            if cancel.is_cancelled() {
                self.drive.stop();
                warn!("Movement cancelled after {} ticks at {:?}", state.ticks, fix.pose);
                return Ok(DriveOutcome::Cancelled(report));
            }

            if fix.is_fresh() {
                let (rx, ry) = rotate_into_robot_frame(errors.x, errors.y, fix.pose.yaw);
                state.command = AxisCommand {
                    strafe:  self.config.shape_translation(state.x.update(rx)),
                    forward: self.config.shape_translation(state.y.update(ry)),
                    turn:    self.config.shape_rotation(state.yaw.update(errors.yaw)),
                };
            } else {
                debug!("Stale pose, repeating previous command");
            }

            let command = state.command;
            self.drive.drive_axes(command.strafe, command.forward, command.turn);
            debug!(
                "tick {} {:?} pose ({:.3}, {:.3}, {:.1}) err ({:.3}, {:.3}, {:.1}) cmd ({:.2}, {:.2}, {:.2})",
                state.ticks,
                fix.source,
                fix.pose.x,
                fix.pose.y,
                fix.pose.yaw,
                errors.x,
                errors.y,
                errors.yaw,
                command.strafe,
                command.forward,
                command.turn
            );

            self.pacer.pace(self.config.tick_period).await;
        }
    }

    pub fn config(&self) -> &ControllerConfig { &self.config }

    pub fn adapter_mut(&mut self) -> &mut FeedbackAdapter<P, S> { &mut self.adapter }

    /// Direct access to the drivetrain, e.g. for driver control between
    /// movements.
    pub fn drive_mut(&mut self) -> &mut D { &mut self.drive }

    /// Gives back the owned parts.
    pub fn into_parts(self) -> (FeedbackAdapter<P, S>, D, T) { (self.adapter, self.drive, self.pacer) }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use futures::executor::block_on;

    use super::{cancel::TickBudget, *};
    use crate::{
        error::SensorError,
        motion::{
            gps::{GpsStatus, SensorFrame},
            pid::AxisGains,
        },
    };

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Drive(AxisCommand),
        Stop,
    }

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<Call>>>);

    impl HolonomicDrive for Recorder {
        fn drive_axes(&mut self, strafe: f64, forward: f64, turn: f64) {
            self.0.borrow_mut().push(Call::Drive(AxisCommand {
                strafe,
                forward,
                turn,
            }));
        }

        fn stop(&mut self) { self.0.borrow_mut().push(Call::Stop); }
    }

    struct Scripted(VecDeque<Result<GpsStatus, SensorError>>);

    impl PoseSensor for Scripted {
        fn status(&mut self) -> Result<GpsStatus, SensorError> {
            self.0
                .pop_front()
                .unwrap_or_else(|| Err(SensorError::Unavailable("script ended".to_string())))
        }
    }

    #[derive(Default)]
    struct CountingPacer(u32);

    impl Pacer for CountingPacer {
        async fn pace(&mut self, _period: Duration) { self.0 += 1; }
    }

    fn at(x: f64, y: f64, yaw: f64) -> Result<GpsStatus, SensorError> {
        Ok(GpsStatus {
            x,
            y,
            yaw,
            error_metric: 0.0,
        })
    }

    fn controller(
        script: Vec<Result<GpsStatus, SensorError>>,
    ) -> (WaypointController<Scripted, Scripted, Recorder, CountingPacer>, Recorder) {
        let recorder = Recorder::default();
        let adapter = FeedbackAdapter::single(Scripted(script.into()), SensorFrame::identity());
        let nav = WaypointController::new(
            adapter,
            recorder.clone(),
            CountingPacer::default(),
            ControllerConfig::default(),
        )
        .unwrap();
        (nav, recorder)
    }

    fn gains() -> Gains { Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0)) }

    #[test]
    fn already_at_target_only_stops() {
        let (mut nav, recorder) = controller(vec![at(0.5, -0.25, 30.0)]);
        let target = Target::new(0.5, -0.25, 30.0, Tolerance::new(0.01, 0.5)).unwrap();
        let outcome = block_on(nav.drive_to(&target, &gains())).unwrap();
        assert!(outcome.is_settled());
        assert_eq!(outcome.report().ticks, 1);
        assert_eq!(*recorder.0.borrow(), vec![Call::Stop]);
        let (_, _, pacer) = nav.into_parts();
        assert_eq!(pacer.0, 0);
    }

    #[test]
    fn commands_follow_sign_conventions() {
        let (mut nav, recorder) = controller(vec![at(0.0, 0.0, 0.0), at(1.0, 1.0, 45.0)]);
        let target = Target::new(1.0, 1.0, 45.0, Tolerance::new(0.01, 0.5)).unwrap();
        block_on(nav.drive_to(&target, &Gains::split(AxisGains::p(1.0), AxisGains::p(1.0))))
            .unwrap();
        let calls = recorder.0.borrow();
        let Call::Drive(first) = calls[0] else {
            panic!("expected a drive command first, got {:?}", calls[0]);
        };
        // translation error is current - target (negative), heading error target - current
        assert_eq!(first.strafe, -0.5);
        assert_eq!(first.forward, -0.5);
        assert_eq!(first.turn, 0.25);
        assert_eq!(calls[1], Call::Stop);
    }

    #[test]
    fn stale_tick_repeats_previous_command() {
        let (mut nav, recorder) = controller(vec![
            at(0.0, 0.0, 0.0),
            Err(SensorError::Unavailable("blip".to_string())),
            at(1.0, 0.0, 0.0),
        ]);
        let target = Target::new(1.0, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
        block_on(nav.drive_to(&target, &gains())).unwrap();
        let calls = recorder.0.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[2], Call::Stop);
    }

    #[test]
    fn stale_pose_never_settles() {
        // no sensor ever answers; the held origin pose matches the target
        let (mut nav, recorder) = controller(vec![]);
        let target = Target::new(0.0, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
        let outcome =
            block_on(nav.drive_to_until(&target, &gains(), TickBudget::new(5))).unwrap();
        assert!(!outcome.is_settled());
        let calls = recorder.0.borrow();
        assert_eq!(calls.len(), 6);
        assert!(calls[..5].iter().all(|c| *c == Call::Drive(AxisCommand::default())));
        assert_eq!(calls.last(), Some(&Call::Stop));
    }

    #[test]
    fn cancelled_movement_still_stops_once() {
        let script = (0..100).map(|_| at(0.0, 0.0, 0.0)).collect();
        let (mut nav, recorder) = controller(script);
        let target = Target::new(1.0, 1.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
        let outcome =
            block_on(nav.drive_to_until(&target, &gains(), TickBudget::new(10))).unwrap();
        assert!(matches!(outcome, DriveOutcome::Cancelled(report) if report.ticks == 11));
        let calls = recorder.0.borrow();
        assert_eq!(calls.len(), 11);
        assert_eq!(calls.iter().filter(|c| **c == Call::Stop).count(), 1);
        assert_eq!(calls.last(), Some(&Call::Stop));
    }

    #[test]
    fn invalid_gains_are_rejected_before_moving() {
        let (mut nav, recorder) = controller(vec![at(0.0, 0.0, 0.0)]);
        let target = Target::new(1.0, 1.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
        let bad = Gains::split(AxisGains::p(f64::INFINITY), AxisGains::p(1.0));
        assert!(matches!(
            block_on(nav.drive_to(&target, &bad)),
            Err(NavError::InvalidGains(_))
        ));
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn target_validation() {
        assert!(Target::new(f64::NAN, 0.0, 0.0, Tolerance::new(0.01, 0.5)).is_err());
        assert!(Target::new(0.0, 0.0, 0.0, Tolerance::new(-0.01, 0.5)).is_err());
        assert!(Target::new(0.0, 0.0, 0.0, Tolerance::new(0.01, f64::NAN)).is_err());
        let target = Target::new(0.0, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
        assert!(target.with_resolution(0.0).is_err());
        let coarse = target.with_resolution(4.0).unwrap();
        assert!((coarse.distance_tolerance() - 0.04).abs() < 1e-12);
        assert_eq!(coarse.angle_tolerance(), 2.0);
    }

    #[test]
    fn resolution_widens_settling() {
        let target = Target::new(0.0, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
        let errors = AxisErrors {
            x:   0.02,
            y:   -0.02,
            yaw: 0.9,
        };
        assert!(!target.is_settled(&errors));
        assert!(target.with_resolution(2.0).unwrap().is_settled(&errors));
        assert_eq!(target.settled_axes(&errors), SettledAxes {
            x:   false,
            y:   false,
            yaw: false,
        });
    }

    #[test]
    fn config_validation() {
        assert!(ControllerConfig::default().validate().is_ok());
        let mut config = ControllerConfig::default();
        config.lower_limit = 0.5;
        config.upper_limit = 0.4;
        assert!(matches!(config.validate(), Err(NavError::InvalidConfig(_))));
        let mut config = ControllerConfig::default();
        config.upper_limit = 1.5;
        assert!(config.validate().is_err());
        let mut config = ControllerConfig::default();
        config.rotation_full_scale = 0.0;
        assert!(config.validate().is_err());
        let mut config = ControllerConfig::default();
        config.tick_period = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_target_is_origin() {
        let home = Target::default();
        assert_eq!(*home.pose(), Pose::origin());
        assert_eq!(home.distance_tolerance(), 0.02);
        assert_eq!(home.angle_tolerance(), 1.0);
    }

    #[test]
    fn inch_targets_convert_tolerance_too() {
        let target = Target::from_inches(36.0, 36.0, 45.0, Tolerance::new(0.5, 1.0)).unwrap();
        assert!((target.pose().x - 0.9144).abs() < 1e-12);
        assert!((target.distance_tolerance() - 0.0127).abs() < 1e-12);
    }
}
