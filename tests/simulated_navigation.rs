use futures::executor::block_on;
use xnav::{
    error::NavError,
    motion::{
        gps::{AdapterConfig, FeedbackAdapter, PoseSource, SensorFrame},
        pid::{AxisGains, Gains},
        pose::Pose,
        sim::{SimDrive, SimGps, SimPacer, SimParams, SimRobot},
        waypoint::{
            ControllerConfig, DriveOutcome, Target, Tolerance, WaypointController,
            cancel::TickBudget,
        },
    },
    to_meters,
};

type SimNav = WaypointController<SimGps, SimGps, SimDrive, SimPacer>;

fn single(robot: &SimRobot, config: ControllerConfig) -> SimNav {
    let adapter = FeedbackAdapter::single(robot.gps(), SensorFrame::identity());
    WaypointController::new(adapter, robot.drive(), robot.pacer(), config).unwrap()
}

fn sample_target() -> Target {
    Target::new(to_meters(36.0), to_meters(36.0), 45.0, Tolerance::new(0.01, 0.5)).unwrap()
}

fn within_tolerance(pose: Pose, target: &Target) -> bool {
    let goal = target.pose();
    (pose.x - goal.x).abs() <= target.distance_tolerance()
        && (pose.y - goal.y).abs() <= target.distance_tolerance()
        && xnav::motion::pose::wrap_degrees(goal.yaw - pose.yaw).abs() <= target.angle_tolerance()
}

#[test]
fn sample_move_settles_and_stops_once() {
    let robot = SimRobot::new(Pose::origin(), SimParams::default());
    let mut nav = single(&robot, ControllerConfig::default());
    let target = sample_target();
    let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0 / 90.0));

    let outcome =
        block_on(nav.drive_to_until(&target, &gains, TickBudget::new(2000))).unwrap();

    assert!(outcome.is_settled(), "did not settle: {:?}", outcome);
    assert!(outcome.report().ticks < 2000);
    assert!(within_tolerance(robot.pose(), &target));
    assert_eq!(robot.stop_count(), 1);
    assert_eq!(robot.commands().len() as u32, outcome.report().ticks - 1);
}

#[test]
fn every_command_respects_the_deadband() {
    let robot = SimRobot::new(Pose::origin(), SimParams::default());
    let mut nav = single(&robot, ControllerConfig::default());
    let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0 / 90.0));
    block_on(nav.drive_to_until(&sample_target(), &gains, TickBudget::new(2000))).unwrap();

    let commands = robot.commands();
    assert!(!commands.is_empty());
    for command in commands {
        for axis in [command.strafe, command.forward, command.turn] {
            assert!(axis == 0.0 || (0.10..=1.0).contains(&axis.abs()), "{:?}", command);
        }
    }
}

#[test]
fn proportional_only_error_never_grows() {
    let robot = SimRobot::new(Pose::origin(), SimParams::default());
    let config = ControllerConfig {
        lower_limit: 0.0,
        ..ControllerConfig::default()
    };
    let mut nav = single(&robot, config);
    let target = sample_target();
    let gains = Gains::split(AxisGains::p(1.0), AxisGains::p(1.0));

    let outcome =
        block_on(nav.drive_to_until(&target, &gains, TickBudget::new(2000))).unwrap();
    assert!(outcome.is_settled());

    let goal = *target.pose();
    let errors: Vec<(f64, f64, f64)> = robot
        .trace()
        .iter()
        .map(|p| {
            (
                (p.x - goal.x).abs(),
                (p.y - goal.y).abs(),
                xnav::motion::pose::wrap_degrees(goal.yaw - p.yaw).abs(),
            )
        })
        .collect();
    for pair in errors.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert!(after.0 <= before.0 + 1e-12, "x error grew: {:?}", pair);
        assert!(after.1 <= before.1 + 1e-12, "y error grew: {:?}", pair);
        assert!(after.2 <= before.2 + 1e-12, "yaw error grew: {:?}", pair);
    }
}

#[test]
fn heavy_heading_damping_stalls_against_the_deadband() {
    // kd = 1.0 on heading cancels the proportional term far from the target,
    // so the turn command chatters at the minimum and never closes in
    let robot = SimRobot::new(Pose::origin(), SimParams::default());
    let mut nav = single(&robot, ControllerConfig::default());
    let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0));

    let outcome =
        block_on(nav.drive_to_until(&sample_target(), &gains, TickBudget::new(2000))).unwrap();
    assert!(matches!(outcome, DriveOutcome::Cancelled(_)));
    assert_eq!(robot.stop_count(), 1);
}

#[test]
fn degraded_primary_fails_over_to_rear_sensor() {
    let robot = SimRobot::new(Pose::new(0.2, -0.1, 10.0), SimParams::default());
    robot.set_error_metric(0.2);
    let adapter =
        FeedbackAdapter::failover(robot.gps(), robot.mounted_gps(180.0), AdapterConfig::default());
    let mut nav =
        WaypointController::new(adapter, robot.drive(), robot.pacer(), ControllerConfig::default())
            .unwrap();

    let fix = nav.adapter_mut().read_fix();
    assert_eq!(fix.source, PoseSource::Secondary);
    assert!((fix.pose.yaw - 10.0).abs() < 1e-9);

    let target = Target::new(0.0, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
    let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0 / 90.0));
    let outcome =
        block_on(nav.drive_to_until(&target, &gains, TickBudget::new(2000))).unwrap();
    assert!(outcome.is_settled());
    assert_eq!(nav.adapter_mut().source(), Some(PoseSource::Secondary));
    assert!(within_tolerance(robot.pose(), &target));
}

#[test]
fn robot_already_on_target_does_not_move() {
    let start = Pose::new(0.5, 0.5, -90.0);
    let robot = SimRobot::new(start, SimParams::default());
    let mut nav = single(&robot, ControllerConfig::default());
    let target = Target::new(0.5, 0.5, -90.0, Tolerance::new(0.01, 0.5)).unwrap();
    let gains = Gains::split(AxisGains::pd(1.0, 1.0), AxisGains::pd(1.0 / 90.0, 1.0 / 90.0));

    let outcome = block_on(nav.drive_to(&target, &gains)).unwrap();
    assert_eq!(outcome.report().ticks, 1);
    assert!(robot.commands().is_empty());
    assert_eq!(robot.stop_count(), 1);
    assert_eq!(robot.pace_count(), 0);
    assert_eq!(robot.pose(), start);
}

#[test]
fn offline_sensor_holds_position_until_cancelled() {
    let robot = SimRobot::new(Pose::origin(), SimParams::default());
    robot.set_gps_online(false);
    let mut nav = single(&robot, ControllerConfig::default());
    let target = Target::new(0.0, 0.0, 0.0, Tolerance::new(0.01, 0.5)).unwrap();
    let gains = Gains::split(AxisGains::p(1.0), AxisGains::p(1.0));

    let outcome = block_on(nav.drive_to_until(&target, &gains, TickBudget::new(3))).unwrap();
    assert!(!outcome.is_settled());
    assert_eq!(robot.pose(), Pose::origin());
    assert_eq!(robot.stop_count(), 1);
}

#[test]
fn invalid_config_is_rejected() {
    let robot = SimRobot::new(Pose::origin(), SimParams::default());
    let adapter = FeedbackAdapter::single(robot.gps(), SensorFrame::identity());
    let config = ControllerConfig {
        lower_limit: 0.5,
        upper_limit: 0.2,
        ..ControllerConfig::default()
    };
    assert!(matches!(
        WaypointController::new(adapter, robot.drive(), robot.pacer(), config),
        Err(NavError::InvalidConfig(_))
    ));
}
