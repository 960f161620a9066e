//! Pose feedback from absolute position sensors.
//!
//! This module hides sensor units and sign conventions behind a single
//! [`FeedbackAdapter::read_pose`] call. An adapter wraps either one sensor or
//! a primary/secondary pair with a failover policy driven by the primary's
//! error metric.
//!
//! # Conventions
//!
//! Canonical yaw follows the V5 GPS sensor: degrees, increasing clockwise,
//! wrapped to `[-180, 180)`. A [`SensorFrame`] maps each physical sensor into
//! that frame (translation, rotation, mounting heading offset, optional sign
//! inversion).
//!
//! # Failover
//!
//! ```ignore
//! use xnav::motion::gps::{AdapterConfig, FeedbackAdapter, SensorFrame};
//!
//! let config = AdapterConfig {
//!     error_threshold: 0.05,
//!     primary_frame:   SensorFrame::identity(),
//!     secondary_frame: SensorFrame::mounted(180.0),
//! };
//! let mut adapter = FeedbackAdapter::failover(front_gps, rear_gps, config);
//! let pose = adapter.read_pose();
//! ```

use log::{info, warn};

use crate::{error::SensorError, motion::pose::Pose};

/// V5 GPS sensor bindings.
#[cfg(target_os = "vexos")]
pub mod devices;

/// One raw sample from an absolute pose sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsStatus {
    /// X position in meters, in the sensor's own frame.
    pub x:            f64,
    /// Y position in meters, in the sensor's own frame.
    pub y:            f64,
    /// Heading in degrees, in the sensor's own convention.
    pub yaw:          f64,
    /// Quality metric reported by the sensor. Lower is better; the V5 GPS
    /// reports an RMS position error in meters.
    pub error_metric: f64,
}

/// An absolute pose sensor.
///
/// Reads must return promptly; the control loop calls this once per tick.
pub trait PoseSensor {
    /// Returns the latest sample.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::Unavailable`] if no sample can be read.
    fn status(&mut self) -> Result<GpsStatus, SensorError>;
}

impl<T: PoseSensor + ?Sized> PoseSensor for &mut T {
    fn status(&mut self) -> Result<GpsStatus, SensorError> { (**self).status() }
}

/// Maps a sensor's readings into the canonical field frame.
///
/// Applied in order: optional heading sign inversion, rotation of the
/// position by `rotation` degrees, translation, then heading offset and wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorFrame {
    /// Added to x after rotation, meters.
    pub offset_x:       f64,
    /// Added to y after rotation, meters.
    pub offset_y:       f64,
    /// Rotation of the sensor's position axes, degrees counter-clockwise.
    pub rotation:       f64,
    /// Added to the heading, degrees (e.g. 180 for a rear-facing sensor).
    pub heading_offset: f64,
    /// Negates the raw heading before the offset is applied.
    pub invert_heading: bool,
}

impl SensorFrame {
    /// A frame that passes readings through unchanged (apart from wrapping).
    pub fn identity() -> Self {
        Self {
            offset_x:       0.0,
            offset_y:       0.0,
            rotation:       0.0,
            heading_offset: 0.0,
            invert_heading: false,
        }
    }

    /// A sensor sharing the canonical origin but mounted at `heading_offset`
    /// degrees from the robot's front.
    pub fn mounted(heading_offset: f64) -> Self {
        Self {
            heading_offset,
            ..Self::identity()
        }
    }

    /// Returns this frame with the given translation.
    pub fn with_offset(self, offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            ..self
        }
    }

    /// Returns this frame with the given axis rotation in degrees.
    pub fn with_rotation(self, rotation: f64) -> Self { Self { rotation, ..self } }

    /// Returns this frame with the heading sign inverted.
    pub fn inverted(self) -> Self {
        Self {
            invert_heading: !self.invert_heading,
            ..self
        }
    }

    /// Maps a raw sample into a canonical [`Pose`].
    pub fn apply(&self, status: &GpsStatus) -> Pose {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let x = status.x * cos - status.y * sin + self.offset_x;
        let y = status.x * sin + status.y * cos + self.offset_y;
        let raw_yaw = if self.invert_heading { -status.yaw } else { status.yaw };
        Pose::new(x, y, raw_yaw + self.heading_offset)
    }
}

impl Default for SensorFrame {
    fn default() -> Self { Self::identity() }
}

/// Configuration for a primary/secondary sensor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdapterConfig {
    /// Largest primary error metric still considered trustworthy.
    pub error_threshold: f64,
    /// Frame of the primary sensor.
    pub primary_frame:   SensorFrame,
    /// Frame of the secondary sensor.
    pub secondary_frame: SensorFrame,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            error_threshold: 0.05,
            primary_frame:   SensorFrame::identity(),
            secondary_frame: SensorFrame::mounted(180.0),
        }
    }
}

/// Which sensor produced a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseSource {
    /// The primary sensor.
    Primary,
    /// The secondary sensor, after the primary degraded or failed.
    Secondary,
    /// No sensor produced a sample; this is the last good pose.
    Stale,
}

/// A pose together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseFix {
    pub pose:   Pose,
    pub source: PoseSource,
}

impl PoseFix {
    /// Whether the pose came from a sensor read on this call.
    pub fn is_fresh(&self) -> bool { self.source != PoseSource::Stale }
}

struct Secondary<S> {
    sensor: S,
    frame:  SensorFrame,
}

/// Produces the robot's current field pose from one or two sensors.
///
/// The adapter never fails: when no sensor yields a sample it returns the
/// last good pose (the origin before the first good read) tagged
/// [`PoseSource::Stale`].
pub struct FeedbackAdapter<P, S = P> {
    primary:         P,
    primary_frame:   SensorFrame,
    secondary:       Option<Secondary<S>>,
    error_threshold: f64,
    last_good:       Pose,
    source:          Option<PoseSource>,
}

impl<P: PoseSensor> FeedbackAdapter<P, P> {
    /// Creates an adapter around a single sensor.
    pub fn single(sensor: P, frame: SensorFrame) -> Self {
        Self {
            primary:         sensor,
            primary_frame:   frame,
            secondary:       None,
            error_threshold: f64::INFINITY,
            last_good:       Pose::origin(),
            source:          None,
        }
    }
}

impl<P: PoseSensor, S: PoseSensor> FeedbackAdapter<P, S> {
    /// Creates an adapter that fails over from `primary` to `secondary`
    /// whenever the primary's error metric exceeds the configured threshold.
    pub fn failover(primary: P, secondary: S, config: AdapterConfig) -> Self {
        Self {
            primary,
            primary_frame: config.primary_frame,
            secondary: Some(Secondary {
                sensor: secondary,
                frame:  config.secondary_frame,
            }),
            error_threshold: config.error_threshold,
            last_good: Pose::origin(),
            source: None,
        }
    }

    /// Returns the current canonical pose.
    pub fn read_pose(&mut self) -> Pose { self.read_fix().pose }

    /// Returns the current canonical pose and the sensor it came from.
    pub fn read_fix(&mut self) -> PoseFix {
        let primary = self.primary.status();
        let fix = match self.secondary.as_mut() {
            None => match primary {
                Ok(status) => PoseFix {
                    pose:   self.primary_frame.apply(&status),
                    source: PoseSource::Primary,
                },
                Err(e) => {
                    warn!("{}", e);
                    Self::stale(self.last_good)
                }
            },
            Some(secondary) => match primary {
                Ok(status) if status.error_metric <= self.error_threshold => PoseFix {
                    pose:   self.primary_frame.apply(&status),
                    source: PoseSource::Primary,
                },
                primary => match secondary.sensor.status() {
                    Ok(status) => PoseFix {
                        pose:   secondary.frame.apply(&status),
                        source: PoseSource::Secondary,
                    },
                    Err(e) => {
                        warn!("Secondary {}", e);
                        match primary {
                            // degraded beats nothing
                            Ok(status) => PoseFix {
                                pose:   self.primary_frame.apply(&status),
                                source: PoseSource::Primary,
                            },
                            Err(e) => {
                                warn!("Primary {}", e);
                                Self::stale(self.last_good)
                            }
                        }
                    }
                },
            },
        };

        if fix.is_fresh() {
            self.last_good = fix.pose;
        }
        self.note_source(fix.source);
        fix
    }

    /// The source of the most recent read, if any read has happened.
    pub fn source(&self) -> Option<PoseSource> { self.source }

    /// The most recent pose that came from a sensor.
    pub fn last_good(&self) -> Pose { self.last_good }

    fn stale(last_good: Pose) -> PoseFix {
        PoseFix {
            pose:   last_good,
            source: PoseSource::Stale,
        }
    }

    fn note_source(&mut self, source: PoseSource) {
        if self.source == Some(source) {
            return;
        }
        match (self.source, source) {
            (None, PoseSource::Primary) => {}
            (_, PoseSource::Primary) => info!("Pose feedback restored to primary sensor"),
            (_, PoseSource::Secondary) => warn!("Primary pose sensor degraded, using secondary"),
            (_, PoseSource::Stale) => warn!("No pose sensor available, holding last pose"),
        }
        self.source = Some(source);
    }
}
