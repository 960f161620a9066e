//! [`PoseSensor`] implementation for the V5 GPS sensor.
//!
//! # Example
//!
//! ```ignore
//! use vexide::{math::Angle, prelude::*, smart::gps::GpsSensor};
//! use xnav::motion::gps::{FeedbackAdapter, SensorFrame};
//!
//! // Sensor 0.0 m left/right and 0.127 m behind the tracking center.
//! let gps = GpsSensor::new(peripherals.port_9, [0.0, -0.127], [0.0, 0.0], Angle::from_degrees(180.0));
//! let mut adapter = FeedbackAdapter::single(gps, SensorFrame::identity());
//! ```

use log::warn;
use vexide::smart::{PortError, gps::GpsSensor};

use super::{GpsStatus, PoseSensor};
use crate::error::SensorError;

impl PoseSensor for GpsSensor {
    fn status(&mut self) -> Result<GpsStatus, SensorError> {
        let position = self.position().map_err(unavailable)?;
        let heading = self.heading().map_err(unavailable)?;
        // An unreadable quality metric is treated as the worst possible quality
        let error_metric = self.error().unwrap_or_else(|e| {
            warn!("GPS Error Metric Error: {}", e);
            f64::INFINITY
        });
        Ok(GpsStatus {
            x: position.x,
            y: position.y,
            yaw: heading.as_degrees(),
            error_metric,
        })
    }
}

fn unavailable(e: PortError) -> SensorError { SensorError::Unavailable(format!("GPS: {}", e)) }
