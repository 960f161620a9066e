//! Field poses and heading arithmetic.
//!
//! All poses use the field frame reported by the GPS strips: `x` and `y` in
//! meters from the field center, `yaw` in degrees wrapped to `[-180, 180)`.

/// A field position with heading.
///
/// Each sensor read produces a fresh `Pose`; nothing mutates one in place.
///
/// # Example
///
/// ```
/// use xnav::motion::pose::Pose;
///
/// let pose = Pose::new(0.6, -0.3, 270.0);
/// assert_eq!(pose.yaw, -90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// The x-coordinate in meters.
    pub x:   f64,
    /// The y-coordinate in meters.
    pub y:   f64,
    /// The heading in degrees, wrapped to `[-180, 180)`.
    pub yaw: f64,
}

impl Pose {
    /// Creates a new Pose, wrapping `yaw` into `[-180, 180)`.
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            yaw: wrap_degrees(yaw),
        }
    }

    /// Creates a Pose at the field origin with heading 0.
    pub fn origin() -> Self { Self::new(0.0, 0.0, 0.0) }

    /// Straight-line distance to another pose in meters.
    pub fn distance_to(&self, other: &Pose) -> f64 { (self.x - other.x).hypot(self.y - other.y) }
}

/// Wraps an angle in degrees into `[-180, 180)`.
///
/// Every heading in the crate goes through this function so that sensor
/// frames, failover remaps and yaw error all agree on one wrap point.
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 180.0 { wrapped - 360.0 } else { wrapped }
}
