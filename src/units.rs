//! Length conversions between field units.
//!
//! Poses and targets are always in meters. Field drawings and game manuals
//! use inches, so routes are usually written in inches and converted here.

/// Meters per inch.
pub const METERS_PER_INCH: f64 = 0.0254;

/// Converts a length in inches to meters.
///
/// # Example
///
/// ```
/// use xnav::units::to_meters;
///
/// assert!((to_meters(36.0) - 0.9144).abs() < 1e-12);
/// ```
pub fn to_meters(inches: f64) -> f64 { inches * METERS_PER_INCH }

/// Converts a length in meters to inches.
pub fn to_inches(meters: f64) -> f64 { meters / METERS_PER_INCH }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_field_tile_is_two_feet() {
        assert!((to_meters(24.0) - 0.6096).abs() < 1e-12);
        assert!((to_inches(0.6096) - 24.0).abs() < 1e-9);
    }
}
