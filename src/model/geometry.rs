//! Point geometry

/// A geographic point in `[longitude, latitude, altitude]` order
///
/// Each coordinate is optional: a `Location` without a `latitude` child still
/// yields a point, with that coordinate left undefined rather than zeroed.
/// Present coordinates may be `NaN` when the source text was not numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Altitude in meters
    pub altitude: Option<f64>,
}

impl Point {
    /// Create a point from longitude, latitude and altitude
    pub fn new(longitude: Option<f64>, latitude: Option<f64>, altitude: Option<f64>) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// Coordinates in `[longitude, latitude, altitude]` order
    pub fn coordinates(&self) -> [Option<f64>; 3] {
        [self.longitude, self.latitude, self.altitude]
    }

    /// True when all three coordinates are present and finite
    pub fn is_valid(&self) -> bool {
        self.coordinates()
            .iter()
            .all(|c| c.is_some_and(f64::is_finite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_order() {
        let point = Point::new(Some(-77.0), Some(38.9), Some(100.0));
        assert_eq!(point.coordinates(), [Some(-77.0), Some(38.9), Some(100.0)]);
        assert!(point.is_valid());
    }

    #[test]
    fn test_missing_or_nan_is_not_valid() {
        assert!(!Point::new(Some(1.0), None, Some(0.0)).is_valid());
        assert!(!Point::new(Some(f64::NAN), Some(1.0), Some(0.0)).is_valid());
    }
}
