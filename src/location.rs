//! Geographic location for weather queries

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated coordinate pair with an optional elevation override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Elevation override in meters above sea level
    pub elevation: Option<f64>,
}

impl Location {
    /// Create a new location. Latitude must be within [-90, 90] and
    /// longitude within [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::validation(format!(
                "latitude must be between -90 and 90, got {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::validation(format!(
                "longitude must be between -180 and 180, got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
            elevation: None,
        })
    }

    /// Return a copy of this location with the elevation override set.
    #[must_use]
    pub fn with_elevation(mut self, meters: f64) -> Self {
        self.elevation = Some(meters);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let loc = Location::new(52.52, 13.41).unwrap();
        assert_eq!(loc.latitude, 52.52);
        assert_eq!(loc.longitude, 13.41);
        assert!(loc.elevation.is_none());
    }

    #[test]
    fn boundary_coordinates_are_valid() {
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn out_of_range_latitude_fails() {
        let err = Location::new(90.0001, 0.0).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("latitude"));

        assert!(Location::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn out_of_range_longitude_fails() {
        let err = Location::new(0.0, 180.0001).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("longitude"));

        assert!(Location::new(0.0, -181.0).is_err());
    }

    #[test]
    fn with_elevation_returns_modified_copy() {
        let loc = Location::new(52.52, 13.41).unwrap();
        let raised = loc.with_elevation(100.5);
        assert_eq!(raised.elevation, Some(100.5));
        assert!(loc.elevation.is_none());
    }
}
