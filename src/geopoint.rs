use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const KILOMETERS_PER_MILE: f64 = 1.609344;
pub const MILES_PER_KILOMETER: f64 = 1.0 / KILOMETERS_PER_MILE; // 0.621371...

/// A latitude/longitude pair as carried in tracking events and the
/// persisted duty-log encoding (`lat/long`, 5 decimal places).
///
/// The zero value (0,0) is the uninitialized sentinel and never counts
/// as a valid position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True if both coordinates are finite, in range, and not the
    /// uninitialized (0,0) sentinel.
    pub fn is_valid(&self) -> bool {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return false;
        }
        if self.latitude < -90.0 || self.latitude > 90.0 {
            return false;
        }
        if self.longitude < -180.0 || self.longitude > 180.0 {
            return false;
        }
        self.latitude != 0.0 || self.longitude != 0.0
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Stored rows carry 5 decimal places per axis.
        write!(f, "{:.5}/{:.5}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Error)]
pub enum GeoPointParseError {
    #[error("missing '/' separator")]
    MissingSeparator,
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] std::num::ParseFloatError),
}

impl FromStr for GeoPoint {
    type Err = GeoPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once('/')
            .ok_or(GeoPointParseError::MissingSeparator)?;
        Ok(Self {
            latitude: lat.trim().parse()?,
            longitude: lon.trim().parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_ranges() {
        assert!(GeoPoint::new(37.78352, -121.22567).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 10.0).is_valid());
        assert!(!GeoPoint::new(10.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_zero_sentinel_is_invalid() {
        assert!(!GeoPoint::default().is_valid());
        assert!(!GeoPoint::new(0.0, 0.0).is_valid());
        // A zero on only one axis is a real position.
        assert!(GeoPoint::new(0.0, 12.5).is_valid());
        assert!(GeoPoint::new(51.47783, 0.0).is_valid());
    }

    #[test]
    fn test_display_format() {
        let gp = GeoPoint::new(37.78352, -121.22567);
        assert_eq!(gp.to_string(), "37.78352/-121.22567");
        assert_eq!(GeoPoint::new(1.5, -2.0).to_string(), "1.50000/-2.00000");
    }

    #[test]
    fn test_parse_round_trip() {
        let gp: GeoPoint = "37.78352/-121.22567".parse().unwrap();
        assert_eq!(gp.latitude, 37.78352);
        assert_eq!(gp.longitude, -121.22567);
        assert_eq!(gp.to_string(), "37.78352/-121.22567");
    }

    #[test]
    fn test_parse_errors() {
        assert!("37.78352".parse::<GeoPoint>().is_err());
        assert!("abc/def".parse::<GeoPoint>().is_err());
        assert!("".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_unit_constants() {
        assert!((KILOMETERS_PER_MILE * MILES_PER_KILOMETER - 1.0).abs() < 1e-12);
        assert!((MILES_PER_KILOMETER - 0.621371).abs() < 1e-6);
    }
}
