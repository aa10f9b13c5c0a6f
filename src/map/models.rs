use serde::{Deserialize, Serialize};
use std::fmt;

/// Two points whose latitude and longitude each differ by less than this
/// many degrees are treated as the same place when deduplicating bookmarks.
pub const PROXIMITY_EPSILON: f64 = 1e-4;

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn is_near(&self, other: LatLng) -> bool {
        (self.lat - other.lat).abs() < PROXIMITY_EPSILON
            && (self.lng - other.lng).abs() < PROXIMITY_EPSILON
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_within_epsilon_are_near() {
        let a = LatLng { lat: 10.0, lng: 20.0 };
        let b = LatLng {
            lat: 10.00005,
            lng: 20.00005,
        };
        assert!(a.is_near(b));
    }

    #[test]
    fn points_apart_by_more_than_epsilon_are_not_near() {
        let a = LatLng { lat: 10.0, lng: 20.0 };
        let b = LatLng {
            lat: 10.0002,
            lng: 20.0,
        };
        assert!(!a.is_near(b));
    }

    #[test]
    fn near_requires_both_axes_within_epsilon() {
        let a = LatLng { lat: 10.0, lng: 20.0 };
        let b = LatLng { lat: 10.0, lng: 21.0 };
        assert!(!a.is_near(b));
    }

    #[test]
    fn coordinates_out_of_range_are_invalid() {
        assert!(!LatLng { lat: 90.5, lng: 0.0 }.is_valid());
        assert!(!LatLng {
            lat: 0.0,
            lng: -180.5,
        }
        .is_valid());
        assert!(LatLng {
            lat: -90.0,
            lng: 180.0,
        }
        .is_valid());
    }

    #[test]
    fn display_uses_six_decimal_places() {
        let point = LatLng {
            lat: 37.7749,
            lng: -122.4194,
        };
        assert_eq!(point.to_string(), "37.774900, -122.419400");
    }
}
