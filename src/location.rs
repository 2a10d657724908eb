use tracing::{info, warn};
use crate::error::LocationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One-shot platform location capability.
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// Stand-in for device geolocation: reports the sample address coordinates.
pub struct SimulatedLocation;

impl LocationProvider for SimulatedLocation {
    fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(Coordinates {
            lat: 28.6139,
            lng: 77.2090,
        })
    }
}

/// Fetches the device location once at startup.
///
/// Failure is logged and swallowed; no retry is attempted and nothing else
/// depends on the result.
pub fn fetch_startup_location(provider: &dyn LocationProvider) -> Option<Coordinates> {
    match provider.current_location() {
        Ok(coords) => {
            info!(lat = coords.lat, lng = coords.lng, "Location obtained");
            Some(coords)
        }
        Err(e) => {
            warn!(error = %e, "Location error");
            None
        }
    }
}
