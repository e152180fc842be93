use crate::error::CoordError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        let coordinate = Coordinate {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> Result<(), CoordError> {
        if !self.latitude.is_finite() || self.latitude.abs() > 90.0 {
            return Err(CoordError::LatitudeOutOfRange {
                value: self.latitude,
            });
        }
        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(CoordError::LongitudeOutOfRange {
                value: self.longitude,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceCategory {
    Phone,
    Headphones,
    Watch,
    Ball,
    Unknown,
}

#[derive(Clone, Debug)]
pub struct TrackedDevice {
    pub id: String,
    pub display_name: String,
    /// Signal strength in dBm (negative, stronger toward zero).
    pub rssi_dbm: i16,
    pub coordinate: Coordinate,
    pub last_seen_unix: i64,
    /// Derived from the last known position; never authoritative.
    pub distance_m: Option<u32>,
    pub category: DeviceCategory,
}

#[derive(Clone, Debug)]
pub struct BallMarker {
    pub id: String,
    pub coordinate: Coordinate,
    pub title: String,
    pub note: Option<String>,
    pub created_unix: i64,
    pub hole_number: u8,
    /// Derived from the last known position; never authoritative.
    pub distance_m: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub distance_m: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub hole_number: u8,
    pub strokes: u32,
}

#[derive(Clone, Debug)]
pub struct PlayerRound {
    pub player: Player,
    pub scores: Vec<HoleScore>,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    pub id: SessionId,
    pub course_name: String,
    pub started_unix: i64,
    pub holes: Vec<Hole>,
    pub rounds: Vec<PlayerRound>,
}

/// Platform feature availability, resolved once at startup by the host and
/// injected into whatever needs it rather than probed at call sites.
#[derive(Clone, Copy, Debug, Default)]
pub struct Capabilities {
    pub location_available: bool,
    pub bluetooth_available: bool,
}
