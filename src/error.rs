use thiserror::Error;

/// Error type for coordinate validation and coordinate-text parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordError {
    #[error("latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { value: f64 },

    #[error("longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange { value: f64 },

    #[error("coordinate parse error at position {position}: {message}")]
    Parse { position: u32, message: String },

    #[error("empty coordinate text")]
    Empty,
}

/// Error type for device discovery.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("bluetooth permission denied")]
    PermissionDenied,

    #[error("bluetooth adapter is off")]
    BluetoothOff,

    #[error("device discovery is not supported on this platform")]
    Unsupported,
}

/// Error type for the navigation handoff.
///
/// `manual_entry` carries the destination as text the user can type into a
/// map application by hand; there is no retry after this point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("no map application could be opened; enter coordinates manually: {manual_entry}")]
    OpenFailed { manual_entry: String },
}

/// Error type for position acquisition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("no position fix available")]
    Unavailable,
}
