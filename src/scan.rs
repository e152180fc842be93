//! Device discovery seam.
//!
//! A scanner owns no clock: `start` returns a plan of staggered sightings and
//! the discovery engine decides when each one becomes visible. Which
//! implementation runs is chosen by configuration (the host's capability
//! descriptor), never by a failed runtime probe.

use crate::error::ScanError;
use crate::models::{Coordinate, DeviceCategory};

/// A device as reported by a scanner, before the engine derives the
/// last-seen and distance fields.
#[derive(Clone, Debug)]
pub struct DiscoveredDevice {
    pub id: String,
    pub display_name: String,
    /// Signal strength in dBm.
    pub rssi_dbm: i16,
    pub coordinate: Coordinate,
    pub category: DeviceCategory,
}

/// One scheduled appearance within a scan.
#[derive(Clone, Debug)]
pub struct Sighting {
    /// Delay from scan start until the device becomes visible.
    pub after_ms: u64,
    pub device: DiscoveredDevice,
}

/// Everything a scan will surface, plus how long to linger afterwards.
#[derive(Clone, Debug, Default)]
pub struct ScanPlan {
    pub sightings: Vec<Sighting>,
    /// Idle buffer after the last sighting before the scan auto-stops.
    pub settle_ms: u64,
}

impl ScanPlan {
    /// Total scan duration: the last sighting plus the settle buffer.
    pub fn duration_ms(&self) -> u64 {
        let last = self
            .sightings
            .iter()
            .map(|sighting| sighting.after_ms)
            .max()
            .unwrap_or(0);
        last + self.settle_ms
    }
}

pub trait DeviceScanner {
    fn start(&mut self) -> Result<ScanPlan, ScanError>;
    fn stop(&mut self);
}
