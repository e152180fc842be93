//! Canned scanner for demo composition and tests.
//!
//! This is the honest stand-in for real hardware: it is selected explicitly
//! by the host, reveals a fixed device table on a staggered schedule, and
//! cannot fail.

use crate::error::ScanError;
use crate::models::{Coordinate, DeviceCategory};
use crate::scan::{DeviceScanner, DiscoveredDevice, ScanPlan, Sighting};

/// Gap between consecutive reveals.
pub const REVEAL_INTERVAL_MS: u64 = 900;

/// Buffer after the last reveal before the scan auto-stops.
pub const SETTLE_MS: u64 = 1_200;

#[derive(Clone, Debug, Default)]
pub struct FixtureScanner {
    pub devices: Vec<DiscoveredDevice>,
    pub reveal_interval_ms: u64,
    pub settle_ms: u64,
}

impl FixtureScanner {
    pub fn new(devices: Vec<DiscoveredDevice>) -> Self {
        Self {
            devices,
            reveal_interval_ms: REVEAL_INTERVAL_MS,
            settle_ms: SETTLE_MS,
        }
    }

    /// Six plausible course-adjacent devices, clustered around the
    /// TPC Harding Park area.
    pub fn with_sample_data() -> Self {
        fn device(
            id: &str,
            display_name: &str,
            rssi_dbm: i16,
            latitude: f64,
            longitude: f64,
            category: DeviceCategory,
        ) -> DiscoveredDevice {
            DiscoveredDevice {
                id: id.to_string(),
                display_name: display_name.to_string(),
                rssi_dbm,
                coordinate: Coordinate {
                    latitude,
                    longitude,
                },
                category,
            }
        }

        Self::new(vec![
            device(
                "fixture-1",
                "Approach S70",
                -52,
                37.7226,
                -122.4931,
                DeviceCategory::Watch,
            ),
            device(
                "fixture-2",
                "OnCore Genius Ball",
                -74,
                37.7241,
                -122.4918,
                DeviceCategory::Ball,
            ),
            device(
                "fixture-3",
                "AirPods Pro",
                -48,
                37.7228,
                -122.4929,
                DeviceCategory::Headphones,
            ),
            device(
                "fixture-4",
                "Pixel 9",
                -61,
                37.7233,
                -122.4940,
                DeviceCategory::Phone,
            ),
            device(
                "fixture-5",
                "Tour V6 Shift",
                -69,
                37.7219,
                -122.4925,
                DeviceCategory::Unknown,
            ),
            device(
                "fixture-6",
                "Galaxy Watch6",
                -80,
                37.7247,
                -122.4951,
                DeviceCategory::Watch,
            ),
        ])
    }
}

impl DeviceScanner for FixtureScanner {
    fn start(&mut self) -> Result<ScanPlan, ScanError> {
        let sightings = self
            .devices
            .iter()
            .cloned()
            .enumerate()
            .map(|(k, device)| Sighting {
                after_ms: (k as u64 + 1) * self.reveal_interval_ms,
                device,
            })
            .collect();
        Ok(ScanPlan {
            sightings,
            settle_ms: self.settle_ms,
        })
    }

    fn stop(&mut self) {}
}
