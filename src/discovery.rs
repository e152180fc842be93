//! Scan lifecycle: `Idle -> Scanning -> Idle`.
//!
//! The engine owns every pending sighting and only mutates state inside
//! `poll`, driven by an injected clock. Stopping a scan drops the pending
//! batch outright, so a sighting scheduled before `stop_scan` can never
//! resurface in an idle device list.

use std::sync::{Mutex, PoisonError};

use crate::error::{LocationError, ScanError};
use crate::geo::{self, PositionProvider};
use crate::models::{Capabilities, Coordinate, TrackedDevice};
use crate::scan::{DeviceScanner, DiscoveredDevice};
use crate::scan_fixture::FixtureScanner;

/// Millisecond wall clock, injectable so reveal timing is deterministic
/// under test.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Clock backed by system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
}

#[derive(Clone, Debug)]
struct PendingSighting {
    due_ms: u64,
    device: DiscoveredDevice,
}

pub struct DiscoveryEngine<S: DeviceScanner, C: Clock> {
    scanner: S,
    clock: C,
    capabilities: Capabilities,
    phase: ScanPhase,
    // Sorted by due time; drained from the front in `poll`.
    pending: Vec<PendingSighting>,
    deadline_ms: u64,
    devices: Vec<TrackedDevice>,
    position: Option<Coordinate>,
}

impl<S: DeviceScanner, C: Clock> DiscoveryEngine<S, C> {
    pub fn new(scanner: S, clock: C, capabilities: Capabilities) -> Self {
        Self {
            scanner,
            clock,
            capabilities,
            phase: ScanPhase::Idle,
            pending: Vec::new(),
            deadline_ms: 0,
            devices: Vec::new(),
            position: None,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    /// Devices in reveal order. An id appears at most once.
    pub fn devices(&self) -> &[TrackedDevice] {
        &self.devices
    }

    /// Begin a scan. A call while already scanning is a no-op and must not
    /// reset the in-flight device list.
    pub fn start_scan(&mut self) -> Result<(), ScanError> {
        if self.phase == ScanPhase::Scanning {
            return Ok(());
        }
        if !self.capabilities.bluetooth_available {
            return Err(ScanError::Unsupported);
        }

        let plan = self.scanner.start()?;
        let now = self.clock.now_millis();

        self.devices.clear();
        self.deadline_ms = now + plan.duration_ms();
        self.pending = plan
            .sightings
            .into_iter()
            .map(|sighting| PendingSighting {
                due_ms: now + sighting.after_ms,
                device: sighting.device,
            })
            .collect();
        self.pending.sort_by_key(|pending| pending.due_ms);
        self.phase = ScanPhase::Scanning;
        Ok(())
    }

    /// End a scan. A call while idle is a no-op. Pending sightings are
    /// dropped; the device list is kept until the next `start_scan`.
    pub fn stop_scan(&mut self) {
        if self.phase == ScanPhase::Idle {
            return;
        }
        self.pending.clear();
        self.scanner.stop();
        self.phase = ScanPhase::Idle;
    }

    /// Advance the lifecycle: surface every sighting whose due time has
    /// elapsed, then auto-stop once past the deadline.
    pub fn poll(&mut self) {
        if self.phase != ScanPhase::Scanning {
            return;
        }
        let now = self.clock.now_millis();

        let due_count = self
            .pending
            .iter()
            .position(|pending| pending.due_ms > now)
            .unwrap_or(self.pending.len());
        let due: Vec<PendingSighting> = self.pending.drain(..due_count).collect();
        for pending in due {
            self.upsert(pending.device, now);
        }

        if now >= self.deadline_ms {
            self.pending.clear();
            self.scanner.stop();
            self.phase = ScanPhase::Idle;
        }
    }

    /// Record the current position and refresh every device's derived
    /// distance.
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = Some(position);
        for device in &mut self.devices {
            device.distance_m = geo::distance_meters(position, device.coordinate).ok();
        }
    }

    /// Pull a fresh fix from the provider and apply it.
    pub fn refresh_position<P: PositionProvider>(
        &mut self,
        provider: &mut P,
    ) -> Result<(), LocationError> {
        if !self.capabilities.location_available {
            return Err(LocationError::Unavailable);
        }
        let position = provider.current_position()?;
        self.set_position(position);
        Ok(())
    }

    /// Explicit removal from the tracker list.
    pub fn remove_device(&mut self, id: &str) -> bool {
        let before = self.devices.len();
        self.devices.retain(|device| device.id != id);
        self.devices.len() != before
    }

    fn upsert(&mut self, found: DiscoveredDevice, now_ms: u64) {
        let last_seen_unix = (now_ms / 1_000) as i64;
        let distance_m = self
            .position
            .and_then(|position| geo::distance_meters(position, found.coordinate).ok());

        if let Some(existing) = self.devices.iter_mut().find(|d| d.id == found.id) {
            existing.display_name = found.display_name;
            existing.rssi_dbm = found.rssi_dbm;
            existing.coordinate = found.coordinate;
            existing.category = found.category;
            existing.last_seen_unix = last_seen_unix;
            existing.distance_m = distance_m;
        } else {
            self.devices.push(TrackedDevice {
                id: found.id,
                display_name: found.display_name,
                rssi_dbm: found.rssi_dbm,
                coordinate: found.coordinate,
                last_seen_unix,
                distance_m,
                category: found.category,
            });
        }
    }
}

/// FFI-facing composition: the lifecycle engine over the canned scanner and
/// the system clock. Hosts drive `poll` from their UI tick.
pub struct FixtureDiscovery {
    inner: Mutex<DiscoveryEngine<FixtureScanner, SystemClock>>,
}

impl FixtureDiscovery {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            inner: Mutex::new(DiscoveryEngine::new(
                FixtureScanner::with_sample_data(),
                SystemClock,
                capabilities,
            )),
        }
    }

    fn engine(
        &self,
    ) -> std::sync::MutexGuard<'_, DiscoveryEngine<FixtureScanner, SystemClock>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_scan(&self) -> Result<(), ScanError> {
        self.engine().start_scan()
    }

    pub fn stop_scan(&self) {
        self.engine().stop_scan()
    }

    pub fn poll(&self) {
        self.engine().poll()
    }

    pub fn set_position(&self, position: Coordinate) {
        self.engine().set_position(position)
    }

    pub fn devices(&self) -> Vec<TrackedDevice> {
        self.engine().devices().to_vec()
    }

    pub fn is_scanning(&self) -> bool {
        self.engine().is_scanning()
    }
}
