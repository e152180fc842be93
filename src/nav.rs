//! Turn-by-turn navigation handoff.
//!
//! Builds a platform-ordered list of candidate map URLs for a destination and
//! walks them through a host-provided opener: native schemes are probed with
//! `can_open` strictly in table order, the first scheme the host can resolve
//! is opened, and the web fallback at the end of every table is opened
//! without asking. The tables are fixed configuration, not computed.

use crate::coord::format_coordinate;
use crate::error::NavError;
use crate::models::Coordinate;

/// Host platform, as reported by the embedding app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Other,
}

/// Which map target a candidate URL points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapTarget {
    AppleMaps,
    GoogleMaps,
    GoogleNavigation,
    GeoUri,
    Web,
}

/// Host seam over the platform's URL dispatch.
///
/// Opening is fire-and-forget at the OS level; `open` only reports whether
/// the dispatch itself was accepted.
pub trait UrlOpener {
    fn can_open(&self, url: &str) -> bool;
    fn open(&mut self, url: &str) -> Result<(), String>;
}

/// Full candidate table for `destination`: native schemes first, web last.
pub fn candidate_urls(
    platform: Platform,
    destination: Coordinate,
    label: &str,
) -> Vec<(MapTarget, String)> {
    let mut candidates = native_candidates(platform, destination, label);
    candidates.push((MapTarget::Web, web_url(destination)));
    candidates
}

/// Open navigation to `destination`, trying candidates strictly in platform
/// order and stopping at the first scheme the host says it can open.
///
/// If no native candidate answers, the web fallback is opened exactly once,
/// unconditionally. A failure there is terminal: the error carries the
/// destination as manual-entry text and nothing is retried.
pub fn open_turn_by_turn<O: UrlOpener>(
    opener: &mut O,
    platform: Platform,
    destination: Coordinate,
    label: &str,
) -> Result<MapTarget, NavError> {
    let manual_entry = format_coordinate(destination, 5);

    for (target, url) in native_candidates(platform, destination, label) {
        if opener.can_open(&url) {
            return opener.open(&url).map(|_| target).map_err(|_| {
                NavError::OpenFailed {
                    manual_entry: manual_entry.clone(),
                }
            });
        }
    }

    opener
        .open(&web_url(destination))
        .map(|_| MapTarget::Web)
        .map_err(|_| NavError::OpenFailed { manual_entry })
}

fn native_candidates(
    platform: Platform,
    destination: Coordinate,
    label: &str,
) -> Vec<(MapTarget, String)> {
    let lat = destination.latitude;
    let lon = destination.longitude;
    match platform {
        Platform::Ios => vec![
            (
                MapTarget::AppleMaps,
                format!("maps://?daddr={lat},{lon}&dirflg=d"),
            ),
            (
                MapTarget::GoogleMaps,
                format!("comgooglemaps://?daddr={lat},{lon}&directionsmode=driving"),
            ),
        ],
        Platform::Android => vec![
            (
                MapTarget::GoogleNavigation,
                format!("google.navigation:q={lat},{lon}"),
            ),
            (
                MapTarget::GeoUri,
                format!("geo:{lat},{lon}?q={lat},{lon}({})", encode_label(label)),
            ),
        ],
        Platform::Other => Vec::new(),
    }
}

fn web_url(destination: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        destination.latitude, destination.longitude
    )
}

fn encode_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for byte in label.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
