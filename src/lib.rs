pub mod coord;
pub mod discovery;
pub mod error;
pub mod geo;
pub mod models;
pub mod nav;
pub mod scan;
pub mod scan_fixture;
pub mod scorecard;
pub mod store;

uniffi::include_scaffolding!("fairway");

pub use coord::{format_coordinate, parse_coordinate};
pub use discovery::{Clock, DiscoveryEngine, FixtureDiscovery, ScanPhase, SystemClock};
pub use error::{CoordError, LocationError, NavError, ScanError};
pub use geo::{
    distance_meters, initial_bearing_degrees, markers_with_distances, PositionProvider,
};
pub use models::{
    BallMarker, Capabilities, Coordinate, DeviceCategory, GameSession, Hole, HoleScore, Player,
    PlayerId, PlayerRound, SessionId, TrackedDevice,
};
pub use nav::{candidate_urls, open_turn_by_turn, MapTarget, Platform, UrlOpener};
pub use scan::{DeviceScanner, DiscoveredDevice, ScanPlan, Sighting};
pub use scan_fixture::FixtureScanner;
pub use scorecard::{
    compute_round_stats, score_label, Leaderboard, RoundStats, ScoreLabel, Standing,
};
pub use store::{MemoryStore, SessionStore};
