//! In-memory session and marker store.
//!
//! The seam mirrors what a durable backend would expose, but every list is
//! memory-resident: state lives for the process and resets on restart.
//! Within each list, ids are unique; an upsert with a known id replaces the
//! record in place.

use crate::error::LocationError;
use crate::geo::{self, PositionProvider};
use crate::models::{BallMarker, Coordinate, GameSession, SessionId};

pub trait SessionStore {
    fn upsert_session(&mut self, session: GameSession) -> Result<(), String>;
    fn list_sessions(&self) -> Result<Vec<GameSession>, String>;
    fn load_session(&self, id: &SessionId) -> Result<Option<GameSession>, String>;

    fn upsert_marker(&mut self, marker: BallMarker) -> Result<(), String>;
    fn remove_marker(&mut self, id: &str) -> Result<bool, String>;
    fn list_markers(&self) -> Result<Vec<BallMarker>, String>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Vec<GameSession>,
    markers: Vec<BallMarker>,
    next_marker_seq: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a marker at the provider's current position.
    ///
    /// The new marker starts with `distance_m` of zero, since it is where the
    /// player is standing.
    pub fn mark_ball<P: PositionProvider>(
        &mut self,
        provider: &mut P,
        hole_number: u8,
        title: &str,
        created_unix: i64,
    ) -> Result<BallMarker, LocationError> {
        let coordinate = provider.current_position()?;
        self.next_marker_seq += 1;
        let marker = BallMarker {
            id: format!("marker-{}", self.next_marker_seq),
            coordinate,
            title: title.to_string(),
            note: None,
            created_unix,
            hole_number,
            distance_m: Some(0),
        };
        self.markers.push(marker.clone());
        Ok(marker)
    }

    /// Refresh every marker's derived distance from `origin`.
    pub fn recalculate_marker_distances(&mut self, origin: Coordinate) {
        for marker in &mut self.markers {
            marker.distance_m = geo::distance_meters(origin, marker.coordinate).ok();
        }
    }
}

impl SessionStore for MemoryStore {
    fn upsert_session(&mut self, session: GameSession) -> Result<(), String> {
        if let Some(existing) = self.sessions.iter_mut().find(|s| s.id == session.id) {
            *existing = session;
        } else {
            self.sessions.push(session);
        }
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<GameSession>, String> {
        Ok(self.sessions.clone())
    }

    fn load_session(&self, id: &SessionId) -> Result<Option<GameSession>, String> {
        Ok(self.sessions.iter().find(|s| &s.id == id).cloned())
    }

    fn upsert_marker(&mut self, marker: BallMarker) -> Result<(), String> {
        if let Some(existing) = self.markers.iter_mut().find(|m| m.id == marker.id) {
            *existing = marker;
        } else {
            self.markers.push(marker);
        }
        Ok(())
    }

    fn remove_marker(&mut self, id: &str) -> Result<bool, String> {
        let before = self.markers.len();
        self.markers.retain(|marker| marker.id != id);
        Ok(self.markers.len() != before)
    }

    fn list_markers(&self) -> Result<Vec<BallMarker>, String> {
        Ok(self.markers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hole, Player, PlayerId, PlayerRound};

    struct FixedProvider(Coordinate);

    impl PositionProvider for FixedProvider {
        fn current_position(&mut self) -> Result<Coordinate, LocationError> {
            Ok(self.0)
        }
    }

    fn tee_box() -> Coordinate {
        Coordinate {
            latitude: 37.7226,
            longitude: -122.4931,
        }
    }

    fn create_test_session(id: &str, course_name: &str) -> GameSession {
        GameSession {
            id: SessionId(id.to_string()),
            course_name: course_name.to_string(),
            started_unix: 1_754_000_000,
            holes: vec![Hole {
                number: 1,
                par: 4,
                distance_m: 330,
            }],
            rounds: vec![PlayerRound {
                player: Player {
                    id: PlayerId("player-1".to_string()),
                    display_name: "Aki".to_string(),
                },
                scores: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_mark_ball_assigns_unique_ids() {
        let mut store = MemoryStore::new();
        let mut provider = FixedProvider(tee_box());

        let first = store
            .mark_ball(&mut provider, 1, "Drive", 1_754_000_000)
            .unwrap();
        let second = store
            .mark_ball(&mut provider, 1, "Approach", 1_754_000_060)
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.distance_m, Some(0));
        assert_eq!(store.list_markers().unwrap().len(), 2);
    }

    #[test]
    fn test_mark_ball_propagates_location_error() {
        struct DeniedProvider;

        impl PositionProvider for DeniedProvider {
            fn current_position(&mut self) -> Result<Coordinate, LocationError> {
                Err(LocationError::PermissionDenied)
            }
        }

        let mut store = MemoryStore::new();
        let result = store.mark_ball(&mut DeniedProvider, 1, "Drive", 1_754_000_000);
        assert_eq!(result.unwrap_err(), LocationError::PermissionDenied);
        assert!(store.list_markers().unwrap().is_empty());
    }

    #[test]
    fn test_upsert_marker_replaces_in_place() {
        let mut store = MemoryStore::new();
        let mut provider = FixedProvider(tee_box());
        let marker = store
            .mark_ball(&mut provider, 1, "Drive", 1_754_000_000)
            .unwrap();

        let renamed = BallMarker {
            title: "Long drive".to_string(),
            ..marker.clone()
        };
        store.upsert_marker(renamed).unwrap();

        let markers = store.list_markers().unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, "Long drive");
    }

    #[test]
    fn test_remove_marker() {
        let mut store = MemoryStore::new();
        let mut provider = FixedProvider(tee_box());
        let marker = store
            .mark_ball(&mut provider, 1, "Drive", 1_754_000_000)
            .unwrap();

        assert!(store.remove_marker(&marker.id).unwrap());
        assert!(!store.remove_marker(&marker.id).unwrap());
        assert!(store.list_markers().unwrap().is_empty());
    }

    #[test]
    fn test_recalculate_marker_distances() {
        let mut store = MemoryStore::new();
        let mut provider = FixedProvider(tee_box());
        store
            .mark_ball(&mut provider, 1, "Drive", 1_754_000_000)
            .unwrap();

        // walk ~0.01 degrees north of the marker
        store.recalculate_marker_distances(Coordinate {
            latitude: 37.7326,
            longitude: -122.4931,
        });

        let d = store.list_markers().unwrap()[0].distance_m.unwrap();
        assert!((1_111..=1_113).contains(&d));
    }

    #[test]
    fn test_session_upsert_and_load() {
        let mut store = MemoryStore::new();
        store
            .upsert_session(create_test_session("session-1", "Harding Park"))
            .unwrap();
        store
            .upsert_session(create_test_session("session-2", "Sharp Park"))
            .unwrap();

        assert_eq!(store.list_sessions().unwrap().len(), 2);

        // same id replaces, not duplicates
        store
            .upsert_session(create_test_session("session-1", "Harding Park (twilight)"))
            .unwrap();
        assert_eq!(store.list_sessions().unwrap().len(), 2);

        let loaded = store
            .load_session(&SessionId("session-1".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(loaded.course_name, "Harding Park (twilight)");

        let missing = store
            .load_session(&SessionId("session-9".to_string()))
            .unwrap();
        assert!(missing.is_none());
    }
}
