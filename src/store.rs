//! In-memory tournament store with idle-time eviction.
//!
//! Owned by whoever needs it (the web server wraps it in a lock); there is no global instance.

use crate::models::{Tournament, TournamentId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Stored tournament plus last activity time.
struct Entry {
    tournament: Tournament,
    last_activity: Instant,
}

pub struct TournamentStore {
    entries: HashMap<TournamentId, Entry>,
    ttl: Duration,
}

impl TournamentStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        self.entries.insert(
            id,
            Entry {
                tournament,
                last_activity: Instant::now(),
            },
        );
        id
    }

    /// Read access without refreshing activity.
    pub fn peek(&self, id: &TournamentId) -> Option<&Tournament> {
        self.entries.get(id).map(|e| &e.tournament)
    }

    /// Mutable access; refreshes the entry's activity time. Expired entries are not returned.
    pub fn get_mut(&mut self, id: &TournamentId) -> Option<&mut Tournament> {
        let ttl = self.ttl;
        let entry = self.entries.get_mut(id)?;
        if entry.last_activity.elapsed() >= ttl {
            return None;
        }
        entry.last_activity = Instant::now();
        Some(&mut entry.tournament)
    }

    /// Drop one tournament. Returns it if it was present.
    pub fn invalidate(&mut self, id: &TournamentId) -> Option<Tournament> {
        self.entries.remove(id).map(|e| e.tournament)
    }

    /// Evict everything idle for at least the TTL. Returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_idle_since(Instant::now())
    }

    fn purge_idle_since(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, e| now.saturating_duration_since(e.last_activity) < ttl);
        before - self.entries.len()
    }
}
