//! Team (school squad) and its roster.

use crate::models::player::{Player, PlayerId, TeamLevel};
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub school_name: String,
    #[serde(default)]
    pub level: TeamLevel,
    /// Roster. Order only matters as the tie-break between equal ratings.
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(school_name: impl Into<String>, level: TeamLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            school_name: school_name.into(),
            level,
            players: Vec::new(),
        }
    }

    /// Builder-style roster, mostly for tests and fixtures.
    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Add a player; membership is keyed by player id.
    pub fn add_player(&mut self, player: Player) -> Result<PlayerId, TournamentError> {
        player.validate()?;
        if self.player(player.id).is_some() {
            return Err(TournamentError::DuplicatePlayer(player.id));
        }
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Fail fast on a malformed team or any malformed player on its roster.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.school_name.trim().is_empty() {
            return Err(TournamentError::InvalidEntity {
                entity: "team",
                field: "school_name",
                reason: format!("team {} has an empty school name", self.id),
            });
        }
        let mut seen = HashSet::new();
        for p in &self.players {
            p.validate()?;
            if !seen.insert(p.id) {
                return Err(TournamentError::DuplicatePlayer(p.id));
            }
        }
        Ok(())
    }
}
