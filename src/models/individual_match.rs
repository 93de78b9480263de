//! IndividualMatch: one position-match between two teams.

use crate::models::division::Division;
use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Side of an individual match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A single player-vs-player (or pair-vs-pair) contest at one division/position.
///
/// `winner` and `score` are set if and only if `status` is `Completed`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IndividualMatch {
    pub id: MatchId,
    /// Owning tournament or team-match.
    pub tournament_id: Uuid,
    pub division: Division,
    pub position: u32,
    pub round: u32,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_player_1: Option<PlayerId>,
    pub home_player_2: Option<PlayerId>,
    pub away_player_1: Option<PlayerId>,
    pub away_player_2: Option<PlayerId>,
    pub status: MatchStatus,
    pub winner: Option<Side>,
    pub score: Option<String>,
    pub is_bye: bool,
    pub court: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl IndividualMatch {
    /// A fresh pending match with no players assigned.
    pub fn new(
        tournament_id: Uuid,
        division: Division,
        position: u32,
        home_team: TeamId,
        away_team: TeamId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            division,
            position,
            round: 1,
            home_team,
            away_team,
            home_player_1: None,
            home_player_2: None,
            away_player_1: None,
            away_player_2: None,
            status: MatchStatus::Pending,
            winner: None,
            score: None,
            is_bye: false,
            court: None,
            scheduled_at: None,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team == team || self.away_team == team
    }

    pub fn team_on(&self, side: Side) -> TeamId {
        match side {
            Side::Home => self.home_team,
            Side::Away => self.away_team,
        }
    }

    /// Team credited with the win, once completed.
    pub fn winning_team(&self) -> Option<TeamId> {
        if !self.is_completed() {
            return None;
        }
        self.winner.map(|side| self.team_on(side))
    }

    /// Assigned players on one side (0, 1 or 2).
    pub fn players_on(&self, side: Side) -> Vec<PlayerId> {
        let (first, second) = match side {
            Side::Home => (self.home_player_1, self.home_player_2),
            Side::Away => (self.away_player_1, self.away_player_2),
        };
        first.into_iter().chain(second).collect()
    }

    pub fn has_player(&self, player: PlayerId) -> bool {
        [
            self.home_player_1,
            self.home_player_2,
            self.away_player_1,
            self.away_player_2,
        ]
        .contains(&Some(player))
    }
}
