//! Tournament, its configuration and the engine's error type.

use crate::models::division::Division;
use crate::models::individual_match::{IndividualMatch, MatchId, MatchStatus};
use crate::models::player::{validate_rating, Player, PlayerId};
use crate::models::team::{Team, TeamId};
use crate::models::team_match::{TeamMatch, TeamMatchId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during engine operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TournamentError {
    #[error("match {0} not found")]
    MatchNotFound(MatchId),
    #[error("team {0} not found")]
    TeamNotFound(TeamId),
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("team-match {0} not found")]
    TeamMatchNotFound(TeamMatchId),
    #[error("match {0} is already completed with a different result")]
    AlreadyCompleted(MatchId),
    #[error("invalid score {0}")]
    InvalidScore(String),
    #[error("score '{score}' does not agree with the declared winner")]
    ScoreMismatch { score: String },
    #[error("only {completed} of {total} positions are completed")]
    IncompleteResults { completed: u32, total: u32 },
    #[error("invalid {entity} {field}: {reason}")]
    InvalidEntity {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },
    #[error("team {0} is already in the tournament")]
    DuplicateTeam(TeamId),
    #[error("player {0} is already on the roster")]
    DuplicatePlayer(PlayerId),
    #[error("player {0} is playing a match in progress")]
    PlayerInPlay(PlayerId),
    #[error("roster import failed on row {row}: {reason}")]
    RosterImport { row: usize, reason: String },
}

/// What the recorder does with unknown ids and conflicting re-recording.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordPolicy {
    /// Unknown ids are a no-op and later results overwrite earlier ones.
    #[default]
    Permissive,
    /// Unknown ids and conflicting results are errors; scores must agree with the winner.
    Strict,
}

impl fmt::Display for RecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordPolicy::Permissive => "permissive",
            RecordPolicy::Strict => "strict",
        })
    }
}

impl FromStr for RecordPolicy {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(RecordPolicy::Permissive),
            "strict" => Ok(RecordPolicy::Strict),
            other => Err(TournamentError::InvalidEntity {
                entity: "config",
                field: "policy",
                reason: format!("unknown record policy '{other}'"),
            }),
        }
    }
}

pub const DEFAULT_POSITIONS_PER_DIVISION: u32 = 6;
/// Largest ladder a division may have.
pub const MAX_POSITIONS_PER_DIVISION: u32 = 32;

fn default_positions() -> u32 {
    DEFAULT_POSITIONS_PER_DIVISION
}

fn default_divisions() -> Vec<Division> {
    vec![Division::BoysSingles, Division::GirlsSingles]
}

/// Divisions contested, positions per division and recording policy.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default = "default_divisions")]
    pub divisions: Vec<Division>,
    #[serde(default = "default_positions")]
    pub positions_per_division: u32,
    #[serde(default)]
    pub policy: RecordPolicy,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            divisions: default_divisions(),
            positions_per_division: DEFAULT_POSITIONS_PER_DIVISION,
            policy: RecordPolicy::default(),
        }
    }
}

impl TournamentConfig {
    /// Zero positions is allowed and generates nothing.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.positions_per_division > MAX_POSITIONS_PER_DIVISION {
            return Err(TournamentError::InvalidEntity {
                entity: "config",
                field: "positions_per_division",
                reason: format!(
                    "{} exceeds the maximum of {MAX_POSITIONS_PER_DIVISION}",
                    self.positions_per_division
                ),
            });
        }
        Ok(())
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: teams, generated matches and team-match pairings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub config: TournamentConfig,
    pub teams: Vec<Team>,
    /// Generated individual matches, with recorded results.
    pub matches: Vec<IndividualMatch>,
    /// One entry per pair of teams, created alongside the matches.
    pub team_matches: Vec<TeamMatch>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn new(name: impl Into<String>, config: TournamentConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            config,
            teams: Vec::new(),
            matches: Vec::new(),
            team_matches: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Tournament with a checked config and teams already entered.
    pub fn with_teams(
        name: impl Into<String>,
        config: TournamentConfig,
        teams: Vec<Team>,
    ) -> Result<Self, TournamentError> {
        config.validate()?;
        let mut t = Self::new(name, config);
        for team in teams {
            t.add_team(team)?;
        }
        Ok(t)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn team_match(&self, id: TeamMatchId) -> Option<&TeamMatch> {
        self.team_matches.iter().find(|tm| tm.id == id)
    }

    pub fn add_team(&mut self, team: Team) -> Result<TeamId, TournamentError> {
        team.validate()?;
        if self.team(team.id).is_some() {
            return Err(TournamentError::DuplicateTeam(team.id));
        }
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    pub fn add_player(&mut self, team_id: TeamId, player: Player) -> Result<PlayerId, TournamentError> {
        self.team_mut(team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?
            .add_player(player)
    }

    /// Update a rating between generations. Refused while the player is on court.
    pub fn set_player_rating(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
        rating: Option<f64>,
    ) -> Result<(), TournamentError> {
        if let Some(r) = rating {
            validate_rating(r)?;
        }
        let on_court = self
            .matches
            .iter()
            .any(|m| m.status == MatchStatus::InProgress && m.has_player(player_id));
        if on_court {
            return Err(TournamentError::PlayerInPlay(player_id));
        }
        let player = self
            .team_mut(team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?
            .player_mut(player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))?;
        player.rating = rating;
        Ok(())
    }

    /// Check the config, every team, and that team ids are unique across the tournament.
    pub fn validate(&self) -> Result<(), TournamentError> {
        self.config.validate()?;
        let mut seen = HashSet::new();
        for team in &self.teams {
            team.validate()?;
            if !seen.insert(team.id) {
                return Err(TournamentError::DuplicateTeam(team.id));
            }
        }
        Ok(())
    }
}
