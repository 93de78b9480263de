//! TeamMatch (dual meet between two teams) and its derived result.

use crate::models::individual_match::{IndividualMatch, MatchStatus};
use crate::models::player::TeamLevel;
use crate::models::team::TeamId;
use crate::models::tournament::TournamentError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TeamMatchId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamMatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Head-to-head outcome between two teams.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Home,
    Away,
    Tie,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamMatch {
    pub id: TeamMatchId,
    pub home_team: TeamId,
    pub away_team: TeamId,
    #[serde(default)]
    pub level: TeamLevel,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TeamMatchStatus,
}

impl TeamMatch {
    pub fn new(home_team: TeamId, away_team: TeamId, level: TeamLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team,
            away_team,
            level,
            date: None,
            status: TeamMatchStatus::Scheduled,
        }
    }

    /// True if `m` is played between this pairing, in either orientation.
    pub fn covers(&self, m: &IndividualMatch) -> bool {
        (m.home_team == self.home_team && m.away_team == self.away_team)
            || (m.home_team == self.away_team && m.away_team == self.home_team)
    }

    /// Re-derive status from the individual matches. Cancelled is never overridden.
    pub fn refresh_status(&mut self, matches: &[IndividualMatch]) {
        if self.status == TeamMatchStatus::Cancelled {
            return;
        }
        let mine: Vec<_> = matches.iter().filter(|m| self.covers(m)).collect();
        let completed = mine.iter().filter(|m| m.is_completed()).count();
        let started = mine
            .iter()
            .any(|m| m.status != MatchStatus::Pending);
        self.status = if !mine.is_empty() && completed == mine.len() {
            TeamMatchStatus::Completed
        } else if started {
            TeamMatchStatus::InProgress
        } else {
            TeamMatchStatus::Scheduled
        };
    }

    pub fn cancel(&mut self) {
        self.status = TeamMatchStatus::Cancelled;
    }
}

/// Position tally for one team-match. Recomputed on demand, never stored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamMatchResult {
    pub home_wins: u32,
    pub away_wins: u32,
    pub total_positions: u32,
    pub completed_positions: u32,
}

impl TeamMatchResult {
    pub fn is_complete(&self) -> bool {
        self.completed_positions == self.total_positions
    }

    /// Current leader; may change while positions are still being played.
    pub fn provisional_leader(&self) -> Outcome {
        match self.home_wins.cmp(&self.away_wins) {
            std::cmp::Ordering::Greater => Outcome::Home,
            std::cmp::Ordering::Less => Outcome::Away,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Winner once every position is completed.
    pub fn final_winner(&self) -> Result<Outcome, TournamentError> {
        if !self.is_complete() {
            return Err(TournamentError::IncompleteResults {
                completed: self.completed_positions,
                total: self.total_positions,
            });
        }
        Ok(self.provisional_leader())
    }
}
