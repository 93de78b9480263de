//! Standings rows (derived, never persisted).

use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub team_id: TeamId,
    pub school_name: String,
    pub wins: u32,
    pub losses: u32,
    pub total_matches: u32,
    /// wins / total_matches, 0 when nothing has been completed.
    pub win_percentage: f64,
}

impl StandingsEntry {
    pub fn new(team_id: TeamId, school_name: impl Into<String>, wins: u32, total_matches: u32) -> Self {
        Self {
            team_id,
            school_name: school_name.into(),
            wins,
            losses: total_matches - wins,
            total_matches,
            win_percentage: win_percentage(wins, total_matches),
        }
    }
}

/// Individual win/loss record of one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

fn win_percentage(wins: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(total)
    }
}
