//! Player, Gender and TeamLevel data structures.

use crate::models::division::Division;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(TournamentError::InvalidEntity {
                entity: "player",
                field: "gender",
                reason: format!("unknown gender '{other}'"),
            }),
        }
    }
}

/// Squad a team (or player) belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamLevel {
    #[default]
    Varsity,
    Jv,
    Freshman,
}

impl fmt::Display for TeamLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TeamLevel::Varsity => "varsity",
            TeamLevel::Jv => "jv",
            TeamLevel::Freshman => "freshman",
        })
    }
}

impl FromStr for TeamLevel {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "varsity" => Ok(TeamLevel::Varsity),
            "jv" => Ok(TeamLevel::Jv),
            "freshman" => Ok(TeamLevel::Freshman),
            other => Err(TournamentError::InvalidEntity {
                entity: "team",
                field: "level",
                reason: format!("unknown team level '{other}'"),
            }),
        }
    }
}

/// A rostered player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Unset gender only qualifies for mixed doubles.
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub grade: Option<u8>,
    /// Skill rating (UTR-like, open-ended). Missing ranks as 0.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub division_preference: Option<Division>,
    #[serde(default)]
    pub level: Option<TeamLevel>,
}

impl Player {
    /// Create a new player with the given name. Optional attributes start unset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            gender: None,
            grade: None,
            rating: None,
            division_preference: None,
            level: None,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Rating used for position ranking.
    pub fn effective_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Check the fields the engine relies on.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidEntity {
                entity: "player",
                field: "name",
                reason: format!("player {} has an empty name", self.id),
            });
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_rating(rating: f64) -> Result<(), TournamentError> {
    if !rating.is_finite() || rating < 0.0 {
        return Err(TournamentError::InvalidEntity {
            entity: "player",
            field: "rating",
            reason: format!("rating must be a non-negative number, got {rating}"),
        });
    }
    Ok(())
}
