//! Competitive divisions and their gender affinity.

use crate::models::player::Gender;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender/format category of competition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    BoysSingles,
    GirlsSingles,
    BoysDoubles,
    GirlsDoubles,
    MixedDoubles,
}

/// Which players a division admits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenderAffinity {
    Only(Gender),
    Any,
}

impl GenderAffinity {
    /// Players with no recorded gender only pass `Any`.
    pub fn admits(self, gender: Option<Gender>) -> bool {
        match self {
            GenderAffinity::Any => true,
            GenderAffinity::Only(required) => gender == Some(required),
        }
    }
}

impl Division {
    pub const ALL: [Division; 5] = [
        Division::BoysSingles,
        Division::GirlsSingles,
        Division::BoysDoubles,
        Division::GirlsDoubles,
        Division::MixedDoubles,
    ];

    pub fn gender_affinity(self) -> GenderAffinity {
        match self {
            Division::BoysSingles | Division::BoysDoubles => GenderAffinity::Only(Gender::Male),
            Division::GirlsSingles | Division::GirlsDoubles => GenderAffinity::Only(Gender::Female),
            Division::MixedDoubles => GenderAffinity::Any,
        }
    }

    pub fn is_doubles(self) -> bool {
        matches!(
            self,
            Division::BoysDoubles | Division::GirlsDoubles | Division::MixedDoubles
        )
    }

    /// Players fielded per side at each position.
    pub fn players_per_side(self) -> usize {
        if self.is_doubles() {
            2
        } else {
            1
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Division::BoysSingles => "boys_singles",
            Division::GirlsSingles => "girls_singles",
            Division::BoysDoubles => "boys_doubles",
            Division::GirlsDoubles => "girls_doubles",
            Division::MixedDoubles => "mixed_doubles",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Division::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| TournamentError::InvalidEntity {
                entity: "division",
                field: "name",
                reason: format!("unknown division '{}'", s.trim()),
            })
    }
}
