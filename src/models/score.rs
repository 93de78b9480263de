//! Tennis score strings ("6-4, 3-6, 10-8"), read from the home side's perspective.

use crate::models::individual_match::Side;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub home: u8,
    pub away: u8,
    /// Loser's points in a set tiebreak, e.g. the `5` in `7-6(5)`.
    pub tiebreak: Option<u8>,
}

impl SetScore {
    pub fn winner(&self) -> Side {
        if self.home > self.away {
            Side::Home
        } else {
            Side::Away
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub sets: Vec<SetScore>,
}

impl Score {
    /// Parse a comma or whitespace separated list of sets.
    pub fn parse(raw: &str) -> Result<Self, TournamentError> {
        let sets = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| parse_set(s, raw))
            .collect::<Result<Vec<_>, _>>()?;
        if sets.is_empty() {
            return Err(invalid(raw, "no sets"));
        }
        Ok(Self { sets })
    }

    pub fn sets_won(&self, side: Side) -> usize {
        self.sets.iter().filter(|s| s.winner() == side).count()
    }

    /// Side that took more sets; `None` when split evenly.
    pub fn winner(&self) -> Option<Side> {
        let home = self.sets_won(Side::Home);
        let away = self.sets_won(Side::Away);
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

fn parse_set(set: &str, raw: &str) -> Result<SetScore, TournamentError> {
    let (games, tiebreak) = match set.split_once('(') {
        Some((games, rest)) => {
            let points = rest
                .strip_suffix(')')
                .and_then(|p| p.parse::<u8>().ok())
                .ok_or_else(|| invalid(raw, "malformed tiebreak"))?;
            (games, Some(points))
        }
        None => (set, None),
    };
    let (home, away) = games
        .split_once('-')
        .ok_or_else(|| invalid(raw, "set must look like 6-4"))?;
    let home: u8 = home.parse().map_err(|_| invalid(raw, "games must be numbers"))?;
    let away: u8 = away.parse().map_err(|_| invalid(raw, "games must be numbers"))?;
    if home == away {
        return Err(invalid(raw, "a set cannot end level"));
    }
    Ok(SetScore { home, away, tiebreak })
}

fn invalid(raw: &str, reason: &str) -> TournamentError {
    TournamentError::InvalidScore(format!("'{raw}': {reason}"))
}
