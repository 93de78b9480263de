//! Data structures for the tennis team engine: players, teams, matches, tournament state.

mod division;
mod individual_match;
mod player;
mod score;
mod standings;
mod team;
mod team_match;
mod tournament;

pub use division::{Division, GenderAffinity};
pub use individual_match::{IndividualMatch, MatchId, MatchStatus, Side};
pub use player::{Gender, Player, PlayerId, TeamLevel};
pub use score::{Score, SetScore};
pub use standings::{PlayerRecord, StandingsEntry};
pub use team::{Team, TeamId};
pub use team_match::{Outcome, TeamMatch, TeamMatchId, TeamMatchResult, TeamMatchStatus};
pub use tournament::{
    RecordPolicy, Tournament, TournamentConfig, TournamentError, TournamentId,
    DEFAULT_POSITIONS_PER_DIVISION, MAX_POSITIONS_PER_DIVISION,
};
