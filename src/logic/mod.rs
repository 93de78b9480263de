//! Scoring engine: eligibility, positions, generation, results, aggregation and standings.

mod bracket;
mod division_filter;
mod positions;
mod results;
mod roster_import;
mod standings;
mod team_match;

pub use bracket::{
    assign_players, generate_individual_matches, generate_team_match, generate_tournament_matches,
    mark_byes, BYE_SCORE,
};
pub use division_filter::eligible_players;
pub use positions::{player_at_position, position_roster, rank_players};
pub use results::{
    record_result, record_result_at, record_tournament_result, start_match,
    start_tournament_match, RecordOutcome, Recorded,
};
pub use roster_import::{import_roster, import_roster_str, import_team_roster};
pub use standings::{calculate_standings, player_records};
pub use team_match::{aggregate_team_match, cancel_team_match, tournament_team_match_result};
