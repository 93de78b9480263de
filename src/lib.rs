//! Tennis team web app: library with the match scoring engine, models and REST API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    aggregate_team_match, assign_players, cancel_team_match, calculate_standings, eligible_players,
    generate_individual_matches, generate_team_match, generate_tournament_matches,
    import_roster, import_roster_str, import_team_roster, mark_byes, player_at_position,
    player_records, position_roster, rank_players, record_result, record_result_at,
    record_tournament_result, start_match, start_tournament_match,
    tournament_team_match_result, RecordOutcome, Recorded, BYE_SCORE,
};
pub use models::{
    Division, Gender, GenderAffinity, IndividualMatch, MatchId, MatchStatus, Outcome, Player,
    PlayerId, PlayerRecord, RecordPolicy, Score, SetScore, Side, StandingsEntry, Team, TeamId,
    TeamLevel, TeamMatch, TeamMatchId, TeamMatchResult, TeamMatchStatus, Tournament,
    TournamentConfig, TournamentError, TournamentId, DEFAULT_POSITIONS_PER_DIVISION,
    MAX_POSITIONS_PER_DIVISION,
};
