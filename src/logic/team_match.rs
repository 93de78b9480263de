//! Head-to-head aggregation of individual matches into a team-match result.

use crate::models::{IndividualMatch, TeamMatch, TeamMatchId, TeamMatchResult, Tournament, TournamentError};

/// Tally positions between the two teams of `team_match`.
///
/// Matches between other teams are ignored. Wins are credited by team, so matches stored with
/// home and away swapped still count for the right side.
pub fn aggregate_team_match(team_match: &TeamMatch, matches: &[IndividualMatch]) -> TeamMatchResult {
    let mut result = TeamMatchResult::default();
    for m in matches.iter().filter(|m| team_match.covers(m)) {
        result.total_positions += 1;
        let Some(winning_team) = m.winning_team() else {
            continue;
        };
        result.completed_positions += 1;
        if winning_team == team_match.home_team {
            result.home_wins += 1;
        } else {
            result.away_wins += 1;
        }
    }
    result
}

/// Aggregate a team-match held by the tournament.
pub fn tournament_team_match_result(
    tournament: &Tournament,
    team_match_id: TeamMatchId,
) -> Result<TeamMatchResult, TournamentError> {
    let tm = tournament
        .team_match(team_match_id)
        .ok_or(TournamentError::TeamMatchNotFound(team_match_id))?;
    Ok(aggregate_team_match(tm, &tournament.matches))
}

/// Call off a team-match. Its status stays cancelled whatever is recorded afterwards.
pub fn cancel_team_match(
    tournament: &mut Tournament,
    team_match_id: TeamMatchId,
) -> Result<(), TournamentError> {
    let tm = tournament
        .team_matches
        .iter_mut()
        .find(|tm| tm.id == team_match_id)
        .ok_or(TournamentError::TeamMatchNotFound(team_match_id))?;
    tm.cancel();
    log::info!("Tournament {}: team-match {} cancelled", tournament.id, team_match_id);
    Ok(())
}
