//! Round-robin generation of individual position-matches and player assignment.

use crate::logic::positions::{player_at_position, position_roster};
use crate::models::{
    Division, IndividualMatch, MatchStatus, Player, Side, Team, TeamId, TeamMatch,
    Tournament, TournamentConfig, TournamentError, MAX_POSITIONS_PER_DIVISION,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Score recorded on matches resolved by [`mark_byes`].
pub const BYE_SCORE: &str = "BYE";

/// Generate every individual match for `teams` under `config`.
///
/// For each division, each position `1..=N` and each pair `(i, j)` with `i` before `j` in
/// `teams`, one pending round-1 match is created with team `i` at home. Repeated ids are
/// entered once, at their first occurrence. No players are assigned; see
/// [`assign_players`]. The result has `divisions * positions_per_division * C(teams, 2)`
/// entries.
pub fn generate_individual_matches(
    owner_id: Uuid,
    teams: &[TeamId],
    config: &TournamentConfig,
) -> Vec<IndividualMatch> {
    let mut seen = HashSet::new();
    let teams: Vec<TeamId> = teams.iter().copied().filter(|id| seen.insert(*id)).collect();
    let n = teams.len();
    let pairs = n * n.saturating_sub(1) / 2;
    let capacity = (config.positions_per_division.min(MAX_POSITIONS_PER_DIVISION) as usize)
        .checked_mul(config.divisions.len())
        .and_then(|c| c.checked_mul(pairs))
        .unwrap_or(0);
    let mut matches = Vec::with_capacity(capacity);

    for &division in &config.divisions {
        for position in 1..=config.positions_per_division {
            for (i, &home) in teams.iter().enumerate() {
                for &away in &teams[i + 1..] {
                    matches.push(IndividualMatch::new(owner_id, division, position, home, away));
                }
            }
        }
    }

    log::debug!(
        "Generated {} matches for {} teams, {} divisions, {} positions",
        matches.len(),
        n,
        config.divisions.len(),
        config.positions_per_division
    );
    matches
}

/// Fill `home_player_1` / `away_player_1` from each team's ranked roster for the match's
/// division. A team without an eligible player at that position leaves its slot empty.
///
/// Second doubles partners are never filled in.
pub fn assign_players(
    matches: &[IndividualMatch],
    teams: &[Team],
) -> Result<Vec<IndividualMatch>, TournamentError> {
    let mut rosters = HashMap::new();
    let mut assigned = Vec::with_capacity(matches.len());
    for m in matches {
        let home = roster_for(&mut rosters, teams, m.home_team, m.division)?;
        let away = roster_for(&mut rosters, teams, m.away_team, m.division)?;
        let mut m = m.clone();
        m.home_player_1 = player_at_position(&home, m.position).map(|p| p.id);
        m.away_player_1 = player_at_position(&away, m.position).map(|p| p.id);
        if m.home_player_1.is_none() || m.away_player_1.is_none() {
            log::debug!(
                "{} position {}: no eligible player for {}",
                m.division,
                m.position,
                if m.home_player_1.is_none() { "home" } else { "away" }
            );
        }
        assigned.push(m);
    }
    Ok(assigned)
}

fn roster_for<'a>(
    cache: &mut HashMap<(TeamId, Division), Vec<&'a Player>>,
    teams: &'a [Team],
    team_id: TeamId,
    division: Division,
) -> Result<Vec<&'a Player>, TournamentError> {
    if let Some(r) = cache.get(&(team_id, division)) {
        return Ok(r.clone());
    }
    let team = teams
        .iter()
        .find(|t| t.id == team_id)
        .ok_or(TournamentError::TeamNotFound(team_id))?;
    let roster = position_roster(team, division);
    cache.insert((team_id, division), roster.clone());
    Ok(roster)
}

/// Resolve pending matches where only one side fielded a player: that side wins by bye.
///
/// Matches with nobody on either side are left pending for the caller to deal with.
pub fn mark_byes(matches: &[IndividualMatch]) -> Vec<IndividualMatch> {
    matches
        .iter()
        .map(|m| {
            if m.status != MatchStatus::Pending {
                return m.clone();
            }
            let winner = match (m.home_player_1.is_some(), m.away_player_1.is_some()) {
                (true, false) => Side::Home,
                (false, true) => Side::Away,
                _ => return m.clone(),
            };
            let mut m = m.clone();
            m.is_bye = true;
            m.status = MatchStatus::Completed;
            m.winner = Some(winner);
            m.score = Some(BYE_SCORE.to_string());
            m
        })
        .collect()
}

/// Generate and staff the matches for one dual meet, owned by the team-match id.
///
/// A team-match whose two sides are the same team is refused.
pub fn generate_team_match(
    team_match: &TeamMatch,
    teams: &[Team],
    config: &TournamentConfig,
) -> Result<Vec<IndividualMatch>, TournamentError> {
    config.validate()?;
    if team_match.home_team == team_match.away_team {
        return Err(TournamentError::DuplicateTeam(team_match.home_team));
    }
    let matches = generate_individual_matches(
        team_match.id,
        &[team_match.home_team, team_match.away_team],
        config,
    );
    assign_players(&matches, teams)
}

/// (Re)generate all matches for the tournament. Previous matches and results are discarded.
pub fn generate_tournament_matches(tournament: &mut Tournament) -> Result<(), TournamentError> {
    tournament.validate()?;
    let team_ids: Vec<TeamId> = tournament.teams.iter().map(|t| t.id).collect();
    let generated = generate_individual_matches(tournament.id, &team_ids, &tournament.config);
    let matches = assign_players(&generated, &tournament.teams)?;

    let mut team_matches = Vec::new();
    for (i, home) in tournament.teams.iter().enumerate() {
        for away in &tournament.teams[i + 1..] {
            team_matches.push(TeamMatch::new(home.id, away.id, home.level));
        }
    }

    log::info!(
        "Tournament {}: generated {} matches across {} team pairings",
        tournament.id,
        matches.len(),
        team_matches.len()
    );
    tournament.matches = matches;
    tournament.team_matches = team_matches;
    Ok(())
}
