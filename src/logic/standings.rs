//! Standings: per-team and per-player win/loss tables over completed matches.

use crate::models::{IndividualMatch, PlayerRecord, Side, StandingsEntry, Team};
use std::collections::HashMap;

/// One entry per team, ranked by wins then win percentage (both descending).
///
/// Teams still tied keep their order from `teams`.
pub fn calculate_standings(matches: &[IndividualMatch], teams: &[Team]) -> Vec<StandingsEntry> {
    let mut table: Vec<StandingsEntry> = teams
        .iter()
        .map(|team| {
            let (wins, total) = matches
                .iter()
                .filter(|m| m.is_completed() && m.involves(team.id))
                .fold((0u32, 0u32), |(wins, total), m| {
                    let won = m.winning_team() == Some(team.id);
                    (wins + u32::from(won), total + 1)
                });
            StandingsEntry::new(team.id, team.school_name.clone(), wins, total)
        })
        .collect();

    table.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.win_percentage.total_cmp(&a.win_percentage))
    });
    table
}

/// Win/loss records of every player who played a completed match. Byes are not counted.
///
/// Sorted by wins (descending), then name.
pub fn player_records(matches: &[IndividualMatch], teams: &[Team]) -> Vec<PlayerRecord> {
    let mut records: HashMap<_, PlayerRecord> = HashMap::new();

    for m in matches.iter().filter(|m| m.is_completed() && !m.is_bye) {
        let Some(winner) = m.winner else { continue };
        for side in [Side::Home, Side::Away] {
            let team_id = m.team_on(side);
            let Some(team) = teams.iter().find(|t| t.id == team_id) else {
                continue;
            };
            for player_id in m.players_on(side) {
                let Some(player) = team.player(player_id) else {
                    continue;
                };
                let rec = records.entry(player_id).or_insert_with(|| PlayerRecord {
                    player_id,
                    team_id,
                    name: player.name.clone(),
                    wins: 0,
                    losses: 0,
                });
                if side == winner {
                    rec.wins += 1;
                } else {
                    rec.losses += 1;
                }
            }
        }
    }

    let mut out: Vec<_> = records.into_values().collect();
    out.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
    out
}
