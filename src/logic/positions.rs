//! Position assignment: rank eligible players by rating.

use crate::logic::division_filter::eligible_players;
use crate::models::{Division, Player, Team};

/// Sort by rating, highest first. Missing ratings count as 0.
///
/// The sort is stable, so players with equal ratings keep their roster order.
pub fn rank_players<'a>(pool: &[&'a Player]) -> Vec<&'a Player> {
    let mut ranked = pool.to_vec();
    ranked.sort_by(|a, b| b.effective_rating().total_cmp(&a.effective_rating()));
    ranked
}

/// Player at 1-based `position` in an already ranked pool.
pub fn player_at_position<'a>(ranked: &[&'a Player], position: u32) -> Option<&'a Player> {
    let idx = usize::try_from(position).ok()?.checked_sub(1)?;
    ranked.get(idx).copied()
}

/// Eligible, ranked roster of `team` for `division`. Index 0 plays position 1.
pub fn position_roster(team: &Team, division: Division) -> Vec<&Player> {
    rank_players(&eligible_players(&team.players, division))
}
