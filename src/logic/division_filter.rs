//! Division eligibility: which rostered players may play a division.

use crate::models::{Division, Player};

/// Players on `roster` admitted to `division`, in roster order.
///
/// Boys divisions take male players, girls divisions female players and mixed doubles anyone,
/// including players whose gender was never recorded.
pub fn eligible_players(roster: &[Player], division: Division) -> Vec<&Player> {
    let affinity = division.gender_affinity();
    roster.iter().filter(|p| affinity.admits(p.gender)).collect()
}
