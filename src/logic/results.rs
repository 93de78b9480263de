//! Recording individual match results.

use crate::models::{
    IndividualMatch, MatchId, MatchStatus, RecordPolicy, Score, Side, Tournament,
    TournamentError,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What a recording call did to the target match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// The match went from pending/in progress to completed.
    Applied,
    /// A completed match received a different result (permissive only).
    Overwritten,
    /// The match already held this exact result.
    Unchanged,
    /// No match with that id (permissive only); nothing changed.
    NotFound,
}

/// Updated match set plus what happened to the target.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub matches: Vec<IndividualMatch>,
    pub outcome: RecordOutcome,
}

/// Record `winner` and `score` on `match_id`, completing it now.
pub fn record_result(
    matches: &[IndividualMatch],
    match_id: MatchId,
    winner: Side,
    score: &str,
    policy: RecordPolicy,
) -> Result<Recorded, TournamentError> {
    record_result_at(matches, match_id, winner, score, policy, Utc::now())
}

/// Like [`record_result`] with an explicit completion time.
///
/// Returns a new collection; every match other than the target is copied unchanged.
pub fn record_result_at(
    matches: &[IndividualMatch],
    match_id: MatchId,
    winner: Side,
    score: &str,
    policy: RecordPolicy,
    now: DateTime<Utc>,
) -> Result<Recorded, TournamentError> {
    let score = score.trim();
    if score.is_empty() {
        return Err(TournamentError::InvalidScore("score is empty".to_string()));
    }

    let Some(target) = matches.iter().find(|m| m.id == match_id) else {
        return match policy {
            RecordPolicy::Strict => Err(TournamentError::MatchNotFound(match_id)),
            RecordPolicy::Permissive => {
                log::warn!("Ignoring result for unknown match {match_id}");
                Ok(Recorded {
                    matches: matches.to_vec(),
                    outcome: RecordOutcome::NotFound,
                })
            }
        };
    };

    if policy == RecordPolicy::Strict {
        let parsed = Score::parse(score)?;
        if parsed.winner() != Some(winner) {
            return Err(TournamentError::ScoreMismatch {
                score: score.to_string(),
            });
        }
    }

    let outcome = if !target.is_completed() {
        RecordOutcome::Applied
    } else if target.winner == Some(winner) && target.score.as_deref() == Some(score) {
        RecordOutcome::Unchanged
    } else if policy == RecordPolicy::Strict {
        return Err(TournamentError::AlreadyCompleted(match_id));
    } else {
        log::warn!("Overwriting completed result of match {match_id}");
        RecordOutcome::Overwritten
    };

    let updated = matches
        .iter()
        .map(|m| {
            if m.id != match_id || outcome == RecordOutcome::Unchanged {
                return m.clone();
            }
            let mut m = m.clone();
            m.status = MatchStatus::Completed;
            m.winner = Some(winner);
            m.score = Some(score.to_string());
            m.completed_at = Some(now);
            m
        })
        .collect();

    log::info!("Match {match_id}: {winner:?} won {score} ({outcome:?})");
    Ok(Recorded {
        matches: updated,
        outcome,
    })
}

/// Mark a pending match as in progress.
pub fn start_match(
    matches: &[IndividualMatch],
    match_id: MatchId,
) -> Result<Vec<IndividualMatch>, TournamentError> {
    let target = matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if target.is_completed() {
        return Err(TournamentError::AlreadyCompleted(match_id));
    }
    Ok(matches
        .iter()
        .map(|m| {
            let mut m = m.clone();
            if m.id == match_id {
                m.status = MatchStatus::InProgress;
            }
            m
        })
        .collect())
}

/// Record a result on a tournament using its configured policy, then refresh team-match status.
pub fn record_tournament_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    winner: Side,
    score: &str,
) -> Result<RecordOutcome, TournamentError> {
    let recorded = record_result(
        &tournament.matches,
        match_id,
        winner,
        score,
        tournament.config.policy,
    )?;
    tournament.matches = recorded.matches;
    refresh_team_matches(tournament);
    Ok(recorded.outcome)
}

/// Start a match on a tournament, then refresh team-match status.
pub fn start_tournament_match(
    tournament: &mut Tournament,
    match_id: MatchId,
) -> Result<(), TournamentError> {
    tournament.matches = start_match(&tournament.matches, match_id)?;
    refresh_team_matches(tournament);
    Ok(())
}

fn refresh_team_matches(tournament: &mut Tournament) {
    let matches = &tournament.matches;
    for tm in &mut tournament.team_matches {
        tm.refresh_status(matches);
    }
}
