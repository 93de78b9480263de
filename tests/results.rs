//! Integration tests for recording individual match results.

mod common;

use chrono::{TimeZone, Utc};
use tennis_team_web::{
    cancel_team_match, generate_individual_matches, generate_tournament_matches, record_result,
    record_result_at, record_tournament_result, start_match, start_tournament_match, Division,
    IndividualMatch, MatchStatus, RecordOutcome, RecordPolicy, Side, TeamMatchStatus,
    Tournament, TournamentConfig, TournamentError,
};
use uuid::Uuid;

fn six_matches() -> Vec<IndividualMatch> {
    let teams: Vec<_> = (0..3).map(|_| Uuid::new_v4()).collect();
    let cfg = TournamentConfig {
        divisions: vec![Division::BoysSingles],
        positions_per_division: 2,
        ..TournamentConfig::default()
    };
    generate_individual_matches(Uuid::new_v4(), &teams, &cfg)
}

#[test]
fn recording_completes_only_the_target() {
    let matches = six_matches();
    let target = matches[2].id;
    let at = Utc.with_ymd_and_hms(2026, 4, 11, 15, 30, 0).unwrap();
    let recorded =
        record_result_at(&matches, target, Side::Home, " 6-4,6-3 ", RecordPolicy::Permissive, at)
            .unwrap();

    assert_eq!(recorded.outcome, RecordOutcome::Applied);
    for (before, after) in matches.iter().zip(&recorded.matches) {
        if before.id == target {
            assert_eq!(after.status, MatchStatus::Completed);
            assert_eq!(after.winner, Some(Side::Home));
            assert_eq!(after.score.as_deref(), Some("6-4,6-3"));
            assert_eq!(after.completed_at, Some(at));
        } else {
            assert_eq!(before, after);
        }
    }
    // Input untouched.
    assert!(matches.iter().all(|m| m.status == MatchStatus::Pending));
}

#[test]
fn recording_the_same_result_twice_is_idempotent() {
    let matches = six_matches();
    let target = matches[0].id;
    for policy in [RecordPolicy::Permissive, RecordPolicy::Strict] {
        let once = record_result(&matches, target, Side::Away, "4-6, 2-6", policy).unwrap();
        let twice = record_result(&once.matches, target, Side::Away, "4-6, 2-6", policy).unwrap();
        assert_eq!(twice.outcome, RecordOutcome::Unchanged);
        assert_eq!(once.matches, twice.matches);
    }
}

#[test]
fn permissive_unknown_match_is_a_reported_no_op() {
    let matches = six_matches();
    let recorded =
        record_result(&matches, Uuid::new_v4(), Side::Home, "6-0,6-0", RecordPolicy::Permissive)
            .unwrap();
    assert_eq!(recorded.outcome, RecordOutcome::NotFound);
    assert_eq!(recorded.matches, matches);
}

#[test]
fn strict_unknown_match_is_an_error() {
    let matches = six_matches();
    let missing = Uuid::new_v4();
    assert_eq!(
        record_result(&matches, missing, Side::Home, "6-0,6-0", RecordPolicy::Strict).unwrap_err(),
        TournamentError::MatchNotFound(missing)
    );
}

#[test]
fn permissive_overwrites_a_completed_match() {
    let matches = six_matches();
    let target = matches[1].id;
    let first = record_result(&matches, target, Side::Home, "6-4,6-4", RecordPolicy::Permissive).unwrap();
    let second =
        record_result(&first.matches, target, Side::Away, "4-6,4-6", RecordPolicy::Permissive).unwrap();
    assert_eq!(second.outcome, RecordOutcome::Overwritten);
    let m = second.matches.iter().find(|m| m.id == target).unwrap();
    assert_eq!(m.winner, Some(Side::Away));
    assert_eq!(m.score.as_deref(), Some("4-6,4-6"));
}

#[test]
fn strict_refuses_conflicting_re_recording() {
    let matches = six_matches();
    let target = matches[1].id;
    let first = record_result(&matches, target, Side::Home, "6-4,6-4", RecordPolicy::Strict).unwrap();
    assert_eq!(
        record_result(&first.matches, target, Side::Away, "4-6,4-6", RecordPolicy::Strict).unwrap_err(),
        TournamentError::AlreadyCompleted(target)
    );
}

#[test]
fn strict_checks_score_against_winner() {
    let matches = six_matches();
    let target = matches[0].id;
    assert!(matches!(
        record_result(&matches, target, Side::Home, "3-6,4-6", RecordPolicy::Strict),
        Err(TournamentError::ScoreMismatch { .. })
    ));
    assert!(matches!(
        record_result(&matches, target, Side::Home, "won easily", RecordPolicy::Strict),
        Err(TournamentError::InvalidScore(_))
    ));
    // Permissive stores free-form scores as given.
    assert!(record_result(&matches, target, Side::Home, "won easily", RecordPolicy::Permissive).is_ok());
}

#[test]
fn empty_score_is_rejected_under_any_policy() {
    let matches = six_matches();
    for policy in [RecordPolicy::Permissive, RecordPolicy::Strict] {
        assert!(matches!(
            record_result(&matches, matches[0].id, Side::Home, "   ", policy),
            Err(TournamentError::InvalidScore(_))
        ));
    }
}

#[test]
fn start_match_moves_pending_to_in_progress() {
    let matches = six_matches();
    let target = matches[3].id;
    let started = start_match(&matches, target).unwrap();
    let m = started.iter().find(|m| m.id == target).unwrap();
    assert_eq!(m.status, MatchStatus::InProgress);
    assert!(m.winner.is_none());

    let done = record_result(&started, target, Side::Home, "6-1,6-1", RecordPolicy::Strict).unwrap();
    assert_eq!(
        start_match(&done.matches, target).unwrap_err(),
        TournamentError::AlreadyCompleted(target)
    );
    let missing = Uuid::new_v4();
    assert_eq!(
        start_match(&matches, missing).unwrap_err(),
        TournamentError::MatchNotFound(missing)
    );
}

#[test]
fn tournament_recording_refreshes_team_match_status() {
    let cfg = TournamentConfig {
        divisions: vec![Division::BoysSingles],
        positions_per_division: 2,
        policy: RecordPolicy::Strict,
    };
    let mut t = Tournament::with_teams("Dual", cfg, common::schools(2, 2, 0)).unwrap();
    generate_tournament_matches(&mut t).unwrap();
    assert_eq!(t.team_matches[0].status, TeamMatchStatus::Scheduled);

    let (first, second) = (t.matches[0].id, t.matches[1].id);
    start_tournament_match(&mut t, first).unwrap();
    assert_eq!(t.team_matches[0].status, TeamMatchStatus::InProgress);

    record_tournament_result(&mut t, first, Side::Home, "6-2,6-2").unwrap();
    assert_eq!(t.team_matches[0].status, TeamMatchStatus::InProgress);
    record_tournament_result(&mut t, second, Side::Away, "2-6,6-7(3)").unwrap();
    assert_eq!(t.team_matches[0].status, TeamMatchStatus::Completed);
}

#[test]
fn rating_changes_are_refused_mid_match() {
    let cfg = TournamentConfig {
        divisions: vec![Division::BoysSingles],
        positions_per_division: 1,
        ..TournamentConfig::default()
    };
    let mut t = Tournament::with_teams("Ratings", cfg, common::schools(2, 1, 0)).unwrap();
    generate_tournament_matches(&mut t).unwrap();
    let team = t.teams[0].id;
    let player = t.teams[0].players[0].id;
    let match_id = t.matches[0].id;

    t.set_player_rating(team, player, Some(12.5)).unwrap();
    start_tournament_match(&mut t, match_id).unwrap();
    assert_eq!(
        t.set_player_rating(team, player, Some(13.0)),
        Err(TournamentError::PlayerInPlay(player))
    );
    assert!(t.set_player_rating(team, player, Some(f64::NAN)).is_err());
}

#[test]
fn cancelled_team_match_stays_cancelled_after_results() {
    let cfg = TournamentConfig {
        divisions: vec![Division::BoysSingles],
        positions_per_division: 2,
        ..TournamentConfig::default()
    };
    let mut t = Tournament::with_teams("Rained Out", cfg, common::schools(2, 2, 0)).unwrap();
    generate_tournament_matches(&mut t).unwrap();
    let tm = t.team_matches[0].id;
    cancel_team_match(&mut t, tm).unwrap();
    assert_eq!(t.team_matches[0].status, TeamMatchStatus::Cancelled);

    let (first, second) = (t.matches[0].id, t.matches[1].id);
    start_tournament_match(&mut t, first).unwrap();
    record_tournament_result(&mut t, first, Side::Home, "6-2,6-2").unwrap();
    record_tournament_result(&mut t, second, Side::Home, "6-2,6-2").unwrap();
    assert_eq!(t.team_matches[0].status, TeamMatchStatus::Cancelled);

    let missing = Uuid::new_v4();
    assert_eq!(
        cancel_team_match(&mut t, missing),
        Err(TournamentError::TeamMatchNotFound(missing))
    );
}
