//! Integration tests for division eligibility and position ranking.

mod common;

use tennis_team_web::{
    eligible_players, player_at_position, position_roster, rank_players, Division, Gender,
    Player, Team, TeamLevel,
};

fn mixed_roster() -> Vec<Player> {
    vec![
        Player::new("Alex").with_gender(Gender::Male).with_rating(8.0),
        Player::new("Bea").with_gender(Gender::Female).with_rating(9.5),
        Player::new("Casey"),
        Player::new("Dan").with_gender(Gender::Male),
        Player::new("Eve").with_gender(Gender::Female).with_rating(4.0),
    ]
}

fn names(players: &[&Player]) -> Vec<String> {
    players.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn boys_divisions_take_only_male_players() {
    let roster = mixed_roster();
    for d in [Division::BoysSingles, Division::BoysDoubles] {
        assert_eq!(names(&eligible_players(&roster, d)), ["Alex", "Dan"]);
    }
}

#[test]
fn girls_divisions_take_only_female_players() {
    let roster = mixed_roster();
    for d in [Division::GirlsSingles, Division::GirlsDoubles] {
        assert_eq!(names(&eligible_players(&roster, d)), ["Bea", "Eve"]);
    }
}

#[test]
fn mixed_doubles_admits_everyone_including_unset_gender() {
    let roster = mixed_roster();
    let eligible = eligible_players(&roster, Division::MixedDoubles);
    assert_eq!(eligible.len(), roster.len());
    assert!(eligible.iter().any(|p| p.gender.is_none()));
}

#[test]
fn eligible_pool_is_subset_of_roster_for_every_division() {
    let roster = mixed_roster();
    for d in Division::ALL {
        for p in eligible_players(&roster, d) {
            assert!(roster.iter().any(|r| r.id == p.id));
            assert!(d.gender_affinity().admits(p.gender));
        }
    }
}

#[test]
fn ranking_is_by_rating_descending_with_missing_as_zero() {
    let roster = mixed_roster();
    let pool: Vec<&Player> = roster.iter().collect();
    let ranked = rank_players(&pool);
    assert_eq!(names(&ranked), ["Bea", "Alex", "Eve", "Casey", "Dan"]);
}

#[test]
fn equal_ratings_keep_roster_order() {
    let roster = vec![
        Player::new("First").with_rating(5.0),
        Player::new("Second").with_rating(7.0),
        Player::new("Third").with_rating(5.0),
    ];
    let pool: Vec<&Player> = roster.iter().collect();
    assert_eq!(names(&rank_players(&pool)), ["Second", "First", "Third"]);
}

#[test]
fn player_at_position_is_one_based_and_bounded() {
    let roster = mixed_roster();
    let pool: Vec<&Player> = roster.iter().collect();
    let ranked = rank_players(&pool);
    assert_eq!(player_at_position(&ranked, 1).map(|p| p.name.as_str()), Some("Bea"));
    assert_eq!(player_at_position(&ranked, 5).map(|p| p.name.as_str()), Some("Dan"));
    assert!(player_at_position(&ranked, 6).is_none());
    assert!(player_at_position(&ranked, 0).is_none());
}

#[test]
fn position_roster_combines_filter_and_ranking() {
    let team = Team::new("Lincoln", TeamLevel::Jv).with_players(mixed_roster());
    let boys = position_roster(&team, Division::BoysSingles);
    assert_eq!(names(&boys), ["Alex", "Dan"]);
    let girls = position_roster(&team, Division::GirlsDoubles);
    assert_eq!(names(&girls), ["Bea", "Eve"]);
}

#[test]
fn division_names_round_trip_through_strings() {
    for d in Division::ALL {
        assert_eq!(d.to_string().parse::<Division>().unwrap(), d);
    }
    assert!("coed_singles".parse::<Division>().is_err());
    assert_eq!(Division::MixedDoubles.players_per_side(), 2);
    assert_eq!(Division::GirlsSingles.players_per_side(), 1);
}

#[test]
fn fixture_ratings_rank_in_roster_order() {
    let team = common::school("Central", 3, 0);
    let ranked = position_roster(&team, Division::BoysSingles);
    assert_eq!(names(&ranked), ["Central B0", "Central B1", "Central B2"]);
}
